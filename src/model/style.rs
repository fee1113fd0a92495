//! Stylesheet for the rendering widget — loaded and handed off as-is.

use serde::{Deserialize, Serialize};
use super::PropertyMap;

/// Ordered sequence of style rules, independent of the graph data lifecycle.
///
/// Serializes transparently as the flat rule array the widget consumes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Stylesheet {
    rules: Vec<StyleRule>,
}

/// One selector/property mapping. The property values are opaque to this
/// core; only the `selector` key is required.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StyleRule {
    pub selector: String,
    #[serde(default)]
    pub style: PropertyMap,
    #[serde(flatten)]
    pub extra: PropertyMap,
}

impl Stylesheet {
    pub fn new(rules: Vec<StyleRule>) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &[StyleRule] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
