//! Asset type catalog backing the "Add node" form's dropdowns.
//!
//! `type_config.json` maps an asset kind (e.g. `"Resource"`, `"Operator"`)
//! to its table of concrete types. The core only lists kinds and type names;
//! the table contents stay opaque.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::Result;
use crate::model::PropertyMap;
use crate::store::fs::read_json;

/// File name of the catalog document.
pub const TYPE_CONFIG_FILE: &str = "type_config.json";

/// The parsed catalog. BTreeMap keeps kind listings in a stable order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AssetTypes(BTreeMap<String, PropertyMap>);

impl AssetTypes {
    /// Load the catalog from a `type_config.json` document.
    ///
    /// Same error mapping as the collection loaders: absent file ⇒
    /// `NotFound`, malformed content ⇒ `Parse`.
    pub fn load(path: &Path) -> Result<Self> {
        read_json(path)
    }

    /// The asset kinds the catalog knows about.
    pub fn kinds(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Dropdown options for one kind: the names of its concrete types.
    /// `None` when the kind is not in the catalog.
    pub fn options(&self, kind: &str) -> Option<Vec<&str>> {
        self.0
            .get(kind)
            .map(|table| table.keys().map(String::as_str).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn lists_kinds_and_their_options() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(TYPE_CONFIG_FILE);
        fs::write(
            &path,
            r#"{
                "Resource": {"Lathe": {"axes": 3}, "Mill": {"axes": 5}},
                "Operator": {"Welder": {}}
            }"#,
        )
        .unwrap();

        let types = AssetTypes::load(&path).unwrap();
        let kinds: Vec<_> = types.kinds().collect();
        assert_eq!(kinds, vec!["Operator", "Resource"]);
        assert_eq!(types.options("Resource").unwrap(), vec!["Lathe", "Mill"]);
        assert!(types.options("Robot").is_none());
    }

    #[test]
    fn absent_catalog_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let err = AssetTypes::load(&dir.path().join(TYPE_CONFIG_FILE)).unwrap_err();
        assert!(matches!(err, crate::Error::NotFound(_)), "got {err:?}");
    }
}
