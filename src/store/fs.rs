//! File-backed store — the durable backend.
//!
//! One directory of flat JSON files, created and owned by an external
//! authoring tool. Every load reads the file fully (no caching across
//! calls); the only file ever written is `relations.json`, and the write is
//! a full overwrite routed through a same-directory temp file so a crash
//! mid-save cannot leave a truncated collection behind.

use std::fs;
use std::io::Write as _;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde::de::DeserializeOwned;
use tempfile::NamedTempFile;
use tracing::debug;

use crate::model::{Element, Node, Relation, Stylesheet};
use crate::{Error, Result};
use super::{Collection, PanStore};

/// File name of the stylesheet document.
pub const STYLESHEET_FILE: &str = "pan_stylesheet.json";

/// JSON-file store rooted at an asset directory.
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path(&self, file: &str) -> PathBuf {
        self.root.join(file)
    }
}

impl PanStore for FileStore {
    fn load_collection(&self, collection: Collection) -> Result<Vec<Element>> {
        let path = self.path(collection.file_name());
        debug!(%collection, path = %path.display(), "loading collection");

        let elements = match collection.category() {
            Some(category) => {
                let mut nodes: Vec<Node> = read_json(&path)?;
                // category lives on the file name, not in the file
                for node in &mut nodes {
                    node.category = category;
                }
                nodes.into_iter().map(Element::from).collect()
            }
            None => {
                let relations: Vec<Relation> = read_json(&path)?;
                relations.into_iter().map(Element::from).collect()
            }
        };
        Ok(elements)
    }

    fn save_collection(&self, collection: Collection, elements: &[Element]) -> Result<()> {
        let path = self.path(collection.file_name());
        debug!(%collection, count = elements.len(), path = %path.display(), "saving collection");
        write_json_atomic(&path, &elements)
    }

    fn load_stylesheet(&self) -> Result<Stylesheet> {
        let path = self.path(STYLESHEET_FILE);
        debug!(path = %path.display(), "loading stylesheet");
        read_json(&path)
    }
}

/// Read and parse one JSON document, with the crate's error mapping:
/// absent file ⇒ `NotFound`, unparseable or wrong-shaped content ⇒ `Parse`.
pub(crate) fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(Error::NotFound(path.display().to_string()));
        }
        Err(e) => return Err(Error::Io(e)),
    };
    serde_json::from_str(&content).map_err(|e| Error::Parse {
        origin: path.display().to_string(),
        message: e.to_string(),
    })
}

/// Serialize to a same-directory temp file, then rename over the target.
///
/// Pretty-printed with single-space indent, matching the files the external
/// authoring tool produces.
fn write_json_atomic<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let write_err = |message: String| Error::Write {
        target: path.display().to_string(),
        message,
    };

    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b" ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value
        .serialize(&mut serializer)
        .map_err(|e| write_err(e.to_string()))?;

    let dir = path.parent().unwrap_or_else(|| Path::new("."));
    let mut tmp = NamedTempFile::new_in(dir).map_err(|e| write_err(e.to_string()))?;
    tmp.write_all(&buf).map_err(|e| write_err(e.to_string()))?;
    tmp.persist(path).map_err(|e| write_err(e.to_string()))?;
    Ok(())
}
