//! Records owned by the upstream catalogs
//!
//! Only the ID is typed. Every other field, display names included, stays
//! in `attributes` exactly as received, so full records pass through
//! unchanged and a name of an unexpected type never fails decoding.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::id::opaque;

const NAME: &str = "nombre";
const PATERNAL_SURNAME: &str = "apellido_paterno";
const MATERNAL_SURNAME: &str = "apellido_materno";

/// Records that can be indexed by their natural identifier
pub trait Keyed {
    fn key(&self) -> &str;
}

/// Text value of an attribute; missing, `null`, or non-string reads as `None`
fn text<'a>(attributes: &'a Map<String, Value>, key: &str) -> Option<&'a str> {
    attributes.get(key).and_then(Value::as_str)
}

/// Person from the persons registry, keyed by `id_persona`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Person {
    #[serde(rename = "id_persona", deserialize_with = "opaque")]
    pub id: String,

    #[serde(flatten)]
    pub attributes: Map<String, Value>,
}

impl Person {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            attributes: Map::new(),
        }
    }

    pub fn with_names(mut self, first: &str, paternal: &str, maternal: &str) -> Self {
        for (key, value) in [
            (NAME, first),
            (PATERNAL_SURNAME, paternal),
            (MATERNAL_SURNAME, maternal),
        ] {
            self.attributes.insert(key.to_owned(), Value::from(value));
        }
        self
    }

    /// First name followed by both surnames, single-space separated.
    ///
    /// Absent or blank parts are skipped rather than leaving double spaces.
    pub fn full_name(&self) -> String {
        [NAME, PATERNAL_SURNAME, MATERNAL_SURNAME]
            .into_iter()
            .filter_map(|key| text(&self.attributes, key).map(str::trim))
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl Keyed for Person {
    fn key(&self) -> &str {
        &self.id
    }
}

/// Profession from the professions catalog, keyed by `id_profesion`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profession {
    #[serde(rename = "id_profesion", deserialize_with = "opaque")]
    pub id: String,

    #[serde(flatten)]
    pub attributes: Map<String, Value>,
}

impl Profession {
    pub fn new(id: impl Into<String>, name: &str) -> Self {
        let mut attributes = Map::new();
        attributes.insert(NAME.to_owned(), Value::from(name));
        Self {
            id: id.into(),
            attributes,
        }
    }

    pub fn display_name(&self) -> &str {
        text(&self.attributes, NAME).unwrap_or_default()
    }
}

impl Keyed for Profession {
    fn key(&self) -> &str {
        &self.id
    }
}

/// Status from the status catalog, keyed by `idStatus`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Status {
    #[serde(rename = "idStatus", deserialize_with = "opaque")]
    pub id: String,

    #[serde(flatten)]
    pub attributes: Map<String, Value>,
}

impl Status {
    pub fn new(id: impl Into<String>, name: &str) -> Self {
        let mut attributes = Map::new();
        attributes.insert(NAME.to_owned(), Value::from(name));
        Self {
            id: id.into(),
            attributes,
        }
    }

    pub fn display_name(&self) -> &str {
        text(&self.attributes, NAME).unwrap_or_default()
    }
}

impl Keyed for Status {
    fn key(&self) -> &str {
        &self.id
    }
}

/// The three upstream collections captured for one aggregated read
#[derive(Debug, Clone, Default)]
pub struct Snapshot {
    pub persons: Vec<Person>,
    pub professions: Vec<Profession>,
    pub statuses: Vec<Status>,
}
