//! The `fabric.mod.json` metadata descriptor.
//!
//! Descriptors are schemaless here on purpose: the output copies every
//! key through verbatim, so the parse target is an ordered JSON map
//! rather than a fixed struct. Only `id` and `icon` get dedicated
//! accessors because the pipeline itself needs them.

use anyhow::{Result, bail};
use serde_json::{Map, Value};

/// Fixed name of the metadata entry inside every Fabric mod jar.
pub const DESCRIPTOR_ENTRY: &str = "fabric.mod.json";

/// A parsed descriptor: the raw key-value pairs of `fabric.mod.json`.
#[derive(Debug, Clone)]
pub struct Descriptor {
    fields: Map<String, Value>,
}

impl Descriptor {
    /// Parse descriptor bytes. The root must be a JSON object.
    pub fn parse(bytes: &[u8]) -> Result<Self> {
        let value: Value = serde_json::from_slice(bytes)?;
        match value {
            Value::Object(fields) => Ok(Self { fields }),
            other => bail!("descriptor root is not an object: {other}"),
        }
    }

    pub fn has(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    /// Raw value of a key, if present.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// String value of a key; `None` for absent or non-string values.
    pub fn str_field(&self, key: &str) -> Option<&str> {
        self.fields.get(key).and_then(Value::as_str)
    }

    /// The mod's `id`. Required downstream: a descriptor without one
    /// gets its whole archive skipped.
    pub fn id(&self) -> Option<&str> {
        self.str_field("id")
    }

    /// Declared icon path inside the archive, if any.
    pub fn icon(&self) -> Option<&str> {
        self.str_field("icon")
    }

    /// All key-value pairs in declaration order, for copy-through.
    pub fn fields(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.fields.iter()
    }
}
