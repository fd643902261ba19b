//! Records declared at runtime from a TOML manifest.
//!
//! ```toml
//! [[field]]
//! name = "EthernetDevice"
//! kind = "string"
//! default = "eth0"
//! description = "Specify NIC to configure"
//!
//! [[field]]
//! name = "PortNumber"
//! kind = "int"
//! default = 80
//! ```
//!
//! `default` may be written as a string or as a TOML integer, float, or
//! boolean; it is kept as a literal and coerced like any other default.
//! Kinds are checked when the record is loaded, not when it is parsed.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use toml::Table;

use crate::error::LoadError;
use crate::kind::{FieldKind, Value};
use crate::record::{Fields, Record};

#[derive(Debug, Deserialize)]
struct Manifest {
    #[serde(default, rename = "field")]
    fields: Vec<FieldSpec>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct FieldSpec {
    name: String,
    kind: String,
    #[serde(default)]
    default: Option<toml::Value>,
    #[serde(default)]
    description: String,
}

#[derive(Debug, Clone)]
struct Entry {
    name: String,
    kind: String,
    default: String,
    description: String,
    value: Value,
}

/// A record whose fields are declared by a manifest instead of a struct.
#[derive(Debug, Clone, Default)]
pub struct DynamicRecord {
    entries: Vec<Entry>,
}

impl DynamicRecord {
    /// Parse a manifest from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, LoadError> {
        Self::parse(content, Path::new("<inline>"))
    }

    /// Read and parse a manifest file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| LoadError::IoError {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::parse(&content, path)
    }

    fn parse(content: &str, path: &Path) -> Result<Self, LoadError> {
        let manifest: Manifest = toml::from_str(content).map_err(|e| LoadError::ManifestParse {
            path: PathBuf::from(path),
            source: e,
        })?;

        let entries = manifest
            .fields
            .into_iter()
            .map(|spec| {
                let default = match spec.default {
                    None => String::new(),
                    Some(value) => default_literal(&spec.name, value)?,
                };
                let value = FieldKind::from_name(&spec.kind)
                    .map(FieldKind::zero)
                    .unwrap_or_else(|| FieldKind::String.zero());
                Ok(Entry {
                    name: spec.name,
                    kind: spec.kind,
                    default,
                    description: spec.description,
                    value,
                })
            })
            .collect::<Result<Vec<_>, LoadError>>()?;

        Ok(Self { entries })
    }

    /// Value of the named field. Before a load this is the kind's zero value.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.entries
            .iter()
            .find(|e| e.name == name)
            .map(|e| &e.value)
    }

    /// Fields and their values, in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|e| (e.name.as_str(), &e.value))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Export the current values as a TOML table keyed by field name.
    pub fn to_table(&self) -> Table {
        self.iter()
            .map(|(name, value)| (name.to_string(), toml::Value::from(value.clone())))
            .collect()
    }
}

impl Record for DynamicRecord {
    fn fields(&mut self) -> Fields<'_> {
        self.entries.iter_mut().fold(Fields::new(), |fields, e| {
            fields.dynamic(
                e.name.clone(),
                &e.kind,
                e.default.clone(),
                e.description.clone(),
                &mut e.value,
            )
        })
    }
}

/// Scalar TOML defaults become literals; tables and arrays are rejected.
fn default_literal(field: &str, value: toml::Value) -> Result<String, LoadError> {
    match value {
        toml::Value::String(s) => Ok(s),
        toml::Value::Integer(i) => Ok(i.to_string()),
        toml::Value::Float(f) => Ok(f.to_string()),
        toml::Value::Boolean(b) => Ok(b.to_string()),
        other => Err(LoadError::InvalidManifest {
            field: field.to_string(),
            reason: format!("default must be a scalar, found {}", other.type_str()),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    const SETTINGS: &str = r#"
        [[field]]
        name = "EthernetDevice"
        kind = "string"
        default = "eth0"
        description = "Specify NIC to configure"

        [[field]]
        name = "PortNumber"
        kind = "int"
        default = 80

        [[field]]
        name = "Verbose"
        kind = "bool"
        default = true

        [[field]]
        name = "Ratio"
        kind = "float"
        default = "0.5"
    "#;

    #[test]
    fn parses_fields_in_order() {
        let record = DynamicRecord::from_toml(SETTINGS).unwrap();
        let names: Vec<&str> = record.iter().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["EthernetDevice", "PortNumber", "Verbose", "Ratio"]);
    }

    #[test]
    fn values_start_at_zero() {
        let record = DynamicRecord::from_toml(SETTINGS).unwrap();
        assert_eq!(record.get("EthernetDevice"), Some(&Value::String(String::new())));
        assert_eq!(record.get("PortNumber"), Some(&Value::Int(0)));
        assert_eq!(record.get("Verbose"), Some(&Value::Bool(false)));
        assert_eq!(record.get("Missing"), None);
    }

    #[test]
    fn scalar_defaults_become_literals() {
        let record = DynamicRecord::from_toml(SETTINGS).unwrap();
        assert_eq!(record.entries[1].default, "80");
        assert_eq!(record.entries[2].default, "true");
        assert_eq!(record.entries[3].default, "0.5");
    }

    #[test]
    fn table_default_rejected() {
        let err = DynamicRecord::from_toml(
            r#"
            [[field]]
            name = "Hosts"
            kind = "string"
            default = ["a", "b"]
            "#,
        )
        .unwrap_err();
        assert!(matches!(err, LoadError::InvalidManifest { ref field, .. } if field == "Hosts"));
    }

    #[test]
    fn malformed_manifest_reports_parse_error() {
        let err = DynamicRecord::from_toml("[[field]]\nname = ").unwrap_err();
        assert!(matches!(err, LoadError::ManifestParse { .. }));
    }

    #[test]
    fn unknown_entry_key_rejected() {
        let err = DynamicRecord::from_toml(
            "[[field]]\nname = \"Port\"\nkind = \"int\"\ntypo = 1\n",
        )
        .unwrap_err();
        assert!(matches!(err, LoadError::ManifestParse { .. }));
    }

    #[test]
    fn empty_manifest_parses_to_empty_record() {
        let record = DynamicRecord::from_toml("").unwrap();
        assert!(record.is_empty());
    }

    #[test]
    fn unsupported_kind_parses_but_is_kept() {
        let mut record = DynamicRecord::from_toml(
            "[[field]]\nname = \"Hosts\"\nkind = \"[]string\"\n",
        )
        .unwrap();
        assert_eq!(record.len(), 1);
        assert_eq!(record.fields().len(), 1);
    }

    #[test]
    fn loads_from_path() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("settings.toml");
        fs::write(&path, SETTINGS).unwrap();
        let record = DynamicRecord::from_path(&path).unwrap();
        assert_eq!(record.len(), 4);
    }

    #[test]
    fn missing_path_reports_io_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nope.toml");
        let err = DynamicRecord::from_path(&path).unwrap_err();
        assert!(matches!(err, LoadError::IoError { path: ref p, .. } if p == &path));
    }

    #[test]
    fn loaded_values_read_through_typed_accessors() {
        let mut record = DynamicRecord::from_toml(SETTINGS).unwrap();
        crate::builder::ArgEnv::builder()
            .env_vars([("RATIO", "0.25")])
            .arg_surface(crate::surface::MapArgs::new([("ethernet-device", "eth1")]))
            .load(&mut record)
            .unwrap();

        let device = record.get("EthernetDevice").unwrap();
        assert_eq!(device.as_str(), Some("eth1"));
        assert_eq!(device.as_int(), None);
        assert_eq!(record.get("PortNumber").and_then(Value::as_int), Some(80));
        assert_eq!(record.get("Verbose").and_then(Value::as_bool), Some(true));
        assert_eq!(record.get("Ratio").and_then(Value::as_float), Some(0.25));
        assert_eq!(record.get("Ratio").and_then(Value::as_str), None);
    }

    #[test]
    fn to_table_exports_values() {
        let record = DynamicRecord::from_toml(SETTINGS).unwrap();
        let table = record.to_table();
        assert_eq!(table["PortNumber"].as_integer(), Some(0));
        assert_eq!(table["EthernetDevice"].as_str(), Some(""));
    }
}
