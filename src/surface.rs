//! The argument surface: flag registration, parsing, and help rendering.
//!
//! The loader only talks to [`ArgSurface`]. The clap-backed implementation
//! lives in the `cli` module; [`MapArgs`] is an in-memory surface for tests
//! and for builds without the `clap` feature.

use std::collections::{HashMap, HashSet};
use std::fmt;

use crate::error::LoadError;
use crate::kind::FieldKind;

/// A flag to register, derived from one field descriptor.
#[derive(Debug, Clone, PartialEq)]
pub struct FlagSpec {
    /// Flag name without leading dashes (`ethernet-device`).
    pub name: String,
    /// The field identifier the flag was derived from.
    pub field: String,
    pub kind: FieldKind,
    /// Canonical literal of the coerced default. Empty means no default.
    pub default: String,
    pub description: String,
}

/// One line of the environment listing in help output.
#[derive(Debug, Clone, PartialEq)]
pub struct UsageEntry {
    pub env_name: String,
    pub flag_name: String,
    pub description: String,
}

/// Environment-variable section appended to help output.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Usage {
    pub entries: Vec<UsageEntry>,
}

impl fmt::Display for Usage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Environment variables:")?;
        let width = self
            .entries
            .iter()
            .map(|e| e.env_name.chars().count())
            .max()
            .unwrap_or(0);
        for entry in &self.entries {
            if entry.description.is_empty() {
                write!(f, "\n  {}", entry.env_name)?;
            } else {
                write!(
                    f,
                    "\n  {:<width$}  {}",
                    entry.env_name, entry.description
                )?;
            }
        }
        Ok(())
    }
}

/// A command-line collaborator the loader registers flags with.
///
/// Registrations persist for the lifetime of the surface: loading twice
/// through the same surface re-registers every flag and fails with
/// [`LoadError::DuplicateFlag`].
pub trait ArgSurface {
    /// Whether `flag` is taken, either by an earlier registration or by the
    /// surface itself.
    fn is_registered(&self, flag: &str) -> bool;

    /// Register a flag. Fails if the name is already taken.
    fn register(&mut self, spec: FlagSpec) -> Result<(), LoadError>;

    /// Append entries to the environment listing shown with help output.
    fn extend_usage(&mut self, usage: Usage);

    /// Parse the argument vector against every registered flag.
    fn parse(&mut self) -> Result<(), LoadError>;

    /// Raw value for `flag` after parsing, falling back to its registered
    /// default. `None` if neither exists.
    fn value(&self, flag: &str) -> Option<String>;

    /// Render the help listing, including the environment section.
    fn render_help(&mut self) -> String;
}

/// In-memory argument surface mapping flag names to raw values.
///
/// Supplied values for flags that are never registered are ignored.
#[derive(Debug, Clone, Default)]
pub struct MapArgs {
    supplied: HashMap<String, String>,
    registered: Vec<FlagSpec>,
    names: HashSet<String>,
    usage: Usage,
}

impl MapArgs {
    pub fn new<K, V>(values: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            supplied: values
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
            ..Self::default()
        }
    }

    fn spec(&self, flag: &str) -> Option<&FlagSpec> {
        self.registered.iter().find(|s| s.name == flag)
    }
}

impl ArgSurface for MapArgs {
    fn is_registered(&self, flag: &str) -> bool {
        self.names.contains(flag)
    }

    fn register(&mut self, spec: FlagSpec) -> Result<(), LoadError> {
        if !self.names.insert(spec.name.clone()) {
            return Err(LoadError::DuplicateFlag {
                flag: spec.name,
                field: spec.field,
            });
        }
        self.registered.push(spec);
        Ok(())
    }

    fn extend_usage(&mut self, usage: Usage) {
        self.usage.entries.extend(usage.entries);
    }

    fn parse(&mut self) -> Result<(), LoadError> {
        tracing::trace!(
            supplied = self.supplied.len(),
            registered = self.registered.len(),
            "parsing in-memory arguments"
        );
        Ok(())
    }

    fn value(&self, flag: &str) -> Option<String> {
        let spec = self.spec(flag)?;
        match self.supplied.get(flag) {
            Some(raw) => Some(raw.clone()),
            None if !spec.default.is_empty() => Some(spec.default.clone()),
            None => None,
        }
    }

    fn render_help(&mut self) -> String {
        let mut out = String::from("Options:");
        for spec in &self.registered {
            out.push_str(&format!(
                "\n  --{} <{}>  {}",
                spec.name,
                spec.kind.placeholder(),
                spec.description
            ));
            if !spec.default.is_empty() {
                out.push_str(&format!(" [default: {}]", spec.default));
            }
        }
        out.push_str("\n\n");
        out.push_str(&self.usage.to_string());
        out
    }
}
