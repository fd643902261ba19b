//! Field descriptors: one per record field, built once per load.

use std::collections::{HashMap, HashSet};

use crate::error::LoadError;
use crate::kind::FieldKind;
use crate::names;
use crate::record::{Binding, Fields, Slot};
use crate::surface::FlagSpec;

/// A record field with its derived surface names and live storage.
#[derive(Debug)]
pub struct FieldDescriptor<'a> {
    pub name: String,
    pub env_name: String,
    pub flag_name: String,
    pub kind: FieldKind,
    pub description: String,
    pub default_literal: String,
    pub(crate) slot: Slot<'a>,
}

impl FieldDescriptor<'_> {
    /// Registration for the argument surface. The default is the coerced
    /// literal (or the kind's zero value), so the surface never sees an
    /// unparseable default.
    pub fn flag_spec(&self) -> FlagSpec {
        let default = self
            .kind
            .coerce(&self.default_literal)
            .unwrap_or_else(|| self.kind.zero())
            .to_string();
        FlagSpec {
            name: self.flag_name.clone(),
            field: self.name.clone(),
            kind: self.kind,
            default,
            description: self.description.clone(),
        }
    }
}

/// Build descriptors from a record's schema, in declaration order.
///
/// Rejects empty schemas, empty field names, unsupported kinds, and two
/// fields deriving the same flag or environment name.
pub fn describe(fields: Fields<'_>) -> Result<Vec<FieldDescriptor<'_>>, LoadError> {
    if fields.is_empty() {
        return Err(LoadError::EmptyRecord);
    }

    let entries = fields.into_entries();
    let mut descriptors = Vec::with_capacity(entries.len());
    let mut flags: HashSet<String> = HashSet::new();
    let mut envs: HashMap<String, String> = HashMap::new();

    for (index, field) in entries.into_iter().enumerate() {
        if field.name.is_empty() {
            return Err(LoadError::InvalidFieldName { index });
        }

        let slot = match field.binding {
            Binding::Slot(slot) => slot,
            Binding::Unsupported(kind) => {
                return Err(LoadError::UnsupportedKind {
                    field: field.name,
                    kind,
                });
            }
        };

        let derived = names::derive(&field.name);

        if !flags.insert(derived.flag.clone()) {
            return Err(LoadError::DuplicateFlag {
                flag: derived.flag,
                field: field.name,
            });
        }
        if let Some(first) = envs.insert(derived.env.clone(), field.name.clone()) {
            return Err(LoadError::DuplicateEnv {
                env: derived.env,
                first,
                second: field.name,
            });
        }

        descriptors.push(FieldDescriptor {
            kind: slot.kind(),
            name: field.name,
            env_name: derived.env,
            flag_name: derived.flag,
            description: field.description,
            default_literal: field.default,
            slot,
        });
    }

    Ok(descriptors)
}
