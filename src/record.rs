//! Record introspection through an explicit, ordered schema.
//!
//! A settings struct implements [`Record`] by listing its fields, in
//! declaration order, with a writable borrow of each field's storage:
//!
//! ```ignore
//! struct MySettings {
//!     ethernet_device: String,
//!     port_number: i64,
//! }
//!
//! impl Record for MySettings {
//!     fn fields(&mut self) -> Fields<'_> {
//!         Fields::new()
//!             .string("EthernetDevice", "eth0", "Specify NIC to configure", &mut self.ethernet_device)
//!             .int("PortNumber", "80", "Port to listen on", &mut self.port_number)
//!     }
//! }
//! ```
//!
//! The loader consumes [`Fields`] uniformly; it never branches on the
//! concrete record type.

use crate::kind::{FieldKind, Value};

/// A structured value whose fields can be populated by a loader.
pub trait Record {
    /// List every configurable field, in declaration order.
    fn fields(&mut self) -> Fields<'_>;
}

/// Writable borrow of one field's storage.
#[derive(Debug)]
pub enum Slot<'a> {
    String(&'a mut String),
    Int(&'a mut i64),
    Bool(&'a mut bool),
    Float(&'a mut f64),
    /// Storage whose kind is fixed by the value it currently holds.
    Dynamic(&'a mut Value),
}

impl Slot<'_> {
    pub fn kind(&self) -> FieldKind {
        match self {
            Slot::String(_) => FieldKind::String,
            Slot::Int(_) => FieldKind::Int,
            Slot::Bool(_) => FieldKind::Bool,
            Slot::Float(_) => FieldKind::Float,
            Slot::Dynamic(v) => v.kind(),
        }
    }

    /// Store `value`. The value must have been coerced to this slot's kind;
    /// anything else is ignored.
    pub(crate) fn write(&mut self, value: Value) {
        debug_assert_eq!(self.kind(), value.kind());
        match (self, value) {
            (Slot::String(slot), Value::String(v)) => **slot = v,
            (Slot::Int(slot), Value::Int(v)) => **slot = v,
            (Slot::Bool(slot), Value::Bool(v)) => **slot = v,
            (Slot::Float(slot), Value::Float(v)) => **slot = v,
            (Slot::Dynamic(slot), v) if slot.kind() == v.kind() => **slot = v,
            _ => {}
        }
    }
}

/// How a field is bound to storage.
#[derive(Debug)]
pub(crate) enum Binding<'a> {
    Slot(Slot<'a>),
    /// A declared kind this crate cannot populate.
    Unsupported(String),
}

/// One declared field, before names are derived.
#[derive(Debug)]
pub struct Field<'a> {
    pub(crate) name: String,
    pub(crate) default: String,
    pub(crate) description: String,
    pub(crate) binding: Binding<'a>,
}

/// Ordered field schema of a record.
#[derive(Debug, Default)]
pub struct Fields<'a> {
    entries: Vec<Field<'a>>,
}

impl<'a> Fields<'a> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Add a field with an explicit slot.
    pub fn field(
        mut self,
        name: impl Into<String>,
        default: impl Into<String>,
        description: impl Into<String>,
        slot: Slot<'a>,
    ) -> Self {
        self.entries.push(Field {
            name: name.into(),
            default: default.into(),
            description: description.into(),
            binding: Binding::Slot(slot),
        });
        self
    }

    pub fn string(
        self,
        name: impl Into<String>,
        default: impl Into<String>,
        description: impl Into<String>,
        slot: &'a mut String,
    ) -> Self {
        self.field(name, default, description, Slot::String(slot))
    }

    pub fn int(
        self,
        name: impl Into<String>,
        default: impl Into<String>,
        description: impl Into<String>,
        slot: &'a mut i64,
    ) -> Self {
        self.field(name, default, description, Slot::Int(slot))
    }

    pub fn bool(
        self,
        name: impl Into<String>,
        default: impl Into<String>,
        description: impl Into<String>,
        slot: &'a mut bool,
    ) -> Self {
        self.field(name, default, description, Slot::Bool(slot))
    }

    pub fn float(
        self,
        name: impl Into<String>,
        default: impl Into<String>,
        description: impl Into<String>,
        slot: &'a mut f64,
    ) -> Self {
        self.field(name, default, description, Slot::Float(slot))
    }

    /// Add a field whose kind is only known at runtime by name.
    ///
    /// If `kind_name` is supported, `slot` is reset to that kind's zero value
    /// when it holds a different kind. Unsupported kinds are recorded and
    /// rejected when the record is loaded.
    pub fn dynamic(
        mut self,
        name: impl Into<String>,
        kind_name: &str,
        default: impl Into<String>,
        description: impl Into<String>,
        slot: &'a mut Value,
    ) -> Self {
        let binding = match FieldKind::from_name(kind_name) {
            Some(kind) => {
                if slot.kind() != kind {
                    *slot = kind.zero();
                }
                Binding::Slot(Slot::Dynamic(slot))
            }
            None => Binding::Unsupported(kind_name.to_string()),
        };
        self.entries.push(Field {
            name: name.into(),
            default: default.into(),
            description: description.into(),
            binding,
        });
        self
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub(crate) fn into_entries(self) -> Vec<Field<'a>> {
        self.entries
    }
}
