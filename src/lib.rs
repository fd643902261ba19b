//! Populate a settings record from command-line flags, environment variables,
//! and declared defaults.
//!
//! A record lists its fields once, each with an identifier, a default literal
//! and a description. Every identifier maps deterministically to an
//! environment variable and a flag:
//!
//! | Field identifier | Environment variable | Flag                |
//! |------------------|----------------------|---------------------|
//! | `EthernetDevice` | `ETHERNET_DEVICE`    | `--ethernet-device` |
//! | `PortNumber`     | `PORT_NUMBER`        | `--port-number`     |
//! | `ThirdVariableS` | `THIRD_VARIABLE_S`   | `--third-variable-s`|
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
//!
//! let mut settings = MySettings { ethernet_device: String::new(), port_number: 0 };
//! argenv::load(&mut settings)?;
//! ```
//!
//! # Precedence
//!
//! ```text
//! Zero value            "", 0, false, 0.0
//!        ↑ overridden by
//! Declared default      Fields::int("PortNumber", "80", ..)
//!        ↑ overridden by
//! Command-line flag     --port-number=8080
//!        ↑ overridden by
//! Environment variable  PORT_NUMBER=9000
//! ```
//!
//! A value that does not parse as the field's kind is skipped, not fatal: a
//! malformed `PORT_NUMBER` falls through to the flag, then the default, then
//! zero. Only schema mistakes (an empty record, an unsupported kind, two
//! fields deriving the same name) and argument-parser failures abort a load,
//! and an aborted load never writes to the record.
//!
//! # Injected sources
//!
//! [`ArgEnv::builder()`] replaces any source, so tests never touch the real
//! process environment or argument vector:
//!
//! ```ignore
//! ArgEnv::builder()
//!     .env_vars([("PORT_NUMBER", "9000")])
//!     .args(["myapp", "--ethernet-device=eth1"])
//!     .load(&mut settings)?;
//! ```
//!
//! Records can also be declared at runtime from a TOML manifest with
//! [`DynamicRecord`].
//!
//! # Help output
//!
//! With the `clap` feature (on by default), flags are registered on a
//! runtime `clap::Command`. `--help` lists every flag and, below it, every
//! derived environment variable. A help request comes back as
//! [`LoadError::Arguments`]; call `exit()` on the inner error to print it.

pub mod error;

mod builder;
#[cfg(feature = "clap")]
mod cli;
mod descriptor;
mod env;
mod kind;
mod manifest;
mod names;
mod record;
mod resolve;
mod surface;

#[cfg(test)]
mod fixtures;

pub use builder::{ArgEnv, ArgEnvBuilder, Loader};
#[cfg(feature = "clap")]
pub use cli::ClapSurface;
pub use descriptor::{FieldDescriptor, describe};
pub use env::{EnvSource, ProcessEnv, env_map};
pub use error::LoadError;
pub use kind::{FieldKind, Value, parse_bool};
pub use manifest::DynamicRecord;
pub use names::{DerivedNames, derive};
pub use record::{Field, Fields, Record, Slot};
pub use resolve::{Resolution, Source, resolve};
pub use surface::{ArgSurface, FlagSpec, MapArgs, Usage, UsageEntry};

/// Populate `record` from the process environment and process arguments.
pub fn load<R: Record + ?Sized>(record: &mut R) -> Result<(), LoadError> {
    ArgEnv::builder().load(record)
}
