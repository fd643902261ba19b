//! Clap-backed argument surface.
//!
//! This module is compiled only when the `clap` Cargo feature is enabled (on
//! by default). Flags are registered at runtime on a [`clap::Command`], one
//! per record field, so the command grows as records are loaded through it.
//!
//! Every flag is parsed as a raw string; coercion happens in the resolver so
//! that a malformed flag value falls through to the default instead of
//! aborting the parse. Bool flags accept a bare `--flag` (meaning `true`) or
//! an explicit `--flag=<bool>`. Repeating a flag keeps the last value.
//!
//! A separate value may start with `-` only when it is a negative number
//! (`--port -1`), so `--port --verbose` is reported as a missing value rather
//! than swallowing `--verbose`. Other dash-leading values need the equals
//! form: `--name=-x`.

use std::collections::HashSet;
use std::ffi::OsString;
use std::path::Path;

use clap::{Arg, ArgAction, ArgMatches, Command};

use crate::error::LoadError;
use crate::kind::FieldKind;
use crate::surface::{ArgSurface, FlagSpec, Usage};

/// Flag names clap claims for itself.
const RESERVED: &[&str] = &["help"];

/// Argument surface built on a runtime [`clap::Command`].
#[derive(Debug, Clone)]
pub struct ClapSurface {
    command: Command,
    argv: Vec<OsString>,
    registered: HashSet<String>,
    usage: Usage,
    matches: Option<ArgMatches>,
}

impl ClapSurface {
    /// Surface over the live process arguments.
    pub fn from_env() -> Self {
        Self::new(std::env::args_os())
    }

    /// Surface over an explicit argument vector. The first element is the
    /// program name, as in `std::env::args_os()`.
    pub fn new<I, T>(argv: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        let argv: Vec<OsString> = argv.into_iter().map(Into::into).collect();
        let name = argv
            .first()
            .and_then(|arg0| Path::new(arg0).file_name())
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "app".to_string());

        Self {
            command: Command::new(name).args_override_self(true),
            argv,
            registered: HashSet::new(),
            usage: Usage::default(),
            matches: None,
        }
    }

    /// Override the program name shown in help output.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.command = self.command.name(name.into());
        self
    }

    /// Set the one-line description shown at the top of help output.
    pub fn about(mut self, about: impl Into<String>) -> Self {
        self.command = self.command.about(about.into());
        self
    }

    fn build_arg(spec: FlagSpec) -> Arg {
        let arg = Arg::new(spec.name.clone())
            .long(spec.name)
            .help(spec.description)
            .value_name(spec.kind.placeholder())
            .value_parser(clap::value_parser!(String))
            .action(ArgAction::Set);

        let arg = match spec.kind {
            FieldKind::Bool => arg
                .num_args(0..=1)
                .require_equals(true)
                .default_missing_value("true"),
            _ => arg.num_args(1).allow_negative_numbers(true),
        };

        if spec.default.is_empty() {
            arg
        } else {
            arg.default_value(spec.default)
        }
    }
}

impl ArgSurface for ClapSurface {
    fn is_registered(&self, flag: &str) -> bool {
        RESERVED.contains(&flag) || self.registered.contains(flag)
    }

    fn register(&mut self, spec: FlagSpec) -> Result<(), LoadError> {
        if RESERVED.contains(&spec.name.as_str()) || !self.registered.insert(spec.name.clone()) {
            return Err(LoadError::DuplicateFlag {
                flag: spec.name,
                field: spec.field,
            });
        }
        tracing::trace!(flag = %spec.name, kind = %spec.kind, "registering flag");
        let arg = Self::build_arg(spec);
        self.command = std::mem::take(&mut self.command).arg(arg);
        Ok(())
    }

    fn extend_usage(&mut self, usage: Usage) {
        self.usage.entries.extend(usage.entries);
        self.command = std::mem::take(&mut self.command).after_help(self.usage.to_string());
    }

    /// Parses with a copy of the command; clap finalizes a command the first
    /// time it is used, and later registrations must still take effect.
    fn parse(&mut self) -> Result<(), LoadError> {
        let matches = self
            .command
            .clone()
            .try_get_matches_from(self.argv.iter().cloned())?;
        self.matches = Some(matches);
        Ok(())
    }

    fn value(&self, flag: &str) -> Option<String> {
        self.matches
            .as_ref()?
            .try_get_one::<String>(flag)
            .ok()
            .flatten()
            .cloned()
    }

    fn render_help(&mut self) -> String {
        self.command.clone().render_help().to_string()
    }
}
