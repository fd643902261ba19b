use std::collections::HashMap;
#[cfg(feature = "clap")]
use std::ffi::OsString;

#[cfg(feature = "clap")]
use crate::cli::ClapSurface;
use crate::descriptor::{self, FieldDescriptor};
use crate::env::{EnvSource, ProcessEnv, env_map};
use crate::error::LoadError;
use crate::record::Record;
use crate::resolve::{self, Resolution};
#[cfg(not(feature = "clap"))]
use crate::surface::MapArgs;
use crate::surface::{ArgSurface, Usage, UsageEntry};

/// Entry point for building a loader.
pub struct ArgEnv;

impl ArgEnv {
    pub fn builder() -> ArgEnvBuilder {
        ArgEnvBuilder::new()
    }
}

/// Builder for the context a [`Loader`] reads from.
///
/// By default the loader reads the process environment and, with the `clap`
/// feature, the process arguments. Every source can be replaced so that
/// tests run against isolated fakes.
pub struct ArgEnvBuilder {
    env: Option<Box<dyn EnvSource>>,
    surface: Option<Box<dyn ArgSurface>>,
    #[cfg(feature = "clap")]
    argv: Option<Vec<OsString>>,
    #[cfg(feature = "clap")]
    program: Option<String>,
    #[cfg(feature = "clap")]
    about: Option<String>,
}

impl ArgEnvBuilder {
    fn new() -> Self {
        Self {
            env: None,
            surface: None,
            #[cfg(feature = "clap")]
            argv: None,
            #[cfg(feature = "clap")]
            program: None,
            #[cfg(feature = "clap")]
            about: None,
        }
    }

    /// Read environment values from these pairs instead of the process.
    pub fn env_vars<K, V>(self, vars: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.env_source(env_map(vars))
    }

    /// Read environment values from a custom source.
    pub fn env_source(mut self, source: impl EnvSource + 'static) -> Self {
        self.env = Some(Box::new(source));
        self
    }

    /// Ignore the environment entirely.
    pub fn no_env(self) -> Self {
        self.env_source(HashMap::new())
    }

    /// Parse this argument vector instead of the process arguments. The first
    /// element is the program name.
    #[cfg(feature = "clap")]
    pub fn args<I, T>(mut self, argv: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        self.argv = Some(argv.into_iter().map(Into::into).collect());
        self
    }

    /// Program name shown in help output.
    #[cfg(feature = "clap")]
    pub fn program(mut self, name: &str) -> Self {
        self.program = Some(name.to_string());
        self
    }

    /// One-line description shown in help output.
    #[cfg(feature = "clap")]
    pub fn about(mut self, about: &str) -> Self {
        self.about = Some(about.to_string());
        self
    }

    /// Use a custom argument surface. `args`, `program` and `about` are
    /// ignored when one is set.
    pub fn arg_surface(mut self, surface: impl ArgSurface + 'static) -> Self {
        self.surface = Some(Box::new(surface));
        self
    }

    #[cfg(feature = "clap")]
    fn default_surface(&mut self) -> Box<dyn ArgSurface> {
        let mut surface = match self.argv.take() {
            Some(argv) => ClapSurface::new(argv),
            None => ClapSurface::from_env(),
        };
        if let Some(name) = self.program.take() {
            surface = surface.name(name);
        }
        if let Some(about) = self.about.take() {
            surface = surface.about(about);
        }
        Box::new(surface)
    }

    #[cfg(not(feature = "clap"))]
    fn default_surface(&mut self) -> Box<dyn ArgSurface> {
        Box::new(MapArgs::default())
    }

    pub fn build(mut self) -> Loader {
        let surface = match self.surface.take() {
            Some(surface) => surface,
            None => self.default_surface(),
        };
        Loader {
            env: self.env.unwrap_or_else(|| Box::new(ProcessEnv)),
            surface,
        }
    }

    /// Build a loader and populate `record` once.
    pub fn load<R: Record + ?Sized>(self, record: &mut R) -> Result<(), LoadError> {
        self.build().load(record)
    }
}

/// Populates records from its environment source and argument surface.
///
/// Flags registered by one load stay registered on the surface, so loading
/// the same record twice through one loader fails with
/// [`LoadError::DuplicateFlag`].
pub struct Loader {
    env: Box<dyn EnvSource>,
    surface: Box<dyn ArgSurface>,
}

impl Loader {
    /// Populate `record` from the environment, then flags, then defaults.
    ///
    /// Every field is resolved before any is written, so on error the record
    /// is left exactly as it was.
    pub fn load<R: Record + ?Sized>(&mut self, record: &mut R) -> Result<(), LoadError> {
        let descriptors = descriptor::describe(record.fields())?;

        if let Some(d) = descriptors
            .iter()
            .find(|d| self.surface.is_registered(&d.flag_name))
        {
            return Err(LoadError::DuplicateFlag {
                flag: d.flag_name.clone(),
                field: d.name.clone(),
            });
        }
        for d in &descriptors {
            self.surface.register(d.flag_spec())?;
        }
        self.surface.extend_usage(usage(&descriptors));
        self.surface.parse()?;

        let resolved: Vec<Resolution> = descriptors
            .iter()
            .map(|d| {
                let env = self.env.lookup(&d.env_name);
                let arg = self.surface.value(&d.flag_name);
                resolve::resolve(
                    &d.name,
                    d.kind,
                    env.as_deref(),
                    arg.as_deref(),
                    &d.default_literal,
                )
            })
            .collect();

        for (mut d, r) in descriptors.into_iter().zip(resolved) {
            tracing::debug!(
                field = %d.name,
                env = %d.env_name,
                flag = %d.flag_name,
                source = ?r.source,
                value = %r.value,
                "resolved field"
            );
            d.slot.write(r.value);
        }

        Ok(())
    }

    /// Render the help listing for every flag registered so far.
    pub fn help(&mut self) -> String {
        self.surface.render_help()
    }
}

fn usage(descriptors: &[FieldDescriptor<'_>]) -> Usage {
    Usage {
        entries: descriptors
            .iter()
            .map(|d| UsageEntry {
                env_name: d.env_name.clone(),
                flag_name: d.flag_name.clone(),
                description: d.description.clone(),
            })
            .collect(),
    }
}
