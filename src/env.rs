use std::collections::HashMap;

/// Read-only lookup of environment values by exact key.
///
/// The process environment is one implementation; tests pass a plain map so
/// nothing touches real process state.
pub trait EnvSource {
    fn lookup(&self, key: &str) -> Option<String>;
}

/// The live process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    /// Values that are not valid UTF-8 are treated as absent.
    fn lookup(&self, key: &str) -> Option<String> {
        match std::env::var(key) {
            Ok(value) => Some(value),
            Err(std::env::VarError::NotPresent) => None,
            Err(std::env::VarError::NotUnicode(_)) => {
                tracing::warn!(key, "ignoring non-UTF-8 environment value");
                None
            }
        }
    }
}

impl EnvSource for HashMap<String, String> {
    fn lookup(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}

/// Collect `(key, value)` pairs into a map usable as an [`EnvSource`].
pub fn env_map<K, V>(vars: impl IntoIterator<Item = (K, V)>) -> HashMap<String, String>
where
    K: Into<String>,
    V: Into<String>,
{
    vars.into_iter()
        .map(|(k, v)| (k.into(), v.into()))
        .collect()
}
