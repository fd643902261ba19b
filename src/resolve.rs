//! Precedence resolution for a single field.
//!
//! Operates on already-read raw strings with no I/O, so the whole chain is
//! testable with synthetic inputs. Sources are consulted highest first:
//!
//! 1. Environment value, if present and valid for the kind
//! 2. Parsed command-line value (which already carries the registered default)
//! 3. The declared default literal
//! 4. The kind's zero value
//!
//! A present but malformed value is skipped with a warning, never an error.

use crate::kind::{FieldKind, Value};

/// Which source produced a field's final value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    Env,
    Args,
    Default,
    Zero,
}

/// The outcome of resolving one field.
#[derive(Debug, Clone, PartialEq)]
pub struct Resolution {
    pub value: Value,
    pub source: Source,
}

/// Resolve a field's value from its raw sources.
///
/// `field` is only used to label warnings.
pub fn resolve(
    field: &str,
    kind: FieldKind,
    env: Option<&str>,
    arg: Option<&str>,
    default_literal: &str,
) -> Resolution {
    if let Some(raw) = env {
        match kind.coerce(raw) {
            Some(value) => {
                return Resolution {
                    value,
                    source: Source::Env,
                };
            }
            None => {
                tracing::warn!(field, %kind, value = raw, "ignoring malformed environment value")
            }
        }
    }

    if let Some(raw) = arg {
        match kind.coerce(raw) {
            Some(value) => {
                return Resolution {
                    value,
                    source: Source::Args,
                };
            }
            None => {
                tracing::warn!(field, %kind, value = raw, "ignoring malformed flag value")
            }
        }
    }

    match kind.coerce(default_literal) {
        Some(value) if !default_literal.is_empty() => Resolution {
            value,
            source: Source::Default,
        },
        _ => Resolution {
            value: kind.zero(),
            source: Source::Zero,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn int(env: Option<&str>, arg: Option<&str>, default: &str) -> Resolution {
        resolve("Banana", FieldKind::Int, env, arg, default)
    }

    #[test]
    fn env_beats_args() {
        let r = int(Some("66"), Some("10"), "0");
        assert_eq!(r.value, Value::Int(66));
        assert_eq!(r.source, Source::Env);
    }

    #[test]
    fn args_used_without_env() {
        let r = int(None, Some("155"), "0");
        assert_eq!(r.value, Value::Int(155));
        assert_eq!(r.source, Source::Args);
    }

    #[test]
    fn default_used_without_env_or_args() {
        let r = int(None, None, "33");
        assert_eq!(r.value, Value::Int(33));
        assert_eq!(r.source, Source::Default);
    }

    #[test]
    fn malformed_env_falls_to_args() {
        let r = int(Some("Toast"), Some("10"), "0");
        assert_eq!(r.value, Value::Int(10));
        assert_eq!(r.source, Source::Args);
    }

    #[test]
    fn malformed_env_and_args_fall_to_default() {
        let r = int(Some("Toast"), Some("Toasted"), "2");
        assert_eq!(r.value, Value::Int(2));
        assert_eq!(r.source, Source::Default);
    }

    #[test]
    fn everything_malformed_yields_zero() {
        let r = int(Some("x"), Some("y"), "z");
        assert_eq!(r.value, Value::Int(0));
        assert_eq!(r.source, Source::Zero);
    }

    #[test]
    fn empty_default_yields_zero() {
        let r = resolve("Name", FieldKind::String, None, None, "");
        assert_eq!(r.value, Value::String(String::new()));
        assert_eq!(r.source, Source::Zero);
    }

    #[test]
    fn empty_env_string_still_wins() {
        let r = resolve("Name", FieldKind::String, Some(""), Some("flag"), "default");
        assert_eq!(r.value, Value::String(String::new()));
        assert_eq!(r.source, Source::Env);
    }

    #[test]
    fn invalid_bool_env_falls_through() {
        let r = resolve("Debug", FieldKind::Bool, Some("yes"), None, "true");
        assert_eq!(r.value, Value::Bool(true));
        assert_eq!(r.source, Source::Default);
    }

    #[test]
    fn bool_env_overrides_default() {
        let r = resolve("Debug", FieldKind::Bool, Some("false"), None, "true");
        assert_eq!(r.value, Value::Bool(false));
        assert_eq!(r.source, Source::Env);
    }

    #[test]
    fn float_default() {
        let r = resolve("Rate", FieldKind::Float, None, None, "0.001");
        assert_eq!(r.value, Value::Float(0.001));
    }
}
