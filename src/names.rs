//! Derive the external surface names of a field from its identifier.
//!
//! A camel-case identifier such as `EthernetDevice` maps to the environment
//! variable `ETHERNET_DEVICE` and the flag `--ethernet-device`. Every uppercase
//! character after the first starts a new segment; runs of capitals are not
//! collapsed, so `ThirdVariableS` becomes `THIRD_VARIABLE_S`.

/// The environment and flag names derived from one identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DerivedNames {
    /// Uppercase, underscore-separated (`ETHERNET_DEVICE`).
    pub env: String,
    /// Lowercase, hyphen-separated (`ethernet-device`).
    pub flag: String,
}

/// Derive both names in a single left-to-right pass.
///
/// Both outputs insert a separator under the same condition (an uppercase
/// character that is not the first), so they always agree on segment
/// boundaries.
pub fn derive(identifier: &str) -> DerivedNames {
    let mut env = String::with_capacity(identifier.len() + 4);
    let mut flag = String::with_capacity(identifier.len() + 4);

    for (i, c) in identifier.chars().enumerate() {
        if i != 0 && c.is_uppercase() {
            env.push('_');
            flag.push('-');
        }
        env.extend(c.to_uppercase());
        flag.extend(c.to_lowercase());
    }

    DerivedNames { env, flag }
}
