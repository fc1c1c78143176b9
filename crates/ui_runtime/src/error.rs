use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Construction-time configuration failures.
///
/// These are raised synchronously while a component is being built and are never coerced into
/// a fallback value.
pub enum ConfigError {
    /// A closed option set received a token outside the set.
    #[error("invalid {option}: `{value}` (expected one of: {expected})")]
    InvalidOption {
        /// Option name, for example `variant`.
        option: &'static str,
        /// Rejected input.
        value: String,
        /// Comma-separated list of accepted tokens.
        expected: String,
    },
    /// A set of default keys was supplied to a single-selection accordion.
    #[error("a single accordion accepts one default key, got a set of {count}")]
    DefaultValueMode {
        /// Number of keys in the rejected set.
        count: usize,
    },
    /// Two accordion items share the same `value`.
    #[error("duplicate accordion item value `{0}`")]
    DuplicateItemValue(String),
    /// A component key used for id derivation was empty.
    #[error("{component} requires a non-empty key")]
    EmptyKey {
        /// Component that rejected the key.
        component: &'static str,
    },
}
