//! Configuration errors raised while loading the catalog or config.
//!
//! Everything here is fatal at startup. Per-frame problems (bad deltas,
//! empty picks) are not errors and never surface through this type.

use thiserror::Error;

/// Result type for catalog and configuration loading.
pub type ConfigResult<T> = Result<T, ConfigError>;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("malformed JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("catalog contains no bodies")]
    EmptyCatalog,

    #[error("catalog has no star")]
    MissingStar,

    #[error("catalog has more than one star: {first} and {second}")]
    MultipleStars { first: String, second: String },

    #[error("star {name} must have an orbital speed factor of 0, got {value}")]
    StarOrbitalSpeed { name: String, value: f64 },

    #[error("star {name} must not have an orbital radius")]
    StarOrbitalRadius { name: String },

    #[error("body {name} is missing an orbital radius")]
    MissingOrbitalRadius { name: String },

    #[error("body {name}: field {field} must be finite and positive, got {value}")]
    NonPositive {
        name: String,
        field: &'static str,
        value: f64,
    },

    #[error("body {name}: field {field} must be finite, got {value}")]
    NonFinite {
        name: String,
        field: &'static str,
        value: f64,
    },

    #[error("invalid color {0:?} (expected #rrggbb)")]
    InvalidColor(String),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_body() {
        let err = ConfigError::MissingOrbitalRadius { name: "Mars".into() };
        assert_eq!(err.to_string(), "body Mars is missing an orbital radius");
    }

    #[test]
    fn json_errors_convert() {
        let parse: Result<u32, _> = serde_json::from_str("not json");
        let err: ConfigError = parse.unwrap_err().into();
        assert!(matches!(err, ConfigError::Json(_)));
    }
}
