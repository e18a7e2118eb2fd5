//! Domain error types.
//!
//! Per-row parse failures and short series are not errors — they degrade to
//! dropped rows and "unavailable" sentinels. Errors here are the conditions
//! that genuinely stop a pipeline: unreadable files and broken configuration.

/// Top-level error type for foliobench.
#[derive(Debug, thiserror::Error)]
pub enum FoliobenchError {
    #[error("data error: {reason}")]
    Data { reason: String },

    #[error("config parse error in {file}: {reason}")]
    ConfigParse { file: String, reason: String },

    #[error("missing config key [{section}] {key}")]
    ConfigMissing { section: String, key: String },

    #[error("invalid config value [{section}] {key}: {reason}")]
    ConfigInvalid {
        section: String,
        key: String,
        reason: String,
    },

    #[error(
        "strategy {strategy}: component {component} references unknown instrument {instrument}"
    )]
    UnknownInstrument {
        strategy: String,
        component: String,
        instrument: String,
    },

    #[error("strategy {strategy}: component {component} references unknown component {reference}")]
    UnknownComponent {
        strategy: String,
        component: String,
        reference: String,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
