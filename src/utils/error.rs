use thiserror::Error;

/// Failure of a single store accessor.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("{0} not found")]
    NotFound(&'static str),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("store snapshot JSON: {0}")]
    Decode(#[from] serde_json::Error),
}

#[derive(Error, Debug)]
pub enum TelemetryError {
    #[error("unable to compute {category} telemetry: {source}")]
    Step {
        category: &'static str,
        #[source]
        source: StoreError,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Output error: {0}")]
    Output(String),
}

impl TelemetryError {
    pub fn step(category: &'static str) -> impl FnOnce(StoreError) -> TelemetryError {
        move |source| TelemetryError::Step { category, source }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DurationError {
    #[error("invalid duration {0:?}")]
    Invalid(String),

    #[error("missing unit in duration {0:?}")]
    MissingUnit(String),

    #[error("unknown unit {unit:?} in duration {input:?}")]
    UnknownUnit { unit: String, input: String },

    #[error("invalid duration {0:?}: value out of range")]
    Overflow(String),
}

pub type Result<T> = std::result::Result<T, TelemetryError>;
