use thiserror::Error;

#[derive(Error, Debug)]
pub enum DiiError {
    #[error("unrecognized file format: {format} export is missing column(s): {}", .missing.join(", "))]
    UnrecognizedFormat {
        format: &'static str,
        missing: Vec<String>,
    },

    #[error("malformed header row: {0}")]
    MalformedHeader(String),

    #[error("file had no usable rows")]
    EmptyInput,

    #[error("path does not exist: {0}")]
    PathNotFound(String),

    #[error("config parse error: {0}")]
    ConfigParse(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

impl DiiError {
    /// True when the input file itself was rejected, as opposed to a
    /// failure of the environment (I/O, configuration).
    pub fn is_input_rejection(&self) -> bool {
        matches!(
            self,
            DiiError::UnrecognizedFormat { .. } | DiiError::MalformedHeader(_) | DiiError::EmptyInput
        )
    }
}

pub type Result<T> = std::result::Result<T, DiiError>;
