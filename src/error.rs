use thiserror::Error;

pub type Result<T> = std::result::Result<T, PipelineError>;

#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("File I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV parsing error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Schema error: {message}")]
    Schema { message: String },

    #[error("Unparseable date '{value}' at row {row}")]
    DateParse { value: String, row: u64 },

    #[error("Invalid temperature '{value}' at row {row}")]
    InvalidTemperature { value: String, row: u64 },

    #[error("Temperature validation error: {message}")]
    TemperatureValidation { message: String },

    #[error("Month ordinal {0} is outside 1-12")]
    InvalidMonth(u32),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),
}
