use thiserror::Error;

#[derive(Error, Debug)]
pub enum PositionHistoryError {
    #[error("Config error: {0}")]
    Config(String),
    #[error("Missing item id: {0}")]
    MissingId(String),
    #[error("Malformed item id: {id}")]
    MalformedId { id: String },
    #[error("Mandate row {row} has no officeholder")]
    MissingOfficeholder { row: usize },
    #[error("Malformed precision code '{code}' for date {date}")]
    MalformedPrecision { code: String, date: String },
    #[error("Malformed query results: {0}")]
    Bindings(String),
}

pub type Result<T> = std::result::Result<T, PositionHistoryError>;

// Helper conversions
impl From<serde_json::Error> for PositionHistoryError {
    fn from(e: serde_json::Error) -> Self { Self::Bindings(e.to_string()) }
}
impl From<config::ConfigError> for PositionHistoryError {
    fn from(e: config::ConfigError) -> Self { Self::Config(e.to_string()) }
}
