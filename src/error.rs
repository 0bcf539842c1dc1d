use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ChartError {
    #[error("invalid chart id `{0}`: expected a non-empty id made of [A-Za-z0-9_-]")]
    InvalidChartId(String),

    #[error("chart configuration requires data before it can be built")]
    MissingData,

    #[error("invalid data: {0}")]
    InvalidData(String),
}
