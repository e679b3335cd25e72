use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("percentage {value} out of range, expected 0..=100")]
    OutOfRange { value: f64 },

    #[error("unknown key: `{key}`")]
    UnknownKey { key: String },

    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("invalid data: {0}")]
    InvalidData(String),
}
