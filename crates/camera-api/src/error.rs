use thiserror::Error;

pub type Result<T, E = CameraError> = core::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum CameraError {
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
    #[error("encoding failed: {0}")]
    Encoding(String),
    #[error("unimplemented: {0}")]
    Unimplemented(&'static str),
    #[error("camera is closed")]
    Closed,
}
