use camera_api::CameraError;
use thiserror::Error;

use crate::{Api, Model};

pub type Result<T, E = RegistryError> = core::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("model already registered: {0}")]
    AlreadyRegistered(Model),
    #[error("no constructor registered for {api:?} model {model}")]
    NotRegistered { api: Api, model: Model },
    #[error("invalid model string {0:?}, expected namespace:family:name")]
    InvalidModel(String),
    #[error(transparent)]
    Component(#[from] CameraError),
}
