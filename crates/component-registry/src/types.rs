use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use camera_api::{Camera, CameraError};
use serde::{Deserialize, Serialize};

use crate::RegistryError;

/// Capability kinds a component can be registered under.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Api {
    Camera,
}

/// A `namespace:family:name` model identifier.
#[derive(Debug, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Model {
    pub namespace: String,
    pub family: String,
    pub name: String,
}

impl Model {
    pub fn new(
        namespace: impl Into<String>,
        family: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            namespace: namespace.into(),
            family: family.into(),
            name: name.into(),
        }
    }
}

impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.namespace, self.family, self.name)
    }
}

impl FromStr for Model {
    type Err = RegistryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split(':');
        match (parts.next(), parts.next(), parts.next(), parts.next()) {
            (Some(namespace), Some(family), Some(name), None)
                if !namespace.is_empty() && !family.is_empty() && !name.is_empty() =>
            {
                Ok(Self::new(namespace, family, name))
            }
            _ => Err(RegistryError::InvalidModel(s.to_string())),
        }
    }
}

impl TryFrom<String> for Model {
    type Error = RegistryError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Model> for String {
    fn from(model: Model) -> Self {
        model.to_string()
    }
}

/// The raw configuration record a host hands to a constructor. `attributes`
/// stays opaque until the component decodes it into its own config type.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComponentConfig {
    pub name: String,
    pub api: Api,
    pub model: Model,
    #[serde(default)]
    pub attributes: serde_json::Value,
}

impl ComponentConfig {
    /// Decode the raw attribute map into a component's typed config.
    pub fn native_config<T: serde::de::DeserializeOwned>(&self) -> camera_api::Result<T> {
        serde_json::from_value(self.attributes.clone())
            .map_err(|e| CameraError::InvalidConfiguration(format!("component {}: {e}", self.name)))
    }
}

/// Collaborator handles resolved by the host before construction.
pub type Dependencies = HashMap<String, Arc<dyn Camera>>;
