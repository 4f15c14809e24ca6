use std::collections::HashMap;

use camera_api::Camera;

use crate::{Api, ComponentConfig, Dependencies, Model, RegistryError, Result};

/// Constructor for one registered model.
pub type Constructor = fn(&Dependencies, &ComponentConfig) -> camera_api::Result<Box<dyn Camera>>;

/// Maps (capability, model) pairs to constructors.
#[derive(Default)]
pub struct Registry {
    constructors: HashMap<(Api, Model), Constructor>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `constructor` for `model` under `api`. Each pair may be
    /// registered once.
    pub fn register(&mut self, api: Api, model: Model, constructor: Constructor) -> Result<()> {
        if self.constructors.contains_key(&(api, model.clone())) {
            return Err(RegistryError::AlreadyRegistered(model));
        }
        tracing::debug!(%model, ?api, "registered component constructor");
        self.constructors.insert((api, model), constructor);
        Ok(())
    }

    /// Construct a component from its raw config via the registered
    /// constructor. A config change never mutates a live component; the host
    /// closes the old instance and constructs a fresh one here.
    pub fn construct(&self, deps: &Dependencies, cfg: &ComponentConfig) -> Result<Box<dyn Camera>> {
        let constructor = self
            .constructors
            .get(&(cfg.api, cfg.model.clone()))
            .ok_or_else(|| RegistryError::NotRegistered {
                api: cfg.api,
                model: cfg.model.clone(),
            })?;
        Ok(constructor(deps, cfg)?)
    }

    /// Models registered under `api`, in no particular order.
    pub fn models(&self, api: Api) -> Vec<&Model> {
        self.constructors
            .keys()
            .filter(|(a, _)| *a == api)
            .map(|(_, m)| m)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use camera_api::{
        CameraError, Extra, ImageMetadata, NamedImage, Properties, ResponseMetadata,
    };

    struct StubCamera {
        name: String,
    }

    impl Camera for StubCamera {
        fn name(&self) -> &str {
            &self.name
        }

        fn image(
            &self,
            mime_type: &str,
            _extra: Option<&Extra>,
        ) -> camera_api::Result<(Vec<u8>, ImageMetadata)> {
            Ok((
                Vec::new(),
                ImageMetadata {
                    mime_type: mime_type.to_string(),
                },
            ))
        }

        fn images(
            &self,
            _extra: Option<&Extra>,
        ) -> camera_api::Result<(Vec<NamedImage>, ResponseMetadata)> {
            Err(CameraError::Unimplemented("images"))
        }

        fn properties(&self) -> camera_api::Result<Properties> {
            Ok(Properties::default())
        }

        fn close(&self) -> camera_api::Result<()> {
            Ok(())
        }
    }

    fn stub_constructor(
        _deps: &Dependencies,
        cfg: &ComponentConfig,
    ) -> camera_api::Result<Box<dyn Camera>> {
        Ok(Box::new(StubCamera {
            name: cfg.name.clone(),
        }))
    }

    fn stub_model() -> Model {
        Model::new("helix", "camera", "stub")
    }

    fn stub_config() -> ComponentConfig {
        ComponentConfig {
            name: "cam0".to_string(),
            api: Api::Camera,
            model: stub_model(),
            attributes: serde_json::Value::Null,
        }
    }

    #[test]
    fn test_register_and_construct() {
        let mut registry = Registry::new();
        registry
            .register(Api::Camera, stub_model(), stub_constructor)
            .unwrap();

        let camera = registry
            .construct(&Dependencies::new(), &stub_config())
            .unwrap();
        assert_eq!(camera.name(), "cam0");
        assert_eq!(registry.models(Api::Camera), vec![&stub_model()]);
    }

    #[test]
    fn test_duplicate_registration_rejected() {
        let mut registry = Registry::new();
        registry
            .register(Api::Camera, stub_model(), stub_constructor)
            .unwrap();
        let err = registry
            .register(Api::Camera, stub_model(), stub_constructor)
            .unwrap_err();
        assert!(matches!(err, RegistryError::AlreadyRegistered(_)));
    }

    #[test]
    fn test_construct_without_registration_fails() {
        let registry = Registry::new();
        let err = registry
            .construct(&Dependencies::new(), &stub_config())
            .err()
            .unwrap();
        assert!(matches!(err, RegistryError::NotRegistered { .. }));
    }

    #[test]
    fn test_trait_defaults_reject_unsupported_capabilities() {
        let camera = StubCamera {
            name: "cam0".to_string(),
        };
        assert!(matches!(
            camera.stream().err().unwrap(),
            CameraError::Unimplemented("stream")
        ));
        assert!(matches!(
            camera.next_point_cloud().unwrap_err(),
            CameraError::Unimplemented("next_point_cloud")
        ));
        assert!(matches!(
            camera.do_command(&Extra::new()).unwrap_err(),
            CameraError::Unimplemented("do_command")
        ));
        assert!(matches!(
            camera.geometries(None).unwrap_err(),
            CameraError::Unimplemented("geometries")
        ));
    }
}
