//! timestamp-camera: a synthetic camera for timestamp/source-name correlation
//!
//! Every batch capture reads the wall clock once, then returns `n_images`
//! references to the same 600x400 blue raster, each labelled
//! `"{timestamp}_{index}"`. Consumers use it to check that simultaneous
//! captures from several sources correlate by timestamp while staying
//! individually addressable by name. Not a real imaging pipeline; every
//! capability beyond single/batch capture fails with a tagged error.

mod config;
pub use config::Config;

mod camera;
pub use camera::TimestampCamera;

use component_registry::{Api, Model, Registry, Result as RegistryResult};

/// The model identifier this crate registers.
pub fn model() -> Model {
    Model::new("helix", "camera", "timestamp-source-names")
}

/// Bind the timestamp camera constructor into `registry`. Called once during
/// host startup.
pub fn register(registry: &mut Registry) -> RegistryResult<()> {
    registry.register(Api::Camera, model(), TimestampCamera::from_component_config)
}
