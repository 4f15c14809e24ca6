//! component-registry: (capability, model) to constructor wiring for hosts
//!
//! A host builds one [`Registry`] during startup, registers every model it
//! ships with an explicit call, then constructs components from raw
//! [`ComponentConfig`] records for the lifetime of the process. There is no
//! implicit global registration.

mod types;
pub use types::{Api, ComponentConfig, Dependencies, Model};

mod error;
pub use error::{RegistryError, Result};

mod registry;
pub use registry::{Constructor, Registry};
