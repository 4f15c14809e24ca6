//! camera-api: the camera capability contract shared by backends and hosts
//!
//! Defines the trait a camera implementation exposes to the host runtime, the
//! payload and metadata types that cross that boundary, and the error
//! taxonomy. Backends implement the subset of the surface they support; every
//! remaining method keeps its default body and fails with a tagged
//! `Unimplemented` error rather than a silent empty result.

mod types;
pub use types::{
    Extra, FrameStream, Geometry, ImageMetadata, NamedImage, PacketCallback, PointCloud,
    Properties, ResponseMetadata, RtpSubscription, SubscriptionId,
};

mod error;
pub use error::{CameraError, Result};

mod traits;
pub use traits::Camera;

mod encode;
pub use encode::encode_image;
