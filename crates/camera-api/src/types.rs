use std::collections::HashMap;
use std::sync::Arc;

use image::RgbaImage;
use serde_json::Value;
use time::OffsetDateTime;
use uuid::Uuid;

/// Opaque pass-through options attached to capture requests and commands.
pub type Extra = HashMap<String, Value>;

/// One entry of a simultaneous multi-source capture. The raster is shared,
/// never copied per entry.
#[derive(Clone, Debug)]
pub struct NamedImage {
    pub source_name: String,
    pub image: Arc<RgbaImage>,
}

/// Metadata returned alongside a single encoded image.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ImageMetadata {
    pub mime_type: String,
}

/// Metadata shared by every entry of one capture response.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ResponseMetadata {
    pub captured_at: OffsetDateTime,
}

/// Capabilities intrinsic to a particular camera implementation.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Properties {
    pub supports_point_cloud: bool,
}

/// A set of 3D points in meters, relative to the camera frame.
#[derive(Clone, Debug, Default)]
pub struct PointCloud {
    pub points: Vec<[f32; 3]>,
}

/// A labelled geometry reported by a camera that knows its own extents.
#[derive(Clone, Debug)]
pub struct Geometry {
    pub label: String,
    pub center: [f64; 3],
}

pub type SubscriptionId = Uuid;

/// Handle for a raw packet subscription.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct RtpSubscription {
    pub id: SubscriptionId,
}

/// Invoked with each raw packet of a subscribed stream.
pub type PacketCallback = Box<dyn Fn(&[u8]) + Send + Sync>;

/// A pull-based stream of raster frames.
pub type FrameStream = Box<dyn Iterator<Item = crate::Result<Arc<RgbaImage>>> + Send>;
