use std::sync::Arc;

use camera_api::{
    encode_image, Camera, CameraError, Extra, ImageMetadata, NamedImage, Properties,
    ResponseMetadata, Result,
};
use component_registry::{ComponentConfig, Dependencies};
use image::{Rgba, RgbaImage};
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use time::OffsetDateTime;
use tokio_util::sync::CancellationToken;

use crate::Config;

const IMAGE_WIDTH: u32 = 600;
const IMAGE_HEIGHT: u32 = 400;
const BLUE: Rgba<u8> = Rgba([0, 0, 255, 255]);

/// Millisecond precision with a mandatory zone offset, e.g.
/// `2026-08-04T09:15:42.137+00:00`.
const TIMESTAMP_FORMAT: &[BorrowedFormatItem<'static>] = format_description!(
    "[year]-[month]-[day]T[hour]:[minute]:[second].[subsecond digits:3][offset_hour sign:mandatory]:[offset_minute]"
);

/// A camera that returns `n_images` references to one fixed blue raster per
/// batch capture, each tagged with a source name derived from a single
/// shared capture instant.
#[derive(Debug)]
pub struct TimestampCamera {
    name: String,
    blue_image: Arc<RgbaImage>,
    n_images: usize,
    // Cancelled on close. No operation selects on it yet; async capture
    // paths are expected to.
    cancel: CancellationToken,
}

impl TimestampCamera {
    /// Validate `config`, build the reference image, and freeze `n_images`.
    /// The raster is built exactly once and shared read-only afterwards.
    pub fn new(name: impl Into<String>, config: &Config) -> Result<Self> {
        config.validate()?;
        let name = name.into();
        let blue_image = Arc::new(RgbaImage::from_pixel(IMAGE_WIDTH, IMAGE_HEIGHT, BLUE));
        tracing::info!(%name, n_images = config.n_images, "timestamp camera constructed");
        Ok(Self {
            name,
            blue_image,
            n_images: config.n_images as usize,
            cancel: CancellationToken::new(),
        })
    }

    /// Registry-facing constructor: decodes the raw attributes into a
    /// [`Config`] and delegates to [`TimestampCamera::new`].
    pub fn from_component_config(
        _deps: &Dependencies,
        cfg: &ComponentConfig,
    ) -> Result<Box<dyn Camera>> {
        let config: Config = cfg.native_config()?;
        Ok(Box::new(Self::new(cfg.name.clone(), &config)?))
    }

    fn ensure_open(&self) -> Result<()> {
        if self.cancel.is_cancelled() {
            return Err(CameraError::Closed);
        }
        Ok(())
    }
}

impl Camera for TimestampCamera {
    fn name(&self) -> &str {
        &self.name
    }

    fn image(&self, mime_type: &str, _extra: Option<&Extra>) -> Result<(Vec<u8>, ImageMetadata)> {
        self.ensure_open()?;
        let bytes = encode_image(&self.blue_image, mime_type)?;
        let meta = ImageMetadata {
            mime_type: mime_type.to_string(),
        };
        Ok((bytes, meta))
    }

    fn images(&self, _extra: Option<&Extra>) -> Result<(Vec<NamedImage>, ResponseMetadata)> {
        self.ensure_open()?;
        // One clock read per batch; the index suffix is all that
        // distinguishes the entries.
        let now = OffsetDateTime::now_utc();
        let stamp = now
            .format(TIMESTAMP_FORMAT)
            .map_err(|e| CameraError::Encoding(e.to_string()))?;
        let entries = (0..self.n_images)
            .map(|i| NamedImage {
                source_name: format!("{stamp}_{i}"),
                image: Arc::clone(&self.blue_image),
            })
            .collect();
        Ok((entries, ResponseMetadata { captured_at: now }))
    }

    fn properties(&self) -> Result<Properties> {
        self.ensure_open()?;
        Ok(Properties {
            supports_point_cloud: false,
        })
    }

    fn close(&self) -> Result<()> {
        tracing::debug!(name = %self.name, "timestamp camera closing");
        self.cancel.cancel();
        Ok(())
    }
}
