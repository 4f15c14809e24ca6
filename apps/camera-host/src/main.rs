use anyhow::Result;
use clap::Parser;
use component_registry::{Api, ComponentConfig, Dependencies, Registry};
use serde_json::json;
use tracing::info;

#[derive(Parser)]
#[command(name = "camera-host")]
#[command(about = "Registers the timestamp camera and exercises its capture paths")]
struct Args {
    /// Component name to construct the camera under
    #[arg(long, default_value = "fixture-cam")]
    name: String,

    /// Number of identically-timestamped entries per batch capture
    #[arg(long, default_value = "3")]
    n_images: i64,

    /// MIME type for the single-image capture
    #[arg(long, default_value = "image/png")]
    mime: String,
}

fn main() -> Result<()> {
    setup_tracing();

    let args = Args::parse();

    let mut registry = Registry::new();
    timestamp_camera::register(&mut registry)?;
    info!(model = %timestamp_camera::model(), "camera host starting");

    let cfg = ComponentConfig {
        name: args.name,
        api: Api::Camera,
        model: timestamp_camera::model(),
        attributes: json!({ "n_images": args.n_images }),
    };
    let camera = registry.construct(&Dependencies::new(), &cfg)?;

    let (entries, meta) = camera.images(None)?;
    info!(
        captured_at = %meta.captured_at,
        "batch capture returned {} entries",
        entries.len()
    );
    for entry in &entries {
        info!(
            source = %entry.source_name,
            width = entry.image.width(),
            height = entry.image.height(),
            "named image"
        );
    }

    let (bytes, image_meta) = camera.image(&args.mime, None)?;
    info!(
        mime = %image_meta.mime_type,
        "encoded single image ({} bytes)",
        bytes.len()
    );

    camera.close()?;
    Ok(())
}

fn setup_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}
