use camera_api::{CameraError, Result};
use serde::{Deserialize, Serialize};

/// Attributes accepted by the timestamp camera model.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// How many identically-timestamped entries each batch capture returns.
    pub n_images: i64,
}

impl Config {
    /// Check the config before anything is constructed from it.
    ///
    /// Returns the required and optional dependency names implied by the
    /// config; this model collaborates with nothing, so both lists are empty.
    pub fn validate(&self) -> Result<(Vec<String>, Vec<String>)> {
        if self.n_images < 1 {
            return Err(CameraError::InvalidConfiguration(format!(
                "n_images must be at least 1, got {}",
                self.n_images
            )));
        }
        Ok((Vec::new(), Vec::new()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_boundary() {
        assert!(Config { n_images: 1 }.validate().is_ok());
        assert!(Config { n_images: 12 }.validate().is_ok());
        for n in [0, -1, i64::MIN] {
            let err = Config { n_images: n }.validate().unwrap_err();
            match err {
                CameraError::InvalidConfiguration(msg) => assert!(msg.contains("n_images")),
                other => panic!("unexpected error: {other}"),
            }
        }
    }

    #[test]
    fn test_validate_reports_no_dependencies() {
        let (required, optional) = Config { n_images: 2 }.validate().unwrap();
        assert!(required.is_empty());
        assert!(optional.is_empty());
    }

    #[test]
    fn test_config_decodes_from_json_attributes() {
        let cfg: Config = serde_json::from_value(serde_json::json!({ "n_images": 4 })).unwrap();
        assert_eq!(cfg.n_images, 4);
    }
}
