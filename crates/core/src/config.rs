use std::env;

use crate::error::{CropError, Result};
use dotenvy::dotenv;
use serde::{Deserialize, Serialize};

/// Minimum crop side, in displayed pixels, used when nothing else is configured.
pub const DEFAULT_MIN_SIDE: f32 = 10.0;

/// Environment variable overriding [`CropConfig::min_side`].
pub const MIN_SIDE_ENV: &str = "IMAGE_CROP_MIN_SIDE";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CropConfig {
    /// Smallest side the crop box may be drawn or resized to, in displayed pixels.
    pub min_side: f32,
}

impl Default for CropConfig {
    fn default() -> Self {
        Self {
            min_side: DEFAULT_MIN_SIDE,
        }
    }
}

impl CropConfig {
    pub fn load() -> Result<Self> {
        // Load .env file if it exists, ignore if it doesn't
        let _ = dotenv();

        let config = match env::var(MIN_SIDE_ENV) {
            Ok(raw) => {
                let min_side = raw.trim().parse::<f32>().map_err(|e| {
                    CropError::config(format!("{MIN_SIDE_ENV}={raw:?} is not a number: {e}"))
                })?;
                Self { min_side }
            }
            Err(_) => Self::default(),
        };

        config.validate()?;
        Ok(config)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn with_min_side(mut self, min_side: f32) -> Self {
        self.min_side = min_side;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if !self.min_side.is_finite() || self.min_side <= 0.0 {
            return Err(CropError::config(format!(
                "min_side must be a positive number, got {}",
                self.min_side
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_min_side_is_ten() {
        assert_eq!(CropConfig::default().min_side, 10.0);
    }

    #[test]
    fn json_missing_fields_fall_back_to_defaults() {
        let config = CropConfig::from_json("{}").unwrap();
        assert_eq!(config, CropConfig::default());

        let config = CropConfig::from_json(r#"{"min_side": 24}"#).unwrap();
        assert_eq!(config.min_side, 24.0);
    }

    #[test]
    fn rejects_non_positive_min_side() {
        assert!(matches!(
            CropConfig::from_json(r#"{"min_side": 0}"#),
            Err(CropError::Config(_))
        ));
        assert!(CropConfig::default().with_min_side(-3.0).validate().is_err());
        assert!(CropConfig::default().with_min_side(f32::NAN).validate().is_err());
    }

    #[test]
    fn malformed_json_is_a_json_error() {
        assert!(matches!(
            CropConfig::from_json("min_side = 3"),
            Err(CropError::Json(_))
        ));
    }

    // The only test touching MIN_SIDE_ENV; the cases run in sequence so they
    // cannot race each other.
    #[test]
    fn load_reads_min_side_from_env() {
        unsafe { env::set_var(MIN_SIDE_ENV, " 24 ") };
        assert_eq!(CropConfig::load().unwrap().min_side, 24.0);

        unsafe { env::set_var(MIN_SIDE_ENV, "abc") };
        assert!(matches!(CropConfig::load(), Err(CropError::Config(_))));

        unsafe { env::set_var(MIN_SIDE_ENV, "-5") };
        assert!(matches!(CropConfig::load(), Err(CropError::Config(_))));

        unsafe { env::remove_var(MIN_SIDE_ENV) };
        assert_eq!(CropConfig::load().unwrap(), CropConfig::default());
    }
}
