//! Render settings loaded from an optional JSON file.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use lumen_tracer::{RoomLayout, TracerConfig};
use serde::{Deserialize, Serialize};

/// Everything the `lumen` binary needs to produce an image.
///
/// Missing fields fall back to the reference render: 1000 pixels wide at
/// 16:9, written to `out.ppm`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderSettings {
    pub image_width: u32,
    /// Width divided by height
    pub aspect_ratio: f64,
    pub output: PathBuf,
    /// Spread buckets across all cores instead of tracing pixel by pixel
    pub parallel: bool,
    pub room: RoomLayout,
    pub tracer: TracerConfig,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            image_width: 1000,
            aspect_ratio: 16.0 / 9.0,
            output: PathBuf::from("out.ppm"),
            parallel: true,
            room: RoomLayout::default(),
            tracer: TracerConfig::default(),
        }
    }
}

impl RenderSettings {
    /// Load settings from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings from {}", path.display()))?;
        Self::from_json(&text).with_context(|| format!("Invalid settings in {}", path.display()))
    }

    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lumen_tracer::Color;

    #[test]
    fn test_empty_json_is_default() {
        let settings = RenderSettings::from_json("{}").unwrap();
        assert_eq!(settings, RenderSettings::default());
        assert_eq!(settings.tracer.max_depth, 3);
    }

    #[test]
    fn test_partial_override() {
        let settings = RenderSettings::from_json(
            r#"{
                "image_width": 320,
                "output": "room.png",
                "tracer": { "max_depth": 5, "background": { "r": 10, "g": 20, "b": 30 } },
                "room": { "room_size": 12.0 }
            }"#,
        )
        .unwrap();

        assert_eq!(settings.image_width, 320);
        assert_eq!(settings.output, PathBuf::from("room.png"));
        assert_eq!(settings.tracer.max_depth, 5);
        assert_eq!(settings.tracer.background, Color::new(10, 20, 30));
        assert_eq!(settings.tracer.ambient_light, 0.3);
        assert_eq!(settings.room.room_size, 12.0);
        assert_eq!(settings.room.wall_radius, 1e6);
    }

    #[test]
    fn test_round_trip() {
        let settings = RenderSettings {
            image_width: 64,
            parallel: false,
            ..Default::default()
        };
        let json = serde_json::to_string(&settings).unwrap();
        assert_eq!(RenderSettings::from_json(&json).unwrap(), settings);
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        assert!(RenderSettings::from_json("{ \"image_width\": -3 }").is_err());
        assert!(RenderSettings::from_json("not json").is_err());
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let err = RenderSettings::load(Path::new("/nonexistent/lumen.json")).unwrap_err();
        assert!(err.to_string().contains("Failed to read settings"));
    }
}
