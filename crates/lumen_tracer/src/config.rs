//! Tracer configuration.
//!
//! Every tunable constant of the shading and reflection passes lives here so
//! that tests and the CLI can substitute alternate values without touching
//! the tracing code.

use serde::{Deserialize, Serialize};

use crate::Color;

/// Offsets applied along the surface normal when spawning secondary rays.
///
/// Floating-point error in the hit point grows with the size of the shape
/// that was hit, so shapes larger than `room_extent_threshold` get the
/// coarser `room` offset for shadow rays.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AcneCorrection {
    /// Shadow-ray offset for regular shapes
    pub regular: f64,
    /// Shadow-ray offset for room-scale shapes
    pub room: f64,
    /// Extent above which a shape counts as room-scale
    pub room_extent_threshold: f64,
    /// Origin offset for reflected rays
    pub reflection: f64,
}

impl Default for AcneCorrection {
    fn default() -> Self {
        Self {
            regular: 5e-4,
            room: 6e-2,
            room_extent_threshold: 1000.0,
            reflection: 1e-4,
        }
    }
}

impl AcneCorrection {
    /// Shadow-ray offset for a shape with the given characteristic extent.
    pub fn shadow_offset(&self, extent: f64) -> f64 {
        if extent > self.room_extent_threshold {
            self.room
        } else {
            self.regular
        }
    }

    /// No offsets at all; secondary rays start exactly on the surface.
    pub fn none() -> Self {
        Self {
            regular: 0.0,
            room: 0.0,
            room_extent_threshold: f64::INFINITY,
            reflection: 0.0,
        }
    }
}

/// Tracer configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TracerConfig {
    /// Maximum number of mirror bounces per camera ray
    pub max_depth: u32,
    /// Color returned when a ray escapes or the depth budget runs out
    pub background: Color,
    /// Light level every lit or shadowed point receives, in [0, 1)
    pub ambient_light: f64,
    /// Tint added on top of the color seen in a mirror, once per bounce
    pub reflection_tint: Color,
    /// Scale applied to `reflection_tint`
    pub reflection_strength: f64,
    /// Secondary-ray offsets
    pub acne: AcneCorrection,
}

impl Default for TracerConfig {
    fn default() -> Self {
        Self {
            max_depth: 3,
            background: Color::BLACK,
            ambient_light: 0.3,
            reflection_tint: Color::WHITE,
            reflection_strength: 0.2,
            acne: AcneCorrection::default(),
        }
    }
}

impl TracerConfig {
    /// Set the depth budget.
    pub fn with_max_depth(mut self, max_depth: u32) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Set the ambient light level.
    pub fn with_ambient_light(mut self, ambient_light: f64) -> Self {
        self.ambient_light = ambient_light;
        self
    }

    /// Set the secondary-ray offsets.
    pub fn with_acne_correction(mut self, acne: AcneCorrection) -> Self {
        self.acne = acne;
        self
    }

    /// The fill color added per mirror bounce.
    pub fn reflection_fill(&self) -> Color {
        self.reflection_tint * self.reflection_strength
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        let config = TracerConfig::default();
        assert_eq!(config.max_depth, 3);
        assert_eq!(config.background, Color::BLACK);
        assert_eq!(config.ambient_light, 0.3);
        assert_eq!(config.reflection_fill(), Color::new(49, 49, 48));
    }

    #[test]
    fn test_shadow_offset_scales_with_extent() {
        let acne = AcneCorrection::default();
        assert_eq!(acne.shadow_offset(3.0), 5e-4);
        assert_eq!(acne.shadow_offset(1000.0), 5e-4);
        assert_eq!(acne.shadow_offset(1e6), 6e-2);
    }

    #[test]
    fn test_no_correction() {
        let acne = AcneCorrection::none();
        assert_eq!(acne.shadow_offset(1e9), 0.0);
        assert_eq!(acne.reflection, 0.0);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: TracerConfig =
            serde_json::from_str(r#"{ "max_depth": 7, "acne": { "room": 0.1 } }"#).unwrap();

        assert_eq!(config.max_depth, 7);
        assert_eq!(config.ambient_light, 0.3);
        assert_eq!(config.acne.room, 0.1);
        assert_eq!(config.acne.regular, 5e-4);
    }

    #[test]
    fn test_builders() {
        let config = TracerConfig::default()
            .with_max_depth(0)
            .with_ambient_light(0.5)
            .with_acne_correction(AcneCorrection::none());

        assert_eq!(config.max_depth, 0);
        assert_eq!(config.ambient_light, 0.5);
        assert_eq!(config.acne, AcneCorrection::none());
    }
}
