//! Surface appearance.

use serde::{Deserialize, Serialize};

use crate::Color;

/// Per-surface appearance: a diffuse color and whether the surface is a mirror.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Material {
    pub diffuse_color: Color,
    pub reflective: bool,
}

impl Material {
    pub fn new(diffuse_color: Color, reflective: bool) -> Self {
        Self {
            diffuse_color,
            reflective,
        }
    }

    /// A matte surface shaded with Lambertian lighting.
    pub fn diffuse(color: Color) -> Self {
        Self::new(color, false)
    }

    /// A perfect mirror.
    ///
    /// The diffuse color is kept for completeness but never shaded.
    pub fn mirror(color: Color) -> Self {
        Self::new(color, true)
    }
}
