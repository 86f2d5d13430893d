//! Color resolution for a single ray.
//!
//! Mirrors are followed iteratively rather than recursively: the loop walks
//! the chain of reflections until it reaches a diffuse surface, escapes the
//! scene, or runs out of depth, then composes the per-bounce fill tint on top
//! of whatever it found.

use lumen_math::Ray;

use crate::{shade, Color, IntersectionContext, Scene, TracerConfig};

/// Final color of a traced ray, together with how many mirrors it bounced off.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TracedPath {
    pub color: Color,
    /// Number of reflective hops taken, never more than the depth budget
    pub bounces: u32,
}

/// Compute the color seen along `ray`.
///
/// Returns the background when `remaining_depth` is zero or nothing is hit.
pub fn trace(ray: &Ray, scene: &Scene, config: &TracerConfig, remaining_depth: u32) -> Color {
    trace_path(ray, scene, config, remaining_depth).color
}

/// Like [`trace`], also reporting the number of mirror bounces.
pub fn trace_path(
    ray: &Ray,
    scene: &Scene,
    config: &TracerConfig,
    remaining_depth: u32,
) -> TracedPath {
    let mut ray = *ray;
    let mut remaining = remaining_depth;
    let mut bounces = 0;

    let base = loop {
        if remaining == 0 {
            break config.background;
        }
        let Some(hit) = scene.find_nearest_shape(&ray) else {
            break config.background;
        };
        if !hit.material().reflective {
            break shade(&hit, scene, config);
        }

        ray = reflect(&ray, &hit.context, config.acne.reflection);
        remaining -= 1;
        bounces += 1;
    };

    // Each mirror adds its fill on top of what it reflects, innermost first.
    let fill = config.reflection_fill();
    let color = (0..bounces).fold(base, |color, _| color + fill);

    TracedPath { color, bounces }
}

/// Mirror `ray` about the hit normal, starting `offset` off the surface.
///
/// `d' = d - 2 (d . n) n`
pub fn reflect(ray: &Ray, context: &IntersectionContext, offset: f64) -> Ray {
    let direction = ray.direction();
    let normal = context.normal;
    let reflected = direction - 2.0 * direction.dot(normal) * normal;

    Ray::new(context.point + offset * normal, reflected)
}
