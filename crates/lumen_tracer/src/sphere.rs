//! Sphere primitive and the ray-sphere intersection test.

use lumen_math::{DVec3, Interval, Ray};

use crate::{IntersectionContext, Result, TracerError};

/// A sphere given by its center and a strictly positive radius.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sphere {
    center: DVec3,
    radius: f64,
}

impl Sphere {
    /// Create a new sphere, rejecting non-positive or non-finite radii.
    pub fn new(center: DVec3, radius: f64) -> Result<Self> {
        if !(radius.is_finite() && radius > 0.0) {
            return Err(TracerError::InvalidRadius(radius));
        }
        Ok(Self { center, radius })
    }

    #[inline]
    pub fn center(&self) -> DVec3 {
        self.center
    }

    #[inline]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Intersect a ray with the sphere.
    ///
    /// Substitutes the ray into `|P - center|^2 = radius^2` and keeps the
    /// smallest strictly positive root. There is no tolerance on the
    /// positivity test, so a ray starting exactly on the surface can report
    /// a hit at a tiny `t` (shadow acne); callers offset secondary-ray
    /// origins along the normal to avoid it.
    pub fn intersect(&self, ray: &Ray) -> Option<IntersectionContext> {
        let oc = ray.origin() - self.center;
        let a = ray.direction().length_squared();
        let b = 2.0 * ray.direction().dot(oc);
        let c = oc.length_squared() - self.radius * self.radius;

        let discriminant = b * b - 4.0 * a * c;
        if discriminant < 0.0 || a == 0.0 {
            return None;
        }

        // Same two roots as (-b +- sqrt(disc)) / 2a, without the cancellation
        // that wrecks the near root for room-scale radii.
        let q = -0.5 * (b + discriminant.sqrt().copysign(b));
        if q == 0.0 {
            // b == 0 and c == 0: both roots are zero
            return None;
        }
        let (r0, r1) = (q / a, c / q);
        let (near, far) = if r0 <= r1 { (r0, r1) } else { (r1, r0) };

        let t = [near, far]
            .into_iter()
            .find(|&root| Interval::FORWARD.surrounds(root))?;

        let point = ray.at(t);
        let outward = point - self.center;
        debug_assert!(outward.length_squared() > 0.0, "hit point at sphere center");

        Some(IntersectionContext {
            t,
            point,
            normal: outward.normalize(),
        })
    }
}
