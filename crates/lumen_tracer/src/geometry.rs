//! Geometry kinds and the data produced by a successful intersection.

use lumen_math::{DVec3, Ray};

use crate::Sphere;

/// Result of a successful ray-geometry intersection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntersectionContext {
    /// Ray parameter of the hit, strictly positive
    pub t: f64,
    /// Point of intersection
    pub point: DVec3,
    /// Unit surface normal, pointing away from the shape's interior
    pub normal: DVec3,
}

/// Closed set of geometry kinds a shape can carry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Geometry {
    Sphere(Sphere),
}

impl Geometry {
    /// Intersect a ray with this geometry.
    ///
    /// Returns the nearest hit in front of the ray origin, if any.
    pub fn intersect(&self, ray: &Ray) -> Option<IntersectionContext> {
        match self {
            Geometry::Sphere(sphere) => sphere.intersect(ray),
        }
    }

    /// Characteristic size, used to pick numeric tolerances.
    pub fn extent(&self) -> f64 {
        match self {
            Geometry::Sphere(sphere) => sphere.radius(),
        }
    }
}

impl From<Sphere> for Geometry {
    fn from(sphere: Sphere) -> Self {
        Geometry::Sphere(sphere)
    }
}
