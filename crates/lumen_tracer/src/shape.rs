//! Shapes (geometry + appearance) and the nearest-hit record.

use crate::{Geometry, IntersectionContext, Material};

/// A piece of scene content: exactly one geometry with one material.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Shape {
    material: Material,
    geometry: Geometry,
}

impl Shape {
    /// Create a new shape.
    pub fn new(material: Material, geometry: impl Into<Geometry>) -> Self {
        Self {
            material,
            geometry: geometry.into(),
        }
    }

    #[inline]
    pub fn material(&self) -> &Material {
        &self.material
    }

    #[inline]
    pub fn geometry(&self) -> &Geometry {
        &self.geometry
    }
}

/// The nearest hit along a ray: which shape, and where.
#[derive(Debug, Clone, Copy)]
pub struct HitRecord<'a> {
    /// Shape that was hit
    pub shape: &'a Shape,
    /// Intersection data for the hit
    pub context: IntersectionContext,
}

impl<'a> HitRecord<'a> {
    pub fn new(shape: &'a Shape, context: IntersectionContext) -> Self {
        Self { shape, context }
    }

    /// Material of the shape that was hit.
    #[inline]
    pub fn material(&self) -> &'a Material {
        self.shape.material()
    }
}
