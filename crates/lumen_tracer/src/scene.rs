//! Scene: shapes plus a single point light, and the nearest-hit query.

use lumen_math::{DVec3, Interval, Ray};
use serde::{Deserialize, Serialize};

use crate::{Color, HitRecord, Material, Result, Shape, Sphere, TracerError};

/// Dimensions of the reference Cornell-style room.
///
/// Walls, floor and ceiling are spheres of radius `wall_radius` placed so
/// their surfaces bound a box `2 * room_size` wide and tall, reaching
/// `depth_factor * room_size` down the -Z axis. The front wall's surface
/// passes through the origin, where the camera sits.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoomLayout {
    pub wall_radius: f64,
    pub room_size: f64,
    pub depth_factor: f64,
    pub content_radius: f64,
}

impl Default for RoomLayout {
    fn default() -> Self {
        Self {
            wall_radius: 1e6,
            room_size: 10.0,
            depth_factor: 5.0,
            content_radius: 3.0,
        }
    }
}

/// Content sphere placements as fractions of the room: `x` of the half
/// width, `z` of the depth. All three rest on the floor.
const CONTENT_PLACEMENTS: [(f64, f64, bool); 3] = [
    (0.6, 0.5, false),
    (-0.6, 0.7, true),
    (0.3, 0.8, false),
];

impl RoomLayout {
    /// Check that every sphere the layout produces is well formed, that the
    /// content spheres fit inside the room, and that the light is not buried
    /// in one of them.
    pub fn validate(&self) -> Result<()> {
        for radius in [self.wall_radius, self.content_radius] {
            if !(radius.is_finite() && radius > 0.0) {
                return Err(TracerError::InvalidRadius(radius));
            }
        }
        if !(self.room_size.is_finite() && self.room_size > 1.0) {
            return Err(TracerError::InvalidLayout(format!(
                "room_size must be greater than 1, got {}",
                self.room_size
            )));
        }
        if !(self.depth_factor.is_finite() && self.depth_factor > 1.0) {
            return Err(TracerError::InvalidLayout(format!(
                "depth_factor must be greater than 1, got {}",
                self.depth_factor
            )));
        }

        let light = self.light_position();
        let radius = self.content_radius;
        let depth = self.depth_factor * self.room_size;

        for (center, _) in self.content_spheres() {
            if light.distance_squared(center) <= radius * radius {
                return Err(TracerError::InvalidLayout(format!(
                    "light at {light:?} is inside the content sphere at {center:?}"
                )));
            }

            let fits = center.x.abs() + radius <= self.room_size
                && center.y + radius <= self.room_size
                && center.z - radius >= -depth
                && center.z + radius <= 0.0;
            if !fits {
                return Err(TracerError::InvalidLayout(format!(
                    "content sphere at {center:?} with radius {radius} pokes through the walls"
                )));
            }
        }
        Ok(())
    }

    /// Position of the point light: just under the ceiling, one room size in
    /// front of the back wall.
    pub fn light_position(&self) -> DVec3 {
        DVec3::new(
            0.0,
            self.room_size - 1.0,
            -(self.depth_factor - 1.0) * self.room_size,
        )
    }

    /// Centers of the content spheres and whether each is a mirror.
    fn content_spheres(&self) -> impl Iterator<Item = (DVec3, bool)> + '_ {
        let y = -self.room_size + self.content_radius;
        let depth = self.depth_factor * self.room_size;
        CONTENT_PLACEMENTS.iter().map(move |&(x, z, reflective)| {
            (DVec3::new(x * self.room_size, y, -z * depth), reflective)
        })
    }
}

/// A fixed collection of shapes lit by one white point light.
///
/// Immutable once rendering starts; shared read-only across workers.
#[derive(Debug, Clone)]
pub struct Scene {
    shapes: Vec<Shape>,
    light: DVec3,
}

impl Scene {
    /// Create an empty scene lit from `light`.
    pub fn new(light: DVec3) -> Self {
        Self {
            shapes: Vec::new(),
            light,
        }
    }

    /// Add a shape, builder style.
    pub fn with_shape(mut self, shape: Shape) -> Self {
        self.add(shape);
        self
    }

    /// Add a shape.
    pub fn add(&mut self, shape: Shape) {
        self.shapes.push(shape);
    }

    /// Position of the point light.
    #[inline]
    pub fn light(&self) -> DVec3 {
        self.light
    }

    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Find the shape hit first along `ray`.
    ///
    /// Linear scan over every shape keeping the smallest strictly positive
    /// `t`; on an exact tie the earlier shape wins.
    pub fn find_nearest_shape(&self, ray: &Ray) -> Option<HitRecord<'_>> {
        let mut nearest = None;
        let mut closest_so_far = f64::INFINITY;

        for shape in &self.shapes {
            if let Some(context) = shape.geometry().intersect(ray) {
                if Interval::new(0.0, closest_so_far).surrounds(context.t) {
                    closest_so_far = context.t;
                    nearest = Some(HitRecord::new(shape, context));
                }
            }
        }

        nearest
    }

    /// The reference scene: a colored room with three content spheres, the
    /// middle one a mirror.
    pub fn reference() -> Result<Self> {
        Self::room(&RoomLayout::default())
    }

    /// Build the room scene from a custom layout.
    pub fn room(layout: &RoomLayout) -> Result<Self> {
        layout.validate()?;

        let big = layout.wall_radius;
        let size = layout.room_size;
        let wall = |center: DVec3, color: Color| -> Result<Shape> {
            Ok(Shape::new(Material::diffuse(color), Sphere::new(center, big)?))
        };

        let mut scene = Self::new(layout.light_position())
            // left, right
            .with_shape(wall(DVec3::new(-(big + size), 0.0, 0.0), Color::RED)?)
            .with_shape(wall(DVec3::new(big + size, 0.0, 0.0), Color::GREEN)?)
            // floor, ceiling
            .with_shape(wall(DVec3::new(0.0, -(big + size), 0.0), Color::BLUE)?)
            .with_shape(wall(DVec3::new(0.0, big + size, 0.0), Color::WHITE)?)
            // back, front
            .with_shape(wall(
                DVec3::new(0.0, 0.0, -big - layout.depth_factor * size),
                Color::WHITE,
            )?)
            .with_shape(wall(DVec3::new(0.0, 0.0, big), Color::RED)?);

        for (center, reflective) in layout.content_spheres() {
            let material = if reflective {
                Material::mirror(Color::PURPLE)
            } else {
                Material::diffuse(Color::PURPLE)
            };
            scene.add(Shape::new(material, Sphere::new(center, layout.content_radius)?));
        }

        log::debug!(
            "Built room scene: {} shapes, light at {:?}",
            scene.len(),
            scene.light()
        );
        Ok(scene)
    }
}
