//! Lumen - recursive CPU ray tracer.
//!
//! Casts one ray per pixel from a pinhole camera into a scene of spheres,
//! shades diffuse surfaces with a single point light and hard shadows, and
//! follows mirror reflections up to a fixed depth budget.

mod bucket;
mod camera;
mod color;
mod config;
mod error;
mod framebuffer;
mod geometry;
mod material;
mod renderer;
mod scene;
mod shading;
mod shape;
mod sphere;
mod tracer;

pub use bucket::{generate_buckets, render_bucket, Bucket, BucketResult, DEFAULT_BUCKET_SIZE};
pub use camera::{Camera, FOCAL_LENGTH, VIEWPORT_WIDTH};
pub use color::Color;
pub use config::{AcneCorrection, TracerConfig};
pub use error::{Result, TracerError};
pub use framebuffer::{Framebuffer, PixelSink};
pub use geometry::{Geometry, IntersectionContext};
pub use material::Material;
pub use renderer::{image_height, render, render_image, render_parallel, render_pixel};
pub use scene::{RoomLayout, Scene};
pub use shading::{is_occluded, shade};
pub use shape::{HitRecord, Shape};
pub use sphere::Sphere;
pub use tracer::{reflect, trace, trace_path, TracedPath};

/// Re-export the vector and ray types from lumen_math
pub use lumen_math::{DVec3, Interval, Ray};
