//! Pinhole camera for ray generation.

use lumen_math::{DVec3, Ray};

/// Default viewport width in world units.
pub const VIEWPORT_WIDTH: f64 = 2.0;

/// Default distance from the camera center to the viewport.
pub const FOCAL_LENGTH: f64 = 1.0;

/// Pinhole camera looking down -Z with +Y up.
///
/// Maps pixel coordinates to world-space rays through pixel centers. The
/// viewport height follows the image aspect ratio.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    image_width: u32,
    image_height: u32,
    center: DVec3,

    // Derived at construction
    pixel00_loc: DVec3,
    pixel_delta_u: DVec3,
    pixel_delta_v: DVec3,
}

impl Camera {
    /// Create a camera at the origin with the default viewport and focal length.
    pub fn new(image_width: u32, image_height: u32) -> Self {
        Self::with_optics(
            image_width,
            image_height,
            VIEWPORT_WIDTH,
            FOCAL_LENGTH,
            DVec3::ZERO,
        )
    }

    /// Create a camera with explicit viewport width, focal length and center.
    pub fn with_optics(
        image_width: u32,
        image_height: u32,
        viewport_width: f64,
        focal_length: f64,
        center: DVec3,
    ) -> Self {
        debug_assert!(
            image_width > 0 && image_height > 0,
            "camera needs a non-empty image, got {image_width}x{image_height}"
        );

        let viewport_height = viewport_width * (image_height as f64 / image_width as f64);

        // Horizontal edge runs left to right, vertical edge top to bottom
        let viewport_u = DVec3::new(viewport_width, 0.0, 0.0);
        let viewport_v = DVec3::new(0.0, -viewport_height, 0.0);

        let pixel_delta_u = viewport_u / image_width as f64;
        let pixel_delta_v = viewport_v / image_height as f64;

        let viewport_upper_left =
            center - DVec3::new(0.0, 0.0, focal_length) - viewport_u / 2.0 - viewport_v / 2.0;
        let pixel00_loc = viewport_upper_left + 0.5 * (pixel_delta_u + pixel_delta_v);

        Self {
            image_width,
            image_height,
            center,
            pixel00_loc,
            pixel_delta_u,
            pixel_delta_v,
        }
    }

    /// Ray from the camera center through pixel (x, y).
    ///
    /// Integer coordinates land on pixel centers. The direction is not
    /// normalized.
    pub fn get_ray(&self, x: f64, y: f64) -> Ray {
        let pixel_center = self.pixel00_loc + x * self.pixel_delta_u + y * self.pixel_delta_v;
        Ray::new(self.center, pixel_center - self.center)
    }

    pub fn image_width(&self) -> u32 {
        self.image_width
    }

    pub fn image_height(&self) -> u32 {
        self.image_height
    }

    pub fn center(&self) -> DVec3 {
        self.center
    }

    /// World-space location of the center of pixel (0, 0).
    pub fn pixel00_loc(&self) -> DVec3 {
        self.pixel00_loc
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: DVec3, b: DVec3) -> bool {
        (a - b).length() < 1e-12
    }

    #[test]
    fn test_pixel_deltas() {
        let camera = Camera::new(200, 100);

        assert!(approx_eq(camera.pixel_delta_u, DVec3::new(0.01, 0.0, 0.0)));
        assert!(approx_eq(camera.pixel_delta_v, DVec3::new(0.0, -0.01, 0.0)));
    }

    #[test]
    fn test_pixel00_is_half_a_pixel_in() {
        let camera = Camera::new(200, 100);

        // Viewport is 2.0 x 1.0, upper-left corner at (-1, 0.5, -1)
        assert!(approx_eq(
            camera.pixel00_loc(),
            DVec3::new(-1.0 + 0.005, 0.5 - 0.005, -1.0)
        ));
    }

    #[test]
    fn test_center_ray_points_down_negative_z() {
        let camera = Camera::new(101, 101);
        let ray = camera.get_ray(50.0, 50.0);

        assert_eq!(ray.origin, DVec3::ZERO);
        assert!(approx_eq(ray.direction, DVec3::new(0.0, 0.0, -1.0)));
    }

    #[test]
    fn test_image_axes() {
        let camera = Camera::new(100, 100);

        // x grows to the right, y grows downward
        let left = camera.get_ray(0.0, 50.0).direction;
        let right = camera.get_ray(99.0, 50.0).direction;
        let top = camera.get_ray(50.0, 0.0).direction;
        let bottom = camera.get_ray(50.0, 99.0).direction;

        assert!(left.x < 0.0 && right.x > 0.0);
        assert!(top.y > 0.0 && bottom.y < 0.0);
    }

    #[test]
    fn test_direction_is_not_normalized() {
        let camera = Camera::new(100, 100);
        let corner = camera.get_ray(0.0, 0.0);
        assert!(corner.direction.length() > 1.0);
    }

    #[test]
    fn test_with_optics() {
        let center = DVec3::new(1.0, 2.0, 3.0);
        let camera = Camera::with_optics(11, 11, 4.0, 2.0, center);
        let ray = camera.get_ray(5.0, 5.0);

        assert_eq!(ray.origin, center);
        assert!(approx_eq(ray.direction, DVec3::new(0.0, 0.0, -2.0)));
        assert_eq!(camera.image_width(), 11);
        assert_eq!(camera.image_height(), 11);
        assert_eq!(camera.center(), center);
    }
}
