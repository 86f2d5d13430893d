//! Lambertian direct lighting with hard shadows.

use lumen_math::{DVec3, Ray};

use crate::{Color, HitRecord, IntersectionContext, Scene, TracerConfig};

/// Shade a diffuse hit with the scene's point light.
///
/// `intensity = ambient + max(0, n . l)`, dropping to exactly `ambient` when
/// the light is occluded. The shadow ray starts slightly off the surface,
/// with an offset chosen by the size of the shape that was hit.
pub fn shade(hit: &HitRecord<'_>, scene: &Scene, config: &TracerConfig) -> Color {
    let IntersectionContext { point, normal, .. } = hit.context;
    let light = scene.light();

    let to_light = light - point;
    debug_assert!(to_light.length_squared() > 0.0, "light lies on the surface");
    let light_dir = to_light.normalize();

    let ambient = config.ambient_light;
    let offset = config.acne.shadow_offset(hit.shape.geometry().extent());
    let shifted = point + offset * normal;

    let intensity = if is_occluded(shifted, light, scene) {
        ambient
    } else {
        ambient + normal.dot(light_dir).max(0.0)
    };

    hit.material().diffuse_color * intensity
}

/// Whether any shape lies strictly between `from` and `to`.
///
/// Casts a unit-direction ray from `from` so the hit parameter is a true
/// distance, and compares it with the distance to `to`.
pub fn is_occluded(from: DVec3, to: DVec3, scene: &Scene) -> bool {
    let to_target = to - from;
    let distance = to_target.length();
    debug_assert!(distance > 0.0, "occlusion test between coincident points");

    let shadow_ray = Ray::new(from, to_target / distance);
    scene
        .find_nearest_shape(&shadow_ray)
        .is_some_and(|hit| hit.context.t < distance)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Material, Shape, Sphere};

    const GREY: Color = Color::new(100, 100, 100);

    fn target() -> Shape {
        Shape::new(
            Material::diffuse(GREY),
            Sphere::new(DVec3::new(0.0, 0.0, -5.0), 1.0).unwrap(),
        )
    }

    fn occluder() -> Shape {
        Shape::new(
            Material::diffuse(Color::RED),
            Sphere::new(DVec3::new(0.0, 0.0, -2.0), 0.5).unwrap(),
        )
    }

    /// Hit on the front pole of the target, (0, 0, -4), normal +Z.
    fn front_hit(scene: &Scene) -> HitRecord<'_> {
        let ray = Ray::new(DVec3::new(0.0, 0.0, -3.0), DVec3::NEG_Z);
        let hit = scene.find_nearest_shape(&ray).unwrap();
        assert_eq!(hit.context.point, DVec3::new(0.0, 0.0, -4.0));
        hit
    }

    #[test]
    fn test_fully_lit_point() {
        let scene = Scene::new(DVec3::ZERO).with_shape(target());
        let config = TracerConfig::default();

        // Light straight along the normal: 0.3 + 1.0
        let color = shade(&front_hit(&scene), &scene, &config);
        assert_eq!(color, Color::new(130, 130, 130));
    }

    #[test]
    fn test_occluded_point_gets_only_ambient() {
        let config = TracerConfig::default();
        let scene = Scene::new(DVec3::ZERO)
            .with_shape(target())
            .with_shape(occluder());

        let color = shade(&front_hit(&scene), &scene, &config);
        assert_eq!(color, GREY * config.ambient_light);
    }

    #[test]
    fn test_shadow_is_independent_of_light_angle() {
        let config = TracerConfig::default();

        // Move the light around behind the occluder; the hit point's
        // n . l changes, the shaded color must not.
        for light in [
            DVec3::new(0.0, 0.0, 0.0),
            DVec3::new(0.1, 0.0, 2.0),
            DVec3::new(0.0, -0.2, 6.0),
        ] {
            let scene = Scene::new(light)
                .with_shape(target())
                .with_shape(occluder());
            let color = shade(&front_hit(&scene), &scene, &config);
            assert_eq!(color, GREY * config.ambient_light, "light at {light:?}");
        }
    }

    #[test]
    fn test_back_facing_light_gets_only_ambient() {
        let config = TracerConfig::default();
        // Light behind the target sphere; the sphere shadows itself
        let scene = Scene::new(DVec3::new(0.0, 0.0, -20.0)).with_shape(target());

        let color = shade(&front_hit(&scene), &scene, &config);
        assert_eq!(color, GREY * config.ambient_light);
    }

    #[test]
    fn test_ambient_is_configurable() {
        let config = TracerConfig::default().with_ambient_light(0.5);
        let scene = Scene::new(DVec3::ZERO)
            .with_shape(target())
            .with_shape(occluder());

        let color = shade(&front_hit(&scene), &scene, &config);
        assert_eq!(color, Color::new(50, 50, 50));
    }

    #[test]
    fn test_bright_light_saturates() {
        let config = TracerConfig::default();
        let scene = Scene::new(DVec3::ZERO).with_shape(Shape::new(
            Material::diffuse(Color::WHITE),
            Sphere::new(DVec3::new(0.0, 0.0, -5.0), 1.0).unwrap(),
        ));

        let color = shade(&front_hit(&scene), &scene, &config);
        assert_eq!(color, Color::new(255, 255, 255));
    }

    #[test]
    fn test_is_occluded() {
        let scene = Scene::new(DVec3::ZERO).with_shape(occluder());

        assert!(is_occluded(DVec3::new(0.0, 0.0, -4.0), DVec3::ZERO, &scene));
        // Target in front of the occluder
        assert!(!is_occluded(
            DVec3::new(0.0, 0.0, -4.0),
            DVec3::new(0.0, 0.0, -3.0),
            &scene
        ));
        // Occluder behind the starting point
        assert!(!is_occluded(
            DVec3::new(0.0, 0.0, -1.0),
            DVec3::new(0.0, 0.0, 5.0),
            &scene
        ));
    }

    #[test]
    fn test_room_offset_prevents_self_shadowing() {
        // Point on a room-scale floor, light above it
        let radius = 1e6;
        let floor = Shape::new(
            Material::diffuse(GREY),
            Sphere::new(DVec3::new(0.0, -radius - 10.0, 0.0), radius).unwrap(),
        );
        let scene = Scene::new(DVec3::new(0.0, 9.0, -40.0)).with_shape(floor);

        let ray = Ray::new(DVec3::ZERO, DVec3::new(0.37, -1.0, -2.3));
        let hit = scene.find_nearest_shape(&ray).unwrap();

        let config = TracerConfig::default();
        let color = shade(&hit, &scene, &config);
        assert!(color.luma_sum() > (GREY * config.ambient_light).luma_sum());
    }
}
