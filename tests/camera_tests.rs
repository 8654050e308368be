use glam::{Vec3, Vec4};
use spin_cube::camera::{Camera, DEFAULT_DISTANCE, FAR_PLANE, NEAR_PLANE};

#[cfg(test)]
mod camera_projection_tests {
    use super::*;

    #[test]
    fn test_depth_position_fixed_at_init() {
        let camera = Camera::new(800.0 / 600.0);

        assert_eq!(
            camera.position,
            Vec3::new(0.0, 0.0, DEFAULT_DISTANCE),
            "Camera should sit on the +Z axis at the default distance"
        );
        assert_eq!(camera.near, NEAR_PLANE);
        assert_eq!(camera.far, FAR_PLANE);
    }

    #[test]
    fn test_aspect_update_leaves_position_untouched() {
        let mut camera = Camera::new(1.0);
        camera.set_aspect(1920, 1080);

        assert!((camera.aspect - 1920.0 / 1080.0).abs() < 1e-6);
        assert_eq!(
            camera.position.z, DEFAULT_DISTANCE,
            "Resize must not move the camera"
        );
    }

    #[test]
    fn test_aspect_ignores_degenerate_dimensions() {
        let mut camera = Camera::new(2.0);
        camera.set_aspect(0, 600);
        camera.set_aspect(800, 0);

        assert_eq!(camera.aspect, 2.0, "Zero-sized window must not poison the aspect");
    }

    #[test]
    fn test_view_matrix_maps_eye_to_origin() {
        let camera = Camera::new(1.0);
        let eye = camera.position.extend(1.0);

        let transformed = camera.view_matrix() * eye;

        assert!(
            transformed.abs_diff_eq(Vec4::new(0.0, 0.0, 0.0, 1.0), 1e-5),
            "View matrix should map the eye position to the view-space origin, got {:?}",
            transformed
        );
    }

    #[test]
    fn test_projection_is_perspective() {
        let camera = Camera::new(800.0 / 600.0);
        let proj = camera.projection_matrix();

        // Perspective projection puts -1 in the w row of the z column
        assert!((proj.col(2).w - (-1.0)).abs() < 1e-6);
        assert_eq!(proj.col(3).w, 0.0);
    }

    #[test]
    fn test_origin_projects_to_screen_center() {
        let camera = Camera::new(800.0 / 600.0);

        let clip = camera.view_proj() * Vec4::new(0.0, 0.0, 0.0, 1.0);
        let ndc = clip / clip.w;

        assert!(ndc.x.abs() < 1e-5, "Scene origin should project to center x");
        assert!(ndc.y.abs() < 1e-5, "Scene origin should project to center y");
        assert!(
            ndc.z > 0.0 && ndc.z < 1.0,
            "Scene origin should be between the clip planes, got z = {}",
            ndc.z
        );
    }

    #[test]
    fn test_custom_fov_widens_frustum() {
        let narrow = Camera::with_fov(1.0, 30.0);
        let wide = Camera::with_fov(1.0, 90.0);

        // Larger fov means smaller focal scale on the y axis
        let narrow_scale = narrow.projection_matrix().col(1).y;
        let wide_scale = wide.projection_matrix().col(1).y;
        assert!(wide_scale < narrow_scale);
    }
}
