use glam::{Mat4, Vec3};
use spin_cube::mesh::SKY_BLUE;
use spin_cube::scene::{create_default_scene, MeshInstance, Scene, DEFAULT_SPIN};

#[cfg(test)]
mod rotation_tests {
    use super::*;

    #[test]
    fn test_default_scene_holds_exactly_one_cube() {
        let scene = create_default_scene(DEFAULT_SPIN);

        assert_eq!(scene.meshes.len(), 1, "Demo scene should hold a single mesh");
        assert_eq!(scene.meshes[0].color, SKY_BLUE);
        assert_eq!(scene.meshes[0].rotation, Vec3::ZERO);
    }

    #[test]
    fn test_rotation_increases_by_fixed_increment() {
        let mut scene = create_default_scene(DEFAULT_SPIN);

        let mut previous = scene.meshes[0].rotation;
        for frame in 1..=100 {
            scene.update();
            let current = scene.meshes[0].rotation;

            assert!(
                current.x > previous.x && current.y > previous.y,
                "Rotation must strictly increase frame-over-frame (frame {})",
                frame
            );
            assert!(
                ((current.x - previous.x) - DEFAULT_SPIN).abs() < 1e-6,
                "Per-frame increment must stay fixed"
            );
            previous = current;
        }

        assert!((previous.x - 100.0 * DEFAULT_SPIN).abs() < 1e-4);
        assert_eq!(previous.z, 0.0, "Demo cube does not spin around z");
    }

    #[test]
    fn test_update_steps_every_instance() {
        let mut scene = Scene::new();
        scene.add(MeshInstance::new(Vec3::new(0.02, 0.0, 0.0), SKY_BLUE));
        scene.add(MeshInstance::new(Vec3::new(0.0, 0.03, 0.0), SKY_BLUE));

        scene.update();

        assert!((scene.meshes[0].rotation.x - 0.02).abs() < 1e-6);
        assert!((scene.meshes[1].rotation.y - 0.03).abs() < 1e-6);
    }

    #[test]
    fn test_model_matrix_identity_before_first_frame() {
        let instance = MeshInstance::new(Vec3::splat(DEFAULT_SPIN), SKY_BLUE);

        assert!(
            instance.model_matrix().abs_diff_eq(Mat4::IDENTITY, 1e-6),
            "Unrotated mesh should have an identity model matrix"
        );
    }

    #[test]
    fn test_model_matrix_is_pure_rotation() {
        let mut instance = MeshInstance::new(Vec3::new(0.01, 0.01, 0.0), SKY_BLUE);
        for _ in 0..50 {
            instance.step();
        }

        let m = instance.model_matrix();

        // A rotation preserves lengths and has no translation
        assert!(m.col(3).abs_diff_eq(glam::Vec4::W, 1e-6));
        let rotated = m.transform_vector3(Vec3::X);
        assert!((rotated.length() - 1.0).abs() < 1e-5);
    }
}
