use glam::{EulerRot, Mat4, Vec3};

use crate::mesh::SKY_BLUE;

/// Rotation increment applied to the demo cube on x and y, per frame.
pub const DEFAULT_SPIN: f32 = 0.01;

/// One drawable object: mutable rotation state plus static appearance.
pub struct MeshInstance {
    pub rotation: Vec3,
    pub spin: Vec3,
    pub color: [f32; 4],
}

impl MeshInstance {
    pub fn new(spin: Vec3, color: [f32; 4]) -> Self {
        Self {
            rotation: Vec3::ZERO,
            spin,
            color,
        }
    }

    /// Advance rotation by the fixed per-frame increment
    pub fn step(&mut self) {
        self.rotation += self.spin;
    }

    pub fn model_matrix(&self) -> Mat4 {
        Mat4::from_euler(
            EulerRot::XYZ,
            self.rotation.x,
            self.rotation.y,
            self.rotation.z,
        )
    }
}

/// Container of drawable objects
#[derive(Default)]
pub struct Scene {
    pub meshes: Vec<MeshInstance>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, mesh: MeshInstance) {
        self.meshes.push(mesh);
    }

    /// One animation step: every instance spins by its increment
    pub fn update(&mut self) {
        for mesh in &mut self.meshes {
            mesh.step();
        }
    }
}

/// The demo scene: a single sky blue cube spinning on x and y
pub fn create_default_scene(spin: f32) -> Scene {
    let mut scene = Scene::new();
    scene.add(MeshInstance::new(Vec3::new(spin, spin, 0.0), SKY_BLUE));
    scene
}
