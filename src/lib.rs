pub mod app;
pub mod camera;
pub mod cli;
pub mod clock;
pub mod mesh;
pub mod renderer;
pub mod scene;

pub use scene::{create_default_scene, Scene};
