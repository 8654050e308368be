use std::sync::Arc;

use winit::{
    application::ApplicationHandler,
    event::{ElementState, KeyEvent, WindowEvent},
    event_loop::ActiveEventLoop,
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowId},
};

use crate::camera::Camera;
use crate::cli::Cli;
use crate::clock::{Clock, FpsCounter};
use crate::renderer::CubeRenderer;
use crate::scene::{create_default_scene, Scene};

/// Owns the window, renderer, and animation state for the event loop
pub struct App {
    cli: Cli,
    window: Option<Arc<Window>>,
    renderer: Option<CubeRenderer>,
    scene: Scene,
    camera: Camera,
    clock: Clock,
    fps: FpsCounter,
}

impl App {
    pub fn new(cli: Cli) -> Self {
        let aspect = cli.width as f32 / cli.height.max(1) as f32;
        let camera = Camera::with_fov(aspect, cli.fov);
        let scene = create_default_scene(cli.spin);

        Self {
            cli,
            window: None,
            renderer: None,
            scene,
            camera,
            clock: Clock::new(),
            fps: FpsCounter::new(),
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            let window = match event_loop.create_window(
                Window::default_attributes()
                    .with_title("Spin Cube")
                    .with_inner_size(winit::dpi::LogicalSize::new(
                        self.cli.width,
                        self.cli.height,
                    )),
            ) {
                Ok(w) => Arc::new(w),
                Err(e) => {
                    eprintln!("Failed to create window: {}", e);
                    event_loop.exit();
                    return;
                }
            };

            // Aspect ratio comes from the surface the window actually got
            let size = window.inner_size();
            self.camera.set_aspect(size.width, size.height);

            let renderer =
                match pollster::block_on(CubeRenderer::new(window.clone(), !self.cli.no_ui)) {
                    Ok(r) => r,
                    Err(e) => {
                        eprintln!("Failed to initialize renderer: {}", e);
                        event_loop.exit();
                        return;
                    }
                };

            self.window = Some(window);
            self.renderer = Some(renderer);
            self.clock.reset();
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        // Let egui handle the event first
        if let (Some(renderer), Some(window)) = (&mut self.renderer, &self.window) {
            if renderer.handle_event(window, &event) {
                return; // egui consumed the event
            }
        }

        match event {
            WindowEvent::CloseRequested
            | WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        state: ElementState::Pressed,
                        physical_key: PhysicalKey::Code(KeyCode::Escape),
                        ..
                    },
                ..
            } => event_loop.exit(),
            WindowEvent::Resized(new_size) => {
                self.camera.set_aspect(new_size.width, new_size.height);
                if let Some(renderer) = &mut self.renderer {
                    renderer.resize(new_size);
                }
            }
            WindowEvent::RedrawRequested => {
                let delta = self.clock.tick();
                if self.fps.update(delta) && !self.cli.no_ui {
                    println!("FPS: {:.1}", self.fps.fps());
                }

                self.scene.update();

                if let (Some(renderer), Some(window)) = (&mut self.renderer, &self.window) {
                    match renderer.render(&self.scene, &self.camera, window, self.fps.fps()) {
                        Ok(()) => {}
                        Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                            renderer.resize(window.inner_size());
                        }
                        Err(wgpu::SurfaceError::OutOfMemory) => {
                            eprintln!("Out of GPU memory, exiting");
                            event_loop.exit();
                        }
                        Err(e) => eprintln!("Render error: {}", e),
                    }
                }
            }
            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}
