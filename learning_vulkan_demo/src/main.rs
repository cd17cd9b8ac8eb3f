//! LearningVulkan demo - opens a window and presents on every repaint

use learning_vulkan::lv::{Config, Renderer};
use learning_vulkan::{lv_error, lv_info};
use learning_vulkan_renderer_vulkan::VulkanRenderer;
use std::process::ExitCode;
use winit::application::ApplicationHandler;
use winit::dpi::PhysicalSize;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Window, WindowId};

const WINDOW_TITLE: &str = "Application";
const WINDOW_WIDTH: u32 = 1280;
const WINDOW_HEIGHT: u32 = 720;

#[derive(Default)]
struct App {
    // Declared before the window so it is dropped first
    renderer: Option<Box<dyn Renderer>>,
    window: Option<Window>,
    failed: bool,
}

impl App {
    fn fail(&mut self, event_loop: &ActiveEventLoop, error: learning_vulkan::lv::Error) {
        lv_error!("lv::demo", "{}", error);
        self.failed = true;
        self.renderer = None;
        event_loop.exit();
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let attributes = Window::default_attributes()
            .with_title(WINDOW_TITLE)
            .with_inner_size(PhysicalSize::new(WINDOW_WIDTH, WINDOW_HEIGHT));
        let window = match event_loop.create_window(attributes) {
            Ok(window) => window,
            Err(e) => {
                lv_error!("lv::demo", "Failed to create window: {}", e);
                self.failed = true;
                event_loop.exit();
                return;
            }
        };

        let size = window.inner_size();
        match VulkanRenderer::initialize(size.width, size.height, &window, Config::default()) {
            Ok(renderer) => {
                let (width, height) = renderer.extent();
                lv_info!("lv::demo", "Rendering at {}x{}", width, height);
                self.renderer = Some(Box::new(renderer));
                self.window = Some(window);
            }
            Err(e) => {
                self.window = Some(window);
                self.fail(event_loop, e);
            }
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                lv_info!("lv::demo", "Close requested");
                self.renderer = None;
                event_loop.exit();
            }
            WindowEvent::RedrawRequested => {
                let result = match self.renderer.as_mut() {
                    Some(renderer) => renderer.render(),
                    None => Ok(()),
                };
                if let Err(e) = result {
                    self.fail(event_loop, e);
                }
            }
            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let (Some(window), Some(_)) = (&self.window, &self.renderer) {
            window.request_redraw();
        }
    }
}

fn main() -> ExitCode {
    let event_loop = match EventLoop::new() {
        Ok(event_loop) => event_loop,
        Err(e) => {
            lv_error!("lv::demo", "Failed to create event loop: {}", e);
            return ExitCode::FAILURE;
        }
    };
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = App::default();
    if let Err(e) = event_loop.run_app(&mut app) {
        lv_error!("lv::demo", "Event loop error: {}", e);
        return ExitCode::FAILURE;
    }

    if app.failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
