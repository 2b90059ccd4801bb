//! Gallery window: winit event loop, wgpu surface, egui rendering.

use std::sync::Arc;

use buttonry_core::{ButtonStyles, Gallery};
use buttonry_widgets::theme;
use egui::Color32;
use vello::util::{RenderContext, RenderSurface};
use vello::wgpu::PresentMode;
use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, EventLoop};
use winit::window::{Window, WindowId};

use crate::ui::{render_ui, UiAction, UiState};
use crate::{GalleryError, GalleryResult};

/// Window configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub background: Color32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            title: "Buttonry".to_string(),
            width: 1100,
            height: 860,
            background: theme::PAGE_BG,
        }
    }
}

/// Runtime state, created once the window exists.
struct AppState {
    window: Arc<Window>,
    surface: RenderSurface<'static>,
    egui_ctx: egui::Context,
    egui_state: egui_winit::State,
    egui_renderer: egui_wgpu::Renderer,
}

/// Main application struct.
pub struct App {
    config: AppConfig,
    ui_state: UiState,
    state: Option<AppState>,
    render_cx: Option<RenderContext>,
    /// First fatal error; ends the event loop.
    error: Option<GalleryError>,
}

impl App {
    /// Create the application for a resolved gallery.
    pub fn new(config: AppConfig, styles: &ButtonStyles, gallery: Gallery) -> GalleryResult<Self> {
        Ok(Self {
            config,
            ui_state: UiState::new(styles, gallery)?,
            state: None,
            render_cx: None,
            error: None,
        })
    }

    /// Run the event loop until the window closes.
    pub fn run(mut self) -> GalleryResult<()> {
        let event_loop = EventLoop::new()?;
        event_loop.run_app(&mut self)?;
        match self.error.take() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, err: GalleryError) {
        log::error!("{}", err);
        if self.error.is_none() {
            self.error = Some(err);
        }
        event_loop.exit();
    }

    fn init(&mut self, event_loop: &ActiveEventLoop) -> GalleryResult<()> {
        let window_attrs = Window::default_attributes()
            .with_title(&self.config.title)
            .with_inner_size(LogicalSize::new(self.config.width, self.config.height));
        let window = Arc::new(event_loop.create_window(window_attrs)?);

        log::info!("Window created, initializing renderer...");

        let size = window.inner_size();
        let (width, height) = if size.width == 0 || size.height == 0 {
            (self.config.width, self.config.height)
        } else {
            (size.width, size.height)
        };

        let render_cx = self.render_cx.get_or_insert_with(RenderContext::new);
        let surface = pollster::block_on(render_cx.create_surface(
            window.clone(),
            width,
            height,
            PresentMode::AutoVsync,
        ))
        .map_err(|e| GalleryError::Surface(e.to_string()))?;

        let device = &render_cx.devices[surface.dev_id].device;
        let egui_ctx = egui::Context::default();
        let egui_state = egui_winit::State::new(
            egui_ctx.clone(),
            egui::ViewportId::ROOT,
            &window,
            Some(window.scale_factor() as f32),
            None,
            None,
        );
        let egui_renderer = egui_wgpu::Renderer::new(
            device,
            surface.config.format,
            egui_wgpu::RendererOptions::default(),
        );

        log::info!("Buttonry initialized - {}x{}", width, height);

        window.request_redraw();
        self.state = Some(AppState {
            window,
            surface,
            egui_ctx,
            egui_state,
            egui_renderer,
        });
        Ok(())
    }

    fn redraw(&mut self) {
        let Some(state) = self.state.as_mut() else {
            return;
        };
        let Some(render_cx) = self.render_cx.as_ref() else {
            return;
        };

        let egui_input = state.egui_state.take_egui_input(&state.window);
        let mut action = None;
        let ui_state = &mut self.ui_state;
        let egui_output = state.egui_ctx.run(egui_input, |ctx| {
            if let Some(a) = render_ui(ctx, ui_state) {
                action = Some(a);
            }
        });
        state
            .egui_state
            .handle_platform_output(&state.window, egui_output.platform_output);
        let egui_primitives = state
            .egui_ctx
            .tessellate(egui_output.shapes, egui_output.pixels_per_point);

        let device_handle = &render_cx.devices[state.surface.dev_id];
        let device = &device_handle.device;
        let queue = &device_handle.queue;

        let surface_texture = match state.surface.surface.get_current_texture() {
            Ok(t) => t,
            Err(e) => {
                log::warn!("Failed to get surface texture: {:?}", e);
                return;
            }
        };
        let surface_view = surface_texture
            .texture
            .create_view(&vello::wgpu::TextureViewDescriptor::default());

        for (id, image_delta) in &egui_output.textures_delta.set {
            state.egui_renderer.update_texture(device, queue, *id, image_delta);
        }

        let screen_descriptor = egui_wgpu::ScreenDescriptor {
            size_in_pixels: [state.surface.config.width, state.surface.config.height],
            pixels_per_point: egui_output.pixels_per_point,
        };

        let mut encoder = device.create_command_encoder(&vello::wgpu::CommandEncoderDescriptor {
            label: Some("egui encoder"),
        });
        state.egui_renderer.update_buffers(
            device,
            queue,
            &mut encoder,
            &egui_primitives,
            &screen_descriptor,
        );

        let bg = egui::Rgba::from(self.config.background);
        let render_pass = encoder.begin_render_pass(&vello::wgpu::RenderPassDescriptor {
            label: Some("egui render pass"),
            color_attachments: &[Some(vello::wgpu::RenderPassColorAttachment {
                view: &surface_view,
                resolve_target: None,
                ops: vello::wgpu::Operations {
                    load: vello::wgpu::LoadOp::Clear(vello::wgpu::Color {
                        r: bg.r() as f64,
                        g: bg.g() as f64,
                        b: bg.b() as f64,
                        a: bg.a() as f64,
                    }),
                    store: vello::wgpu::StoreOp::Store,
                },
                depth_slice: None,
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
        });
        // egui-wgpu wants a 'static render pass
        let mut render_pass = render_pass.forget_lifetime();
        state
            .egui_renderer
            .render(&mut render_pass, &egui_primitives, &screen_descriptor);
        drop(render_pass);
        queue.submit(std::iter::once(encoder.finish()));

        for id in &egui_output.textures_delta.free {
            state.egui_renderer.free_texture(id);
        }
        surface_texture.present();

        let repaint_now = egui_output
            .viewport_output
            .get(&egui::ViewportId::ROOT)
            .is_some_and(|v| v.repaint_delay.is_zero());
        if repaint_now {
            state.window.request_redraw();
        }

        if let Some(action) = action {
            self.handle_action(action);
        }
    }

    fn handle_action(&mut self, action: UiAction) {
        match action {
            UiAction::ExportHtml => {
                #[cfg(feature = "native")]
                {
                    let exported = crate::export::export_html_dialog(
                        &self.ui_state.gallery,
                        &self.config.title,
                    );
                    // A failed export is reported, not fatal.
                    self.ui_state.status = match exported {
                        Ok(Some(path)) => format!("Exported to {}", path.display()),
                        Ok(None) => "Export cancelled".to_string(),
                        Err(e) => {
                            log::warn!("Export failed: {}", e);
                            format!("Export failed: {}", e)
                        }
                    };
                }
            }
        }
        if let Some(state) = &self.state {
            state.window.request_redraw();
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.state.is_some() {
            return;
        }
        log::info!("Creating window...");
        if let Err(err) = self.init(event_loop) {
            self.fail(event_loop, err);
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        let Some(state) = &mut self.state else {
            return;
        };

        let egui_response = state.egui_state.on_window_event(&state.window, &event);
        if egui_response.repaint {
            state.window.request_redraw();
        }

        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }

            WindowEvent::Resized(size) => {
                if size.width == 0 || size.height == 0 {
                    return;
                }
                if let Some(render_cx) = self.render_cx.as_mut() {
                    render_cx.resize_surface(&mut state.surface, size.width, size.height);
                }
                state.window.request_redraw();
            }

            WindowEvent::RedrawRequested => {
                self.redraw();
            }

            _ => {}
        }
    }
}
