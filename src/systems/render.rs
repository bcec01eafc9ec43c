//! GPU rendering system
//!
//! Manages GPU rendering including:
//! - Render context and surface
//! - Canvas pipeline
//! - Tessellating the simulation's draw calls into one triangle list per frame

use std::sync::Arc;
use winit::window::Window;
use wire4d_render::{
    context::{ContextError, RenderContext},
    pipeline::{CanvasPipeline, CanvasUniforms},
    FrameCanvas,
};
use crate::config::RenderingConfig;
use super::SimulationState;

/// Render error types
#[derive(Debug)]
pub enum RenderError {
    /// GPU setup failed
    Context(ContextError),
    /// Surface was lost (window resized, minimized, etc.)
    SurfaceLost,
    /// GPU out of memory
    OutOfMemory,
    /// Other surface error
    Other(String),
}

impl From<ContextError> for RenderError {
    fn from(e: ContextError) -> Self {
        RenderError::Context(e)
    }
}

impl std::fmt::Display for RenderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RenderError::Context(e) => write!(f, "GPU setup failed: {}", e),
            RenderError::SurfaceLost => write!(f, "Surface lost"),
            RenderError::OutOfMemory => write!(f, "Out of memory"),
            RenderError::Other(msg) => write!(f, "Render error: {}", msg),
        }
    }
}

impl std::error::Error for RenderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RenderError::Context(e) => Some(e),
            _ => None,
        }
    }
}

/// Manages GPU rendering
pub struct RenderSystem {
    context: RenderContext,
    pipeline: CanvasPipeline,
    canvas: FrameCanvas,
    clear_color: wgpu::Color,
}

impl RenderSystem {
    /// Create render system from window and config
    pub fn new(
        window: Arc<Window>,
        config: &RenderingConfig,
        vsync: bool,
    ) -> Result<Self, RenderError> {
        let context = pollster::block_on(RenderContext::with_vsync(window, vsync))?;
        let pipeline = CanvasPipeline::new(&context.device, context.config.format);
        pipeline.update_uniforms(
            &context.queue,
            &CanvasUniforms::new(context.size.width, context.size.height),
        );

        let bg = config.background_color;
        Ok(Self {
            context,
            pipeline,
            canvas: FrameCanvas::new(),
            clear_color: wgpu::Color {
                r: bg[0] as f64,
                g: bg[1] as f64,
                b: bg[2] as f64,
                a: bg[3] as f64,
            },
        })
    }

    /// Handle window resize
    pub fn resize(&mut self, width: u32, height: u32) {
        self.context
            .resize(winit::dpi::PhysicalSize::new(width, height));
        let size = self.context.size;
        self.pipeline.update_uniforms(
            &self.context.queue,
            &CanvasUniforms::new(size.width, size.height),
        );
    }

    /// Reconfigure the surface after it was lost
    pub fn recover_surface(&mut self) {
        self.context.reconfigure();
    }

    /// Render a single frame
    pub fn render_frame(&mut self, simulation: &SimulationState) -> Result<(), RenderError> {
        self.canvas.clear();
        simulation.render(&mut self.canvas);
        self.pipeline.upload_vertices(
            &self.context.device,
            &self.context.queue,
            self.canvas.vertices(),
        );

        // Get surface texture
        let output = match self.context.surface.get_current_texture() {
            Ok(output) => output,
            Err(wgpu::SurfaceError::Lost) => return Err(RenderError::SurfaceLost),
            Err(wgpu::SurfaceError::OutOfMemory) => return Err(RenderError::OutOfMemory),
            Err(e) => return Err(RenderError::Other(format!("{:?}", e))),
        };

        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self
            .context
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Canvas Encoder"),
            });

        self.pipeline.render(&mut encoder, &view, self.clear_color);

        self.context.queue.submit(std::iter::once(encoder.finish()));
        output.present();

        Ok(())
    }

    /// Triangles drawn in the last frame
    pub fn vertex_count(&self) -> u32 {
        self.canvas.vertex_count()
    }

    /// Get current surface size
    pub fn size(&self) -> (u32, u32) {
        (self.context.size.width, self.context.size.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_error_display() {
        assert_eq!(format!("{}", RenderError::SurfaceLost), "Surface lost");
        assert_eq!(format!("{}", RenderError::OutOfMemory), "Out of memory");
        assert_eq!(
            format!("{}", RenderError::Other("test".to_string())),
            "Render error: test"
        );
        assert_eq!(
            format!("{}", RenderError::from(ContextError::NoAdapter)),
            "GPU setup failed: No suitable GPU adapter found"
        );
    }
}
