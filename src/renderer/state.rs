//! GPU State management - overlay canvas, surface and pipeline
//!
//! The overlay is a transparent canvas stacked over the `<video>` element,
//! so the surface must support a non-opaque alpha mode when one exists and
//! the surface is reconfigured in place when the browser drops it.

use std::cell::RefCell;
use wasm_bindgen::prelude::*;
use super::shapes::Vertex;

/// Canvas element the overlay draws into
pub const CANVAS_ID: &str = "overlay";
pub const CANVAS_WIDTH: u32 = 640;
pub const CANVAS_HEIGHT: u32 = 480;

/// Vertex buffer capacity; overlay output beyond this is dropped
pub const MAX_VERTICES: usize = 4096;

/// Errors that can occur during GPU initialization
#[derive(Debug, PartialEq)]
pub enum GpuStateError {
    NoWindow,
    NoDocument,
    NoCanvas,
    SurfaceCreationFailed(String),
    NoAdapter,
    DeviceCreationFailed(String),
    /// Adapter reported no texture format or no alpha mode for the canvas
    UnsupportedSurface(&'static str),
}

impl From<GpuStateError> for JsValue {
    fn from(err: GpuStateError) -> Self {
        let msg = match err {
            GpuStateError::NoWindow => "No window found".to_string(),
            GpuStateError::NoDocument => "No document found".to_string(),
            GpuStateError::NoCanvas => format!("No canvas with id '{}' found", CANVAS_ID),
            GpuStateError::SurfaceCreationFailed(e) => format!("Overlay surface creation failed: {}", e),
            GpuStateError::NoAdapter => "No WebGPU adapter available for the overlay".to_string(),
            GpuStateError::DeviceCreationFailed(e) => format!("Device creation failed: {}", e),
            GpuStateError::UnsupportedSurface(what) => format!("Overlay canvas reports no {}", what),
        };
        JsValue::from_str(&msg)
    }
}

/// Everything `render_frame` needs between frames
pub(crate) struct GpuState {
    pub device: wgpu::Device,
    pub queue: wgpu::Queue,
    pub surface: wgpu::Surface<'static>,
    pub config: wgpu::SurfaceConfiguration,
    pub pipeline: wgpu::RenderPipeline,
    pub vertex_buffer: wgpu::Buffer,
}

// Thread-local storage for GPU state (WASM is single-threaded)
thread_local! {
    pub(crate) static GPU_STATE: RefCell<Option<GpuState>> = RefCell::new(None);
}

/// sRGB if offered, else whatever the adapter lists first
pub fn pick_surface_format(formats: &[wgpu::TextureFormat]) -> Option<wgpu::TextureFormat> {
    formats
        .iter()
        .copied()
        .find(|f| f.is_srgb())
        .or_else(|| formats.first().copied())
}

/// Prefer a mode that lets cleared pixels stay see-through
pub fn pick_alpha_mode(modes: &[wgpu::CompositeAlphaMode]) -> Option<wgpu::CompositeAlphaMode> {
    const PREFERRED: [wgpu::CompositeAlphaMode; 2] = [
        wgpu::CompositeAlphaMode::PreMultiplied,
        wgpu::CompositeAlphaMode::PostMultiplied,
    ];

    PREFERRED
        .iter()
        .copied()
        .find(|m| modes.contains(m))
        .or_else(|| modes.first().copied())
}

#[cfg(target_arch = "wasm32")]
fn overlay_canvas() -> Result<web_sys::HtmlCanvasElement, GpuStateError> {
    let canvas = web_sys::window()
        .ok_or(GpuStateError::NoWindow)?
        .document()
        .ok_or(GpuStateError::NoDocument)?
        .get_element_by_id(CANVAS_ID)
        .ok_or(GpuStateError::NoCanvas)?
        .dyn_into::<web_sys::HtmlCanvasElement>()
        .map_err(|_| GpuStateError::NoCanvas)?;

    canvas.set_width(CANVAS_WIDTH);
    canvas.set_height(CANVAS_HEIGHT);
    Ok(canvas)
}

/// Pick format and alpha mode for the overlay canvas and apply them
pub fn configure_overlay_surface(
    surface: &wgpu::Surface<'static>,
    adapter: &wgpu::Adapter,
    device: &wgpu::Device,
) -> Result<wgpu::SurfaceConfiguration, GpuStateError> {
    let caps = surface.get_capabilities(adapter);
    let format = pick_surface_format(&caps.formats)
        .ok_or(GpuStateError::UnsupportedSurface("texture format"))?;
    let alpha_mode = pick_alpha_mode(&caps.alpha_modes)
        .ok_or(GpuStateError::UnsupportedSurface("alpha mode"))?;

    let config = wgpu::SurfaceConfiguration {
        usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
        format,
        width: CANVAS_WIDTH,
        height: CANVAS_HEIGHT,
        present_mode: wgpu::PresentMode::AutoVsync,
        alpha_mode,
        view_formats: vec![],
        desired_maximum_frame_latency: 2,
    };
    surface.configure(device, &config);
    Ok(config)
}

/// Flat-colour triangle pipeline for overlay geometry
pub fn build_overlay_pipeline(device: &wgpu::Device, format: wgpu::TextureFormat) -> wgpu::RenderPipeline {
    let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some("overlay.wgsl"),
        source: wgpu::ShaderSource::Wgsl(include_str!("../shader.wgsl").into()),
    });

    // No bind groups: positions arrive in clip space, colour per vertex
    device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        label: Some("hand overlay"),
        layout: None,
        vertex: wgpu::VertexState {
            module: &shader,
            entry_point: Some("vs_main"),
            buffers: &[Vertex::desc()],
            compilation_options: Default::default(),
        },
        fragment: Some(wgpu::FragmentState {
            module: &shader,
            entry_point: Some("fs_main"),
            targets: &[Some(wgpu::ColorTargetState {
                format,
                blend: Some(wgpu::BlendState::PREMULTIPLIED_ALPHA_BLENDING),
                write_mask: wgpu::ColorWrites::ALL,
            })],
            compilation_options: Default::default(),
        }),
        primitive: wgpu::PrimitiveState::default(),
        depth_stencil: None,
        multisample: wgpu::MultisampleState::default(),
        multiview: None,
        cache: None,
    })
}

/// Set up WebGPU on the overlay canvas and store it for `render_frame`
#[cfg(target_arch = "wasm32")]
pub async fn initialize_gpu() -> Result<(), GpuStateError> {
    let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
        backends: wgpu::Backends::BROWSER_WEBGPU,
        ..Default::default()
    });

    let surface = instance
        .create_surface(wgpu::SurfaceTarget::Canvas(overlay_canvas()?))
        .map_err(|e| GpuStateError::SurfaceCreationFailed(e.to_string()))?;

    // Overlay is light work; do not wake a discrete GPU for it
    let adapter = instance
        .request_adapter(&wgpu::RequestAdapterOptions {
            power_preference: wgpu::PowerPreference::LowPower,
            compatible_surface: Some(&surface),
            force_fallback_adapter: false,
        })
        .await
        .ok_or(GpuStateError::NoAdapter)?;

    let (device, queue) = adapter
        .request_device(
            &wgpu::DeviceDescriptor {
                label: Some("hand overlay device"),
                required_limits: wgpu::Limits::downlevel_webgl2_defaults(),
                ..Default::default()
            },
            None,
        )
        .await
        .map_err(|e| GpuStateError::DeviceCreationFailed(e.to_string()))?;

    let config = configure_overlay_surface(&surface, &adapter, &device)?;
    let pipeline = build_overlay_pipeline(&device, config.format);

    let vertex_buffer = device.create_buffer(&wgpu::BufferDescriptor {
        label: Some("overlay vertices"),
        size: (MAX_VERTICES * std::mem::size_of::<Vertex>()) as wgpu::BufferAddress,
        usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    });

    GPU_STATE.with(|cell| {
        cell.replace(Some(GpuState {
            device,
            queue,
            surface,
            config,
            pipeline,
            vertex_buffer,
        }))
    });

    Ok(())
}
