//! Hand overlay - finger chains under landmark markers, per detected hand

use super::state::{GpuState, GPU_STATE, MAX_VERTICES};
use super::shapes::{filled_circle, polyline, PixelSpace, Vertex};
use crate::bridge;
use crate::gesture::{Hand, FINGER_CHAINS};

/// Camera frame the landmark pixels refer to
pub const FRAME_SPACE: PixelSpace = PixelSpace { width: 640.0, height: 480.0 };

/// Overlay styling (pixels)
mod style {
    pub const ACCENT: [f32; 4] = [0.298, 0.686, 0.314, 1.0];
    pub const LINE_WIDTH: f32 = 3.0;
    pub const MARKER_RADIUS: f32 = 6.0;
    pub const MARKER_SEGMENTS: u32 = 12;
    /// Transparent so the video element underneath stays visible
    pub const BACKGROUND: wgpu::Color = wgpu::Color::TRANSPARENT;
}

/// Vertices for one hand: chains first so markers draw on top
pub fn build_hand_vertices(hand: &Hand) -> Vec<Vertex> {
    let landmarks = hand.landmarks();
    let mut vertices = Vec::new();

    for chain in FINGER_CHAINS.iter() {
        let points: Vec<(f32, f32)> = chain
            .iter()
            .map(|&idx| (landmarks[idx].x, landmarks[idx].y))
            .collect();
        vertices.extend(polyline(FRAME_SPACE, &points, style::LINE_WIDTH, style::ACCENT));
    }

    for lm in landmarks.iter() {
        vertices.extend(filled_circle(
            FRAME_SPACE,
            (lm.x, lm.y),
            style::MARKER_RADIUS,
            style::ACCENT,
            style::MARKER_SEGMENTS,
        ));
    }

    vertices
}

/// Vertices for every hand, capped to the vertex buffer
pub fn build_frame_vertices(hands: &[Hand]) -> Vec<Vertex> {
    let mut vertices: Vec<Vertex> = hands.iter().flat_map(build_hand_vertices).collect();
    vertices.truncate(MAX_VERTICES);
    vertices
}

/// Clear the overlay to `clear` and draw `vertices` as one triangle list
fn draw_overlay(
    state: &GpuState,
    clear: wgpu::Color,
    vertices: &[Vertex],
) -> Result<(), wgpu::SurfaceError> {
    let frame = state.surface.get_current_texture()?;
    let target = frame.texture.create_view(&Default::default());

    if !vertices.is_empty() {
        state.queue.write_buffer(&state.vertex_buffer, 0, bytemuck::cast_slice(vertices));
    }

    let mut encoder = state.device.create_command_encoder(&Default::default());
    {
        let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("hand overlay"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: &target,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Clear(clear),
                    store: wgpu::StoreOp::Store,
                },
            })],
            ..Default::default()
        });

        // Clearing alone still wipes the previous frame's skeleton
        if !vertices.is_empty() {
            let byte_len = std::mem::size_of_val(vertices) as wgpu::BufferAddress;
            pass.set_pipeline(&state.pipeline);
            pass.set_vertex_buffer(0, state.vertex_buffer.slice(..byte_len));
            pass.draw(0..vertices.len() as u32, 0..1);
        }
    }

    state.queue.submit([encoder.finish()]);
    frame.present();
    Ok(())
}

/// Render the current frame's hands; no-op until `init` has run
pub fn render_frame() {
    let vertices = build_frame_vertices(&bridge::get_current_hands());

    GPU_STATE.with(|cell| {
        let guard = cell.borrow();
        let Some(state) = guard.as_ref() else { return };

        match draw_overlay(state, style::BACKGROUND, &vertices) {
            Ok(()) => {}
            // Canvas resized or context lost: reconfigure, draw next frame
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                state.surface.configure(&state.device, &state.config);
            }
            Err(err) => {
                web_sys::console::warn_1(&format!("Overlay frame skipped: {}", err).into());
            }
        }
    });
}
