//! Shape primitives - overlay geometry built in pixel space, emitted in clip space

/// Vertex structure for rendering colored shapes
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    const ATTRIBS: [wgpu::VertexAttribute; 2] = wgpu::vertex_attr_array![
        0 => Float32x2,
        1 => Float32x4
    ];

    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRIBS,
        }
    }
}

/// Maps frame pixels (origin top-left, y down) to clip space (-1..1, y up)
#[derive(Clone, Copy, Debug)]
pub struct PixelSpace {
    pub width: f32,
    pub height: f32,
}

impl PixelSpace {
    pub fn to_clip(&self, x: f32, y: f32) -> [f32; 2] {
        [x / self.width * 2.0 - 1.0, 1.0 - y / self.height * 2.0]
    }

    fn vertex(&self, x: f32, y: f32, color: [f32; 4]) -> Vertex {
        Vertex { position: self.to_clip(x, y), color }
    }
}

/// Filled circle as a triangle fan, radius in pixels
pub fn filled_circle(
    space: PixelSpace,
    center: (f32, f32),
    radius: f32,
    color: [f32; 4],
    segments: u32,
) -> Vec<Vertex> {
    let (cx, cy) = center;
    let mut vertices = Vec::with_capacity((segments * 3) as usize);

    for i in 0..segments {
        let a1 = (i as f32 / segments as f32) * std::f32::consts::TAU;
        let a2 = ((i + 1) as f32 / segments as f32) * std::f32::consts::TAU;

        vertices.push(space.vertex(cx, cy, color));
        vertices.push(space.vertex(cx + radius * a1.cos(), cy + radius * a1.sin(), color));
        vertices.push(space.vertex(cx + radius * a2.cos(), cy + radius * a2.sin(), color));
    }

    vertices
}

/// Line segment as a quad of `width` pixels
pub fn line_segment(
    space: PixelSpace,
    from: (f32, f32),
    to: (f32, f32),
    width: f32,
    color: [f32; 4],
) -> Vec<Vertex> {
    let dx = to.0 - from.0;
    let dy = to.1 - from.1;
    let len = (dx * dx + dy * dy).sqrt();

    if len < 0.001 { return vec![]; }

    // Half-width offset perpendicular to the segment
    let px = -dy / len * width * 0.5;
    let py = dx / len * width * 0.5;

    let a = space.vertex(from.0 - px, from.1 - py, color);
    let b = space.vertex(from.0 + px, from.1 + py, color);
    let c = space.vertex(to.0 + px, to.1 + py, color);
    let d = space.vertex(to.0 - px, to.1 - py, color);

    vec![a, b, c, a, c, d]
}

/// Connected path through `points`
pub fn polyline(
    space: PixelSpace,
    points: &[(f32, f32)],
    width: f32,
    color: [f32; 4],
) -> Vec<Vertex> {
    points
        .windows(2)
        .flat_map(|pair| line_segment(space, pair[0], pair[1], width, color))
        .collect()
}
