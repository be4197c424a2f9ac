//! Flat vertex/color geometry buffers and the quad/point emitter.

use glam::Vec3;

/// How the flat vertex stream is to be interpreted by the surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Primitive {
    /// Isolated points.
    Points,
    /// Consecutive vertex pairs form line segments.
    Lines,
    /// Consecutive vertex triples form triangles.
    #[default]
    Triangles,
}

/// Two parallel flat float sequences, 3 entries per vertex and per color,
/// paired by position.
///
/// All emission is append-only and grows both sequences by the same amount,
/// so `vertices.len() == colors.len()` holds after every operation. Existing
/// contents are never mutated; the emitter performs no validation (it only
/// appends) and cannot fail.
#[derive(Debug, Clone, Default)]
pub struct GeometryBuffer {
    vertices: Vec<f32>,
    colors: Vec<f32>,
    primitive: Primitive,
}

impl GeometryBuffer {
    /// Creates an empty buffer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The primitive interpretation of the vertex stream.
    #[must_use]
    pub fn primitive(&self) -> Primitive {
        self.primitive
    }

    /// Sets the primitive interpretation (normally once per rebuild).
    pub fn set_primitive(&mut self, primitive: Primitive) {
        self.primitive = primitive;
    }

    /// Appends one vertex (`position * scale`) with its color triple.
    pub fn push_vertex(&mut self, position: Vec3, color: Vec3, scale: f32) {
        self.vertices.push(position.x * scale);
        self.vertices.push(position.y * scale);
        self.vertices.push(position.z * scale);
        self.colors.push(color.x);
        self.colors.push(color.y);
        self.colors.push(color.z);
    }

    /// Appends two triangles covering a quad, as a fixed fan from corner 0.
    ///
    /// Index order `{0,1,2, 0,2,3}`. Callers must supply the corners in
    /// consistent (counter-clockwise) winding for correct front-face
    /// orientation; the emitter does not validate or reorder.
    pub fn push_quad(&mut self, corners: [Vec3; 4], color: Vec3, scale: f32) {
        for i in [0, 1, 2, 0, 2, 3] {
            self.push_vertex(corners[i], color, scale);
        }
    }

    /// Number of vertices currently in the buffer.
    #[must_use]
    pub fn len(&self) -> usize {
        self.vertices.len() / 3
    }

    /// Returns true if no geometry has been emitted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// The flat vertex sequence.
    #[must_use]
    pub fn vertices(&self) -> &[f32] {
        &self.vertices
    }

    /// The flat color sequence.
    #[must_use]
    pub fn colors(&self) -> &[f32] {
        &self.colors
    }

    /// Vertex data as raw bytes, for surface upload.
    #[must_use]
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    /// Color data as raw bytes, for surface upload.
    #[must_use]
    pub fn color_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.colors)
    }

    /// Discards all emitted geometry, keeping allocations.
    pub fn clear(&mut self) {
        self.vertices.clear();
        self.colors.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn unit_quad() -> [Vec3; 4] {
        [
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(1.0, 1.0, 0.0),
            Vec3::new(0.0, 1.0, 0.0),
        ]
    }

    #[test]
    fn vertex_appends_scaled_position_and_raw_color() {
        let mut buf = GeometryBuffer::new();
        buf.push_vertex(Vec3::new(1.0, 2.0, 3.0), Vec3::new(0.1, 0.2, 0.3), 2.0);
        assert_eq!(buf.vertices(), &[2.0, 4.0, 6.0]);
        assert_eq!(buf.colors(), &[0.1, 0.2, 0.3]);
        assert_eq!(buf.len(), 1);
    }

    #[test]
    fn quad_uses_the_fixed_fan() {
        let mut buf = GeometryBuffer::new();
        buf.push_quad(unit_quad(), Vec3::ONE, 1.0);
        // 6 vertices = 2 triangles, fan order 0,1,2,0,2,3.
        assert_eq!(buf.len(), 6);
        let v = buf.vertices();
        assert_eq!(&v[0..3], &[0.0, 0.0, 0.0]); // corner 0
        assert_eq!(&v[9..12], &[0.0, 0.0, 0.0]); // corner 0 again
        assert_eq!(&v[15..18], &[0.0, 1.0, 0.0]); // corner 3
    }

    #[test]
    fn quad_does_not_disturb_earlier_contents() {
        let mut buf = GeometryBuffer::new();
        buf.push_vertex(Vec3::X, Vec3::ONE, 1.0);
        let before = buf.vertices().to_vec();
        buf.push_quad(unit_quad(), Vec3::ONE, 1.0);
        assert_eq!(&buf.vertices()[..3], &before[..]);
    }

    #[test]
    fn byte_views_cover_the_same_data() {
        let mut buf = GeometryBuffer::new();
        buf.push_quad(unit_quad(), Vec3::ONE, 1.0);
        assert_eq!(buf.vertex_bytes().len(), buf.vertices().len() * 4);
        assert_eq!(buf.color_bytes().len(), buf.colors().len() * 4);
    }

    proptest! {
        #[test]
        fn parity_holds_for_any_emission_sequence(
            points in proptest::collection::vec(
                (-100.0f32..100.0, -100.0f32..100.0, -100.0f32..100.0), 0..20),
            quads in 0usize..10,
            scale in 0.01f32..100.0,
        ) {
            let mut buf = GeometryBuffer::new();
            for (x, y, z) in &points {
                buf.push_vertex(Vec3::new(*x, *y, *z), Vec3::ONE, scale);
            }
            for _ in 0..quads {
                buf.push_quad(unit_quad(), Vec3::ONE, scale);
            }
            prop_assert_eq!(buf.vertices().len(), buf.colors().len());
            // Each quad contributes 18 floats (2 triangles), each point 3.
            prop_assert_eq!(buf.vertices().len(), points.len() * 3 + quads * 18);
        }
    }
}
