//! CPU side vertex and index data for submitting quads to a renderer.

use bytemuck::{Pod, Zeroable};
use derive_more::Deref;
use log::debug;
use static_assertions::const_assert_eq;

use crate::{INDICES_PER_QUAD, LayoutResult, QUAD_INDICES, Quad, VERTICES_PER_QUAD};

type Index = u32;

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct TextureVertex {
    pub position: [f32; 2],
    pub tex_coords: [f32; 2],
    /// RGBA
    pub color: [f32; 4],
}

const_assert_eq!(size_of::<TextureVertex>(), 32);

/// Shared index array for quads. Grows in powers of two and is never shrunk.
#[derive(Debug, Clone, Default, Deref)]
pub struct QuadIndices(Vec<Index>);

impl QuadIndices {
    pub fn quads(&self) -> usize {
        self.0.len() / INDICES_PER_QUAD
    }

    pub fn ensure_can_index_num_quads(&mut self, required_quad_count: usize) {
        let current = self.quads();
        if required_quad_count <= current {
            return;
        }

        let proposed_quad_capacity = required_quad_count
            .next_power_of_two()
            .max(current.max(1) << 1);

        debug!(
            "Growing quad indices from {current} to {proposed_quad_capacity} quads, required: {required_quad_count}"
        );

        self.0.reserve((proposed_quad_capacity - current) * INDICES_PER_QUAD);
        (current..proposed_quad_capacity).for_each(|quad_index| {
            let offset = (quad_index * VERTICES_PER_QUAD) as Index;
            self.0.extend(QUAD_INDICES.iter().map(|i| *i + offset));
        });
    }

    /// The indices for the first `quads` quads.
    pub fn slice(&self, quads: usize) -> &[Index] {
        &self.0[..quads * INDICES_PER_QUAD]
    }
}

/// Vertices of any number of laid out quads, four per quad, ready to be uploaded.
#[derive(Debug, Clone, Default)]
pub struct QuadBatch {
    vertices: Vec<TextureVertex>,
    indices: QuadIndices,
}

impl QuadBatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, quad: &Quad) {
        let color = quad.tint.to_array();
        self.vertices
            .extend(quad.positions.iter().zip(quad.uvs).map(|(p, uv)| TextureVertex {
                position: [p.x as f32, p.y as f32],
                tex_coords: uv,
                color,
            }));
        self.indices.ensure_can_index_num_quads(self.quads());
    }

    /// Appends all quads of a layout and returns how many were added.
    pub fn extend_from_layout(&mut self, result: &LayoutResult) -> usize {
        let before = self.quads();
        for quad in result {
            self.push(&quad);
        }
        self.quads() - before
    }

    pub fn quads(&self) -> usize {
        self.vertices.len() / VERTICES_PER_QUAD
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn vertices(&self) -> &[TextureVertex] {
        &self.vertices
    }

    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    /// Indices of two triangles per quad, into [`Self::vertices`].
    pub fn indices(&self) -> &[Index] {
        self.indices.slice(self.quads())
    }

    /// Drops the vertices, keeps the index array.
    pub fn clear(&mut self) {
        self.vertices.clear();
    }
}
