//! In-memory triangle soup consumed by the pipeline.
//!
//! A [`Model`] is a flat list of [`Vertex`] values read three at a time as
//! triangles. Models never change once built; every transform in
//! [`crate::transform`] returns a fresh model.

use crate::math::vec2::Vec2;
use crate::math::vec3::Vec3;

/// A position with its texture coordinate.
///
/// UVs are stored as given (possibly outside `[0, 1]`) and clamped when sampled.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vertex {
    pub position: Vec3,
    pub uv: Vec2,
}

impl Vertex {
    pub const fn new(position: Vec3, uv: Vec2) -> Self {
        Self { position, uv }
    }

    /// Returns a copy with the position replaced and the UV carried over.
    pub fn with_position(self, position: Vec3) -> Self {
        Self { position, ..self }
    }
}

/// Error raised when a vertex list cannot be grouped into triangles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    VertexCount(usize),
}

impl std::fmt::Display for ModelError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            ModelError::VertexCount(n) => {
                write!(f, "vertex count {} is not a multiple of three", n)
            }
        }
    }
}

impl std::error::Error for ModelError {}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Model {
    vertices: Vec<Vertex>,
}

impl Model {
    /// Builds a model from a flat vertex list.
    ///
    /// # Errors
    /// Returns [`ModelError::VertexCount`] if the list length is not a multiple of 3.
    pub fn new(vertices: Vec<Vertex>) -> Result<Self, ModelError> {
        if vertices.len() % 3 != 0 {
            return Err(ModelError::VertexCount(vertices.len()));
        }
        Ok(Self { vertices })
    }

    pub fn empty() -> Self {
        Self::default()
    }

    /// The unit cube `[0, 1]^3` as 12 triangles, each face mapped to the full texture.
    pub fn unit_cube() -> Self {
        Self {
            vertices: UNIT_CUBE.to_vec(),
        }
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn triangle_count(&self) -> usize {
        self.vertices.len() / 3
    }

    /// Iterates vertices in consecutive triples.
    pub fn triangles(&self) -> impl Iterator<Item = [Vertex; 3]> + '_ {
        self.vertices
            .chunks_exact(3)
            .map(|tri| [tri[0], tri[1], tri[2]])
    }

    /// Returns a new model with `f` applied to every position.
    ///
    /// Vertex count is preserved, so the triangle grouping stays valid.
    pub fn map_positions(&self, f: impl Fn(Vec3) -> Vec3) -> Self {
        Self {
            vertices: self
                .vertices
                .iter()
                .map(|v| v.with_position(f(v.position)))
                .collect(),
        }
    }
}

const fn vtx(x: f32, y: f32, z: f32, u: f32, v: f32) -> Vertex {
    Vertex::new(Vec3::new(x, y, z), Vec2::new(u, v))
}

// Winding is chosen so every face is front-facing from outside the cube,
// given the culling convention in `crate::culling`.
const UNIT_CUBE: [Vertex; 36] = [
    // bottom (y = 0)
    vtx(0.0, 0.0, 0.0, 0.0, 0.0),
    vtx(1.0, 0.0, 0.0, 1.0, 0.0),
    vtx(1.0, 0.0, 1.0, 1.0, 1.0),
    vtx(0.0, 0.0, 0.0, 0.0, 0.0),
    vtx(1.0, 0.0, 1.0, 1.0, 1.0),
    vtx(0.0, 0.0, 1.0, 0.0, 1.0),
    // top (y = 1)
    vtx(0.0, 1.0, 0.0, 0.0, 1.0),
    vtx(0.0, 1.0, 1.0, 0.0, 0.0),
    vtx(1.0, 1.0, 1.0, 1.0, 0.0),
    vtx(0.0, 1.0, 0.0, 0.0, 1.0),
    vtx(1.0, 1.0, 1.0, 1.0, 0.0),
    vtx(1.0, 1.0, 0.0, 1.0, 1.0),
    // front (z = 0)
    vtx(0.0, 0.0, 0.0, 0.0, 1.0),
    vtx(0.0, 1.0, 0.0, 0.0, 0.0),
    vtx(1.0, 1.0, 0.0, 1.0, 0.0),
    vtx(0.0, 0.0, 0.0, 0.0, 1.0),
    vtx(1.0, 1.0, 0.0, 1.0, 0.0),
    vtx(1.0, 0.0, 0.0, 1.0, 1.0),
    // back (z = 1)
    vtx(1.0, 0.0, 1.0, 0.0, 1.0),
    vtx(1.0, 1.0, 1.0, 0.0, 0.0),
    vtx(0.0, 1.0, 1.0, 1.0, 0.0),
    vtx(1.0, 0.0, 1.0, 0.0, 1.0),
    vtx(0.0, 1.0, 1.0, 1.0, 0.0),
    vtx(0.0, 0.0, 1.0, 1.0, 1.0),
    // left (x = 0)
    vtx(0.0, 0.0, 1.0, 0.0, 1.0),
    vtx(0.0, 1.0, 1.0, 0.0, 0.0),
    vtx(0.0, 1.0, 0.0, 1.0, 0.0),
    vtx(0.0, 0.0, 1.0, 0.0, 1.0),
    vtx(0.0, 1.0, 0.0, 1.0, 0.0),
    vtx(0.0, 0.0, 0.0, 1.0, 1.0),
    // right (x = 1)
    vtx(1.0, 0.0, 0.0, 0.0, 1.0),
    vtx(1.0, 1.0, 0.0, 0.0, 0.0),
    vtx(1.0, 1.0, 1.0, 1.0, 0.0),
    vtx(1.0, 0.0, 0.0, 0.0, 1.0),
    vtx(1.0, 1.0, 1.0, 1.0, 0.0),
    vtx(1.0, 0.0, 1.0, 1.0, 1.0),
];
