//! Wavefront OBJ loading.
//!
//! OBJ files are parsed with `tobj`, triangulated, and flattened into a
//! [`Model`]: each face index becomes one vertex, so shared corners are
//! duplicated. Texture V is flipped because OBJ puts the origin at the
//! bottom-left while textures are stored top row first.

use std::io::BufRead;
use std::path::Path;

use crate::math::vec2::Vec2;
use crate::math::vec3::Vec3;
use crate::model::{Model, ModelError, Vertex};

/// Error raised while loading a model.
#[derive(Debug)]
pub enum LoadError {
    Obj(tobj::LoadError),
    VertexCount(usize),
    FaceIndexOutOfRange { index: u32, vertex_count: usize },
}

impl std::fmt::Display for LoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            LoadError::Obj(e) => write!(f, "OBJ error: {}", e),
            LoadError::VertexCount(n) => {
                write!(f, "{} face vertices do not form whole triangles", n)
            }
            LoadError::FaceIndexOutOfRange {
                index,
                vertex_count,
            } => write!(
                f,
                "face index {} out of range for {} vertices",
                index, vertex_count
            ),
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoadError::Obj(e) => Some(e),
            _ => None,
        }
    }
}

impl From<tobj::LoadError> for LoadError {
    fn from(e: tobj::LoadError) -> Self {
        LoadError::Obj(e)
    }
}

impl From<ModelError> for LoadError {
    fn from(e: ModelError) -> Self {
        match e {
            ModelError::VertexCount(n) => LoadError::VertexCount(n),
        }
    }
}

fn load_options() -> tobj::LoadOptions {
    tobj::LoadOptions {
        single_index: true,
        triangulate: true,
        ..Default::default()
    }
}

/// Loads an OBJ file into a flat triangle list.
///
/// A file that cannot be opened is not an error: a warning is logged and an
/// empty model is returned so the frame loop keeps running with nothing to
/// draw. Malformed contents are errors.
pub fn load_obj<P: AsRef<Path>>(path: P) -> Result<Model, LoadError> {
    let path = path.as_ref();
    match tobj::load_obj(path, &load_options()) {
        Ok((models, _materials)) => {
            let model = flatten(&models)?;
            log::info!(
                "loaded {} ({} triangles)",
                path.display(),
                model.triangle_count()
            );
            Ok(model)
        }
        Err(tobj::LoadError::OpenFileFailed) => {
            log::warn!("could not open model {}, using empty model", path.display());
            Ok(Model::empty())
        }
        Err(e) => Err(e.into()),
    }
}

/// Parses OBJ text from a reader. Material libraries are ignored.
pub fn parse_obj<B: BufRead>(reader: &mut B) -> Result<Model, LoadError> {
    let (models, _materials) =
        tobj::load_obj_buf(reader, &load_options(), |_| Err(tobj::LoadError::OpenFileFailed))?;
    flatten(&models)
}

fn flatten(models: &[tobj::Model]) -> Result<Model, LoadError> {
    let mut vertices = Vec::new();

    for model in models {
        let mesh = &model.mesh;
        let vertex_count = mesh.positions.len() / 3;

        if mesh.indices.len() % 3 != 0 {
            return Err(LoadError::VertexCount(mesh.indices.len()));
        }

        for &index in &mesh.indices {
            let i = index as usize;
            if i >= vertex_count {
                return Err(LoadError::FaceIndexOutOfRange {
                    index,
                    vertex_count,
                });
            }

            let position = Vec3::new(
                mesh.positions[3 * i],
                mesh.positions[3 * i + 1],
                mesh.positions[3 * i + 2],
            );
            let uv = match mesh.texcoords.get(2 * i..2 * i + 2) {
                Some(t) => Vec2::new(t[0], 1.0 - t[1]),
                None => Vec2::ZERO,
            };
            vertices.push(Vertex::new(position, uv));
        }
    }

    Ok(Model::new(vertices)?)
}
