use crate::mesh::LoadError;
use crate::model::ModelError;
use crate::texture::TextureError;

/// Top-level error for the viewer.
#[derive(Debug)]
pub enum Error {
    /// Windowing or presentation failure reported by SDL2.
    Display(String),
    Load(LoadError),
    Model(ModelError),
    Texture(TextureError),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Error::Display(msg) => write!(f, "display error: {}", msg),
            Error::Load(e) => write!(f, "model load error: {}", e),
            Error::Model(e) => write!(f, "model error: {}", e),
            Error::Texture(e) => write!(f, "texture error: {}", e),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Display(_) => None,
            Error::Load(e) => Some(e),
            Error::Model(e) => Some(e),
            Error::Texture(e) => Some(e),
        }
    }
}

impl From<String> for Error {
    fn from(msg: String) -> Self {
        Error::Display(msg)
    }
}

impl From<LoadError> for Error {
    fn from(e: LoadError) -> Self {
        Error::Load(e)
    }
}

impl From<ModelError> for Error {
    fn from(e: ModelError) -> Self {
        Error::Model(e)
    }
}

impl From<TextureError> for Error {
    fn from(e: TextureError) -> Self {
        Error::Texture(e)
    }
}

impl From<image::ImageError> for Error {
    fn from(e: image::ImageError) -> Self {
        Error::Texture(TextureError::Image(e))
    }
}
