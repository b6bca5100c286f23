use std::path::PathBuf;
use thiserror::Error;

/// EditError is returned by the roster and editing operations.
///
/// A missing race dataset is not an error (the roster is simply empty). Missing or short flag
/// rows and missing legacy channel fields are not errors either, they are filled with zeros.
#[derive(Debug, Error)]
pub enum EditError {
    #[error("{} not found", .0.display())]
    NotFound(PathBuf),
    #[error("invalid race index {index} (roster contains {len} race(s))")]
    OutOfRange { index: usize, len: usize },
    #[error("unsupported input {}: {}", .path.display(), .reason)]
    UnsupportedInput { path: PathBuf, reason: String },
    #[error("key {key} must hold a {expected} tag")]
    UnexpectedTag { key: String, expected: nbt::TagId },
    #[error("failed to rasterize vector image: {0}")]
    Rasterize(#[source] Box<dyn std::error::Error + Send + Sync>),
    #[error("NBT error: {0}")]
    Nbt(#[from] nbt::NbtError),
    #[error("image error: {0}")]
    Image(#[from] image::ImageError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
