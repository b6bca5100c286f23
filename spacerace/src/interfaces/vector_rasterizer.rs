use image::DynamicImage;
use std::path::Path;

pub type RasterizeError = Box<dyn std::error::Error + Send + Sync>;

/// VectorRasterizer renders a vector image (e.g. SVG) into a pixel image. The editor works without
/// one, vector inputs are then rejected as unsupported.
pub trait VectorRasterizer {
    fn render(&self, path: &Path) -> Result<DynamicImage, RasterizeError>;
}

/// is_vector_image checks by file extension whether the path points to a vector image.
pub fn is_vector_image(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case("svg"))
        .unwrap_or(false)
}
