use thiserror::Error;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("unknown render mode: {0}")]
    UnsupportedMode(String),
    #[error("failed to write frame image: {0}")]
    Image(#[from] image::ImageError),
}
