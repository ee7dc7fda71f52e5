use thiserror::Error;

/// A consistency failure while resolving a single pixel.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TraceError {
    /// A primary ray reported a sphere hit behind the eye.
    #[error("sphere {sphere} hit at negative distance {distance} for pixel ({x}, {y})")]
    NegativeHitDistance {
        x: i32,
        y: i32,
        sphere: usize,
        distance: f64,
    },
}

/// An error while rendering or presenting frames.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("{count} pixel(s) violated a tracing invariant, first: {first}")]
    Invariant { count: usize, first: TraceError },

    #[error("failed to save image: {0}")]
    Image(#[from] image::ImageError),

    #[error("invalid arguments: {0}")]
    Args(String),

    #[error("window error: {0}")]
    Window(String),
}
