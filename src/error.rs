use thiserror::Error;

/// Top-level error type for the Casteljau engine.
#[derive(Debug, Error)]
pub enum CasteljauError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Sampling(#[from] SamplingError),

    #[error(transparent)]
    Scene(#[from] SceneError),

    #[error(transparent)]
    Render(#[from] RenderError),
}

/// Axis of a 2D point, used to report which component failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

impl std::fmt::Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::X => f.write_str("x"),
            Self::Y => f.write_str("y"),
        }
    }
}

/// Errors related to geometric computations.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("division by zero on the {axis} axis")]
    DivisionByZero { axis: Axis },

    #[error("zero-length vector")]
    ZeroVector,

    #[error("empty input: {0}")]
    EmptyInput(&'static str),
}

/// Errors related to the sample cache.
#[derive(Debug, Error)]
pub enum SamplingError {
    #[error("invalid sample range: {0}")]
    InvalidRange(String),

    #[error("sample cache used before configure()")]
    NotConfigured,
}

/// Errors related to scene state and its configuration.
#[derive(Debug, Error)]
pub enum SceneError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse configuration: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Errors related to drawing.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("no drawing surface available")]
    SurfaceUnavailable,

    #[error("invalid render parameters: {0}")]
    InvalidParameters(String),
}

/// Convenience type alias for results using [`CasteljauError`].
pub type Result<T> = std::result::Result<T, CasteljauError>;
