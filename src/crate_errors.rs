use crate::{
    args,
    demo,
    geo_2d,
    io,
};

/// Error-type enum for the `point2d` crate.
/// Folds the errors of every module into one type for the binary.
#[derive(Debug)]
pub enum PointError {
    ArgError(args::ArgError),
    GeoError(geo_2d::GeoError),
    DemoError(demo::DemoError),
    IoError(io::IoError),
    OutputError(std::io::Error),
    StringOnly(String),
}
impl std::fmt::Display for PointError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PointError::ArgError(error) => write!(f, "! ARGUMENT ERROR:\n{}", error),
            PointError::GeoError(error) => write!(f, "! INVALID INPUT:\n- {}", error),
            PointError::DemoError(error) => write!(f, "! DEMO ERROR:\n{}", error),
            PointError::IoError(error) => write!(f, "! IO ERROR:\n{}", error),
            PointError::OutputError(error) => write!(f, "! OUTPUT ERROR:\n- {}", error),
            PointError::StringOnly(error) => write!(f, "! POINT2D ERROR:\n- {}", error),
        }
    }
}
impl From<String> for PointError {
    fn from(error: String) -> Self {
        PointError::StringOnly(error)
    }
}
impl From<args::ArgError> for PointError {
    fn from(error: args::ArgError) -> Self {
        PointError::ArgError(error)
    }
}
impl From<geo_2d::GeoError> for PointError {
    fn from(error: geo_2d::GeoError) -> Self {
        PointError::GeoError(error)
    }
}
impl From<demo::DemoError> for PointError {
    fn from(error: demo::DemoError) -> Self {
        PointError::DemoError(error)
    }
}
impl From<io::IoError> for PointError {
    fn from(error: io::IoError) -> Self {
        PointError::IoError(error)
    }
}
impl From<std::io::Error> for PointError {
    fn from(error: std::io::Error) -> Self {
        PointError::OutputError(error)
    }
}

/// Result type for the `point2d` crate.
pub type PointResult<T> = std::result::Result<T, PointError>;

/// Create a `PointResult` with an `Err` from a string.
/// Shorthand to avoid writing `Err(crate::PointError::StringOnly(error_str))`.
pub fn err_str<T>(error_str: &str) -> PointResult<T> {
    Err(PointError::StringOnly(error_str.to_string()))
}
