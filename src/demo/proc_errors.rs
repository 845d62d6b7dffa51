use crate::geo_2d;

/// Demo process error type.
#[derive(Debug)]
pub enum DemoError {
    /// Error writing the demo output.
    IoError(std::io::Error),
    /// Point model error the demo did not expect.
    GeoError(geo_2d::GeoError),
}
impl std::fmt::Display for DemoError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DemoError::IoError(error) => write!(f, "- Output Error:\n{}", error),
            DemoError::GeoError(error) => write!(f, "- Invalid input: {}", error),
        }
    }
}
impl From<std::io::Error> for DemoError {
    fn from(error: std::io::Error) -> Self {
        DemoError::IoError(error)
    }
}
impl From<geo_2d::GeoError> for DemoError {
    fn from(error: geo_2d::GeoError) -> Self {
        DemoError::GeoError(error)
    }
}
/// Result type for the `demo` module.
pub type ProcResult<T> = std::result::Result<T, DemoError>;
