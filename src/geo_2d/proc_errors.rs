/// Point model error type.
/// Every failure of the point model is an invalid input caught at construction.
#[derive(Debug, Clone, PartialEq)]
pub enum GeoError {
    /// Invalid input handed to a constructor.
    InvalidInput(String),
}
impl std::fmt::Display for GeoError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GeoError::InvalidInput(error) => write!(f, "{}", error),
        }
    }
}
impl std::error::Error for GeoError {}
impl From<String> for GeoError {
    fn from(error: String) -> Self {
        GeoError::InvalidInput(error)
    }
}

/// Result type for the `geo_2d` module.
pub type ProcResult<T> = std::result::Result<T, GeoError>;

/// Create a `GeoError::InvalidInput` from a string.
pub fn err_str<T>(error_str: &str) -> ProcResult<T> {
    Err(GeoError::InvalidInput(error_str.to_string()))
}
