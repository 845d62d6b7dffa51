use std::io::Write;

use crate::args::Format;

#[derive(Debug)]
pub enum IoErrorType {
    File(std::io::Error),
    SerdeJson(serde_json::Error),
    SerdeYaml(serde_yaml::Error),
    TomlSer(toml::ser::Error),
    TomlDe(toml::de::Error),
    StringOnly(String),
}
impl std::fmt::Display for IoErrorType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IoErrorType::File(error) => write!(f, "- File IO Error:\n{}", error),
            IoErrorType::SerdeJson(error) => write!(f, "- JSON Serialization/Deserialization Error:\n{}", error),
            IoErrorType::SerdeYaml(error) => write!(f, "- YAML Serialization/Deserialization Error:\n{}", error),
            IoErrorType::TomlSer(error) => write!(f, "- TOML Serialization Error:\n{}", error),
            IoErrorType::TomlDe(error) => write!(f, "- TOML Deserialization Error:\n{}", error),
            IoErrorType::StringOnly(error) => write!(f, "- {}", error),
        }
    }
}

/// Custom verbose IO error struct.
#[derive(Debug)]
pub struct IoError {
    /// Filepath facing an error.
    pub file: Option<String>,
    /// Error cause.
    pub cause: IoErrorType,
}
impl IoError {
    fn with_file(path: &str, cause: IoErrorType) -> Self {
        IoError{file: Some(path.to_string()), cause}
    }
}
impl std::fmt::Display for IoError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.file {
            Some(ref file) => write!(f, "- Error with file: {}\n{}", file, self.cause),
            None => write!(f, "{}", self.cause),
        }
    }
}

pub type IoResult<T> = std::result::Result<T, IoError>;

/// Open a file with verbose errors.
pub fn open(path: &str) -> IoResult<std::fs::File> {
    std::fs::File::open(path).map_err(|error| IoError::with_file(path, IoErrorType::File(error)))
}

/// Create a file with verbose errors.
pub fn create(path: &str) -> IoResult<std::fs::File> {
    std::fs::File::create(path).map_err(|error| IoError::with_file(path, IoErrorType::File(error)))
}

/// Read from string with verbose errors
pub fn read_to_string(path: &str) -> IoResult<String> {
    std::fs::read_to_string(path).map_err(|error| IoError::with_file(path, IoErrorType::File(error)))
}

/// Write string to file with verbose errors.
pub fn write_to_file(path: &str, buffer: &str) -> IoResult<()> {
    let mut f = create(path)?;
    f.write_all(buffer.as_bytes()).map_err(|error| IoError::with_file(path, IoErrorType::File(error)))
}

/// Get the file format from the extension of a path.
pub fn format_of(path: &str) -> IoResult<Format> {
    match Format::from_path(path) {
        Some(format) => Ok(format),
        None => {
            let supported_filetypes = vec!["json", "toml", "yaml", "yml"];
            let error_string = format!("Unsupported filetype: {}\nSupported filetypes: {:?}", path, supported_filetypes);
            Err(IoError::with_file(path, IoErrorType::StringOnly(error_string)))
        },
    }
}

/// Read in cfg files from the supported filetypes.
pub fn read_cfg_file<T>(path: &str) -> IoResult<T>
where T: serde::de::DeserializeOwned
{
    log::debug!("Reading {}", path);
    match format_of(path)? {
        Format::Json => serde_json::from_reader(open(path)?)
            .map_err(|error| IoError::with_file(path, IoErrorType::SerdeJson(error))),
        Format::Toml => toml::from_str(&read_to_string(path)?)
            .map_err(|error| IoError::with_file(path, IoErrorType::TomlDe(error))),
        Format::Yaml => serde_yaml::from_reader(open(path)?)
            .map_err(|error| IoError::with_file(path, IoErrorType::SerdeYaml(error))),
    }
}

/// Serialize a value to a string in the given format.
pub fn to_format_string<T>(value: &T, format: Format) -> IoResult<String>
where T: serde::Serialize
{
    match format {
        Format::Json => serde_json::to_string_pretty(value)
            .map_err(|error| IoError{file: None, cause: IoErrorType::SerdeJson(error)}),
        Format::Toml => toml::to_string_pretty(value)
            .map_err(|error| IoError{file: None, cause: IoErrorType::TomlSer(error)}),
        Format::Yaml => serde_yaml::to_string(value)
            .map_err(|error| IoError{file: None, cause: IoErrorType::SerdeYaml(error)}),
    }
}

/// Write out cfg files in the format given by the extension.
pub fn write_cfg_file<T>(path: &str, value: &T) -> IoResult<()>
where T: serde::Serialize
{
    log::debug!("Writing {}", path);
    let buffer = to_format_string(value, format_of(path)?).map_err(|error| IoError{
        file: Some(path.to_string()),
        cause: error.cause,
    })?;
    write_to_file(path, &buffer)
}
