use std::fmt;
use serde::{Serialize, Deserialize};
use strum::Display;

use crate::geo_2d::{ProcResult, err_str};

/// Coordinate axis, used to name the offending coordinate in errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "lowercase")]
pub enum Axis {
    X,
    Y,
}

/// A loosely typed coordinate, as it arrives from a config file or the command line.
/// Only integers and finite floats are numbers.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(untagged)]
pub enum Scalar {
    Int(i64),
    Float(f64),
    Flag(bool),
    Text(String),
}
impl Scalar {
    /// Read a command line argument: integers and floats become numbers, anything else stays text.
    pub fn parse_arg(arg: &str) -> Self {
        if let Ok(int) = arg.parse::<i64>() {
            return Scalar::Int(int);
        }
        match arg.parse::<f64>() {
            Ok(float) => Scalar::Float(float),
            Err(_) => Scalar::Text(arg.to_string()),
        }
    }

    /// Get the numeric value, if there is one.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Scalar::Int(int) => Some(*int as f64),
            Scalar::Float(float) if float.is_finite() => Some(*float),
            _ => None,
        }
    }

    /// Get the numeric value for a coordinate, or the domain error naming the axis.
    pub fn to_coordinate(&self, axis: Axis) -> ProcResult<f64> {
        match self.as_number() {
            Some(value) => Ok(value),
            None => err_str(&format!("{} must be a number", axis)),
        }
    }
}
impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Int(int) => write!(f, "{}", int),
            Scalar::Float(float) => write!(f, "{}", float),
            Scalar::Flag(flag) => write!(f, "{}", flag),
            Scalar::Text(text) => write!(f, "{:?}", text),
        }
    }
}
impl From<i32> for Scalar {
    fn from(value: i32) -> Self {
        Scalar::Int(value as i64)
    }
}
impl From<i64> for Scalar {
    fn from(value: i64) -> Self {
        Scalar::Int(value)
    }
}
impl From<f64> for Scalar {
    fn from(value: f64) -> Self {
        Scalar::Float(value)
    }
}
impl From<bool> for Scalar {
    fn from(value: bool) -> Self {
        Scalar::Flag(value)
    }
}
impl From<&str> for Scalar {
    fn from(value: &str) -> Self {
        Scalar::Text(value.to_string())
    }
}
impl From<String> for Scalar {
    fn from(value: String) -> Self {
        Scalar::Text(value)
    }
}
