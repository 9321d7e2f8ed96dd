//! Primitive value types for key columns.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::FeatureError;

/// Type of a key column in the source data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[cfg_attr(feature = "native", derive(uniffi::Enum))]
pub enum ValueType {
    #[default]
    Unspecified,
    Bool,
    Int32,
    Int64,
    Float,
    Double,
    String,
    Bytes,
}

impl ValueType {
    /// Symbolic name used in generated config.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Unspecified => "UNSPECIFIED",
            Self::Bool => "BOOL",
            Self::Int32 => "INT32",
            Self::Int64 => "INT64",
            Self::Float => "FLOAT",
            Self::Double => "DOUBLE",
            Self::String => "STRING",
            Self::Bytes => "BYTES",
        }
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ValueType {
    type Err = FeatureError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "UNSPECIFIED" => Ok(Self::Unspecified),
            "BOOL" | "BOOLEAN" => Ok(Self::Bool),
            "INT32" | "INT" => Ok(Self::Int32),
            "INT64" | "LONG" => Ok(Self::Int64),
            "FLOAT" => Ok(Self::Float),
            "DOUBLE" => Ok(Self::Double),
            "STRING" => Ok(Self::String),
            "BYTES" => Ok(Self::Bytes),
            _ => Err(FeatureError::UnknownValueType(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_aliases() {
        assert_eq!("int64".parse::<ValueType>().unwrap(), ValueType::Int64);
        assert_eq!("LONG".parse::<ValueType>().unwrap(), ValueType::Int64);
        assert_eq!(" bool ".parse::<ValueType>().unwrap(), ValueType::Bool);
    }

    #[test]
    fn parse_rejects_unknown() {
        assert!(matches!(
            "decimal".parse::<ValueType>(),
            Err(FeatureError::UnknownValueType(_))
        ));
    }

    #[test]
    fn serde_uses_symbolic_names() {
        let json = serde_json::to_string(&ValueType::Int32).unwrap();
        assert_eq!(json, "\"INT32\"");
        let parsed: ValueType = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, ValueType::Int32);
    }
}
