//! Feature value types and their `type: {...}` config fragment.

use serde::{Deserialize, Serialize};

use crate::error::{FeatureError, Result};

/// Declared value type of a feature.
///
/// Scalars are rank-0 dense tensors; vectors are rank-1 dense tensors
/// indexed by `INT`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[cfg_attr(feature = "native", derive(uniffi::Enum))]
pub enum FeatureType {
    Boolean,
    Int32,
    Int64,
    Float,
    Double,
    String,
    Bytes,
    FloatVector,
    Int32Vector,
    Int64Vector,
    DoubleVector,
    Unspecified,
}

impl FeatureType {
    /// Value type of the tensor elements, `None` when unspecified.
    pub fn val_type(&self) -> Option<&'static str> {
        match self {
            Self::Boolean => Some("BOOLEAN"),
            Self::Int32 | Self::Int32Vector => Some("INT"),
            Self::Int64 | Self::Int64Vector => Some("LONG"),
            Self::Float | Self::FloatVector => Some("FLOAT"),
            Self::Double | Self::DoubleVector => Some("DOUBLE"),
            Self::String => Some("STRING"),
            Self::Bytes => Some("BYTES"),
            Self::Unspecified => None,
        }
    }

    /// Dimension types of the tensor (empty for scalars).
    pub fn dimension_type(&self) -> &'static [&'static str] {
        match self {
            Self::FloatVector | Self::Int32Vector | Self::Int64Vector | Self::DoubleVector => {
                &["INT"]
            }
            _ => &[],
        }
    }

    pub fn is_vector(&self) -> bool {
        !self.dimension_type().is_empty()
    }

    /// Render the `type: {...}` fragment embedded in feature blocks.
    pub fn to_feature_config(&self) -> Result<String> {
        let val_type = self.val_type().ok_or(FeatureError::UnspecifiedType)?;
        Ok(format!(
            "type: {{ type: TENSOR, tensorCategory: DENSE, dimensionType: [{}], valType: {} }}",
            self.dimension_type().join(","),
            val_type
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scalar_fragment() {
        assert_eq!(
            FeatureType::Int64.to_feature_config().unwrap(),
            "type: { type: TENSOR, tensorCategory: DENSE, dimensionType: [], valType: LONG }"
        );
    }

    #[test]
    fn vector_fragment() {
        assert_eq!(
            FeatureType::FloatVector.to_feature_config().unwrap(),
            "type: { type: TENSOR, tensorCategory: DENSE, dimensionType: [INT], valType: FLOAT }"
        );
        assert!(FeatureType::DoubleVector.is_vector());
        assert!(!FeatureType::Double.is_vector());
    }

    #[test]
    fn unspecified_has_no_fragment() {
        assert!(matches!(
            FeatureType::Unspecified.to_feature_config(),
            Err(FeatureError::UnspecifiedType)
        ));
    }
}
