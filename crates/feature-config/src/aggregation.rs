//! Aggregations applied to values looked up from an expansion feature.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::FeatureError;

/// How multiple looked-up values are combined into one.
///
/// Used when the base feature value expands into several lookup keys,
/// e.g. an array whose elements are each used once as a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[cfg_attr(feature = "native", derive(uniffi::Enum))]
pub enum Aggregation {
    /// No aggregation
    Nop,
    Avg,
    Max,
    Min,
    Sum,
    Union,
    ElementwiseAvg,
    ElementwiseMin,
    ElementwiseMax,
    ElementwiseSum,
    /// Most recent value
    Latest,
}

impl Aggregation {
    /// All aggregations, in declaration order.
    pub const ALL: [Aggregation; 11] = [
        Self::Nop,
        Self::Avg,
        Self::Max,
        Self::Min,
        Self::Sum,
        Self::Union,
        Self::ElementwiseAvg,
        Self::ElementwiseMin,
        Self::ElementwiseMax,
        Self::ElementwiseSum,
        Self::Latest,
    ];

    /// Symbolic name written into the `aggregation` field.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Nop => "NOP",
            Self::Avg => "AVG",
            Self::Max => "MAX",
            Self::Min => "MIN",
            Self::Sum => "SUM",
            Self::Union => "UNION",
            Self::ElementwiseAvg => "ELEMENTWISE_AVG",
            Self::ElementwiseMin => "ELEMENTWISE_MIN",
            Self::ElementwiseMax => "ELEMENTWISE_MAX",
            Self::ElementwiseSum => "ELEMENTWISE_SUM",
            Self::Latest => "LATEST",
        }
    }
}

impl fmt::Display for Aggregation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Aggregation {
    type Err = FeatureError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_uppercase();
        Self::ALL
            .into_iter()
            .find(|agg| agg.name() == wanted)
            .ok_or_else(|| FeatureError::UnknownAggregation(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_parse_back() {
        for agg in Aggregation::ALL {
            assert_eq!(agg.name().parse::<Aggregation>().unwrap(), agg);
        }
    }

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!(
            "elementwise_sum".parse::<Aggregation>().unwrap(),
            Aggregation::ElementwiseSum
        );
    }

    #[test]
    fn parse_unknown() {
        assert!(matches!(
            "MEDIAN".parse::<Aggregation>(),
            Err(FeatureError::UnknownAggregation(name)) if name == "MEDIAN"
        ));
    }

    #[test]
    fn serde_matches_symbolic_name() {
        let json = serde_json::to_string(&Aggregation::ElementwiseMax).unwrap();
        assert_eq!(json, "\"ELEMENTWISE_MAX\"");
    }
}
