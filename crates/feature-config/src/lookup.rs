//! Lookup features
//!
//! A lookup feature uses the value of a base feature as the key to look up
//! an expansion feature. When the base value expands into several keys
//! (e.g. an array of ids) the looked-up values are combined with an
//! [`Aggregation`].

use std::sync::Arc;

use crate::aggregation::Aggregation;
use crate::config::RenderConfig;
use crate::dtype::FeatureType;
use crate::error::Result;
use crate::feature::{
    aliases_of, realias, validate_feature_name, Feature, FeatureConfig, FeatureDescriptor,
};
use crate::typed_key::{Keys, TypedKey};

/// A feature whose value is looked up from `expansion_feature` using the
/// value of `base_feature` as key.
///
/// `base_feature` and `expansion_feature` are shared handles into the
/// caller's feature graph.
#[derive(Debug, Clone)]
pub struct LookupFeature {
    pub name: String,
    pub feature_type: FeatureType,
    pub key: Vec<TypedKey>,
    pub base_feature: Arc<dyn FeatureDescriptor>,
    pub expansion_feature: Arc<dyn FeatureDescriptor>,
    pub aggregation: Aggregation,
}

impl LookupFeature {
    /// Create a lookup feature keyed by the sentinel key.
    pub fn new(
        name: impl Into<String>,
        feature_type: FeatureType,
        base_feature: Arc<dyn FeatureDescriptor>,
        expansion_feature: Arc<dyn FeatureDescriptor>,
        aggregation: Aggregation,
    ) -> Result<Self> {
        Self::with_keys(
            name,
            feature_type,
            base_feature,
            expansion_feature,
            aggregation,
            Keys::default(),
        )
    }

    /// Create a lookup feature with explicit join keys.
    ///
    /// `key` may be a single [`TypedKey`] or a sequence of them.
    pub fn with_keys(
        name: impl Into<String>,
        feature_type: FeatureType,
        base_feature: Arc<dyn FeatureDescriptor>,
        expansion_feature: Arc<dyn FeatureDescriptor>,
        aggregation: Aggregation,
        key: impl Into<Keys>,
    ) -> Result<Self> {
        let Feature {
            name,
            feature_type,
            key,
        } = Feature::new(name, feature_type, key)?;

        Ok(Self {
            name,
            feature_type,
            key,
            base_feature,
            expansion_feature,
            aggregation,
        })
    }

    /// Render the config block with the default layout.
    pub fn render(&self) -> Result<String> {
        self.render_with(&RenderConfig::default())
    }

    /// Render the config block.
    ///
    /// All parts are resolved before any output is assembled, so a failing
    /// part yields an error and no text.
    pub fn render_with(&self, config: &RenderConfig) -> Result<String> {
        config.validate()?;
        let type_config = self.feature_type.to_feature_config()?;

        tracing::debug!(
            feature = %self.name,
            base = %self.base_feature.name(),
            expansion = %self.expansion_feature.name(),
            aggregation = %self.aggregation,
            "rendering lookup feature"
        );

        let indent = config.indent(1);
        let nested = config.indent(2);
        let mut result = String::new();

        result.push_str(&format!("{}: {{\n", self.name));
        result.push_str(&format!("{}key: [{}]\n", indent, self.key_alias().join(",")));

        result.push_str(&format!("{}join: {{\n", indent));
        result.push_str(&format!(
            "{}base:{{ key: [{}], feature: {} }}\n",
            nested,
            self.base_feature.key_alias().join(","),
            self.base_feature.name()
        ));
        result.push_str(&format!(
            "{}expansion: {{ key: [{}], feature: {} }}\n",
            nested,
            self.expansion_feature.key_alias().join(","),
            self.expansion_feature.name()
        ));
        result.push_str(&format!("{}}}\n", indent));

        result.push_str(&format!("{}aggregation: {}\n", indent, self.aggregation.name()));
        result.push_str(&indent);
        result.push_str(&type_config);
        result.push('\n');
        result.push('}');

        Ok(result)
    }

    /// Copy of this feature with its key aliases replaced, one per key.
    pub fn with_key(&self, key_alias: &[&str]) -> Result<Self> {
        let mut feature = self.clone();
        realias(&mut feature.key, key_alias)?;
        Ok(feature)
    }

    /// Copy of this feature under another name.
    pub fn as_feature(&self, feature_alias: &str) -> Result<Self> {
        validate_feature_name(feature_alias)?;
        let mut feature = self.clone();
        feature.name = feature_alias.to_string();
        Ok(feature)
    }
}

impl FeatureDescriptor for LookupFeature {
    fn name(&self) -> &str {
        &self.name
    }

    fn feature_type(&self) -> &FeatureType {
        &self.feature_type
    }

    fn key_alias(&self) -> Vec<String> {
        aliases_of(&self.key)
    }
}

impl FeatureConfig for LookupFeature {
    fn to_feature_config(&self) -> Result<String> {
        self.render()
    }
}
