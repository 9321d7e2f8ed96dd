//! Shared feature behavior: the descriptor capability trait, name
//! validation, key handling and the plain keyed feature.

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::dtype::FeatureType;
use crate::error::{FeatureError, Result};
use crate::typed_key::{Keys, TypedKey, DUMMY_KEY_ALIAS};

lazy_static! {
    static ref FEATURE_NAME: Regex = Regex::new(r"^[a-zA-Z_][a-zA-Z0-9_]*$").unwrap();
}

/// Capabilities every feature exposes to features built on top of it.
///
/// Any feature kind (plain, derived, lookup) can serve as the base or
/// expansion of a lookup feature through this trait.
pub trait FeatureDescriptor: std::fmt::Debug + Send + Sync {
    /// Feature name, as referenced from other config blocks
    fn name(&self) -> &str;

    /// Declared value type
    fn feature_type(&self) -> &FeatureType;

    /// Aliases of the feature's join keys, never empty
    fn key_alias(&self) -> Vec<String>;
}

/// Features that render their own config block.
pub trait FeatureConfig {
    fn to_feature_config(&self) -> Result<String>;
}

/// Check a feature name: letters, digits and underscores, not starting
/// with a digit.
pub fn validate_feature_name(name: &str) -> Result<()> {
    if FEATURE_NAME.is_match(name) {
        Ok(())
    } else {
        Err(FeatureError::InvalidName(name.to_string()))
    }
}

/// Aliases of a key list; an empty list resolves to the sentinel alias.
pub(crate) fn aliases_of(key: &[TypedKey]) -> Vec<String> {
    if key.is_empty() {
        return vec![DUMMY_KEY_ALIAS.to_string()];
    }
    key.iter().map(|k| k.key_column_alias.clone()).collect()
}

/// Replace key aliases positionally.
pub(crate) fn realias(key: &mut [TypedKey], aliases: &[&str]) -> Result<()> {
    if key.len() != aliases.len() {
        return Err(FeatureError::KeyAliasCountMismatch {
            expected: key.len(),
            actual: aliases.len(),
        });
    }
    for (k, alias) in key.iter_mut().zip(aliases) {
        k.key_column_alias = alias.to_string();
    }
    Ok(())
}

/// A named, typed and keyed feature.
///
/// This is the common shape shared by all feature kinds; where the values
/// come from (sources, transforms) is defined elsewhere.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feature {
    pub name: String,
    pub feature_type: FeatureType,
    #[serde(default)]
    pub key: Vec<TypedKey>,
}

impl Feature {
    /// Validate the name and normalize the key set.
    pub fn new(
        name: impl Into<String>,
        feature_type: FeatureType,
        key: impl Into<Keys>,
    ) -> Result<Self> {
        let name = name.into();
        validate_feature_name(&name)?;
        Ok(Self {
            name,
            feature_type,
            key: key.into().into_vec(),
        })
    }

    /// Load a feature from JSON, applying the same checks as [`Feature::new`]
    pub fn from_json(json: &str) -> Result<Self> {
        let raw: Feature = serde_json::from_str(json)?;
        Self::new(raw.name, raw.feature_type, raw.key)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
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

impl FeatureDescriptor for Feature {
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
