//! Typed join keys and key-set normalization.

use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};

use crate::value_type::ValueType;

/// Alias of the sentinel key used by features that need no explicit join key.
pub const DUMMY_KEY_ALIAS: &str = "NOT_NEEDED";

lazy_static! {
    /// Sentinel key for passthrough and request features.
    ///
    /// Shared and immutable; key sets take their own clone of it.
    pub static ref DUMMY_KEY: TypedKey = TypedKey {
        key_column: DUMMY_KEY_ALIAS.to_string(),
        key_column_type: ValueType::Unspecified,
        full_name: Some("feathr.dummy_typedkey".to_string()),
        description: Some("A dummy typed key for passthrough/request feature.".to_string()),
        key_column_alias: DUMMY_KEY_ALIAS.to_string(),
    };
}

/// A join key of a feature: the source column and the alias it is
/// referenced by in generated config.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "native", derive(uniffi::Record))]
pub struct TypedKey {
    pub key_column: String,
    pub key_column_type: ValueType,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    pub key_column_alias: String,
}

impl TypedKey {
    /// Create a key whose alias is the column name itself
    pub fn new(key_column: impl Into<String>, key_column_type: ValueType) -> Self {
        let key_column = key_column.into();
        Self {
            key_column_alias: key_column.clone(),
            key_column,
            key_column_type,
            full_name: None,
            description: None,
        }
    }

    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.key_column_alias = alias.into();
        self
    }

    pub fn with_full_name(mut self, full_name: impl Into<String>) -> Self {
        self.full_name = Some(full_name.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn is_dummy(&self) -> bool {
        *self == *DUMMY_KEY
    }
}

/// Ordered, never-empty set of keys.
///
/// Built from a single key, a vector or a slice; an empty input becomes
/// the one-element sentinel set.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Keys(Vec<TypedKey>);

impl Keys {
    pub fn new(keys: Vec<TypedKey>) -> Self {
        if keys.is_empty() {
            tracing::trace!("empty key set, using {}", DUMMY_KEY_ALIAS);
            return Self::default();
        }
        Self(keys)
    }

    pub fn as_slice(&self) -> &[TypedKey] {
        &self.0
    }

    pub fn into_vec(self) -> Vec<TypedKey> {
        self.0
    }

    /// Aliases of the keys, in order
    pub fn aliases(&self) -> Vec<String> {
        self.0.iter().map(|k| k.key_column_alias.clone()).collect()
    }
}

impl Default for Keys {
    fn default() -> Self {
        Self(vec![DUMMY_KEY.clone()])
    }
}

impl From<TypedKey> for Keys {
    fn from(key: TypedKey) -> Self {
        Self(vec![key])
    }
}

impl From<Vec<TypedKey>> for Keys {
    fn from(keys: Vec<TypedKey>) -> Self {
        Self::new(keys)
    }
}

impl From<&[TypedKey]> for Keys {
    fn from(keys: &[TypedKey]) -> Self {
        Self::new(keys.to_vec())
    }
}

impl From<Option<Vec<TypedKey>>> for Keys {
    fn from(keys: Option<Vec<TypedKey>>) -> Self {
        keys.map(Self::new).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alias_defaults_to_column() {
        let key = TypedKey::new("user_id", ValueType::Int64);
        assert_eq!(key.key_column_alias, "user_id");
        assert!(!key.is_dummy());

        let aliased = key.with_alias("uid");
        assert_eq!(aliased.key_column, "user_id");
        assert_eq!(aliased.key_column_alias, "uid");
    }

    #[test]
    fn empty_keys_fall_back_to_sentinel() {
        let keys = Keys::from(Vec::<TypedKey>::new());
        assert_eq!(keys.aliases(), vec![DUMMY_KEY_ALIAS.to_string()]);
        assert!(keys.as_slice()[0].is_dummy());

        let keys = Keys::from(None::<Vec<TypedKey>>);
        assert_eq!(keys, Keys::default());
    }

    #[test]
    fn single_key_normalizes_to_sequence() {
        let keys = Keys::from(TypedKey::new("item_id", ValueType::String));
        assert_eq!(keys.aliases(), vec!["item_id".to_string()]);
    }

    #[test]
    fn default_keys_do_not_share_state() {
        let mut first = Keys::default().into_vec();
        first[0].key_column_alias = "changed".to_string();

        assert_eq!(Keys::default().aliases(), vec![DUMMY_KEY_ALIAS.to_string()]);
        assert_eq!(DUMMY_KEY.key_column_alias, DUMMY_KEY_ALIAS);
    }

    #[test]
    fn key_deserializes_without_optional_fields() {
        let json = r#"{"key_column":"uid","key_column_type":"INT64","key_column_alias":"user"}"#;
        let key: TypedKey = serde_json::from_str(json).unwrap();
        assert_eq!(key.key_column_type, ValueType::Int64);
        assert_eq!(key.full_name, None);
        assert_eq!(key.key_column_alias, "user");
    }
}
