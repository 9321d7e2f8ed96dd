//! feature-config: typed feature descriptors that render feature config blocks.
//!
//! Features are named, typed values computed for an entity. This crate
//! describes them and renders the HOCON-like blocks a downstream feature
//! engine consumes. Rendering is pure; nothing here executes a feature.
//!
//! The main descriptor is [`LookupFeature`], which looks up an expansion
//! feature using the value of a base feature as key:
//!
//! ```
//! use std::sync::Arc;
//! use feature_config::{Aggregation, Feature, FeatureType, LookupFeature, TypedKey, ValueType};
//!
//! let user = TypedKey::new("user_id", ValueType::Int64);
//! let item = TypedKey::new("item_id", ValueType::Int64);
//! let purchased = Feature::new("user_purchased_items", FeatureType::Int64Vector, user.clone()).unwrap();
//! let price = Feature::new("item_price", FeatureType::Float, item).unwrap();
//!
//! let spend = LookupFeature::with_keys(
//!     "user_avg_item_price",
//!     FeatureType::Float,
//!     Arc::new(purchased),
//!     Arc::new(price),
//!     Aggregation::Avg,
//!     user,
//! )
//! .unwrap();
//!
//! let block = spend.render().unwrap();
//! assert!(block.starts_with("user_avg_item_price: {"));
//! assert!(block.contains("aggregation: AVG"));
//! ```

#[cfg(feature = "native")]
uniffi::setup_scaffolding!();

pub mod aggregation;
pub mod config;
pub mod dtype;
pub mod error;
pub mod feature;
pub mod lookup;
pub mod typed_key;
pub mod value_type;

pub use aggregation::Aggregation;
pub use config::RenderConfig;
pub use dtype::FeatureType;
pub use error::{FeatureError, Result};
pub use feature::{validate_feature_name, Feature, FeatureConfig, FeatureDescriptor};
pub use lookup::LookupFeature;
pub use typed_key::{Keys, TypedKey, DUMMY_KEY, DUMMY_KEY_ALIAS};
pub use value_type::ValueType;
