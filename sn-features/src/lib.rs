//! sn-features: observation schema + canonical encoding.

pub mod encode;
pub mod schema;

pub use encode::{encode_observation, encode_observation_into};
pub use schema::{CHANNELS, FEATURE_SCHEMA_ID, OBSERVATION_LEN, OBSERVATION_SHAPE};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
