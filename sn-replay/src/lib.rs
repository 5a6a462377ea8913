//! sn-replay: NDJSON game records + replay verification.
//!
//! The rules engine itself never touches the filesystem; recording finished
//! games and re-simulating them for integrity checks lives here.

pub mod record;
pub mod writer;

pub use record::{replay, GameRecordV1, ReplayError, RECORD_SCHEMA_VERSION};
pub use writer::{read_records, RecordIoError, RecordWriter};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_is_set() {
        assert!(!VERSION.is_empty());
    }
}

#[cfg(test)]
mod writer_tests;
