//! Shared configuration for domain property tests.

use proptest::prelude::ProptestConfig;

/// Fewer cases than the proptest default; the playout properties walk whole
/// deals per case.
pub fn proptest_config() -> ProptestConfig {
    ProptestConfig {
        cases: 64,
        ..ProptestConfig::default()
    }
}
