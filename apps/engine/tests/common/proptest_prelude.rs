// Proptest prelude, shared configuration for property-test binaries.
//
// Env knobs:
// - PROPTEST_CASES: number of cases per property (e.g. 32, 800, 5000).
// - PROPTEST_MAX_SHRINK_MS: optional cap for shrinking time in milliseconds.
//
// Best practices:
// - Avoid prop_assume! - use dependent generators instead
// - Generate valid inputs by construction, not by filtering

pub fn proptest_prelude_config() -> proptest::prelude::ProptestConfig {
    let base: proptest::prelude::ProptestConfig = proptest::prelude::ProptestConfig::default();

    // PROPTEST_CASES: number of generated cases (default 16 for this project)
    let cases: u32 = std::env::var("PROPTEST_CASES")
        .ok()
        .and_then(|s| s.parse::<u32>().ok())
        .unwrap_or(16)
        .max(1);

    // PROPTEST_MAX_SHRINK_MS: cap shrinking time (falls back to base.max_shrink_time)
    let max_shrink_time: u32 = std::env::var("PROPTEST_MAX_SHRINK_MS")
        .ok()
        .and_then(|s| s.parse::<u32>().ok())
        .unwrap_or(base.max_shrink_time);

    proptest::prelude::ProptestConfig {
        // Disable persistence to silence regression-file warnings in integration tests
        failure_persistence: None,
        cases,
        max_shrink_time,
        ..base
    }
}
