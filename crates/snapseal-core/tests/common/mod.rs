//! Shared fixtures for snapseal-core integration tests

use snapseal_core::{
    finalize_at, seal_at, GenerationParams, ProofConfig, ProofEvent, ReportId, Snapshot,
    TraceToken,
};

/// 20 bytes of fixed test content standing in for a PNG payload
#[allow(dead_code)]
pub const TEST_IMAGE: &[u8; 20] = b"\x89PNG\r\n\x1a\n0123456789AB";

/// Reference content digest of TEST_IMAGE (base64 text → SHA-256)
#[allow(dead_code)]
pub const D1: &str = "7b8e8bc838932a140b4a2e71af00b565f1a7d30b12176f5745d400841321ddc8";

/// Reference final event hash for the fixed single-snapshot event below
#[allow(dead_code)]
pub const H1: &str = "df4300e365329a8bee90dea274b46865335f411ed4dd8dce9df79cb2094d3534";

/// Reference final event hash with seed changed to 43
#[allow(dead_code)]
pub const H1_SEED_43: &str = "74a943f6eab39bbec88d604418baf546ec375b42973e07fab26c384a275de33a";

/// Reference sequence digest for the fixed single-snapshot sequence
#[allow(dead_code)]
pub const H_SEQ: &str = "f7dd4e420181ba87c241246ae96a017ef619d4d7fe367b492aec199841e682b5";

#[allow(dead_code)]
pub const FIXED_TIMESTAMP: &str = "2026-01-02T03:04:05+00:00";
#[allow(dead_code)]
pub const FIXED_REPORT_ID: &str = "00000000-0000-4000-8000-000000000001";

#[allow(dead_code)]
pub fn test_params() -> GenerationParams {
    GenerationParams {
        prompt: "a red fox".to_string(),
        seed: 42,
        model: "black-forest-labs/FLUX.1-schnell".to_string(),
        width: 512,
        height: 512,
        steps: 8,
    }
}

#[allow(dead_code)]
pub fn fixed_snapshot(version_index: u32, trace: &TraceToken) -> Snapshot {
    seal_at(test_params(), TEST_IMAGE, version_index, trace, FIXED_TIMESTAMP).unwrap()
}

/// Fixed reference scenario: applicant "Alice", trace "T1", one snapshot
/// with pinned timestamps and report id
#[allow(dead_code)]
pub fn fixed_event() -> ProofEvent {
    let trace = TraceToken::from_string("T1");
    let snapshot = fixed_snapshot(1, &trace);
    finalize_at(
        &ProofConfig::default(),
        "Alice",
        trace,
        vec![snapshot],
        ReportId::from_string(FIXED_REPORT_ID),
        FIXED_TIMESTAMP,
    )
    .unwrap()
}
