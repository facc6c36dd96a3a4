// Test suite for event digest computation
// Covers the two-pass self-reference resolution, pinned reference vectors,
// determinism, and order sensitivity

mod common;

use common::{
    fixed_event, fixed_snapshot, test_params, FIXED_REPORT_ID, FIXED_TIMESTAMP, H1, H1_SEED_43,
    H_SEQ,
};
use snapseal_core::proof::pre_image_value;
use snapseal_core::{
    compute_event_digest, finalize, finalize_at, seal_at, sequence_digest, ProofConfig, ReportId,
    TraceToken,
};

#[test]
fn test_final_event_hash_matches_reference_vector() {
    // Fixed scenario: Alice / T1 / "a red fox" / seed 42. The pinned hash
    // was computed by an independent implementation of the canonical
    // encoding (sorted keys, compact, UTF-8).
    let event = fixed_event();
    assert_eq!(event.event_proof.final_event_hash, H1);
}

#[test]
fn test_changing_seed_changes_the_hash() {
    let trace = TraceToken::from_string("T1");
    let mut params = test_params();
    params.seed = 43;
    let snapshot = seal_at(
        params,
        common::TEST_IMAGE,
        1,
        &trace,
        FIXED_TIMESTAMP,
    )
    .unwrap();
    let event = finalize_at(
        &ProofConfig::default(),
        "Alice",
        trace,
        vec![snapshot],
        ReportId::from_string(FIXED_REPORT_ID),
        FIXED_TIMESTAMP,
    )
    .unwrap();

    assert_eq!(event.event_proof.final_event_hash, H1_SEED_43);
    assert_ne!(event.event_proof.final_event_hash, H1);
}

#[test]
fn test_recompute_reproduces_the_embedded_hash() {
    // The central correctness property: subtract-then-hash over the
    // exported record reproduces the embedded digest exactly.
    let event = fixed_event();
    let recomputed = compute_event_digest(&event).unwrap();
    assert_eq!(recomputed, event.event_proof.final_event_hash);
}

#[test]
fn test_pre_image_excludes_hash_and_derived_blocks() {
    let event = fixed_event();
    let pre_image = pre_image_value(&event).unwrap();

    assert!(pre_image.get("verification").is_none());
    assert!(pre_image.get("metadata").is_none());
    assert!(pre_image["event_proof"].get("final_event_hash").is_none());
    // Semantic fields all participate
    assert_eq!(pre_image["applicant"], "Alice");
    assert_eq!(pre_image["event_proof"]["trace_token"], "T1");
    assert_eq!(
        pre_image["event_proof"]["snapshots"].as_array().unwrap().len(),
        1
    );
}

#[test]
fn test_digest_is_stable_across_recomputation() {
    let event = fixed_event();
    let first = compute_event_digest(&event).unwrap();
    let second = compute_event_digest(&event).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_snapshot_order_changes_the_hash() {
    let trace = TraceToken::from_string("T1");
    let first = fixed_snapshot(1, &trace);
    let second = fixed_snapshot(2, &trace);

    let forward = finalize_at(
        &ProofConfig::default(),
        "Alice",
        trace.clone(),
        vec![first.clone(), second.clone()],
        ReportId::from_string(FIXED_REPORT_ID),
        FIXED_TIMESTAMP,
    )
    .unwrap();

    // Reversing the order violates the ascending precondition at finalize,
    // so compare at the digest layer where the sequence is taken as given.
    let mut reversed = forward.clone();
    reversed.event_proof.snapshots.reverse();

    let forward_digest = compute_event_digest(&forward).unwrap();
    let reversed_digest = compute_event_digest(&reversed).unwrap();
    assert_ne!(forward_digest, reversed_digest);
}

#[test]
fn test_sequence_digest_matches_reference_vector() {
    let trace = TraceToken::from_string("T1");
    let snapshot = fixed_snapshot(1, &trace);
    assert_eq!(sequence_digest(&[snapshot]).unwrap(), H_SEQ);
}

#[test]
fn test_sequence_digest_is_order_sensitive() {
    let trace = TraceToken::from_string("T1");
    let first = fixed_snapshot(1, &trace);
    let second = fixed_snapshot(2, &trace);

    let forward = sequence_digest(&[first.clone(), second.clone()]).unwrap();
    let reversed = sequence_digest(&[second, first]).unwrap();
    assert_ne!(forward, reversed);
}

#[test]
fn test_two_finalizations_differ_only_when_content_differs() {
    // Same logical inputs, same timestamps → identical hash; the digest is
    // a pure function of the pre-image.
    let make = || {
        let trace = TraceToken::from_string("T1");
        finalize_at(
            &ProofConfig::default(),
            "Alice",
            trace.clone(),
            vec![fixed_snapshot(1, &trace)],
            ReportId::from_string(FIXED_REPORT_ID),
            FIXED_TIMESTAMP,
        )
        .unwrap()
    };
    assert_eq!(
        make().event_proof.final_event_hash,
        make().event_proof.final_event_hash
    );
}

#[test]
fn test_fresh_finalize_assigns_new_identity() {
    let trace = TraceToken::from_string("T1");
    let event_a = finalize(
        &ProofConfig::default(),
        "Alice",
        trace.clone(),
        vec![fixed_snapshot(1, &trace)],
    )
    .unwrap();
    let event_b = finalize(
        &ProofConfig::default(),
        "Alice",
        trace.clone(),
        vec![fixed_snapshot(1, &trace)],
    )
    .unwrap();

    // Each finalize is a new self-contained proof root, never an update.
    assert_ne!(event_a.report_id, event_b.report_id);
}
