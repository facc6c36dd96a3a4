// Test suite for the Verifier
// Covers the round-trip property, tamper sensitivity on every semantic
// field, and malformed-record classification

mod common;

use common::fixed_event;
use snapseal_core::{verify_event, verify_record, verify_sequence, InvalidReason, Verdict};

fn assert_hash_mismatch(verdict: Verdict, expected_field: &str) {
    match verdict {
        Verdict::Invalid(InvalidReason::HashMismatch { field, .. }) => {
            assert_eq!(field, expected_field)
        }
        other => panic!("expected HashMismatch on {}, got {:?}", expected_field, other),
    }
}

#[test]
fn test_round_trip_is_valid() {
    let event = fixed_event();
    assert_eq!(verify_event(&event), Verdict::Valid);
}

#[test]
fn test_round_trip_through_serialized_record() {
    // The verifier contract: only the record bytes are needed.
    let event = fixed_event();
    let text = serde_json::to_string(&event).unwrap();
    assert_eq!(verify_record(&text), Verdict::Valid);

    // Pretty-printing is a faithful copy; field subtraction still holds.
    let pretty = serde_json::to_string_pretty(&event).unwrap();
    assert_eq!(verify_record(&pretty), Verdict::Valid);
}

#[test]
fn test_tampered_prompt_is_detected() {
    let mut event = fixed_event();
    event.event_proof.snapshots[0].input_parameters.prompt = "a blue fox".to_string();
    assert_hash_mismatch(verify_event(&event), "event_proof.final_event_hash");
}

#[test]
fn test_tampered_seed_is_detected() {
    let mut event = fixed_event();
    event.event_proof.snapshots[0].input_parameters.seed = 43;
    assert_hash_mismatch(verify_event(&event), "event_proof.final_event_hash");
}

#[test]
fn test_tampered_timestamp_is_detected() {
    let mut event = fixed_event();
    event.event_proof.snapshots[0].timestamp_utc = "2026-01-02T03:04:06+00:00".to_string();
    assert_hash_mismatch(verify_event(&event), "event_proof.final_event_hash");
}

#[test]
fn test_tampered_applicant_and_issuer_are_detected() {
    let mut event = fixed_event();
    event.applicant = "Mallory".to_string();
    assert_hash_mismatch(verify_event(&event), "event_proof.final_event_hash");

    let mut event = fixed_event();
    event.issuer = "Shadow Labs".to_string();
    assert_hash_mismatch(verify_event(&event), "event_proof.final_event_hash");
}

#[test]
fn test_tampered_issued_at_is_detected() {
    let mut event = fixed_event();
    event.issued_at = "2027-01-02T03:04:05+00:00".to_string();
    assert_hash_mismatch(verify_event(&event), "event_proof.final_event_hash");
}

#[test]
fn test_tampered_snapshot_digest_is_detected_at_snapshot_level() {
    let mut event = fixed_event();
    event.event_proof.snapshots[0].content_digest = "0".repeat(64);
    assert_hash_mismatch(
        verify_event(&event),
        "event_proof.snapshots[0].content_digest",
    );
}

#[test]
fn test_tampered_image_payload_is_detected_at_snapshot_level() {
    let mut event = fixed_event();
    event.event_proof.snapshots[0].content_base64 = "c3dhcHBlZA==".to_string(); // "swapped"
    assert_hash_mismatch(
        verify_event(&event),
        "event_proof.snapshots[0].content_digest",
    );
}

#[test]
fn test_tampered_final_hash_is_detected() {
    let mut event = fixed_event();
    event.event_proof.final_event_hash = "f".repeat(64);
    assert_hash_mismatch(verify_event(&event), "event_proof.final_event_hash");
}

#[test]
fn test_descriptive_blocks_are_not_digested() {
    // verification and metadata are derivative; editing them must not
    // break the digest round-trip.
    let mut event = fixed_event();
    event.verification.verify_url = "https://mirror.example/verify?hash=whatever".to_string();
    event.metadata.format_version = "1.2".to_string();
    assert_eq!(verify_event(&event), Verdict::Valid);
}

#[test]
fn test_trace_disagreement_is_malformed() {
    let mut event = fixed_event();
    event.event_proof.snapshots[0].trace_token =
        snapseal_core::TraceToken::from_string("T-other");
    assert_eq!(
        verify_event(&event),
        Verdict::Invalid(InvalidReason::MalformedRecord {
            field: "event_proof.snapshots[0].trace_token".to_string()
        })
    );
}

#[test]
fn test_missing_required_fields_are_named() {
    let event = fixed_event();
    let mut value = serde_json::to_value(&event).unwrap();
    value.as_object_mut().unwrap().remove("applicant");
    let verdict = verify_record(&value.to_string());
    assert_eq!(
        verdict,
        Verdict::Invalid(InvalidReason::MalformedRecord {
            field: "applicant".to_string()
        })
    );

    let mut value = serde_json::to_value(&event).unwrap();
    value["event_proof"]
        .as_object_mut()
        .unwrap()
        .remove("final_event_hash");
    let verdict = verify_record(&value.to_string());
    assert_eq!(
        verdict,
        Verdict::Invalid(InvalidReason::MalformedRecord {
            field: "event_proof.final_event_hash".to_string()
        })
    );
}

#[test]
fn test_empty_snapshot_list_is_malformed() {
    let mut event = fixed_event();
    event.event_proof.snapshots.clear();
    assert_eq!(
        verify_event(&event),
        Verdict::Invalid(InvalidReason::MalformedRecord {
            field: "event_proof.snapshots".to_string()
        })
    );
}

#[test]
fn test_sequence_round_trip_and_tamper() {
    let event = fixed_event();
    let snapshots = event.event_proof.snapshots.clone();
    let digest = snapseal_core::sequence_digest(&snapshots).unwrap();

    assert_eq!(verify_sequence(&snapshots, &digest), Verdict::Valid);

    let mut tampered = snapshots.clone();
    tampered[0].input_parameters.seed = 99;
    assert_hash_mismatch(verify_sequence(&tampered, &digest), "sequence_digest");
}
