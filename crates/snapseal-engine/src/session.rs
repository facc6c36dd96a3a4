//! Session accumulation with freeze-at-finalize discipline
//!
//! A Session owns the mutable snapshot sequence of one live generation
//! run. Appends are only legal while the session is open; finalization is
//! terminal. Once a hash has been computed over the sequence (either the
//! full proof event or the multi-version sequence digest), the session
//! rejects every further mutation, so a published digest can never drift
//! from the sequence it describes. A new request starts an entirely new
//! session with a new trace token.

use serde::{Deserialize, Serialize};
use snapseal_core::{
    finalize, seal, sequence_digest, verify_sequence, GenerationParams, ProofConfig, ProofError,
    ProofEvent, Result, Snapshot, TraceToken, Verdict,
};
use snapseal_core::{log_op_end, log_op_error, log_op_start};
use std::time::Instant;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SessionState {
    Open,
    Finalized,
}

/// Single-owner accumulation of one session's sealed snapshots
#[derive(Debug)]
pub struct Session {
    trace_token: TraceToken,
    snapshots: Vec<Snapshot>,
    state: SessionState,
}

impl Session {
    /// Start a new session with a fresh trace token
    pub fn new() -> Self {
        Self::with_trace_token(TraceToken::new())
    }

    /// Start a session under an existing trace token
    pub fn with_trace_token(trace_token: TraceToken) -> Self {
        Self {
            trace_token,
            snapshots: Vec::new(),
            state: SessionState::Open,
        }
    }

    /// The session's trace token
    pub fn trace_token(&self) -> &TraceToken {
        &self.trace_token
    }

    /// Snapshots sealed so far, in version order
    pub fn snapshots(&self) -> &[Snapshot] {
        &self.snapshots
    }

    /// Number of sealed versions
    pub fn version_count(&self) -> usize {
        self.snapshots.len()
    }

    /// Whether the session has been finalized or frozen
    pub fn is_finalized(&self) -> bool {
        self.state == SessionState::Finalized
    }

    fn ensure_open(&self) -> Result<()> {
        if self.state == SessionState::Finalized {
            return Err(ProofError::SessionFinalized {
                trace_token: self.trace_token.as_str().to_string(),
            });
        }
        Ok(())
    }

    /// Seal the next version of this session and append it
    ///
    /// The version index is assigned automatically (1-based, ascending).
    ///
    /// # Errors
    ///
    /// `SessionFinalized` after finalize/freeze; otherwise the sealer's
    /// `InvalidInput` failures.
    pub fn seal_next(
        &mut self,
        params: GenerationParams,
        image_bytes: &[u8],
    ) -> Result<&Snapshot> {
        self.ensure_open()?;
        let version_index = self.snapshots.len() as u32 + 1;
        let snapshot = seal(params, image_bytes, version_index, &self.trace_token)?;
        self.snapshots.push(snapshot);
        Ok(&self.snapshots[self.snapshots.len() - 1])
    }

    /// Append an externally sealed snapshot
    ///
    /// # Errors
    ///
    /// `SessionFinalized` after finalize/freeze, `InconsistentTrace` for a
    /// foreign trace token, `InvalidInput` for a non-ascending version
    /// index.
    pub fn append(&mut self, snapshot: Snapshot) -> Result<()> {
        self.ensure_open()?;
        if snapshot.trace_token != self.trace_token {
            return Err(ProofError::InconsistentTrace {
                expected: self.trace_token.as_str().to_string(),
                found: snapshot.trace_token.as_str().to_string(),
                version_index: snapshot.version_index,
            });
        }
        if let Some(last) = self.snapshots.last() {
            if snapshot.version_index <= last.version_index {
                return Err(ProofError::invalid_input(
                    "version_index",
                    format!(
                        "expected a version index above {}, got {}",
                        last.version_index, snapshot.version_index
                    ),
                ));
            }
        }
        self.snapshots.push(snapshot);
        Ok(())
    }

    /// Finalize the session into a proof event and freeze it
    ///
    /// # Errors
    ///
    /// `SessionFinalized` if already terminal, plus the builder's failure
    /// modes (`EmptySnapshotSet` in particular).
    pub fn finalize(&mut self, config: &ProofConfig, applicant: &str) -> Result<ProofEvent> {
        let start = Instant::now();
        log_op_start!("finalize_session", trace_token = self.trace_token.as_str());

        let outcome = self.finalize_inner(config, applicant);

        let duration_ms = start.elapsed().as_millis() as u64;
        match &outcome {
            Ok(event) => {
                log_op_end!(
                    "finalize_session",
                    duration_ms = duration_ms,
                    report_id = event.report_id.as_str()
                );
            }
            Err(e) => {
                log_op_error!("finalize_session", e, duration_ms = duration_ms);
            }
        }
        outcome
    }

    fn finalize_inner(&mut self, config: &ProofConfig, applicant: &str) -> Result<ProofEvent> {
        self.ensure_open()?;
        let event = finalize(
            config,
            applicant,
            self.trace_token.clone(),
            self.snapshots.clone(),
        )?;
        self.state = SessionState::Finalized;
        Ok(event)
    }

    /// Freeze the session into its bare snapshot sequence plus digest
    ///
    /// The multi-version variant: no applicant/issuer wrapper, the
    /// pre-image is the ordered sequence itself.
    ///
    /// # Errors
    ///
    /// `SessionFinalized` if already terminal, `EmptySnapshotSet` when
    /// nothing was sealed.
    pub fn freeze(&mut self) -> Result<FrozenSession> {
        self.ensure_open()?;
        let digest = sequence_digest(&self.snapshots)?;
        self.state = SessionState::Finalized;
        Ok(FrozenSession {
            trace_token: self.trace_token.clone(),
            snapshots: std::mem::take(&mut self.snapshots),
            sequence_digest: digest,
        })
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

/// A frozen snapshot sequence with its computed digest
///
/// What the document-rendering collaborator receives in session mode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrozenSession {
    pub trace_token: TraceToken,
    pub snapshots: Vec<Snapshot>,
    pub sequence_digest: String,
}

impl FrozenSession {
    /// Re-verify the sequence against its digest
    pub fn verify(&self) -> Verdict {
        verify_sequence(&self.snapshots, &self.sequence_digest)
    }
}
