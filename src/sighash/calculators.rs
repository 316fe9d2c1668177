//! Category hash calculators
//!
//! Each calculator concatenates one field category across all inputs or
//! outputs, in transaction order, and hashes the buffer under the category's
//! personalization. Each digest is reused for every input signed with
//! SIGHASH_ALL, bringing validation of an N-input transaction from O(N^2) to
//! O(N) hashing.

use tracing::{trace, warn};

use crate::error::Result;
use crate::hashing::{Hash256, Personalization, PersonalizedHasher};
use crate::transaction::{write_outpoint, write_u32_le, InputView, OutputView};

const OUTPOINT_LEN: usize = 36;
const SEQUENCE_LEN: usize = 4;

/// `hashPrevouts`: every input's outpoint (hash || index LE)
pub fn calc_hash_prevouts<I, H>(inputs: &[I], hasher: &H) -> Result<Hash256>
where
    I: InputView,
    H: PersonalizedHasher + ?Sized,
{
    let mut buf = Vec::with_capacity(inputs.len() * OUTPOINT_LEN);
    for input in inputs {
        write_outpoint(&mut buf, input.prevout_hash(), input.prevout_index());
    }
    finish(&buf, Personalization::PrevOuts, hasher)
}

/// `hashSequence`: every input's sequence number, LE
pub fn calc_hash_sequence<I, H>(inputs: &[I], hasher: &H) -> Result<Hash256>
where
    I: InputView,
    H: PersonalizedHasher + ?Sized,
{
    let mut buf = Vec::with_capacity(inputs.len() * SEQUENCE_LEN);
    for input in inputs {
        write_u32_le(&mut buf, input.sequence());
    }
    finish(&buf, Personalization::Sequence, hasher)
}

/// `hashOutputs`: every output in wire format
pub fn calc_hash_outputs<O, H>(outputs: &[O], hasher: &H) -> Result<Hash256>
where
    O: OutputView,
    H: PersonalizedHasher + ?Sized,
{
    let mut buf = Vec::new();
    for output in outputs {
        output.write_wire(&mut buf);
    }
    finish(&buf, Personalization::Outputs, hasher)
}

fn finish<H>(buf: &[u8], personalization: Personalization, hasher: &H) -> Result<Hash256>
where
    H: PersonalizedHasher + ?Sized,
{
    trace!(%personalization, len = buf.len(), "hashing sighash category");
    hasher
        .hash(buf, personalization.as_bytes())
        .inspect_err(|e| warn!(%personalization, "sighash digest failed: {}", e))
}
