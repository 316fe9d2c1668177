//! Cached intermediate sighash digests
//!
//! A [`SigHashCache`] is built once per signing session and then shared
//! read-only by every input's sighash computation.

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

use crate::config::SigHashConfig;
use crate::error::Result;
use crate::hashing::{Blake2bPersonalHasher, Hash256, PersonalizedHasher};
use crate::sighash::calculators::{calc_hash_outputs, calc_hash_prevouts, calc_hash_sequence};
use crate::transaction::TransactionView;

type DigestResults = (Result<Hash256>, Result<Hash256>, Result<Hash256>);

/// `hashPrevouts`, `hashSequence` and `hashOutputs` of one transaction
///
/// Holds no reference to the transaction it was built from. If the
/// transaction changes afterwards, the cache is stale and must be rebuilt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SigHashCache {
    #[serde(with = "hex_digest")]
    hash_prevouts: Hash256,
    #[serde(with = "hex_digest")]
    hash_sequence: Hash256,
    #[serde(with = "hex_digest")]
    hash_outputs: Hash256,
}

impl SigHashCache {
    /// Build the cache with BLAKE2b and the default configuration
    pub fn new<T: TransactionView>(tx: &T) -> Result<Self> {
        Self::build_with(tx, &Blake2bPersonalHasher, &SigHashConfig::default())
    }

    /// Build the cache with an explicit hasher and configuration
    ///
    /// Either all three digests are returned or the first error is. Errors are
    /// reported in the order prevouts, sequence, outputs whether or not the
    /// digests were computed concurrently.
    pub fn build_with<T, H>(tx: &T, hasher: &H, config: &SigHashConfig) -> Result<Self>
    where
        T: TransactionView,
        H: PersonalizedHasher + ?Sized,
    {
        let items = tx.inputs().len() + tx.outputs().len();
        let parallel = config.use_parallel(items);

        debug!(
            inputs = tx.inputs().len(),
            outputs = tx.outputs().len(),
            parallel,
            "building sighash cache"
        );

        if parallel {
            let (prevouts, sequence, outputs) = Self::compute_parallel(tx, hasher);
            return Ok(Self {
                hash_prevouts: prevouts?,
                hash_sequence: sequence?,
                hash_outputs: outputs?,
            });
        }

        Ok(Self {
            hash_prevouts: calc_hash_prevouts(tx.inputs(), hasher)?,
            hash_sequence: calc_hash_sequence(tx.inputs(), hasher)?,
            hash_outputs: calc_hash_outputs(tx.outputs(), hasher)?,
        })
    }

    #[cfg(feature = "parallel")]
    fn compute_parallel<T, H>(tx: &T, hasher: &H) -> DigestResults
    where
        T: TransactionView,
        H: PersonalizedHasher + ?Sized,
    {
        let ((prevouts, sequence), outputs) = rayon::join(
            || {
                rayon::join(
                    || calc_hash_prevouts(tx.inputs(), hasher),
                    || calc_hash_sequence(tx.inputs(), hasher),
                )
            },
            || calc_hash_outputs(tx.outputs(), hasher),
        );
        (prevouts, sequence, outputs)
    }

    // Unreachable: SigHashConfig::use_parallel is false without the feature
    #[cfg(not(feature = "parallel"))]
    fn compute_parallel<T, H>(tx: &T, hasher: &H) -> DigestResults
    where
        T: TransactionView,
        H: PersonalizedHasher + ?Sized,
    {
        (
            calc_hash_prevouts(tx.inputs(), hasher),
            calc_hash_sequence(tx.inputs(), hasher),
            calc_hash_outputs(tx.outputs(), hasher),
        )
    }

    /// Restore a cache from digests computed earlier
    pub fn from_parts(
        hash_prevouts: Hash256,
        hash_sequence: Hash256,
        hash_outputs: Hash256,
    ) -> Self {
        Self {
            hash_prevouts,
            hash_sequence,
            hash_outputs,
        }
    }

    pub fn hash_prevouts(&self) -> &Hash256 {
        &self.hash_prevouts
    }

    pub fn hash_sequence(&self) -> &Hash256 {
        &self.hash_sequence
    }

    pub fn hash_outputs(&self) -> &Hash256 {
        &self.hash_outputs
    }
}

impl fmt::Display for SigHashCache {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "hashPrevouts={} hashSequence={} hashOutputs={}",
            hex::encode(self.hash_prevouts),
            hex::encode(self.hash_sequence),
            hex::encode(self.hash_outputs)
        )
    }
}

/// Serialize 32-byte digests as lowercase hex strings
mod hex_digest {
    use serde::{de, Deserialize, Deserializer, Serializer};

    use crate::hashing::Hash256;

    pub fn serialize<S: Serializer>(digest: &Hash256, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&hex::encode(digest))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Hash256, D::Error> {
        let s = String::deserialize(deserializer)?;
        let mut out = [0u8; 32];
        hex::decode_to_slice(&s, &mut out).map_err(de::Error::custom)?;
        Ok(out)
    }
}
