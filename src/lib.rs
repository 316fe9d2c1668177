//! Zcash SigHash Cache - cached transparent sighash digests
//!
//! Computes the three intermediate digests that ZIP 143/243 (the Zcash
//! adaptation of BIP143) mix into every transparent input's signature hash:
//!
//! - `hashPrevouts` over all spent outpoints
//! - `hashSequence` over all input sequence numbers
//! - `hashOutputs` over all created outputs
//!
//! Building a [`SigHashCache`] once per transaction and reusing it for every
//! input keeps signing and verification of an N-input transaction at O(N)
//! hashing instead of O(N^2).
//!
//! ## Design Principles
//!
//! 1. **Pure**: no I/O, no global state, identical input gives identical digests
//! 2. **Representation independent**: anything implementing [`TransactionView`]
//!    can be hashed
//! 3. **Closed personalization domain**: tags come from [`Personalization`],
//!    never from free-form strings
//!
//! Final sighash assembly, hash-type policy and shielded components are left to
//! the caller.

pub mod config;
pub mod error;
pub mod hashing;
pub mod sighash;
pub mod transaction;

pub use config::SigHashConfig;
pub use error::{Result, SigHashError};
pub use hashing::{
    blake2b_256_personal, Blake2bPersonalHasher, Hash256, Personalization, PersonalizedHasher,
};
pub use sighash::{calc_hash_outputs, calc_hash_prevouts, calc_hash_sequence, SigHashCache};
pub use transaction::{
    InputView, OutPoint, OutputView, Transaction, TransactionInput, TransactionOutput,
    TransactionView,
};
