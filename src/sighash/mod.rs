//! ZIP 143/243 transparent sighash digest caching

pub mod cache;
pub mod calculators;

pub use cache::SigHashCache;
pub use calculators::{calc_hash_outputs, calc_hash_prevouts, calc_hash_sequence};
