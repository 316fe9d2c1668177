//! Read-only transaction views and field serialization
//!
//! The cached digests only need a handful of transaction fields. Anything that
//! can expose its inputs and outputs in transaction order implements
//! [`TransactionView`]; [`Transaction`] is the in-crate representation.

use serde::{Deserialize, Serialize};

use crate::hashing::Hash256;

/// Reference to an output of a prior transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OutPoint {
    /// Previous transaction id, in internal byte order
    pub hash: Hash256,
    pub index: u32,
}

impl OutPoint {
    pub fn new(hash: Hash256, index: u32) -> Self {
        Self { hash, index }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionInput {
    pub prevout: OutPoint,
    /// Not committed to by any cached digest
    #[serde(default)]
    pub script_sig: Vec<u8>,
    pub sequence: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionOutput {
    /// Amount in zatoshis
    pub value: i64,
    pub script_pubkey: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    pub version: u32,
    pub inputs: Vec<TransactionInput>,
    pub outputs: Vec<TransactionOutput>,
    pub lock_time: u32,
}

/// Input fields committed to by `hashPrevouts` and `hashSequence`
pub trait InputView {
    fn prevout_hash(&self) -> &Hash256;
    fn prevout_index(&self) -> u32;
    fn sequence(&self) -> u32;
}

/// Output committed to by `hashOutputs`
pub trait OutputView {
    /// Append the canonical wire encoding of this output to `buf`
    fn write_wire(&self, buf: &mut Vec<u8>);
}

/// Ordered, read-only access to a transaction's inputs and outputs
pub trait TransactionView: Sync {
    type Input: InputView + Sync;
    type Output: OutputView + Sync;

    fn inputs(&self) -> &[Self::Input];
    fn outputs(&self) -> &[Self::Output];
}

impl InputView for TransactionInput {
    fn prevout_hash(&self) -> &Hash256 {
        &self.prevout.hash
    }

    fn prevout_index(&self) -> u32 {
        self.prevout.index
    }

    fn sequence(&self) -> u32 {
        self.sequence
    }
}

impl OutputView for TransactionOutput {
    fn write_wire(&self, buf: &mut Vec<u8>) {
        write_output(buf, self.value, &self.script_pubkey);
    }
}

impl TransactionView for Transaction {
    type Input = TransactionInput;
    type Output = TransactionOutput;

    fn inputs(&self) -> &[TransactionInput] {
        &self.inputs
    }

    fn outputs(&self) -> &[TransactionOutput] {
        &self.outputs
    }
}

/// Append an outpoint: 32-byte hash verbatim, then the index little-endian
pub fn write_outpoint(buf: &mut Vec<u8>, hash: &Hash256, index: u32) {
    buf.extend_from_slice(hash);
    write_u32_le(buf, index);
}

pub fn write_u32_le(buf: &mut Vec<u8>, value: u32) {
    buf.extend_from_slice(&value.to_le_bytes());
}

/// Append an output in wire format: 8-byte LE amount, CompactSize script
/// length, script bytes
pub fn write_output(buf: &mut Vec<u8>, value: i64, script_pubkey: &[u8]) {
    buf.extend_from_slice(&value.to_le_bytes());
    write_compact_size(buf, script_pubkey.len() as u64);
    buf.extend_from_slice(script_pubkey);
}

/// Append a Bitcoin CompactSize integer
pub fn write_compact_size(buf: &mut Vec<u8>, n: u64) {
    match n {
        0..=0xfc => buf.push(n as u8),
        0xfd..=0xffff => {
            buf.push(0xfd);
            buf.extend_from_slice(&(n as u16).to_le_bytes());
        }
        0x1_0000..=0xffff_ffff => {
            buf.push(0xfe);
            buf.extend_from_slice(&(n as u32).to_le_bytes());
        }
        _ => {
            buf.push(0xff);
            buf.extend_from_slice(&n.to_le_bytes());
        }
    }
}
