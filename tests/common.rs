#![allow(dead_code)]

use zcash_sighash_cache::{OutPoint, Transaction, TransactionInput, TransactionOutput};

pub struct TestTransactionBuilder {
    version: u32,
    inputs: Vec<TransactionInput>,
    outputs: Vec<TransactionOutput>,
    lock_time: u32,
}

impl TestTransactionBuilder {
    pub fn new() -> Self {
        Self {
            version: 4,
            inputs: Vec::new(),
            outputs: Vec::new(),
            lock_time: 0,
        }
    }

    pub fn add_input(self, prevout: OutPoint) -> Self {
        self.add_input_with_sequence(prevout, 0xffffffff)
    }

    pub fn add_input_with_sequence(mut self, prevout: OutPoint, sequence: u32) -> Self {
        self.inputs.push(TransactionInput {
            prevout,
            script_sig: vec![0x51], // OP_1
            sequence,
        });
        self
    }

    pub fn add_output(mut self, value: i64, script_pubkey: Vec<u8>) -> Self {
        self.outputs.push(TransactionOutput {
            value,
            script_pubkey,
        });
        self
    }

    pub fn with_version(mut self, version: u32) -> Self {
        self.version = version;
        self
    }

    pub fn with_lock_time(mut self, lock_time: u32) -> Self {
        self.lock_time = lock_time;
        self
    }

    pub fn build(self) -> Transaction {
        Transaction {
            version: self.version,
            inputs: self.inputs,
            outputs: self.outputs,
            lock_time: self.lock_time,
        }
    }
}

/// P2PKH script paying to a 20-byte hash filled with `fill`
pub fn p2pkh_script(fill: u8) -> Vec<u8> {
    let mut script = vec![0x76, 0xa9, 0x14];
    script.extend_from_slice(&[fill; 20]);
    script.extend_from_slice(&[0x88, 0xac]);
    script
}

/// Two inputs spending `0x11..` and `0x22..`, one 100000 zatoshi P2PKH output
pub fn two_input_tx() -> Transaction {
    TestTransactionBuilder::new()
        .add_input_with_sequence(OutPoint::new([0x11; 32], 0), 0xfffffffe)
        .add_input_with_sequence(OutPoint::new([0x22; 32], 1), 0xffffffff)
        .add_output(100_000, p2pkh_script(0x33))
        .build()
}

pub fn hex32(s: &str) -> [u8; 32] {
    let mut out = [0u8; 32];
    hex::decode_to_slice(s, &mut out).unwrap();
    out
}
