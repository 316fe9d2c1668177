//! Property tests for sighash cache invariants

use proptest::prelude::*;
use zcash_sighash_cache::{
    Blake2bPersonalHasher, OutPoint, SigHashCache, SigHashConfig, Transaction, TransactionInput,
    TransactionOutput,
};

fn arb_input() -> impl Strategy<Value = TransactionInput> {
    (any::<[u8; 32]>(), any::<u32>(), any::<u32>()).prop_map(|(hash, index, sequence)| {
        TransactionInput {
            prevout: OutPoint::new(hash, index),
            script_sig: vec![],
            sequence,
        }
    })
}

fn arb_output() -> impl Strategy<Value = TransactionOutput> {
    (0i64..2_100_000_000_000_000, prop::collection::vec(any::<u8>(), 0..300)).prop_map(
        |(value, script_pubkey)| TransactionOutput {
            value,
            script_pubkey,
        },
    )
}

fn arb_tx() -> impl Strategy<Value = Transaction> {
    (
        prop::collection::vec(arb_input(), 0..20),
        prop::collection::vec(arb_output(), 0..20),
    )
        .prop_map(|(inputs, outputs)| Transaction {
            version: 4,
            inputs,
            outputs,
            lock_time: 0,
        })
}

proptest! {
    #[test]
    fn test_build_deterministic(tx in arb_tx()) {
        let a = SigHashCache::new(&tx).unwrap();
        let b = SigHashCache::new(&tx).unwrap();
        prop_assert_eq!(a, b);
    }

    #[test]
    fn test_parallel_equals_sequential(tx in arb_tx()) {
        let parallel = SigHashConfig { parallel: true, parallel_threshold: 1 };
        let a = SigHashCache::build_with(&tx, &Blake2bPersonalHasher, &parallel).unwrap();
        let b = SigHashCache::build_with(&tx, &Blake2bPersonalHasher, &SigHashConfig::sequential()).unwrap();
        prop_assert_eq!(a, b);
    }

    #[test]
    fn test_outputs_independent_of_inputs(tx in arb_tx(), other_inputs in prop::collection::vec(arb_input(), 0..20)) {
        let mut changed = tx.clone();
        changed.inputs = other_inputs;
        let a = SigHashCache::new(&tx).unwrap();
        let b = SigHashCache::new(&changed).unwrap();
        prop_assert_eq!(a.hash_outputs(), b.hash_outputs());
    }

    #[test]
    fn test_inputs_independent_of_outputs(tx in arb_tx(), other_outputs in prop::collection::vec(arb_output(), 0..20)) {
        let mut changed = tx.clone();
        changed.outputs = other_outputs;
        let a = SigHashCache::new(&tx).unwrap();
        let b = SigHashCache::new(&changed).unwrap();
        prop_assert_eq!(a.hash_prevouts(), b.hash_prevouts());
        prop_assert_eq!(a.hash_sequence(), b.hash_sequence());
    }

    #[test]
    fn test_prevout_byte_flip_isolated(
        tx in arb_tx().prop_filter("needs an input", |tx| !tx.inputs.is_empty()),
        pick in any::<prop::sample::Index>(),
        byte in 0usize..36,
    ) {
        let mut changed = tx.clone();
        let i = pick.index(changed.inputs.len());
        if byte < 32 {
            changed.inputs[i].prevout.hash[byte] ^= 0x01;
        } else {
            changed.inputs[i].prevout.index ^= 1 << (8 * (byte - 32));
        }
        let a = SigHashCache::new(&tx).unwrap();
        let b = SigHashCache::new(&changed).unwrap();
        prop_assert_ne!(a.hash_prevouts(), b.hash_prevouts());
        prop_assert_eq!(a.hash_sequence(), b.hash_sequence());
        prop_assert_eq!(a.hash_outputs(), b.hash_outputs());
    }

    #[test]
    fn test_sequence_change_isolated(
        tx in arb_tx().prop_filter("needs an input", |tx| !tx.inputs.is_empty()),
        pick in any::<prop::sample::Index>(),
        bit in 0u32..32,
    ) {
        let mut changed = tx.clone();
        let i = pick.index(changed.inputs.len());
        changed.inputs[i].sequence ^= 1 << bit;
        let a = SigHashCache::new(&tx).unwrap();
        let b = SigHashCache::new(&changed).unwrap();
        prop_assert_eq!(a.hash_prevouts(), b.hash_prevouts());
        prop_assert_ne!(a.hash_sequence(), b.hash_sequence());
        prop_assert_eq!(a.hash_outputs(), b.hash_outputs());
    }

    #[test]
    fn test_output_value_change_isolated(
        tx in arb_tx().prop_filter("needs an output", |tx| !tx.outputs.is_empty()),
        pick in any::<prop::sample::Index>(),
    ) {
        let mut changed = tx.clone();
        let i = pick.index(changed.outputs.len());
        changed.outputs[i].value ^= 1;
        let a = SigHashCache::new(&tx).unwrap();
        let b = SigHashCache::new(&changed).unwrap();
        prop_assert_eq!(a.hash_prevouts(), b.hash_prevouts());
        prop_assert_eq!(a.hash_sequence(), b.hash_sequence());
        prop_assert_ne!(a.hash_outputs(), b.hash_outputs());
    }
}
