#![no_main]
use libfuzzer_sys::fuzz_target;
use zcash_sighash_cache::{
    Blake2bPersonalHasher, OutPoint, SigHashCache, SigHashConfig, Transaction, TransactionInput,
    TransactionOutput,
};

fuzz_target!(|data: &[u8]| {
    // Carve inputs (40 bytes each) and outputs (8-byte value + script) out of
    // the fuzzed data, then check the cache build never fails or diverges

    if data.len() < 2 {
        return;
    }

    let input_count = data[0] as usize % 32;
    let mut offset = 2;

    let mut inputs = Vec::with_capacity(input_count);
    for _ in 0..input_count {
        let Some(chunk) = data.get(offset..offset + 40) else {
            break;
        };
        let mut hash = [0u8; 32];
        hash.copy_from_slice(&chunk[..32]);
        inputs.push(TransactionInput {
            prevout: OutPoint::new(hash, u32::from_le_bytes([chunk[32], chunk[33], chunk[34], chunk[35]])),
            script_sig: vec![],
            sequence: u32::from_le_bytes([chunk[36], chunk[37], chunk[38], chunk[39]]),
        });
        offset += 40;
    }

    let script_len = data[1] as usize;
    let mut outputs = Vec::new();
    while let Some(value) = data.get(offset..offset + 8) {
        offset += 8;
        let end = (offset + script_len).min(data.len());
        outputs.push(TransactionOutput {
            value: i64::from_le_bytes(value.try_into().unwrap()),
            script_pubkey: data[offset..end].to_vec(),
        });
        offset = end;
    }

    let tx = Transaction {
        version: 4,
        inputs,
        outputs,
        lock_time: 0,
    };

    let sequential =
        SigHashCache::build_with(&tx, &Blake2bPersonalHasher, &SigHashConfig::sequential())
            .expect("BLAKE2b with a fixed tag never fails");
    let parallel = SigHashCache::build_with(
        &tx,
        &Blake2bPersonalHasher,
        &SigHashConfig {
            parallel: true,
            parallel_threshold: 1,
        },
    )
    .expect("BLAKE2b with a fixed tag never fails");
    assert_eq!(sequential, parallel);
});
