#![no_main]

use libfuzzer_sys::fuzz_target;

use mcpi_core::{TrialBatch, Worker};

fuzz_target!(|data: &[u8]| {
    if data.len() < 10 {
        return;
    }
    let seed = u64::from_le_bytes([
        data[0], data[1], data[2], data[3], data[4], data[5], data[6], data[7],
    ]);
    // Capped at 4096 trials for speed
    let trials = u64::from(u16::from_le_bytes([data[8], data[9]]) % 4096);

    let result = Worker::new(TrialBatch::new(0, trials), seed).run();
    assert!(result.hits <= result.trials);
});
