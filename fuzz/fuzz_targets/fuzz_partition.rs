#![no_main]

use libfuzzer_sys::fuzz_target;

use mcpi_core::partition::partition;

fuzz_target!(|data: &[u8]| {
    if data.len() < 10 {
        return;
    }
    let total = u64::from_le_bytes([
        data[0], data[1], data[2], data[3], data[4], data[5], data[6], data[7],
    ]);
    // Keep the batch table small
    let workers = usize::from(u16::from_le_bytes([data[8], data[9]]));

    match partition(total, workers) {
        Ok(batches) => {
            assert_eq!(batches.len(), workers);
            assert_eq!(batches.iter().map(|b| b.trials()).sum::<u64>(), total);
        }
        Err(_) => assert!(total == 0 || workers == 0),
    }
});
