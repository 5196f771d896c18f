//! Fuzz target for UTF-16 segmentation.
//!
//! Segmentation, boundaries and alignment must never panic, and no group
//! may hold an unpaired surrogate.

#![no_main]

use buffer_a11y::unicode::{
    align_to_codepoint, codepoint_boundaries, is_leading_surrogate, is_trailing_surrogate, segment,
};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let units: Vec<u16> = data
        .chunks_exact(2)
        .map(|pair| u16::from_le_bytes([pair[0], pair[1]]))
        .collect();

    for group in segment(&units) {
        let g = group.units();
        if g.len() == 2 {
            assert!(is_leading_surrogate(g[0]) && is_trailing_surrogate(g[1]));
        } else {
            assert!(!is_leading_surrogate(g[0]) && !is_trailing_surrogate(g[0]));
        }
    }

    let bounds = codepoint_boundaries(&units);
    assert_eq!(bounds.last().copied(), Some(units.len()));

    for idx in 0..=units.len().min(16) {
        let _ = align_to_codepoint(&units, idx);
    }
});
