//! Benchmark profiles for the Rastra image access engine.
//!
//! Provides pre-built stores of reference sizes so every bench file
//! measures the same workloads.

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use rastra_array::ArrayStore;
use rastra_core::Interval;
use rastra_roi::RectangleRegion;

/// A 512x512 single-plane image with a deterministic value ramp.
pub fn reference_plane() -> ArrayStore<f32> {
    let mut store: ArrayStore<f32> = ArrayStore::new(&[512, 512], 1).unwrap();
    for i in 0..(512 * 512) {
        *store.slot_mut(i) = (i % 251) as f32;
    }
    store
}

/// A 64x64x64 volume with a deterministic value ramp.
pub fn reference_volume() -> ArrayStore<f32> {
    let mut store: ArrayStore<f32> = ArrayStore::new(&[64, 64, 64], 1).unwrap();
    for i in 0..(64 * 64 * 64) {
        *store.slot_mut(i) = (i % 251) as f32;
    }
    store
}

/// The centered quarter-size rectangle of [`reference_plane`].
pub fn reference_roi() -> RectangleRegion {
    RectangleRegion::new(Interval::new(&[128, 128], &[256, 256]).unwrap())
}
