//! Shared input generators and byte accounting for the lanewise benchmarks.

#![allow(dead_code)]

use rand::Rng;

pub const ELEM_SIZES: &[usize] = &[1024, 4096, 16384, 65536];

pub fn size_label(n: usize) -> String {
    match n {
        1024 => "1K".into(),
        4096 => "4K".into(),
        16384 => "16K".into(),
        65536 => "64K".into(),
        _ => format!("{n}"),
    }
}

/// Bytes moved by a two-input, one-output lanewise pass over `n` f32.
pub fn binary_rw_bytes(n: usize) -> u64 {
    (n * std::mem::size_of::<f32>() * 3) as u64
}

/// Bytes moved by a masked store: the destination is read and written.
pub fn masked_store_rw_bytes(n: usize) -> u64 {
    (n * std::mem::size_of::<f32>() * 3) as u64
}

pub fn random_f32_vec(n: usize) -> Vec<f32> {
    let mut rng = rand::thread_rng();
    (0..n).map(|_| rng.gen_range(-1.0..1.0)).collect()
}

pub fn random_bool_vec(n: usize) -> Vec<bool> {
    let mut rng = rand::thread_rng();
    (0..n).map(|_| rng.gen_bool(0.5)).collect()
}
