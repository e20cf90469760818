//! Width-extension policy.
//!
//! Maps a logical width to the width computation should happen at. On most
//! targets the two are equal. Wide-only hardware (AVX-512F without VL) has no
//! narrow encodings, so a request made against the platform's nominal maximum
//! is widened to that maximum.

use crate::isa::{SIMD_WIDTH, WIDE_ONLY};

/// Effective computation width for logical width `n` against maximum `n2`.
///
/// `native_max` and `wide_only` describe the hardware class. The result is
/// never smaller than `n`.
pub const fn extend_width(n: usize, n2: usize, native_max: usize, wide_only: bool) -> usize {
    if wide_only && n2 == native_max && native_max > n {
        native_max
    } else {
        n
    }
}

/// `(logical, computation)` width pair for a kernel instantiated at `n`.
pub const fn simd_mode(n: usize) -> (usize, usize) {
    if WIDE_ONLY {
        (n, SIMD_WIDTH)
    } else {
        (n, n)
    }
}

/// Compile-time width extension for this build.
pub struct VExtend<const N: usize, const N2: usize = { SIMD_WIDTH }>;

impl<const N: usize, const N2: usize> VExtend<N, N2> {
    pub const SIZE: usize = extend_width(N, N2, SIMD_WIDTH, WIDE_ONLY);
}
