//! Lanewise operations with compile-time dispatch.
//!
//! Each operation is a trait implemented once per (element, width). Which impl
//! exists is decided by the `simd_*` cfgs of the build, following the same
//! cascade everywhere:
//!
//! | width | body |
//! |---|---|
//! | 1 | scalar operation, generic over the element |
//! | 4 | native instruction if the tier has one, else a per-lane loop |
//! | 8, 16 | native instruction if the tier has one, else two half-width calls |
//!
//! Decomposition goes through the same traits, so a 16-wide call on an AVX
//! build lands on two native 8-wide instructions, and on an SSE build on four
//! native 4-wide ones.
//!
//! Float min/max follow whatever instruction (or scalar compare-and-select)
//! the build selected for NaN and signed-zero operands. On x86 every path
//! agrees with `MINPS`/`MAXPS`; NEON propagates NaN.
#![allow(unused_unsafe)]

mod memory;
mod min_max;
mod select;
mod sqrt;

pub use memory::{load_slice, load_slice_masked, store_slice, store_slice_masked};

use crate::vector::SimdVector;

pub trait SimdMin: SimdVector {
    fn simd_min(self, rhs: Self) -> Self;
}

pub trait SimdMax: SimdVector {
    fn simd_max(self, rhs: Self) -> Self;
}

pub trait SimdSqrt: SimdVector {
    fn simd_sqrt(self) -> Self;
}

pub trait SimdSelect: SimdVector {
    /// `self` where `mask` is set, `other` elsewhere.
    fn simd_select(self, mask: &Self::Mask, other: Self) -> Self;
}

pub trait SimdLoad: SimdVector {
    /// # Safety
    /// `src` must be valid for reading `LANES` elements. No alignment is
    /// required.
    unsafe fn simd_load(src: *const Self::Elem) -> Self;
}

pub trait SimdMaskedLoad: SimdVector {
    /// Lanes whose mask is clear are zero and their memory is not read.
    ///
    /// # Safety
    /// `src.add(i)` must be valid for reading for every set lane `i`.
    unsafe fn simd_load_masked(src: *const Self::Elem, mask: &Self::Mask) -> Self;
}

pub trait SimdStore: SimdVector {
    /// # Safety
    /// `dst` must be valid for writing `LANES` elements. No alignment is
    /// required.
    unsafe fn simd_store(self, dst: *mut Self::Elem);
}

pub trait SimdMaskedStore: SimdVector {
    /// Write lanes whose mask is set; every other destination lane keeps its
    /// prior contents bit for bit.
    ///
    /// # Safety
    /// `dst` must be valid for reading and writing `LANES` elements: the
    /// load-select-store path reads the whole extent before writing it back.
    unsafe fn simd_store_masked(self, dst: *mut Self::Elem, mask: &Self::Mask);
}

#[inline(always)]
pub fn min<V: SimdMin>(a: V, b: V) -> V {
    a.simd_min(b)
}

#[inline(always)]
pub fn max<V: SimdMax>(a: V, b: V) -> V {
    a.simd_max(b)
}

#[inline(always)]
pub fn sqrt<V: SimdSqrt>(a: V) -> V {
    a.simd_sqrt()
}

#[inline(always)]
pub fn select<V: SimdSelect>(mask: &V::Mask, a: V, b: V) -> V {
    a.simd_select(mask, b)
}

/// # Safety
/// See [`SimdLoad::simd_load`].
#[inline(always)]
pub unsafe fn load<V: SimdLoad>(src: *const V::Elem) -> V {
    V::simd_load(src)
}

/// # Safety
/// See [`SimdMaskedLoad::simd_load_masked`].
#[inline(always)]
pub unsafe fn load_masked<V: SimdMaskedLoad>(src: *const V::Elem, mask: &V::Mask) -> V {
    V::simd_load_masked(src, mask)
}

/// # Safety
/// See [`SimdStore::simd_store`].
#[inline(always)]
pub unsafe fn store<V: SimdStore>(v: V, dst: *mut V::Elem) {
    v.simd_store(dst)
}

/// # Safety
/// See [`SimdMaskedStore::simd_store_masked`].
#[inline(always)]
pub unsafe fn store_masked<V: SimdMaskedStore>(v: V, dst: *mut V::Elem, mask: &V::Mask) {
    v.simd_store_masked(dst, mask)
}
