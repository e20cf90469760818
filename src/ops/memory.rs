//! Whole-register and masked moves between vectors and memory.
//!
//! Every access is unaligned. Masked stores on tiers without a masked-move
//! instruction fall back to load-select-store over the full extent, which is
//! why `simd_store_masked` requires the whole destination to be readable.

use crate::error::{SimdError, SimdResult};
use crate::lanes::Lane;
use crate::mask::Mask;
use crate::ops::{SimdLoad, SimdMaskedLoad, SimdMaskedStore, SimdStore};
use crate::vector::Vector;

// ============================================================================
// Width 1
// ============================================================================

impl<T: Lane> SimdLoad for Vector<T, 1> {
    #[inline(always)]
    unsafe fn simd_load(src: *const T) -> Self {
        Self::splat(src.read_unaligned())
    }
}

impl<T: Lane> SimdStore for Vector<T, 1> {
    #[inline(always)]
    unsafe fn simd_store(self, dst: *mut T) {
        dst.write_unaligned(self[0]);
    }
}

impl<T: Lane> SimdMaskedLoad for Vector<T, 1> {
    #[inline(always)]
    unsafe fn simd_load_masked(src: *const T, mask: &Mask<T::MaskSlot, 1>) -> Self {
        if mask.test(0) {
            Self::splat(src.read_unaligned())
        } else {
            Self::default()
        }
    }
}

impl<T: Lane> SimdMaskedStore for Vector<T, 1> {
    #[inline(always)]
    unsafe fn simd_store_masked(self, dst: *mut T, mask: &Mask<T::MaskSlot, 1>) {
        if mask.test(0) {
            dst.write_unaligned(self[0]);
        }
    }
}

// ============================================================================
// Plain load / store
// ============================================================================

/// 4-byte elements: 128-bit at width 4 (SSE2 or NEON), 256-bit at 8, 512-bit
/// at 16.
macro_rules! define_load_store_b32 {
    ($($elem:ident),*) => {$(
        crate::tiered_impl! {
            impl SimdLoad for Vector<$elem, 4> { unsafe fn simd_load(src: *const $elem) -> Self }
            simd_sse2 => { crate::native_load!(sse, $elem, src) }
            simd_neon => { crate::native_load!(neon, $elem, src) }
            _ => { crate::lanewise_load!(src) }
        }
        crate::tiered_impl! {
            impl SimdStore for Vector<$elem, 4> { unsafe fn simd_store(self, dst: *mut $elem) }
            simd_sse2 => { crate::native_store!(sse, $elem, self, dst) }
            simd_neon => { crate::native_store!(neon, $elem, self, dst) }
            _ => { crate::lanewise_store!(self, dst) }
        }
        crate::tiered_impl! {
            impl SimdLoad for Vector<$elem, 8> { unsafe fn simd_load(src: *const $elem) -> Self }
            simd_avx => { crate::native_load!(avx, $elem, src) }
            _ => { crate::split_load!(SimdLoad::simd_load, src) }
        }
        crate::tiered_impl! {
            impl SimdStore for Vector<$elem, 8> { unsafe fn simd_store(self, dst: *mut $elem) }
            simd_avx => { crate::native_store!(avx, $elem, self, dst) }
            _ => { crate::split_store!(self, dst, simd_store) }
        }
        crate::tiered_impl! {
            impl SimdLoad for Vector<$elem, 16> { unsafe fn simd_load(src: *const $elem) -> Self }
            simd_avx512f => { crate::native_load!(avx512, $elem, src) }
            _ => { crate::split_load!(SimdLoad::simd_load, src) }
        }
        crate::tiered_impl! {
            impl SimdStore for Vector<$elem, 16> { unsafe fn simd_store(self, dst: *mut $elem) }
            simd_avx512f => { crate::native_store!(avx512, $elem, self, dst) }
            _ => { crate::split_store!(self, dst, simd_store) }
        }
    )*};
}

/// 8-byte elements: 256-bit at width 4, 512-bit at 8, always split at 16.
macro_rules! define_load_store_b64 {
    ($($elem:ident),*) => {$(
        crate::tiered_impl! {
            impl SimdLoad for Vector<$elem, 4> { unsafe fn simd_load(src: *const $elem) -> Self }
            simd_avx => { crate::native_load!(avx, $elem, src) }
            _ => { crate::lanewise_load!(src) }
        }
        crate::tiered_impl! {
            impl SimdStore for Vector<$elem, 4> { unsafe fn simd_store(self, dst: *mut $elem) }
            simd_avx => { crate::native_store!(avx, $elem, self, dst) }
            _ => { crate::lanewise_store!(self, dst) }
        }
        crate::tiered_impl! {
            impl SimdLoad for Vector<$elem, 8> { unsafe fn simd_load(src: *const $elem) -> Self }
            simd_avx512f => { crate::native_load!(avx512, $elem, src) }
            _ => { crate::split_load!(SimdLoad::simd_load, src) }
        }
        crate::tiered_impl! {
            impl SimdStore for Vector<$elem, 8> { unsafe fn simd_store(self, dst: *mut $elem) }
            simd_avx512f => { crate::native_store!(avx512, $elem, self, dst) }
            _ => { crate::split_store!(self, dst, simd_store) }
        }

        impl SimdLoad for Vector<$elem, 16> {
            #[inline(always)]
            unsafe fn simd_load(src: *const $elem) -> Self {
                crate::split_load!(SimdLoad::simd_load, src)
            }
        }

        impl SimdStore for Vector<$elem, 16> {
            #[inline(always)]
            unsafe fn simd_store(self, dst: *mut $elem) {
                crate::split_store!(self, dst, simd_store)
            }
        }
    )*};
}

define_load_store_b32!(f32, i32, u32);
define_load_store_b64!(f64, i64);

// ============================================================================
// Masked store
// ============================================================================

crate::tiered_impl! {
    impl SimdMaskedStore for Vector<f32, 4> { unsafe fn simd_store_masked(self, dst: *mut f32, mask: &Mask<i32, 4>) }
    simd_avx => { crate::native_maskstore!(sse, f32, maskstore, self, dst, mask) }
    simd_sse41 => { crate::load_select_store!(sse, f32, blendv, self, dst, mask) }
    simd_sse2 => { crate::load_select_store!(sse, f32, select_bits, self, dst, mask) }
    simd_neon => { crate::load_select_store!(neon, f32, select_bits, self, dst, mask) }
    _ => { crate::lanewise_store!(self, dst, mask) }
}

crate::tiered_impl! {
    impl SimdMaskedStore for Vector<f32, 8> { unsafe fn simd_store_masked(self, dst: *mut f32, mask: &Mask<i32, 8>) }
    simd_avx => { crate::native_maskstore!(avx, f32, maskstore, self, dst, mask) }
    _ => { crate::split_store!(self, dst, mask, simd_store_masked) }
}

crate::tiered_impl! {
    impl SimdMaskedStore for Vector<f64, 4> { unsafe fn simd_store_masked(self, dst: *mut f64, mask: &Mask<i64, 4>) }
    simd_avx => { crate::native_maskstore!(avx, f64, maskstore, self, dst, mask) }
    _ => { crate::lanewise_store!(self, dst, mask) }
}

// AVX without AVX2 has no integer masked move; the float-domain one moves the
// same bits.
crate::tiered_impl! {
    impl SimdMaskedStore for Vector<i64, 4> { unsafe fn simd_store_masked(self, dst: *mut i64, mask: &Mask<i64, 4>) }
    simd_avx2 => { crate::native_maskstore!(avx, i64, maskstore, self, dst, mask) }
    simd_avx => { crate::native_maskstore!(avx, i64, maskstore_fp, self, dst, mask) }
    _ => { crate::lanewise_store!(self, dst, mask) }
}

macro_rules! define_masked_store_int32 {
    ($($elem:ident),*) => {$(
        crate::tiered_impl! {
            impl SimdMaskedStore for Vector<$elem, 4> { unsafe fn simd_store_masked(self, dst: *mut $elem, mask: &Mask<i32, 4>) }
            simd_avx2 => { crate::native_maskstore!(sse, $elem, maskstore, self, dst, mask) }
            simd_avx => { crate::native_maskstore!(sse, $elem, maskstore_fp, self, dst, mask) }
            simd_sse41 => { crate::load_select_store!(sse, $elem, blendv, self, dst, mask) }
            simd_sse2 => { crate::load_select_store!(sse, $elem, select_bits, self, dst, mask) }
            simd_neon => { crate::load_select_store!(neon, $elem, select_bits, self, dst, mask) }
            _ => { crate::lanewise_store!(self, dst, mask) }
        }
        crate::tiered_impl! {
            impl SimdMaskedStore for Vector<$elem, 8> { unsafe fn simd_store_masked(self, dst: *mut $elem, mask: &Mask<i32, 8>) }
            simd_avx2 => { crate::native_maskstore!(avx, $elem, maskstore, self, dst, mask) }
            simd_avx => { crate::native_maskstore!(avx, $elem, maskstore_fp, self, dst, mask) }
            _ => { crate::split_store!(self, dst, mask, simd_store_masked) }
        }
    )*};
}

define_masked_store_int32!(i32, u32);

/// AVX-512 masked moves take a packed mask of `$kty`.
macro_rules! define_masked_zmm {
    ($elem:ident, $slot:ident, $n:literal, $kty:ty) => {
        crate::tiered_impl! {
            impl SimdMaskedStore for Vector<$elem, $n> { unsafe fn simd_store_masked(self, dst: *mut $elem, mask: &Mask<$slot, $n>) }
            simd_avx512f => { crate::native_mask_store_bits!($elem, $kty, self, dst, mask) }
            _ => { crate::split_store!(self, dst, mask, simd_store_masked) }
        }
        crate::tiered_impl! {
            impl SimdMaskedLoad for Vector<$elem, $n> { unsafe fn simd_load_masked(src: *const $elem, mask: &Mask<$slot, $n>) -> Self }
            simd_avx512f => { crate::native_maskz_load_bits!($elem, $kty, src, mask) }
            _ => { crate::split_load!(SimdMaskedLoad::simd_load_masked, src, mask) }
        }
    };
}

define_masked_zmm!(f32, i32, 16, u16);
define_masked_zmm!(i32, i32, 16, u16);
define_masked_zmm!(u32, i32, 16, u16);
define_masked_zmm!(f64, i64, 8, u8);
define_masked_zmm!(i64, i64, 8, u8);

macro_rules! define_masked_split {
    ($($elem:ident / $slot:ident),*) => {$(
        impl SimdMaskedStore for Vector<$elem, 16> {
            #[inline(always)]
            unsafe fn simd_store_masked(self, dst: *mut $elem, mask: &Mask<$slot, 16>) {
                crate::split_store!(self, dst, mask, simd_store_masked)
            }
        }

        impl SimdMaskedLoad for Vector<$elem, 16> {
            #[inline(always)]
            unsafe fn simd_load_masked(src: *const $elem, mask: &Mask<$slot, 16>) -> Self {
                crate::split_load!(SimdMaskedLoad::simd_load_masked, src, mask)
            }
        }
    )*};
}

define_masked_split!(f64 / i64, i64 / i64);

// ============================================================================
// Masked load
// ============================================================================

crate::tiered_impl! {
    impl SimdMaskedLoad for Vector<f32, 4> { unsafe fn simd_load_masked(src: *const f32, mask: &Mask<i32, 4>) -> Self }
    simd_avx => { crate::native_maskload!(sse, f32, maskload, src, mask) }
    _ => { crate::lanewise_load!(src, mask) }
}

crate::tiered_impl! {
    impl SimdMaskedLoad for Vector<f32, 8> { unsafe fn simd_load_masked(src: *const f32, mask: &Mask<i32, 8>) -> Self }
    simd_avx => { crate::native_maskload!(avx, f32, maskload, src, mask) }
    _ => { crate::split_load!(SimdMaskedLoad::simd_load_masked, src, mask) }
}

crate::tiered_impl! {
    impl SimdMaskedLoad for Vector<f64, 4> { unsafe fn simd_load_masked(src: *const f64, mask: &Mask<i64, 4>) -> Self }
    simd_avx => { crate::native_maskload!(avx, f64, maskload, src, mask) }
    _ => { crate::lanewise_load!(src, mask) }
}

crate::tiered_impl! {
    impl SimdMaskedLoad for Vector<i64, 4> { unsafe fn simd_load_masked(src: *const i64, mask: &Mask<i64, 4>) -> Self }
    simd_avx2 => { crate::native_maskload!(avx, i64, maskload, src, mask) }
    simd_avx => { crate::native_maskload!(avx, i64, maskload_fp, src, mask) }
    _ => { crate::lanewise_load!(src, mask) }
}

macro_rules! define_masked_load_int32 {
    ($($elem:ident),*) => {$(
        crate::tiered_impl! {
            impl SimdMaskedLoad for Vector<$elem, 4> { unsafe fn simd_load_masked(src: *const $elem, mask: &Mask<i32, 4>) -> Self }
            simd_avx2 => { crate::native_maskload!(sse, $elem, maskload, src, mask) }
            simd_avx => { crate::native_maskload!(sse, $elem, maskload_fp, src, mask) }
            _ => { crate::lanewise_load!(src, mask) }
        }
        crate::tiered_impl! {
            impl SimdMaskedLoad for Vector<$elem, 8> { unsafe fn simd_load_masked(src: *const $elem, mask: &Mask<i32, 8>) -> Self }
            simd_avx2 => { crate::native_maskload!(avx, $elem, maskload, src, mask) }
            simd_avx => { crate::native_maskload!(avx, $elem, maskload_fp, src, mask) }
            _ => { crate::split_load!(SimdMaskedLoad::simd_load_masked, src, mask) }
        }
    )*};
}

define_masked_load_int32!(i32, u32);

// ============================================================================
// Slice boundary
// ============================================================================

#[inline]
fn check_len(expected: usize, actual: usize) -> SimdResult<()> {
    if actual < expected {
        log::trace!("slice rejected: {actual} lanes, {expected} required");
        return Err(SimdError::LengthMismatch { expected, actual });
    }
    Ok(())
}

/// Load the first `LANES` elements of `src`.
pub fn load_slice<V: SimdLoad>(src: &[V::Elem]) -> SimdResult<V> {
    check_len(V::LANES, src.len())?;
    // SAFETY: `src` holds at least `LANES` elements.
    Ok(unsafe { V::simd_load(src.as_ptr()) })
}

/// Load the set lanes from the first `LANES` elements of `src`; clear lanes
/// are zero.
pub fn load_slice_masked<V: SimdMaskedLoad>(src: &[V::Elem], mask: &V::Mask) -> SimdResult<V> {
    check_len(V::LANES, src.len())?;
    // SAFETY: every lane index is within `src`.
    Ok(unsafe { V::simd_load_masked(src.as_ptr(), mask) })
}

/// Store `v` into the first `LANES` elements of `dst`.
pub fn store_slice<V: SimdStore>(v: V, dst: &mut [V::Elem]) -> SimdResult<()> {
    check_len(V::LANES, dst.len())?;
    // SAFETY: `dst` is exclusively borrowed and holds `LANES` elements.
    unsafe { v.simd_store(dst.as_mut_ptr()) };
    Ok(())
}

/// Store the set lanes of `v` into `dst`. Clear lanes keep their contents.
pub fn store_slice_masked<V: SimdMaskedStore>(
    v: V,
    dst: &mut [V::Elem],
    mask: &V::Mask,
) -> SimdResult<()> {
    check_len(V::LANES, dst.len())?;
    // SAFETY: `dst` is exclusively borrowed, readable and writable for `LANES`
    // elements.
    unsafe { v.simd_store_masked(dst.as_mut_ptr(), mask) };
    Ok(())
}
