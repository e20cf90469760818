use crate::lanes::Lane;
use crate::mask::Mask;
use crate::ops::SimdSelect;
use crate::vector::Vector;

impl<T: Lane> SimdSelect for Vector<T, 1> {
    #[inline(always)]
    fn simd_select(self, mask: &Mask<T::MaskSlot, 1>, other: Self) -> Self {
        if mask.test(0) {
            self
        } else {
            other
        }
    }
}

// ---- f32 ----
crate::tiered_impl! {
    impl SimdSelect for Vector<f32, 4> { fn simd_select(self, mask: &Mask<i32, 4>, other: Self) -> Self }
    simd_sse41 => { crate::native_select!(sse, f32, blendv, mask, self, other) }
    simd_sse2 => { crate::native_select!(sse, f32, select_bits, mask, self, other) }
    simd_neon => { crate::native_select!(neon, f32, select_bits, mask, self, other) }
    _ => { crate::lanewise_select!(self, mask, other) }
}

crate::tiered_impl! {
    impl SimdSelect for Vector<f32, 8> { fn simd_select(self, mask: &Mask<i32, 8>, other: Self) -> Self }
    simd_avx => { crate::native_select!(avx, f32, blendv, mask, self, other) }
    _ => { crate::split_select!(self, mask, other, simd_select) }
}

// ---- f64 ----
crate::tiered_impl! {
    impl SimdSelect for Vector<f64, 4> { fn simd_select(self, mask: &Mask<i64, 4>, other: Self) -> Self }
    simd_avx => { crate::native_select!(avx, f64, blendv, mask, self, other) }
    _ => { crate::lanewise_select!(self, mask, other) }
}

// ---- i64 ----
crate::tiered_impl! {
    impl SimdSelect for Vector<i64, 4> { fn simd_select(self, mask: &Mask<i64, 4>, other: Self) -> Self }
    simd_avx2 => { crate::native_select!(avx, i64, blendv, mask, self, other) }
    simd_avx => { crate::native_select!(avx, i64, blendv_fp, mask, self, other) }
    _ => { crate::lanewise_select!(self, mask, other) }
}

macro_rules! define_select_int32 {
    ($elem:ident) => {
        crate::tiered_impl! {
            impl SimdSelect for Vector<$elem, 4> { fn simd_select(self, mask: &Mask<i32, 4>, other: Self) -> Self }
            simd_sse41 => { crate::native_select!(sse, $elem, blendv, mask, self, other) }
            simd_sse2 => { crate::native_select!(sse, $elem, select_bits, mask, self, other) }
            simd_neon => { crate::native_select!(neon, $elem, select_bits, mask, self, other) }
            _ => { crate::lanewise_select!(self, mask, other) }
        }
        crate::tiered_impl! {
            impl SimdSelect for Vector<$elem, 8> { fn simd_select(self, mask: &Mask<i32, 8>, other: Self) -> Self }
            simd_avx2 => { crate::native_select!(avx, $elem, blendv, mask, self, other) }
            simd_avx => { crate::native_select!(avx, $elem, blendv_fp, mask, self, other) }
            _ => { crate::split_select!(self, mask, other, simd_select) }
        }
    };
}

define_select_int32!(i32);
define_select_int32!(u32);

/// 16 lanes of 32-bit and 8 lanes of 64-bit elements: AVX-512 blend on a
/// packed mask.
macro_rules! define_select_zmm {
    ($elem:ident, $slot:ident, $n:literal, $kty:ty) => {
        crate::tiered_impl! {
            impl SimdSelect for Vector<$elem, $n> { fn simd_select(self, mask: &Mask<$slot, $n>, other: Self) -> Self }
            simd_avx512f => { crate::native_blend!($elem, $kty, mask, self, other) }
            _ => { crate::split_select!(self, mask, other, simd_select) }
        }
    };
}

define_select_zmm!(f32, i32, 16, u16);
define_select_zmm!(i32, i32, 16, u16);
define_select_zmm!(u32, i32, 16, u16);
define_select_zmm!(f64, i64, 8, u8);
define_select_zmm!(i64, i64, 8, u8);

macro_rules! define_select_split {
    ($($elem:ident / $slot:ident),*) => {
        $(
            impl SimdSelect for Vector<$elem, 16> {
                #[inline(always)]
                fn simd_select(self, mask: &Mask<$slot, 16>, other: Self) -> Self {
                    crate::split_select!(self, mask, other, simd_select)
                }
            }
        )*
    };
}

define_select_split!(f64 / i64, i64 / i64);
