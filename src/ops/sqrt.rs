use crate::lanes::Float;
use crate::ops::SimdSqrt;
use crate::vector::Vector;

impl<T: Float> SimdSqrt for Vector<T, 1> {
    #[inline(always)]
    fn simd_sqrt(self) -> Self {
        Self::splat(self[0].lane_sqrt())
    }
}

crate::tiered_impl! {
    impl SimdSqrt for Vector<f32, 4> { fn simd_sqrt(self) -> Self }
    simd_sse2 => { crate::native_unary!(sse, f32, sqrt, self) }
    simd_neon => { crate::native_unary!(neon, f32, sqrt, self) }
    _ => { crate::lanewise_unary!(self, lane_sqrt) }
}

crate::tiered_impl! {
    impl SimdSqrt for Vector<f32, 8> { fn simd_sqrt(self) -> Self }
    simd_avx => { crate::native_unary!(avx, f32, sqrt, self) }
    _ => { crate::split_unary!(self, simd_sqrt) }
}

crate::tiered_impl! {
    impl SimdSqrt for Vector<f32, 16> { fn simd_sqrt(self) -> Self }
    simd_avx512f => { crate::native_unary!(avx512, f32, sqrt, self) }
    _ => { crate::split_unary!(self, simd_sqrt) }
}

crate::tiered_impl! {
    impl SimdSqrt for Vector<f64, 4> { fn simd_sqrt(self) -> Self }
    simd_avx => { crate::native_unary!(avx, f64, sqrt, self) }
    _ => { crate::lanewise_unary!(self, lane_sqrt) }
}

crate::tiered_impl! {
    impl SimdSqrt for Vector<f64, 8> { fn simd_sqrt(self) -> Self }
    simd_avx512f => { crate::native_unary!(avx512, f64, sqrt, self) }
    _ => { crate::split_unary!(self, simd_sqrt) }
}

impl SimdSqrt for Vector<f64, 16> {
    #[inline(always)]
    fn simd_sqrt(self) -> Self {
        crate::split_unary!(self, simd_sqrt)
    }
}
