use crate::lanes::Lane;
use crate::ops::{SimdMax, SimdMin};
use crate::vector::Vector;

/// Rows for one of min/max. `$op` names the `simd_primitive!` op and
/// `$lane_op` the scalar fallback on [`Lane`].
macro_rules! define_min_max {
    ($trait_:ident, $method:ident, $op:ident, $lane_op:ident) => {
        impl<T: Lane> $trait_ for Vector<T, 1> {
            #[inline(always)]
            fn $method(self, rhs: Self) -> Self {
                Self::splat(self[0].$lane_op(rhs[0]))
            }
        }

        // ---- f32 ----
        crate::tiered_impl! {
            impl $trait_ for Vector<f32, 4> { fn $method(self, rhs: Self) -> Self }
            simd_sse2 => { crate::native_binary!(sse, f32, $op, self, rhs) }
            simd_neon => { crate::native_binary!(neon, f32, $op, self, rhs) }
            _ => { crate::lanewise_binary!(self, rhs, $lane_op) }
        }
        crate::tiered_impl! {
            impl $trait_ for Vector<f32, 8> { fn $method(self, rhs: Self) -> Self }
            simd_avx => { crate::native_binary!(avx, f32, $op, self, rhs) }
            _ => { crate::split_binary!(self, rhs, $method) }
        }
        crate::tiered_impl! {
            impl $trait_ for Vector<f32, 16> { fn $method(self, rhs: Self) -> Self }
            simd_avx512f => { crate::native_binary!(avx512, f32, $op, self, rhs) }
            _ => { crate::split_binary!(self, rhs, $method) }
        }

        // ---- f64: 4 lanes already fill a 256-bit register ----
        crate::tiered_impl! {
            impl $trait_ for Vector<f64, 4> { fn $method(self, rhs: Self) -> Self }
            simd_avx => { crate::native_binary!(avx, f64, $op, self, rhs) }
            _ => { crate::lanewise_binary!(self, rhs, $lane_op) }
        }
        crate::tiered_impl! {
            impl $trait_ for Vector<f64, 8> { fn $method(self, rhs: Self) -> Self }
            simd_avx512f => { crate::native_binary!(avx512, f64, $op, self, rhs) }
            _ => { crate::split_binary!(self, rhs, $method) }
        }
        impl $trait_ for Vector<f64, 16> {
            #[inline(always)]
            fn $method(self, rhs: Self) -> Self {
                crate::split_binary!(self, rhs, $method)
            }
        }

        // ---- i32 / u32 ----
        define_min_max!(@int32 $trait_, $method, $op, $lane_op, i32);
        define_min_max!(@int32 $trait_, $method, $op, $lane_op, u32);

        // ---- i64 ----
        crate::tiered_impl! {
            impl $trait_ for Vector<i64, 4> { fn $method(self, rhs: Self) -> Self }
            simd_avx512vl => { crate::native_binary!(avx, i64, $op, self, rhs) }
            _ => { crate::lanewise_binary!(self, rhs, $lane_op) }
        }
        crate::tiered_impl! {
            impl $trait_ for Vector<i64, 8> { fn $method(self, rhs: Self) -> Self }
            simd_avx512f => { crate::native_binary!(avx512, i64, $op, self, rhs) }
            _ => { crate::split_binary!(self, rhs, $method) }
        }
        impl $trait_ for Vector<i64, 16> {
            #[inline(always)]
            fn $method(self, rhs: Self) -> Self {
                crate::split_binary!(self, rhs, $method)
            }
        }
    };

    (@int32 $trait_:ident, $method:ident, $op:ident, $lane_op:ident, $elem:ident) => {
        crate::tiered_impl! {
            impl $trait_ for Vector<$elem, 4> { fn $method(self, rhs: Self) -> Self }
            simd_sse41 => { crate::native_binary!(sse, $elem, $op, self, rhs) }
            simd_neon => { crate::native_binary!(neon, $elem, $op, self, rhs) }
            _ => { crate::lanewise_binary!(self, rhs, $lane_op) }
        }
        // AVX without AVX2 has no 256-bit integer min; the halves run on SSE4.1.
        crate::tiered_impl! {
            impl $trait_ for Vector<$elem, 8> { fn $method(self, rhs: Self) -> Self }
            simd_avx2 => { crate::native_binary!(avx, $elem, $op, self, rhs) }
            _ => { crate::split_binary!(self, rhs, $method) }
        }
        crate::tiered_impl! {
            impl $trait_ for Vector<$elem, 16> { fn $method(self, rhs: Self) -> Self }
            simd_avx512f => { crate::native_binary!(avx512, $elem, $op, self, rhs) }
            _ => { crate::split_binary!(self, rhs, $method) }
        }
    };
}

define_min_max!(SimdMin, simd_min, min, lane_min);
define_min_max!(SimdMax, simd_max, max, lane_max);

#[cfg(test)]
mod tests {
    use crate::ops::{max, min};
    use crate::vector::*;

    #[test]
    fn test_min_f32_all_widths() {
        let a = VFloat16::from_array(std::array::from_fn(|i| i as f32 - 8.0));
        let b = VFloat16::from_array(std::array::from_fn(|i| 4.0 - i as f32));
        let r = min(a, b);
        for i in 0..16 {
            assert_eq!(r[i], a[i].min(b[i]));
        }
        assert_eq!(min(a.lo(), b.lo()), r.lo());
        assert_eq!(min(a.lo().hi(), b.lo().hi()), r.lo().hi());
        assert_eq!(min(VFloat::<1>::splat(2.0), VFloat::<1>::splat(-1.0))[0], -1.0);
    }

    #[test]
    fn test_max_i32_negative_values() {
        let a = VInt8::from_array([-1, 2, -3, 4, i32::MIN, i32::MAX, 0, 7]);
        let b = VInt8::splat(0);
        assert_eq!(max(a, b).to_array(), [0, 2, 0, 4, 0, i32::MAX, 0, 7]);
        assert_eq!(min(a, b).to_array(), [-1, 0, -3, 0, i32::MIN, 0, 0, 0]);
    }

    #[test]
    fn test_u32_is_unsigned_order() {
        // 0x8000_0000 is larger than 1 when compared unsigned.
        let a = VUInt4::from_array([0x8000_0000, 1, u32::MAX, 5]);
        let b = VUInt4::from_array([1, 0x8000_0000, 0, 5]);
        assert_eq!(max(a, b).to_array(), [0x8000_0000, 0x8000_0000, u32::MAX, 5]);
        assert_eq!(min(a, b).to_array(), [1, 1, 0, 5]);
    }

    #[test]
    fn test_i64_and_f64_widths() {
        let a = VLLong16::from_array(std::array::from_fn(|i| (i as i64 - 8) * 1_000_000_000_000));
        let b = VLLong16::splat(0);
        let r = max(a, b);
        for i in 0..16 {
            assert_eq!(r[i], a[i].max(0));
        }

        let x = VDouble8::from_array([1.5, -2.5, 3.0, 0.0, -0.5, 8.0, 1e300, -1e300]);
        let y = VDouble8::splat(0.25);
        let lo = min(x, y);
        for i in 0..8 {
            assert_eq!(lo[i], x[i].min(0.25));
        }
        assert_eq!(min(VDouble4::splat(1.0), VDouble4::splat(2.0)), VDouble4::splat(1.0));
    }
}
