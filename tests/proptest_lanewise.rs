//! Property-based tests for the lanewise operations.
//!
//! Uses proptest to verify invariants that must hold for all inputs, whatever
//! tier the build selected:
//! - min/max/sqrt agree lane for lane with the scalar reference
//! - an N-wide result equals the two N/2-wide results recomposed
//! - masked stores write exactly the set lanes
//! - store then load reproduces the vector bit for bit
//! - every (element, width) pair runs min/max/store/load/masked moves through
//!   whatever path the build selected for it

use proptest::prelude::*;

use varying_scalar_ops::{
    scalar_masked_load, scalar_masked_store, scalar_max, scalar_min, scalar_select,
    scalar_sqrt_f32, scalar_sqrt_f64,
};
use varying_simd::{
    load_slice, load_slice_masked, max, min, select, sqrt, store_slice, store_slice_masked, Lane,
    LaneCount, Mask, SimdLoad, SimdMaskedLoad, SimdMaskedStore, SimdMax, SimdMin, SimdStore,
    SimdVector, SupportedLaneCount,
    VBoolD16, VBoolD4, VBoolD8, VBoolF16, VBoolF4, VBoolF8, VDouble16, VDouble4, VDouble8,
    VFloat16, VFloat4, VFloat8, VInt16, VInt8, VLLong16, VLLong4, VUInt16, VUInt4, Vector,
};

fn normal_f32() -> impl Strategy<Value = f32> {
    prop::num::f32::NORMAL | prop::num::f32::POSITIVE | prop::num::f32::NEGATIVE
}

fn bits_of(mask: u16, n: usize) -> Vec<bool> {
    (0..n).map(|i| mask & (1 << i) != 0).collect()
}

// ═══════════════════════════════════════════════════════════════════════
// 1. min / max against the scalar reference
// ═══════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn prop_min_max_f32_x16(
        a in prop::array::uniform16(prop::num::f32::NORMAL),
        b in prop::array::uniform16(prop::num::f32::NORMAL),
    ) {
        let (va, vb) = (VFloat16::from_array(a), VFloat16::from_array(b));
        let mut lo = [0.0f32; 16];
        let mut hi = [0.0f32; 16];
        scalar_min(&a, &b, &mut lo);
        scalar_max(&a, &b, &mut hi);
        prop_assert_eq!(min(va, vb).to_array(), lo);
        prop_assert_eq!(max(va, vb).to_array(), hi);
    }

    #[test]
    fn prop_min_max_f64_x8(
        a in prop::array::uniform8(prop::num::f64::NORMAL),
        b in prop::array::uniform8(prop::num::f64::NORMAL),
    ) {
        let (va, vb) = (VDouble8::from_array(a), VDouble8::from_array(b));
        let mut lo = [0.0f64; 8];
        let mut hi = [0.0f64; 8];
        scalar_min(&a, &b, &mut lo);
        scalar_max(&a, &b, &mut hi);
        prop_assert_eq!(min(va, vb).to_array(), lo);
        prop_assert_eq!(max(va, vb).to_array(), hi);
    }

    #[test]
    fn prop_min_max_ints(
        a in prop::array::uniform16(any::<i32>()),
        b in prop::array::uniform16(any::<i32>()),
        c in prop::array::uniform4(any::<u32>()),
        d in prop::array::uniform4(any::<u32>()),
        e in prop::array::uniform4(any::<i64>()),
        f in prop::array::uniform4(any::<i64>()),
    ) {
        let mut out32 = [0i32; 16];
        scalar_min(&a, &b, &mut out32);
        prop_assert_eq!(min(VInt16::from_array(a), VInt16::from_array(b)).to_array(), out32);
        scalar_max(&a, &b, &mut out32);
        prop_assert_eq!(max(VInt16::from_array(a), VInt16::from_array(b)).to_array(), out32);

        let mut outu = [0u32; 4];
        scalar_min(&c, &d, &mut outu);
        prop_assert_eq!(min(VUInt4::from_array(c), VUInt4::from_array(d)).to_array(), outu);
        scalar_max(&c, &d, &mut outu);
        prop_assert_eq!(max(VUInt4::from_array(c), VUInt4::from_array(d)).to_array(), outu);

        let mut out64 = [0i64; 4];
        scalar_min(&e, &f, &mut out64);
        prop_assert_eq!(min(VLLong4::from_array(e), VLLong4::from_array(f)).to_array(), out64);
        scalar_max(&e, &f, &mut out64);
        prop_assert_eq!(max(VLLong4::from_array(e), VLLong4::from_array(f)).to_array(), out64);
    }
}

// ═══════════════════════════════════════════════════════════════════════
// 2. sqrt: bit-exact for non-negative lanes, NaN for negative ones
// ═══════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn prop_sqrt_f32_x8(a in prop::array::uniform8(normal_f32())) {
        let r = sqrt(VFloat8::from_array(a));
        let mut expect = [0.0f32; 8];
        scalar_sqrt_f32(&a, &mut expect);
        for i in 0..8 {
            if a[i] < 0.0 {
                prop_assert!(r[i].is_nan(), "lane {} of sqrt({}) = {}", i, a[i], r[i]);
            } else {
                prop_assert_eq!(r[i].to_bits(), expect[i].to_bits());
            }
        }
    }

    #[test]
    fn prop_sqrt_f64_x16(a in prop::array::uniform16(0.0f64..1e300)) {
        let r = sqrt(VDouble16::from_array(a));
        let mut expect = [0.0f64; 16];
        scalar_sqrt_f64(&a, &mut expect);
        prop_assert_eq!(r.to_array(), expect);
    }
}

// ═══════════════════════════════════════════════════════════════════════
// 3. Decomposition equivalence: f(v) == from_halves(f(lo), f(hi))
// ═══════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn prop_split_matches_whole_f32(
        a in prop::array::uniform16(prop::num::f32::NORMAL),
        b in prop::array::uniform16(prop::num::f32::NORMAL),
        m in any::<u16>(),
    ) {
        let (va, vb) = (VFloat16::from_array(a), VFloat16::from_array(b));
        let whole = min(va, vb);
        let split = VFloat16::from_halves(min(va.lo(), vb.lo()), min(va.hi(), vb.hi()));
        prop_assert_eq!(whole, split);

        let q = VFloat8::from_halves(max(va.lo().lo(), vb.lo().lo()), max(va.lo().hi(), vb.lo().hi()));
        prop_assert_eq!(max(va.lo(), vb.lo()), q);

        let abs = VFloat16::from_array(a.map(f32::abs));
        let whole = sqrt(abs);
        prop_assert_eq!(whole, VFloat16::from_halves(sqrt(abs.lo()), sqrt(abs.hi())));

        let mask = VBoolF16::from_bitmask(m);
        let whole = select(&mask, va, vb);
        let split = VFloat16::from_halves(
            select(&mask.lo(), va.lo(), vb.lo()),
            select(&mask.hi(), va.hi(), vb.hi()),
        );
        prop_assert_eq!(whole, split);
    }

    #[test]
    fn prop_split_matches_whole_i64(
        a in prop::array::uniform16(any::<i64>()),
        b in prop::array::uniform16(any::<i64>()),
    ) {
        let (va, vb) = (VLLong16::from_array(a), VLLong16::from_array(b));
        prop_assert_eq!(
            max(va, vb),
            VLLong16::from_halves(max(va.lo(), vb.lo()), max(va.hi(), vb.hi()))
        );
    }
}

// ═══════════════════════════════════════════════════════════════════════
// 4. Masked moves write and read exactly the set lanes
// ═══════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn prop_masked_store_f32(
        src in prop::array::uniform16(any::<f32>()),
        dst in prop::array::uniform16(any::<u32>()),
        m in any::<u16>(),
    ) {
        // Compare bits so NaN payloads in either buffer must survive untouched.
        let dst = dst.map(f32::from_bits);
        let mut expect = dst;
        scalar_masked_store(&src, &bits_of(m, 16), &mut expect);

        let mut got16 = dst;
        store_slice_masked(VFloat16::from_array(src), &mut got16, &VBoolF16::from_bitmask(m)).unwrap();
        prop_assert_eq!(got16.map(f32::to_bits), expect.map(f32::to_bits));

        let mut got8 = dst;
        let m8 = m & 0xff;
        store_slice_masked(VFloat8::from_slice(&src).unwrap(), &mut got8, &VBoolF8::from_bitmask(m8)).unwrap();
        let mut expect8 = dst;
        scalar_masked_store(&src[..8], &bits_of(m8, 8), &mut expect8[..8]);
        prop_assert_eq!(got8.map(f32::to_bits), expect8.map(f32::to_bits));

        let mut got4 = dst;
        let m4 = m & 0xf;
        store_slice_masked(VFloat4::from_slice(&src).unwrap(), &mut got4, &VBoolF4::from_bitmask(m4)).unwrap();
        let mut expect4 = dst;
        scalar_masked_store(&src[..4], &bits_of(m4, 4), &mut expect4[..4]);
        prop_assert_eq!(got4.map(f32::to_bits), expect4.map(f32::to_bits));
    }

    #[test]
    fn prop_masked_store_ints(
        src in prop::array::uniform16(any::<i32>()),
        src64 in prop::array::uniform16(any::<i64>()),
        m in any::<u16>(),
    ) {
        let mut got = [0x5a5a_5a5ai32; 16];
        let mut expect = got;
        store_slice_masked(VInt16::from_array(src), &mut got, &VBoolF16::from_bitmask(m)).unwrap();
        scalar_masked_store(&src, &bits_of(m, 16), &mut expect);
        prop_assert_eq!(got, expect);

        let mut got = [-3i64; 16];
        let mut expect = got;
        store_slice_masked(VLLong16::from_array(src64), &mut got, &VBoolD16::from_bitmask(m)).unwrap();
        scalar_masked_store(&src64, &bits_of(m, 16), &mut expect);
        prop_assert_eq!(got, expect);

        let mut got = [7u32; 4];
        let mut expect = got;
        let srcu = [src[0] as u32, src[1] as u32, src[2] as u32, src[3] as u32];
        store_slice_masked(VUInt4::from_array(srcu), &mut got, &Mask::from_bitmask(m)).unwrap();
        scalar_masked_store(&srcu, &bits_of(m, 4), &mut expect);
        prop_assert_eq!(got, expect);
    }

    #[test]
    fn prop_masked_load_f64(src in prop::array::uniform8(any::<f64>()), m in any::<u8>()) {
        let m = m as u16;
        let v: VDouble8 = load_slice_masked(&src, &VBoolD8::from_bitmask(m)).unwrap();
        let mut expect = [0.0f64; 8];
        scalar_masked_load(&src, &bits_of(m, 8), &mut expect);
        prop_assert_eq!(v.to_array().map(f64::to_bits), expect.map(f64::to_bits));

        let v4: VDouble4 = load_slice_masked(&src, &VBoolD4::from_bitmask(m)).unwrap();
        for i in 0..4 {
            let want = if m & (1 << i) != 0 { src[i].to_bits() } else { 0 };
            prop_assert_eq!(v4[i].to_bits(), want);
        }
    }

    #[test]
    fn prop_select_matches_reference(
        a in prop::array::uniform8(any::<i32>()),
        b in prop::array::uniform8(any::<i32>()),
        m in any::<u8>(),
    ) {
        let bools = bits_of(m as u16, 8);
        let mut expect = [0i32; 8];
        scalar_select(&bools, &a, &b, &mut expect);
        let mask = VBoolF8::from_bitmask(m as u16);
        prop_assert_eq!(select(&mask, VInt8::from_array(a), VInt8::from_array(b)).to_array(), expect);
    }
}

// ═══════════════════════════════════════════════════════════════════════
// 5. Store then load is the identity, at any offset
// ═══════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn prop_store_load_identity(
        a in prop::array::uniform16(any::<u32>()),
        offset in 0usize..8,
    ) {
        let v = VUInt16::from_array(a);
        let mut buf = vec![0u32; 16 + offset];
        store_slice(v, &mut buf[offset..]).unwrap();
        let back: VUInt16 = load_slice(&buf[offset..]).unwrap();
        prop_assert_eq!(back, v);

        let w = Vector::<f64, 1>::splat(f64::from_bits(a[0] as u64 | 0x7ff0_0000_0000_0001));
        let mut one = [0.0f64];
        store_slice(w, &mut one).unwrap();
        prop_assert_eq!(one[0].to_bits(), w[0].to_bits());
    }
}

// ═══════════════════════════════════════════════════════════════════════
// 6. Every (element, width) pair against the scalar reference
// ═══════════════════════════════════════════════════════════════════════

fn check_lanes<T, const N: usize>(a: &[T], b: &[T], m: u16) -> Result<(), TestCaseError>
where
    T: Lane,
    LaneCount<N>: SupportedLaneCount,
    Vector<T, N>: SimdVector<Elem = T, Mask = Mask<T::MaskSlot, N>>
        + SimdMin
        + SimdMax
        + SimdLoad
        + SimdStore
        + SimdMaskedStore
        + SimdMaskedLoad,
{
    let va = Vector::<T, N>::from_slice(a).unwrap();
    let vb = Vector::<T, N>::from_slice(b).unwrap();

    let mut expect = vec![T::ZERO; N];
    scalar_min(a, b, &mut expect);
    prop_assert_eq!(&min(va, vb).to_array()[..], &expect[..]);
    scalar_max(a, b, &mut expect);
    prop_assert_eq!(&max(va, vb).to_array()[..], &expect[..]);

    // Offset by one element so no width gets an aligned buffer by accident.
    let mut buf = vec![T::ZERO; N + 2];
    store_slice(va, &mut buf[1..]).unwrap();
    prop_assert_eq!(buf[0], T::ZERO);
    prop_assert_eq!(buf[N + 1], T::ZERO);
    let back: Vector<T, N> = load_slice(&buf[1..]).unwrap();
    prop_assert_eq!(back, va);

    let bools = bits_of(m, N);
    let mask = Mask::<T::MaskSlot, N>::from_bitmask(m);

    let mut got = b.to_vec();
    store_slice_masked(va, &mut got, &mask).unwrap();
    let mut expect = b.to_vec();
    scalar_masked_store(a, &bools, &mut expect);
    prop_assert_eq!(got, expect);

    let loaded: Vector<T, N> = load_slice_masked(a, &mask).unwrap();
    let mut expect = vec![T::ZERO; N];
    scalar_masked_load(a, &bools, &mut expect);
    prop_assert_eq!(&loaded.to_array()[..], &expect[..]);
    Ok(())
}

/// u32 inputs biased towards the high bit, where signed and unsigned order
/// disagree.
fn wide_u32() -> impl Strategy<Value = u32> {
    prop_oneof![any::<u32>(), 0x8000_0000u32..=u32::MAX]
}

macro_rules! lanes_cases {
    ($($name:ident: $t:ty, $n:literal, $strat:expr;)*) => {
        proptest! {
            $(
                #[test]
                fn $name(
                    a in prop::collection::vec($strat, $n),
                    b in prop::collection::vec($strat, $n),
                    m in any::<u16>(),
                ) {
                    check_lanes::<$t, $n>(&a, &b, m)?;
                }
            )*
        }
    };
}

lanes_cases! {
    prop_lanes_f32_x1: f32, 1, prop::num::f32::NORMAL;
    prop_lanes_f32_x4: f32, 4, prop::num::f32::NORMAL;
    prop_lanes_f32_x8: f32, 8, prop::num::f32::NORMAL;
    prop_lanes_f32_x16: f32, 16, prop::num::f32::NORMAL;
    prop_lanes_f64_x1: f64, 1, prop::num::f64::NORMAL;
    prop_lanes_f64_x4: f64, 4, prop::num::f64::NORMAL;
    prop_lanes_f64_x8: f64, 8, prop::num::f64::NORMAL;
    prop_lanes_f64_x16: f64, 16, prop::num::f64::NORMAL;
    prop_lanes_i32_x1: i32, 1, any::<i32>();
    prop_lanes_i32_x4: i32, 4, any::<i32>();
    prop_lanes_i32_x8: i32, 8, any::<i32>();
    prop_lanes_i32_x16: i32, 16, any::<i32>();
    prop_lanes_u32_x1: u32, 1, wide_u32();
    prop_lanes_u32_x4: u32, 4, wide_u32();
    prop_lanes_u32_x8: u32, 8, wide_u32();
    prop_lanes_u32_x16: u32, 16, wide_u32();
    prop_lanes_i64_x1: i64, 1, any::<i64>();
    prop_lanes_i64_x4: i64, 4, any::<i64>();
    prop_lanes_i64_x8: i64, 8, any::<i64>();
    prop_lanes_i64_x16: i64, 16, any::<i64>();
}
