//! Layer 2: tier cascade and the three body shapes an impl can take.
//!
//! `tiered_impl!` emits one impl per tier, each behind a cfg that holds only
//! when its own tier is present and every richer tier listed before it is
//! absent. Exactly one impl survives for any build, so the choice costs nothing
//! at runtime.
//!
//! Bodies are one of:
//! - `native_*!`: one intrinsic through `simd_primitive!`.
//! - `split_*!`: apply the same trait to the low and high halves, recompose.
//! - `lanewise_*!`: per-lane scalar loop (the width-4 terminal case).
//!
//! All bodies are written against `Self` and the trait method names, so they
//! expand inside an impl whose trait is in scope.

/// Emit one cfg-gated impl per tier, widest first, ending in `_ => fallback`.
///
/// ```ignore
/// tiered_impl! {
///     impl SimdMin for Vector<f32, 8> { fn simd_min(self, rhs: Self) -> Self }
///     simd_avx => { native_binary!(avx, f32, min, self, rhs) }
///     _ => { split_binary!(self, rhs, simd_min) }
/// }
/// ```
#[doc(hidden)]
#[macro_export]
macro_rules! tiered_impl {
    (
        impl $trait_:ident for $ty:ty { $($sig:tt)* }
        $($tiers:tt)*
    ) => {
        $crate::tiered_impl!(@tier $trait_, $ty, { $($sig)* }, [], $($tiers)*);
    };

    (@tier $trait_:ident, $ty:ty, { $($sig:tt)* }, [$($prev:ident),*], _ => $body:block) => {
        #[cfg(not(any($($prev),*)))]
        impl $trait_ for $ty {
            #[inline(always)]
            $($sig)* $body
        }
    };

    (@tier $trait_:ident, $ty:ty, { $($sig:tt)* }, [$($prev:ident),*], $pred:ident => $body:block $($rest:tt)*) => {
        #[cfg(all(not(any($($prev),*)), $pred))]
        impl $trait_ for $ty {
            #[inline(always)]
            $($sig)* $body
        }
        $crate::tiered_impl!(@tier $trait_, $ty, { $($sig)* }, [$($prev,)* $pred], $($rest)*);
    };
}

// ============================================================================
// Native bodies
// ============================================================================

#[doc(hidden)]
#[macro_export]
macro_rules! native_unary {
    ($isa:ident, $elem:ident, $op:ident, $a:expr) => {{
        let a = $a;
        let mut out = a;
        unsafe {
            let va = $crate::simd_primitive!($isa, $elem, load, a.as_ptr());
            let r = $crate::simd_primitive!($isa, $elem, $op, va);
            $crate::simd_primitive!($isa, $elem, store, out.as_mut_ptr(), r);
        }
        out
    }};
}

#[doc(hidden)]
#[macro_export]
macro_rules! native_binary {
    ($isa:ident, $elem:ident, $op:ident, $a:expr, $b:expr) => {{
        let (a, b) = ($a, $b);
        let mut out = a;
        unsafe {
            let va = $crate::simd_primitive!($isa, $elem, load, a.as_ptr());
            let vb = $crate::simd_primitive!($isa, $elem, load, b.as_ptr());
            let r = $crate::simd_primitive!($isa, $elem, $op, va, vb);
            $crate::simd_primitive!($isa, $elem, store, out.as_mut_ptr(), r);
        }
        out
    }};
}

/// `a` where the mask slot is set, `b` elsewhere, with a register mask.
#[doc(hidden)]
#[macro_export]
macro_rules! native_select {
    ($isa:ident, $elem:ident, $op:ident, $mask:expr, $a:expr, $b:expr) => {{
        let (m, a, b) = ($mask, $a, $b);
        let mut out = a;
        unsafe {
            let k = $crate::simd_primitive!($isa, mask, load, m.as_ptr());
            let va = $crate::simd_primitive!($isa, $elem, load, a.as_ptr());
            let vb = $crate::simd_primitive!($isa, $elem, load, b.as_ptr());
            let r = $crate::simd_primitive!($isa, $elem, $op, k, va, vb);
            $crate::simd_primitive!($isa, $elem, store, out.as_mut_ptr(), r);
        }
        out
    }};
}

/// AVX-512 select: the mask travels as a packed `__mmask`.
#[doc(hidden)]
#[macro_export]
macro_rules! native_blend {
    ($elem:ident, $kty:ty, $mask:expr, $a:expr, $b:expr) => {{
        let (m, a, b) = ($mask, $a, $b);
        let k = m.to_bitmask() as $kty;
        let mut out = a;
        unsafe {
            let va = $crate::simd_primitive!(avx512, $elem, load, a.as_ptr());
            let vb = $crate::simd_primitive!(avx512, $elem, load, b.as_ptr());
            let r = $crate::simd_primitive!(avx512, $elem, blend, k, va, vb);
            $crate::simd_primitive!(avx512, $elem, store, out.as_mut_ptr(), r);
        }
        out
    }};
}

#[doc(hidden)]
#[macro_export]
macro_rules! native_load {
    ($isa:ident, $elem:ident, $src:expr) => {{
        let src = $src;
        let mut out = Self::default();
        let r = $crate::simd_primitive!($isa, $elem, load, src);
        $crate::simd_primitive!($isa, $elem, store, out.as_mut_ptr(), r);
        out
    }};
}

#[doc(hidden)]
#[macro_export]
macro_rules! native_store {
    ($isa:ident, $elem:ident, $v:expr, $dst:expr) => {{
        let (v, dst) = ($v, $dst);
        let r = $crate::simd_primitive!($isa, $elem, load, v.as_ptr());
        $crate::simd_primitive!($isa, $elem, store, dst, r);
    }};
}

/// Masked store through a native masked-move instruction (`maskstore` or the
/// float-path `maskstore_fp`).
#[doc(hidden)]
#[macro_export]
macro_rules! native_maskstore {
    ($isa:ident, $elem:ident, $op:ident, $v:expr, $dst:expr, $mask:expr) => {{
        let (v, dst, m) = ($v, $dst, $mask);
        let k = $crate::simd_primitive!($isa, mask, load, m.as_ptr());
        let r = $crate::simd_primitive!($isa, $elem, load, v.as_ptr());
        $crate::simd_primitive!($isa, $elem, $op, dst, k, r);
    }};
}

#[doc(hidden)]
#[macro_export]
macro_rules! native_maskload {
    ($isa:ident, $elem:ident, $op:ident, $src:expr, $mask:expr) => {{
        let (src, m) = ($src, $mask);
        let mut out = Self::default();
        let k = $crate::simd_primitive!($isa, mask, load, m.as_ptr());
        let r = $crate::simd_primitive!($isa, $elem, $op, src, k);
        $crate::simd_primitive!($isa, $elem, store, out.as_mut_ptr(), r);
        out
    }};
}

/// AVX-512 masked store with a packed mask.
#[doc(hidden)]
#[macro_export]
macro_rules! native_mask_store_bits {
    ($elem:ident, $kty:ty, $v:expr, $dst:expr, $mask:expr) => {{
        let (v, dst, m) = ($v, $dst, $mask);
        let k = m.to_bitmask() as $kty;
        let r = $crate::simd_primitive!(avx512, $elem, load, v.as_ptr());
        $crate::simd_primitive!(avx512, $elem, mask_store, dst, k, r);
    }};
}

#[doc(hidden)]
#[macro_export]
macro_rules! native_maskz_load_bits {
    ($elem:ident, $kty:ty, $src:expr, $mask:expr) => {{
        let (src, m) = ($src, $mask);
        let k = m.to_bitmask() as $kty;
        let mut out = Self::default();
        let r = $crate::simd_primitive!(avx512, $elem, maskz_load, src, k);
        $crate::simd_primitive!(avx512, $elem, store, out.as_mut_ptr(), r);
        out
    }};
}

/// Masked store without a masked-move instruction: read the destination,
/// select the new lanes into it, write the whole register back. Lanes whose
/// mask is clear are rewritten with the value they already held.
#[doc(hidden)]
#[macro_export]
macro_rules! load_select_store {
    ($isa:ident, $elem:ident, $sel:ident, $v:expr, $dst:expr, $mask:expr) => {{
        let (v, dst, m) = ($v, $dst, $mask);
        let k = $crate::simd_primitive!($isa, mask, load, m.as_ptr());
        let new = $crate::simd_primitive!($isa, $elem, load, v.as_ptr());
        let old = $crate::simd_primitive!($isa, $elem, load, dst.cast_const());
        let r = $crate::simd_primitive!($isa, $elem, $sel, k, new, old);
        $crate::simd_primitive!($isa, $elem, store, dst, r);
    }};
}

// ============================================================================
// Decomposition bodies
// ============================================================================

#[doc(hidden)]
#[macro_export]
macro_rules! split_unary {
    ($a:expr, $method:ident) => {{
        let a = $a;
        Self::from_halves(a.lo().$method(), a.hi().$method())
    }};
}

#[doc(hidden)]
#[macro_export]
macro_rules! split_binary {
    ($a:expr, $b:expr, $method:ident) => {{
        let (a, b) = ($a, $b);
        Self::from_halves(a.lo().$method(b.lo()), a.hi().$method(b.hi()))
    }};
}

#[doc(hidden)]
#[macro_export]
macro_rules! split_select {
    ($a:expr, $mask:expr, $b:expr, $method:ident) => {{
        let (a, m, b) = ($a, $mask, $b);
        Self::from_halves(
            a.lo().$method(&m.lo(), b.lo()),
            a.hi().$method(&m.hi(), b.hi()),
        )
    }};
}

#[doc(hidden)]
#[macro_export]
macro_rules! split_load {
    ($trait_:ident :: $method:ident, $src:expr) => {{
        let src = $src;
        Self::from_halves(
            $trait_::$method(src),
            $trait_::$method(src.add(Self::LANES / 2)),
        )
    }};
    ($trait_:ident :: $method:ident, $src:expr, $mask:expr) => {{
        let (src, m) = ($src, $mask);
        Self::from_halves(
            $trait_::$method(src, &m.lo()),
            $trait_::$method(src.add(Self::LANES / 2), &m.hi()),
        )
    }};
}

#[doc(hidden)]
#[macro_export]
macro_rules! split_store {
    ($v:expr, $dst:expr, $method:ident) => {{
        let (v, dst) = ($v, $dst);
        v.lo().$method(dst);
        v.hi().$method(dst.add(Self::LANES / 2));
    }};
    ($v:expr, $dst:expr, $mask:expr, $method:ident) => {{
        let (v, dst, m) = ($v, $dst, $mask);
        v.lo().$method(dst, &m.lo());
        v.hi().$method(dst.add(Self::LANES / 2), &m.hi());
    }};
}

// ============================================================================
// Per-lane bodies
// ============================================================================

#[doc(hidden)]
#[macro_export]
macro_rules! lanewise_unary {
    ($a:expr, $lane_op:ident) => {{
        let a = $a;
        let mut out = a;
        for i in 0..Self::LANES {
            out[i] = a[i].$lane_op();
        }
        out
    }};
}

#[doc(hidden)]
#[macro_export]
macro_rules! lanewise_binary {
    ($a:expr, $b:expr, $lane_op:ident) => {{
        let (a, b) = ($a, $b);
        let mut out = a;
        for i in 0..Self::LANES {
            out[i] = a[i].$lane_op(b[i]);
        }
        out
    }};
}

#[doc(hidden)]
#[macro_export]
macro_rules! lanewise_select {
    ($a:expr, $mask:expr, $b:expr) => {{
        let (a, m, b) = ($a, $mask, $b);
        let mut out = b;
        for i in 0..Self::LANES {
            if m.test(i) {
                out[i] = a[i];
            }
        }
        out
    }};
}

#[doc(hidden)]
#[macro_export]
macro_rules! lanewise_load {
    ($src:expr) => {{
        let src = $src;
        let mut out = Self::default();
        for i in 0..Self::LANES {
            out[i] = src.add(i).read_unaligned();
        }
        out
    }};
    ($src:expr, $mask:expr) => {{
        let (src, m) = ($src, $mask);
        let mut out = Self::default();
        for i in 0..Self::LANES {
            if m.test(i) {
                out[i] = src.add(i).read_unaligned();
            }
        }
        out
    }};
}

#[doc(hidden)]
#[macro_export]
macro_rules! lanewise_store {
    ($v:expr, $dst:expr) => {{
        let (v, dst) = ($v, $dst);
        for i in 0..Self::LANES {
            dst.add(i).write_unaligned(v[i]);
        }
    }};
    ($v:expr, $dst:expr, $mask:expr) => {{
        let (v, dst, m) = ($v, $dst, $mask);
        for i in 0..Self::LANES {
            if m.test(i) {
                dst.add(i).write_unaligned(v[i]);
            }
        }
    }};
}
