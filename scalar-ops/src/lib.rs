//! Scalar reference implementations of the lanewise operators.
//!
//! These serve as the golden reference for correctness testing of
//! `varying-simd`: every SIMD path, native or decomposed, must agree with the
//! loop here lane for lane.
//!
//! Functions are `#[inline(never)]` so the optimizer cannot fold them into the
//! vector code they are checked against.
//!
//! Float min/max use compare-and-select, the same rule as x86 `MINPS` and
//! `MAXPS`: when the comparison is false (either operand NaN, or the two are
//! equal zeros) the second operand wins.

/// Min: `out[i] = a[i] < b[i] ? a[i] : b[i]`
#[inline(never)]
pub fn scalar_min<T: PartialOrd + Copy>(a: &[T], b: &[T], out: &mut [T]) {
    for ((o, &x), &y) in out.iter_mut().zip(a).zip(b) {
        *o = if x < y { x } else { y };
    }
}

/// Max: `out[i] = a[i] > b[i] ? a[i] : b[i]`
#[inline(never)]
pub fn scalar_max<T: PartialOrd + Copy>(a: &[T], b: &[T], out: &mut [T]) {
    for ((o, &x), &y) in out.iter_mut().zip(a).zip(b) {
        *o = if x > y { x } else { y };
    }
}

/// Sqrt: `out[i] = sqrt(x[i])`, NaN for negative lanes.
#[inline(never)]
pub fn scalar_sqrt_f32(x: &[f32], out: &mut [f32]) {
    for (o, &v) in out.iter_mut().zip(x) {
        *o = v.sqrt();
    }
}

/// Sqrt: `out[i] = sqrt(x[i])`, NaN for negative lanes.
#[inline(never)]
pub fn scalar_sqrt_f64(x: &[f64], out: &mut [f64]) {
    for (o, &v) in out.iter_mut().zip(x) {
        *o = v.sqrt();
    }
}

/// Select: `out[i] = mask[i] ? a[i] : b[i]`
#[inline(never)]
pub fn scalar_select<T: Copy>(mask: &[bool], a: &[T], b: &[T], out: &mut [T]) {
    for (i, o) in out.iter_mut().enumerate() {
        *o = if mask[i] { a[i] } else { b[i] };
    }
}

/// Masked store: `if mask[i] { dst[i] = src[i] }`
#[inline(never)]
pub fn scalar_masked_store<T: Copy>(src: &[T], mask: &[bool], dst: &mut [T]) {
    for (i, d) in dst.iter_mut().enumerate().take(src.len()) {
        if mask[i] {
            *d = src[i];
        }
    }
}

/// Masked load: `out[i] = mask[i] ? src[i] : 0`
#[inline(never)]
pub fn scalar_masked_load<T: Copy + Default>(src: &[T], mask: &[bool], out: &mut [T]) {
    for (i, o) in out.iter_mut().enumerate() {
        *o = if mask[i] { src[i] } else { T::default() };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_min_max_nan_takes_second() {
        let a = [f32::NAN, 1.0, -0.0];
        let b = [2.0, f32::NAN, 0.0];
        let mut lo = [0.0; 3];
        let mut hi = [0.0; 3];
        scalar_min(&a, &b, &mut lo);
        scalar_max(&a, &b, &mut hi);
        assert_eq!(lo[0], 2.0);
        assert!(lo[1].is_nan());
        assert!(lo[2] == 0.0 && lo[2].is_sign_positive());
        assert_eq!(hi[0], 2.0);
        assert!(hi[1].is_nan());
    }

    #[test]
    fn test_masked_store() {
        let mut dst = [9, 9, 9, 9];
        scalar_masked_store(&[1, 2, 3, 4], &[true, false, true, false], &mut dst);
        assert_eq!(dst, [1, 9, 3, 9]);
    }
}
