//! Lane-count and lane-type markers.
//!
//! Widths are restricted to {1, 4, 8, 16} through [`SupportedLaneCount`]; an
//! unsupported width is rejected by the type checker rather than at runtime.

use std::fmt::Debug;

mod sealed {
    pub trait Sealed {}
}
use sealed::Sealed;

/// Type-level carrier for a lane count.
pub struct LaneCount<const N: usize>;

impl<const N: usize> Sealed for LaneCount<N> {}

/// Implemented for the lane counts the dispatch layer covers.
pub trait SupportedLaneCount: Sealed {
    /// Width of the embedded half, or 0 for widths that do not decompose.
    const HALF: usize;
}

impl SupportedLaneCount for LaneCount<1> {
    const HALF: usize = 0;
}
impl SupportedLaneCount for LaneCount<4> {
    const HALF: usize = 0;
}
impl SupportedLaneCount for LaneCount<8> {
    const HALF: usize = 4;
}
impl SupportedLaneCount for LaneCount<16> {
    const HALF: usize = 8;
}

/// Per-lane predicate slot: all ones for `true`, all zeros for `false`.
///
/// Slot width matches the element it guards (32-bit for `f32`/`i32`/`u32`,
/// 64-bit for `f64`/`i64`), which is the layout compare instructions produce.
pub trait MaskSlot:
    Sealed + bytemuck::Pod + Debug + Copy + Eq + Send + Sync + 'static
{
    const TRUE: Self;
    const FALSE: Self;

    #[inline(always)]
    fn from_bool(b: bool) -> Self {
        if b {
            Self::TRUE
        } else {
            Self::FALSE
        }
    }

    #[inline(always)]
    fn is_set(self) -> bool {
        self != Self::FALSE
    }

    #[inline(always)]
    fn is_sentinel(self) -> bool {
        self == Self::TRUE || self == Self::FALSE
    }
}

impl Sealed for i32 {}
impl MaskSlot for i32 {
    const TRUE: Self = -1;
    const FALSE: Self = 0;
}

impl Sealed for i64 {}
impl MaskSlot for i64 {
    const TRUE: Self = -1;
    const FALSE: Self = 0;
}

/// Scalar element of a [`Vector`](crate::Vector).
///
/// `lane_min` and `lane_max` are the scalar operations every 1-wide and
/// scalar-loop path bottoms out at. They are compare-and-select
/// (`a < b ? a : b`), so for floats a NaN in either operand yields `b` and
/// `min(-0.0, +0.0)` yields `+0.0`, the same answer x86 `MINPS`/`MAXPS` give.
pub trait Lane:
    Sealed + bytemuck::Pod + Debug + Default + PartialOrd + Send + Sync + 'static
{
    type MaskSlot: MaskSlot;
    const ZERO: Self;

    fn lane_min(self, other: Self) -> Self;
    fn lane_max(self, other: Self) -> Self;
}

/// Floating-point lanes.
pub trait Float: Lane {
    fn lane_sqrt(self) -> Self;
}

macro_rules! impl_lane {
    ($t:ty, $slot:ty, $zero:expr) => {
        impl Lane for $t {
            type MaskSlot = $slot;
            const ZERO: Self = $zero;

            #[inline(always)]
            fn lane_min(self, other: Self) -> Self {
                if self < other {
                    self
                } else {
                    other
                }
            }

            #[inline(always)]
            fn lane_max(self, other: Self) -> Self {
                if self > other {
                    self
                } else {
                    other
                }
            }
        }
    };
}

impl Sealed for f32 {}
impl Sealed for f64 {}
impl Sealed for u32 {}

impl_lane!(f32, i32, 0.0);
impl_lane!(f64, i64, 0.0);
impl_lane!(i32, i32, 0);
impl_lane!(u32, i32, 0);
impl_lane!(i64, i64, 0);

impl Float for f32 {
    #[inline(always)]
    fn lane_sqrt(self) -> Self {
        f32::sqrt(self)
    }
}

impl Float for f64 {
    #[inline(always)]
    fn lane_sqrt(self) -> Self {
        f64::sqrt(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_half_widths() {
        assert_eq!(<LaneCount<16> as SupportedLaneCount>::HALF, 8);
        assert_eq!(<LaneCount<8> as SupportedLaneCount>::HALF, 4);
        assert_eq!(<LaneCount<4> as SupportedLaneCount>::HALF, 0);
    }

    #[test]
    fn test_float_min_matches_minps() {
        // NaN in either operand selects the second operand.
        assert!(f32::NAN.lane_min(1.0) == 1.0);
        assert!(1.0f32.lane_min(f32::NAN).is_nan());
        // Equal operands (including signed zeros) also select the second.
        assert!((-0.0f32).lane_min(0.0).is_sign_positive());
        assert!(0.0f32.lane_max(-0.0).is_sign_negative());
    }

    #[test]
    fn test_integer_min_max() {
        assert_eq!(i32::MIN.lane_min(i32::MAX), i32::MIN);
        assert_eq!(u32::MAX.lane_max(0), u32::MAX);
        assert_eq!((-5i64).lane_max(-7), -5);
    }

    #[test]
    fn test_mask_slot_sentinels() {
        assert_eq!(i32::from_bool(true), -1);
        assert_eq!(i64::from_bool(false), 0);
        assert!(i32::TRUE.is_set());
        assert!(!5i32.is_sentinel());
    }
}
