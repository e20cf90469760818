//! Lane predicates in the layout compare instructions produce.

use std::ops::{BitAnd, BitOr, BitXor, Not};

use crate::error::{SimdError, SimdResult};
use crate::lanes::{LaneCount, MaskSlot, SupportedLaneCount};

/// `N` predicates, one full-width slot per lane.
///
/// `M` is `i32` for masks that guard 32-bit lanes and `i64` for 64-bit lanes.
/// Every slot is either `M::TRUE` (all ones) or `M::FALSE` (all zeros); the
/// constructors uphold that, so the slots can be handed to `maskstore`/`blendv`
/// style instructions as-is.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[repr(transparent)]
pub struct Mask<M: MaskSlot, const N: usize>
where
    LaneCount<N>: SupportedLaneCount,
{
    slots: [M; N],
}

// SAFETY: `repr(transparent)` over `[M; N]` with `M: Pod`.
unsafe impl<M: MaskSlot, const N: usize> bytemuck::Zeroable for Mask<M, N> where
    LaneCount<N>: SupportedLaneCount
{
}
unsafe impl<M: MaskSlot, const N: usize> bytemuck::Pod for Mask<M, N> where
    LaneCount<N>: SupportedLaneCount
{
}

impl<M: MaskSlot, const N: usize> Mask<M, N>
where
    LaneCount<N>: SupportedLaneCount,
{
    pub const LANES: usize = N;

    #[inline(always)]
    pub fn splat(value: bool) -> Self {
        Self {
            slots: [M::from_bool(value); N],
        }
    }

    #[inline]
    pub fn from_bools(bools: [bool; N]) -> Self {
        Self {
            slots: bools.map(M::from_bool),
        }
    }

    /// Bit `i` of `bits` becomes lane `i`; bits at or above `N` are ignored.
    #[inline]
    pub fn from_bitmask(bits: u16) -> Self {
        Self {
            slots: std::array::from_fn(|i| M::from_bool(bits & (1 << i) != 0)),
        }
    }

    /// Accept raw slots, e.g. the output of a native compare.
    pub fn from_slots(slots: [M; N]) -> SimdResult<Self> {
        match slots.iter().position(|s| !s.is_sentinel()) {
            Some(lane) => Err(SimdError::InvalidMaskSlot { lane }),
            None => Ok(Self { slots }),
        }
    }

    #[inline(always)]
    pub const fn slots(&self) -> &[M; N] {
        &self.slots
    }

    #[inline(always)]
    pub const fn as_ptr(&self) -> *const M {
        self.slots.as_ptr()
    }

    /// Packed form: lane `i` in bit `i`. This is the `__mmask` operand of the
    /// AVX-512 masked instructions.
    #[inline]
    pub fn to_bitmask(&self) -> u16 {
        self.slots
            .iter()
            .enumerate()
            .fold(0u16, |acc, (i, s)| acc | ((s.is_set() as u16) << i))
    }

    #[inline]
    pub fn to_bools(&self) -> [bool; N] {
        self.slots.map(MaskSlot::is_set)
    }

    #[inline(always)]
    pub fn test(&self, i: usize) -> bool {
        self.slots[i].is_set()
    }

    #[inline(always)]
    pub fn set(&mut self, i: usize, value: bool) {
        self.slots[i] = M::from_bool(value);
    }

    pub fn all(&self) -> bool {
        self.slots.iter().all(|s| s.is_set())
    }

    pub fn any(&self) -> bool {
        self.slots.iter().any(|s| s.is_set())
    }

    pub fn none(&self) -> bool {
        !self.any()
    }

    pub fn count(&self) -> usize {
        self.slots.iter().filter(|s| s.is_set()).count()
    }
}

impl<M: MaskSlot, const N: usize> Default for Mask<M, N>
where
    LaneCount<N>: SupportedLaneCount,
{
    fn default() -> Self {
        Self::splat(false)
    }
}

impl<M: MaskSlot, const N: usize> From<[bool; N]> for Mask<M, N>
where
    LaneCount<N>: SupportedLaneCount,
{
    fn from(bools: [bool; N]) -> Self {
        Self::from_bools(bools)
    }
}

impl<M: MaskSlot, const N: usize> From<Mask<M, N>> for [bool; N]
where
    LaneCount<N>: SupportedLaneCount,
{
    fn from(mask: Mask<M, N>) -> Self {
        mask.to_bools()
    }
}

macro_rules! impl_mask_logic {
    ($trait_:ident, $method:ident, $op:tt) => {
        impl<M: MaskSlot, const N: usize> $trait_ for Mask<M, N>
        where
            LaneCount<N>: SupportedLaneCount,
        {
            type Output = Self;

            #[inline]
            fn $method(self, rhs: Self) -> Self {
                Self {
                    slots: std::array::from_fn(|i| {
                        M::from_bool(self.slots[i].is_set() $op rhs.slots[i].is_set())
                    }),
                }
            }
        }
    };
}

impl_mask_logic!(BitAnd, bitand, &);
impl_mask_logic!(BitOr, bitor, |);
impl_mask_logic!(BitXor, bitxor, ^);

impl<M: MaskSlot, const N: usize> Not for Mask<M, N>
where
    LaneCount<N>: SupportedLaneCount,
{
    type Output = Self;

    #[inline]
    fn not(self) -> Self {
        Self {
            slots: self.slots.map(|s| M::from_bool(!s.is_set())),
        }
    }
}

macro_rules! impl_mask_halves {
    ($n:literal, $h:literal) => {
        impl<M: MaskSlot> Mask<M, $n> {
            #[inline(always)]
            pub fn from_halves(lo: Mask<M, $h>, hi: Mask<M, $h>) -> Self {
                bytemuck::cast([lo, hi])
            }

            #[inline(always)]
            pub fn halves(&self) -> &[Mask<M, $h>; 2] {
                bytemuck::cast_ref(&self.slots)
            }

            #[inline(always)]
            pub fn lo(&self) -> Mask<M, $h> {
                self.halves()[0]
            }

            #[inline(always)]
            pub fn hi(&self) -> Mask<M, $h> {
                self.halves()[1]
            }
        }
    };
}

impl_mask_halves!(8, 4);
impl_mask_halves!(16, 8);

/// Masks for `f32`/`i32`/`u32` lanes.
pub type VBoolF<const N: usize> = Mask<i32, N>;
/// Masks for `f64`/`i64` lanes.
pub type VBoolD<const N: usize> = Mask<i64, N>;
pub type VBool<const N: usize> = VBoolF<N>;

pub type VBool4 = VBool<4>;
pub type VBoolF4 = VBoolF<4>;
pub type VBoolD4 = VBoolD<4>;

pub type VBool8 = VBool<8>;
pub type VBoolF8 = VBoolF<8>;
pub type VBoolD8 = VBoolD<8>;

pub type VBool16 = VBool<16>;
pub type VBoolF16 = VBoolF<16>;
pub type VBoolD16 = VBoolD<16>;

pub type VBoolX = VBool<{ crate::isa::SIMD_WIDTH }>;
pub type VBoolFX = VBoolF<{ crate::isa::SIMD_WIDTH }>;
pub type VBoolDX = VBoolD<{ crate::isa::SIMD_WIDTH }>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bitmask_round_trip() {
        let m = VBoolF8::from_bools([true, false, true, true, false, false, false, true]);
        assert_eq!(m.to_bitmask(), 0b1000_1101);
        assert_eq!(VBoolF8::from_bitmask(0b1000_1101), m);
        // Bits above the width are dropped.
        assert_eq!(VBoolD4::from_bitmask(0xfff0), VBoolD4::splat(false));
    }

    #[test]
    fn test_slots_hold_sentinels() {
        let m = VBoolD4::from_bools([true, false, false, true]);
        assert_eq!(m.slots(), &[-1i64, 0, 0, -1]);
        assert_eq!(
            VBoolF4::from_slots([0, -1, 7, 0]),
            Err(SimdError::InvalidMaskSlot { lane: 2 })
        );
    }

    #[test]
    fn test_logic_ops() {
        let a = VBoolF4::from_bools([true, true, false, false]);
        let b = VBoolF4::from_bools([true, false, true, false]);
        assert_eq!((a & b).to_bools(), [true, false, false, false]);
        assert_eq!((a | b).to_bools(), [true, true, true, false]);
        assert_eq!((a ^ b).to_bools(), [false, true, true, false]);
        assert_eq!((!a).to_bools(), [false, false, true, true]);
        assert_eq!((a | b).count(), 3);
        assert!(VBoolF4::splat(true).all());
        assert!(VBoolF4::default().none());
    }

    #[test]
    fn test_mask_halves() {
        let bits = 0b0110_0000_1111_0001u16;
        let m = VBoolF16::from_bitmask(bits);
        assert_eq!(m.lo().to_bitmask(), 0b1111_0001);
        assert_eq!(m.hi().to_bitmask(), 0b0110_0000);
        assert_eq!(VBoolF16::from_halves(m.lo(), m.hi()), m);
        assert_eq!(m.lo().hi().to_bools(), [true, true, true, true]);
    }

    #[test]
    fn test_set_and_test() {
        let mut m = VBoolD8::default();
        m.set(5, true);
        assert!(m.test(5));
        assert!(!m.test(4));
        assert_eq!(m.to_bitmask(), 1 << 5);
    }
}
