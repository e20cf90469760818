//! Fixed-width vector values.

use std::ops::{Index, IndexMut};

use crate::error::{SimdError, SimdResult};
use crate::lanes::{Lane, LaneCount, SupportedLaneCount};
use crate::mask::Mask;

/// `N` lanes of `T`, stored contiguously.
///
/// A wide vector is laid out as its two halves back to back, so
/// [`Vector::halves`] is a view, not a copy.
#[derive(Clone, Copy, PartialEq, Debug)]
#[repr(transparent)]
pub struct Vector<T: Lane, const N: usize>
where
    LaneCount<N>: SupportedLaneCount,
{
    lanes: [T; N],
}

// SAFETY: `repr(transparent)` over `[T; N]` with `T: Pod`, so there is no
// padding and every bit pattern is valid.
unsafe impl<T: Lane, const N: usize> bytemuck::Zeroable for Vector<T, N> where
    LaneCount<N>: SupportedLaneCount
{
}
unsafe impl<T: Lane, const N: usize> bytemuck::Pod for Vector<T, N> where
    LaneCount<N>: SupportedLaneCount
{
}

/// Element type, mask type and width of a vector, for generic callers.
pub trait SimdVector: Copy {
    type Elem: Lane;
    type Mask: Copy;
    const LANES: usize;
}

impl<T: Lane, const N: usize> SimdVector for Vector<T, N>
where
    LaneCount<N>: SupportedLaneCount,
{
    type Elem = T;
    type Mask = Mask<T::MaskSlot, N>;
    const LANES: usize = N;
}

impl<T: Lane, const N: usize> Vector<T, N>
where
    LaneCount<N>: SupportedLaneCount,
{
    pub const LANES: usize = N;

    #[inline(always)]
    pub const fn from_array(lanes: [T; N]) -> Self {
        Self { lanes }
    }

    #[inline(always)]
    pub fn splat(value: T) -> Self {
        Self { lanes: [value; N] }
    }

    /// Copy the first `N` elements of `src`.
    pub fn from_slice(src: &[T]) -> SimdResult<Self> {
        if src.len() < N {
            return Err(SimdError::LengthMismatch {
                expected: N,
                actual: src.len(),
            });
        }
        let mut out = Self::default();
        out.lanes.copy_from_slice(&src[..N]);
        Ok(out)
    }

    #[inline(always)]
    pub fn to_array(self) -> [T; N] {
        self.lanes
    }

    #[inline(always)]
    pub const fn as_array(&self) -> &[T; N] {
        &self.lanes
    }

    #[inline(always)]
    pub fn as_mut_array(&mut self) -> &mut [T; N] {
        &mut self.lanes
    }

    #[inline(always)]
    pub const fn len(&self) -> usize {
        N
    }

    #[inline(always)]
    pub const fn is_empty(&self) -> bool {
        false
    }

    #[inline(always)]
    pub const fn as_ptr(&self) -> *const T {
        self.lanes.as_ptr()
    }

    #[inline(always)]
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.lanes.as_mut_ptr()
    }

    /// Lane `i` without a bounds check in release builds.
    ///
    /// # Safety
    /// `i < N`.
    #[inline(always)]
    pub unsafe fn get_unchecked(&self, i: usize) -> &T {
        debug_assert!(i < N, "lane {i} out of range for width {N}");
        self.lanes.get_unchecked(i)
    }

    /// # Safety
    /// `i < N`.
    #[inline(always)]
    pub unsafe fn get_unchecked_mut(&mut self, i: usize) -> &mut T {
        debug_assert!(i < N, "lane {i} out of range for width {N}");
        self.lanes.get_unchecked_mut(i)
    }

    #[inline]
    pub fn lanes_eq(&self, rhs: &Self) -> Mask<T::MaskSlot, N> {
        Mask::from_bools(std::array::from_fn(|i| self.lanes[i] == rhs.lanes[i]))
    }

    #[inline]
    pub fn lanes_ne(&self, rhs: &Self) -> Mask<T::MaskSlot, N> {
        Mask::from_bools(std::array::from_fn(|i| self.lanes[i] != rhs.lanes[i]))
    }

    #[inline]
    pub fn lanes_lt(&self, rhs: &Self) -> Mask<T::MaskSlot, N> {
        Mask::from_bools(std::array::from_fn(|i| self.lanes[i] < rhs.lanes[i]))
    }

    #[inline]
    pub fn lanes_le(&self, rhs: &Self) -> Mask<T::MaskSlot, N> {
        Mask::from_bools(std::array::from_fn(|i| self.lanes[i] <= rhs.lanes[i]))
    }

    #[inline]
    pub fn lanes_gt(&self, rhs: &Self) -> Mask<T::MaskSlot, N> {
        Mask::from_bools(std::array::from_fn(|i| self.lanes[i] > rhs.lanes[i]))
    }

    #[inline]
    pub fn lanes_ge(&self, rhs: &Self) -> Mask<T::MaskSlot, N> {
        Mask::from_bools(std::array::from_fn(|i| self.lanes[i] >= rhs.lanes[i]))
    }
}

impl<T: Lane, const N: usize> Default for Vector<T, N>
where
    LaneCount<N>: SupportedLaneCount,
{
    #[inline(always)]
    fn default() -> Self {
        Self::splat(T::ZERO)
    }
}

impl<T: Lane, const N: usize> From<[T; N]> for Vector<T, N>
where
    LaneCount<N>: SupportedLaneCount,
{
    #[inline(always)]
    fn from(lanes: [T; N]) -> Self {
        Self::from_array(lanes)
    }
}

impl<T: Lane, const N: usize> From<Vector<T, N>> for [T; N]
where
    LaneCount<N>: SupportedLaneCount,
{
    #[inline(always)]
    fn from(v: Vector<T, N>) -> Self {
        v.lanes
    }
}

impl<T: Lane, const N: usize> TryFrom<&[T]> for Vector<T, N>
where
    LaneCount<N>: SupportedLaneCount,
{
    type Error = SimdError;

    fn try_from(src: &[T]) -> SimdResult<Self> {
        Self::from_slice(src)
    }
}

impl<T: Lane, const N: usize> Index<usize> for Vector<T, N>
where
    LaneCount<N>: SupportedLaneCount,
{
    type Output = T;

    #[inline(always)]
    fn index(&self, i: usize) -> &T {
        &self.lanes[i]
    }
}

impl<T: Lane, const N: usize> IndexMut<usize> for Vector<T, N>
where
    LaneCount<N>: SupportedLaneCount,
{
    #[inline(always)]
    fn index_mut(&mut self, i: usize) -> &mut T {
        &mut self.lanes[i]
    }
}

macro_rules! impl_vector_halves {
    ($n:literal, $h:literal) => {
        impl<T: Lane> Vector<T, $n> {
            /// Compose from a low half (lanes `0..H`) and a high half.
            #[inline(always)]
            pub fn from_halves(lo: Vector<T, $h>, hi: Vector<T, $h>) -> Self {
                bytemuck::cast([lo, hi])
            }

            #[inline(always)]
            pub fn halves(&self) -> &[Vector<T, $h>; 2] {
                bytemuck::cast_ref(&self.lanes)
            }

            #[inline(always)]
            pub fn lo(&self) -> Vector<T, $h> {
                self.halves()[0]
            }

            #[inline(always)]
            pub fn hi(&self) -> Vector<T, $h> {
                self.halves()[1]
            }
        }
    };
}

impl_vector_halves!(8, 4);
impl_vector_halves!(16, 8);

pub type VFloat<const N: usize> = Vector<f32, N>;
pub type VDouble<const N: usize> = Vector<f64, N>;
pub type VReal<const N: usize> = VFloat<N>;
pub type VInt<const N: usize> = Vector<i32, N>;
pub type VUInt<const N: usize> = Vector<u32, N>;
pub type VLLong<const N: usize> = Vector<i64, N>;

pub type VFloat4 = VFloat<4>;
pub type VDouble4 = VDouble<4>;
pub type VReal4 = VReal<4>;
pub type VInt4 = VInt<4>;
pub type VUInt4 = VUInt<4>;
pub type VLLong4 = VLLong<4>;

pub type VFloat8 = VFloat<8>;
pub type VDouble8 = VDouble<8>;
pub type VReal8 = VReal<8>;
pub type VInt8 = VInt<8>;
pub type VUInt8 = VUInt<8>;
pub type VLLong8 = VLLong<8>;

pub type VFloat16 = VFloat<16>;
pub type VDouble16 = VDouble<16>;
pub type VReal16 = VReal<16>;
pub type VInt16 = VInt<16>;
pub type VUInt16 = VUInt<16>;
pub type VLLong16 = VLLong<16>;

pub type VFloatX = VFloat<{ crate::isa::SIMD_WIDTH }>;
pub type VDoubleX = VDouble<{ crate::isa::SIMD_WIDTH }>;
pub type VRealX = VReal<{ crate::isa::SIMD_WIDTH }>;
pub type VIntX = VInt<{ crate::isa::SIMD_WIDTH }>;
pub type VUIntX = VUInt<{ crate::isa::SIMD_WIDTH }>;
pub type VLLongX = VLLong<{ crate::isa::SIMD_WIDTH }>;
