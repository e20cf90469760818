//! varying-simd: width-polymorphic SIMD vectors and masks.
//!
//! `Vector<T, N>` holds `N` lanes of `T` (`f32`, `f64`, `i32`, `u32`, `i64`)
//! for `N` in 1, 4, 8 or 16. Every operation is resolved at compile time from
//! the target features of the build:
//! - **Native**: one instruction when the selected tier has it for this
//!   element and width.
//! - **Decomposed**: two half-width calls through the same operation, so an
//!   8- or 16-wide vector reuses whatever the narrower widths compile to.
//! - **Scalar**: a per-lane loop at width 4 (and the scalar op at width 1).
//!
//! Results are bit-identical across paths except where a native instruction
//! defines NaN or signed-zero handling differently; see [`ops`].
//!
//! # Quick Start
//!
//! ```
//! use varying_simd::{store_slice_masked, VBoolF4, VFloat4};
//!
//! let mut dst = [9.0f32; 4];
//! let mask = VBoolF4::from_bools([true, false, true, false]);
//! store_slice_masked(VFloat4::from_array([1.0, 2.0, 3.0, 4.0]), &mut dst, &mask).unwrap();
//! assert_eq!(dst, [1.0, 9.0, 3.0, 9.0]);
//! ```

#[macro_use]
mod macros;

pub mod error;
pub mod extend;
pub mod isa;
pub mod lanes;
pub mod mask;
pub mod ops;
pub mod vector;

pub use error::{SimdError, SimdResult};
pub use extend::{extend_width, simd_mode, VExtend};
pub use isa::{log_isa_summary, IsaLevel, ISA_LEVEL, SIMD_WIDTH, WIDE_ONLY};
pub use lanes::{Float, Lane, LaneCount, MaskSlot, SupportedLaneCount};
pub use mask::{
    Mask, VBool, VBool16, VBool4, VBool8, VBoolD, VBoolD16, VBoolD4, VBoolD8, VBoolDX, VBoolF,
    VBoolF16, VBoolF4, VBoolF8, VBoolFX, VBoolX,
};
pub use ops::{
    load, load_masked, load_slice, load_slice_masked, max, min, select, sqrt, store,
    store_masked, store_slice, store_slice_masked, SimdLoad, SimdMaskedLoad, SimdMaskedStore,
    SimdMax, SimdMin, SimdSelect, SimdSqrt, SimdStore,
};
pub use vector::{
    SimdVector, VDouble, VDouble16, VDouble4, VDouble8, VDoubleX, VFloat, VFloat16, VFloat4,
    VFloat8, VFloatX, VInt, VInt16, VInt4, VInt8, VIntX, VLLong, VLLong16, VLLong4, VLLong8,
    VLLongX, VReal, VReal16, VReal4, VReal8, VRealX, VUInt, VUInt16, VUInt4, VUInt8, VUIntX,
    Vector,
};
