//! Macro system for varying-simd.
//!
//! Three layers:
//! 1. `simd_primitive!`: (register family, element, op) to one intrinsic.
//! 2. `tiered_impl!` plus the `native_*` / `split_*` / `lanewise_*` bodies.
//! 3. The per-operation row tables in `crate::ops`, one row per
//!    (element, width) listing its tiers widest first.

#[macro_use]
pub mod simd_primitive;
#[macro_use]
pub mod dispatch;
