//! Compile-time instruction-set tier.
//!
//! The tier is fixed when the crate is built: `build.rs` turns the target's
//! `target_feature` set into `simd_*` cfgs, and the constants here are folded
//! from those cfgs. Nothing in this module probes the CPU.

use std::fmt;
use std::str::FromStr;

use crate::error::SimdError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum IsaLevel {
    Scalar,
    /// 128-bit SSE2 float and integer moves.
    Sse,
    /// SSE4.1: 32-bit integer min/max and `blendv`.
    Sse41,
    /// 256-bit float instructions and `maskstore`.
    Avx,
    /// 256-bit integer instructions.
    Avx2,
    /// 512-bit AVX-512F without the 128/256-bit VL encodings (wide-only class).
    Avx512,
    /// AVX-512F with VL.
    Avx512Vl,
    Neon,
}

impl IsaLevel {
    pub const ALL: [IsaLevel; 8] = [
        IsaLevel::Scalar,
        IsaLevel::Sse,
        IsaLevel::Sse41,
        IsaLevel::Avx,
        IsaLevel::Avx2,
        IsaLevel::Avx512,
        IsaLevel::Avx512Vl,
        IsaLevel::Neon,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            IsaLevel::Scalar => "scalar",
            IsaLevel::Sse => "sse",
            IsaLevel::Sse41 => "sse4.1",
            IsaLevel::Avx => "avx",
            IsaLevel::Avx2 => "avx2",
            IsaLevel::Avx512 => "avx512f",
            IsaLevel::Avx512Vl => "avx512vl",
            IsaLevel::Neon => "neon",
        }
    }

    /// Widest lane count of a 32-bit element that one register holds.
    pub const fn max_width(self) -> usize {
        match self {
            IsaLevel::Avx512 | IsaLevel::Avx512Vl => 16,
            IsaLevel::Avx | IsaLevel::Avx2 => 8,
            _ => 4,
        }
    }

    /// True for hardware that only has the 512-bit encodings.
    pub const fn is_wide_only(self) -> bool {
        matches!(self, IsaLevel::Avx512)
    }
}

impl fmt::Display for IsaLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for IsaLevel {
    type Err = SimdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        match lower.as_str() {
            "scalar" => Ok(IsaLevel::Scalar),
            "sse" | "sse2" => Ok(IsaLevel::Sse),
            "sse4.1" | "sse41" => Ok(IsaLevel::Sse41),
            "avx" => Ok(IsaLevel::Avx),
            "avx2" => Ok(IsaLevel::Avx2),
            "avx512" | "avx512f" => Ok(IsaLevel::Avx512),
            "avx512vl" => Ok(IsaLevel::Avx512Vl),
            "neon" => Ok(IsaLevel::Neon),
            _ => Err(SimdError::UnknownIsa(s.to_string())),
        }
    }
}

/// Tier this build was compiled for, widest first.
pub const ISA_LEVEL: IsaLevel = if cfg!(simd_avx512vl) {
    IsaLevel::Avx512Vl
} else if cfg!(simd_avx512f) {
    IsaLevel::Avx512
} else if cfg!(simd_avx2) {
    IsaLevel::Avx2
} else if cfg!(simd_avx) {
    IsaLevel::Avx
} else if cfg!(simd_sse41) {
    IsaLevel::Sse41
} else if cfg!(simd_sse2) {
    IsaLevel::Sse
} else if cfg!(simd_neon) {
    IsaLevel::Neon
} else {
    IsaLevel::Scalar
};

/// Native maximum width for this build (16, 8 or 4).
pub const SIMD_WIDTH: usize = ISA_LEVEL.max_width();

/// Whether this build targets wide-only hardware.
pub const WIDE_ONLY: bool = cfg!(simd_wide_only);

/// Log the compiled tier once, typically at startup of an embedding binary.
pub fn log_isa_summary() {
    log::info!(
        "varying-simd: tier={} native_width={} wide_only={}",
        ISA_LEVEL,
        SIMD_WIDTH,
        WIDE_ONLY
    );
}
