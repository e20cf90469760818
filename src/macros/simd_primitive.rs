/// Maps an abstract lane operation to one hardware intrinsic.
///
/// # Architecture
/// This is "Layer 1" of the macro architecture: `(register family, element,
/// op)` to a single intrinsic call. Register families are `sse` (128-bit),
/// `avx` (256-bit), `avx512` (512-bit) and `neon` (128-bit). The lane count of
/// an entry follows from the family and the element size, e.g. `(avx, f64)` is
/// four lanes and `(avx, f32)` is eight.
///
/// Entries do not check availability. Each one is only reached from an impl
/// behind the matching `simd_*` cfg; the instruction set an entry needs beyond
/// its family baseline is noted next to it.
///
/// Mask operands (`k`) are integer registers loaded from the sentinel slots of
/// a [`Mask`](crate::Mask) via `(family, mask, load, ptr)`, except on
/// `avx512` where they are packed `__mmask` integers.
///
/// # Usage
/// ```ignore
/// simd_primitive!(sse, f32, min, a, b)   // -> _mm_min_ps(a, b)
/// simd_primitive!(avx, i64, load, p)     // -> _mm256_loadu_si256(p as *const __m256i)
/// ```
#[macro_export]
macro_rules! simd_primitive {
    // ========================================================================
    // SSE family (128-bit): f32 x4, i32/u32 x4. Baseline SSE2.
    // ========================================================================

    (sse, mask, load, $p:expr) => { std::arch::x86_64::_mm_loadu_si128($p as *const std::arch::x86_64::__m128i) };

    // --- f32 ---
    (sse, f32, load, $p:expr) => { std::arch::x86_64::_mm_loadu_ps($p) };
    (sse, f32, store, $p:expr, $v:expr) => { std::arch::x86_64::_mm_storeu_ps($p, $v) };
    (sse, f32, min, $a:expr, $b:expr) => { std::arch::x86_64::_mm_min_ps($a, $b) };
    (sse, f32, max, $a:expr, $b:expr) => { std::arch::x86_64::_mm_max_ps($a, $b) };
    (sse, f32, sqrt, $a:expr) => { std::arch::x86_64::_mm_sqrt_ps($a) };
    // a where k, else b
    (sse, f32, select_bits, $k:expr, $a:expr, $b:expr) => {{
        let k = std::arch::x86_64::_mm_castsi128_ps($k);
        std::arch::x86_64::_mm_or_ps(
            std::arch::x86_64::_mm_and_ps(k, $a),
            std::arch::x86_64::_mm_andnot_ps(k, $b),
        )
    }};
    // SSE4.1
    (sse, f32, blendv, $k:expr, $a:expr, $b:expr) => {
        std::arch::x86_64::_mm_blendv_ps($b, $a, std::arch::x86_64::_mm_castsi128_ps($k))
    };
    // AVX (VEX-encoded 128-bit)
    (sse, f32, maskstore, $p:expr, $k:expr, $v:expr) => { std::arch::x86_64::_mm_maskstore_ps($p, $k, $v) };
    (sse, f32, maskload, $p:expr, $k:expr) => { std::arch::x86_64::_mm_maskload_ps($p, $k) };

    // --- i32 / u32 ---
    // SSE4.1
    (sse, i32, min, $a:expr, $b:expr) => { std::arch::x86_64::_mm_min_epi32($a, $b) };
    (sse, i32, max, $a:expr, $b:expr) => { std::arch::x86_64::_mm_max_epi32($a, $b) };
    (sse, u32, min, $a:expr, $b:expr) => { std::arch::x86_64::_mm_min_epu32($a, $b) };
    (sse, u32, max, $a:expr, $b:expr) => { std::arch::x86_64::_mm_max_epu32($a, $b) };
    // AVX2
    (sse, $int:ident, maskstore, $p:expr, $k:expr, $v:expr) => {
        std::arch::x86_64::_mm_maskstore_epi32($p as *mut i32, $k, $v)
    };
    (sse, $int:ident, maskload, $p:expr, $k:expr) => {
        std::arch::x86_64::_mm_maskload_epi32($p as *const i32, $k)
    };
    // AVX: integer lanes through the float masked move
    (sse, $int:ident, maskstore_fp, $p:expr, $k:expr, $v:expr) => {
        std::arch::x86_64::_mm_maskstore_ps($p as *mut f32, $k, std::arch::x86_64::_mm_castsi128_ps($v))
    };
    (sse, $int:ident, maskload_fp, $p:expr, $k:expr) => {
        std::arch::x86_64::_mm_castps_si128(std::arch::x86_64::_mm_maskload_ps($p as *const f32, $k))
    };
    (sse, $int:ident, load, $p:expr) => { std::arch::x86_64::_mm_loadu_si128($p as *const std::arch::x86_64::__m128i) };
    (sse, $int:ident, store, $p:expr, $v:expr) => { std::arch::x86_64::_mm_storeu_si128($p as *mut std::arch::x86_64::__m128i, $v) };
    (sse, $int:ident, select_bits, $k:expr, $a:expr, $b:expr) => {{
        let k = $k;
        std::arch::x86_64::_mm_or_si128(
            std::arch::x86_64::_mm_and_si128(k, $a),
            std::arch::x86_64::_mm_andnot_si128(k, $b),
        )
    }};
    // SSE4.1
    (sse, $int:ident, blendv, $k:expr, $a:expr, $b:expr) => { std::arch::x86_64::_mm_blendv_epi8($b, $a, $k) };

    // ========================================================================
    // AVX family (256-bit): f32 x8, f64 x4, i32/u32 x8, i64 x4. Baseline AVX.
    // ========================================================================

    (avx, mask, load, $p:expr) => { std::arch::x86_64::_mm256_loadu_si256($p as *const std::arch::x86_64::__m256i) };

    // --- f32 ---
    (avx, f32, load, $p:expr) => { std::arch::x86_64::_mm256_loadu_ps($p) };
    (avx, f32, store, $p:expr, $v:expr) => { std::arch::x86_64::_mm256_storeu_ps($p, $v) };
    (avx, f32, min, $a:expr, $b:expr) => { std::arch::x86_64::_mm256_min_ps($a, $b) };
    (avx, f32, max, $a:expr, $b:expr) => { std::arch::x86_64::_mm256_max_ps($a, $b) };
    (avx, f32, sqrt, $a:expr) => { std::arch::x86_64::_mm256_sqrt_ps($a) };
    (avx, f32, blendv, $k:expr, $a:expr, $b:expr) => {
        std::arch::x86_64::_mm256_blendv_ps($b, $a, std::arch::x86_64::_mm256_castsi256_ps($k))
    };
    (avx, f32, maskstore, $p:expr, $k:expr, $v:expr) => { std::arch::x86_64::_mm256_maskstore_ps($p, $k, $v) };
    (avx, f32, maskload, $p:expr, $k:expr) => { std::arch::x86_64::_mm256_maskload_ps($p, $k) };

    // --- f64 ---
    (avx, f64, load, $p:expr) => { std::arch::x86_64::_mm256_loadu_pd($p) };
    (avx, f64, store, $p:expr, $v:expr) => { std::arch::x86_64::_mm256_storeu_pd($p, $v) };
    (avx, f64, min, $a:expr, $b:expr) => { std::arch::x86_64::_mm256_min_pd($a, $b) };
    (avx, f64, max, $a:expr, $b:expr) => { std::arch::x86_64::_mm256_max_pd($a, $b) };
    (avx, f64, sqrt, $a:expr) => { std::arch::x86_64::_mm256_sqrt_pd($a) };
    (avx, f64, blendv, $k:expr, $a:expr, $b:expr) => {
        std::arch::x86_64::_mm256_blendv_pd($b, $a, std::arch::x86_64::_mm256_castsi256_pd($k))
    };
    (avx, f64, maskstore, $p:expr, $k:expr, $v:expr) => { std::arch::x86_64::_mm256_maskstore_pd($p, $k, $v) };
    (avx, f64, maskload, $p:expr, $k:expr) => { std::arch::x86_64::_mm256_maskload_pd($p, $k) };

    // --- i32 / u32 / i64 ---
    // AVX2
    (avx, i32, min, $a:expr, $b:expr) => { std::arch::x86_64::_mm256_min_epi32($a, $b) };
    (avx, i32, max, $a:expr, $b:expr) => { std::arch::x86_64::_mm256_max_epi32($a, $b) };
    (avx, u32, min, $a:expr, $b:expr) => { std::arch::x86_64::_mm256_min_epu32($a, $b) };
    (avx, u32, max, $a:expr, $b:expr) => { std::arch::x86_64::_mm256_max_epu32($a, $b) };
    // AVX-512VL
    (avx, i64, min, $a:expr, $b:expr) => { std::arch::x86_64::_mm256_min_epi64($a, $b) };
    (avx, i64, max, $a:expr, $b:expr) => { std::arch::x86_64::_mm256_max_epi64($a, $b) };
    // AVX2
    (avx, i64, maskstore, $p:expr, $k:expr, $v:expr) => {
        std::arch::x86_64::_mm256_maskstore_epi64($p as *mut i64, $k, $v)
    };
    (avx, i64, maskload, $p:expr, $k:expr) => {
        std::arch::x86_64::_mm256_maskload_epi64($p as *const i64, $k)
    };
    (avx, $int:ident, maskstore, $p:expr, $k:expr, $v:expr) => {
        std::arch::x86_64::_mm256_maskstore_epi32($p as *mut i32, $k, $v)
    };
    (avx, $int:ident, maskload, $p:expr, $k:expr) => {
        std::arch::x86_64::_mm256_maskload_epi32($p as *const i32, $k)
    };
    (avx, $int:ident, blendv, $k:expr, $a:expr, $b:expr) => { std::arch::x86_64::_mm256_blendv_epi8($b, $a, $k) };
    // AVX: integer lanes through the float instructions
    (avx, i64, maskstore_fp, $p:expr, $k:expr, $v:expr) => {
        std::arch::x86_64::_mm256_maskstore_pd($p as *mut f64, $k, std::arch::x86_64::_mm256_castsi256_pd($v))
    };
    (avx, i64, maskload_fp, $p:expr, $k:expr) => {
        std::arch::x86_64::_mm256_castpd_si256(std::arch::x86_64::_mm256_maskload_pd($p as *const f64, $k))
    };
    (avx, i64, blendv_fp, $k:expr, $a:expr, $b:expr) => {
        std::arch::x86_64::_mm256_castpd_si256(std::arch::x86_64::_mm256_blendv_pd(
            std::arch::x86_64::_mm256_castsi256_pd($b),
            std::arch::x86_64::_mm256_castsi256_pd($a),
            std::arch::x86_64::_mm256_castsi256_pd($k),
        ))
    };
    (avx, $int:ident, maskstore_fp, $p:expr, $k:expr, $v:expr) => {
        std::arch::x86_64::_mm256_maskstore_ps($p as *mut f32, $k, std::arch::x86_64::_mm256_castsi256_ps($v))
    };
    (avx, $int:ident, maskload_fp, $p:expr, $k:expr) => {
        std::arch::x86_64::_mm256_castps_si256(std::arch::x86_64::_mm256_maskload_ps($p as *const f32, $k))
    };
    (avx, $int:ident, blendv_fp, $k:expr, $a:expr, $b:expr) => {
        std::arch::x86_64::_mm256_castps_si256(std::arch::x86_64::_mm256_blendv_ps(
            std::arch::x86_64::_mm256_castsi256_ps($b),
            std::arch::x86_64::_mm256_castsi256_ps($a),
            std::arch::x86_64::_mm256_castsi256_ps($k),
        ))
    };
    (avx, $int:ident, load, $p:expr) => { std::arch::x86_64::_mm256_loadu_si256($p as *const std::arch::x86_64::__m256i) };
    (avx, $int:ident, store, $p:expr, $v:expr) => { std::arch::x86_64::_mm256_storeu_si256($p as *mut std::arch::x86_64::__m256i, $v) };

    // ========================================================================
    // AVX-512 family (512-bit): f32 x16, f64 x8, i32/u32 x16, i64 x8. AVX-512F.
    // Mask operands are packed: __mmask16 for 32-bit lanes, __mmask8 for 64-bit.
    // ========================================================================

    // --- f32 ---
    (avx512, f32, load, $p:expr) => { std::arch::x86_64::_mm512_loadu_ps($p) };
    (avx512, f32, store, $p:expr, $v:expr) => { std::arch::x86_64::_mm512_storeu_ps($p, $v) };
    (avx512, f32, min, $a:expr, $b:expr) => { std::arch::x86_64::_mm512_min_ps($a, $b) };
    (avx512, f32, max, $a:expr, $b:expr) => { std::arch::x86_64::_mm512_max_ps($a, $b) };
    (avx512, f32, sqrt, $a:expr) => { std::arch::x86_64::_mm512_sqrt_ps($a) };
    (avx512, f32, blend, $k:expr, $a:expr, $b:expr) => { std::arch::x86_64::_mm512_mask_blend_ps($k, $b, $a) };
    (avx512, f32, mask_store, $p:expr, $k:expr, $v:expr) => { std::arch::x86_64::_mm512_mask_storeu_ps($p, $k, $v) };
    (avx512, f32, maskz_load, $p:expr, $k:expr) => { std::arch::x86_64::_mm512_maskz_loadu_ps($k, $p) };

    // --- f64 ---
    (avx512, f64, load, $p:expr) => { std::arch::x86_64::_mm512_loadu_pd($p) };
    (avx512, f64, store, $p:expr, $v:expr) => { std::arch::x86_64::_mm512_storeu_pd($p, $v) };
    (avx512, f64, min, $a:expr, $b:expr) => { std::arch::x86_64::_mm512_min_pd($a, $b) };
    (avx512, f64, max, $a:expr, $b:expr) => { std::arch::x86_64::_mm512_max_pd($a, $b) };
    (avx512, f64, sqrt, $a:expr) => { std::arch::x86_64::_mm512_sqrt_pd($a) };
    (avx512, f64, blend, $k:expr, $a:expr, $b:expr) => { std::arch::x86_64::_mm512_mask_blend_pd($k, $b, $a) };
    (avx512, f64, mask_store, $p:expr, $k:expr, $v:expr) => { std::arch::x86_64::_mm512_mask_storeu_pd($p, $k, $v) };
    (avx512, f64, maskz_load, $p:expr, $k:expr) => { std::arch::x86_64::_mm512_maskz_loadu_pd($k, $p) };

    // --- i64 ---
    (avx512, i64, load, $p:expr) => { std::arch::x86_64::_mm512_loadu_epi64($p as *const i64) };
    (avx512, i64, store, $p:expr, $v:expr) => { std::arch::x86_64::_mm512_storeu_epi64($p as *mut i64, $v) };
    (avx512, i64, min, $a:expr, $b:expr) => { std::arch::x86_64::_mm512_min_epi64($a, $b) };
    (avx512, i64, max, $a:expr, $b:expr) => { std::arch::x86_64::_mm512_max_epi64($a, $b) };
    (avx512, i64, blend, $k:expr, $a:expr, $b:expr) => { std::arch::x86_64::_mm512_mask_blend_epi64($k, $b, $a) };
    (avx512, i64, mask_store, $p:expr, $k:expr, $v:expr) => {
        std::arch::x86_64::_mm512_mask_storeu_epi64($p as *mut i64, $k, $v)
    };
    (avx512, i64, maskz_load, $p:expr, $k:expr) => {
        std::arch::x86_64::_mm512_maskz_loadu_epi64($k, $p as *const i64)
    };

    // --- i32 / u32 ---
    (avx512, i32, min, $a:expr, $b:expr) => { std::arch::x86_64::_mm512_min_epi32($a, $b) };
    (avx512, i32, max, $a:expr, $b:expr) => { std::arch::x86_64::_mm512_max_epi32($a, $b) };
    (avx512, u32, min, $a:expr, $b:expr) => { std::arch::x86_64::_mm512_min_epu32($a, $b) };
    (avx512, u32, max, $a:expr, $b:expr) => { std::arch::x86_64::_mm512_max_epu32($a, $b) };
    (avx512, $int:ident, load, $p:expr) => { std::arch::x86_64::_mm512_loadu_epi32($p as *const i32) };
    (avx512, $int:ident, store, $p:expr, $v:expr) => { std::arch::x86_64::_mm512_storeu_epi32($p as *mut i32, $v) };
    (avx512, $int:ident, blend, $k:expr, $a:expr, $b:expr) => { std::arch::x86_64::_mm512_mask_blend_epi32($k, $b, $a) };
    (avx512, $int:ident, mask_store, $p:expr, $k:expr, $v:expr) => {
        std::arch::x86_64::_mm512_mask_storeu_epi32($p as *mut i32, $k, $v)
    };
    (avx512, $int:ident, maskz_load, $p:expr, $k:expr) => {
        std::arch::x86_64::_mm512_maskz_loadu_epi32($k, $p as *const i32)
    };

    // ========================================================================
    // NEON (aarch64, 128-bit): f32 x4, i32 x4, u32 x4.
    // ========================================================================

    (neon, mask, load, $p:expr) => { std::arch::aarch64::vld1q_u32($p as *const u32) };

    (neon, f32, load, $p:expr) => { std::arch::aarch64::vld1q_f32($p) };
    (neon, f32, store, $p:expr, $v:expr) => { std::arch::aarch64::vst1q_f32($p, $v) };
    (neon, f32, min, $a:expr, $b:expr) => { std::arch::aarch64::vminq_f32($a, $b) };
    (neon, f32, max, $a:expr, $b:expr) => { std::arch::aarch64::vmaxq_f32($a, $b) };
    (neon, f32, sqrt, $a:expr) => { std::arch::aarch64::vsqrtq_f32($a) };
    (neon, f32, select_bits, $k:expr, $a:expr, $b:expr) => { std::arch::aarch64::vbslq_f32($k, $a, $b) };

    (neon, i32, load, $p:expr) => { std::arch::aarch64::vld1q_s32($p) };
    (neon, i32, store, $p:expr, $v:expr) => { std::arch::aarch64::vst1q_s32($p, $v) };
    (neon, i32, min, $a:expr, $b:expr) => { std::arch::aarch64::vminq_s32($a, $b) };
    (neon, i32, max, $a:expr, $b:expr) => { std::arch::aarch64::vmaxq_s32($a, $b) };
    (neon, i32, select_bits, $k:expr, $a:expr, $b:expr) => { std::arch::aarch64::vbslq_s32($k, $a, $b) };

    (neon, u32, load, $p:expr) => { std::arch::aarch64::vld1q_u32($p) };
    (neon, u32, store, $p:expr, $v:expr) => { std::arch::aarch64::vst1q_u32($p, $v) };
    (neon, u32, min, $a:expr, $b:expr) => { std::arch::aarch64::vminq_u32($a, $b) };
    (neon, u32, max, $a:expr, $b:expr) => { std::arch::aarch64::vmaxq_u32($a, $b) };
    (neon, u32, select_bits, $k:expr, $a:expr, $b:expr) => { std::arch::aarch64::vbslq_u32($k, $a, $b) };
}
