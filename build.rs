//! Build script: turn the target's instruction-set features into `simd_*` cfgs.
//!
//! The library never queries the CPU at runtime. Every dispatch decision is a
//! `#[cfg(simd_*)]` on a trait impl, and this script decides which of those
//! cfgs exist for the current compilation. Tiers are cumulative: a tier is only
//! emitted when every tier below it is emitted too, so a crate feature that
//! removes a low tier removes everything above it.

use std::env;

const TIER_CFGS: &[&str] = &[
    "simd_sse2",
    "simd_sse41",
    "simd_avx",
    "simd_avx2",
    "simd_avx512f",
    "simd_avx512vl",
    "simd_wide_only",
    "simd_neon",
];

fn feature_enabled(name: &str) -> bool {
    let key = format!("CARGO_FEATURE_{}", name.to_uppercase().replace('-', "_"));
    env::var_os(key).is_some()
}

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    for cfg in TIER_CFGS {
        println!("cargo:rustc-check-cfg=cfg({cfg})");
    }

    let arch = env::var("CARGO_CFG_TARGET_ARCH").unwrap_or_default();
    let features = env::var("CARGO_CFG_TARGET_FEATURE").unwrap_or_default();
    let has = |f: &str| features.split(',').any(|x| x == f);

    if feature_enabled("force-scalar") {
        return;
    }

    let mut tiers: Vec<&str> = Vec::new();
    match arch.as_str() {
        "x86_64" => {
            let no_avx = feature_enabled("no-avx");
            let no_avx2 = no_avx || feature_enabled("no-avx2");
            let no_avx512 = no_avx2 || feature_enabled("no-avx512");

            let sse2 = has("sse") && has("sse2");
            let sse41 = sse2 && has("ssse3") && has("sse4.1");
            let avx = sse41 && has("avx") && !no_avx;
            let avx2 = avx && has("avx2") && !no_avx2;
            // `no-avx2` removes AVX-512 with it, so `simd_wide_only` below only
            // ever reflects a target that really lacks AVX-512VL.
            let avx512f = avx2 && has("avx512f") && !no_avx512;
            let avx512vl = avx512f && has("avx512vl");

            for (on, cfg) in [
                (sse2, "simd_sse2"),
                (sse41, "simd_sse41"),
                (avx, "simd_avx"),
                (avx2, "simd_avx2"),
                (avx512f, "simd_avx512f"),
                (avx512vl, "simd_avx512vl"),
                (avx512f && !avx512vl, "simd_wide_only"),
            ] {
                if on {
                    tiers.push(cfg);
                }
            }
        }
        "aarch64" => {
            if has("neon") {
                tiers.push("simd_neon");
            }
        }
        _ => {}
    }

    for cfg in tiers {
        println!("cargo:rustc-cfg={cfg}");
    }
}
