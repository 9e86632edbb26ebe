//! Build metadata embedded by `build.rs`.

include!(concat!(env!("OUT_DIR"), "/build_info.rs"));

/// Package version with commit and build date, e.g. `0.1.0 (a1b2c3d 2026-10-16)`.
pub fn version_string() -> String {
    format!(
        "{} ({} {})",
        env!("CARGO_PKG_VERSION"),
        BUILD_COMMIT,
        BUILD_DATE
    )
}
