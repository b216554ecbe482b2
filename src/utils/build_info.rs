//! Version details baked in by `build.rs`.

include!(concat!(env!("OUT_DIR"), "/build_info.rs"));

/// One-line version string for `--version`.
pub fn version_line() -> String {
    format!("flapper {} ({}, built {})", VERSION, REVISION, BUILD_DATE)
}
