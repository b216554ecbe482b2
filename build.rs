//! Generates `build_info.rs` in `OUT_DIR` with the package version, the
//! source revision and the build date.

use std::env;
use std::fs;
use std::path::PathBuf;
use std::process::Command;

/// Revision of the checked-out source, or "unknown" outside a git checkout.
fn source_revision() -> String {
    if let Ok(rev) = env::var("FLAPPER_REVISION") {
        return rev;
    }
    let output = match Command::new("git")
        .args(["describe", "--always", "--dirty", "--abbrev=8"])
        .output()
    {
        Ok(output) if output.status.success() => output,
        _ => return "unknown".to_string(),
    };
    let rev = String::from_utf8_lossy(&output.stdout).trim().to_string();
    if rev.is_empty() {
        "unknown".to_string()
    } else {
        rev
    }
}

/// Build date, honouring `SOURCE_DATE_EPOCH` for reproducible builds.
fn build_date() -> String {
    let now = env::var("SOURCE_DATE_EPOCH")
        .ok()
        .and_then(|secs| secs.parse::<i64>().ok())
        .and_then(|secs| chrono::DateTime::from_timestamp(secs, 0))
        .unwrap_or_else(chrono::Utc::now);
    now.format("%Y-%m-%d").to_string()
}

fn main() {
    let version = env::var("CARGO_PKG_VERSION").unwrap_or_default();
    let contents = format!(
        "pub const VERSION: &str = {:?};\npub const REVISION: &str = {:?};\npub const BUILD_DATE: &str = {:?};\n",
        version,
        source_revision(),
        build_date()
    );

    let out_dir = PathBuf::from(env::var_os("OUT_DIR").unwrap_or_default());
    if let Err(err) = fs::write(out_dir.join("build_info.rs"), contents) {
        panic!("cannot write build_info.rs: {}", err);
    }

    println!("cargo:rerun-if-changed=.git/HEAD");
    println!("cargo:rerun-if-changed=.git/index");
    println!("cargo:rerun-if-env-changed=FLAPPER_REVISION");
    println!("cargo:rerun-if-env-changed=SOURCE_DATE_EPOCH");
}
