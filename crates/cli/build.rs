use std::env;
use std::fs;
use std::path::PathBuf;

/// Sets FLAGTABLE_VERSION from the repo-root VERSION file (maintained by
/// release tooling), falling back to the Cargo.toml version.
fn main() {
    let cargo_version = env::var("CARGO_PKG_VERSION").unwrap_or_else(|_| "0.0.0".to_string());

    let version_path = env::var("CARGO_MANIFEST_DIR")
        .ok()
        .map(PathBuf::from)
        .and_then(|dir| dir.parent().and_then(|p| p.parent()).map(|root| root.join("VERSION")));

    let file_version = version_path.as_ref().and_then(|path| {
        println!("cargo:rerun-if-changed={}", path.display());
        fs::read_to_string(path).ok()
    });

    let version = match file_version.as_deref().map(str::trim) {
        Some(v) if v.starts_with(|c: char| c.is_ascii_digit()) => v.to_string(),
        _ => cargo_version.clone(),
    };

    println!("cargo:rustc-env=FLAGTABLE_VERSION={}", version);

    if version != cargo_version {
        println!(
            "cargo:warning=Using version {} from VERSION file (Cargo.toml has {})",
            version, cargo_version
        );
    }
}
