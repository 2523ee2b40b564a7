//! Build script for the storefront crate.
//!
//! Fingerprints `static/css/main.css` so the page can reference a
//! content-addressed copy that is safe to cache forever.

use std::env;
use std::fs;
use std::path::Path;

use sha2::{Digest, Sha256};

/// Hex digits of the SHA-256 kept in the file name.
const HASH_LEN: usize = 8;

fn main() {
    let manifest_dir =
        env::var("CARGO_MANIFEST_DIR").expect("CARGO_MANIFEST_DIR must be set by Cargo");
    let static_dir = Path::new(&manifest_dir).join("static");
    let css_path = static_dir.join("css/main.css");

    println!("cargo:rerun-if-changed={}", css_path.display());

    let Ok(content) = fs::read(&css_path) else {
        println!("cargo:warning=main.css not found, serving without fingerprint");
        println!("cargo:rustc-env=CSS_HASH=");
        return;
    };

    let digest = format!("{:x}", Sha256::digest(&content));
    let short = digest.get(..HASH_LEN).unwrap_or(&digest);
    println!("cargo:rustc-env=CSS_HASH={short}");

    let derived = static_dir.join("css/derived");
    fs::create_dir_all(&derived).expect("Failed to create static/css/derived");
    fs::copy(&css_path, derived.join(format!("main.{short}.css")))
        .expect("Failed to write fingerprinted main.css");
}
