//! Build script for fan-panel.

use std::{env, fs, path::PathBuf};

fn main() {
    // Put `memory.x` on the linker search path for cortex-m-rt's `link.x`.
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());
    fs::copy("memory.x", out_dir.join("memory.x")).expect("Failed to copy memory.x to OUT_DIR");
    println!("cargo:rustc-link-search={}", out_dir.display());

    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-changed=build.rs");
}
