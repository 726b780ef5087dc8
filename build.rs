//! Build script for the spoxy CLI.
//!
//! Copies the `.env.example` configuration template into the user's local
//! data directory, next to the `.env` file the binary reads at startup:
//! - Linux: `~/.local/share/spoxy/.env.example`
//! - macOS: `~/Library/Application Support/spoxy/.env.example`
//! - Windows: `%LOCALAPPDATA%/spoxy/.env.example`
//!
//! The copy is a convenience only. Any failure (missing template, read-only
//! or sandboxed home directory) is reported as a cargo warning and never
//! fails the build.

use std::{env, fs, path::PathBuf};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("cargo:rerun-if-changed=.env.example");

    let manifest_dir = PathBuf::from(env::var("CARGO_MANIFEST_DIR")?);
    let env_example_path = manifest_dir.join(".env.example");

    if !env_example_path.is_file() {
        println!(
            "cargo:warning=.env.example not found at {}",
            env_example_path.display()
        );
        return Ok(());
    }

    let Some(mut out_dir) = dirs::data_local_dir() else {
        return Ok(());
    };
    out_dir.push("spoxy");

    let copied = fs::create_dir_all(&out_dir)
        .and_then(|_| fs::copy(&env_example_path, out_dir.join(".env.example")));
    if let Err(e) = copied {
        println!(
            "cargo:warning=cannot copy .env.example to {}: {}",
            out_dir.display(),
            e
        );
    }

    Ok(())
}
