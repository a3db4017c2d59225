//! Build script to capture build information and backend configuration.
//!
//! Sets environment variables at compile time:
//! - BUILD_HOST: hostname of the build machine
//! - BUILD_COMMIT: short git commit SHA
//! - BUILD_TIMESTAMP: ISO 8601 timestamp
//!
//! Copies the backend's `aws-exports.json` (path from `GIFS_AWS_EXPORTS`,
//! default `aws-exports.json` next to this file) into `OUT_DIR` so the app
//! can embed it. A missing file embeds `{}`, which the app reports at startup.

use std::path::PathBuf;
use std::process::Command;
use std::{env, fs};

fn command_output(program: &str, args: &[&str]) -> String {
    Command::new(program)
        .args(args)
        .output()
        .map(|o| String::from_utf8_lossy(&o.stdout).trim().to_string())
        .unwrap_or_else(|_| "unknown".to_string())
}

fn main() {
    let hostname = command_output("hostname", &["-s"]);
    let commit = command_output("git", &["rev-parse", "--short", "HEAD"]);
    let timestamp = command_output("date", &["-u", "+%Y-%m-%dT%H:%M:%SZ"]);

    println!("cargo:rustc-env=BUILD_HOST={}", hostname);
    println!("cargo:rustc-env=BUILD_COMMIT={}", commit);
    println!("cargo:rustc-env=BUILD_TIMESTAMP={}", timestamp);

    let manifest_dir = PathBuf::from(env::var("CARGO_MANIFEST_DIR").unwrap());
    let exports_path = env::var("GIFS_AWS_EXPORTS")
        .map(PathBuf::from)
        .unwrap_or_else(|_| manifest_dir.join("aws-exports.json"));
    let exports = fs::read_to_string(&exports_path).unwrap_or_else(|_| {
        println!(
            "cargo:warning=no backend config at {}, embedding an empty one",
            exports_path.display()
        );
        "{}".to_string()
    });

    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());
    fs::write(out_dir.join("aws-exports.json"), exports).unwrap();

    println!("cargo:rerun-if-env-changed=GIFS_AWS_EXPORTS");
    println!("cargo:rerun-if-changed={}", exports_path.display());
    println!("cargo:rerun-if-changed=../.git/HEAD");
    println!("cargo:rerun-if-changed=build.rs");
}
