use std::fs;
use std::path::Path;
use std::process::Command;

/// Stamp version metadata into the binary at compile time.
fn main() {
    println!("cargo:rustc-env=CAESAR_VERSION={}", read_version());
    println!("cargo:rustc-env=CAESAR_BUILD={}", bump_build_number());
    println!("cargo:rustc-env=CAESAR_PROFILE={}", profile_name());
    println!("cargo:rustc-env=CAESAR_GIT_HASH={}", git_short_hash());

    println!("cargo:rerun-if-changed=VERSION");
    println!("cargo:rerun-if-changed=BUILD_NUMBER");
    println!("cargo:rerun-if-env-changed=PROFILE");
}

fn read_version() -> String {
    fs::read_to_string("VERSION")
        .map(|s| s.trim().to_string())
        .unwrap_or_else(|_| env!("CARGO_PKG_VERSION").to_string())
}

/// Monotonic build counter kept next to the sources.
fn bump_build_number() -> u64 {
    let path = Path::new("BUILD_NUMBER");
    let current: u64 = fs::read_to_string(path)
        .ok()
        .and_then(|s| s.trim().parse().ok())
        .unwrap_or(0);
    let next = current + 1;
    fs::write(path, next.to_string()).expect("Failed to write build number");
    next
}

fn profile_name() -> &'static str {
    match std::env::var("PROFILE").as_deref() {
        Ok("release") => "release",
        _ => "development",
    }
}

fn git_short_hash() -> String {
    Command::new("git")
        .args(["rev-parse", "--short", "HEAD"])
        .output()
        .ok()
        .filter(|o| o.status.success())
        .and_then(|o| String::from_utf8(o.stdout).ok())
        .map(|s| s.trim().to_string())
        .unwrap_or_else(|| "unknown".to_string())
}
