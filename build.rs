//! Embeds the build's commit as `GIT_HASH`, reported by `/v1/status`.

use std::process::Command;

const HASH_OVERRIDE_VAR: &str = "MUSIC_ASSISTANT_GIT_HASH";

fn git_short_hash() -> Option<String> {
    let output = Command::new("git")
        .args(["rev-parse", "--short", "HEAD"])
        .output()
        .ok()
        .filter(|o| o.status.success())?;
    let hash = String::from_utf8(output.stdout).ok()?;
    let hash = hash.trim();
    (!hash.is_empty()).then(|| hash.to_string())
}

fn main() {
    // Source tarballs and container builds have no .git directory.
    let hash = std::env::var(HASH_OVERRIDE_VAR)
        .ok()
        .filter(|h| !h.trim().is_empty())
        .or_else(git_short_hash)
        .unwrap_or_else(|| "unknown".to_string());

    println!("cargo:rustc-env=GIT_HASH={}", hash);
    println!("cargo:rerun-if-env-changed={}", HASH_OVERRIDE_VAR);
    println!("cargo:rerun-if-changed=.git/HEAD");
    println!("cargo:rerun-if-changed=.git/refs/heads/");
}
