fn main() {
    println!("cargo:rerun-if-env-changed=TERMRAIN_BUILD");
    println!("cargo:rerun-if-env-changed=GITHUB_SHA");

    let build_id = std::env::var("TERMRAIN_BUILD")
        .ok()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(target_id);
    println!("cargo:rustc-env=TERMRAIN_BUILD={}", build_id);

    let sha = git_short_sha()
        .or_else(|| std::env::var("GITHUB_SHA").ok().and_then(|v| short_hex(&v)))
        .unwrap_or_default();
    println!("cargo:rustc-env=TERMRAIN_GIT_SHA={}", sha);
}

fn short_hex(v: &str) -> Option<String> {
    let v = v.trim();
    let short = &v[..v.len().min(7)];
    if !short.is_empty() && short.chars().all(|c| c.is_ascii_hexdigit()) {
        Some(short.to_ascii_lowercase())
    } else {
        None
    }
}

fn git_short_sha() -> Option<String> {
    let out = std::process::Command::new("git")
        .args(["rev-parse", "--short=7", "HEAD"])
        .output()
        .ok()?;
    if !out.status.success() {
        return None;
    }
    short_hex(&String::from_utf8(out.stdout).ok()?)
}

fn target_id() -> String {
    let os = match std::env::var("CARGO_CFG_TARGET_OS").as_deref() {
        Ok("macos") => "darwin".to_string(),
        Ok(other) => other.to_string(),
        Err(_) => "unknown".to_string(),
    };
    let arch = std::env::var("CARGO_CFG_TARGET_ARCH").unwrap_or_else(|_| "unknown".to_string());
    format!("{os}-{arch}")
}
