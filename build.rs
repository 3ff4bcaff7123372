fn main() {
    // Git commit hash for `speclint version` - prefer env var (set by CI) over git command
    let git_sha = std::env::var("GIT_SHA").unwrap_or_else(|_| {
        std::process::Command::new("git")
            .args(["rev-parse", "--short", "HEAD"])
            .output()
            .map(|output| String::from_utf8_lossy(&output.stdout).trim().to_string())
            .unwrap_or_else(|_| "unknown".to_string())
    });

    println!("cargo:rustc-env=GIT_SHA={}", git_sha);
}
