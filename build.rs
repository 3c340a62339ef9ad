fn main() {
    // Embedded assets live outside src/, so tell cargo about them explicitly.
    println!("cargo:rerun-if-changed=static/style.css");
    println!("cargo:rerun-if-changed=static/site.js");
    println!("cargo:rerun-if-changed=.git/HEAD");

    let hash = std::process::Command::new("git")
        .args(["rev-parse", "--short", "HEAD"])
        .output()
        .ok()
        .filter(|o| o.status.success())
        .map(|o| String::from_utf8_lossy(&o.stdout).trim().to_string())
        .unwrap_or_default();

    println!("cargo:rustc-env=GIT_HASH={hash}");
}
