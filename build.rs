use std::process::Command;

fn git(args: &[&str]) -> String {
    Command::new("git")
        .args(args)
        .output()
        .ok()
        .filter(|o| o.status.success())
        .map(|o| String::from_utf8_lossy(&o.stdout).trim().to_string())
        .unwrap_or_default()
}

fn main() {
    // Expose HEAD's tag if it's a release commit, plus the latest tag so
    // dev builds can say what they are ahead of.
    println!(
        "cargo:rustc-env=RELEASE_VERSION={}",
        git(&["describe", "--tags", "--exact-match"])
    );
    println!(
        "cargo:rustc-env=LATEST_TAG={}",
        git(&["describe", "--tags", "--abbrev=0"])
    );
}
