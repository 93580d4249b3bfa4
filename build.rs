use std::process::Command;

fn git_cmd(args: &[&str]) -> Option<String> {
    Command::new("git")
        .args(args)
        .output()
        .ok()
        .and_then(|o| String::from_utf8(o.stdout).ok())
}

fn main() {
    let git_hash = git_cmd(&["rev-parse", "--short", "HEAD"]).unwrap_or_default();
    let is_dirty = git_cmd(&["diff"]).map(|o| !o.trim().is_empty()) == Some(true);
    println!("cargo:rustc-env=KPVIEW_GIT_HASH={}", git_hash.trim());
    println!("cargo:rustc-env=KPVIEW_GIT_DIRTY={is_dirty}");
}
