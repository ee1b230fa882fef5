use std::process::Command;

fn main() {
    // The CLI version string carries the short commit hash when available.
    let output_result = Command::new("git")
        .args(["rev-parse", "--short", "HEAD"])
        .output();

    let git_hash = match output_result {
        Ok(output) if output.status.success() => String::from_utf8(output.stdout)
            .unwrap_or_else(|_| "unknown".to_owned())
            .trim()
            .to_owned(),
        _ => "unknown".to_owned(),
    };

    println!("cargo:rustc-env=GIT_HASH={git_hash}");
    println!("cargo:rerun-if-changed=.git/HEAD");
}
