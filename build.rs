use std::process::Command;

fn main() {
    let rustc_version = Command::new("rustc")
        .arg("--version")
        .output()
        .ok()
        .and_then(|o| String::from_utf8(o.stdout).ok())
        .unwrap_or_else(|| "unknown".to_string());

    println!(
        "cargo:rustc-env=ITEM_SERVER_RUSTC_VERSION={}",
        rustc_version.trim()
    );

    // Report the MongoDB driver version resolved in the lock file, if any
    let driver_version = read_dep_version("mongodb").unwrap_or_else(|| "unknown".into());
    println!("cargo:rustc-env=ITEM_SERVER_MONGODB_DRIVER_VERSION={driver_version}");
    println!("cargo:rerun-if-changed=Cargo.lock");
}

fn read_dep_version(crate_name: &str) -> Option<String> {
    let lock_contents = std::fs::read_to_string("Cargo.lock").ok()?;
    let mut found = false;
    for line in lock_contents.lines() {
        if line == format!("name = \"{crate_name}\"") {
            found = true;
            continue;
        }
        if found && line.starts_with("version = ") {
            return Some(
                line.trim_start_matches("version = ")
                    .trim_matches('"')
                    .to_string(),
            );
        }
        if found && line.trim().is_empty() {
            break;
        }
    }
    None
}
