use std::time::{SystemTime, UNIX_EPOCH};

fn main() {
    // Logged at startup so a stale binary is easy to spot.
    let build_id = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs().to_string())
        .unwrap_or_else(|_| "dev".to_string());
    println!("cargo:rustc-env=CLUB_PORTAL_BUILD_ID={}", build_id);
}
