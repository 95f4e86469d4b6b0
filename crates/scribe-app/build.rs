//! Bakes `SCRIBE_*` settings into the binary.
//!
//! The wasm build has no process environment at runtime, so values from `.env`
//! (or the build environment) are re-exported for `option_env!` in `src/env.rs`.

const KEYS: &[&str] = &[
    "SCRIBE_APP_ENV",
    "SCRIBE_APP_NAME",
    "SCRIBE_API_BASE",
    "SCRIBE_POSTS_PATH",
    "SCRIBE_MAX_IMAGE_BYTES",
    "SCRIBE_DEV_USER_ID",
];

fn main() {
    if let Ok(path) = dotenvy::dotenv() {
        println!("cargo:rerun-if-changed={}", path.display());
    }
    for key in KEYS {
        println!("cargo:rerun-if-env-changed={key}");
        if let Ok(value) = std::env::var(key) {
            println!("cargo:rustc-env={key}={value}");
        }
    }
}
