//! Build-time settings, baked in by `build.rs`.
//!
//! Empty string means "not set"; `config.rs` supplies the defaults.

macro_rules! baked {
    ($name:ident) => {
        pub const $name: &str = match option_env!(stringify!($name)) {
            Some(value) => value,
            None => "",
        };
    };
}

baked!(SCRIBE_APP_ENV);
baked!(SCRIBE_APP_NAME);
baked!(SCRIBE_API_BASE);
baked!(SCRIBE_POSTS_PATH);
baked!(SCRIBE_MAX_IMAGE_BYTES);
baked!(SCRIBE_DEV_USER_ID);
