//! scribe-common: what the composer and the app share about the blog API.
//!
//! - `NewPost` / `CreatedPost` and the multipart field names
//! - `PostApi` trait and its reqwest-backed `HttpPostApi`
//! - `ApiError` with user-facing messages, `ScribeError` for setup failures

pub mod client;
pub mod config;
pub mod error;
pub mod post;
pub mod session;

pub use crate::client::{HttpPostApi, PostApi};
pub use crate::config::ClientConfig;
pub use crate::error::{ApiError, ScribeError, SerDeError};
pub use crate::post::{
    ApiId, CreatedPost, ImageFile, NewPost, PartValue, fields, mime_for_file_name,
    post_path,
};
pub use crate::session::CurrentUser;
pub use bytes::Bytes;
pub use smol_str::SmolStr;
