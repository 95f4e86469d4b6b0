//! The components module contains all shared components for our app.

pub mod button;
pub use button::{Button, ButtonVariant};

mod field_error;
pub use field_error::FieldError;

mod image_picker;
pub use image_picker::ImagePicker;

pub mod rich_text;
pub use rich_text::RichTextEditor;
