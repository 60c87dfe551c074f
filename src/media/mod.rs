pub mod image_handle;

pub use image_handle::{ImageHandle, ImageUpload, SelectedFile};
