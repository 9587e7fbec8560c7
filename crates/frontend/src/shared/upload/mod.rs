//! Direct browser-to-media-host image upload.
//!
//! Files go straight to the media host's unsigned upload endpoint; the API
//! only ever sees the resulting URL. Validation happens client-side before
//! any network traffic.

pub mod cloudinary;
pub mod widget;

pub use widget::ImageUpload;
