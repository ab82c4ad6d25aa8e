//! Request construction for the image service.
//!
//! This module turns positional dimension arguments and an [`ImageOptions`]
//! value into an [`ImageRequest`]: the URL to GET and the default filename
//! to save it under. Nothing here touches the network or the filesystem.
//!
//! # Example
//!
//! ```
//! use picsum_core::request::{ImageOptions, build};
//!
//! let options = ImageOptions {
//!     seed: Some("picsum".to_string()),
//!     grayscale: true,
//!     blur_level: 8,
//!     ..ImageOptions::default()
//! };
//! let args = ["300".to_string(), "200".to_string()];
//! let request = build(&args, &options.validate().unwrap()).unwrap();
//!
//! assert_eq!(
//!     request.url(),
//!     "https://picsum.photos/seed/picsum/300/200?grayscale&blur=8"
//! );
//! assert_eq!(request.filename(), "seed_picsum_300x200_gray_blur8.jpg");
//! ```

mod builder;
mod error;
mod options;

pub use builder::{ImageRequest, build};
pub use error::{ArgPosition, RequestError};
pub use options::{
    DEFAULT_BASE_URL, ImageOptions, MAX_BLUR_LEVEL, MIN_BLUR_LEVEL, Selector, validate_args,
};
