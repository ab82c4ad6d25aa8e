//! Picsum Core Library
//!
//! This library provides the core functionality for the `picsum` tool,
//! which fetches a random or deterministic photo from <https://picsum.photos>
//! and writes it to local disk.
//!
//! # Architecture
//!
//! The library is organized into the following modules:
//! - [`request`] - Option validation and request URL/filename construction
//! - [`fetch`] - HTTP GET behind the [`HttpGetter`] seam, with status checks
//! - [`save`] - Overwrite policy and streaming the body to disk
//! - [`workflow`] - The end-to-end validate, build, fetch, save pipeline

// Clippy lints - strict for library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod fetch;
pub mod request;
pub mod save;
mod user_agent;
pub mod workflow;

// Re-export commonly used types
pub use fetch::{ByteStream, FetchError, GetResponse, HttpClient, HttpGetter, fetch_image};
pub use request::{
    DEFAULT_BASE_URL, ImageOptions, ImageRequest, MAX_BLUR_LEVEL, MIN_BLUR_LEVEL, RequestError,
    Selector, build, validate_args,
};
pub use save::{SaveError, confirm_overwrite, save_image};
pub use workflow::{PicsumError, process_image};
