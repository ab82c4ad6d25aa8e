//! Image options and the rules that govern their combination.

use std::path::PathBuf;

use tracing::debug;

use super::error::RequestError;

/// Image service used when no `--base-url` is given.
pub const DEFAULT_BASE_URL: &str = "https://picsum.photos";

/// Lowest accepted `--blurlevel`.
pub const MIN_BLUR_LEVEL: i32 = 1;

/// Highest accepted `--blurlevel`.
pub const MAX_BLUR_LEVEL: i32 = 10;

/// Every flag that shapes a single invocation.
///
/// Built once from the command line, checked as a whole by
/// [`validate`](Self::validate), then only read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageOptions {
    /// Root of the image service, without a trailing slash.
    pub base_url: String,
    /// Specific stock photo to request.
    pub image_id: Option<String>,
    /// Seed from which the service derives a stable image.
    pub seed: Option<String>,
    /// Ask the service for a grayscale image.
    pub grayscale: bool,
    /// Ask the service for its default blur.
    pub blur: bool,
    /// Explicit blur strength; `0` means unset.
    pub blur_level: i32,
    /// Suppress progress and completion messages.
    pub quiet: bool,
    /// Save to this path instead of the generated filename.
    pub output: Option<PathBuf>,
    /// Overwrite an existing file without asking.
    pub force: bool,
}

impl Default for ImageOptions {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            image_id: None,
            seed: None,
            grayscale: false,
            blur: false,
            blur_level: 0,
            quiet: false,
            output: None,
            force: false,
        }
    }
}

/// Which image the service should pick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selector<'a> {
    /// Any random image.
    Random,
    /// One specific photo by id.
    Id(&'a str),
    /// A photo chosen deterministically from a seed.
    Seed(&'a str),
}

impl ImageOptions {
    /// Checks the option combination and returns the normalized options.
    ///
    /// A non-zero blur level replaces the plain blur flag rather than
    /// stacking with it, so `blur` is cleared whenever `blur_level > 0`.
    ///
    /// # Errors
    ///
    /// - [`RequestError::BlurLevelOutOfRange`] if `blur_level` is non-zero
    ///   and outside `MIN_BLUR_LEVEL..=MAX_BLUR_LEVEL`
    /// - [`RequestError::ConflictingSelectors`] if both an id and a seed are set
    pub fn validate(mut self) -> Result<Self, RequestError> {
        if self.blur_level != 0 && !(MIN_BLUR_LEVEL..=MAX_BLUR_LEVEL).contains(&self.blur_level) {
            return Err(RequestError::blur_level(
                self.blur_level,
                MIN_BLUR_LEVEL,
                MAX_BLUR_LEVEL,
            ));
        }

        if self.blur_level > 0 && self.blur {
            debug!(blur_level = self.blur_level, "blur level supersedes --blur");
            self.blur = false;
        }

        if non_empty(self.image_id.as_deref()).is_some() && non_empty(self.seed.as_deref()).is_some()
        {
            return Err(RequestError::ConflictingSelectors);
        }

        Ok(self)
    }

    /// Returns the image selector. A seed wins over an id.
    #[must_use]
    pub fn selector(&self) -> Selector<'_> {
        if let Some(seed) = non_empty(self.seed.as_deref()) {
            Selector::Seed(seed)
        } else if let Some(id) = non_empty(self.image_id.as_deref()) {
            Selector::Id(id)
        } else {
            Selector::Random
        }
    }
}

/// Validates the number of positional dimension arguments.
///
/// # Errors
///
/// Returns [`RequestError::InvalidArgumentCount`] unless there are exactly
/// one or two arguments.
pub fn validate_args<S: AsRef<str>>(args: &[S]) -> Result<(), RequestError> {
    match args.len() {
        1 | 2 => Ok(()),
        count => Err(RequestError::argument_count(count)),
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}
