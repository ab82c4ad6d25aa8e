//! Maps dimensions and options to a request URL and default filename.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use tracing::debug;

use super::error::{ArgPosition, RequestError};
use super::options::{ImageOptions, Selector};

/// Bytes escaped in a single path segment. Unreserved characters and the
/// sub-delimiters a segment may carry (`$ & + , : ; = @`) stay literal.
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~')
    .remove(b'$')
    .remove(b'&')
    .remove(b'+')
    .remove(b',')
    .remove(b':')
    .remove(b';')
    .remove(b'=')
    .remove(b'@');

/// The URL to fetch and the filename to save it under by default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageRequest {
    url: String,
    filename: String,
}

impl ImageRequest {
    /// Full request URL, including any effect query.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Default output filename, always ending in `.jpg`.
    #[must_use]
    pub fn filename(&self) -> &str {
        &self.filename
    }
}

/// Builds the request for the given dimension arguments and options.
///
/// `args` holds either one size (square image) or a width and a height.
/// Options are expected to have passed [`ImageOptions::validate`]; this
/// function does not re-check them.
///
/// # Errors
///
/// - [`RequestError::InvalidArgumentCount`] unless there are one or two args
/// - [`RequestError::InvalidNumber`] if an argument is not an integer
pub fn build<S: AsRef<str>>(
    args: &[S],
    options: &ImageOptions,
) -> Result<ImageRequest, RequestError> {
    let (path_prefix, file_prefix) = match options.selector() {
        Selector::Seed(seed) => (
            format!("seed/{}/", utf8_percent_encode(seed, PATH_SEGMENT)),
            format!("seed_{seed}_"),
        ),
        Selector::Id(id) => (
            format!("id/{}/", utf8_percent_encode(id, PATH_SEGMENT)),
            format!("id_{id}_"),
        ),
        Selector::Random => (String::new(), String::new()),
    };

    let (dimensions, stem) = match args {
        [only] => {
            let size = parse_dimension(only.as_ref(), ArgPosition::Only)?;
            (size.to_string(), size.to_string())
        }
        [width, height] => {
            let width = parse_dimension(width.as_ref(), ArgPosition::First)?;
            let height = parse_dimension(height.as_ref(), ArgPosition::Second)?;
            (format!("{width}/{height}"), format!("{width}x{height}"))
        }
        _ => return Err(RequestError::argument_count(args.len())),
    };

    let (query, suffix) =
        effect_query_and_suffix(options.grayscale, options.blur, options.blur_level);

    let base = options.base_url.trim_end_matches('/');
    let url = format!("{base}/{path_prefix}{dimensions}{query}");
    let filename = format!("{file_prefix}{stem}{suffix}.jpg");

    debug!(%url, %filename, "built image request");
    Ok(ImageRequest { url, filename })
}

fn parse_dimension(value: &str, position: ArgPosition) -> Result<i64, RequestError> {
    value
        .parse::<i64>()
        .map_err(|_| RequestError::parse(position, value))
}

/// Returns the URL query and the filename suffix for the effect flags,
/// most specific combination first.
fn effect_query_and_suffix(grayscale: bool, blur: bool, blur_level: i32) -> (String, String) {
    match (grayscale, blur, blur_level) {
        (true, _, level) if level > 0 => (
            format!("?grayscale&blur={level}"),
            format!("_gray_blur{level}"),
        ),
        (true, true, _) => ("?grayscale&blur".to_string(), "_gray_blur".to_string()),
        (true, false, _) => ("?grayscale".to_string(), "_gray".to_string()),
        (false, _, level) if level > 0 => (format!("?blur={level}"), format!("_blur{level}")),
        (false, true, _) => ("?blur".to_string(), "_blur".to_string()),
        (false, false, _) => (String::new(), String::new()),
    }
}
