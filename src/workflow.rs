//! End-to-end image pipeline: validate, build, fetch, save.

use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

use crate::fetch::{FetchError, HttpGetter, fetch_image};
use crate::request::{ImageOptions, RequestError, build, validate_args};
use crate::save::{SaveError, save_image};

/// Any error the pipeline can surface.
#[derive(Debug, Error)]
pub enum PicsumError {
    /// Arguments or options were rejected before any request was sent.
    #[error(transparent)]
    Request(#[from] RequestError),

    /// The image could not be fetched.
    #[error(transparent)]
    Fetch(#[from] FetchError),

    /// The image could not be written to disk.
    #[error(transparent)]
    Save(#[from] SaveError),
}

/// Fetches one image for `args` and `options` and saves it.
///
/// The destination is `options.output` when set and non-empty, otherwise the generated
/// filename in the current directory. Progress and prompts go to `output`;
/// overwrite confirmations are read from `input`. Returns the path written.
///
/// # Errors
///
/// Returns the first [`PicsumError`] encountered. Nothing is retried.
pub async fn process_image<S, G, R, W>(
    args: &[S],
    options: ImageOptions,
    getter: &G,
    input: &mut R,
    output: &mut W,
) -> Result<PathBuf, PicsumError>
where
    S: AsRef<str>,
    G: HttpGetter + ?Sized,
    R: BufRead,
    W: Write,
{
    validate_args(args)?;
    let options = options.validate()?;
    let request = build(args, &options)?;

    let destination = resolve_destination(options.output.as_deref(), request.filename());
    debug!(url = request.url(), destination = %destination.display(), "resolved request");

    let body = fetch_image(getter, request.url(), options.quiet, output).await?;
    save_image(body, &destination, options.quiet, options.force, input, output).await?;

    Ok(destination)
}

/// Resolves where the image is written. An empty override counts as unset.
fn resolve_destination(output: Option<&Path>, filename: &str) -> PathBuf {
    match output {
        Some(path) if !path.as_os_str().is_empty() => path.to_path_buf(),
        _ => PathBuf::from(filename),
    }
}
