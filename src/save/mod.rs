//! Writing the fetched image to disk.
//!
//! [`save_image`] applies the overwrite policy and then streams the body
//! into the destination file. The confirmation prompt reads from and writes
//! to caller-supplied streams so it can run without a terminal.

mod error;

use std::io::{BufRead, Write};
use std::path::Path;

use futures_util::StreamExt;
use tokio::fs::File;
use tokio::io::{AsyncWriteExt, BufWriter};
use tracing::{debug, info, instrument};

use crate::fetch::ByteStream;

pub use error::SaveError;

/// Saves `body` to `path` and returns the number of bytes written.
///
/// If `path` already exists it is overwritten silently when `force` is set;
/// otherwise the user is asked through [`confirm_overwrite`]. Writes
/// `Image saved as <path>` to `output` on success unless `quiet`.
///
/// No cleanup is attempted after a failed copy, so a partial file may
/// remain at `path`.
///
/// # Errors
///
/// - [`SaveError::PromptRead`] if the confirmation cannot be read
/// - [`SaveError::Cancelled`] if the user declines the overwrite
/// - [`SaveError::Create`] if the file cannot be created
/// - [`SaveError::Copy`] if the body stream or the write fails
#[instrument(skip_all, fields(path = %path.display(), force = force))]
pub async fn save_image<R, W>(
    body: ByteStream,
    path: &Path,
    quiet: bool,
    force: bool,
    input: &mut R,
    output: &mut W,
) -> Result<u64, SaveError>
where
    R: BufRead,
    W: Write,
{
    if tokio::fs::metadata(path).await.is_ok() {
        if force {
            info!("overwriting existing file");
        } else if !confirm_overwrite(path, input, output)? {
            return Err(SaveError::cancelled(path));
        }
    }

    let file = File::create(path)
        .await
        .map_err(|e| SaveError::create(path, e))?;

    let bytes_written = stream_to_file(file, body, path).await?;
    info!(bytes = bytes_written, "image saved");

    if !quiet {
        let _ = writeln!(output, "Image saved as {}", path.display());
    }
    Ok(bytes_written)
}

/// Asks whether the existing file at `path` may be overwritten.
///
/// Only `y` or `yes` (any case, surrounding whitespace ignored) confirm.
/// Anything else, including an empty line or end of input, declines.
///
/// # Errors
///
/// Returns [`SaveError::PromptRead`] if reading from `input` fails.
pub fn confirm_overwrite<R, W>(
    path: &Path,
    input: &mut R,
    output: &mut W,
) -> Result<bool, SaveError>
where
    R: BufRead,
    W: Write,
{
    let _ = write!(
        output,
        "File '{}' already exists. Overwrite? [y/N]: ",
        path.display()
    );
    let _ = output.flush();

    let mut answer = String::new();
    input
        .read_line(&mut answer)
        .map_err(SaveError::prompt_read)?;

    let answer = answer.trim().to_lowercase();
    let confirmed = answer == "y" || answer == "yes";
    debug!(confirmed, "overwrite prompt answered");
    Ok(confirmed)
}

/// Streams the body into `file`, returning bytes written.
async fn stream_to_file(
    file: File,
    mut body: ByteStream,
    path: &Path,
) -> Result<u64, SaveError> {
    let mut writer = BufWriter::new(file);
    let mut bytes_written: u64 = 0;

    while let Some(chunk) = body.next().await {
        let chunk = chunk.map_err(|e| SaveError::copy(path, e))?;

        writer
            .write_all(&chunk)
            .await
            .map_err(|e| SaveError::copy(path, e))?;

        bytes_written += chunk.len() as u64;
    }

    writer.flush().await.map_err(|e| SaveError::copy(path, e))?;

    Ok(bytes_written)
}
