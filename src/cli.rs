//! CLI argument definitions using clap derive macros.

use std::path::PathBuf;

use clap::Parser;
use clap::builder::{OsStringValueParser, TypedValueParser};

use picsum_core::{DEFAULT_BASE_URL, ImageOptions};

/// Fetch a photo from https://picsum.photos
///
/// Give one number for a square image or a width and a height. The image is
/// saved as a generated .jpg name in the current directory unless --output
/// is set.
#[derive(Parser, Debug)]
#[command(name = "picsum")]
#[command(author, version, about)]
#[command(override_usage = "picsum [OPTIONS] <SIZE>\n       picsum [OPTIONS] <WIDTH> <HEIGHT>")]
#[command(allow_negative_numbers = true)]
pub struct Args {
    /// Size of a square image, or width and height
    #[arg(value_name = "DIMENSIONS")]
    pub dimensions: Vec<String>,

    /// Specific image ID from picsum.photos
    #[arg(short = 'i', long = "id", value_name = "ID")]
    pub id: Option<String>,

    /// Seed for a deterministic image from picsum.photos
    #[arg(short, long)]
    pub seed: Option<String>,

    /// Convert image to grayscale
    #[arg(short, long)]
    pub gray: bool,

    /// Apply blur effect to image
    #[arg(short, long)]
    pub blur: bool,

    /// Apply blur effect with a specific level 1-10 (supersedes -b)
    #[arg(short = 'B', long = "blurlevel", value_name = "LEVEL", default_value_t = 0)]
    pub blur_level: i32,

    /// Suppress output messages
    #[arg(short, long)]
    pub quiet: bool,

    /// Save to this path instead of the generated filename (empty means unset)
    #[arg(
        short,
        long,
        value_name = "PATH",
        value_parser = OsStringValueParser::new().map(PathBuf::from)
    )]
    pub output: Option<PathBuf>,

    /// Overwrite an existing file without asking
    #[arg(short, long)]
    pub force: bool,

    /// Increase log verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Image service root URL
    #[arg(
        long,
        value_name = "URL",
        default_value = DEFAULT_BASE_URL,
        value_parser = parse_base_url,
        hide = true
    )]
    pub base_url: String,
}

impl Args {
    /// Collects the flags into the options value consumed by the library.
    pub fn image_options(&self) -> ImageOptions {
        ImageOptions {
            base_url: self.base_url.clone(),
            image_id: self.id.clone(),
            seed: self.seed.clone(),
            grayscale: self.gray,
            blur: self.blur,
            blur_level: self.blur_level,
            quiet: self.quiet,
            output: self.output.clone(),
            force: self.force,
        }
    }
}

fn parse_base_url(value: &str) -> Result<String, String> {
    let url = url::Url::parse(value).map_err(|e| format!("invalid URL '{value}': {e}"))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(format!("scheme '{}' is not supported", url.scheme()));
    }
    Ok(value.trim_end_matches('/').to_string())
}
