use std::path::PathBuf;

use clap::{value_parser, Parser, ValueEnum};

use collage_core::config::{
    DEFAULT_INPUT_DIR, DEFAULT_JPEG_QUALITY, DEFAULT_OUTPUT_FILE, DEFAULT_REMOVE_ROWS,
    DEFAULT_TILE_SIZE,
};
use collage_core::decode::FilterType;
use collage_core::{CollageConfig, FillOrder, UnreadablePolicy};

/// Tile placement order as spelled on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FillOrderArg {
    /// Images run down each column before moving right
    ColumnMajor,
    /// Images run left to right across each row
    RowMajor,
}

impl From<FillOrderArg> for FillOrder {
    fn from(arg: FillOrderArg) -> Self {
        match arg {
            FillOrderArg::ColumnMajor => FillOrder::ColumnMajor,
            FillOrderArg::RowMajor => FillOrder::RowMajor,
        }
    }
}

/// Resampling filter as spelled on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FilterArg {
    Nearest,
    Bilinear,
    Lanczos3,
}

impl From<FilterArg> for FilterType {
    fn from(arg: FilterArg) -> Self {
        match arg {
            FilterArg::Nearest => FilterType::Nearest,
            FilterArg::Bilinear => FilterType::Bilinear,
            FilterArg::Lanczos3 => FilterType::Lanczos3,
        }
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "collage",
    version,
    about = "Build a square photo grid collage from a folder of images"
)]
pub struct CliArgs {
    /// Folder containing the .jpg/.png photos
    #[arg(long, value_name = "FOLDER_PATH", default_value = DEFAULT_INPUT_DIR)]
    pub input: PathBuf,

    /// Output file; the extension picks the format
    #[arg(long, value_name = "FILENAME", default_value = DEFAULT_OUTPUT_FILE)]
    pub filename: PathBuf,

    /// Number of rows to remove from the bottom of the collage
    #[arg(long, value_name = "ROWS", default_value_t = DEFAULT_REMOVE_ROWS)]
    pub remove: u32,

    /// Size of each image in the collage in pixels
    #[arg(
        long,
        value_name = "COLLAGE_SIZE",
        default_value_t = DEFAULT_TILE_SIZE,
        value_parser = value_parser!(u32).range(1..)
    )]
    pub size: u32,

    /// Enable debug logging
    #[arg(short, long, default_value_t = false)]
    pub debug: bool,

    /// JPEG quality (1-100) when writing a JPEG
    #[arg(
        long,
        default_value_t = DEFAULT_JPEG_QUALITY,
        value_parser = value_parser!(u8).range(1..=100)
    )]
    pub quality: u8,

    /// Leave out photos that fail to decode instead of stopping
    #[arg(long, default_value_t = false)]
    pub skip_unreadable: bool,

    /// How photos are placed on the grid
    #[arg(long, value_enum, default_value_t = FillOrderArg::ColumnMajor)]
    pub fill_order: FillOrderArg,

    /// Resampling filter used to scale photos into tiles
    #[arg(long, value_enum, default_value_t = FilterArg::Lanczos3)]
    pub filter: FilterArg,
}

impl CliArgs {
    pub fn to_config(&self) -> CollageConfig {
        CollageConfig {
            input_dir: self.input.clone(),
            output: self.filename.clone(),
            tile_size: self.size,
            remove_rows: self.remove,
            resize_filter: self.filter.into(),
            fill_order: self.fill_order.into(),
            unreadable: if self.skip_unreadable {
                UnreadablePolicy::Skip
            } else {
                UnreadablePolicy::Abort
            },
            jpeg_quality: self.quality,
        }
    }
}
