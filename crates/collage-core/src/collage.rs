//! The collage pipeline: list, tile, paste, trim, save.

use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::canvas::Canvas;
use crate::config::{CollageConfig, UnreadablePolicy, MAX_CANVAS_BYTES};
use crate::decode::{load_image, DecodeError, DecodedImage, FilterType};
use crate::encode::write_image;
use crate::error::{CollageError, Result};
use crate::layout::{FillOrder, GridLayout};
use crate::source::list_images;
use crate::transform::make_tile;

/// What a successful run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollageSummary {
    /// Where the collage was written.
    pub output: PathBuf,
    /// Grid used for the tiles that made it in.
    pub layout: GridLayout,
    /// Files left out under [`UnreadablePolicy::Skip`].
    pub skipped: Vec<PathBuf>,
    /// Final image width in pixels.
    pub width: u32,
    /// Final image height in pixels.
    pub height: u32,
}

/// Build a collage from `config.input_dir` and write it to `config.output`.
///
/// Nothing is written unless every step before encoding succeeds.
///
/// # Errors
///
/// - `InvalidConfig` for out-of-range settings
/// - `InputUnavailable` if the folder cannot be listed
/// - `NoImagesFound` if no eligible (or, when skipping, readable) image exists
/// - `InvalidCropRequest` if `remove_rows` would leave no rows
/// - `UnreadableImage` for a bad file under [`UnreadablePolicy::Abort`]
/// - `WriteFailure` if the collage cannot be encoded or written
pub fn build_collage(config: &CollageConfig) -> Result<CollageSummary> {
    config.validate()?;

    let sources = list_images(&config.input_dir)?;
    info!(
        "Found {} image(s) in {}",
        sources.len(),
        config.input_dir.display()
    );
    let planned = plan_layout(sources.len(), config)?;
    debug!(
        "Grid: {} column(s) x {} row(s)",
        planned.num_cols, planned.num_rows
    );

    let mut tiles = Vec::with_capacity(sources.len());
    let mut skipped = Vec::new();
    for (index, source) in sources.iter().enumerate() {
        info!("Processing {} of {}", index + 1, sources.len());
        match load_tile(&source.path, config.tile_size, config.resize_filter) {
            Ok(tile) => tiles.push(tile),
            Err(err) if config.unreadable == UnreadablePolicy::Skip => {
                warn!("Skipping {}: {}", source.path.display(), err);
                skipped.push(source.path.clone());
            }
            Err(err) => {
                return Err(CollageError::UnreadableImage {
                    path: source.path.clone(),
                    source: err,
                });
            }
        }
    }

    let layout = if skipped.is_empty() {
        planned
    } else {
        plan_layout(tiles.len(), config)?
    };

    let canvas = compose(
        &tiles,
        &layout,
        config.tile_size,
        config.fill_order,
        config.remove_rows,
    )?;
    let (width, height) = (canvas.width(), canvas.height());
    let image = canvas.into_image();

    info!("Saving collage to {}", config.output.display());
    write_image(&config.output, &image, config.jpeg_quality).map_err(|source| {
        CollageError::WriteFailure {
            path: config.output.clone(),
            source,
        }
    })?;

    Ok(CollageSummary {
        output: config.output.clone(),
        layout,
        skipped,
        width,
        height,
    })
}

/// Paste `tiles` into a fresh canvas and trim its trailing rows.
///
/// Tile `i` goes to `layout.origin(i)`. Tiles beyond `layout.num_images`
/// are ignored.
///
/// # Errors
///
/// Returns `InvalidCropRequest` if `remove_rows >= layout.num_rows`, and
/// `InvalidConfig` if the canvas would exceed [`MAX_CANVAS_BYTES`].
pub fn compose(
    tiles: &[DecodedImage],
    layout: &GridLayout,
    tile_size: u32,
    fill_order: FillOrder,
    remove_rows: u32,
) -> Result<Canvas> {
    let side = canvas_side(layout, tile_size)?;
    let final_height = layout.trimmed_height(tile_size, remove_rows)?;

    let mut canvas = Canvas::new(side);
    for (index, tile) in (0..layout.num_images).zip(tiles) {
        let (x, y) = layout.origin(index, tile_size, fill_order);
        debug!("Placing tile {} at ({}, {})", index, x, y);
        canvas.paste(tile, x, y);
    }

    if layout.has_partial_last_row() {
        canvas.crop_height(layout.num_rows * tile_size);
    }
    debug!("Removing {} trailing row(s)", remove_rows);
    canvas.crop_height(final_height);

    Ok(canvas)
}

/// Decode one photo and turn it into a tile.
fn load_tile(
    path: &Path,
    tile_size: u32,
    filter: FilterType,
) -> std::result::Result<DecodedImage, DecodeError> {
    let image = load_image(path)?;
    debug!(
        "Cropping and resizing {} ({}x{})",
        path.display(),
        image.width,
        image.height
    );
    make_tile(&image, tile_size, filter)
}

/// Grid for `count` images, checked against the configured crop.
fn plan_layout(count: usize, config: &CollageConfig) -> Result<GridLayout> {
    if count == 0 {
        return Err(CollageError::NoImagesFound {
            dir: config.input_dir.clone(),
        });
    }

    let count = u32::try_from(count).map_err(|_| CollageError::InvalidConfig {
        reason: format!("too many images ({count})"),
    })?;
    let layout = GridLayout::for_count(count)?;

    canvas_side(&layout, config.tile_size)?;
    layout.trimmed_height(config.tile_size, config.remove_rows)?;
    Ok(layout)
}

/// Canvas side for `layout`, refused when the RGB buffer would not fit in
/// [`MAX_CANVAS_BYTES`].
fn canvas_side(layout: &GridLayout, tile_size: u32) -> Result<u32> {
    layout
        .canvas_side(tile_size)
        .filter(|&side| u64::from(side) * u64::from(side) * 3 <= MAX_CANVAS_BYTES)
        .ok_or_else(|| CollageError::InvalidConfig {
            reason: format!(
                "a {}x{} grid of {tile_size}px tiles is too large",
                layout.num_cols, layout.num_rows
            ),
        })
}
