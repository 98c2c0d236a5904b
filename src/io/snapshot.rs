//! Timestamp-named JSON snapshots of generated tile sets
//!
//! A snapshot holds the tiles exactly as generated, one `{ "side_a", "side_b" }`
//! record per tile, never the flipped placements of any chain.

use crate::domino::Tile;
use crate::io::configuration::{SNAPSHOT_EXTENSION, SNAPSHOT_PREFIX, SNAPSHOT_TIMESTAMP_FORMAT};
use crate::io::error::{DominoError, Result, WithPath};
use chrono::{DateTime, TimeZone};
use std::fmt::Display;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

/// File name for a snapshot taken at `timestamp`
pub fn snapshot_file_name<Tz: TimeZone>(timestamp: &DateTime<Tz>) -> String
where
    Tz::Offset: Display,
{
    format!(
        "{SNAPSHOT_PREFIX}{}.{SNAPSHOT_EXTENSION}",
        timestamp.format(SNAPSHOT_TIMESTAMP_FORMAT)
    )
}

/// Write `tiles` into `directory` under a timestamped name
///
/// An existing file with the same name is replaced.
///
/// # Errors
///
/// Returns an error if the file cannot be created or written
pub fn write_snapshot<Tz: TimeZone>(
    directory: &Path,
    tiles: &[Tile],
    timestamp: &DateTime<Tz>,
) -> Result<PathBuf>
where
    Tz::Offset: Display,
{
    let path = directory.join(snapshot_file_name(timestamp));
    let file = File::create(&path).with_path(&path, "create snapshot")?;
    let mut writer = BufWriter::new(file);

    serde_json::to_writer_pretty(&mut writer, tiles).map_err(|source| {
        DominoError::Serialization {
            path: path.clone(),
            source,
        }
    })?;
    writer.flush().with_path(&path, "write snapshot")?;

    log::info!("saved {} tiles to {}", tiles.len(), path.display());
    Ok(path)
}

/// Read a tile set previously written by [`write_snapshot`]
///
/// # Errors
///
/// Returns an error if the file cannot be opened or does not hold a JSON list
/// of tiles
pub fn read_snapshot(path: &Path) -> Result<Vec<Tile>> {
    let file = File::open(path).with_path(path, "open snapshot")?;
    let tiles: Vec<Tile> =
        serde_json::from_reader(BufReader::new(file)).map_err(|source| {
            DominoError::Serialization {
                path: path.to_path_buf(),
                source,
            }
        })?;

    log::info!("loaded {} tiles from {}", tiles.len(), path.display());
    Ok(tiles)
}
