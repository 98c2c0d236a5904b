//! Command-line interface and the interactive game session

use crate::algorithm::builder::{GreedyBuild, build_chain};
use crate::algorithm::enumerator::{Variations, find_variations_with};
use crate::algorithm::generator::generate_tiles;
use crate::algorithm::validator::diagnose;
use crate::domino::Tile;
use crate::domino::tile::render_tiles;
use crate::io::configuration::{
    DEFAULT_FACE_COUNT, DEFAULT_LOG_SPEC, MAX_FACE_COUNT, VERBOSE_LOG_SPEC,
};
use crate::io::error::{Result, invalid_input};
use crate::io::progress::SearchProgress;
use crate::io::prompt::{parse_tile_count, read_tile_count};
use crate::io::snapshot::{read_snapshot, write_snapshot};
use clap::Parser;
use rand::{SeedableRng, rngs::StdRng};
use std::io::{BufRead, Write};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "dominochain")]
#[command(
    author,
    version,
    about = "Generate random dominoes, build a chain and list every closed arrangement"
)]
/// Command-line arguments for the domino chain game
// Each flag toggles an independent output feature
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Number of dominoes to generate (prompted for when omitted)
    #[arg(short, long, value_parser = positive_count)]
    pub count: Option<usize>,

    /// Random seed for reproducible tile sets and starting tiles
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Number of distinct face values, faces run from 0 to FACES - 1
    #[arg(
        short,
        long,
        default_value_t = DEFAULT_FACE_COUNT,
        value_parser = clap::value_parser!(u8).range(1..=i64::from(MAX_FACE_COUNT))
    )]
    pub faces: u8,

    /// Directory receiving the tile set snapshot
    #[arg(short, long, default_value = ".")]
    pub output_dir: PathBuf,

    /// Replay a previously saved snapshot instead of generating tiles
    #[arg(long, value_name = "SNAPSHOT", conflicts_with = "count")]
    pub from: Option<PathBuf>,

    /// Suppress the search spinner
    #[arg(short, long)]
    pub quiet: bool,

    /// Never write a snapshot
    #[arg(short, long)]
    pub no_save: bool,

    /// Collapse identical variations produced by duplicate tiles
    #[arg(short, long)]
    pub distinct: bool,

    /// Log debug detail to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

// Rejects a non-positive count at parse time so clap reports it as a usage error
fn positive_count(text: &str) -> std::result::Result<usize, String> {
    parse_tile_count(text).map_err(|err| err.to_string())
}

impl Cli {
    /// Check if the search spinner should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Check if a valid run should be persisted
    pub const fn should_save(&self) -> bool {
        !self.no_save
    }

    /// Log specification used when `RUST_LOG` is unset
    pub const fn log_spec(&self) -> &'static str {
        if self.verbose {
            VERBOSE_LOG_SPEC
        } else {
            DEFAULT_LOG_SPEC
        }
    }
}

/// Everything one session produced
#[derive(Debug)]
pub struct SessionReport {
    /// Seed the random source was created from
    pub seed: u64,
    /// Tiles as generated or loaded
    pub tiles: Vec<Tile>,
    /// Greedy chain and its verdict
    pub build: GreedyBuild,
    /// Closed chains over the whole tile set
    pub variations: Variations,
    /// Snapshot written for this session, if any
    pub snapshot: Option<PathBuf>,
}

/// Runs one generate, build, enumerate and save pass
pub struct DominoGame {
    cli: Cli,
}

impl DominoGame {
    /// Create a game session from parsed arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Play one session, reading the tile count from `input` when needed
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `input` ends before a valid tile count is entered
    /// - The tile count or face domain is rejected by the generator
    /// - A snapshot cannot be read or written, or holds a face outside `--faces`
    /// - Writing to `output` fails
    pub fn run<R: BufRead + ?Sized, W: Write + ?Sized>(
        &self,
        input: &mut R,
        output: &mut W,
    ) -> Result<SessionReport> {
        writeln!(output, "Welcome to the Domino Chain Game!")?;

        let seed = self.cli.seed.unwrap_or_else(rand::random);
        log::info!("using seed {seed}");
        let mut rng = StdRng::seed_from_u64(seed);

        let tiles = self.collect_tiles(input, output, &mut rng)?;
        writeln!(output, "Generated Dominoes:")?;
        writeln!(output, "{}", render_tiles(&tiles))?;

        let build = build_chain(&tiles, &mut rng);
        if build.valid {
            writeln!(output, "Valid Domino Chain:")?;
            writeln!(output, "{}", build.chain)?;
        } else {
            if let Some(defect) = diagnose(build.chain.placements()) {
                log::info!("greedy chain rejected: {defect}");
            }
            writeln!(output, "Invalid Domino Chain. Unable to build a valid chain.")?;
            writeln!(output, "Partial chain: {}", build.chain)?;
        }

        let variations = self.enumerate(&tiles);
        Self::write_variations(output, &variations)?;

        let snapshot = if build.valid && self.cli.should_save() {
            let path = write_snapshot(&self.cli.output_dir, &tiles, &chrono::Local::now())?;
            writeln!(output, "Domino Chain saved successfully to {}!", path.display())?;
            Some(path)
        } else {
            None
        };

        writeln!(output, "Thank you for playing the Domino Chain Game!")?;

        Ok(SessionReport {
            seed,
            tiles,
            build,
            variations,
            snapshot,
        })
    }

    fn collect_tiles<R: BufRead + ?Sized, W: Write + ?Sized>(
        &self,
        input: &mut R,
        output: &mut W,
        rng: &mut StdRng,
    ) -> Result<Vec<Tile>> {
        if let Some(path) = &self.cli.from {
            let tiles = read_snapshot(path)?;
            if tiles.is_empty() {
                return Err(invalid_input(&path.display(), &"snapshot holds no tiles"));
            }
            let faces = self.cli.faces;
            if let Some(tile) = tiles
                .iter()
                .find(|tile| tile.side_a >= faces || tile.side_b >= faces)
            {
                return Err(invalid_input(
                    tile,
                    &format!("snapshot face outside 0..{faces}"),
                ));
            }
            return Ok(tiles);
        }

        let count = match self.cli.count {
            Some(count) => count,
            None => read_tile_count(input, output)?,
        };
        generate_tiles(count, self.cli.faces, rng)
    }

    fn enumerate(&self, tiles: &[Tile]) -> Variations {
        let mut progress = SearchProgress::new(self.cli.should_show_progress());
        let variations = find_variations_with(tiles, &mut progress);
        progress.finish();

        if self.cli.distinct {
            variations.distinct()
        } else {
            variations
        }
    }

    fn write_variations<W: Write + ?Sized>(
        output: &mut W,
        variations: &Variations,
    ) -> Result<()> {
        if variations.chains.is_empty() {
            writeln!(output, "No closed variations exist for this tile set.")?;
            return Ok(());
        }

        writeln!(output, "Possible Domino Chain Variations:")?;
        for (index, chain) in variations.chains.iter().enumerate() {
            writeln!(output, "{}. {chain}", index + 1)?;
        }
        Ok(())
    }
}
