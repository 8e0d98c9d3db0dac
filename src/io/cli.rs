//! Command-line interface for solving one or many puzzle input files

use crate::algorithm::answers::{Answers, part1, part2};
use crate::algorithm::solver::ArrangementSolver;
use crate::io::configuration::{INPUT_EXTENSION, OUTPUT_SUFFIX};
use crate::io::error::{ReassemblyError, Result};
use crate::io::image::export_image_as_png;
use crate::io::input::read_input;
use crate::io::progress::ProgressManager;
use crate::spatial::TileSet;
use clap::Parser;
use log::{LevelFilter, info, warn};
use std::path::{Path, PathBuf};
use std::time::Instant;

#[derive(Parser)]
#[command(name = "tilestitch")]
#[command(
    author,
    version,
    about = "Reassemble scrambled image tiles by matching their borders"
)]
/// Command-line arguments for the reassembly tool
pub struct Cli {
    /// Puzzle input file or directory of `.txt` inputs
    #[arg(value_name = "TARGET")]
    pub target: PathBuf,

    /// Suppress progress output and all but error logging
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Export the reassembled image as PNG next to each input
    #[arg(short, long)]
    pub export: bool,

    /// Overwrite exported images that already exist
    #[arg(short, long)]
    pub no_skip: bool,
}

impl Cli {
    /// Check if existing exports should be left alone
    pub const fn skip_existing(&self) -> bool {
        !self.no_skip
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Log level selected by `--quiet` and `--verbose`
    pub const fn log_level(&self) -> LevelFilter {
        if self.quiet {
            return LevelFilter::Error;
        }
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }
}

/// Orchestrates solving of every input file with progress tracking
pub struct FileProcessor {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
    results: Vec<(PathBuf, Answers)>,
}

impl FileProcessor {
    /// Create a new file processor with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
            results: Vec::new(),
        }
    }

    /// Answers computed so far, in processing order
    pub fn results(&self) -> &[(PathBuf, Answers)] {
        &self.results
    }

    /// Solve files according to CLI arguments and print their answers
    ///
    /// # Errors
    ///
    /// Returns an error if target validation fails or any file cannot be solved
    pub fn process(&mut self) -> Result<()> {
        let files = self.collect_files()?;

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(files.len());
        }

        for (index, file) in files.iter().enumerate() {
            let answers = self.process_file(file, index)?;
            self.results.push((file.clone(), answers));
        }

        if let Some(ref pm) = self.progress_manager {
            pm.finish();
        }

        self.print_results();
        Ok(())
    }

    fn collect_files(&self) -> Result<Vec<PathBuf>> {
        let target = &self.cli.target;
        if target.is_file() {
            Ok(vec![target.clone()])
        } else if target.is_dir() {
            let read_error = |e| ReassemblyError::FileSystem {
                path: target.clone(),
                operation: "list directory",
                source: e,
            };
            let mut files = Vec::new();
            for entry in std::fs::read_dir(target).map_err(read_error)? {
                let path = entry.map_err(read_error)?.path();
                if path.is_file()
                    && path.extension().and_then(|s| s.to_str()) == Some(INPUT_EXTENSION)
                {
                    files.push(path);
                }
            }
            files.sort();
            Ok(files)
        } else {
            Err(ReassemblyError::FileSystem {
                path: target.clone(),
                operation: "open target",
                source: std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    "target must be an input file or directory",
                ),
            })
        }
    }

    fn process_file(&mut self, input_path: &Path, index: usize) -> Result<Answers> {
        let start_time = Instant::now();
        let input = read_input(input_path)?;
        let tiles = TileSet::parse(&input)?;
        info!("{}: loaded {} tiles", input_path.display(), tiles.len());

        let corner_product = part1(&tiles)?;

        let mut solver = ArrangementSolver::new(tiles)?;
        if let Some(ref mut pm) = self.progress_manager {
            pm.start_file(index, input_path, solver.total());
        }
        while solver.place_next()? {
            if let Some(ref mut pm) = self.progress_manager {
                pm.update_placement(index, solver.placed_count());
            }
        }
        let arrangement = solver.finish()?;
        let scan = part2(&arrangement)?;

        if self.cli.export {
            let output_path = Self::get_output_path(input_path);
            if self.cli.skip_existing() && output_path.exists() {
                warn!("Skipping export: {} (output exists)", output_path.display());
            } else {
                export_image_as_png(&scan.image, &scan.covered, &output_path)?;
                info!("exported {}", output_path.display());
            }
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.complete_file(index);
        }
        info!(
            "{}: {} monsters, solved in {:?}",
            input_path.display(),
            scan.monsters,
            start_time.elapsed()
        );

        Ok(Answers {
            part1: corner_product,
            part2: scan.roughness,
        })
    }

    // Answers are the program's output
    #[allow(clippy::print_stdout)]
    fn print_results(&self) {
        let labelled = self.results.len() > 1;
        for (path, answers) in &self.results {
            if labelled {
                println!("{}:", path.display());
            }
            println!("Part 1: {}", answers.part1);
            println!("Part 2: {}", answers.part2);
        }
    }

    /// Path of the exported image for an input file
    pub fn get_output_path(input_path: &Path) -> PathBuf {
        let stem = input_path.file_stem().unwrap_or_default();
        let output_name = format!("{}{OUTPUT_SUFFIX}.png", stem.to_string_lossy());

        if let Some(parent) = input_path.parent() {
            parent.join(output_name)
        } else {
            PathBuf::from(output_name)
        }
    }
}
