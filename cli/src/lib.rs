//! Command-line front end: reads a CSV maze, runs the solver, and writes the
//! selected outputs into an explicit output directory.

use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use log::LevelFilter;
use mazepath_paths::{SearchLimits, Solution, solve};
use mazepath_render::{
    CSV_FILE, DIAGRAM_FILE, EDGELIST_FILE, IMAGE_FILE, OutputDir, RenderOptions, TEXT_FILE,
};

/// File looked up when the input is a directory.
pub const DEFAULT_INPUT_FILE: &str = "data.csv";

#[derive(Parser, Debug, Clone)]
#[command(name = "mazepath", version, about = "Find the least-cost path through a CSV maze")]
pub struct Cli {
    /// CSV maze file, or a directory containing `data.csv`
    pub input: PathBuf,

    /// Directory the outputs are written to (created if missing)
    pub output: PathBuf,

    /// Write the annotated grid as plain text
    #[arg(long)]
    pub text: bool,

    /// Write the annotated grid as CSV
    #[arg(long)]
    pub csv: bool,

    /// Write a coloured raster image (the default when no output is chosen)
    #[arg(long)]
    pub image: bool,

    /// Write a node-link diagram of the graph
    #[arg(long)]
    pub graph: bool,

    /// Write the weighted edge list
    #[arg(long)]
    pub edgelist: bool,

    /// Print the coloured grid to the terminal
    #[arg(long)]
    pub show: bool,

    /// Produce every output
    #[arg(long)]
    pub all: bool,

    /// TrueType font used for labels
    #[arg(long, value_name = "FILE")]
    pub font: Option<PathBuf>,

    /// Pixels per cell in the raster image
    #[arg(long, value_name = "PX")]
    pub scale: Option<u32>,

    /// TOML file with render options
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Abort the search after this many milliseconds
    #[arg(long, value_name = "MS")]
    pub timeout_ms: Option<u64>,

    /// More log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    pub fn log_level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }

    /// The outputs to produce.
    pub fn outputs(&self) -> Outputs {
        if self.all {
            return Outputs {
                text: true,
                csv: true,
                image: true,
                graph: true,
                edgelist: true,
                show: true,
            };
        }
        let mut o = Outputs {
            text: self.text,
            csv: self.csv,
            image: self.image,
            graph: self.graph,
            edgelist: self.edgelist,
            show: self.show,
        };
        if o == Outputs::default() {
            o.image = true;
        }
        o
    }

    /// Config file options with command-line overrides applied.
    pub fn render_options(&self) -> Result<RenderOptions> {
        let mut opts = match &self.config {
            Some(path) => RenderOptions::load(path)?,
            None => RenderOptions::default(),
        };
        if self.font.is_some() {
            opts.font = self.font.clone();
        }
        if self.scale.is_some() {
            opts.scale = self.scale;
        }
        opts.check()?;
        Ok(opts)
    }

    pub fn limits(&self) -> SearchLimits {
        self.timeout_ms
            .map(|ms| SearchLimits::with_timeout(Duration::from_millis(ms)))
            .unwrap_or_default()
    }
}

/// Which outputs a run produces.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Outputs {
    pub text: bool,
    pub csv: bool,
    pub image: bool,
    pub graph: bool,
    pub edgelist: bool,
    pub show: bool,
}

impl Outputs {
    fn needs_drawer(&self) -> bool {
        self.image || self.graph
    }
}

/// What a successful run did.
#[derive(Debug)]
pub struct Report {
    pub solution: Solution,
    pub written: Vec<PathBuf>,
}

/// The CSV file an input argument refers to.
pub fn resolve_input(input: &Path) -> PathBuf {
    if input.is_dir() {
        input.join(DEFAULT_INPUT_FILE)
    } else {
        input.to_path_buf()
    }
}

/// Run with terminal output going to stdout.
pub fn run(cli: &Cli) -> Result<Report> {
    let stdout = io::stdout();
    run_to(cli, stdout.lock())
}

/// Solve the maze named by `cli` and write the selected outputs.
///
/// Every fallible step that does not write (reading, solving, loading the
/// font) happens first, so a failed run leaves no artifacts behind.
pub fn run_to<W: Write>(cli: &Cli, mut term: W) -> Result<Report> {
    let input = resolve_input(&cli.input);
    let rows = mazepath_render::read_rows_path(&input)?;
    let outputs = cli.outputs();
    let opts = cli.render_options()?;

    let solution = solve(&rows, cli.limits())
        .with_context(|| format!("cannot solve {}", input.display()))?;

    let drawer = if outputs.needs_drawer() {
        opts.drawer()?
    } else {
        None
    };

    let out = OutputDir::create(&cli.output)?;
    let Solution {
        grid, graph, path, ..
    } = &solution;
    let mut written = Vec::new();
    if outputs.text {
        written.push(mazepath_render::write_text(grid, &out, TEXT_FILE)?);
    }
    if outputs.csv {
        written.push(mazepath_render::write_csv(grid, &out, CSV_FILE)?);
    }
    if outputs.edgelist {
        written.push(mazepath_render::write_edgelist(graph, &out, EDGELIST_FILE)?);
    }
    if outputs.image {
        written.push(mazepath_render::write_image(
            grid,
            &opts,
            drawer.as_ref(),
            &out,
            IMAGE_FILE,
        )?);
    }
    if outputs.graph {
        written.push(mazepath_render::write_diagram(
            grid,
            graph,
            path,
            &opts,
            drawer.as_ref(),
            &out,
            DIAGRAM_FILE,
        )?);
    }
    if outputs.show {
        mazepath_render::print_terminal(grid, &mut term)?;
        writeln!(
            term,
            "path: {} steps, cost {}",
            path.len().saturating_sub(1),
            path.cost()
        )?;
    }

    Ok(Report { solution, written })
}
