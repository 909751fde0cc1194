use std::path::PathBuf;

use crate::puzzle::PuzzleId;

#[derive(clap::Parser, Debug, Clone)]
#[command(name = "advent", version, about = "Fetches and solves Advent of Code puzzles")]
pub struct Cli {
    /// Config file to read instead of `advent.toml`
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(clap::Subcommand, Debug, Clone)]
pub enum Command {
    /// Solve one puzzle
    Run(Run),

    /// Solve every known puzzle, one after another
    All(Filter),

    /// List known puzzles
    List(Filter),
}

#[derive(clap::Args, Debug, Clone)]
pub struct Run {
    #[arg(value_parser = clap::value_parser!(u16).range(2015..=2099))]
    year: u16,

    #[arg(value_parser = clap::value_parser!(u8).range(1..=25))]
    day: u8,

    /// Read the input from a file (`-` for stdin) instead of downloading it
    #[arg(short, long)]
    input: Option<PathBuf>,
}

impl Run {
    pub fn id(&self) -> PuzzleId {
        PuzzleId::new(self.year, self.day)
    }

    pub fn input(&self) -> Option<PathBuf> {
        self.input.clone()
    }
}

#[derive(clap::Args, Debug, Clone, Default)]
pub struct Filter {
    /// Only puzzles from this year
    #[arg(long, value_parser = clap::value_parser!(u16).range(2015..=2099))]
    year: Option<u16>,
}

impl Filter {
    pub fn year(&self) -> Option<u16> {
        self.year
    }
}
