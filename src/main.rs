use std::{
    fs,
    io::{self, Read, Write},
    path::PathBuf,
};

use anyhow::{Context, Result};
use clap::Parser;
use life::{Family, Life};
use log::info;

/// Run a Conway or Fredkin automaton on a board of `*` and `.` characters.
#[derive(Parser, Debug)]
#[command(name = "life")]
struct Args {
    /// Board file. Reads stdin when omitted.
    input: Option<PathBuf>,

    /// Rule family for every cell of the board: `conway` or `fredkin`.
    #[arg(long, default_value = "conway")]
    rule: Family,

    /// Number of generations to advance.
    #[arg(short, long, default_value_t = 0)]
    generations: usize,

    /// Print every K-th generation.
    #[arg(long, value_name = "K")]
    every: Option<usize>,

    /// Print this generation. May be repeated.
    #[arg(long, value_name = "G")]
    at: Vec<usize>,
}

impl Args {
    fn prints(&self, generation: usize) -> bool {
        if generation == 0 || self.at.contains(&generation) {
            return true;
        }
        match self.every {
            Some(0) => false,
            Some(k) => generation % k == 0,
            None => self.at.is_empty(),
        }
    }
}

fn read_board(input: Option<&PathBuf>) -> Result<String> {
    let Some(path) = input else {
        let mut text = String::new();
        io::stdin()
            .read_to_string(&mut text)
            .context("failed to read stdin")?;
        return Ok(text);
    };
    fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let text = read_board(args.input.as_ref())?;
    let mut life = Life::parse(args.rule, &text)?;
    info!(
        "running {} generations of a {}x{} {} board",
        args.generations,
        life.board().height(),
        life.board().width(),
        args.rule
    );
    simulate(&args, &mut life, &mut io::stdout().lock())?;
    Ok(())
}

/// Writes the banner and generation 0, then every selected generation up to
/// `args.generations`.
fn simulate(args: &Args, life: &mut Life, out: &mut impl Write) -> io::Result<()> {
    let board = life.board();
    writeln!(
        out,
        "*** Life<{}Cell> {}x{} ***\n",
        board.family(),
        board.height(),
        board.width()
    )?;
    write!(out, "{life}")?;
    for _ in 0..args.generations {
        life.step();
        if args.prints(life.generation()) {
            write!(out, "{life}")?;
        }
    }
    Ok(())
}
