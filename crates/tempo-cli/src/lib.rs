//! tempo-cli/src/lib.rs : CLI lib pour tempo
//!
//! Sous-commandes (une par suite) :
//!   - comparison    : tour d’horizon, total en secondes
//!   - comprehensive : six tests, grande échelle
//!   - stable        : six tests, petite échelle
//!   - intensive     : crible, récursion, matrice
//!
//! Le rapport part sur stdout ; les logs (`-v`, `RUST_LOG`) sur stderr.

use std::io::{self, Write};

use clap::{ArgAction, Parser, Subcommand};
use color_eyre::eyre::{Result, WrapErr};
use log::{info, LevelFilter};
use tempo_harness::Report;
use tempo_workloads::Suite;

#[derive(Parser, Debug)]
#[command(name = "tempo", version, about = "Micro-benchmarks des opérations de base")]
pub struct Cli {
    /// Verbosité des logs sur stderr (répéter pour plus de bruit)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub cmd: Cmd,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cmd {
    /// Arithmétique, tableau, map, appels, chaînes ; total en secondes
    Comparison,
    /// Six tests à grande échelle ; durée par test
    Comprehensive,
    /// Six tests à petite échelle ; durée par test
    Stable,
    /// Crible d’Ératosthène, factorielle récursive, matrice
    Intensive,
}

impl Cmd {
    pub fn suite(self) -> Suite {
        match self {
            Cmd::Comparison => tempo_workloads::comparison(),
            Cmd::Comprehensive => tempo_workloads::comprehensive(),
            Cmd::Stable => tempo_workloads::stable(),
            Cmd::Intensive => tempo_workloads::intensive(),
        }
    }
}

impl Cli {
    /// Niveau par défaut des logs ; `RUST_LOG` reste prioritaire.
    pub fn log_level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }
}

/// Point d’entrée du binaire (à appeler depuis src/main.rs)
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_level());

    let stdout = io::stdout();
    let mut out = stdout.lock();
    execute(cli.cmd, &mut out)?;
    Ok(())
}

/// Lance la suite choisie sur `out`.
pub fn execute<W: Write>(cmd: Cmd, out: &mut W) -> Result<Report> {
    let suite = cmd.suite();
    let name = suite.name();
    info!(
        "tempo {} : suite `{name}` ({:?}, {} section(s))",
        tempo_harness::VERSION,
        suite.harness().layout(),
        suite.sections().len()
    );
    suite.run(out).wrap_err_with(|| format!("suite `{name}` interrompue"))
}

fn init_logging(level: LevelFilter) {
    let env = env_logger::Env::default().default_filter_or(level.as_str());
    // try_init : un logger déjà installé (tests) n’est pas une erreur
    let _ = env_logger::Builder::from_env(env)
        .format_timestamp(None)
        .target(env_logger::Target::Stderr)
        .try_init();
}
