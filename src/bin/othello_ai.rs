//! Othello agent for a line-protocol game controller
//!
//! stdout carries protocol messages only; logs go to stderr.

use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::Parser;

use othello::protocol::{run_session, DEFAULT_NAME};
use othello::{CachePolicy, OthelloEngine, PassRule, SearchConfig, Strategy};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,

    /// Name announced to the controller
    #[arg(long, default_value = DEFAULT_NAME)]
    name: String,

    /// Alpha-beta ply limit below each root move
    #[arg(short, long, default_value_t = othello::config::DEFAULT_LIMIT)]
    limit: u8,

    /// Search strategy: alphabeta or minimax
    #[arg(short, long, default_value_t = Strategy::AlphaBeta)]
    strategy: Strategy,

    /// Cache keying: depth-keyed, board-only or disabled
    #[arg(long, default_value_t = CachePolicy::DepthKeyed)]
    cache: CachePolicy,

    /// What a position without legal moves means: pass-and-continue or terminal
    #[arg(long, default_value_t = PassRule::PassAndContinue)]
    pass_rule: PassRule,

    /// Ply limit for minimax (searches to the end of the game when omitted)
    #[arg(long)]
    minimax_limit: Option<u8>,

    /// Board-only cache and pass-as-terminal, overriding --cache and --pass-rule
    #[arg(long)]
    legacy: bool,
}

impl Args {
    fn config(&self) -> SearchConfig {
        let mut config = SearchConfig {
            limit: self.limit,
            strategy: self.strategy,
            cache_policy: self.cache,
            pass_rule: self.pass_rule,
            minimax_limit: self.minimax_limit,
        };
        if self.legacy {
            let legacy = SearchConfig::legacy();
            config.cache_policy = legacy.cache_policy;
            config.pass_rule = legacy.pass_rule;
        }
        config
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    let log_level = if args.debug { "debug" } else { "warn" };
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().filter_or(env_logger::DEFAULT_FILTER_ENV, log_level));
    builder
        .format(|buf, record| writeln!(buf, "[{}] {}: {}", record.level(), record.target(), record.args()))
        .write_style(env_logger::WriteStyle::Never)
        .target(env_logger::Target::Stderr)
        .init();

    let config = args.config();
    log::debug!("{:?}", config);

    let mut engine = OthelloEngine::with_config(config);
    let stdin = io::stdin();
    let stdout = io::stdout();

    let (dark, light) = run_session(&mut engine, &args.name, stdin.lock(), stdout.lock())
        .context("controller session failed")?;
    log::debug!("final score {dark}-{light}");
    Ok(())
}
