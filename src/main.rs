mod app;
mod command;
mod config;
mod consts;
mod difficulty;
mod game;
mod gameover;
mod logo;
mod menu;
mod util;
use crate::app::App;
use crate::config::Config;
use anyhow::Context;
use lexopt::{Arg, Parser};
use std::io::{self, ErrorKind};
use std::path::PathBuf;
use std::process::ExitCode;

static USAGE: &str = "Usage: gridsnake [-c PATH|--config PATH]

Steer a snake around a 25x25 grid, eating food and dodging walls.

Options:
  -c PATH, --config PATH    Read configuration from PATH
  -h, --help                Show this help and exit
  -V, --version             Show the program version and exit";

fn main() -> ExitCode {
    let config = match startup() {
        Ok(Some(config)) => config,
        Ok(None) => return ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("gridsnake: {e:#}");
            return ExitCode::from(2);
        }
    };
    let terminal = ratatui::init();
    let r = App::new(config).run(terminal);
    ratatui::restore();
    io_exit(r)
}

/// Parse the command line and load configuration.  Returns `Ok(None)` if the
/// program should exit without running the game.
fn startup() -> anyhow::Result<Option<Config>> {
    let mut config_path: Option<PathBuf> = None;
    let mut parser = Parser::from_env();
    while let Some(arg) = parser.next()? {
        match arg {
            Arg::Short('c') | Arg::Long("config") => {
                config_path = Some(parser.value()?.into());
            }
            Arg::Short('h') | Arg::Long("help") => {
                println!("{USAGE}");
                return Ok(None);
            }
            Arg::Short('V') | Arg::Long("version") => {
                println!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
                return Ok(None);
            }
            _ => return Err(arg.unexpected().into()),
        }
    }
    let config = if let Some(path) = config_path {
        Config::load(&path, false)
            .with_context(|| format!("failed to load configuration from {}", path.display()))?
    } else {
        let path = Config::default_path()?;
        Config::load(&path, true)
            .with_context(|| format!("failed to load configuration from {}", path.display()))?
    };
    Ok(Some(config))
}

fn io_exit(r: io::Result<()>) -> ExitCode {
    match r {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) if e.kind() == ErrorKind::BrokenPipe => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::from(2)
        }
    }
}
