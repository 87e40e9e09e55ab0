#![doc = include_str!("../README.md")]

pub mod cli;
pub mod command;
pub mod error;
pub mod manifest;

pub use error::*;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn run() -> Result<()> {
    use clap::Parser;
    use cli::{CargoCommand, SetverCommand};

    let cli = cli::CargoCli::parse();
    match cli.command {
        CargoCommand::Setver(args) => match args.command {
            SetverCommand::Get(args) => command::get::execute(args),
            SetverCommand::Set(args) => command::set::execute(args),
        },
    }
}
