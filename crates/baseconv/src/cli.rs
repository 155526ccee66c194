use baseconv::{ConvError, ConvResult, alphabet};
use clap::{Parser, Subcommand};

use crate::cli::{decode::DecodeCommand, encode::EncodeCommand};

mod decode;
mod encode;

#[derive(Parser)]
#[command(author, version, about, long_about = None, arg_required_else_help = true)]
struct Command {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encode a base 10 integer in a new base
    Encode(EncodeCommand),
    /// Decode the string representation of an integer in some base to base 10
    Decode(DecodeCommand),
}

pub async fn execute() -> anyhow::Result<()> {
    let cli = Command::parse();
    tracing::debug!("Starting cli");

    match cli.command {
        Commands::Encode(cmd) => cmd.execute().await,
        Commands::Decode(cmd) => cmd.execute().await,
    }
}

/// Bases above the alphabet size have digits that cannot be rendered.
pub(crate) fn validate_base(base: u64) -> ConvResult<()> {
    let size = alphabet::len();
    if base > size {
        return Err(ConvError::BaseExceedsAlphabet { base, size });
    }
    Ok(())
}
