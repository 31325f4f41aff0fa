use clap::{Parser, Subcommand};

use self::{auto_play::AutoPlayArg, train::TrainArg};

mod auto_play;
mod train;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    /// What mode to run the program in
    #[command(subcommand)]
    mode: Mode,
}

#[derive(Debug, Clone, Subcommand)]
enum Mode {
    /// Evolve placement weights with the genetic optimizer
    Train(#[clap(flatten)] TrainArg),
    /// Play one full game with a fixed weight vector
    AutoPlay(#[clap(flatten)] AutoPlayArg),
}

pub fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();
    match args.mode {
        Mode::Train(arg) => train::run(&arg)?,
        Mode::AutoPlay(arg) => auto_play::run(&arg)?,
    }
    Ok(())
}
