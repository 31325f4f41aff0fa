use serde::Serialize;
use tetrevo_engine::GameField;
use tetrevo_evaluator::{game_driver::GameDriver, weight_vector::WeightVector};

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct AutoPlayArg {
    /// Comma-separated feature weights
    #[arg(
        long,
        value_parser = parse_weights,
        default_value = "1,-1,-1,-1,-1,-1,-1,-1,-1"
    )]
    weights: WeightVector,
    /// Pieces before the game is cut off
    #[arg(long, default_value_t = 10_000)]
    piece_limit: usize,
    /// Seed for the piece sequence; random when omitted
    #[arg(long)]
    seed: Option<u64>,
    /// Emit the final report as JSON on stdout
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Serialize)]
struct GameReport {
    score: i64,
    lines_cleared: usize,
    level: usize,
    pieces: usize,
}

pub(crate) fn run(arg: &AutoPlayArg) -> anyhow::Result<()> {
    let mut field = match arg.seed {
        Some(seed) => GameField::from_seed(seed),
        None => GameField::new(),
    };
    let driver = GameDriver::new(arg.weights);
    let stats = driver.play(&mut field, arg.piece_limit);

    let report = GameReport {
        score: stats.score(),
        lines_cleared: stats.total_cleared_lines(),
        level: stats.level(),
        pieces: stats.completed_pieces(),
    };
    if arg.json {
        println!("{}", serde_json::to_string(&report)?);
    } else {
        println!("Score:  {}", report.score);
        println!("Lines:  {}", report.lines_cleared);
        println!("Level:  {}", report.level);
        println!("Pieces: {}", report.pieces);
    }

    Ok(())
}

fn parse_weights(s: &str) -> Result<WeightVector, String> {
    let values = s
        .split(',')
        .map(|part| {
            part.trim()
                .parse::<f32>()
                .map_err(|e| format!("bad weight {part:?}: {e}"))
        })
        .collect::<Result<Vec<_>, _>>()?;
    WeightVector::from_slice(&values).map_err(|e| e.to_string())
}
