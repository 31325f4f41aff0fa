use anyhow::Context as _;
use tetrevo_training::genetic::{Population, PopulationEvolver};

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct TrainArg {
    /// Number of generations to evolve
    #[arg(long, default_value_t = 50)]
    generations: usize,
    /// Individuals per generation
    #[arg(long, default_value_t = 15)]
    population: usize,
    /// Game sessions each individual plays per generation
    #[arg(long, default_value_t = 5)]
    games: usize,
    /// Fraction of the population carried over unchanged
    #[arg(long, default_value_t = 0.2)]
    elitism: f32,
    /// Per-gene mutation probability for offspring
    #[arg(long, default_value_t = 0.2)]
    mutation_rate: f32,
    /// Half-width of the uniform mutation noise
    #[arg(long, default_value_t = 0.1)]
    mutation_span: f32,
    /// Pieces per session before it is cut off
    #[arg(long, default_value_t = 2000)]
    piece_limit: usize,
}

pub(crate) fn run(arg: &TrainArg) -> anyhow::Result<()> {
    let mut rng = rand::rng();
    let evolver = PopulationEvolver {
        elitism_fraction: arg.elitism,
        mutation_rate: arg.mutation_rate,
        mutation_span: arg.mutation_span,
    };

    let mut population = Population::random(arg.population, &mut rng);
    for generation in 0..arg.generations {
        eprintln!("Generation #{generation}:");
        population.evaluate_fitness(arg.games, arg.piece_limit);

        eprintln!("  Individuals:");
        for (i, ind) in population.individuals().iter().enumerate() {
            eprintln!("  {i:2}: {:.3?} => {:.3}", ind.weights().as_slice(), ind.fitness());
        }

        let fitness_stats = population.compute_fitness_stats();
        eprintln!("  Fitness Stats:");
        eprintln!("    Min:    {:.3}", fitness_stats.min);
        eprintln!("    Max:    {:.3}", fitness_stats.max);
        eprintln!("    Mean:   {:.3}", fitness_stats.mean);
        eprintln!("    Median: {:.3}", fitness_stats.median);
        eprintln!("    Stddev: {:.3}", fitness_stats.std_dev);

        // The last generation is only evaluated, never replaced.
        if generation + 1 < arg.generations {
            population = evolver.evolve(&population, &mut rng);
        }
    }

    let best = population.best().context("population is empty")?;
    eprintln!("Training completed.");
    eprintln!("  Final fitness: {:.3}", best.fitness());
    println!("{}", serde_json::to_string(best.weights())?);

    Ok(())
}
