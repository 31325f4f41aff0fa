//! Population-based evolution of weight vectors.
//!
//! A [`Population`] holds candidate weight vectors, evaluates them by playing
//! full games, and sorts them by fitness. A [`PopulationEvolver`] builds the
//! next generation: the top `ceil(n * elitism_fraction)` members survive
//! unchanged, and the remaining slots are filled with mutated crossovers of
//! two elites.
//!
//! Fitness is score per cleared line, averaged over a member's game
//! sessions. Games that clear nothing are excluded from the average rather
//! than counted as zero, so a cautious vector that survives long without
//! clearing is not mistaken for a good one. A member whose every game clears
//! nothing gets fitness 0.
//!
//! Fitness evaluation is parallelized with scoped threads, one per member;
//! each member plays its sessions independently.

use std::thread;

use rand::{Rng, seq::IndexedRandom};
use tetrevo_engine::{GameField, GameStats};
use tetrevo_evaluator::{game_driver::GameDriver, weight_vector::WeightVector};
use tetrevo_stats::descriptive::DescriptiveStats;

use crate::weights;

/// One candidate solution: a weight vector and the fitness it earned.
#[derive(Debug, Clone, Copy)]
pub struct Individual {
    weights: WeightVector,
    fitness: f32,
}

impl Individual {
    /// Creates an individual with random genes and no fitness yet.
    pub fn random<R>(rng: &mut R) -> Self
    where
        R: Rng + ?Sized,
    {
        Self {
            weights: weights::random(rng),
            fitness: f32::MIN,
        }
    }

    #[must_use]
    pub fn weights(&self) -> &WeightVector {
        &self.weights
    }

    /// The score-per-line fitness from the last evaluation. Higher is
    /// better.
    #[must_use]
    pub fn fitness(&self) -> f32 {
        self.fitness
    }
}

/// One generation of candidate weight vectors.
#[derive(Debug, Clone)]
pub struct Population {
    individuals: Vec<Individual>,
}

impl Population {
    /// Creates a population of `count` random individuals.
    #[must_use]
    pub fn random<R>(count: usize, rng: &mut R) -> Self
    where
        R: Rng + ?Sized,
    {
        let individuals = (0..count).map(|_| Individual::random(rng)).collect();
        Self { individuals }
    }

    #[must_use]
    pub fn individuals(&self) -> &[Individual] {
        &self.individuals
    }

    /// The fittest member, once the population has been evaluated.
    #[must_use]
    pub fn best(&self) -> Option<&Individual> {
        self.individuals.first()
    }

    /// Plays `games_per_member` sessions for every member in parallel and
    /// sorts the population by fitness, best first.
    ///
    /// Each session runs on a fresh randomly seeded field and stops after
    /// `piece_limit` locked pieces or top-out.
    pub fn evaluate_fitness(&mut self, games_per_member: usize, piece_limit: usize) {
        thread::scope(|s| {
            for ind in &mut self.individuals {
                s.spawn(move || {
                    ind.fitness = evaluate_member(ind.weights, games_per_member, piece_limit);
                });
            }
        });

        self.individuals
            .sort_by(|a, b| b.fitness.partial_cmp(&a.fitness).unwrap());
    }

    /// Fitness summary of the whole generation, for progress reports.
    ///
    /// # Panics
    ///
    /// Panics if the population is empty.
    #[must_use]
    pub fn compute_fitness_stats(&self) -> DescriptiveStats {
        DescriptiveStats::new(self.individuals.iter().map(|ind| ind.fitness)).unwrap()
    }
}

fn evaluate_member(weights: WeightVector, games: usize, piece_limit: usize) -> f32 {
    let driver = GameDriver::new(weights);
    let sessions = (0..games)
        .map(|_| driver.play(&mut GameField::new(), piece_limit))
        .collect::<Vec<_>>();
    score_per_line_fitness(&sessions)
}

/// Mean score per cleared line over the given sessions.
///
/// Sessions that cleared nothing are skipped entirely, not averaged in as
/// zero. Returns 0 when no session cleared a line.
#[expect(clippy::cast_precision_loss)]
#[must_use]
pub fn score_per_line_fitness(sessions: &[GameStats]) -> f32 {
    let mut sum = 0.0;
    let mut count = 0u32;
    for stats in sessions {
        let lines = stats.total_cleared_lines();
        if lines == 0 {
            continue;
        }
        sum += stats.score() as f32 / lines as f32;
        count += 1;
    }
    if count == 0 { 0.0 } else { sum / count as f32 }
}

/// Evolution parameters for building the next generation.
#[derive(Debug, Clone, Copy)]
pub struct PopulationEvolver {
    /// Fraction of the population carried over unchanged, rounded up and
    /// never less than one member.
    pub elitism_fraction: f32,
    /// Per-gene mutation probability for offspring.
    pub mutation_rate: f32,
    /// Half-width of the uniform mutation noise.
    pub mutation_span: f32,
}

impl PopulationEvolver {
    /// Builds the next generation from an evaluated population.
    ///
    /// Elites are cloned verbatim. Every other slot is filled by crossing
    /// two distinct elites (an elite with itself when there is only one) and
    /// mutating the child. Offspring start with fitness 0.
    ///
    /// # Panics
    ///
    /// Panics if `population` is empty or not sorted by fitness descending.
    #[must_use]
    pub fn evolve<R>(&self, population: &Population, rng: &mut R) -> Population
    where
        R: Rng + ?Sized,
    {
        assert!(
            population
                .individuals
                .is_sorted_by(|a, b| a.fitness >= b.fitness)
        );

        let elite_count = self.elite_count(population.individuals.len());
        let elites = &population.individuals[..elite_count];
        let mut next_individuals = elites.to_vec();

        while next_individuals.len() < population.individuals.len() {
            let parents = elites.choose_multiple(rng, 2).collect::<Vec<_>>();
            let p1 = parents[0];
            let p2 = parents.get(1).copied().unwrap_or(p1);

            let mut child = weights::uniform_crossover(&p1.weights, &p2.weights, rng);
            weights::mutate(&mut child, self.mutation_rate, self.mutation_span, rng);

            next_individuals.push(Individual {
                weights: child,
                fitness: 0.0,
            });
        }

        Population {
            individuals: next_individuals,
        }
    }

    #[expect(
        clippy::cast_precision_loss,
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss
    )]
    fn elite_count(&self, population_len: usize) -> usize {
        ((population_len as f32 * self.elitism_fraction).ceil() as usize).clamp(1, population_len)
    }
}
