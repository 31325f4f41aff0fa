//! Genetic optimization of the evaluator's weight vector.
//!
//! The trainer never inspects the board itself. It breeds
//! [`WeightVector`](tetrevo_evaluator::weight_vector::WeightVector) values,
//! hands each one to a [`GameDriver`](tetrevo_evaluator::game_driver::GameDriver)
//! for a batch of full games, and keeps the vectors whose games score best
//! per cleared line.
//!
//! # Training loop
//!
//! 1. [`Population::random`] seeds a generation of random weight vectors.
//! 2. [`Population::evaluate_fitness`] plays every member's games in
//!    parallel and sorts the generation best-first.
//! 3. [`PopulationEvolver::evolve`] carries the elites over verbatim and
//!    fills the rest of the next generation by crossing and mutating pairs
//!    of elites.
//! 4. Repeat for a fixed number of generations; the answer is the best
//!    member of the last evaluated generation.
//!
//! Genetic operators on raw weight vectors live in [`weights`]; the
//! population machinery lives in [`genetic`].

pub mod genetic;
pub mod weights;
