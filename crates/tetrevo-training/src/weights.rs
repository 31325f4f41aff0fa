//! Genetic operators on weight vectors.
//!
//! Three operators cover the whole algorithm: [`random`] initialization,
//! per-gene [`uniform_crossover`], and additive uniform [`mutate`]. Weights
//! are deliberately unbounded after initialization; only the placement
//! ranking matters, so there is nothing to clamp against.

use rand::Rng;
use tetrevo_evaluator::weight_vector::WeightVector;

/// Generates a weight vector with every gene uniform in `[-1, 1]`.
pub fn random<R>(rng: &mut R) -> WeightVector
where
    R: Rng + ?Sized,
{
    let mut weights = WeightVector::new([0.0; WeightVector::LEN]);
    for w in weights.as_mut_slice() {
        *w = rng.random_range(-1.0..=1.0);
    }
    weights
}

/// Uniform crossover: each gene of the child comes from either parent with
/// equal probability.
pub fn uniform_crossover<R>(p1: &WeightVector, p2: &WeightVector, rng: &mut R) -> WeightVector
where
    R: Rng + ?Sized,
{
    let mut child = *p1;
    for (gene, other) in std::iter::zip(child.as_mut_slice(), p2.as_slice()) {
        if rng.random_bool(0.5) {
            *gene = *other;
        }
    }
    child
}

/// Mutates each gene with probability `rate`, adding uniform noise in
/// `[-span, span]`.
pub fn mutate<R>(weights: &mut WeightVector, rate: f32, span: f32, rng: &mut R)
where
    R: Rng + ?Sized,
{
    for gene in weights.as_mut_slice() {
        if rng.random_bool(f64::from(rate)) {
            *gene += rng.random_range(-span..=span);
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    use super::*;

    #[test]
    fn test_random_genes_stay_in_range() {
        let mut rng = Pcg64Mcg::seed_from_u64(1);
        for _ in 0..100 {
            let weights = random(&mut rng);
            assert!(weights.as_slice().iter().all(|w| (-1.0..=1.0).contains(w)));
        }
    }

    #[test]
    fn test_crossover_takes_every_gene_from_a_parent() {
        let mut rng = Pcg64Mcg::seed_from_u64(2);
        let p1 = WeightVector::new([1.0; WeightVector::LEN]);
        let p2 = WeightVector::new([-1.0; WeightVector::LEN]);
        for _ in 0..50 {
            let child = uniform_crossover(&p1, &p2, &mut rng);
            assert!(child.as_slice().iter().all(|g| *g == 1.0 || *g == -1.0));
        }
    }

    #[test]
    fn test_crossover_mixes_both_parents() {
        let mut rng = Pcg64Mcg::seed_from_u64(3);
        let p1 = WeightVector::new([1.0; WeightVector::LEN]);
        let p2 = WeightVector::new([-1.0; WeightVector::LEN]);
        let mut saw_p1 = false;
        let mut saw_p2 = false;
        for _ in 0..50 {
            let child = uniform_crossover(&p1, &p2, &mut rng);
            saw_p1 |= child.as_slice().contains(&1.0);
            saw_p2 |= child.as_slice().contains(&-1.0);
        }
        assert!(saw_p1 && saw_p2);
    }

    #[test]
    fn test_mutate_with_zero_rate_changes_nothing() {
        let mut rng = Pcg64Mcg::seed_from_u64(4);
        let original = random(&mut rng);
        let mut weights = original;
        mutate(&mut weights, 0.0, 0.5, &mut rng);
        assert_eq!(weights, original);
    }

    #[test]
    fn test_mutate_with_full_rate_stays_within_span() {
        let mut rng = Pcg64Mcg::seed_from_u64(5);
        let original = WeightVector::new([0.0; WeightVector::LEN]);
        for _ in 0..50 {
            let mut weights = original;
            mutate(&mut weights, 1.0, 0.1, &mut rng);
            assert!(weights.as_slice().iter().all(|g| g.abs() <= 0.1));
        }
    }
}
