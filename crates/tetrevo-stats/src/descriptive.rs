/// Summary statistics over a dataset of `f32` values.
#[derive(Debug, Clone)]
pub struct DescriptiveStats {
    /// Smallest value in the dataset.
    pub min: f32,
    /// Largest value in the dataset.
    pub max: f32,
    /// Arithmetic mean.
    pub mean: f32,
    /// Median (upper median for even-sized datasets).
    pub median: f32,
    /// Population standard deviation.
    pub std_dev: f32,
}

impl DescriptiveStats {
    /// Computes statistics from unsorted values.
    ///
    /// Values are collected and sorted internally. Returns `None` for an
    /// empty dataset.
    ///
    /// # Examples
    ///
    /// ```
    /// # use tetrevo_stats::descriptive::DescriptiveStats;
    /// let values = [5.0, 2.0, 4.0, 1.0, 3.0];
    /// let stats = DescriptiveStats::new(values).unwrap();
    /// assert_eq!(stats.min, 1.0);
    /// assert_eq!(stats.max, 5.0);
    /// assert_eq!(stats.mean, 3.0);
    /// assert_eq!(stats.median, 3.0);
    /// ```
    #[must_use]
    pub fn new<I>(values: I) -> Option<Self>
    where
        I: IntoIterator<Item = f32>,
    {
        let mut values = values.into_iter().collect::<Vec<_>>();
        values.sort_by(f32::total_cmp);
        Self::from_sorted(&values)
    }

    /// Computes statistics from values already sorted in ascending order.
    ///
    /// # Panics
    ///
    /// Panics if `sorted_values` is not sorted in ascending order.
    #[expect(clippy::cast_precision_loss)]
    #[must_use]
    pub fn from_sorted(sorted_values: &[f32]) -> Option<Self> {
        assert!(
            sorted_values.is_sorted_by(|a, b| a <= b),
            "values must be sorted in ascending order"
        );

        let min = *sorted_values.first()?;
        let max = *sorted_values.last()?;
        let n = sorted_values.len() as f32;
        let mean = sorted_values.iter().copied().sum::<f32>() / n;
        let median = sorted_values[sorted_values.len() / 2];
        let variance = sorted_values
            .iter()
            .map(|v| (v - mean).powi(2))
            .sum::<f32>()
            / n;

        Some(Self {
            min,
            max,
            mean,
            median,
            std_dev: variance.sqrt(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_dataset_yields_none() {
        assert!(DescriptiveStats::new([]).is_none());
        assert!(DescriptiveStats::from_sorted(&[]).is_none());
    }

    #[test]
    fn test_single_value() {
        let stats = DescriptiveStats::new([7.5]).unwrap();
        assert_eq!(stats.min, 7.5);
        assert_eq!(stats.max, 7.5);
        assert_eq!(stats.mean, 7.5);
        assert_eq!(stats.median, 7.5);
        assert_eq!(stats.std_dev, 0.0);
    }

    #[test]
    fn test_new_sorts_before_computing() {
        let stats = DescriptiveStats::new([3.0, 1.0, 2.0]).unwrap();
        assert_eq!(stats.min, 1.0);
        assert_eq!(stats.max, 3.0);
        assert_eq!(stats.median, 2.0);
    }

    #[test]
    fn test_std_dev() {
        // Values 2 and 4: mean 3, each deviation 1, population std dev 1.
        let stats = DescriptiveStats::new([2.0, 4.0]).unwrap();
        assert_eq!(stats.mean, 3.0);
        assert_eq!(stats.std_dev, 1.0);
    }

    #[test]
    fn test_even_count_takes_upper_median() {
        let stats = DescriptiveStats::new([1.0, 2.0, 3.0, 4.0]).unwrap();
        assert_eq!(stats.median, 3.0);
    }
}
