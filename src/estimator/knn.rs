use super::error::EstimatorError;

/// Brute-force k-nearest-neighbors regressor over Euclidean distance.
///
/// The prediction is the unweighted mean label of the `k` closest samples.
/// Samples at equal distance keep their training order, so the earliest
/// inserted sample wins a tie for the last neighbor slot.
#[derive(Clone, Debug)]
pub struct KnnRegressor {
    k: usize,
    samples: Vec<Vec<f64>>,
    labels: Vec<f64>,
}

impl KnnRegressor {
    pub fn fit(k: usize, samples: Vec<Vec<f64>>, labels: Vec<f64>) -> Result<Self, EstimatorError> {
        let n_features = samples
            .first()
            .map(|s| s.len())
            .ok_or(EstimatorError::EmptyTrainingSet)?;

        if samples.len() != labels.len() {
            return Err(EstimatorError::LabelCountMismatch {
                samples: samples.len(),
                labels: labels.len(),
            });
        }
        if k == 0 || samples.len() < k {
            return Err(EstimatorError::NotEnoughSamples {
                k,
                samples: samples.len(),
            });
        }
        if let Some(ragged) = samples.iter().find(|s| s.len() != n_features) {
            return Err(EstimatorError::DimensionMismatch {
                expected: n_features,
                actual: ragged.len(),
            });
        }

        Ok(KnnRegressor {
            k,
            samples,
            labels,
        })
    }

    pub fn k(&self) -> usize {
        self.k
    }

    pub fn n_samples(&self) -> usize {
        self.samples.len()
    }

    /// Indices of the `k` nearest training samples, closest first.
    pub fn neighbors(&self, query: &[f64]) -> Result<Vec<usize>, EstimatorError> {
        let n_features = self.samples[0].len();
        if query.len() != n_features {
            return Err(EstimatorError::DimensionMismatch {
                expected: n_features,
                actual: query.len(),
            });
        }

        let mut distances: Vec<(f64, usize)> = self
            .samples
            .iter()
            .enumerate()
            .map(|(index, sample)| (euclidean_distance(query, sample), index))
            .collect();

        // sort_by is stable, ties stay in insertion order
        distances.sort_by(|a, b| a.0.total_cmp(&b.0));

        Ok(distances
            .into_iter()
            .take(self.k)
            .map(|(_, index)| index)
            .collect())
    }

    pub fn predict(&self, query: &[f64]) -> Result<f64, EstimatorError> {
        let neighbors = self.neighbors(query)?;
        let sum: f64 = neighbors.iter().map(|&index| self.labels[index]).sum();
        Ok(sum / neighbors.len() as f64)
    }
}

fn euclidean_distance(a: &[f64], b: &[f64]) -> f64 {
    a.iter()
        .zip(b)
        .map(|(x, y)| (x - y) * (x - y))
        .sum::<f64>()
        .sqrt()
}
