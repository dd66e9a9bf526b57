use super::error::EstimatorError;

/// Standard deviations below this are treated as a constant column.
const MIN_STD: f64 = 1e-10;

/// Per-column standardization, `(x - mean) / std`.
///
/// The deviation is the population one (divided by `n`), and constant
/// columns are left unscaled so they only get centered.
#[derive(Clone, Debug)]
pub struct StandardScaler {
    mean: Vec<f64>,
    std: Vec<f64>,
}

impl StandardScaler {
    /// Computes the mean and standard deviation of each column of `rows`.
    pub fn fit(rows: &[Vec<f64>]) -> Result<Self, EstimatorError> {
        let first = rows.first().ok_or(EstimatorError::EmptyTrainingSet)?;
        let n_features = first.len();
        let n_samples = rows.len() as f64;

        let mut mean = vec![0.0; n_features];
        for row in rows {
            if row.len() != n_features {
                return Err(EstimatorError::DimensionMismatch {
                    expected: n_features,
                    actual: row.len(),
                });
            }
            for (sum, value) in mean.iter_mut().zip(row) {
                *sum += value;
            }
        }
        for sum in mean.iter_mut() {
            *sum /= n_samples;
        }

        let mut std = vec![0.0; n_features];
        for row in rows {
            for ((sum_sq, value), mean_j) in std.iter_mut().zip(row).zip(&mean) {
                let diff = value - mean_j;
                *sum_sq += diff * diff;
            }
        }
        for sum_sq in std.iter_mut() {
            *sum_sq = (*sum_sq / n_samples).sqrt();
        }

        Ok(StandardScaler { mean, std })
    }

    pub fn n_features(&self) -> usize {
        self.mean.len()
    }

    pub fn transform(&self, row: &[f64]) -> Result<Vec<f64>, EstimatorError> {
        if row.len() != self.mean.len() {
            return Err(EstimatorError::DimensionMismatch {
                expected: self.mean.len(),
                actual: row.len(),
            });
        }

        Ok(row
            .iter()
            .zip(self.mean.iter().zip(&self.std))
            .map(|(value, (mean, std))| {
                let centered = value - mean;
                if *std > MIN_STD {
                    centered / std
                } else {
                    centered
                }
            })
            .collect())
    }

    pub fn transform_all(&self, rows: &[Vec<f64>]) -> Result<Vec<Vec<f64>>, EstimatorError> {
        rows.iter().map(|row| self.transform(row)).collect()
    }
}
