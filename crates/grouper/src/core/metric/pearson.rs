//! The `Pearson` correlation metric.

use distances::number::Float;

use super::Metric;

/// Distance reported when the correlation is undefined.
///
/// The correlation denominator is zero when one or both sequences have no
/// variance, and the key intersection of two rankings can be empty. Both
/// cases are resolved to this value, which deliberately conflates "undefined"
/// with "identical". Swapping the policy means changing this constant, not
/// the algorithm.
pub const FALLBACK_DISTANCE: f64 = 0.0;

/// Pearson distance.
///
/// Returns `1 - r`, where `r` is the Pearson Correlation Coefficient between
/// the two sequences. A distance of 0 is a perfect positive correlation, 1 is
/// no correlation, and 2 is a perfect negative correlation.
pub struct Pearson;

impl<U: Float> Metric<U> for Pearson {
    fn distance(&self, x: &[U], y: &[U]) -> U {
        let n = U::from(x.len());

        let sum_x = x.iter().copied().sum::<U>();
        let sum_y = y.iter().copied().sum::<U>();

        let sum_x_sq = x.iter().fold(U::ZERO, |acc, &v| acc + v * v);
        let sum_y_sq = y.iter().fold(U::ZERO, |acc, &v| acc + v * v);

        let sum_xy = x.iter().zip(y.iter()).fold(U::ZERO, |acc, (&a, &b)| acc + a * b);

        let denominator = ((sum_x_sq - sum_x.powi(2) / n) * (sum_y_sq - sum_y.powi(2) / n)).sqrt();
        if denominator == U::ZERO {
            return U::from(FALLBACK_DISTANCE);
        }

        let numerator = sum_xy - sum_x * sum_y / n;
        U::ONE - numerator / denominator
    }

    fn name(&self) -> &str {
        "pearson"
    }
}
