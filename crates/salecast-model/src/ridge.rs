//! Two-feature ridge regression.
//!
//! Minimises `||y - Xw - b||² + alpha * ||w||²` with an unpenalised
//! intercept `b`. Features and target are centred, which leaves the 2x2
//! system `(XcᵀXc + alpha·I) w = Xcᵀyc`, solved in closed form. For any
//! `alpha > 0` the matrix is positive definite, so the solve never fails on
//! collinear or constant features.

use crate::error::ModelError;

/// Fitted weights for two features plus an intercept.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RidgeFit {
    pub coefficients: [f64; 2],
    pub intercept: f64,
}

impl RidgeFit {
    #[must_use]
    pub fn predict(&self, x: [f64; 2]) -> f64 {
        self.intercept + self.coefficients[0] * x[0] + self.coefficients[1] * x[1]
    }
}

/// Fit ridge regression on paired samples.
///
/// # Errors
///
/// Returns `ModelError::Numerical` when `features` and `targets` differ in
/// length, are empty, `alpha` is not positive, or the solution is not finite.
#[allow(clippy::cast_precision_loss)]
pub fn fit(features: &[[f64; 2]], targets: &[f64], alpha: f64) -> Result<RidgeFit, ModelError> {
    if features.len() != targets.len() || features.is_empty() {
        return Err(ModelError::Numerical(format!(
            "expected matching non-empty samples, got {} features and {} targets",
            features.len(),
            targets.len()
        )));
    }
    if !alpha.is_finite() || alpha <= 0.0 {
        return Err(ModelError::Numerical(format!(
            "ridge alpha must be positive, got {alpha}"
        )));
    }

    let n = features.len() as f64;
    let mean_x0 = features.iter().map(|x| x[0]).sum::<f64>() / n;
    let mean_x1 = features.iter().map(|x| x[1]).sum::<f64>() / n;
    let mean_y = targets.iter().sum::<f64>() / n;

    let mut s00 = 0.0;
    let mut s01 = 0.0;
    let mut s11 = 0.0;
    let mut s0y = 0.0;
    let mut s1y = 0.0;
    for (x, &y) in features.iter().zip(targets) {
        let d0 = x[0] - mean_x0;
        let d1 = x[1] - mean_x1;
        let dy = y - mean_y;
        s00 += d0 * d0;
        s01 += d0 * d1;
        s11 += d1 * d1;
        s0y += d0 * dy;
        s1y += d1 * dy;
    }

    let a00 = s00 + alpha;
    let a11 = s11 + alpha;
    let det = a00.mul_add(a11, -(s01 * s01));

    let w0 = a11.mul_add(s0y, -(s01 * s1y)) / det;
    let w1 = a00.mul_add(s1y, -(s01 * s0y)) / det;
    let intercept = w1.mul_add(-mean_x1, w0.mul_add(-mean_x0, mean_y));

    if !(w0.is_finite() && w1.is_finite() && intercept.is_finite()) {
        return Err(ModelError::Numerical(
            "ridge solution is not finite".to_string(),
        ));
    }

    Ok(RidgeFit {
        coefficients: [w0, w1],
        intercept,
    })
}

/// In-sample coefficient of determination.
///
/// Returns 1.0 when the targets have no variance.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn r_squared(fit: &RidgeFit, features: &[[f64; 2]], targets: &[f64]) -> f64 {
    if targets.is_empty() {
        return 0.0;
    }
    let mean_y = targets.iter().sum::<f64>() / targets.len() as f64;
    let ss_tot: f64 = targets.iter().map(|y| (y - mean_y).powi(2)).sum();
    let ss_res: f64 = features
        .iter()
        .zip(targets)
        .map(|(x, y)| (y - fit.predict(*x)).powi(2))
        .sum();

    if ss_tot > 1e-10 {
        1.0 - ss_res / ss_tot
    } else {
        1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64, tol: f64) -> bool {
        (a - b).abs() < tol
    }

    #[test]
    fn recovers_exact_plane_with_tiny_alpha() {
        let features: Vec<[f64; 2]> = (0..24)
            .map(|i| [f64::from(2020 + i / 12), f64::from(i % 12 + 1)])
            .collect();
        let targets: Vec<f64> = features
            .iter()
            .map(|x| 5.0f64.mul_add(x[0], 3.0f64.mul_add(x[1], -9000.0)))
            .collect();

        let fit = fit(&features, &targets, 1e-9).unwrap();
        assert!(close(fit.coefficients[0], 5.0, 1e-4), "{fit:?}");
        assert!(close(fit.coefficients[1], 3.0, 1e-4), "{fit:?}");
        assert!(close(r_squared(&fit, &features, &targets), 1.0, 1e-9));
    }

    #[test]
    fn two_points_same_year_matches_closed_form() {
        // Year has no variance, so its weight is exactly zero and the month
        // slope is shrunk: 25 / (0.5 + 0.1).
        let features = [[2023.0, 1.0], [2023.0, 2.0]];
        let targets = [100.0, 150.0];
        let fit = fit(&features, &targets, 0.1).unwrap();

        assert!(close(fit.coefficients[0], 0.0, 1e-12));
        assert!(close(fit.coefficients[1], 25.0 / 0.6, 1e-9));
        assert!(close(fit.predict([2023.0, 1.5]), 125.0, 1e-9));
    }

    #[test]
    fn collinear_features_still_solve() {
        let features = [[1.0, 1.0], [2.0, 2.0], [3.0, 3.0]];
        let targets = [2.0, 4.0, 6.0];
        let fit = fit(&features, &targets, 0.1).unwrap();
        assert!(close(fit.coefficients[0], fit.coefficients[1], 1e-12));
        assert!(fit.intercept.is_finite());
    }

    #[test]
    fn rejects_mismatched_lengths_and_bad_alpha() {
        assert!(fit(&[[1.0, 1.0]], &[], 0.1).is_err());
        assert!(fit(&[[1.0, 1.0]], &[1.0], 0.0).is_err());
        assert!(fit(&[], &[], 0.1).is_err());
    }

    #[test]
    fn flat_targets_give_unit_r_squared() {
        let features = [[2023.0, 1.0], [2023.0, 2.0]];
        let targets = [10.0, 10.0];
        let fit = fit(&features, &targets, 0.1).unwrap();
        assert!(close(r_squared(&fit, &features, &targets), 1.0, 1e-12));
    }
}
