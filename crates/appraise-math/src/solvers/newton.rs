//! Newton-Raphson root-finding.

use log::debug;

use crate::error::{MathError, MathResult};
use crate::solvers::{SolverConfig, SolverResult};

/// Newton-Raphson iteration: `x_{n+1} = x_n - f(x_n) / f'(x_n)`.
///
/// Converges quadratically near a simple root. Returns an error when the
/// derivative vanishes, the objective stops being finite, or the
/// iteration budget runs out; the caller decides whether that failure is
/// fatal or an expected no-value outcome.
///
/// # Example
///
/// ```rust
/// use appraise_math::solvers::{newton_raphson, SolverConfig};
///
/// let f = |x: f64| x * x - 2.0;
/// let df = |x: f64| 2.0 * x;
///
/// let result = newton_raphson(f, df, 1.5, &SolverConfig::default()).unwrap();
/// assert!((result.root - std::f64::consts::SQRT_2).abs() < 1e-9);
/// ```
pub fn newton_raphson<F, DF>(
    f: F,
    df: DF,
    initial_guess: f64,
    config: &SolverConfig,
) -> MathResult<SolverResult>
where
    F: Fn(f64) -> f64,
    DF: Fn(f64) -> f64,
{
    let mut x = initial_guess;

    for iteration in 0..config.max_iterations {
        let fx = f(x);

        if !fx.is_finite() {
            return Err(MathError::NonFiniteEvaluation { at: x });
        }

        if fx.abs() < config.tolerance {
            return Ok(SolverResult {
                root: x,
                iterations: iteration,
                residual: fx,
            });
        }

        let dfx = df(x);

        if !dfx.is_finite() || dfx.abs() < 1e-15 {
            return Err(MathError::singular_derivative(dfx, x));
        }

        let step = fx / dfx;
        x -= step;
        debug!("newton iteration {iteration}: x = {x}, residual = {fx:.3e}");

        // A vanishing step means the iterate has stabilized even if the
        // residual check above has not fired yet
        if step.abs() < config.tolerance {
            let final_fx = f(x);
            return Ok(SolverResult {
                root: x,
                iterations: iteration + 1,
                residual: final_fx,
            });
        }
    }

    Err(MathError::convergence_failed(
        config.max_iterations,
        f(x).abs(),
    ))
}

/// Newton-Raphson with a central-difference derivative estimate.
///
/// Used when no analytic derivative is available, as with the IRR
/// objective that skips zero-valued terms.
pub fn newton_raphson_numerical<F>(
    f: F,
    initial_guess: f64,
    config: &SolverConfig,
) -> MathResult<SolverResult>
where
    F: Fn(f64) -> f64,
{
    let h = 1e-8;

    let df = |x: f64| (f(x + h) - f(x - h)) / (2.0 * h);

    newton_raphson(&f, df, initial_guess, config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_sqrt_2() {
        let f = |x: f64| x * x - 2.0;
        let df = |x: f64| 2.0 * x;

        let result = newton_raphson(f, df, 1.5, &SolverConfig::default()).unwrap();

        assert_relative_eq!(result.root, std::f64::consts::SQRT_2, epsilon = 1e-9);
        assert!(result.iterations < 10);
    }

    #[test]
    fn test_present_value_root() {
        // Outlay of 1000, four inflows of 400: the internal rate is the
        // root of the discounted sum
        let f = |r: f64| -1000.0 + (1..=4).map(|t| 400.0 / (1.0 + r).powi(t)).sum::<f64>();

        let result = newton_raphson_numerical(f, 0.1, &SolverConfig::default()).unwrap();

        assert!(f(result.root).abs() < 1e-9);
        assert!(result.root > 0.21 && result.root < 0.22);
    }

    #[test]
    fn test_numerical_matches_analytic() {
        let f = |x: f64| x * x * x - 27.0;
        let df = |x: f64| 3.0 * x * x;

        let analytic = newton_raphson(f, df, 2.0, &SolverConfig::default()).unwrap();
        let numerical = newton_raphson_numerical(f, 2.0, &SolverConfig::default()).unwrap();

        assert_relative_eq!(analytic.root, 3.0, epsilon = 1e-9);
        assert_relative_eq!(analytic.root, numerical.root, epsilon = 1e-7);
    }

    #[test]
    fn test_singular_derivative() {
        // f'(0) = 0: no Newton step exists at the starting point
        let f = |x: f64| x * x * x - 1.0;
        let df = |x: f64| 3.0 * x * x;

        let result = newton_raphson(f, df, 0.0, &SolverConfig::default());

        assert!(matches!(result, Err(MathError::SingularDerivative { .. })));
    }

    #[test]
    fn test_iteration_budget_exhaustion() {
        // A root-free objective keeps the residual at 1 or above forever
        let f = |x: f64| x * x + 1.0;
        let df = |x: f64| 2.0 * x;

        let config = SolverConfig::new(1e-12, 25);
        let result = newton_raphson(f, df, 3.0, &config);

        assert!(matches!(
            result,
            Err(MathError::ConvergenceFailed { .. } | MathError::SingularDerivative { .. })
        ));
    }

    #[test]
    fn test_non_finite_objective() {
        let f = |x: f64| 1.0 / (x - 1.0) + f64::NAN;
        let df = |_: f64| 1.0;

        let result = newton_raphson(f, df, 1.0, &SolverConfig::default());

        assert!(matches!(result, Err(MathError::NonFiniteEvaluation { .. })));
    }

    #[test]
    fn test_deterministic() {
        let f = |r: f64| -1000.0 + (1..=4).map(|t| 400.0 / (1.0 + r).powi(t)).sum::<f64>();
        let config = SolverConfig::default();

        let first = newton_raphson_numerical(f, 0.1, &config).unwrap();
        let second = newton_raphson_numerical(f, 0.1, &config).unwrap();

        assert_eq!(first.root.to_bits(), second.root.to_bits());
        assert_eq!(first.iterations, second.iterations);
    }
}
