use std::thread;

use approx::assert_relative_eq;

use linreg_equation::{LinearRegressionEquation, UncertainValue, UncertainValueError};

/// Ordinary least squares over a batch of points, standing in for the
/// streaming estimator that produces equations in practice.
fn fit(points: &[(f64, f64)]) -> LinearRegressionEquation<f64> {
    let n = points.len() as f64;
    let mean_x = points.iter().map(|p| p.0).sum::<f64>() / n;
    let mean_y = points.iter().map(|p| p.1).sum::<f64>() / n;

    let sxx: f64 = points.iter().map(|p| (p.0 - mean_x).powi(2)).sum();
    let syy: f64 = points.iter().map(|p| (p.1 - mean_y).powi(2)).sum();
    let sxy: f64 = points
        .iter()
        .map(|p| (p.0 - mean_x) * (p.1 - mean_y))
        .sum();

    if sxx == 0.0 {
        return if syy == 0.0 {
            LinearRegressionEquation::degenerate(mean_x, mean_y)
        } else {
            LinearRegressionEquation::infinite_slope(mean_x)
        };
    }

    let slope = sxy / sxx;
    let intercept_y = mean_y - slope * mean_x;

    let residual_variance = if points.len() > 2 {
        points
            .iter()
            .map(|p| (p.1 - (slope * p.0 + intercept_y)).powi(2))
            .sum::<f64>()
            / (n - 2.0)
    } else {
        0.0
    };

    LinearRegressionEquation::finite_slope(
        UncertainValue::new(slope, residual_variance / sxx).unwrap(),
        UncertainValue::new(
            intercept_y,
            residual_variance * (1.0 / n + mean_x * mean_x / sxx),
        )
        .unwrap(),
    )
}

#[test]
fn exact_line() {
    let line = fit(&[(0.0, 1.0), (1.0, 3.0), (2.0, 5.0)]);

    assert!(line.has_finite_slope());
    assert!(!line.has_zero_slope());

    let slope = line.slope().unwrap();
    assert_relative_eq!(slope.value(), 2.0);
    assert!(slope.is_exact());

    let intercept_y = line.intercept_y().unwrap();
    assert_relative_eq!(intercept_y.value(), 1.0);
    assert!(intercept_y.is_exact());

    assert_relative_eq!(line.intercept_x().unwrap(), -0.5);
    assert!(line.contains(4.0, 9.0));
}

#[test]
fn noisy_line_carries_uncertainty() {
    let line = fit(&[(0.0, 0.1), (1.0, 0.9), (2.0, 2.1), (3.0, 2.9)]);

    let slope = line.slope().unwrap();
    assert_relative_eq!(slope.value(), 0.96, epsilon = 1e-12);
    assert!(slope.variance() > 0.0);
    assert!(line.intercept_y().unwrap().variance() > 0.0);
}

#[test]
fn horizontal_line() {
    let line = fit(&[(0.0, 5.0), (1.0, 5.0), (2.0, 5.0)]);

    assert!(line.has_zero_slope());
    assert_eq!(line.intercept_x(), None);
    assert_eq!(line.y_at(100.0), Some(5.0));
}

#[test]
fn vertical_line() {
    let line = fit(&[(3.0, 0.0), (3.0, 1.0), (3.0, 5.0)]);

    assert_eq!(line, LinearRegressionEquation::infinite_slope(3.0));
    assert_eq!(line.slope(), None);
    assert_eq!(line.intercept_y(), None);
    assert_eq!(line.intercept_x(), Some(3.0));
}

#[test]
fn repeated_point() {
    let point = fit(&[(2.0, -1.0), (2.0, -1.0), (2.0, -1.0)]);

    assert!(point.is_degenerate());
    assert_eq!(point.intercept_x(), Some(2.0));
    assert_eq!(point.intercept_y(), Some(UncertainValue::exact(-1.0)));
}

#[test]
fn invalid_variance_never_reaches_an_equation() {
    let result = UncertainValue::new(1.0, -0.5)
        .map(|slope| LinearRegressionEquation::finite_slope(slope, UncertainValue::exact(0.0)));

    assert!(matches!(result, Err(UncertainValueError::InvalidVariance(_))));
}

#[test]
fn shared_across_threads() {
    let equations = [
        fit(&[(0.0, 1.0), (1.0, 3.0), (2.0, 5.0)]),
        LinearRegressionEquation::infinite_slope(7.0),
        LinearRegressionEquation::degenerate(7.0, -4.0),
    ];

    let intercepts: Vec<_> = thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| scope.spawn(|| equations.map(|eq| eq.intercept_x())))
            .collect();

        handles
            .into_iter()
            .map(|handle| handle.join().unwrap())
            .collect()
    });

    for found in intercepts {
        assert_eq!(found, equations.map(|eq| eq.intercept_x()));
    }
}
