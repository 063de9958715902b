//! Penalized least-squares smoothing built from the façade's public API.

use approx::assert_abs_diff_eq;
use funcbasis::prelude::*;

/// Solve `(XᵀX + λP) c = Xᵀy` and return the fitted values `Xc`.
fn smooth(basis: &dyn Basis, x: &[Real], y: &[Real], lambda: Real) -> Vec<Real> {
    let design = basis.evaluate(x, 0).unwrap().into_inner();
    let penalty = basis.default_penalty(2).unwrap().into_inner();
    let yv = Array::from_slice(y);
    let xt = design.transpose();
    let lhs = &xt * &design + penalty * lambda;
    let rhs = &xt * yv.inner();
    let coef = lhs.cholesky().expect("penalized normal equations are SPD").solve(&rhs);
    (&design * coef).iter().copied().collect()
}

#[test]
fn bspline_smoother_reproduces_smooth_signal() {
    let basis = Bspline::new((0.0, 1.0), 16, 4).unwrap();
    let x = basis.domain().linspace(101);
    let y: Vec<Real> = x
        .iter()
        .map(|t| (2.0 * std::f64::consts::PI * t).sin())
        .collect();
    let fitted = smooth(&basis, x.as_slice(), &y, 1e-8);
    for (f, target) in fitted.iter().zip(&y) {
        assert_abs_diff_eq!(*f, *target, epsilon = 1e-3);
    }
}

#[test]
fn heavy_penalty_shrinks_toward_a_line() {
    // q = 2 leaves straight lines unpenalized
    let basis = Bspline::new((0.0, 1.0), 10, 4).unwrap();
    let x = basis.domain().linspace(51);
    let y: Vec<Real> = x.iter().map(|t| 1.0 + 2.0 * t + (9.0 * t).sin() * 0.1).collect();
    let fitted = smooth(&basis, x.as_slice(), &y, 1e6);
    let n = fitted.len();
    let slope = (fitted[n - 1] - fitted[0]) / (x[n - 1] - x[0]);
    for (i, f) in fitted.iter().enumerate() {
        let line = fitted[0] + slope * x[i];
        assert_abs_diff_eq!(*f, line, epsilon = 1e-3);
    }
}

#[test]
fn fourier_smoother_from_config() {
    let spec = BasisSpec::Fourier {
        domain: (0.0, 1.0),
        n_basis: 7,
        period: None,
    };
    let basis = spec.build().unwrap();
    let x = basis.domain().linspace(64);
    let y: Vec<Real> = x
        .iter()
        .map(|t| 0.5 + (2.0 * std::f64::consts::PI * 2.0 * t).cos())
        .collect();
    let fitted = smooth(basis.as_ref(), x.as_slice(), &y, 1e-10);
    for (f, target) in fitted.iter().zip(&y) {
        assert_abs_diff_eq!(*f, *target, epsilon = 1e-6);
    }
}

#[test]
fn errors_surface_through_facade() {
    let basis = Monomial::new((0.0, 1.0), 4).unwrap();
    assert!(matches!(
        basis.evaluate(&[2.0], 0),
        Err(Error::OutOfDomain { .. })
    ));
    let knots = default_knots(4, 6, Domain::new(0.0, 1.0).unwrap()).unwrap();
    assert_eq!(knots.size(), 10);
}
