//! Property tests for evaluation and penalty invariants.

use fb_basis::{Basis, Bspline, Exponential, Fourier, Monomial};
use proptest::prelude::*;

fn domain() -> impl Strategy<Value = (f64, f64)> {
    (-3.0..3.0_f64, 0.1..4.0_f64).prop_map(|(lower, width)| (lower, lower + width))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn monomial_penalty_symmetric(d in domain(), k in 1usize..9, q in 0usize..4) {
        let p = Monomial::new(d, k).unwrap().penalty(q, 0).unwrap();
        prop_assert!(p.is_symmetric(0.0));
    }

    #[test]
    fn exponential_penalty_symmetric(d in domain(), k in 1usize..7, q in 0usize..3) {
        let p = Exponential::new(d, k).unwrap().penalty(q, 0).unwrap();
        prop_assert!(p.is_symmetric(0.0));
    }

    #[test]
    fn fourier_penalty_symmetric(
        d in domain(),
        harmonics in 0usize..4,
        stretch in 0.5..2.0_f64,
        q in 0usize..3,
    ) {
        let period = (d.1 - d.0) * stretch;
        let basis = Fourier::with_period(d, 2 * harmonics + 1, period).unwrap();
        let p = basis.penalty(q, 6).unwrap();
        prop_assert!(p.is_symmetric(0.0));
    }

    #[test]
    fn bspline_penalty_symmetric_and_banded(
        d in domain(),
        order in 1usize..5,
        extra in 0usize..5,
        q in 0usize..3,
    ) {
        let k = order + extra;
        let basis = Bspline::new(d, k, order).unwrap();
        let p = basis.penalty(q, 5).unwrap();
        prop_assert!(p.is_symmetric(0.0));
        for i in 0..k {
            for j in 0..k {
                if i.abs_diff(j) >= order {
                    prop_assert_eq!(p[(i, j)], 0.0);
                }
            }
        }
    }

    #[test]
    fn bspline_partition_of_unity(
        d in domain(),
        order in 1usize..5,
        extra in 0usize..6,
        u in prop::collection::vec(0.0..=1.0_f64, 1..20),
    ) {
        let basis = Bspline::new(d, order + extra, order).unwrap();
        let x: Vec<f64> = u.iter().map(|t| (d.0 + t * (d.1 - d.0)).min(d.1)).collect();
        let m = basis.evaluate(&x, 0).unwrap();
        for r in 0..m.rows() {
            let total: f64 = m.row(r).iter().sum();
            prop_assert!((total - 1.0).abs() < 1e-12, "row {} sums to {}", r, total);
            prop_assert!(m.row(r).iter().all(|&v| v >= -1e-15));
        }
    }

    #[test]
    fn constant_first_column(d in domain(), t in 0.0..=1.0_f64) {
        let x = [(d.0 + t * (d.1 - d.0)).min(d.1)];
        let bases: [Box<dyn Basis>; 3] = [
            Box::new(Monomial::new(d, 4).unwrap()),
            Box::new(Exponential::new(d, 4).unwrap()),
            Box::new(Fourier::new(d, 5).unwrap()),
        ];
        for basis in &bases {
            prop_assert_eq!(basis.evaluate(&x, 0).unwrap()[(0, 0)], 1.0);
        }
    }
}
