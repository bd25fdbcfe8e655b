use approx::assert_relative_eq;
use integration_tests::{cubic, steep};
use numlab_expr::Expression;
use numlab_solvers::{
    Config,
    equation::{DomainError, Error, Iteration, Method, NumericalError, Status, bisection, chord},
};

#[test]
fn bisection_on_the_cubic_meets_the_tolerance() {
    let config = Config::new(100, 0.001).unwrap();
    let solution = bisection::solve_unobserved(&cubic, [-4.0, 4.0], &config).expect("should converge");

    assert_eq!(solution.status, Status::Converged);
    assert!(solution.tolerance < 0.001);
    assert_relative_eq!(solution.f_value, 0.0, epsilon = 1e-9);
    assert_relative_eq!(solution.root, -1.0, epsilon = 1e-3);
}

#[test]
fn both_methods_agree_on_a_parsed_expression() {
    let f: Expression = "cos(x) - x".parse().unwrap();
    let config = Config::new(200, 1e-10).unwrap();

    let roots: Vec<f64> = Method::ALL
        .into_iter()
        .map(|method| method.find_root(&f, [0.0, 1.5], &config, ()).unwrap().root)
        .collect();

    // The Dottie number.
    for root in roots {
        assert_relative_eq!(root, 0.739_085_133_215_160_6, epsilon = 1e-8);
    }
}

#[test]
fn every_method_rejects_a_bracket_without_sign_change() {
    let config = Config::default();
    for method in Method::ALL {
        let mut observed = 0;
        let result = method.find_root(&cubic, [0.0, 4.0], &config, |_: &Iteration| {
            observed += 1;
            None
        });

        assert!(
            matches!(result, Err(Error::Domain(DomainError::NoSignChange { .. }))),
            "{method}: {result:?}"
        );
        assert_eq!(observed, 0, "{method} iterated before failing");
    }
}

#[test]
fn degenerate_chord_is_an_error_not_nan() {
    let result = chord::solve_unobserved(&steep, [-1.5, 1.5], &Config::default());
    assert!(matches!(
        result,
        Err(Error::Numerical(NumericalError::DegenerateSecant { .. }))
    ));

    // Bisection never forms a chord, so the same function is fine.
    let solution = bisection::solve_unobserved(&steep, [-1.5, 1.5], &Config::default()).unwrap();
    assert_eq!(solution.root, 0.0);
}

#[test]
fn expression_domain_errors_surface_with_their_source() {
    use std::error::Error as _;

    // The pole sits exactly on the first midpoint.
    let f: Expression = "1 / (x - 0.5)".parse().unwrap();
    let err = bisection::solve_unobserved(&f, [0.0, 1.0], &Config::default()).unwrap_err();

    let Error::Numerical(NumericalError::Evaluation { x, .. }) = &err else {
        panic!("expected an evaluation error, got {err:?}");
    };
    assert_eq!(*x, 0.5);
    let source = err.source().and_then(|e| e.source());
    assert!(source.is_some_and(|s| s.to_string().contains("division by zero")));
}

#[test]
fn repeated_calls_do_not_share_state() {
    let config = Config::new(100, 1e-9).unwrap();
    let f: Expression = "x^2 - 2".parse().unwrap();

    for method in Method::ALL {
        let first = method.find_root(&f, [0.0, 2.0], &config, ()).unwrap();
        let second = method.find_root(&f, [0.0, 2.0], &config, ()).unwrap();
        assert_eq!(first, second);
        assert_eq!(first.history.len(), second.history.len());
    }
}
