//! Integration tests for the full Gaussian elimination pipeline
//!
//! Random systems are diagonally dominant so they have a unique, well
//! conditioned solution; every test seeds its own RNG.

use approx::assert_abs_diff_eq;
use math_gauss::{
    AugmentedMatrix, EliminationConfig, GaussError, Schedule, back_substitute, eliminate,
    load_matrix, solve, verify,
};
use ndarray::{Array1, Array2, array};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// Random `n x (n+1)` system with a strictly diagonally dominant coefficient block
fn random_system(n: usize, rng: &mut StdRng) -> AugmentedMatrix<f64> {
    let mut data: Array2<f64> =
        Array2::from_shape_fn((n, n + 1), |_| rng.random_range(-1.0..1.0));
    for i in 0..n {
        let off_diagonal: f64 = (0..n).filter(|&j| j != i).map(|j| data[[i, j]].abs()).sum();
        let sign = if rng.random_bool(0.5) { 1.0 } else { -1.0 };
        data[[i, i]] = sign * (off_diagonal + 1.0);
    }
    AugmentedMatrix::new(data).expect("random system has n x (n+1) shape")
}

fn textbook_system() -> AugmentedMatrix<f64> {
    AugmentedMatrix::new(array![
        [2.0, 1.0, -1.0, 8.0],
        [-3.0, -1.0, 2.0, -11.0],
        [-2.0, 1.0, 2.0, -3.0],
    ])
    .expect("valid 3x4 matrix")
}

fn solve_with(matrix: &AugmentedMatrix<f64>, schedule: Schedule) -> Array1<f64> {
    let config = EliminationConfig::default().with_schedule(schedule);
    solve(matrix, &config)
        .expect("random system has a unique solution")
        .solution
        .x
}

#[test]
fn test_random_systems_verify() {
    let mut rng = StdRng::seed_from_u64(42);
    for n in [1, 2, 3, 5, 8, 13, 21, 34, 50, 60] {
        let matrix = random_system(n, &mut rng);
        for schedule in [Schedule::Sequential, Schedule::Concurrent] {
            let config = EliminationConfig::default().with_schedule(schedule);
            let report = solve(&matrix, &config).expect("unique solution");
            assert!(
                report.verification.valid,
                "n = {n} ({schedule}): max residual {}",
                report.verification.max_residual
            );
            assert!(report.solution.is_unique());
        }
    }
}

#[test]
fn test_subdiagonal_is_zero_after_elimination() {
    let mut rng = StdRng::seed_from_u64(7);
    let tol = 1e-9;
    for n in [4, 16, 40] {
        let matrix = random_system(n, &mut rng);
        for schedule in [Schedule::Sequential, Schedule::Concurrent] {
            let config = EliminationConfig::default().with_schedule(schedule);
            let echelon = eliminate(&matrix, &config).expect("unique solution");
            let a = echelon.matrix();
            for i in 0..n {
                for j in (i + 1)..n {
                    assert!(
                        a[[j, i]].abs() < tol,
                        "entry ({j}, {i}) = {} after elimination",
                        a[[j, i]]
                    );
                }
            }
        }
    }
}

#[test]
fn test_permuted_equations_give_same_solution() {
    let mut rng = StdRng::seed_from_u64(1234);
    for n in [3, 10, 25] {
        let matrix = random_system(n, &mut rng);
        let reference = solve_with(&matrix, Schedule::Sequential);

        for _ in 0..3 {
            let mut order: Vec<usize> = (0..n).collect();
            order.shuffle(&mut rng);
            let permuted = matrix.permute_rows(&order).expect("valid permutation");
            let x = solve_with(&permuted, Schedule::Sequential);
            for i in 0..n {
                assert_abs_diff_eq!(x[i], reference[i], epsilon = 1e-9);
            }
        }
    }
}

#[test]
fn test_sequential_and_concurrent_agree() {
    let mut rng = StdRng::seed_from_u64(99);
    for n in [2, 9, 30, 64] {
        let matrix = random_system(n, &mut rng);
        let sequential = solve_with(&matrix, Schedule::Sequential);
        let concurrent = solve_with(&matrix, Schedule::Concurrent);
        assert_eq!(sequential, concurrent, "n = {n}");

        let pinned = EliminationConfig::concurrent().with_num_threads(3);
        let x = solve(&matrix, &pinned).expect("unique solution").solution.x;
        assert_eq!(sequential, x, "n = {n} on 3 threads");
    }
}

#[test]
fn test_textbook_scenario() {
    let matrix = textbook_system();
    for schedule in [Schedule::Sequential, Schedule::Concurrent] {
        let config = EliminationConfig::default().with_schedule(schedule);
        let echelon = eliminate(&matrix, &config).expect("unique solution");
        let solution = back_substitute(&echelon, config.tolerance).expect("unique solution");
        assert_abs_diff_eq!(solution.x[0], 2.0, epsilon = 1e-6);
        assert_abs_diff_eq!(solution.x[1], 3.0, epsilon = 1e-6);
        assert_abs_diff_eq!(solution.x[2], -1.0, epsilon = 1e-6);

        let verification = verify(&matrix, &solution.x, config.tolerance).expect("same size");
        assert!(verification.valid);
    }
}

#[test]
fn test_redundant_consistent_pair_is_not_inconsistent() {
    let matrix = AugmentedMatrix::from_rows(vec![vec![1.0_f64, 1.0, 2.0], vec![2.0, 2.0, 4.0]])
        .expect("valid 2x3 matrix");
    for schedule in [Schedule::Sequential, Schedule::Concurrent] {
        let config = EliminationConfig::default().with_schedule(schedule);
        let report = solve(&matrix, &config).expect("dependent but consistent");
        assert_eq!(report.solution.free_variables, vec![1]);
        assert!(report.verification.valid);
    }
}

#[test]
fn test_zero_equation_with_nonzero_rhs_is_inconsistent() {
    let single = AugmentedMatrix::from_rows(vec![vec![0.0_f64, 5.0]]).expect("valid 1x2 matrix");
    let padded = AugmentedMatrix::from_rows(vec![vec![0.0_f64, 0.0, 5.0], vec![0.0, 0.0, 0.0]])
        .expect("valid 2x3 matrix");
    let buried = AugmentedMatrix::from_rows(vec![
        vec![1.0_f64, 2.0, 3.0, 1.0],
        vec![0.0, 0.0, 0.0, 5.0],
        vec![4.0, 5.0, 6.0, 2.0],
    ])
    .expect("valid 3x4 matrix");

    for matrix in [single, padded, buried] {
        for schedule in [Schedule::Sequential, Schedule::Concurrent] {
            let config = EliminationConfig::default().with_schedule(schedule);
            match solve(&matrix, &config) {
                Err(GaussError::InconsistentSystem { .. }) => {}
                other => panic!("expected an inconsistent system, got {other:?}"),
            }
        }
    }
}

#[test]
fn test_single_row_with_three_columns_is_rejected() {
    let err = AugmentedMatrix::from_rows(vec![vec![0.0_f64, 0.0, 5.0]]).unwrap_err();
    assert_eq!(
        err,
        GaussError::DimensionMismatch {
            expected: 2,
            got: 3
        }
    );
}

#[test]
fn test_tolerance_changes_degeneracy_decision() {
    // second pivot is 1e-7 after elimination
    let matrix =
        AugmentedMatrix::from_rows(vec![vec![1.0_f64, 1.0, 2.0], vec![1.0, 1.0 + 1e-7, 2.0]])
            .expect("valid 2x3 matrix");

    let strict = EliminationConfig::default();
    let report = solve(&matrix, &strict).expect("nonsingular at 1e-9");
    assert!(report.solution.is_unique());

    let loose = EliminationConfig::default().with_tolerance(1e-6);
    let report = solve(&matrix, &loose).expect("treated as dependent at 1e-6");
    assert_eq!(report.solution.free_variables, vec![1]);
}

#[test]
fn test_overflowing_solution_fails_verification() {
    // 1e308 / 1e-8 overflows, so x = (-inf, inf) and every residual is NaN
    let matrix = AugmentedMatrix::new(array![[1.0_f64, 1.0, 0.0], [0.0, 1e-8, 1e308]])
        .expect("valid 2x3 matrix");
    for schedule in [Schedule::Sequential, Schedule::Concurrent] {
        let config = EliminationConfig::default().with_schedule(schedule);
        let report = solve(&matrix, &config).expect("nonsingular at 1e-9");
        assert!(report.solution.x.iter().all(|v| v.is_infinite()));
        assert!(!report.verification.valid);
        assert_eq!(
            report
                .verification
                .first_failure
                .expect("mismatch reported")
                .row,
            0
        );
        assert!(report.verification.max_residual.is_nan());
    }
}

#[test]
fn test_load_and_solve_file() {
    let path = std::env::temp_dir().join(format!("math-gauss-{}.txt", std::process::id()));
    std::fs::write(&path, "2 1 -1 8\n\n-3 -1 2 -11\n-2 1 2 -3\n").expect("write temp file");

    let matrix = load_matrix(&path).expect("valid matrix file");
    let _ = std::fs::remove_file(&path);
    assert_eq!(matrix, textbook_system());

    let report = solve(&matrix, &EliminationConfig::concurrent()).expect("unique solution");
    assert!(report.verification.valid);
    assert_abs_diff_eq!(report.solution.x[1], 3.0, epsilon = 1e-6);
}

#[test]
fn test_bundled_sample_matrix() {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/data/matrix.txt");
    let matrix = load_matrix(path).expect("bundled sample parses");
    assert_eq!(matrix, textbook_system());
}
