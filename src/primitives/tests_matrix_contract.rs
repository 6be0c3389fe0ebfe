// Algebraic-law contract tests for the Matrix primitives.
//
// References:
//   - Golub & Van Loan (2013) "Matrix Computations"

use super::*;

/// Identity is diagonal and equals its own transpose, for all n.
#[test]
fn contract_eye_diagonal_and_symmetric() {
    for n in 1..=6 {
        let eye = Matrix::eye(n);
        assert!(eye.is_diagonal(), "eye({n}) must be diagonal");
        assert_eq!(eye, eye.transpose(), "eye({n}) must equal its transpose");
    }
}

/// Matrix product is not commutative in general: a concrete witness.
#[test]
fn contract_matmul_not_commutative() {
    let a = Matrix::from_vec(2, 2, vec![1.0, 2.0, 3.0, 4.0]).expect("valid");
    let b = Matrix::from_vec(2, 2, vec![0.0, 1.0, 1.0, 0.0]).expect("valid");
    let ab = a.matmul(&b).expect("compatible");
    let ba = b.matmul(&a).expect("compatible");
    assert_ne!(ab, ba);
}

/// Rank of the identity is n, for all n.
#[test]
fn contract_eye_full_rank() {
    for n in 1..=6 {
        assert_eq!(Matrix::eye(n).rank().expect("square"), n);
    }
}

/// Determinant of the identity is 1, for all n.
#[test]
fn contract_eye_unit_determinant() {
    for n in 1..=6 {
        let det = Matrix::eye(n).determinant().expect("square");
        assert!((det - 1.0).abs() < 1e-12, "det(eye({n})) = {det}");
    }
}

mod matrix_proptest {
    use super::*;
    use proptest::prelude::*;

    fn deterministic_data(rows: usize, cols: usize, seed: u32) -> Vec<f64> {
        (0..rows * cols)
            .map(|i| ((i as f64 + f64::from(seed)) * 0.37).sin() * 10.0)
            .collect()
    }

    /// Transpose involution: (A^T)^T = A exactly.
    proptest! {
        #![proptest_config(ProptestConfig::with_cases(30))]

        #[test]
        fn prop_transpose_involution(
            rows in 1..=8usize,
            cols in 1..=8usize,
            seed in 0..500u32,
        ) {
            let a = Matrix::from_vec(rows, cols, deterministic_data(rows, cols, seed))
                .expect("valid");
            let att = a.transpose().transpose();
            prop_assert_eq!(att, a);
        }
    }

    /// Addition commutes: A + B = B + A exactly.
    proptest! {
        #![proptest_config(ProptestConfig::with_cases(30))]

        #[test]
        fn prop_add_commutes(
            rows in 1..=8usize,
            cols in 1..=8usize,
            seed in 0..500u32,
        ) {
            let a = Matrix::from_vec(rows, cols, deterministic_data(rows, cols, seed))
                .expect("valid");
            let b = Matrix::from_vec(rows, cols, deterministic_data(rows, cols, seed + 1000))
                .expect("valid");
            let ab = a.add(&b).expect("same shape");
            let ba = b.add(&a).expect("same shape");
            prop_assert_eq!(ab, ba);
        }
    }

    /// Multiplication associates within floating tolerance:
    /// (A * B) * C = A * (B * C).
    proptest! {
        #![proptest_config(ProptestConfig::with_cases(20))]

        #[test]
        fn prop_matmul_associates(
            m in 1..=5usize,
            k in 1..=5usize,
            l in 1..=5usize,
            n in 1..=5usize,
            seed in 0..500u32,
        ) {
            let a = Matrix::from_vec(m, k, deterministic_data(m, k, seed)).expect("valid");
            let b = Matrix::from_vec(k, l, deterministic_data(k, l, seed + 1000)).expect("valid");
            let c = Matrix::from_vec(l, n, deterministic_data(l, n, seed + 2000)).expect("valid");

            let left = a.matmul(&b).expect("compatible").matmul(&c).expect("compatible");
            let right = a.matmul(&b.matmul(&c).expect("compatible")).expect("compatible");

            prop_assert_eq!(left.shape(), right.shape());
            for (x, y) in left.as_slice().iter().zip(right.as_slice()) {
                prop_assert!((x - y).abs() < 1e-6, "associativity violated: {} vs {}", x, y);
            }
        }
    }

    /// Multiplying by the identity preserves the matrix.
    proptest! {
        #![proptest_config(ProptestConfig::with_cases(20))]

        #[test]
        fn prop_identity_matmul(
            n in 1..=6usize,
            seed in 0..500u32,
        ) {
            let a = Matrix::from_vec(n, n, deterministic_data(n, n, seed)).expect("valid");
            let result = a.matmul(&Matrix::eye(n)).expect("compatible");
            for (x, y) in result.as_slice().iter().zip(a.as_slice()) {
                prop_assert!((x - y).abs() < 1e-9);
            }
        }
    }

    /// Inverse round trip: A * A^-1 = I within tolerance, for invertible A.
    proptest! {
        #![proptest_config(ProptestConfig::with_cases(30))]

        #[test]
        fn prop_inverse_round_trip(
            n in 1..=6usize,
            seed in 0..500u64,
        ) {
            let a = Matrix::random(n, Some(seed));
            let det = a.determinant().expect("square");
            // well-conditioned inputs only; near-singular draws are skipped
            prop_assume!(det.abs() > 1e-3);

            let inv = a.inverse().expect("determinant checked above");
            let product = a.matmul(&inv).expect("square");
            let eye = Matrix::eye(n);
            for (x, y) in product.as_slice().iter().zip(eye.as_slice()) {
                prop_assert!((x - y).abs() < 1e-8, "A * A^-1 deviates from I: {} vs {}", x, y);
            }
        }
    }

    /// Uniform scaling never flips invertibility: if A inverts, so does
    /// c * A for modest nonzero c, even when det(cA) is below tolerance.
    proptest! {
        #![proptest_config(ProptestConfig::with_cases(20))]

        #[test]
        fn prop_inverse_scale_invariant(
            n in 4..=8usize,
            seed in 0..200u64,
        ) {
            let a = Matrix::random(n, Some(seed));
            let det = a.determinant().expect("square");
            prop_assume!(det.abs() > 1e-3);

            let scaled = a.mul_scalar(0.1);
            let inv = scaled.inverse().expect("scaling by 0.1 preserves invertibility");
            let product = scaled.matmul(&inv).expect("square");
            let eye = Matrix::eye(n);
            for (x, y) in product.as_slice().iter().zip(eye.as_slice()) {
                prop_assert!((x - y).abs() < 1e-8);
            }
        }
    }

    /// Determinant of a transpose equals the determinant.
    proptest! {
        #![proptest_config(ProptestConfig::with_cases(20))]

        #[test]
        fn prop_determinant_transpose_invariant(
            n in 1..=5usize,
            seed in 0..500u32,
        ) {
            let a = Matrix::from_vec(n, n, deterministic_data(n, n, seed)).expect("valid");
            let d = a.determinant().expect("square");
            let dt = a.transpose().determinant().expect("square");
            prop_assert!((d - dt).abs() < 1e-6 * (1.0 + d.abs()), "det(A) = {}, det(A^T) = {}", d, dt);
        }
    }
}
