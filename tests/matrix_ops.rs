// End-to-end tests through the public API.
// Run with: cargo test --test matrix_ops

use matriz::prelude::*;

#[test]
fn constructors_cover_all_modes() {
    // fill
    let filled = Matrix::from_fill(2, 4, 7.0);
    assert_eq!(filled.shape(), (2, 4));
    assert!(filled.as_slice().iter().all(|&x| x == 7.0));

    // generator
    let generated = Matrix::from_fn(2, 3, |i, j| (i * 10 + j) as f64);
    assert_eq!(generated.as_slice(), &[0.0, 1.0, 2.0, 10.0, 11.0, 12.0]);

    // dense literal
    let dense = Matrix::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
    assert_eq!(dense.shape(), (2, 2));

    // diagonal literal
    let diag = Matrix::from_diagonal(&[1.0, 2.0, 3.0]);
    assert_eq!(
        diag.as_slice(),
        &[1.0, 0.0, 0.0, 0.0, 2.0, 0.0, 0.0, 0.0, 3.0]
    );

    // random, 1x1 and n x n
    let scalar = Matrix::random(1, None);
    assert_eq!(scalar.shape(), (1, 1));
    let square = Matrix::random(3, Some(9));
    assert_eq!(square.shape(), (3, 3));
    assert!(square.as_slice().iter().all(|&x| (0.0..1.0).contains(&x)));
}

#[test]
fn arithmetic_pipeline() {
    let a = Matrix::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
    let b = Matrix::from_rows(vec![vec![5.0, 6.0], vec![7.0, 8.0]]).unwrap();

    let sum = a.add(&b).unwrap();
    assert_eq!(sum.as_slice(), &[6.0, 8.0, 10.0, 12.0]);

    let product = a.matmul(&b).unwrap();
    assert_eq!(product.as_slice(), &[19.0, 22.0, 43.0, 50.0]);

    let quotient = a.div(&b).unwrap();
    let expected = [3.0, -2.0, 2.0, -1.0];
    for (&got, &want) in quotient.as_slice().iter().zip(&expected) {
        assert!((got - want).abs() < 1e-10, "got {got}, want {want}");
    }
}

#[test]
fn linear_algebra_queries() {
    let singular = Matrix::from_rows(vec![
        vec![1.0, 2.0, 3.0],
        vec![4.0, 5.0, 6.0],
        vec![7.0, 8.0, 9.0],
    ])
    .unwrap();

    assert!(singular.determinant().unwrap().abs() < 1e-9);
    assert_eq!(singular.rank().unwrap(), 2);
    assert!(matches!(
        singular.inverse(),
        Err(MatrizError::Singular { .. })
    ));

    let wide = Matrix::zeros(2, 3);
    assert!(matches!(wide.inverse(), Err(MatrizError::NotSquare { .. })));
    assert!(matches!(
        wide.determinant(),
        Err(MatrizError::NotSquare { .. })
    ));
    assert!(matches!(wide.rank(), Err(MatrizError::NotSquare { .. })));
}

#[test]
fn predicates() {
    assert!(is_matrix(&Matrix::eye(3)));
    assert!(!is_matrix(&vec![vec![1.0, 0.0], vec![0.0, 1.0]]));

    assert!(Matrix::eye(3).is_diagonal());
    assert!(!Matrix::ones(2, 2).is_diagonal());

    let a = Matrix::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
    let b = Matrix::from_rows(vec![vec![1.0, 2.0], vec![5.0, 4.0]]).unwrap();
    let eq = a.equal(&b).unwrap();
    assert_eq!(eq.as_slice(), &[true, true, false, true]);
}

#[test]
fn errors_carry_context() {
    let err = Matrix::zeros(2, 2).add(&Matrix::zeros(2, 3)).unwrap_err();
    assert!(err.to_string().contains("2x2"));
    assert!(err.to_string().contains("2x3"));

    let err = Matrix::zeros(2, 3).inverse().unwrap_err();
    assert!(err.to_string().contains("square"));
}

#[test]
fn serde_round_trip() {
    let m = Matrix::from_rows(vec![vec![1.5, -2.0], vec![0.0, 4.25]]).unwrap();
    let json = serde_json::to_string(&m).unwrap();
    let back: Matrix<f64> = serde_json::from_str(&json).unwrap();
    assert_eq!(back, m);
}
