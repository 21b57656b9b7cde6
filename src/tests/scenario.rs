use approx::assert_abs_diff_eq;
use num_traits::{One, Zero};

use crate::data::linear_algebra::matrix::{DenseMatrix, Matrix, SparseMatrix, SymmetricTridiagonal};
use crate::data::linear_algebra::vector::{DenseVector, Vector};
use crate::data::linear_algebra::vector::test::TestVector;
use crate::data::number_types::complex::{ComplexF64, ComplexRational};
use crate::data::number_types::rational::{Rational64, RationalBig};
use crate::error::LinalgError;
use crate::io::{parse_csv, write_csv};
use crate::tests::{matrix, only_nonzeros_stored};
use crate::{R64, RB};

type T = Rational64;

/// The matrix `[[1, 2], [3, 2]]` along every path.
#[test]
fn two_by_two() {
    let a = matrix(vec![vec![1, 2], vec![3, 2]]);
    let b = DenseVector::<T>::from_test_data(vec![8, 7]);
    let expected_x = DenseVector::new(vec![R64!(-1, 2), R64!(17, 4)], 2);

    assert_eq!(a.det().unwrap(), R64!(-4));

    let inverse = a.inverse().unwrap();
    assert_eq!(inverse.to_dense(), DenseMatrix::from_data(vec![
        vec![R64!(-1, 2), R64!(1, 2)],
        vec![R64!(3, 4), R64!(-1, 4)],
    ]).unwrap());
    assert_eq!((&inverse * &a).unwrap(), SparseMatrix::identity(2));

    assert_eq!(a.solve(&b).unwrap(), expected_x);
    assert_eq!(a.solve_by_reduction(&b).unwrap(), expected_x);
    assert_eq!((&inverse * &b).unwrap(), expected_x);

    let lu = a.lu_no_pivoting().unwrap();
    assert_eq!(lu.solve(&b).unwrap(), expected_x);
}

/// A zero leading pivot stops the decomposition, but not the inversion.
#[test]
fn zero_leading_pivot() {
    let a = matrix(vec![vec![0, 1, 2], vec![1, 0, 3], vec![4, -3, 8]]);

    assert!(matches!(a.lu_no_pivoting(), Err(LinalgError::SingularPivot { index: 0 })));
    assert!(matches!(a.solve(&DenseVector::from_test_data(vec![1, 2, 3])), Err(LinalgError::SingularPivot { .. })));

    // Fall back to the pivoting path
    let inverse = a.inverse().unwrap();
    assert_eq!((&a * &inverse).unwrap(), SparseMatrix::identity(3));
    let b = DenseVector::<T>::from_test_data(vec![1, 2, 3]);
    let x = a.solve_by_reduction(&b).unwrap();
    assert_eq!((&a * &x).unwrap(), b);
}

#[test]
fn one_by_one() {
    let a = matrix(vec![vec![-3]]);
    assert_eq!(a.det().unwrap(), R64!(-3));
    assert_eq!(a.inverse().unwrap().get(0, 0).unwrap(), R64!(-1, 3));
    assert_eq!(a.reduce().unwrap().get(0, 0).unwrap(), R64!(1));
}

#[test]
fn sparsity_after_mutation() {
    let mut a = SparseMatrix::<T>::new(3, 3);
    a.set(0, 0, R64!(1)).unwrap();
    a.set(1, 2, R64!(5)).unwrap();
    a.set(1, 2, R64!(0)).unwrap();
    a.set(2, 1, R64!(0)).unwrap();
    assert_eq!(a.nnz(), 1);

    a.set_row(2, &DenseVector::from_test_data(vec![0, 7, 0])).unwrap();
    a.set_column(0, &DenseVector::from_test_data(vec![0, 0, 2])).unwrap();
    assert_eq!(a.nnz(), 2);
    assert!(only_nonzeros_stored(&a));

    let dense = a.to_dense();
    assert_eq!(SparseMatrix::from(&dense).to_dense(), dense);
    assert_eq!(SparseMatrix::from(&dense), a);

    a *= &R64!(0);
    assert_eq!(a.nnz(), 0);
}

#[test]
fn widening() {
    let a = matrix(vec![vec![1, 0], vec![0, 2]]);

    let shifted: DenseMatrix<T> = a.add_scalar(&R64!(1));
    assert_eq!(shifted, DenseMatrix::from_data(vec![vec![R64!(2), R64!(1)], vec![R64!(1), R64!(3)]]).unwrap());

    let v = DenseVector::from_test_data(vec![1, -1]);
    let plus_vector: DenseMatrix<T> = (&a + &v).unwrap();
    assert_eq!(plus_vector, DenseMatrix::from_data(vec![vec![R64!(2), R64!(-1)], vec![R64!(1), R64!(1)]]).unwrap());

    let sum: SparseMatrix<T> = (&a + &a).unwrap();
    assert_eq!(sum, a.scale(&R64!(2)));
}

#[test]
fn nullspace() {
    let a = matrix(vec![vec![2, 1, 1, 0], vec![4, -6, 0, 1], vec![-2, 7, 2, 3]]);
    let v = a.nullspace().unwrap();
    assert_eq!(v.get(3), Some(&R64!(1)));
    assert!((&a * &v).unwrap().is_zero());
}

#[test]
fn tridiagonal_agrees_with_sparse() {
    let m = SymmetricTridiagonal::<T>::new(
        DenseVector::from_test_data(vec![4, 5, 6, 7]),
        DenseVector::from_test_data(vec![1, -2, 3]),
    ).unwrap();
    let general = m.to_sparse();
    assert!(general.is_symmetric());

    assert_eq!(m.det(), general.det().unwrap());

    let d = DenseVector::from_test_data(vec![1, 2, 3, 4]);
    assert_eq!(m.solve(&d).unwrap(), general.solve(&d).unwrap());
    assert_eq!(m.multiply_vector(&d).unwrap(), (&general * &d).unwrap());

    assert!(matches!(m.select_rows(&[0, 1]), Err(LinalgError::UnsupportedOperation { .. })));
    assert!(matches!(m.slice_block(0..2, 1..3), Err(LinalgError::UnsupportedOperation { .. })));
    assert_eq!(m.slice(1..3).unwrap().to_sparse(), general.slice(1..3, 1..3).unwrap());
    assert_eq!(m.slice_block(1..3, 1..3).unwrap().to_sparse(), general.slice(1..3, 1..3).unwrap());
}

#[test]
fn csv_round_trip() {
    let a = matrix(vec![vec![1, 0, -2], vec![0, 0, 0], vec![3, 4, 0]]).scale(&R64!(1, 3));

    let mut buffer = Vec::new();
    write_csv(&a, &mut buffer).unwrap();
    let text = String::from_utf8(buffer).unwrap();
    assert_eq!(parse_csv::<T>(&text).unwrap(), a);

    match parse_csv::<T>("1,2\n3,4,5\n") {
        Err(LinalgError::MalformedInput(crate::io::error::ImportError::Parse(error))) => {
            assert_eq!(error.file_location(), Some((2, "3,4,5")));
        },
        other => panic!("unexpected result: {:?}", other),
    }
}

#[test]
fn big_rational() {
    let a = SparseMatrix::from_triplets(2, 2, vec![
        (0, 0, RB!(1)), (0, 1, RB!(1, 2)),
        (1, 0, RB!(1, 2)), (1, 1, RB!(1, 3)),
    ]).unwrap();

    assert_eq!(a.det().unwrap(), RB!(1, 12));
    let inverse = a.inverse().unwrap();
    assert_eq!(inverse.get(0, 0).unwrap(), RB!(4));
    assert_eq!(inverse.get(1, 1).unwrap(), RB!(12));
    assert_eq!((&a * &inverse).unwrap(), SparseMatrix::<RationalBig>::identity(2));
}

#[test]
fn complex_rational() {
    let c = |re: i64, im: i64| ComplexRational::new(R64!(re), R64!(im));
    let a = SparseMatrix::from_triplets(2, 2, vec![
        (0, 0, c(0, 1)), (0, 1, c(1, 0)),
        (1, 0, c(2, 0)), (1, 1, c(1, -1)),
    ]).unwrap();

    // i (1 - i) - 2
    assert_eq!(a.det().unwrap(), c(-1, 1));
    let inverse = a.inverse().unwrap();
    assert_eq!((&inverse * &a).unwrap(), SparseMatrix::identity(2));

    let b = DenseVector::new(vec![c(1, 0), c(0, 0)], 2);
    let x = a.solve(&b).unwrap();
    assert_eq!((&a * &x).unwrap(), b);

    let text = "0+1i,1\n2,1-1i\n";
    assert_eq!(parse_csv::<ComplexRational>(text).unwrap(), a);
}

#[test]
fn float() {
    let a = SparseMatrix::from_triplets(3, 3, vec![
        (0, 0, 4f64), (0, 1, 1f64),
        (1, 0, 1f64), (1, 1, 3f64), (1, 2, -1f64),
        (2, 1, -1f64), (2, 2, 2f64),
    ]).unwrap();
    let b = DenseVector::new(vec![1f64, 2f64, 3f64], 3);

    let x = a.solve(&b).unwrap();
    let residual = (&(&a * &x).unwrap() - &b).unwrap();
    for value in residual.iter() {
        assert_abs_diff_eq!(*value, 0f64, epsilon = 1e-12);
    }

    let (lower, upper) = a.lu_no_pivoting().unwrap().into_parts();
    let product = (&lower * &upper).unwrap();
    for i in 0..3 {
        for j in 0..3 {
            assert_abs_diff_eq!(product.get(i, j).unwrap(), a.get(i, j).unwrap(), epsilon = 1e-12);
        }
    }

    assert_abs_diff_eq!(a.det().unwrap(), 4f64 * 5f64 - 1f64 * 2f64, epsilon = 1e-12);

    let inverse = a.inverse().unwrap();
    let identity = (&inverse * &a).unwrap();
    for i in 0..3 {
        for j in 0..3 {
            let expected = if i == j { f64::one() } else { f64::zero() };
            assert_abs_diff_eq!(identity.get(i, j).unwrap(), expected, epsilon = 1e-12);
        }
    }
}

/// Values that underflow to zero are not stored.
#[test]
fn float_underflow() {
    let a = SparseMatrix::from_triplets(2, 2, vec![(0, 0, 1e-200f64), (1, 1, 1f64)]).unwrap();

    let scaled = a.scale(&1e-200f64);
    assert_eq!(scaled.nnz(), 1);
    assert!(only_nonzeros_stored(&scaled));
    assert_eq!(scaled, SparseMatrix::from_triplets(2, 2, vec![(1, 1, 1e-200f64)]).unwrap());

    let mut b = a.clone();
    b *= &1e-200f64;
    assert_eq!(b, scaled);

    let mut c = SparseMatrix::from_triplets(1, 2, vec![(0, 0, 5e-324f64), (0, 1, 1f64)]).unwrap();
    c /= &4f64;
    assert_eq!(c, SparseMatrix::from_triplets(1, 2, vec![(0, 1, 0.25f64)]).unwrap());
}

#[test]
fn complex_float() {
    let a = SparseMatrix::from_triplets(2, 2, vec![
        (0, 0, ComplexF64::new(2f64, 0f64)),
        (1, 1, ComplexF64::new(0f64, 4f64)),
    ]).unwrap();

    let inverse = a.inverse().unwrap();
    assert_abs_diff_eq!(inverse.get(1, 1).unwrap().im, -0.25f64, epsilon = 1e-15);
    assert_eq!(inverse.nnz(), 2);
}
