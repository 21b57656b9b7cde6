use std::env;

use rela::data::linear_algebra::matrix::{Matrix, SparseMatrix, SymmetricTridiagonal};
use rela::data::linear_algebra::vector::{DenseVector, Vector};
use rela::data::number_types::complex::ComplexRational;
use rela::data::number_types::rational::{Rational64, RationalBig};
use rela::error::LinalgError;
use rela::io::error::ImportError;
use rela::io::{export_csv, import, import_csv};
use rela::{R64, RB};

use super::get_test_file_path;

type T = Rational64;

fn read<F: rela::data::number_types::traits::Scalar>(name: &str) -> SparseMatrix<F> {
    import(&get_test_file_path(name)).unwrap()
}

#[test]
fn two_by_two() {
    let a = read::<T>("two_by_two");
    let b = read::<T>("rhs").get_column(0).unwrap();

    assert_eq!(a.shape(), (2, 2));
    assert_eq!(a.det().unwrap(), R64!(-4));
    assert_eq!(a.solve(&b).unwrap(), DenseVector::new(vec![R64!(-1, 2), R64!(17, 4)], 2));
    assert_eq!(a.inverse().unwrap().get(1, 0).unwrap(), R64!(3, 4));
}

#[test]
fn zero_pivot() {
    let a = read::<RationalBig>("zero_pivot");

    assert!(matches!(a.lu_no_pivoting(), Err(LinalgError::SingularPivot { index: 0 })));
    let inverse = a.inverse().unwrap();
    assert_eq!((&inverse * &a).unwrap(), SparseMatrix::identity(3));
    assert_eq!(a.det().unwrap(), RB!(-2));
}

#[test]
fn banded() {
    let a = read::<T>("banded");
    assert_eq!(a.shape(), (5, 5));
    assert_eq!(a.nnz(), 13);
    assert!(a.is_symmetric());

    let off_diagonal = (0..4).map(|i| a.get(i, i + 1).unwrap()).collect::<Vec<_>>();
    let tridiagonal = SymmetricTridiagonal::new(a.diagonal(), DenseVector::new(off_diagonal, 4)).unwrap();
    assert_eq!(tridiagonal.to_sparse(), a);
    assert_eq!(tridiagonal.det(), a.det().unwrap());

    let d = DenseVector::new((1..=5).map(|v| R64!(v)).collect(), 5);
    let x = tridiagonal.solve(&d).unwrap();
    assert_eq!(x, a.solve(&d).unwrap());
    assert_eq!((&a * &x).unwrap(), d);
}

#[test]
fn complex() {
    let a = read::<ComplexRational>("complex");
    let c = |re: i64, im: i64| ComplexRational::new(R64!(re), R64!(im));

    assert_eq!(a.get(0, 0).unwrap(), c(1, 1));
    assert_eq!(a.get(1, 1).unwrap(), c(0, -1));
    assert_eq!(a.det().unwrap(), c(1, -1));
    assert_eq!((&a * &a.inverse().unwrap()).unwrap(), SparseMatrix::identity(2));
}

#[test]
fn float() {
    let a = read::<f64>("two_by_two");
    let x = a.solve(&DenseVector::new(vec![8f64, 7f64], 2)).unwrap();
    approx::assert_abs_diff_eq!(x[0], -0.5f64, epsilon = 1e-12);
    approx::assert_abs_diff_eq!(x[1], 4.25f64, epsilon = 1e-12);
}

#[test]
fn malformed() {
    match import::<T>(&get_test_file_path("comment")) {
        Err(LinalgError::MalformedInput(ImportError::Parse(error))) => {
            assert_eq!(error.file_location(), Some((1, "# not a matrix")));
        },
        other => panic!("expected a parse error, got {:?}", other),
    }

    assert!(matches!(
        import::<T>(&get_test_file_path("does_not_exist")),
        Err(LinalgError::MalformedInput(ImportError::IO(_))),
    ));
}

#[test]
fn export_then_import() {
    let a = read::<T>("banded").scale(&R64!(-3, 7));

    let path = env::temp_dir().join(format!("rela_export_{}.txt", std::process::id()));
    export_csv(&a, &path).unwrap();
    // Not a csv extension, so read it directly as csv
    let read_back: SparseMatrix<T> = import_csv(&path).unwrap();
    std::fs::remove_file(&path).unwrap();

    assert_eq!(read_back, a);
    assert_eq!(read_back.get(2, 3).unwrap(), R64!(-1, 7));
}
