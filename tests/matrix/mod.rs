use std::ptr;

use utmatrix::{IndexedVector, LinearAlgebraError, MAX_MATRIX_SIZE, TriangularMatrix};
use utmatrix::io::read_matrix;

use crate::init_logging;

#[test]
fn can_create_matrix_with_positive_length() {
    assert!(TriangularMatrix::<i32>::new(5).is_ok());
}

#[test]
fn cant_create_too_large_matrix() {
    init_logging();

    assert!(matches!(
        TriangularMatrix::<i32>::new(MAX_MATRIX_SIZE + 1),
        Err(LinearAlgebraError::InvalidSize { .. }),
    ));
}

#[test]
fn can_create_matrix_from_rows() {
    let rows = vec![
        IndexedVector::from_values(vec![1, 2, 3], 0).unwrap(),
        IndexedVector::from_values(vec![4, 5], 0).unwrap(),
        IndexedVector::from_values(vec![6], 0).unwrap(),
    ];
    let m = TriangularMatrix::from_rows(rows).unwrap();

    assert_eq!(m.size(), 3);
    assert_eq!(m.value(1, 2), Ok(5));
}

#[test]
fn copied_matrix_is_equal_to_source_one() {
    let mut m = TriangularMatrix::<i32>::new(4).unwrap();
    m[(0, 0)] = 1;

    assert_eq!(m.clone(), m);
}

#[test]
fn copied_matrix_has_its_own_memory() {
    let mut m = TriangularMatrix::<i32>::new(4).unwrap();
    m[(0, 0)] = 1;
    let copy = m.clone();

    assert!(!ptr::eq(&m[0][0], &copy[0][0]));
}

#[test]
fn can_get_size() {
    assert_eq!(TriangularMatrix::<i32>::new(4).unwrap().size(), 4);
}

#[test]
fn rows_shrink_by_one() {
    let m = TriangularMatrix::<i32>::new(4).unwrap();

    let lengths = m.rows().map(IndexedVector::len).collect::<Vec<_>>();
    assert_eq!(lengths, vec![4, 3, 2, 1]);
}

#[test]
fn can_set_and_get_element() {
    let mut m = TriangularMatrix::<i32>::new(2).unwrap();
    m[(0, 0)] = 1;

    assert_eq!(m[0][0], 1);
}

#[test]
fn throws_when_getting_row_with_too_large_index() {
    let m = TriangularMatrix::<i32>::new(2).unwrap();

    assert!(matches!(m.row(10000), Err(LinearAlgebraError::OutOfRange { index: 10000, len: 2 })));
}

#[test]
fn throws_when_getting_element_beyond_row() {
    let m = TriangularMatrix::<i32>::new(2).unwrap();

    assert_eq!(m.get(1, 1), Err(LinearAlgebraError::OutOfRange { index: 1, len: 1 }));
}

#[test]
#[allow(clippy::self_assignment, clippy::redundant_clone)]
fn can_assign_matrix_to_itself() {
    let mut m = TriangularMatrix::<i32>::new(2).unwrap();
    m[(1, 0)] = 5;
    m = m.clone();

    assert_eq!(m[1][0], 5);
}

#[test]
fn can_assign_matrices_of_equal_size() {
    let mut m1 = TriangularMatrix::<i32>::new(2).unwrap();
    for i in 0..2 {
        for value in m1.row_mut(i).unwrap().iter_mut() {
            *value = 1;
        }
    }
    let mut m2 = TriangularMatrix::new(2).unwrap();
    m2.clone_from(&m1);

    assert_eq!(m1, m2);
}

#[test]
fn assign_operator_change_matrix_size() {
    let m1 = TriangularMatrix::<i32>::new(2).unwrap();
    let mut m2 = TriangularMatrix::<i32>::new(3).unwrap();
    m2.clone_from(&m1);

    assert_eq!(m2.size(), 2);
}

#[test]
fn can_assign_matrices_of_different_size() {
    let mut m1 = TriangularMatrix::<i32>::new(2).unwrap();
    m1[(0, 1)] = 11;
    let mut m2 = TriangularMatrix::<i32>::new(5).unwrap();
    m2.clone_from(&m1);

    assert_eq!(m1, m2);
    assert_eq!(m2.rows().map(IndexedVector::len).collect::<Vec<_>>(), vec![2, 1]);
}

#[test]
fn compare_equal_matrices_return_true() {
    assert!(TriangularMatrix::<i32>::new(2).unwrap() == TriangularMatrix::new(2).unwrap());
}

#[test]
fn matrices_with_different_size_are_not_equal() {
    assert!(TriangularMatrix::<i32>::new(3).unwrap() != TriangularMatrix::new(4).unwrap());
}

#[test]
fn can_add_matrices_with_equal_size() {
    let mut m1 = TriangularMatrix::<i32>::new(4).unwrap();
    let mut m2 = TriangularMatrix::<i32>::new(4).unwrap();
    m1[(1, 1)] = 4;
    m2[(1, 1)] = 8;

    let sum = (&m1 + &m2).unwrap();
    assert_eq!(sum[1][1], 12);
}

#[test]
fn cant_add_matrices_with_not_equal_size() {
    let mut m1 = TriangularMatrix::<i32>::new(4).unwrap();
    let mut m2 = TriangularMatrix::<i32>::new(6).unwrap();
    m1[(1, 1)] = 4;
    m2[(1, 1)] = 8;

    assert_eq!(&m1 + &m2, Err(LinearAlgebraError::SizeMismatch { left: 4, right: 6 }));
    assert_eq!(m1[(1, 1)], 4);
    assert_eq!(m2[(1, 1)], 8);
}

#[test]
fn can_subtract_matrices_with_equal_size() {
    let mut m1 = TriangularMatrix::<i32>::new(4).unwrap();
    let mut m2 = TriangularMatrix::<i32>::new(4).unwrap();
    m1[(1, 1)] = 5;
    m2[(1, 1)] = 6;

    let difference = (&m1 - &m2).unwrap();
    assert_eq!(difference[1][1], -1);
}

#[test]
fn cant_subtract_matrices_with_not_equal_size() {
    let m1 = TriangularMatrix::<i32>::new(4).unwrap();
    let m2 = TriangularMatrix::<i32>::new(6).unwrap();

    assert!(matches!(&m1 - &m2, Err(LinearAlgebraError::SizeMismatch { .. })));
}

#[test]
fn printed_matrix_can_be_read_back() {
    let mut m = TriangularMatrix::<f64>::new(3).unwrap();
    m[(0, 2)] = 1.5;
    m[(2, 0)] = -2f64;

    let text = m.to_string();
    assert_eq!(text, "0 0 1.5\n0 0 0\n0 0 -2");
    assert_eq!(read_matrix::<f64, _>(text.as_bytes()).unwrap(), m);
}
