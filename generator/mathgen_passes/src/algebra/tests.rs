#![allow(clippy::unwrap_used, reason = "Tests can panic")]

use mathgen_tables::{dims, field};
use pretty_assertions::assert_eq;

use super::*;

fn member(col: usize, row: usize) -> String {
    format!("{}.{}", field(col), field(row))
}

/// `m[col][row]`
type Matrix = [[f64; MAX_DIM]; MAX_DIM];

fn from_rows(rows: &[&[f64]]) -> Matrix {
    let mut m = [[0.0; MAX_DIM]; MAX_DIM];
    for (r, row) in rows.iter().enumerate() {
        for (c, value) in row.iter().enumerate() {
            m[c][r] = *value;
        }
    }
    m
}

/// Diagonally dominant, so never singular.
fn dominant(n: usize) -> Matrix {
    let mut m = [[0.0; MAX_DIM]; MAX_DIM];
    for (c, column) in m.iter_mut().enumerate().take(n) {
        for (r, cell) in column.iter_mut().enumerate().take(n) {
            *cell = if c == r {
                10.0
            } else {
                f64::from(u32::try_from(c * 3 + r).unwrap()) * 0.25 + 0.5
            };
        }
    }
    m
}

fn det_of(n: usize, m: &Matrix) -> f64 {
    determinant(n).eval(&|c, r| m[c][r])
}

fn inverse_of(n: usize, m: &Matrix) -> Matrix {
    let det = det_of(n, m);
    let mut inv = [[0.0; MAX_DIM]; MAX_DIM];
    for (c, column) in inv.iter_mut().enumerate().take(n) {
        for (r, cell) in column.iter_mut().enumerate().take(n) {
            let (negate, expr) = adjugate(n, c, r);
            let value = expr.eval(&|c, r| m[c][r]);
            let signed = if negate { -value } else { value };
            *cell = signed / det;
        }
    }
    inv
}

#[test]
fn det2_renders_as_cross_terms() {
    assert_eq!(determinant(2).render(&member), "x.x * y.y - y.x * x.y");
}

#[test]
fn det3_parenthesizes_minors() {
    let text = determinant(3).render(&member);
    assert!(text.starts_with("x.x * (y.y * z.z - z.y * y.z) - y.x * ("), "{text}");
    assert_eq!(text.matches('(').count(), 3);
}

#[test]
fn det_of_diagonal_is_product() {
    let m = from_rows(&[
        &[2.0, 0.0, 0.0, 0.0],
        &[0.0, 3.0, 0.0, 0.0],
        &[0.0, 0.0, 4.0, 0.0],
        &[0.0, 0.0, 0.0, 5.0],
    ]);
    assert_eq!(det_of(2, &m), 6.0);
    assert_eq!(det_of(3, &m), 24.0);
    assert_eq!(det_of(4, &m), 120.0);
}

#[test]
fn det_of_known_matrix() {
    let m = from_rows(&[&[1.0, 2.0, 3.0], &[0.0, 1.0, 4.0], &[5.0, 6.0, 0.0]]);
    assert_eq!(det_of(3, &m), 1.0);
}

#[test]
fn singular_matrices_have_zero_det() {
    let m = from_rows(&[&[2.0, 0.0, 1.0], &[1.0, 3.0, 2.0], &[1.0, 1.0, 1.0]]);
    assert_eq!(det_of(3, &m), 0.0);

    let repeated = from_rows(&[
        &[1.0, 2.0, 3.0, 4.0],
        &[5.0, 6.0, 7.0, 8.0],
        &[1.0, 2.0, 3.0, 4.0],
        &[0.0, 1.0, 0.0, 1.0],
    ]);
    assert_eq!(det_of(4, &repeated), 0.0);
}

#[test]
fn inverse_times_matrix_is_identity() {
    for n in dims() {
        let m = dominant(n);
        let inv = inverse_of(n, &m);
        for c in 0..n {
            for r in 0..n {
                let value: f64 = (0..n).map(|k| inv[k][r] * m[c][k]).sum();
                let expected = if c == r { 1.0 } else { 0.0 };
                assert!((value - expected).abs() < 1e-9, "{n}x{n} at ({c}, {r}): {value}");
            }
        }
    }
}

#[test]
fn cofactor_signs_alternate() {
    for n in dims() {
        for c in 0..n {
            for r in 0..n {
                assert_eq!(cofactor(n, c, r).0, (c + r) % 2 == 1);
            }
        }
    }
}

#[test]
fn degenerate_expressions_render() {
    assert_eq!(Expr::Product(Vec::new()).render(&member), "1");
    assert_eq!(Expr::Sum(Vec::new()).render(&member), "0");
    let negated = Expr::Sum(vec![(true, Expr::Elem { col: 1, row: 0 })]);
    assert_eq!(negated.render(&member), "-y.x");
}
