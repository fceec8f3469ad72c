//! Closed-form cofactor expansion.
//!
//! Determinants and inverses of square matrices are emitted as expressions
//! over the matrix elements, expanded along the first row. The expression
//! trees can also be evaluated numerically.

use mathgen_tables::MAX_DIM;
use smallvec::SmallVec;

type Indices = SmallVec<[usize; MAX_DIM]>;

/// Polynomial over matrix elements.
#[derive(Clone, Debug, PartialEq)]
pub enum Expr {
    /// Element at column `col`, row `row`.
    Elem { col: usize, row: usize },
    /// Signed terms; `true` negates the term.
    Sum(Vec<(bool, Expr)>),
    Product(Vec<Expr>),
}

/// Determinant of an `n x n` matrix.
pub fn determinant(n: usize) -> Expr {
    let all: Indices = (0..n).collect();
    minor(&all, &all)
}

/// Signed cofactor of the element at (`col`, `row`).
pub fn cofactor(n: usize, col: usize, row: usize) -> (bool, Expr) {
    let cols: Indices = (0..n).filter(|&c| c != col).collect();
    let rows: Indices = (0..n).filter(|&r| r != row).collect();
    ((col + row) % 2 == 1, minor(&cols, &rows))
}

/// Numerator of inverse element (`col`, `row`); the adjugate is the
/// transposed cofactor matrix.
pub fn adjugate(n: usize, col: usize, row: usize) -> (bool, Expr) {
    cofactor(n, row, col)
}

fn minor(cols: &[usize], rows: &[usize]) -> Expr {
    let Some((&top, rest)) = rows.split_first() else {
        return Expr::Product(Vec::new());
    };
    if let [col] = cols {
        return Expr::Elem { col: *col, row: top };
    }
    let terms = cols
        .iter()
        .enumerate()
        .map(|(j, &col)| {
            let others: Indices = cols.iter().copied().filter(|&c| c != col).collect();
            let term = Expr::Product(vec![Expr::Elem { col, row: top }, minor(&others, rest)]);
            (j % 2 == 1, term)
        })
        .collect();
    Expr::Sum(terms)
}

impl Expr {
    /// Render with `elem(col, row)` naming each element.
    pub fn render<F>(&self, elem: &F) -> String
    where
        F: Fn(usize, usize) -> String,
    {
        let mut out = String::new();
        self.render_into(&mut out, elem);
        out
    }

    fn render_into<F>(&self, out: &mut String, elem: &F)
    where
        F: Fn(usize, usize) -> String,
    {
        match self {
            Expr::Elem { col, row } => out.push_str(&elem(*col, *row)),
            Expr::Sum(terms) if terms.is_empty() => out.push('0'),
            Expr::Sum(terms) => {
                for (i, (negate, term)) in terms.iter().enumerate() {
                    match (i, negate) {
                        (0, false) => {}
                        (0, true) => out.push('-'),
                        (_, false) => out.push_str(" + "),
                        (_, true) => out.push_str(" - "),
                    }
                    term.render_into(out, elem);
                }
            }
            Expr::Product(factors) if factors.is_empty() => out.push('1'),
            Expr::Product(factors) => {
                for (i, factor) in factors.iter().enumerate() {
                    if i > 0 {
                        out.push_str(" * ");
                    }
                    if matches!(factor, Expr::Sum(terms) if terms.len() > 1) {
                        out.push('(');
                        factor.render_into(out, elem);
                        out.push(')');
                    } else {
                        factor.render_into(out, elem);
                    }
                }
            }
        }
    }

    /// Evaluate with `elem(col, row)` supplying each element.
    pub fn eval<F>(&self, elem: &F) -> f64
    where
        F: Fn(usize, usize) -> f64,
    {
        match self {
            Expr::Elem { col, row } => elem(*col, *row),
            Expr::Sum(terms) => terms
                .iter()
                .map(|(negate, term)| {
                    let value = term.eval(elem);
                    if *negate {
                        -value
                    } else {
                        value
                    }
                })
                .sum(),
            Expr::Product(factors) => factors.iter().map(|f| f.eval(elem)).product(),
        }
    }
}

#[cfg(test)]
mod tests;
