//! Dimension ranges, entity shapes, and the shape algebra behind generalized
//! multiplication and resizing.
//!
//! Matrices are stored as columns: `mat<W,H>` holds `W` column vectors of
//! `H` elements. A member path `[c, r]` addresses column `c`, row `r`;
//! a vector path is a single index.

use smallvec::{smallvec, SmallVec};

pub const MIN_DIM: usize = 2;
pub const MAX_DIM: usize = 4;

/// Supported vector dimensions and matrix extents.
pub fn dims() -> impl Iterator<Item = usize> + Clone {
    MIN_DIM..=MAX_DIM
}

/// Every matrix shape `(w, h)`, column-count major.
pub fn mat_shapes() -> impl Iterator<Item = (usize, usize)> {
    dims().flat_map(|w| dims().map(move |h| (w, h)))
}

/// Member path from an entity to one scalar element.
pub type Path = SmallVec<[usize; 2]>;

/// A generated vector or matrix type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Entity {
    Vector(usize),
    Matrix { w: usize, h: usize },
}

impl Entity {
    /// Every entity, vectors first.
    pub fn all() -> impl Iterator<Item = Entity> {
        dims()
            .map(Entity::Vector)
            .chain(mat_shapes().map(|(w, h)| Entity::Matrix { w, h }))
    }

    /// Number of top-level members.
    pub fn size(self) -> usize {
        match self {
            Entity::Vector(d) => d,
            Entity::Matrix { w, .. } => w,
        }
    }

    pub fn is_matrix(self) -> bool {
        matches!(self, Entity::Matrix { .. })
    }

    pub fn is_square(self) -> bool {
        matches!(self, Entity::Matrix { w, h } if w == h)
    }

    /// Short alias name: `vec3`, `mat2x4`.
    pub fn alias(self) -> String {
        match self {
            Entity::Vector(d) => format!("vec{d}"),
            Entity::Matrix { w, h } => format!("mat{w}x{h}"),
        }
    }

    /// Number of scalar elements.
    pub fn element_count(self) -> usize {
        match self {
            Entity::Vector(d) => d,
            Entity::Matrix { w, h } => w * h,
        }
    }

    /// Paths of every scalar element in row-major reading order, the order
    /// per-component constructors and text forms use.
    pub fn element_paths(self) -> Vec<Path> {
        match self {
            Entity::Vector(d) => (0..d).map(|i| smallvec![i]).collect(),
            Entity::Matrix { w, h } => (0..h)
                .flat_map(|r| (0..w).map(move |c| smallvec![c, r]))
                .collect(),
        }
    }

    /// Rows of the reading-order layout (1 for vectors).
    pub fn rows(self) -> usize {
        match self {
            Entity::Vector(_) => 1,
            Entity::Matrix { h, .. } => h,
        }
    }
}

/// Generalized multiply `(rows x inner) * (inner x cols)`.
///
/// A left operand with one row is a (row) vector, a right operand with one
/// column is a (column) vector; the result degenerates accordingly.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct MulShape {
    pub rows: usize,
    pub inner: usize,
    pub cols: usize,
}

/// Shape of one multiply operand or result.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operand {
    Scalar,
    Entity(Entity),
}

impl MulShape {
    /// Every shape with `rows, cols` in `1..=MAX_DIM` and a supported inner
    /// extent.
    pub fn all() -> impl Iterator<Item = MulShape> {
        dims().flat_map(|inner| {
            (1..=MAX_DIM).flat_map(move |rows| {
                (1..=MAX_DIM).map(move |cols| MulShape { rows, inner, cols })
            })
        })
    }

    /// Shapes whose left operand is `left`.
    pub fn with_left(left: Entity) -> impl Iterator<Item = MulShape> {
        let (rows, inner) = match left {
            Entity::Vector(d) => (1, d),
            Entity::Matrix { w, h } => (h, w),
        };
        (1..=MAX_DIM).map(move |cols| MulShape { rows, inner, cols })
    }

    pub fn left(self) -> Entity {
        if self.rows == 1 {
            Entity::Vector(self.inner)
        } else {
            Entity::Matrix {
                w: self.inner,
                h: self.rows,
            }
        }
    }

    pub fn right(self) -> Entity {
        if self.cols == 1 {
            Entity::Vector(self.inner)
        } else {
            Entity::Matrix {
                w: self.cols,
                h: self.inner,
            }
        }
    }

    pub fn result(self) -> Operand {
        match (self.rows, self.cols) {
            (1, 1) => Operand::Scalar,
            (1, cols) => Operand::Entity(Entity::Vector(cols)),
            (rows, 1) => Operand::Entity(Entity::Vector(rows)),
            (rows, cols) => Operand::Entity(Entity::Matrix { w: cols, h: rows }),
        }
    }

    /// Path of the result element at column `col`, row `row`.
    pub fn result_path(self, col: usize, row: usize) -> Path {
        match (self.rows, self.cols) {
            (1, 1) => Path::new(),
            (1, _) => smallvec![col],
            (_, 1) => smallvec![row],
            _ => smallvec![col, row],
        }
    }

    /// Sum-of-products terms of result element (`col`, `row`): pairs of
    /// (left path, right path), one per inner index.
    pub fn terms(self, col: usize, row: usize) -> SmallVec<[(Path, Path); MAX_DIM]> {
        (0..self.inner)
            .map(|k| {
                let left: Path = if self.rows == 1 {
                    smallvec![k]
                } else {
                    smallvec![k, row]
                };
                let right: Path = if self.cols == 1 {
                    smallvec![k]
                } else {
                    smallvec![col, k]
                };
                (left, right)
            })
            .collect()
    }

    /// Result elements in row-major reading order as `(col, row)`.
    pub fn result_cells(self) -> impl Iterator<Item = (usize, usize)> {
        let cols = self.cols;
        (0..self.rows).flat_map(move |row| (0..cols).map(move |col| (col, row)))
    }
}

/// Where a resized element's value comes from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Fill {
    /// Copied from the source element at this path.
    Keep(Path),
    Zero,
    One,
    /// Supplied by the caller as the `n`-th extra argument.
    Param(usize),
}

/// Resizing a vector of `from` elements to `to` elements.
///
/// Growing either takes caller-supplied values (`explicit`) or fills with
/// zero; shrinking drops trailing elements.
pub fn vector_resize(from: usize, to: usize, explicit: bool) -> Vec<Fill> {
    (0..to)
        .map(|i| {
            if i < from {
                Fill::Keep(smallvec![i])
            } else if explicit {
                Fill::Param(i - from)
            } else {
                Fill::Zero
            }
        })
        .collect()
}

/// Resizing a `w x h` matrix to `w2 x h2`, in row-major reading order.
///
/// New diagonal positions become one and other new positions zero, so the
/// result extends toward identity.
pub fn matrix_resize(from: (usize, usize), to: (usize, usize)) -> Vec<Fill> {
    let (w, h) = from;
    let (w2, h2) = to;
    (0..h2)
        .flat_map(|r| (0..w2).map(move |c| (c, r)))
        .map(|(c, r)| {
            if c < w && r < h {
                Fill::Keep(smallvec![c, r])
            } else if c == r {
                Fill::One
            } else {
                Fill::Zero
            }
        })
        .collect()
}
