//! Commanded displacement on the grid

use std::fmt;

use serde::{Deserialize, Serialize};

/// Intended movement `(dy, dx)`: row delta first, column delta second.
///
/// Positive `dy` moves down, positive `dx` moves right. Serialized as the
/// two-element array `[dy, dx]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "[i64; 2]", into = "[i64; 2]")]
pub struct Displacement {
    /// Row delta
    pub dy: i64,
    /// Column delta
    pub dx: i64,
}

impl Displacement {
    /// Stay in place `[0, 0]`
    pub const STAY: Self = Self::new(0, 0);
    /// One cell right `[0, 1]`
    pub const RIGHT: Self = Self::new(0, 1);
    /// One cell left `[0, -1]`
    pub const LEFT: Self = Self::new(0, -1);
    /// One cell down `[1, 0]`
    pub const DOWN: Self = Self::new(1, 0);
    /// One cell up `[-1, 0]`
    pub const UP: Self = Self::new(-1, 0);

    /// Create a displacement
    pub const fn new(dy: i64, dx: i64) -> Self {
        Self { dy, dx }
    }

    /// True for the zero move
    #[inline]
    pub fn is_stay(&self) -> bool {
        self.dy == 0 && self.dx == 0
    }

    /// Source cell of `(row, col)` on an `height × width` torus.
    ///
    /// Uses Euclidean remainder, so negative deltas wrap to the far edge.
    /// Deltas are reduced modulo the grid size first, so every `i64` works.
    #[inline]
    pub fn source_of(&self, row: usize, col: usize, height: usize, width: usize) -> (usize, usize) {
        (wrap(row, self.dy, height), wrap(col, self.dx, width))
    }
}

/// `(index − delta) mod len` without overflow for any `delta`.
#[inline]
fn wrap(index: usize, delta: i64, len: usize) -> usize {
    let len = len as i64;
    (index as i64 - delta.rem_euclid(len)).rem_euclid(len) as usize
}

impl From<(i64, i64)> for Displacement {
    fn from((dy, dx): (i64, i64)) -> Self {
        Self::new(dy, dx)
    }
}

impl From<[i64; 2]> for Displacement {
    fn from([dy, dx]: [i64; 2]) -> Self {
        Self::new(dy, dx)
    }
}

impl From<Displacement> for [i64; 2] {
    fn from(d: Displacement) -> Self {
        [d.dy, d.dx]
    }
}

impl fmt::Display for Displacement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{},{}]", self.dy, self.dx)
    }
}
