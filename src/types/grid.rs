//! Grid types: the static label map and the belief grid
//!
//! Both grids are backed by `nalgebra::DMatrix`, indexed `(row, col)`.

use std::fmt;
use std::str::FromStr;

use nalgebra::DMatrix;
use serde::{Deserialize, Serialize};

use crate::filter::errors::FilterError;
use crate::utils::constants::DEFAULT_DISPLAY_PRECISION;

/// Categorical label stored in a [`LabelMap`].
///
/// Blanket-implemented for any small copyable type that can live in a matrix
/// and be read from several threads.
pub trait Label: Copy + PartialEq + fmt::Debug + Send + Sync + 'static {}

impl<T: Copy + PartialEq + fmt::Debug + Send + Sync + 'static> Label for T {}

/// Cell colour in the red/green grid world
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    /// Red cell, written `R`
    #[serde(rename = "R")]
    Red,
    /// Green cell, written `G`
    #[serde(rename = "G")]
    Green,
}

impl Color {
    /// Parse a single-character colour code (`R` or `G`, case-insensitive).
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'R' => Some(Color::Red),
            'G' => Some(Color::Green),
            _ => None,
        }
    }

    /// Single-character colour code.
    pub fn as_char(self) -> char {
        match self {
            Color::Red => 'R',
            Color::Green => 'G',
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

impl FromStr for Color {
    type Err = FilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Color::from_char(c),
            _ => None,
        }
        .ok_or_else(|| FilterError::Configuration {
            description: format!("unknown colour '{}', expected R or G", s),
        })
    }
}

/// Shape check shared by both grid constructors: returns `(H, W)`.
fn rectangular_shape<T, R: AsRef<[T]>>(rows: &[R]) -> Result<(usize, usize), FilterError> {
    let height = rows.len();
    let width = rows.first().map(|r| r.as_ref().len()).unwrap_or(0);
    if height == 0 || width == 0 {
        return Err(FilterError::EmptyGrid);
    }

    if let Some((row, r)) = rows
        .iter()
        .enumerate()
        .find(|(_, r)| r.as_ref().len() != width)
    {
        return Err(FilterError::RaggedRows {
            row,
            expected: width,
            actual: r.as_ref().len(),
        });
    }

    Ok((height, width))
}

// ============================================================================
// LabelMap
// ============================================================================

/// Immutable H×W map of cell labels.
///
/// Construction validates the shape, so every `LabelMap` has `H ≥ 1`, `W ≥ 1`
/// and rectangular rows.
#[derive(Debug, Clone, PartialEq)]
pub struct LabelMap<L: Label = Color> {
    labels: DMatrix<L>,
}

impl<L: Label> LabelMap<L> {
    /// Build a label map from row-major rows.
    pub fn from_rows<R: AsRef<[L]>>(rows: &[R]) -> Result<Self, FilterError> {
        let (height, width) = rectangular_shape::<L, R>(rows)?;
        let labels = DMatrix::from_fn(height, width, |i, j| rows[i].as_ref()[j]);
        Ok(Self { labels })
    }

    /// Number of rows (H)
    #[inline]
    pub fn height(&self) -> usize {
        self.labels.nrows()
    }

    /// Number of columns (W)
    #[inline]
    pub fn width(&self) -> usize {
        self.labels.ncols()
    }

    /// `(H, W)`
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        self.labels.shape()
    }

    /// Label at `(row, col)`
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> L {
        self.labels[(row, col)]
    }

    /// Underlying matrix
    pub fn matrix(&self) -> &DMatrix<L> {
        &self.labels
    }

    /// Number of cells carrying `label`
    pub fn count(&self, label: &L) -> usize {
        self.labels.iter().filter(|l| *l == label).count()
    }
}

impl LabelMap<Color> {
    /// Parse rows of colour codes such as `["RGGRR", "RRGRR"]`.
    ///
    /// Whitespace inside a row is ignored, so `"R G G R R"` also works.
    pub fn parse_rows<S: AsRef<str>>(rows: &[S]) -> Result<Self, FilterError> {
        let parsed = rows
            .iter()
            .map(|row| {
                row.as_ref()
                    .chars()
                    .filter(|c| !c.is_whitespace())
                    .map(|c| {
                        Color::from_char(c).ok_or_else(|| FilterError::Configuration {
                            description: format!("unknown colour '{}' in label map", c),
                        })
                    })
                    .collect::<Result<Vec<_>, _>>()
            })
            .collect::<Result<Vec<_>, _>>()?;

        Self::from_rows(&parsed)
    }

    /// Rows rendered back to colour codes.
    pub fn to_strings(&self) -> Vec<String> {
        (0..self.height())
            .map(|i| (0..self.width()).map(|j| self.get(i, j).as_char()).collect())
            .collect()
    }
}

// ============================================================================
// BeliefGrid
// ============================================================================

/// Discrete probability distribution over grid cells.
///
/// Entries are non-negative and finite. Filter steps keep the total mass at
/// 1.0; the motion update preserves whatever mass the input had.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(into = "Vec<Vec<f64>>", try_from = "Vec<Vec<f64>>")]
pub struct BeliefGrid {
    probabilities: DMatrix<f64>,
}

impl BeliefGrid {
    /// Uniform prior: every cell holds exactly `1 / (H·W)`.
    pub fn uniform(height: usize, width: usize) -> Result<Self, FilterError> {
        if height == 0 || width == 0 {
            return Err(FilterError::EmptyGrid);
        }
        let p = 1.0 / (height * width) as f64;
        Ok(Self {
            probabilities: DMatrix::from_element(height, width, p),
        })
    }

    /// Wrap a matrix of non-negative, finite weights.
    pub fn from_matrix(probabilities: DMatrix<f64>) -> Result<Self, FilterError> {
        if probabilities.nrows() == 0 || probabilities.ncols() == 0 {
            return Err(FilterError::EmptyGrid);
        }
        if let Some(bad) = probabilities.iter().find(|p| !p.is_finite() || **p < 0.0) {
            return Err(FilterError::Configuration {
                description: format!(
                    "belief entries must be finite and non-negative, got {}",
                    bad
                ),
            });
        }
        Ok(Self { probabilities })
    }

    /// Build from row-major rows, validating shape and entries.
    pub fn from_rows<R: AsRef<[f64]>>(rows: &[R]) -> Result<Self, FilterError> {
        let (height, width) = rectangular_shape::<f64, R>(rows)?;
        Self::from_matrix(DMatrix::from_fn(height, width, |i, j| {
            rows[i].as_ref()[j]
        }))
    }

    /// Internal constructor for update results, which are valid by construction.
    #[inline]
    pub(crate) fn from_matrix_unchecked(probabilities: DMatrix<f64>) -> Self {
        Self { probabilities }
    }

    /// Number of rows (H)
    #[inline]
    pub fn height(&self) -> usize {
        self.probabilities.nrows()
    }

    /// Number of columns (W)
    #[inline]
    pub fn width(&self) -> usize {
        self.probabilities.ncols()
    }

    /// `(H, W)`
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        self.probabilities.shape()
    }

    /// Probability at `(row, col)`
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.probabilities[(row, col)]
    }

    /// Underlying matrix
    pub fn matrix(&self) -> &DMatrix<f64> {
        &self.probabilities
    }

    /// Total probability mass
    pub fn sum(&self) -> f64 {
        self.probabilities.sum()
    }

    /// Row-major copy of the grid
    pub fn to_rows(&self) -> Vec<Vec<f64>> {
        self.probabilities
            .row_iter()
            .map(|row| row.iter().copied().collect())
            .collect()
    }

    /// Cell with the highest probability and that probability.
    ///
    /// Ties resolve to the first cell in row-major order.
    pub fn most_likely_cell(&self) -> ((usize, usize), f64) {
        let mut best = ((0, 0), self.probabilities[(0, 0)]);
        for i in 0..self.height() {
            for j in 0..self.width() {
                let p = self.probabilities[(i, j)];
                if p > best.1 {
                    best = ((i, j), p);
                }
            }
        }
        best
    }

    /// Largest absolute per-cell difference; infinite when shapes differ.
    pub fn max_abs_diff(&self, other: &BeliefGrid) -> f64 {
        if self.shape() != other.shape() {
            return f64::INFINITY;
        }
        self.probabilities
            .iter()
            .zip(other.probabilities.iter())
            .map(|(a, b)| (a - b).abs())
            .fold(0.0, f64::max)
    }

    /// Nested-list rendering, e.g. `[[0.01105,0.02464],\n [0.00715,0.01017]]`.
    pub fn format_with_precision(&self, precision: usize) -> String {
        let rows: Vec<String> = self
            .probabilities
            .row_iter()
            .map(|row| {
                let cells: Vec<String> = row
                    .iter()
                    .map(|p| format!("{:.*}", precision, p))
                    .collect();
                format!("[{}]", cells.join(","))
            })
            .collect();
        format!("[{}]", rows.join(",\n "))
    }

    /// Nested-list rendering with five decimals.
    pub fn show(&self) -> String {
        self.format_with_precision(DEFAULT_DISPLAY_PRECISION)
    }

    /// Serialize to JSON string (row-major nested arrays).
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "[]".to_string())
    }
}

/// Uniform prior over an `height × width` grid.
pub fn initialize_uniform(height: usize, width: usize) -> Result<BeliefGrid, FilterError> {
    BeliefGrid::uniform(height, width)
}

impl fmt::Display for BeliefGrid {
    /// One line per row, cells separated by spaces. Precision defaults to 5.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let precision = f.precision().unwrap_or(DEFAULT_DISPLAY_PRECISION);
        for (i, row) in self.probabilities.row_iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for (j, p) in row.iter().enumerate() {
                if j > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{:.*}", precision, p)?;
            }
        }
        Ok(())
    }
}

impl From<BeliefGrid> for Vec<Vec<f64>> {
    fn from(grid: BeliefGrid) -> Self {
        grid.to_rows()
    }
}

impl TryFrom<Vec<Vec<f64>>> for BeliefGrid {
    type Error = FilterError;

    fn try_from(rows: Vec<Vec<f64>>) -> Result<Self, Self::Error> {
        BeliefGrid::from_rows(&rows)
    }
}
