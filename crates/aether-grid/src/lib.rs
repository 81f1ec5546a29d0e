//! Scalar density grids for density-weighted position sampling.
//!
//! A [`ScalarGrid`] stores one density value per cubic cell on a regular
//! 3-D lattice (a 1-D grid is the degenerate `ny = nz = 1` case). Source
//! features draw a cell with probability proportional to its density via
//! a [`WeightedSampler`] built by [`ScalarGrid::cell_sampler`], then place
//! the particle uniformly inside the chosen cell with
//! [`ScalarGrid::cell_to_position`]. Grids are immutable once the
//! pipeline is built and are shared read-only between features.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

use std::error::Error;
use std::fmt;

use aether_core::{Vector3, WeightedSampler};

/// Errors from grid construction and sampling setup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GridError {
    /// A grid dimension is zero.
    EmptyShape,
    /// The spacing is zero, negative, or non-finite.
    InvalidSpacing,
    /// The value array length does not match `nx * ny * nz`.
    ShapeMismatch {
        /// Expected cell count.
        expected: usize,
        /// Provided value count.
        got: usize,
    },
    /// No cell carries positive density, so nothing can be sampled.
    ZeroDensity,
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyShape => write!(f, "grid has a zero dimension"),
            Self::InvalidSpacing => write!(f, "grid spacing must be positive and finite"),
            Self::ShapeMismatch { expected, got } => {
                write!(f, "grid expects {expected} values, got {got}")
            }
            Self::ZeroDensity => write!(f, "grid carries no positive density"),
        }
    }
}

impl Error for GridError {}

/// A regular lattice of cubic cells holding one scalar density each.
#[derive(Clone, Debug, PartialEq)]
pub struct ScalarGrid {
    origin: Vector3,
    nx: usize,
    ny: usize,
    nz: usize,
    spacing: f64,
    values: Vec<f32>,
}

impl ScalarGrid {
    /// Create a zero-filled grid.
    ///
    /// `origin` is the lower corner of cell `(0, 0, 0)`; `spacing` is
    /// the cell edge length.
    pub fn new(
        origin: Vector3,
        nx: usize,
        ny: usize,
        nz: usize,
        spacing: f64,
    ) -> Result<Self, GridError> {
        if nx == 0 || ny == 0 || nz == 0 {
            return Err(GridError::EmptyShape);
        }
        if !(spacing > 0.0) || !spacing.is_finite() {
            return Err(GridError::InvalidSpacing);
        }
        Ok(ScalarGrid {
            origin,
            nx,
            ny,
            nz,
            spacing,
            values: vec![0.0; nx * ny * nz],
        })
    }

    /// Create a grid from an existing value array in `x`-major order
    /// (index `= (ix * ny + iy) * nz + iz`).
    pub fn from_values(
        origin: Vector3,
        nx: usize,
        ny: usize,
        nz: usize,
        spacing: f64,
        values: Vec<f32>,
    ) -> Result<Self, GridError> {
        let mut grid = ScalarGrid::new(origin, nx, ny, nz, spacing)?;
        if values.len() != grid.cell_count() {
            return Err(GridError::ShapeMismatch {
                expected: grid.cell_count(),
                got: values.len(),
            });
        }
        grid.values = values;
        Ok(grid)
    }

    /// Create a 1-D grid along `x` starting at `x0`.
    pub fn new_1d(x0: f64, nx: usize, spacing: f64) -> Result<Self, GridError> {
        ScalarGrid::new(Vector3::new(x0, 0.0, 0.0), nx, 1, 1, spacing)
    }

    /// Total number of cells.
    pub fn cell_count(&self) -> usize {
        self.nx * self.ny * self.nz
    }

    /// Grid shape `(nx, ny, nz)`.
    pub fn shape(&self) -> (usize, usize, usize) {
        (self.nx, self.ny, self.nz)
    }

    /// Whether this is a degenerate 1-D grid (`ny == nz == 1`).
    pub fn is_one_dimensional(&self) -> bool {
        self.ny == 1 && self.nz == 1
    }

    /// Cell edge length.
    pub fn spacing(&self) -> f64 {
        self.spacing
    }

    /// Lower corner of cell `(0, 0, 0)`.
    pub fn origin(&self) -> Vector3 {
        self.origin
    }

    /// Density stored in cell `(ix, iy, iz)`.
    pub fn get(&self, ix: usize, iy: usize, iz: usize) -> f32 {
        self.values[self.flat_index(ix, iy, iz)]
    }

    /// Store a density in cell `(ix, iy, iz)`.
    pub fn set(&mut self, ix: usize, iy: usize, iz: usize, value: f32) {
        let i = self.flat_index(ix, iy, iz);
        self.values[i] = value;
    }

    fn flat_index(&self, ix: usize, iy: usize, iz: usize) -> usize {
        debug_assert!(ix < self.nx && iy < self.ny && iz < self.nz);
        (ix * self.ny + iy) * self.nz + iz
    }

    /// Build a sampler over flat cell indices weighted by density.
    ///
    /// Cells with zero density are skipped so they are never drawn.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::ZeroDensity`] if no cell has positive
    /// density.
    pub fn cell_sampler(&self) -> Result<WeightedSampler<usize>, GridError> {
        let mut sampler = WeightedSampler::new();
        for (i, &v) in self.values.iter().enumerate() {
            if v > 0.0 {
                // Positive finite f32 promotes to a valid weight.
                sampler
                    .add(i, f64::from(v))
                    .map_err(|_| GridError::ZeroDensity)?;
            }
        }
        if sampler.is_empty() {
            return Err(GridError::ZeroDensity);
        }
        Ok(sampler)
    }

    /// Position of a point inside the cell at flat index `cell`.
    ///
    /// `offsets` are uniform draws in `[0, 1)` along each axis, mapping
    /// the cell interior onto a uniform volume element.
    pub fn cell_to_position(&self, cell: usize, offsets: (f64, f64, f64)) -> Vector3 {
        let iz = cell % self.nz;
        let iy = (cell / self.nz) % self.ny;
        let ix = cell / (self.ny * self.nz);
        self.origin
            + Vector3::new(
                (ix as f64 + offsets.0) * self.spacing,
                (iy as f64 + offsets.1) * self.spacing,
                (iz as f64 + offsets.2) * self.spacing,
            )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_degenerate_shapes() {
        assert_eq!(
            ScalarGrid::new(Vector3::ZERO, 0, 4, 4, 1.0),
            Err(GridError::EmptyShape)
        );
        assert_eq!(
            ScalarGrid::new(Vector3::ZERO, 4, 4, 4, 0.0),
            Err(GridError::InvalidSpacing)
        );
        assert_eq!(
            ScalarGrid::new(Vector3::ZERO, 4, 4, 4, f64::NAN),
            Err(GridError::InvalidSpacing)
        );
    }

    #[test]
    fn from_values_checks_length() {
        let r = ScalarGrid::from_values(Vector3::ZERO, 2, 2, 2, 1.0, vec![1.0; 7]);
        assert_eq!(
            r,
            Err(GridError::ShapeMismatch {
                expected: 8,
                got: 7
            })
        );
    }

    #[test]
    fn get_set_round_trip() {
        let mut g = ScalarGrid::new(Vector3::ZERO, 3, 4, 5, 2.0).unwrap();
        g.set(2, 3, 4, 7.5);
        assert_eq!(g.get(2, 3, 4), 7.5);
        assert_eq!(g.get(0, 0, 0), 0.0);
    }

    #[test]
    fn all_zero_grid_cannot_sample() {
        let g = ScalarGrid::new(Vector3::ZERO, 2, 2, 2, 1.0).unwrap();
        assert_eq!(g.cell_sampler().unwrap_err(), GridError::ZeroDensity);
    }

    #[test]
    fn sampler_skips_zero_cells() {
        let mut g = ScalarGrid::new(Vector3::ZERO, 2, 1, 1, 1.0).unwrap();
        g.set(1, 0, 0, 3.0);
        let s = g.cell_sampler().unwrap();
        assert_eq!(s.len(), 1);
        assert_eq!(s.sample(0.5), Some(&1));
    }

    #[test]
    fn cell_to_position_maps_offsets_into_the_cell() {
        let g = ScalarGrid::new(Vector3::new(10.0, 0.0, -5.0), 3, 3, 3, 2.0).unwrap();
        // Flat index of cell (1, 2, 0) is (1 * 3 + 2) * 3 + 0 = 15.
        let p = g.cell_to_position(15, (0.5, 0.0, 0.25));
        assert_eq!(p, Vector3::new(10.0 + 3.0, 0.0 + 4.0, -5.0 + 0.5));
    }

    #[test]
    fn one_dimensional_grid() {
        let g = ScalarGrid::new_1d(-4.0, 8, 0.5).unwrap();
        assert!(g.is_one_dimensional());
        assert_eq!(g.cell_count(), 8);
        let p = g.cell_to_position(3, (0.5, 0.0, 0.0));
        assert!((p.x - (-4.0 + 3.5 * 0.5)).abs() < 1e-12);
        assert_eq!(p.y, 0.0);
    }
}
