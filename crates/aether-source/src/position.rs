//! Position features: points, geometric primitives, comoving 1-D
//! distributions, and density grids.

use std::sync::Arc;

use aether_core::{ParticleState, Rng, SamplerError, Vector3, WeightedSampler};
use aether_cosmo::Cosmology;
use aether_grid::{GridError, ScalarGrid};

use crate::source::SourceFeature;

/// Position of a point source.
#[derive(Clone, Copy, Debug)]
pub struct SourcePosition {
    position: Vector3,
}

impl SourcePosition {
    /// Place particles at a fixed point.
    pub fn new(position: Vector3) -> Self {
        SourcePosition { position }
    }

    /// Place particles at `(-d, 0, 0)`, the 1-D convention for a source
    /// a distance `d` from the observer at the origin.
    pub fn at_distance(d: f64) -> Self {
        SourcePosition {
            position: Vector3::new(-d, 0.0, 0.0),
        }
    }
}

impl SourceFeature for SourcePosition {
    fn name(&self) -> &str {
        "SourcePosition"
    }

    fn prepare_particle(&self, state: &mut ParticleState, _rng: &mut Rng) {
        state.set_position(self.position);
    }

    fn provides_position(&self) -> bool {
        true
    }
}

/// Multiple point-source positions with relative luminosities.
#[derive(Clone, Debug, Default)]
pub struct SourceMultiplePositions {
    positions: WeightedSampler<Vector3>,
}

impl SourceMultiplePositions {
    /// Create with no positions registered.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a position with a relative luminosity.
    ///
    /// # Errors
    ///
    /// [`SamplerError::InvalidWeight`] for a non-positive luminosity.
    pub fn add(&mut self, position: Vector3, luminosity: f64) -> Result<(), SamplerError> {
        self.positions.add(position, luminosity)
    }
}

impl SourceFeature for SourceMultiplePositions {
    fn name(&self) -> &str {
        "SourceMultiplePositions"
    }

    fn prepare_particle(&self, state: &mut ParticleState, rng: &mut Rng) {
        if let Some(&position) = self.positions.sample(rng.uniform()) {
            state.set_position(position);
        }
    }

    fn provides_position(&self) -> bool {
        true
    }
}

/// Uniform random positions inside a sphere.
#[derive(Clone, Copy, Debug)]
pub struct SourceUniformSphere {
    center: Vector3,
    radius: f64,
}

impl SourceUniformSphere {
    /// Positions uniform in the volume of the given sphere.
    pub fn new(center: Vector3, radius: f64) -> Self {
        SourceUniformSphere { center, radius }
    }
}

impl SourceFeature for SourceUniformSphere {
    fn name(&self) -> &str {
        "SourceUniformSphere"
    }

    fn prepare_particle(&self, state: &mut ParticleState, rng: &mut Rng) {
        // Cube root of a uniform draw makes the radial density ∝ r².
        let r = self.radius * rng.uniform().cbrt();
        state.set_position(self.center + rng.unit_vector() * r);
    }

    fn provides_position(&self) -> bool {
        true
    }
}

/// Uniform random positions on a spherical shell.
#[derive(Clone, Copy, Debug)]
pub struct SourceUniformShell {
    center: Vector3,
    radius: f64,
}

impl SourceUniformShell {
    /// Positions uniform over the surface of the given sphere.
    pub fn new(center: Vector3, radius: f64) -> Self {
        SourceUniformShell { center, radius }
    }
}

impl SourceFeature for SourceUniformShell {
    fn name(&self) -> &str {
        "SourceUniformShell"
    }

    fn prepare_particle(&self, state: &mut ParticleState, rng: &mut Rng) {
        state.set_position(self.center + rng.unit_vector() * self.radius);
    }

    fn provides_position(&self) -> bool {
        true
    }
}

/// Uniform random positions inside an axis-aligned box.
#[derive(Clone, Copy, Debug)]
pub struct SourceUniformBox {
    origin: Vector3,
    size: Vector3,
}

impl SourceUniformBox {
    /// Positions uniform in the box spanning `origin` to
    /// `origin + size`.
    pub fn new(origin: Vector3, size: Vector3) -> Self {
        SourceUniformBox { origin, size }
    }
}

impl SourceFeature for SourceUniformBox {
    fn name(&self) -> &str {
        "SourceUniformBox"
    }

    fn prepare_particle(&self, state: &mut ParticleState, rng: &mut Rng) {
        let offset = Vector3::new(
            rng.uniform() * self.size.x,
            rng.uniform() * self.size.y,
            rng.uniform() * self.size.z,
        );
        state.set_position(self.origin + offset);
    }

    fn provides_position(&self) -> bool {
        true
    }
}

/// 1-D positions from a source distribution uniform in light-travel
/// distance.
///
/// Draws a light-travel distance uniformly in `[min_d, max_d]` and sets
/// the x-coordinate to the corresponding comoving distance. Particles
/// then propagate in `-x` toward the observer at the origin. Without a
/// cosmology the light-travel distance is used as-is, matching a static
/// universe.
pub struct SourceUniform1D {
    min_d: f64,
    max_d: f64,
    cosmology: Option<Arc<Cosmology>>,
}

impl SourceUniform1D {
    /// Uniform light-travel distances in `[min_d, max_d]` \[m\],
    /// converted to comoving x-coordinates through `cosmology`.
    pub fn new(min_d: f64, max_d: f64, cosmology: Arc<Cosmology>) -> Self {
        SourceUniform1D {
            min_d,
            max_d,
            cosmology: Some(cosmology),
        }
    }

    /// Uniform distances with no expansion correction.
    pub fn without_cosmology(min_d: f64, max_d: f64) -> Self {
        SourceUniform1D {
            min_d,
            max_d,
            cosmology: None,
        }
    }
}

impl SourceFeature for SourceUniform1D {
    fn name(&self) -> &str {
        "SourceUniform1D"
    }

    fn prepare_particle(&self, state: &mut ParticleState, rng: &mut Rng) {
        let d = rng.uniform_in(self.min_d, self.max_d);
        let x = match &self.cosmology {
            Some(cosmology) => cosmology.light_travel_to_comoving_distance(d),
            None => d,
        };
        state.set_position(Vector3::new(x, 0.0, 0.0));
    }

    fn provides_position(&self) -> bool {
        true
    }
}

/// Random positions weighted by a 3-D density grid.
///
/// A grid cell is drawn with probability proportional to its stored
/// density, then the position is placed uniformly inside that cell.
pub struct SourceDensityGrid {
    grid: Arc<ScalarGrid>,
    cells: WeightedSampler<usize>,
}

impl SourceDensityGrid {
    /// Build the cell sampler from the grid's densities.
    ///
    /// # Errors
    ///
    /// [`GridError::ZeroDensity`] if no cell carries positive density.
    pub fn new(grid: Arc<ScalarGrid>) -> Result<Self, GridError> {
        let cells = grid.cell_sampler()?;
        Ok(SourceDensityGrid { grid, cells })
    }
}

impl SourceFeature for SourceDensityGrid {
    fn name(&self) -> &str {
        "SourceDensityGrid"
    }

    fn prepare_particle(&self, state: &mut ParticleState, rng: &mut Rng) {
        if let Some(&cell) = self.cells.sample(rng.uniform()) {
            let offsets = (rng.uniform(), rng.uniform(), rng.uniform());
            state.set_position(self.grid.cell_to_position(cell, offsets));
        }
    }

    fn provides_position(&self) -> bool {
        true
    }
}

/// Random positions weighted by a 1-D density grid.
///
/// Like [`SourceDensityGrid`] but offsets only along `x`; `y` and `z`
/// stay zero.
pub struct SourceDensityGrid1D {
    grid: Arc<ScalarGrid>,
    cells: WeightedSampler<usize>,
}

impl SourceDensityGrid1D {
    /// Build the cell sampler from a 1-D grid's densities.
    ///
    /// # Errors
    ///
    /// [`GridError::EmptyShape`] if the grid is not one-dimensional, or
    /// [`GridError::ZeroDensity`] if nothing can be sampled.
    pub fn new(grid: Arc<ScalarGrid>) -> Result<Self, GridError> {
        if !grid.is_one_dimensional() {
            return Err(GridError::EmptyShape);
        }
        let cells = grid.cell_sampler()?;
        Ok(SourceDensityGrid1D { grid, cells })
    }
}

impl SourceFeature for SourceDensityGrid1D {
    fn name(&self) -> &str {
        "SourceDensityGrid1D"
    }

    fn prepare_particle(&self, state: &mut ParticleState, rng: &mut Rng) {
        if let Some(&cell) = self.cells.sample(rng.uniform()) {
            let x = self.grid.cell_to_position(cell, (rng.uniform(), 0.0, 0.0)).x;
            state.set_position(Vector3::new(x, 0.0, 0.0));
        }
    }

    fn provides_position(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aether_core::units::MPC;

    fn draw(feature: &dyn SourceFeature, rng: &mut Rng) -> Vector3 {
        let mut state = ParticleState::default();
        feature.prepare_particle(&mut state, rng);
        state.position()
    }

    #[test]
    fn fixed_position_conventions() {
        let mut rng = Rng::from_seed(0);
        let p = SourcePosition::new(Vector3::new(1.0, 2.0, 3.0));
        assert_eq!(draw(&p, &mut rng), Vector3::new(1.0, 2.0, 3.0));

        let q = SourcePosition::at_distance(4.0);
        assert_eq!(draw(&q, &mut rng), Vector3::new(-4.0, 0.0, 0.0));
    }

    #[test]
    fn multiple_positions_follow_luminosities() {
        let mut f = SourceMultiplePositions::new();
        let a = Vector3::new(1.0, 0.0, 0.0);
        let b = Vector3::new(0.0, 1.0, 0.0);
        f.add(a, 1.0).unwrap();
        f.add(b, 1.0).unwrap();

        let mut rng = Rng::from_seed(9);
        let hits_a = (0..10_000).filter(|_| draw(&f, &mut rng) == a).count();
        assert!((4_500..5_500).contains(&hits_a), "got {hits_a}");
    }

    #[test]
    fn sphere_positions_stay_inside() {
        let center = Vector3::new(5.0, -2.0, 1.0);
        let f = SourceUniformSphere::new(center, 3.0);
        let mut rng = Rng::from_seed(2);
        for _ in 0..5_000 {
            let r = (draw(&f, &mut rng) - center).norm();
            assert!(r <= 3.0 + 1e-9);
        }
    }

    /// Volume-uniform sampling puts ~ (1/2)³ of points in the inner
    /// half radius... i.e. 12.5 %.
    #[test]
    fn sphere_sampling_is_volume_uniform() {
        let f = SourceUniformSphere::new(Vector3::ZERO, 1.0);
        let mut rng = Rng::from_seed(31);
        let n = 40_000;
        let inner = (0..n)
            .filter(|_| draw(&f, &mut rng).norm() < 0.5)
            .count();
        let fraction = inner as f64 / f64::from(n);
        assert!((fraction - 0.125).abs() < 0.01, "inner fraction {fraction}");
    }

    #[test]
    fn shell_positions_sit_on_the_surface() {
        let f = SourceUniformShell::new(Vector3::ZERO, 2.0);
        let mut rng = Rng::from_seed(3);
        for _ in 0..2_000 {
            assert!((draw(&f, &mut rng).norm() - 2.0).abs() < 1e-9);
        }
    }

    #[test]
    fn box_positions_stay_inside() {
        let origin = Vector3::new(-1.0, -1.0, -1.0);
        let size = Vector3::new(2.0, 4.0, 0.5);
        let f = SourceUniformBox::new(origin, size);
        let mut rng = Rng::from_seed(4);
        for _ in 0..5_000 {
            let p = draw(&f, &mut rng);
            assert!(p.x >= -1.0 && p.x < 1.0);
            assert!(p.y >= -1.0 && p.y < 3.0);
            assert!(p.z >= -1.0 && p.z < -0.5);
        }
    }

    #[test]
    fn uniform_1d_without_cosmology_spans_the_interval() {
        let f = SourceUniform1D::without_cosmology(10.0, 20.0);
        let mut rng = Rng::from_seed(6);
        for _ in 0..2_000 {
            let p = draw(&f, &mut rng);
            assert!(p.x >= 10.0 && p.x < 20.0);
            assert_eq!(p.y, 0.0);
        }
    }

    #[test]
    fn uniform_1d_with_cosmology_stretches_distances() {
        let cosmology = Arc::new(Cosmology::default());
        let d = 1000.0 * MPC;
        let f = SourceUniform1D::new(d, d, cosmology.clone());
        let mut rng = Rng::from_seed(6);
        let x = draw(&f, &mut rng).x;
        // Comoving distance exceeds light-travel distance in an
        // expanding universe.
        assert!(x > d, "comoving {x} not beyond light-travel {d}");
        assert!((x - cosmology.light_travel_to_comoving_distance(d)).abs() < 1.0);
    }

    #[test]
    fn density_grid_prefers_dense_cells() {
        let mut grid = ScalarGrid::new(Vector3::ZERO, 2, 1, 1, 1.0).unwrap();
        grid.set(0, 0, 0, 1.0);
        grid.set(1, 0, 0, 3.0);
        let f = SourceDensityGrid::new(Arc::new(grid)).unwrap();

        let mut rng = Rng::from_seed(8);
        let n = 20_000;
        let right = (0..n).filter(|_| draw(&f, &mut rng).x >= 1.0).count();
        let fraction = right as f64 / f64::from(n);
        assert!((fraction - 0.75).abs() < 0.02, "dense cell got {fraction}");
    }

    #[test]
    fn density_grid_rejects_empty_density() {
        let grid = ScalarGrid::new(Vector3::ZERO, 2, 2, 2, 1.0).unwrap();
        assert!(matches!(
            SourceDensityGrid::new(Arc::new(grid)),
            Err(GridError::ZeroDensity)
        ));
    }

    #[test]
    fn density_grid_1d_requires_flat_grid() {
        let mut grid3 = ScalarGrid::new(Vector3::ZERO, 2, 2, 1, 1.0).unwrap();
        grid3.set(0, 0, 0, 1.0);
        assert!(SourceDensityGrid1D::new(Arc::new(grid3)).is_err());

        let mut grid1 = ScalarGrid::new_1d(0.0, 4, 0.5).unwrap();
        grid1.set(2, 0, 0, 1.0);
        let f = SourceDensityGrid1D::new(Arc::new(grid1)).unwrap();
        let mut rng = Rng::from_seed(1);
        for _ in 0..500 {
            let p = draw(&f, &mut rng);
            assert!(p.x >= 1.0 && p.x < 1.5, "x = {} outside the dense cell", p.x);
            assert_eq!(p.y, 0.0);
            assert_eq!(p.z, 0.0);
        }
    }
}
