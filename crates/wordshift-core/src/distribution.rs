//! Kernel-smoothed affect distribution on a fixed grid.
//!
//! Each counted word contributes a Gaussian with its rating mean and
//! standard deviation, scaled by its frequency weight. The result is a
//! mixture evaluated at [`GRID_POINTS`] evenly spaced values from
//! [`GRID_MIN`] to [`GRID_MAX`] inclusive, not a normalized histogram.

use std::f64::consts::PI;

use wordshift_types::{DimensionStats, DistributionBin};

pub const GRID_MIN: f64 = 0.0;
pub const GRID_MAX: f64 = 10.0;
pub const GRID_POINTS: usize = 101;

/// Distance between neighbouring grid points
pub fn grid_step() -> f64 {
    (GRID_MAX - GRID_MIN) / (GRID_POINTS - 1) as f64
}

pub fn grid() -> impl Iterator<Item = f64> {
    let step = grid_step();
    (0..GRID_POINTS).map(move |i| GRID_MIN + i as f64 * step)
}

pub fn gaussian_pdf(x: f64, mean: f64, std: f64) -> f64 {
    let z = x - mean;
    (-(z * z) / (2.0 * std * std)).exp() / ((2.0 * PI).sqrt() * std)
}

/// Accumulates weighted Gaussian kernels over the grid
#[derive(Debug, Clone)]
pub struct KernelDensity {
    bins: Vec<DistributionBin>,
}

impl KernelDensity {
    pub fn new() -> Self {
        Self {
            bins: grid()
                .map(|value| DistributionBin {
                    value,
                    density: 0.0,
                })
                .collect(),
        }
    }

    pub fn add(&mut self, stats: DimensionStats, weight: f64) {
        for bin in &mut self.bins {
            bin.density += weight * gaussian_pdf(bin.value, stats.mean, stats.std);
        }
    }

    /// Riemann sum of the densities over the grid
    pub fn mass(&self) -> f64 {
        self.bins.iter().map(|b| b.density).sum::<f64>() * grid_step()
    }

    pub fn into_bins(self) -> Vec<DistributionBin> {
        self.bins
    }
}

impl Default for KernelDensity {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_spans_zero_to_ten() {
        let points: Vec<f64> = grid().collect();
        assert_eq!(points.len(), 101);
        assert_eq!(points[0], 0.0);
        assert!((points[50] - 5.0).abs() < 1e-12);
        assert!((points[100] - 10.0).abs() < 1e-12);
    }

    #[test]
    fn standard_normal_peak() {
        let peak = gaussian_pdf(0.0, 0.0, 1.0);
        assert!((peak - 0.398_942_280_401_432_7).abs() < 1e-12);
        assert!((gaussian_pdf(1.0, 0.0, 1.0) - gaussian_pdf(-1.0, 0.0, 1.0)).abs() < 1e-15);
    }

    #[test]
    fn centred_kernel_has_unit_mass() {
        let mut density = KernelDensity::new();
        density.add(DimensionStats::new(5.0, 1.0), 1.0);
        assert!((density.mass() - 1.0).abs() < 1e-3);
    }

    #[test]
    fn mass_scales_with_weight() {
        let mut density = KernelDensity::new();
        density.add(DimensionStats::new(4.0, 0.8), 0.25);
        density.add(DimensionStats::new(6.0, 1.2), 0.75);
        assert!((density.mass() - 1.0).abs() < 1e-3);

        let mut half = KernelDensity::new();
        half.add(DimensionStats::new(5.0, 1.0), 0.5);
        assert!((half.mass() - 0.5).abs() < 1e-3);
    }

    #[test]
    fn empty_density_is_zero() {
        let bins = KernelDensity::new().into_bins();
        assert_eq!(bins.len(), GRID_POINTS);
        assert!(bins.iter().all(|b| b.density == 0.0));
    }
}
