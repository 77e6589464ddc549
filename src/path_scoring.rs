//! Deviation scoring for lattice paths.
//!
//! A path's deviation is how far it strays from the ideal diagonal
//! x/m = y/n, measured as the maximum of |x/m - y/n| over its points.

use crate::error::SimError;
use crate::path_generation::LatticePath;

/// Maximum absolute deviation of a path from the diagonal.
///
/// Both normalized coordinates lie in [0, 1], so the result lies in
/// [0, 1]. Bounds of zero are rejected before any division happens.
pub fn deviation(path: &LatticePath, m: u32, n: u32) -> Result<f64, SimError> {
    if m == 0 || n == 0 {
        return Err(SimError::InvalidBounds { m, n });
    }

    let max = path
        .points
        .iter()
        .map(|&(x, y)| (x as f64 / m as f64 - y as f64 / n as f64).abs())
        .fold(0.0, f64::max);

    Ok(max)
}
