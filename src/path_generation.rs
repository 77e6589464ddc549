//! Random monotone lattice path generation.
//!
//! A path starts at (0,0) and walks toward (m,n), one unbiased coin flip
//! per iteration deciding which axis tries to advance.

use crate::error::SimError;
use rand::Rng;

/// A monotone lattice path from (0,0) to (m,n).
///
/// Points are stored in visit order. When a drawn step would push a
/// coordinate past its bound, that coordinate repeats its last value and
/// the repeated point is still recorded, so consecutive duplicate points
/// appear once one axis has reached its bound.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LatticePath {
    /// Visited (x, y) points, stall repeats included
    pub points: Vec<(u32, u32)>,
}

impl LatticePath {
    /// Number of recorded points, stall repeats included.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Final point of the path.
    pub fn end(&self) -> Option<(u32, u32)> {
        self.points.last().copied()
    }
}

/// Generates a random monotone path from (0,0) to (m,n).
///
/// Each iteration draws one unbiased bit: on 1 the x coordinate proposes a
/// +1 step, on 0 the y coordinate does. A proposed advance past the axis
/// bound is dropped (that coordinate repeats its last value) while the
/// other axis still applies its own step. Every visited point is appended,
/// repeats included, until the path reaches (m,n).
///
/// Termination is probabilistic: once only one axis remains short of its
/// bound, each flip advances it with probability 0.5, so the walk finishes
/// with probability 1.
pub fn generate_path(m: u32, n: u32, rng: &mut impl Rng) -> Result<LatticePath, SimError> {
    if m == 0 || n == 0 {
        return Err(SimError::InvalidBounds { m, n });
    }

    let mut points = Vec::with_capacity((m + n + 1) as usize);
    let mut x: u32 = 0;
    let mut y: u32 = 0;
    points.push((x, y));

    while x < m || y < n {
        let x_step: u32 = rng.gen_range(0..2);
        let y_step = 1 - x_step;

        if x + x_step <= m {
            x += x_step;
        }
        if y + y_step <= n {
            y += y_step;
        }

        points.push((x, y));
    }

    Ok(LatticePath { points })
}
