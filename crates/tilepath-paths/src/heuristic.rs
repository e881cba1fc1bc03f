/// Distance estimate used to order the A* frontier.
///
/// Every variant is a pure function of the remaining offset `(dx, dy)` to
/// the goal, in grid steps, scaled by a weight `H`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Heuristic {
    /// `H * (|dx| + |dy|)`.
    Manhattan,
    /// Chebyshev distance, `H * max(|dx|, |dy|)`. Admissible on every
    /// topology with unit step costs.
    #[default]
    MaxDxDy,
    /// `H * 2 * d + H * (s - 2 * d)` with `d = min(|dx|, |dy|)` and
    /// `s = |dx| + |dy|`.
    DiagonalShortcut,
    /// `H * sqrt(dx² + dy²)`.
    Euclidean,
    /// `H * (dx² + dy²)`.
    ///
    /// Not admissible: it overestimates for any route longer than one step,
    /// so routes may be non-optimal. Use it only as a cheap directional bias
    /// when speed matters more than the best route.
    EuclideanNoSqr,
    /// Octile-like blend: with `ox = |dx|`, `oy = |dy|`, `orth = |ox - oy|`
    /// and `diag = (ox + oy - orth) / 2`, `H * (diag + orth + ox + oy)`.
    Custom1,
}

impl Heuristic {
    /// Estimate the remaining cost for an offset of (`dx`, `dy`).
    pub fn estimate(self, dx: f32, dy: f32, weight: f32) -> f32 {
        let (ax, ay) = (dx.abs(), dy.abs());
        match self {
            Self::Manhattan => weight * (ax + ay),
            Self::MaxDxDy => weight * ax.max(ay),
            Self::DiagonalShortcut => {
                let d = ax.min(ay);
                let s = ax + ay;
                weight * 2.0 * d + weight * (s - 2.0 * d)
            }
            Self::Euclidean => weight * (dx * dx + dy * dy).sqrt(),
            Self::EuclideanNoSqr => weight * (dx * dx + dy * dy),
            Self::Custom1 => {
                let orth = (ax - ay).abs();
                let diag = ((ax + ay - orth) / 2.0).abs();
                weight * (diag + orth + ax + ay)
            }
        }
    }
}
