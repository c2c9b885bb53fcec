//! Minimum-volume OBB fitting by angular search.

use crate::bounding_volume::Obb;
use crate::math::{Point, Real, Rotation, Vector, DIM};

/// Angular steps, in degrees, of the three passes of the OBB orientation search.
///
/// The coarse pass scans `[0°, 90°)` for each Euler angle. Each following pass scans
/// `±previous_step` around the best orientation found so far, at its own step. A step
/// that is not strictly positive and finite disables its pass and all the following ones,
/// and so does a step needing more than [`MAX_FIT_STEPS_PER_ANGLE`] samples per angle.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct ObbFitSteps {
    /// Step of the first pass.
    pub coarse_deg: Real,
    /// Step of the second pass.
    pub fine_deg: Real,
    /// Step of the last pass.
    pub ultra_deg: Real,
}

impl Default for ObbFitSteps {
    fn default() -> Self {
        ObbFitSteps {
            coarse_deg: 15.0,
            fine_deg: 3.0,
            ultra_deg: 0.5,
        }
    }
}

impl ObbFitSteps {
    /// Creates a new set of search steps, in degrees.
    pub fn new(coarse_deg: Real, fine_deg: Real, ultra_deg: Real) -> Self {
        ObbFitSteps {
            coarse_deg,
            fine_deg,
            ultra_deg,
        }
    }
}

/// The box enclosing a point set along one candidate basis.
#[derive(Copy, Clone, Debug)]
struct Candidate {
    angles: [Real; DIM],
    axes: [Vector; DIM],
    center: Point,
    half_extents: Vector,
    volume: Real,
    area: Real,
}

impl Candidate {
    fn evaluate(pts: &[Point], angles: [Real; DIM]) -> Candidate {
        let rot = Rotation::from_euler_angles(
            angles[0].to_radians(),
            angles[1].to_radians(),
            angles[2].to_radians(),
        );
        let m = rot.matrix();
        let axes = [
            m.column(0).into_owned(),
            m.column(1).into_owned(),
            m.column(2).into_owned(),
        ];

        let mut mins = Vector::repeat(Real::MAX);
        let mut maxs = Vector::repeat(-Real::MAX);

        for pt in pts {
            for i in 0..DIM {
                let proj = pt.coords.dot(&axes[i]);
                mins[i] = mins[i].min(proj);
                maxs[i] = maxs[i].max(proj);
            }
        }

        let half_extents = (maxs - mins) * 0.5;
        let mid = (maxs + mins) * 0.5;
        let center = Point::from(axes[0] * mid.x + axes[1] * mid.y + axes[2] * mid.z);
        let size = half_extents * 2.0;

        Candidate {
            angles,
            axes,
            center,
            half_extents,
            volume: size.x * size.y * size.z,
            area: 2.0 * (size.x * size.y + size.y * size.z + size.z * size.x),
        }
    }

    /// Smaller volume wins; nearly equal volumes are decided by the surface area, then by
    /// the candidate found first.
    fn is_better_than(&self, other: &Candidate) -> bool {
        let tolerance = other.volume.abs().max(other.area.abs()).max(1.0) * 1.0e-6;

        if self.volume < other.volume - tolerance {
            true
        } else if self.volume <= other.volume + tolerance {
            self.area < other.area - tolerance
        } else {
            false
        }
    }

    fn into_obb(self) -> Obb {
        Obb::with_axes(self.center, self.axes, self.half_extents)
    }
}

/// The largest number of samples per Euler angle a single pass may take.
///
/// A pass scans the cube of its samples, so this bounds each pass to about `181³`
/// candidates.
pub const MAX_FIT_STEPS_PER_ANGLE: i32 = 90;

fn is_valid_step(step: Real) -> bool {
    step.is_finite() && step > 0.0
}

/// Converts a sample count computed in floating point, or `None` if it exceeds
/// [`MAX_FIT_STEPS_PER_ANGLE`].
fn bounded_step_count(count: Real) -> Option<i32> {
    (count <= MAX_FIT_STEPS_PER_ANGLE as Real).then_some(count as i32)
}

/// Scans every combination of the three angles `base[i] + k * step` for `k` in `ks`.
fn scan(
    pts: &[Point],
    best: &mut Candidate,
    base: [Real; DIM],
    step: Real,
    ks: impl Iterator<Item = i32> + Clone,
) {
    for i in ks.clone() {
        for j in ks.clone() {
            for k in ks.clone() {
                let angles = [
                    base[0] + i as Real * step,
                    base[1] + j as Real * step,
                    base[2] + k as Real * step,
                ];
                let candidate = Candidate::evaluate(pts, angles);

                if candidate.is_better_than(best) {
                    *best = candidate;
                }
            }
        }
    }
}

/// Fits an OBB of minimum volume on `pts`.
///
/// Returns `None` if `pts` is empty.
pub(crate) fn fit_obb(pts: &[Point], steps: &ObbFitSteps) -> Option<Obb> {
    if pts.is_empty() {
        return None;
    }

    let mut best = Candidate::evaluate(pts, [0.0; DIM]);

    if !is_valid_step(steps.coarse_deg) {
        log::warn!(
            "Invalid coarse OBB fitting step {}°; the fitted OBB is axis-aligned.",
            steps.coarse_deg
        );
        return Some(best.into_obb());
    }

    // Angles in [0°, 90°) cover every box orientation up to axis permutations.
    let Some(coarse_count) = bounded_step_count((90.0 / steps.coarse_deg).ceil()) else {
        log::warn!(
            "Coarse OBB fitting step {}° needs more than {MAX_FIT_STEPS_PER_ANGLE} samples per angle; the fitted OBB is axis-aligned.",
            steps.coarse_deg
        );
        return Some(best.into_obb());
    };
    scan(pts, &mut best, [0.0; DIM], steps.coarse_deg, 0..coarse_count);
    log::trace!(
        "OBB fit coarse pass: angles {:?}, volume {}",
        best.angles,
        best.volume
    );

    let mut previous = steps.coarse_deg;

    for (pass, step) in [("fine", steps.fine_deg), ("ultra", steps.ultra_deg)] {
        if !is_valid_step(step) {
            log::warn!("Invalid {pass} OBB fitting step {step}°; the search stops early.");
            break;
        }

        let Some(count) = bounded_step_count((previous / step).round()) else {
            log::warn!(
                "The {pass} OBB fitting step {step}° needs more than {MAX_FIT_STEPS_PER_ANGLE} samples per angle; the search stops early."
            );
            break;
        };
        let base = best.angles;
        scan(pts, &mut best, base, step, -count..=count);
        log::trace!(
            "OBB fit {pass} pass: angles {:?}, volume {}",
            best.angles,
            best.volume
        );
        previous = step;
    }

    Some(best.into_obb())
}
