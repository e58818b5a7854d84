//! Pure pitch geometry
//!
//! Total functions over `Vec2`: degenerate inputs (zero-length vectors,
//! empty candidate lists) yield `None` / `false` rather than panicking.

use super::constants::field;
use super::types::{Heading, Vec2};

/// Targets closer than this produce no heading
pub const HEADING_EPSILON: f32 = 0.01;

/// Sector order for `floor((angle + 22.5) / 45) mod 8`
const SECTOR_HEADINGS: [Heading; 8] = [
    Heading::Right,
    Heading::BottomRight,
    Heading::Bottom,
    Heading::BottomLeft,
    Heading::Left,
    Heading::TopLeft,
    Heading::Top,
    Heading::TopRight,
];

/// Euclidean distance
#[inline]
pub fn distance(a: Vec2, b: Vec2) -> f32 {
    (b - a).length()
}

/// Angle of a vector in degrees, in (-180, 180]
#[inline]
pub fn angle_deg(v: Vec2) -> f32 {
    v.y.atan2(v.x).to_degrees()
}

/// Heading whose 45° sector contains the given angle (lower edge inclusive)
pub fn heading_for_angle(angle_deg: f32) -> Heading {
    let sector = ((angle_deg + 22.5) / 45.0).floor() as i32;
    SECTOR_HEADINGS[sector.rem_euclid(8) as usize]
}

/// Discrete heading from `from` toward `to`, or `None` when already there
pub fn direction_to_heading(from: Vec2, to: Vec2) -> Option<Heading> {
    let delta = to - from;
    if !delta.is_finite() || delta.length() < HEADING_EPSILON {
        return None;
    }
    Some(heading_for_angle(angle_deg(delta)))
}

/// Unsigned angle between two vectors in degrees, `None` if either is zero
pub fn angle_between_deg(a: Vec2, b: Vec2) -> Option<f32> {
    let a = a.try_normalized()?;
    let b = b.try_normalized()?;
    Some(a.dot(b).clamp(-1.0, 1.0).acos().to_degrees())
}

/// Projection parameter and perpendicular distance of `p` onto segment `a-b`.
///
/// Returns `None` for a degenerate segment.
pub fn project_onto_segment(p: Vec2, a: Vec2, b: Vec2) -> Option<(f32, f32)> {
    let ab = b - a;
    let len_sq = ab.dot(ab);
    if len_sq < 1e-12 || !len_sq.is_finite() {
        return None;
    }
    let t = (p - a).dot(ab) / len_sq;
    let closest = a + ab * t;
    Some((t, distance(p, closest)))
}

/// A lane is blocked when an obstacle projects inside the segment and lies
/// closer than `threshold` to it. A zero-length segment is never blocked.
pub fn is_path_clear(start: Vec2, end: Vec2, obstacles: &[Vec2], threshold: f32) -> bool {
    !obstacles.iter().any(|&obstacle| {
        matches!(
            project_onto_segment(obstacle, start, end),
            Some((t, perp)) if (0.0..=1.0).contains(&t) && perp < threshold
        )
    })
}

/// Count obstacles inside the corridor of half-width `threshold` around `start-end`
pub fn count_in_corridor(start: Vec2, end: Vec2, obstacles: &[Vec2], threshold: f32) -> usize {
    obstacles
        .iter()
        .filter(|&&obstacle| {
            matches!(
                project_onto_segment(obstacle, start, end),
                Some((t, perp)) if (0.0..=1.0).contains(&t) && perp < threshold
            )
        })
        .count()
}

/// Closest candidate to `reference`, skipping `exclude`.
///
/// Ties keep the first-encountered index.
pub fn nearest(reference: Vec2, candidates: &[Vec2], exclude: Option<usize>) -> Option<(usize, f32)> {
    let mut best: Option<(usize, f32)> = None;
    for (i, &candidate) in candidates.iter().enumerate() {
        if Some(i) == exclude {
            continue;
        }
        let d = distance(reference, candidate);
        if best.map_or(true, |(_, best_d)| d < best_d) {
            best = Some((i, d));
        }
    }
    best
}

/// Clamp a point to the pitch rectangle
pub fn clamp_to_pitch(p: Vec2) -> Vec2 {
    Vec2::new(
        p.x.clamp(field::LEFT_BOUNDARY, field::RIGHT_BOUNDARY),
        p.y.clamp(field::TOP_BOUNDARY, field::BOTTOM_BOUNDARY),
    )
}

/// Inside the penalty area in front of our goal
pub fn in_own_penalty_area(p: Vec2) -> bool {
    p.x < field::LEFT_BOUNDARY + field::PENALTY_AREA_DEPTH
        && p.y.abs() < field::PENALTY_AREA_HALF_WIDTH
}

pub fn in_opponent_half(p: Vec2) -> bool {
    p.x > field::CENTER_X
}
