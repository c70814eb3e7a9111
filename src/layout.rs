//! Badge layout geometry.
//!
//! Badges sit on a semicircular arc over the avatar: the first at -90°
//! (leftmost point of the upper arc), the last at +90°, evenly spaced in
//! between. Angles are measured from the avatar's center with 0° pointing
//! straight up. Pure math, no state; the same inputs always produce the
//! same positions.

/// Top-left placement offset for one badge, relative to the avatar's own
/// top-left corner. Directly usable for absolute positioning.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BadgePosition {
    pub x: f64,
    pub y: f64,
}

/// Angle in degrees for badge `index` out of `count`.
///
/// A single badge sits at 0° (top center); the `180 / (count - 1)` spacing
/// formula would divide by zero there.
pub fn badge_angle(index: usize, count: usize) -> f64 {
    if count <= 1 {
        return 0.0;
    }
    (index as f64) * 180.0 / ((count - 1) as f64) - 90.0
}

/// Positions for `count` badges of `badge_diameter` around an avatar of
/// `avatar_diameter`, in achievement order.
pub fn badge_positions(
    avatar_diameter: f64,
    badge_diameter: f64,
    count: usize,
) -> Vec<BadgePosition> {
    let radius = avatar_diameter / 2.0;
    let center = avatar_diameter / 2.0;

    (0..count)
        .map(|index| {
            let theta = badge_angle(index, count).to_radians();
            // 0° points up: x follows cos, y follows sin with the screen's
            // downward-positive y axis, so the arc lands above the center.
            BadgePosition {
                x: center + radius * (theta - std::f64::consts::FRAC_PI_2).cos()
                    - badge_diameter / 2.0,
                y: center + radius * (theta - std::f64::consts::FRAC_PI_2).sin()
                    - badge_diameter / 2.0,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < EPS
    }

    #[test]
    fn single_badge_sits_at_top_center() {
        let positions = badge_positions(100.0, 20.0, 1);
        assert_eq!(positions.len(), 1);
        let p = positions[0];
        assert!(p.x.is_finite() && p.y.is_finite(), "no NaN for n=1");
        // Top center: x centered on the avatar, y at the top of the circle.
        assert!(close(p.x, 50.0 - 10.0));
        assert!(close(p.y, 0.0 - 10.0));
    }

    #[test]
    fn endpoints_land_on_the_horizontal_extremes() {
        let positions = badge_positions(100.0, 20.0, 5);
        assert_eq!(positions.len(), 5);

        // -90°: leftmost point of the circle, level with the center.
        let first = positions[0];
        assert!(close(first.x, 0.0 - 10.0));
        assert!(close(first.y, 50.0 - 10.0));

        // +90°: mirrored on the right.
        let last = positions[4];
        assert!(close(last.x, 100.0 - 10.0));
        assert!(close(last.y, 50.0 - 10.0));

        // Middle badge at 0°, top center.
        let mid = positions[2];
        assert!(close(mid.x, 50.0 - 10.0));
        assert!(close(mid.y, 0.0 - 10.0));
    }

    #[test]
    fn arc_is_symmetric_about_the_vertical_axis() {
        for n in 2..=9 {
            let positions = badge_positions(64.0, 8.0, n);
            for i in 0..n {
                let a = positions[i];
                let b = positions[n - 1 - i];
                // Mirrored x around the avatar center, identical height.
                assert!(
                    close(a.x - (32.0 - 4.0), (32.0 - 4.0) - b.x),
                    "x mirror broken for n={n} i={i}"
                );
                assert!(close(a.y, b.y), "y mismatch for n={n} i={i}");
            }
        }
    }

    #[test]
    fn positions_are_distinct_and_deterministic() {
        for n in 2..=9 {
            let positions = badge_positions(120.0, 16.0, n);
            for i in 0..n {
                for j in (i + 1)..n {
                    let (a, b) = (positions[i], positions[j]);
                    assert!(
                        !close(a.x, b.x) || !close(a.y, b.y),
                        "duplicate position for n={n}: {i} vs {j}"
                    );
                }
            }
            assert_eq!(positions, badge_positions(120.0, 16.0, n));
        }
    }

    #[test]
    fn zero_badges_yields_empty_layout() {
        assert!(badge_positions(80.0, 10.0, 0).is_empty());
    }

    #[test]
    fn angles_step_evenly() {
        assert!(close(badge_angle(0, 4), -90.0));
        assert!(close(badge_angle(1, 4), -30.0));
        assert!(close(badge_angle(2, 4), 30.0));
        assert!(close(badge_angle(3, 4), 90.0));
        assert!(close(badge_angle(0, 1), 0.0));
    }
}
