//! Arc geometry for drawing a selection on the dial.
//!
//! Everything here is declarative: the engine hands back angles, endpoints and
//! flags, and the host turns them into SVG (or whatever it draws with).
//! [`Primitive`] carries a ready-made path string for hosts that just want to
//! drop it into a `d` attribute.

use std::f64::consts::PI;

use super::angle::Angle;

/// A point relative to the dial centre, screen orientation (y grows down).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// Result of the sweep-direction decision for an arc.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sweep {
    pub clockwise: bool,
}

/// Point at `angle` on a circle of `radius` around the dial centre.
pub fn cartesian(radius: f64, angle: Angle) -> Point {
    Point {
        x: radius * angle.radians().sin(),
        y: -radius * angle.radians().cos(),
    }
}

/// Decide the arc flag for a sector running from `start` to `end`.
///
/// The flag is set when the pointer has swept more than half a turn, so the
/// rendered sector is the region actually swept and not its complement.
pub fn resolve_sweep(start: Angle, end: Angle) -> Sweep {
    let diff = end.radians() - start.radians();
    let mut clockwise = diff > PI;
    if diff < 0.0 && diff > -PI {
        clockwise = !clockwise;
    }
    Sweep { clockwise }
}

/// The `(0, 0)` angle pair stands for "whole band selected".
pub fn is_full_circle(start: Angle, end: Angle) -> bool {
    start.is_zero() && end.is_zero()
}

/// A pie slice from the dial centre between two angles.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sector {
    pub start: Angle,
    pub end: Angle,
    pub sweep: Sweep,
}

impl Sector {
    pub fn new(start: Angle, end: Angle) -> Self {
        Self {
            start,
            end,
            sweep: resolve_sweep(start, end),
        }
    }

    /// Arc endpoints on a circle of `radius`.
    pub fn endpoints(&self, radius: f64) -> (Point, Point) {
        (cartesian(radius, self.start), cartesian(radius, self.end))
    }
}

/// What to draw for one selection on the dial.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DialShape {
    /// Pointer pressed but not moved yet: a line from the centre.
    Ray { start: Angle },
    /// A swept sector.
    Sector(Sector),
    /// Everything selected.
    FullCircle,
}

impl DialShape {
    /// Shape for a stored angle pair, honouring the full-circle sentinel.
    pub fn from_angles(start: Angle, end: Angle) -> Self {
        if is_full_circle(start, end) {
            DialShape::FullCircle
        } else {
            DialShape::Sector(Sector::new(start, end))
        }
    }

    pub fn is_full_circle(&self) -> bool {
        matches!(self, DialShape::FullCircle)
    }

    /// Render as an SVG primitive on a dial of `radius`.
    pub fn primitive(&self, radius: f64) -> Primitive {
        match self {
            DialShape::Ray { start } => {
                let p = cartesian(radius, *start);
                Primitive::Path(format!("M0,0 L0,0 {},{}z", fmt_coord(p.x), fmt_coord(p.y)))
            }
            DialShape::Sector(sector) => {
                let (from, to) = sector.endpoints(radius);
                // The resolved flag is the large-arc flag; the SVG sweep flag
                // stays 1 because angles always advance clockwise on screen.
                Primitive::Path(format!(
                    "M0,0 L0,0 {fx},{fy}A{r},{r} 0 {large},1 {tx},{ty}L{tx},{ty} 0,0z",
                    fx = fmt_coord(from.x),
                    fy = fmt_coord(from.y),
                    r = fmt_coord(radius),
                    large = u8::from(sector.sweep.clockwise),
                    tx = fmt_coord(to.x),
                    ty = fmt_coord(to.y),
                ))
            }
            DialShape::FullCircle => Primitive::Circle { radius },
        }
    }
}

/// An SVG element, positioned relative to the dial centre.
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    /// A closed `<path>` with this `d` attribute.
    Path(String),
    /// A `<circle>` at the centre.
    Circle { radius: f64 },
}

// Trim float noise so paths stay short and stable in tests.
fn fmt_coord(value: f64) -> String {
    let rounded = (value * 1000.0).round() / 1000.0;
    if rounded == 0.0 {
        // avoid "-0"
        "0".to_string()
    } else {
        format!("{rounded}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{FRAC_PI_2, TAU};

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_cartesian_cardinal_points() {
        let top = cartesian(10.0, Angle::ZERO);
        assert!(close(top.x, 0.0) && close(top.y, -10.0));

        let right = cartesian(10.0, Angle::new(FRAC_PI_2));
        assert!(close(right.x, 10.0) && close(right.y, 0.0));

        let bottom = cartesian(10.0, Angle::new(PI));
        assert!(close(bottom.x, 0.0) && close(bottom.y, 10.0));
    }

    #[test]
    fn test_quarter_turn_is_short_arc() {
        assert!(!resolve_sweep(Angle::ZERO, Angle::new(FRAC_PI_2)).clockwise);
    }

    #[test]
    fn test_three_quarter_turn_is_long_arc() {
        assert!(resolve_sweep(Angle::ZERO, Angle::new(3.0 * FRAC_PI_2)).clockwise);
    }

    #[test]
    fn test_sweep_across_twelve() {
        // 9 o'clock to 3 o'clock across the top: diff = -π, exactly half
        assert!(!resolve_sweep(Angle::new(3.0 * FRAC_PI_2), Angle::new(FRAC_PI_2)).clockwise);
        // 11 o'clock to 1 o'clock across the top: large negative diff, short arc
        let eleven = Angle::new(TAU * 11.0 / 12.0);
        let one = Angle::new(TAU / 12.0);
        assert!(!resolve_sweep(eleven, one).clockwise);
        // 1 o'clock back to 11 o'clock going the long way round
        assert!(resolve_sweep(one, eleven).clockwise);
    }

    #[test]
    fn test_small_backwards_diff_flips() {
        // end slightly before start: the pointer went almost all the way round
        let start = Angle::new(PI);
        let end = Angle::new(PI - 0.1);
        assert!(resolve_sweep(start, end).clockwise);
    }

    #[test]
    fn test_full_circle_sentinel() {
        assert!(is_full_circle(Angle::ZERO, Angle::ZERO));
        assert!(!is_full_circle(Angle::ZERO, Angle::new(0.5)));
        assert!(DialShape::from_angles(Angle::ZERO, Angle::ZERO).is_full_circle());
    }

    #[test]
    fn test_full_circle_never_renders_arc() {
        for radius in [0.0, 1.0, 42.5, 1000.0] {
            let primitive = DialShape::FullCircle.primitive(radius);
            assert_eq!(primitive, Primitive::Circle { radius });
        }
    }

    #[test]
    fn test_sector_path_data() {
        let shape = DialShape::from_angles(Angle::ZERO, Angle::new(FRAC_PI_2));
        assert_eq!(
            shape.primitive(100.0),
            Primitive::Path("M0,0 L0,0 0,-100A100,100 0 0,1 100,0L100,0 0,0z".to_string())
        );

        let long = DialShape::from_angles(Angle::ZERO, Angle::new(3.0 * FRAC_PI_2));
        assert_eq!(
            long.primitive(100.0),
            Primitive::Path("M0,0 L0,0 0,-100A100,100 0 1,1 -100,0L-100,0 0,0z".to_string())
        );
    }

    #[test]
    fn test_ray_path_data() {
        let shape = DialShape::Ray {
            start: Angle::new(PI),
        };
        assert_eq!(
            shape.primitive(50.0),
            Primitive::Path("M0,0 L0,0 0,50z".to_string())
        );
    }
}
