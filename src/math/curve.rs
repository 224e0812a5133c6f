use serde::{Deserialize, Serialize};
use super::Vec2;

/// Quadratic Bézier segment, the `M start Q control end` path used for roots
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QuadraticCurve {
    pub start: Vec2,
    pub control: Vec2,
    pub end: Vec2,
}

impl QuadraticCurve {
    pub fn new(start: Vec2, control: Vec2, end: Vec2) -> Self {
        Self { start, control, end }
    }

    /// Evaluate curve at parameter t (0.0 to 1.0)
    pub fn evaluate(&self, t: f64) -> Vec2 {
        let t = t.clamp(0.0, 1.0);
        let u = 1.0 - t;
        self.start.scale(u * u) + self.control.scale(2.0 * u * t) + self.end.scale(t * t)
    }

    /// Sample curve at N evenly spaced parameter values
    pub fn sample(&self, n: usize) -> Vec<Vec2> {
        (0..n)
            .map(|i| {
                let t = i as f64 / (n - 1).max(1) as f64;
                self.evaluate(t)
            })
            .collect()
    }

    /// Approximate distance from a point to the curve, measured against
    /// a polyline of `samples` points
    pub fn distance_to(&self, point: Vec2, samples: usize) -> f64 {
        self.sample(samples.max(2))
            .windows(2)
            .map(|w| distance_to_segment(point, w[0], w[1]))
            .fold(f64::INFINITY, f64::min)
    }

    /// SVG path data
    pub fn to_path_data(&self) -> String {
        format!(
            "M {} {} Q {} {} {} {}",
            self.start.x, self.start.y, self.control.x, self.control.y, self.end.x, self.end.y
        )
    }
}

/// Distance from `p` to the segment `a`-`b`
pub fn distance_to_segment(p: Vec2, a: Vec2, b: Vec2) -> f64 {
    let ab = b - a;
    let len_sq = ab.dot(&ab);
    if len_sq == 0.0 {
        return p.distance(&a);
    }
    let t = ((p - a).dot(&ab) / len_sq).clamp(0.0, 1.0);
    p.distance(&a.lerp(&b, t))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn root_curve() -> QuadraticCurve {
        QuadraticCurve::new(
            Vec2::new(570.0, 700.0),
            Vec2::new(550.0, 750.0),
            Vec2::new(540.0, 800.0),
        )
    }

    #[test]
    fn test_curve_endpoints() {
        let curve = root_curve();
        assert_eq!(curve.evaluate(0.0), curve.start);
        assert_eq!(curve.evaluate(1.0), curve.end);
    }

    #[test]
    fn test_sample_count() {
        let points = root_curve().sample(16);
        assert_eq!(points.len(), 16);
        assert_eq!(points[0], root_curve().start);
    }

    #[test]
    fn test_distance_to_curve() {
        let curve = root_curve();
        assert!(curve.distance_to(curve.evaluate(0.5), 32) < 0.5);
        assert!(curve.distance_to(Vec2::new(700.0, 700.0), 32) > 100.0);
    }

    #[test]
    fn test_distance_to_degenerate_segment() {
        let a = Vec2::new(1.0, 1.0);
        assert!((distance_to_segment(Vec2::new(4.0, 5.0), a, a) - 5.0).abs() < 1e-9);
    }

    #[test]
    fn test_path_data() {
        assert_eq!(root_curve().to_path_data(), "M 570 700 Q 550 750 540 800");
    }
}
