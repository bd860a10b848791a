// SPDX-License-Identifier: MIT OR Apache-2.0
//! Three-axis semantic vectors and the Euclidean distance between them.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Number of components in every vector.
pub const DIMENSION: usize = 3;

/// Semantic axis of the simulated embedding space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// First component.
    Nature,
    /// Second component.
    Emotion,
    /// Third component.
    Action,
}

impl Axis {
    /// All axes in component order.
    pub const ALL: [Self; DIMENSION] = [Self::Nature, Self::Emotion, Self::Action];

    /// Component index of this axis.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Nature => 0,
            Self::Emotion => 1,
            Self::Action => 2,
        }
    }

    /// Display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Nature => "Nature",
            Self::Emotion => "Emotion",
            Self::Action => "Action",
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// An immutable point on the Nature/Emotion/Action axes.
///
/// Serializes as a plain three-element array.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Vector([f64; DIMENSION]);

impl Vector {
    #[allow(missing_docs)]
    #[must_use]
    pub const fn new(nature: f64, emotion: f64, action: f64) -> Self {
        Self([nature, emotion, action])
    }

    /// Returns the raw components.
    #[must_use]
    pub const fn components(&self) -> [f64; DIMENSION] {
        self.0
    }

    /// Returns the component on the given axis.
    #[must_use]
    pub const fn get(&self, axis: Axis) -> f64 {
        self.0[axis.index()]
    }

    /// Euclidean distance to `other`.
    #[must_use]
    pub fn distance(&self, other: &Self) -> f64 {
        distance(self, other)
    }
}

impl From<[f64; DIMENSION]> for Vector {
    fn from(components: [f64; DIMENSION]) -> Self {
        Self(components)
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}, {}]", self.0[0], self.0[1], self.0[2])
    }
}

/// Euclidean distance: square root of the summed squared per-axis differences.
///
/// Non-finite components propagate as NaN.
#[must_use]
pub fn distance(a: &Vector, b: &Vector) -> f64 {
    let sum_sq: f64 = a
        .0
        .iter()
        .zip(b.0.iter())
        .map(|(x, y)| (x - y) * (x - y))
        .sum();
    sum_sq.sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance_pythagoras() {
        let a = Vector::new(0.0, 0.0, 0.0);
        let b = Vector::new(3.0, 4.0, 0.0);
        assert!((distance(&a, &b) - 5.0).abs() < f64::EPSILON);
    }

    #[test]
    fn distance_identical_is_zero() {
        for v in [
            Vector::new(0.0, 0.0, 0.0),
            Vector::new(0.95, 0.2, 0.1),
            Vector::new(-0.2, 0.1, 0.95),
            Vector::new(1e6, -1e6, 42.0),
        ] {
            assert_eq!(distance(&v, &v), 0.0);
        }
    }

    #[test]
    fn distance_is_symmetric() {
        let a = Vector::new(0.15, 0.92, 0.45);
        let b = Vector::new(0.2, 0.9, 0.5);
        assert_eq!(distance(&a, &b), distance(&b, &a));
        assert_eq!(a.distance(&b), distance(&a, &b));
    }

    #[test]
    fn distance_known_values() {
        let target = Vector::new(0.15, 0.92, 0.45);
        let sedih = Vector::new(0.15, 0.92, 0.3);
        assert!((distance(&target, &sedih) - 0.15).abs() < 1e-12);

        let hati = Vector::new(0.2, 0.9, 0.5);
        assert!((distance(&target, &hati) - 0.073_484_692).abs() < 1e-8);
    }

    #[test]
    fn distance_nan_propagates() {
        let a = Vector::new(f64::NAN, 0.0, 0.0);
        let b = Vector::new(0.0, 0.0, 0.0);
        assert!(distance(&a, &b).is_nan());
    }

    #[test]
    fn axis_accessors() {
        let v = Vector::new(0.1, 0.2, 0.3);
        assert_eq!(v.get(Axis::Nature), 0.1);
        assert_eq!(v.get(Axis::Emotion), 0.2);
        assert_eq!(v.get(Axis::Action), 0.3);
        assert_eq!(v.components(), [0.1, 0.2, 0.3]);
        assert_eq!(Axis::ALL.map(Axis::index), [0, 1, 2]);
        assert_eq!(Axis::Emotion.to_string(), "Emotion");
    }

    #[test]
    fn display_matches_list_notation() {
        assert_eq!(Vector::new(0.95, 0.2, 0.1).to_string(), "[0.95, 0.2, 0.1]");
        assert_eq!(Vector::new(0.1, -0.5, -0.8).to_string(), "[0.1, -0.5, -0.8]");
        assert_eq!(Vector::new(1.0, 0.0, 0.5).to_string(), "[1, 0, 0.5]");
    }

    #[test]
    fn serde_as_plain_array() {
        let v = Vector::new(0.5, 0.25, 1.0);
        let json = serde_json::to_string(&v).unwrap();
        assert_eq!(json, "[0.5,0.25,1.0]");
        let back: Vector = serde_json::from_str(&json).unwrap();
        assert_eq!(back, v);
    }

    #[test]
    fn serde_rejects_wrong_dimension() {
        assert!(serde_json::from_str::<Vector>("[0.1, 0.2]").is_err());
        assert!(serde_json::from_str::<Vector>("[0.1, 0.2, 0.3, 0.4]").is_err());
    }
}
