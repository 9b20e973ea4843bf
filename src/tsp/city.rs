//! Cities: immutable points in the plane.

/// A city with an external identifier and planar coordinates.
///
/// The `id` is the label from the input file. The engine never uses it; tours
/// are permutations of positions inside an [`Instance`](super::Instance).
///
/// # Examples
///
/// ```
/// use tsp_ga::tsp::City;
///
/// let a = City::new(1, 0.0, 0.0);
/// let b = City::new(2, 3.0, 4.0);
/// assert_eq!(a.distance_to(&b), 5.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct City {
    /// External label, not necessarily equal to the array index.
    pub id: i64,
    pub x: f64,
    pub y: f64,
}

impl City {
    pub fn new(id: i64, x: f64, y: f64) -> Self {
        Self { id, x, y }
    }

    /// Euclidean distance to `other`.
    pub fn distance_to(&self, other: &City) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}
