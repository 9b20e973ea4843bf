//! Problem instance: the ordered set of cities a tour visits.

use std::collections::HashSet;

use super::city::City;
use crate::error::{Result, TspError};

/// An ordered, immutable collection of cities indexed `0..len`.
///
/// Construction rejects empty inputs and duplicate city ids. A single city is
/// accepted; every tour over it has length `0.0`.
///
/// # Examples
///
/// ```
/// use tsp_ga::tsp::Instance;
///
/// let square = Instance::from_coords(&[(0.0, 0.0), (0.0, 1.0), (1.0, 1.0), (1.0, 0.0)])?;
/// assert_eq!(square.tour_length(&[0, 1, 2, 3])?, 4.0);
/// # Ok::<(), tsp_ga::TspError>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "Vec<City>", into = "Vec<City>")
)]
pub struct Instance {
    cities: Vec<City>,
}

impl Instance {
    /// Builds an instance from cities in index order.
    ///
    /// # Errors
    ///
    /// [`TspError::DegenerateInstance`] when `cities` is empty,
    /// [`TspError::DuplicateCityId`] when two cities share an id.
    pub fn new(cities: Vec<City>) -> Result<Self> {
        if cities.is_empty() {
            return Err(TspError::DegenerateInstance { len: 0 });
        }
        let mut seen = HashSet::with_capacity(cities.len());
        for city in &cities {
            if !seen.insert(city.id) {
                return Err(TspError::DuplicateCityId(city.id));
            }
        }
        Ok(Self { cities })
    }

    /// Builds an instance from bare coordinates, labelling cities `1..=len`.
    pub fn from_coords(coords: &[(f64, f64)]) -> Result<Self> {
        let cities = coords
            .iter()
            .enumerate()
            .map(|(i, &(x, y))| City::new(i as i64 + 1, x, y))
            .collect();
        Self::new(cities)
    }

    /// Number of cities.
    pub fn len(&self) -> usize {
        self.cities.len()
    }

    /// Always `false`; empty instances cannot be constructed.
    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }

    pub fn cities(&self) -> &[City] {
        &self.cities
    }

    /// City at `index`.
    ///
    /// # Errors
    ///
    /// [`TspError::InvalidIndex`] when `index >= len`.
    pub fn city(&self, index: usize) -> Result<&City> {
        self.cities.get(index).ok_or(TspError::InvalidIndex {
            index,
            len: self.cities.len(),
        })
    }

    /// Total length of the closed tour visiting `order`.
    ///
    /// Sums every consecutive edge plus the closing edge from the last city
    /// back to the first. Empty and single-city orders have length `0.0`.
    ///
    /// # Errors
    ///
    /// [`TspError::InvalidIndex`] when any entry is outside `[0, len)`.
    pub fn tour_length(&self, order: &[usize]) -> Result<f64> {
        let n = order.len();
        let mut total = 0.0;
        for (i, &from) in order.iter().enumerate() {
            let to = order[(i + 1) % n];
            total += self.city(from)?.distance_to(self.city(to)?);
        }
        Ok(total)
    }
}

impl TryFrom<Vec<City>> for Instance {
    type Error = TspError;

    fn try_from(cities: Vec<City>) -> Result<Self> {
        Self::new(cities)
    }
}

impl From<Instance> for Vec<City> {
    fn from(instance: Instance) -> Self {
        instance.cities
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_square() -> Instance {
        Instance::from_coords(&[(0.0, 0.0), (0.0, 1.0), (1.0, 1.0), (1.0, 0.0)]).unwrap()
    }

    #[test]
    fn test_empty_rejected() {
        assert!(matches!(
            Instance::new(vec![]),
            Err(TspError::DegenerateInstance { len: 0 })
        ));
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let cities = vec![City::new(1, 0.0, 0.0), City::new(1, 1.0, 1.0)];
        assert!(matches!(
            Instance::new(cities),
            Err(TspError::DuplicateCityId(1))
        ));
    }

    #[test]
    fn test_ids_need_not_match_index() {
        let cities = vec![City::new(40, 0.0, 0.0), City::new(7, 3.0, 4.0)];
        let inst = Instance::new(cities).unwrap();
        assert_eq!(inst.city(0).unwrap().id, 40);
        assert_eq!(inst.city(1).unwrap().id, 7);
    }

    #[test]
    fn test_square_perimeter() {
        let inst = unit_square();
        assert!((inst.tour_length(&[0, 1, 2, 3]).unwrap() - 4.0).abs() < 1e-12);
    }

    #[test]
    fn test_crossing_tour_is_longer() {
        let inst = unit_square();
        let crossing = inst.tour_length(&[0, 2, 1, 3]).unwrap();
        assert!((crossing - (2.0 + 2.0 * 2f64.sqrt())).abs() < 1e-12);
    }

    #[test]
    fn test_includes_closing_edge() {
        let inst = Instance::from_coords(&[(0.0, 0.0), (3.0, 4.0)]).unwrap();
        assert!((inst.tour_length(&[0, 1]).unwrap() - 10.0).abs() < 1e-12);
        assert!((inst.tour_length(&[1, 0]).unwrap() - 10.0).abs() < 1e-12);
    }

    #[test]
    fn test_single_city_and_empty_order() {
        let inst = Instance::from_coords(&[(2.0, 2.0)]).unwrap();
        assert_eq!(inst.tour_length(&[0]).unwrap(), 0.0);
        assert_eq!(inst.tour_length(&[]).unwrap(), 0.0);
    }

    #[test]
    fn test_out_of_range_index() {
        let inst = unit_square();
        let err = inst.tour_length(&[0, 1, 4, 3]).unwrap_err();
        assert!(matches!(err, TspError::InvalidIndex { index: 4, len: 4 }));
    }

    #[test]
    fn test_out_of_range_last_index() {
        // The closing edge must validate too.
        let inst = unit_square();
        assert!(inst.tour_length(&[0, 1, 2, 9]).is_err());
    }
}
