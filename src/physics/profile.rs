//! Radius profile container
//!
//! A [`RadiusProfile`] is an ordered sequence of radius values, one per
//! axial-position grid point. The VLS solver produces one per flux ratio,
//! the VS integrator produces one per (flux ratio, time) pair, and the
//! tapering evaluator sums them elementwise.

use nalgebra::DVector;
use std::fmt;

/// Ordered radius values co-indexed with an axial-position axis (nm)
///
/// # Example
///
/// ```rust
/// use taper_rs::physics::RadiusProfile;
///
/// let vls = RadiusProfile::from_vec(vec![15.0, 15.4, 15.9]);
/// let vs = RadiusProfile::from_vec(vec![3.0, 2.0, 1.0]);
///
/// let total = vls.sum_with(&vs).unwrap();
/// assert_eq!(total.top(), Some(16.9));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct RadiusProfile {
    values: DVector<f64>,
}

impl RadiusProfile {
    /// Create from a plain vector
    pub fn from_vec(values: Vec<f64>) -> Self {
        Self {
            values: DVector::from_vec(values),
        }
    }

    /// Create from a DVector
    pub fn from_vector(values: DVector<f64>) -> Self {
        Self { values }
    }

    /// Number of axial grid points
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// True when the profile holds no points
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Radius at grid point `index`, if in bounds (nm)
    pub fn get(&self, index: usize) -> Option<f64> {
        if index < self.values.len() {
            Some(self.values[index])
        } else {
            None
        }
    }

    /// Radius at the top (farthest axial position) of the wire (nm)
    pub fn top(&self) -> Option<f64> {
        if self.values.is_empty() {
            None
        } else {
            Some(self.values[self.values.len() - 1])
        }
    }

    /// Underlying values
    pub fn values(&self) -> &DVector<f64> {
        &self.values
    }

    /// Prefix of the first `count` points
    ///
    /// The VLS profile is solved once over the full axial axis; shorter
    /// growth times consume the prefix matching their own axial extent.
    ///
    /// # Errors
    ///
    /// `count` beyond the profile length.
    pub fn prefix(&self, count: usize) -> Result<Self, String> {
        if count > self.values.len() {
            return Err(format!(
                "profile prefix of {} points requested from a {}-point profile",
                count,
                self.values.len()
            ));
        }
        Ok(Self {
            values: DVector::from_iterator(count, self.values.iter().take(count).copied()),
        })
    }

    /// Elementwise sum with another profile of the same length
    ///
    /// # Errors
    ///
    /// Length mismatch.
    pub fn sum_with(&self, other: &Self) -> Result<Self, String> {
        if self.len() != other.len() {
            return Err(format!(
                "profile length mismatch: {} points versus {}",
                self.len(),
                other.len()
            ));
        }
        Ok(Self {
            values: &self.values + &other.values,
        })
    }

    /// True when every value is finite (no NaN/Inf)
    pub fn is_finite(&self) -> bool {
        self.values.iter().all(|r| r.is_finite())
    }
}

impl fmt::Display for RadiusProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RadiusProfile[{} points]", self.len())
    }
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_top_and_get() {
        let profile = RadiusProfile::from_vec(vec![15.0, 16.0, 17.5]);
        assert_eq!(profile.len(), 3);
        assert_eq!(profile.top(), Some(17.5));
        assert_eq!(profile.get(0), Some(15.0));
        assert_eq!(profile.get(3), None);
    }

    #[test]
    fn test_empty_profile() {
        let profile = RadiusProfile::from_vec(vec![]);
        assert!(profile.is_empty());
        assert_eq!(profile.top(), None);
    }

    #[test]
    fn test_prefix() {
        let profile = RadiusProfile::from_vec(vec![1.0, 2.0, 3.0, 4.0]);
        let head = profile.prefix(2).unwrap();
        assert_eq!(head.len(), 2);
        assert_eq!(head.get(1), Some(2.0));

        assert!(profile.prefix(5).is_err());
        assert_eq!(profile.prefix(4).unwrap(), profile);
    }

    #[test]
    fn test_sum_with() {
        let a = RadiusProfile::from_vec(vec![1.0, 2.0]);
        let b = RadiusProfile::from_vec(vec![0.5, 0.5]);
        let total = a.sum_with(&b).unwrap();
        assert_eq!(total.get(0), Some(1.5));
        assert_eq!(total.get(1), Some(2.5));

        let c = RadiusProfile::from_vec(vec![1.0]);
        assert!(a.sum_with(&c).is_err());
    }

    #[test]
    fn test_is_finite() {
        assert!(RadiusProfile::from_vec(vec![1.0, 2.0]).is_finite());
        assert!(!RadiusProfile::from_vec(vec![1.0, f64::NAN]).is_finite());
        assert!(!RadiusProfile::from_vec(vec![f64::INFINITY]).is_finite());
    }
}
