//! Sweep axis construction
//!
//! All three sweep axes (flux ratio, growth time, axial position) are
//! half-open fixed-step ranges: ascending, inclusive of the lower bound,
//! exclusive of the upper bound. Bounds come from configuration
//! constants, so construction has no error conditions; a degenerate range
//! simply yields an empty axis.

/// Half-open fixed-step numeric axis `[min, max)`
///
/// # Construction rules
///
/// - `len = ceil((max − min) / step)`
/// - `values[i] = min + i·step` — computed directly from the index, never
///   by repeated addition, so rounding error does not accumulate along
///   the axis
/// - last element strictly below `max`
///
/// # Example
///
/// ```rust
/// use taper_rs::solver::Axis;
///
/// let axis = Axis::new(10.0, 120.0, 1.0);
/// assert_eq!(axis.len(), 110);
/// assert_eq!(axis.values()[0], 10.0);
/// assert_eq!(*axis.values().last().unwrap(), 119.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Axis {
    values: Vec<f64>,
    step: f64,
}

impl Axis {
    /// Build the axis from bounds and step
    ///
    /// `step` must be positive (configuration validation enforces this
    /// before any axis is built); `max <= min` yields an empty axis.
    pub fn new(min: f64, max: f64, step: f64) -> Self {
        assert!(step > 0.0, "axis step must be positive");

        let span = max - min;
        let mut count = if span > 0.0 {
            (span / step).ceil() as usize
        } else {
            0
        };

        // Float division can round (max−min)/step up past the true count;
        // the upper bound stays exclusive.
        while count > 0 && min + (count as f64 - 1.0) * step >= max {
            count -= 1;
        }

        let values = (0..count).map(|i| min + i as f64 * step).collect();
        Self { values, step }
    }

    /// Number of grid points
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// True when the axis holds no points
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Step between consecutive grid points
    pub fn step(&self) -> f64 {
        self.step
    }

    /// Grid point values, ascending
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Value at `index`, if in bounds
    pub fn get(&self, index: usize) -> Option<f64> {
        self.values.get(index).copied()
    }
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_construction() {
        let axis = Axis::new(0.0, 1.0, 0.25);
        assert_eq!(axis.values(), &[0.0, 0.25, 0.5, 0.75]);
    }

    #[test]
    fn test_length_is_ceil_of_span_over_step() {
        // Span not an exact multiple of the step.
        let axis = Axis::new(0.0, 1.0, 0.3);
        assert_eq!(axis.len(), 4); // 0.0, 0.3, 0.6, 0.9
        assert!(*axis.values().last().unwrap() < 1.0);
    }

    #[test]
    fn test_upper_bound_exclusive() {
        let axis = Axis::new(10.0, 120.0, 1.0);
        assert_eq!(axis.len(), 110);
        assert_eq!(axis.values()[0], 10.0);
        assert!(*axis.values().last().unwrap() < 120.0);
    }

    #[test]
    fn test_consecutive_differences_equal_step() {
        let axis = Axis::new(1.4, 30.0, 0.2);
        assert_eq!(axis.len(), 143);

        for window in axis.values().windows(2) {
            assert!((window[1] - window[0] - 0.2).abs() < 1e-12);
        }
    }

    #[test]
    fn test_no_accumulated_rounding() {
        let axis = Axis::new(1.4, 30.0, 0.2);
        // Direct-from-index: element 100 is exactly min + 100*step.
        assert_eq!(axis.values()[100], 1.4 + 100.0 * 0.2);
    }

    #[test]
    fn test_empty_for_degenerate_bounds() {
        assert!(Axis::new(5.0, 5.0, 1.0).is_empty());
        assert!(Axis::new(5.0, 4.0, 1.0).is_empty());
    }

    #[test]
    #[should_panic(expected = "axis step must be positive")]
    fn test_zero_step_panics() {
        Axis::new(0.0, 1.0, 0.0);
    }

    #[test]
    fn test_get() {
        let axis = Axis::new(380.0, 760.0, 20.0);
        assert_eq!(axis.get(0), Some(380.0));
        assert_eq!(axis.get(18), Some(740.0));
        assert_eq!(axis.get(19), None);
    }
}
