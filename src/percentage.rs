use crate::error::{ensure_finite, PropError};

pub const MIN_PERCENTAGE: f64 = 0.0;
pub const MAX_PERCENTAGE: f64 = 100.0;

/// Where the displayed percentage comes from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PercentageSource {
    Direct(f64),
    Range { current: f64, min: f64, max: f64 },
    Unset,
}

impl PercentageSource {
    /// An explicit `percentage` wins. The range is only used when all three
    /// values are present. Zero counts as present.
    pub fn from_props(
        percentage: Option<f64>,
        current_value: Option<f64>,
        min_value: Option<f64>,
        max_value: Option<f64>,
    ) -> Self {
        match (percentage, current_value, min_value, max_value) {
            (Some(p), _, _, _) => PercentageSource::Direct(p),
            (None, Some(current), Some(min), Some(max)) => {
                PercentageSource::Range { current, min, max }
            }
            _ => PercentageSource::Unset,
        }
    }

    pub fn resolve(&self) -> Result<f64, PropError> {
        match *self {
            PercentageSource::Direct(p) => {
                if p.is_nan() {
                    return Err(PropError::NotFinite { prop: "percentage" });
                }
                Ok(clamp_percentage(p))
            }
            PercentageSource::Range { current, min, max } => {
                let current = ensure_finite("current_value", current)?;
                let min = ensure_finite("min_value", min)?;
                let max = ensure_finite("max_value", max)?;
                if max == min {
                    return Err(PropError::DegenerateRange { min, max });
                }
                Ok(clamp_percentage((current - min) / (max - min) * MAX_PERCENTAGE))
            }
            PercentageSource::Unset => Ok(MIN_PERCENTAGE),
        }
    }

    pub fn resolve_or_zero(&self) -> f64 {
        self.resolve().unwrap_or(MIN_PERCENTAGE)
    }
}

pub fn clamp_percentage(p: f64) -> f64 {
    p.min(MAX_PERCENTAGE).max(MIN_PERCENTAGE)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolve(
        percentage: Option<f64>,
        current: Option<f64>,
        min: Option<f64>,
        max: Option<f64>,
    ) -> Result<f64, PropError> {
        PercentageSource::from_props(percentage, current, min, max).resolve()
    }

    #[test]
    fn direct_percentage_is_clamped() {
        for (input, expected) in [(-20.0, 0.0), (0.0, 0.0), (42.5, 42.5), (100.0, 100.0), (250.0, 100.0)] {
            assert_eq!(resolve(Some(input), None, None, None), Ok(expected));
        }
        assert_eq!(resolve(Some(f64::INFINITY), None, None, None), Ok(100.0));
    }

    #[test]
    fn range_is_normalized_then_clamped() {
        assert_eq!(resolve(None, Some(30.0), Some(0.0), Some(100.0)), Ok(30.0));
        assert_eq!(resolve(None, Some(150.0), Some(0.0), Some(100.0)), Ok(100.0));
        assert_eq!(resolve(None, Some(-5.0), Some(0.0), Some(100.0)), Ok(0.0));
        assert_eq!(resolve(None, Some(15.0), Some(10.0), Some(20.0)), Ok(50.0));
    }

    #[test]
    fn nothing_supplied_resolves_to_zero() {
        assert_eq!(resolve(None, None, None, None), Ok(0.0));
        assert_eq!(resolve(None, Some(30.0), None, Some(100.0)), Ok(0.0));
    }

    #[test]
    fn percentage_takes_precedence_over_range() {
        assert_eq!(resolve(Some(75.0), Some(10.0), Some(0.0), Some(100.0)), Ok(75.0));
    }

    #[test]
    fn zero_is_a_present_value() {
        assert_eq!(
            PercentageSource::from_props(Some(0.0), Some(80.0), Some(0.0), Some(100.0)),
            PercentageSource::Direct(0.0)
        );
        assert_eq!(resolve(None, Some(0.0), Some(0.0), Some(50.0)), Ok(0.0));
        assert_eq!(resolve(None, Some(-2.5), Some(-10.0), Some(0.0)), Ok(75.0));
    }

    #[test]
    fn empty_range_is_reported_and_renders_zero() {
        let source = PercentageSource::from_props(None, Some(5.0), Some(5.0), Some(5.0));
        assert_eq!(source.resolve(), Err(PropError::DegenerateRange { min: 5.0, max: 5.0 }));
        assert_eq!(source.resolve_or_zero(), 0.0);
    }

    #[test]
    fn nan_inputs_are_rejected() {
        assert_eq!(
            resolve(Some(f64::NAN), None, None, None),
            Err(PropError::NotFinite { prop: "percentage" })
        );
        assert_eq!(
            resolve(None, Some(1.0), Some(f64::NAN), Some(2.0)),
            Err(PropError::NotFinite { prop: "min_value" })
        );
    }
}
