use std::fmt;

/// A prop combination the widget cannot render faithfully.
///
/// None of these stop rendering. The component falls back to a safe value and
/// reports the problem on the console, the same way prop-type warnings show up
/// during development.
#[derive(Debug, Clone, PartialEq)]
pub enum PropError {
    NotFinite { prop: &'static str },
    DegenerateRange { min: f64, max: f64 },
    DegenerateInterior { circle_radius: f64, progress_width: f64 },
    NonPositive { prop: &'static str, value: f64 },
}

impl fmt::Display for PropError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropError::NotFinite { prop } => write!(f, "`{}` must be a finite number", prop),
            PropError::DegenerateRange { min, max } => write!(
                f,
                "`min_value` ({}) and `max_value` ({}) describe an empty range",
                min, max
            ),
            PropError::DegenerateInterior { circle_radius, progress_width } => write!(
                f,
                "`progress_width` ({}) must be smaller than `circle_radius` ({})",
                progress_width, circle_radius
            ),
            PropError::NonPositive { prop, value } => {
                write!(f, "`{}` must be greater than zero, got {}", prop, value)
            }
        }
    }
}

impl std::error::Error for PropError {}

pub(crate) fn ensure_finite(prop: &'static str, value: f64) -> Result<f64, PropError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(PropError::NotFinite { prop })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_prop() {
        let err = PropError::NonPositive { prop: "animation_speed", value: -1.0 };
        assert_eq!(err.to_string(), "`animation_speed` must be greater than zero, got -1");

        let err = PropError::DegenerateInterior { circle_radius: 10.0, progress_width: 12.0 };
        assert!(err.to_string().contains("`progress_width` (12)"));
    }

    #[test]
    fn ensure_finite_rejects_nan_and_infinity() {
        assert_eq!(ensure_finite("percentage", 4.5), Ok(4.5));
        assert_eq!(
            ensure_finite("percentage", f64::NAN),
            Err(PropError::NotFinite { prop: "percentage" })
        );
        assert!(ensure_finite("min_value", f64::NEG_INFINITY).is_err());
    }
}
