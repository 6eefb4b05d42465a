use std::fmt;

use crate::error::{ensure_finite, PropError};

/// Radii of the ring. Rebuilt from props on every render.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Geometry {
    pub circle_radius: f64,
    pub progress_width: f64,
}

impl Geometry {
    pub fn interior_radius(&self) -> f64 {
        self.circle_radius - self.progress_width
    }

    /// Rendering still happens when this fails; the ring just looks wrong.
    pub fn validate(&self) -> Result<(), PropError> {
        let circle_radius = ensure_finite("circle_radius", self.circle_radius)?;
        let progress_width = ensure_finite("progress_width", self.progress_width)?;
        if circle_radius <= 0.0 {
            return Err(PropError::NonPositive { prop: "circle_radius", value: circle_radius });
        }
        if progress_width >= circle_radius {
            return Err(PropError::DegenerateInterior { circle_radius, progress_width });
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette<'a> {
    pub progress_shadow_color: &'a str,
    pub progress_color: &'a str,
    pub interior_circle_color: &'a str,
}

/// An ordered list of CSS declarations.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Style {
    declarations: Vec<(&'static str, String)>,
}

impl Style {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, property: &'static str, value: impl fmt::Display) -> Self {
        self.declarations.push((property, value.to_string()));
        self
    }

    pub fn get(&self, property: &str) -> Option<&str> {
        self.declarations
            .iter()
            .rev()
            .find(|(name, _)| *name == property)
            .map(|(_, value)| value.as_str())
    }

    /// Renders the inline style, appending caller CSS last so it overrides
    /// anything computed here.
    pub fn to_css(&self, extra: Option<&str>) -> String {
        let mut css = self.to_string();
        if let Some(extra) = extra.map(str::trim).filter(|extra| !extra.is_empty()) {
            if !css.is_empty() {
                css.push(' ');
            }
            css.push_str(extra);
        }
        css
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (property, value)) in self.declarations.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}: {};", property, value)?;
        }
        Ok(())
    }
}

fn px(value: f64) -> String {
    format!("{}px", value)
}

/// Inline styles for the four nested boxes that make up the widget.
///
/// The exterior box is the top half of a disc painted in the track color. Below
/// it (outside the clip) sits a wrapper holding a bottom half-disc in the
/// progress color; rotating that half-disc about the shared center sweeps it up
/// into view. The interior half-disc is drawn last and hides the middle.
#[derive(Debug, Clone, PartialEq)]
pub struct SemiCircleStyles {
    pub exterior_circle: Style,
    pub rotating_circle_wrap: Style,
    pub rotating_circle: Style,
    pub interior_circle: Style,
}

impl SemiCircleStyles {
    pub fn compute(geometry: &Geometry, palette: &Palette<'_>, rotation_deg: f64) -> Self {
        let r = geometry.circle_radius;
        let ir = geometry.interior_radius();

        let exterior_circle = Style::new()
            .with("position", "relative")
            .with("display", "flex")
            .with("flex-direction", "column")
            .with("align-items", "center")
            .with("overflow", "hidden")
            .with("width", px(r * 2.0))
            .with("height", px(r))
            .with("border-radius", format!("{} {} 0 0", px(r), px(r)))
            .with("background-color", palette.progress_shadow_color);

        let rotating_circle_wrap = Style::new()
            .with("position", "absolute")
            .with("left", px(0.0))
            .with("top", px(r))
            .with("width", px(r * 2.0))
            .with("height", px(r));

        let rotating_circle = Style::new()
            .with("position", "absolute")
            .with("top", px(0.0))
            .with("left", px(0.0))
            .with("width", px(r * 2.0))
            .with("height", px(r))
            .with("border-radius", format!("0 0 {} {}", px(r), px(r)))
            .with("background-color", palette.progress_color)
            .with(
                "transform",
                format!(
                    "translateY({}) rotate({}deg) translateY({})",
                    px(-r / 2.0),
                    rotation_deg,
                    px(r / 2.0)
                ),
            );

        let interior_circle = Style::new()
            .with("position", "relative")
            .with("top", px(geometry.progress_width))
            .with("display", "flex")
            .with("flex-direction", "column")
            .with("justify-content", "flex-end")
            .with("align-items", "center")
            .with("overflow", "hidden")
            .with("width", px(ir * 2.0))
            .with("height", px(ir))
            .with("border-radius", format!("{} {} 0 0", px(ir), px(ir)))
            .with("background-color", palette.interior_circle_color);

        Self {
            exterior_circle,
            rotating_circle_wrap,
            rotating_circle,
            interior_circle,
        }
    }
}
