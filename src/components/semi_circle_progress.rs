use gloo::console::{debug, warn};
use gloo::timers::callback::Interval;
use yew::prelude::*;

use crate::animation::{rotation_degrees, Spring, SpringConfig, FRAME_INTERVAL_MS};
use crate::error::PropError;
use crate::percentage::PercentageSource;
use crate::styles::{Geometry, Palette, SemiCircleStyles};

pub const DEFAULT_PROGRESS_SHADOW_COLOR: &str = "silver";
pub const DEFAULT_PROGRESS_COLOR: &str = "steelblue";
pub const DEFAULT_INTERIOR_CIRCLE_COLOR: &str = "white";
pub const DEFAULT_CIRCLE_RADIUS: f64 = 100.0;
pub const DEFAULT_PROGRESS_WIDTH: f64 = 10.0;
pub const DEFAULT_ANIMATION_SPEED: f64 = 2.0;
pub const DEFAULT_INITIAL_PERCENTAGE: f64 = 0.0;

#[derive(Properties, PartialEq)]
pub struct SemiCircleProgressProps {
    #[prop_or(AttrValue::Static(DEFAULT_PROGRESS_SHADOW_COLOR))]
    pub progress_shadow_color: AttrValue,
    #[prop_or(AttrValue::Static(DEFAULT_PROGRESS_COLOR))]
    pub progress_color: AttrValue,
    #[prop_or(AttrValue::Static(DEFAULT_INTERIOR_CIRCLE_COLOR))]
    pub interior_circle_color: AttrValue,
    #[prop_or(DEFAULT_CIRCLE_RADIUS)]
    pub circle_radius: f64,
    #[prop_or(DEFAULT_PROGRESS_WIDTH)]
    pub progress_width: f64,
    /// Takes priority over the `current_value`/`min_value`/`max_value` triple.
    #[prop_or_default]
    pub percentage: Option<f64>,
    /// Extra CSS appended to the outer container.
    #[prop_or_default]
    pub exterior_circle_style: Option<AttrValue>,
    /// Extra CSS appended to the inner cutout.
    #[prop_or_default]
    pub interior_circle_style: Option<AttrValue>,
    #[prop_or(DEFAULT_ANIMATION_SPEED)]
    pub animation_speed: f64,
    #[prop_or(DEFAULT_INITIAL_PERCENTAGE)]
    pub initial_percentage: f64,
    #[prop_or_default]
    pub min_value: Option<f64>,
    #[prop_or_default]
    pub max_value: Option<f64>,
    #[prop_or_default]
    pub current_value: Option<f64>,
    #[prop_or_default]
    pub children: Children,
}

impl SemiCircleProgressProps {
    pub fn percentage_source(&self) -> PercentageSource {
        PercentageSource::from_props(
            self.percentage,
            self.current_value,
            self.min_value,
            self.max_value,
        )
    }

    pub fn geometry(&self) -> Geometry {
        Geometry {
            circle_radius: self.circle_radius,
            progress_width: self.progress_width,
        }
    }

    pub fn palette(&self) -> Palette<'_> {
        Palette {
            progress_shadow_color: self.progress_shadow_color.as_str(),
            progress_color: self.progress_color.as_str(),
            interior_circle_color: self.interior_circle_color.as_str(),
        }
    }

    /// Falls back to the default speed when the configured one is unusable.
    pub fn spring_config(&self) -> SpringConfig {
        if self.animation_speed.is_finite() && self.animation_speed > 0.0 {
            SpringConfig::from_speed(self.animation_speed)
        } else {
            SpringConfig::from_speed(DEFAULT_ANIMATION_SPEED)
        }
    }

    /// Every problem with the current props, in declaration order.
    pub fn validate(&self) -> Vec<PropError> {
        let mut problems = Vec::new();
        if let Err(err) = self.geometry().validate() {
            problems.push(err);
        }
        if let Err(err) = self.percentage_source().resolve() {
            problems.push(err);
        }
        if !self.animation_speed.is_finite() {
            problems.push(PropError::NotFinite { prop: "animation_speed" });
        } else if self.animation_speed <= 0.0 {
            problems.push(PropError::NonPositive {
                prop: "animation_speed",
                value: self.animation_speed,
            });
        }
        if !self.initial_percentage.is_finite() {
            problems.push(PropError::NotFinite { prop: "initial_percentage" });
        }
        problems
    }
}

pub enum Msg {
    Frame,
}

/// A half-disc whose filled arc sweeps from 0° to 180° as the percentage goes
/// from 0 to 100, easing between values with a spring.
pub struct SemiCircleProgress {
    rotation: Spring,
    ticker: Option<Interval>,
    last_frame_ms: f64,
}

impl Component for SemiCircleProgress {
    type Message = Msg;
    type Properties = SemiCircleProgressProps;

    fn create(ctx: &Context<Self>) -> Self {
        let props = ctx.props();
        report_problems(props);

        let initial = if props.initial_percentage.is_finite() {
            props.initial_percentage
        } else {
            DEFAULT_INITIAL_PERCENTAGE
        };

        Self {
            rotation: Spring::new(initial, props.spring_config()),
            ticker: None,
            last_frame_ms: 0.0,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Frame => {
                let now = js_sys::Date::now();
                let dt = (now - self.last_frame_ms) / 1000.0;
                self.last_frame_ms = now;

                if !self.rotation.step(dt) {
                    self.ticker = None;
                    if cfg!(debug_assertions) {
                        debug!(format!("semi-circle progress settled at {}", self.rotation.value()));
                    }
                }
                true
            }
        }
    }

    fn changed(&mut self, ctx: &Context<Self>, _old_props: &Self::Properties) -> bool {
        report_problems(ctx.props());
        self.animate(ctx);
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let styles = SemiCircleStyles::compute(
            &props.geometry(),
            &props.palette(),
            rotation_degrees(self.rotation.value()),
        );
        let exterior_css = styles
            .exterior_circle
            .to_css(props.exterior_circle_style.as_ref().map(AttrValue::as_str));
        let interior_css = styles
            .interior_circle
            .to_css(props.interior_circle_style.as_ref().map(AttrValue::as_str));

        html! {
            <div
                class="semi-circle-progress"
                style={exterior_css}
            >
                <div
                    class="semi-circle-progress__rotating-wrap"
                    style={styles.rotating_circle_wrap.to_string()}
                >
                    <div
                        class="semi-circle-progress__rotating-circle"
                        style={styles.rotating_circle.to_string()}
                    />
                </div>
                <div
                    class="semi-circle-progress__interior"
                    style={interior_css}
                >
                    { for props.children.iter() }
                </div>
            </div>
        }
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render {
            self.animate(ctx);
        }
    }
}

impl SemiCircleProgress {
    /// Points the rotation at the freshly resolved percentage and makes sure a
    /// ticker is running while the spring is off target.
    fn animate(&mut self, ctx: &Context<Self>) {
        let props = ctx.props();
        let target = props.percentage_source().resolve_or_zero();
        self.rotation.retarget(target, props.spring_config());

        if self.rotation.is_at_rest() || self.ticker.is_some() {
            return;
        }

        if cfg!(debug_assertions) {
            debug!(format!(
                "semi-circle progress animating {} -> {}",
                self.rotation.value(),
                target
            ));
        }

        self.last_frame_ms = js_sys::Date::now();
        let link = ctx.link().clone();
        self.ticker = Some(Interval::new(FRAME_INTERVAL_MS, move || {
            link.send_message(Msg::Frame)
        }));
    }
}

fn report_problems(props: &SemiCircleProgressProps) {
    for problem in props.validate() {
        warn!(format!("SemiCircleProgress: {}", problem));
    }
}
