use crate::components::{
    percentage_label::PercentageLabel,
    semi_circle_progress::SemiCircleProgress,
};
use crate::percentage::{clamp_percentage, PercentageSource};
use gloo::console::log;
use yew::prelude::*;

const STEP: f64 = 10.0;
const RANGE_MIN: f64 = 0.0;
const RANGE_MAX: f64 = 250.0;

pub struct App {
    percentage: f64,
    current_value: f64,
}

pub enum Msg {
    StepPercentage(f64),
    SetPercentage(f64),
    SetCurrentValue(f64),
}

impl Component for App {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        log!("SemiCircleProgress demo mounted");

        Self {
            percentage: 75.0,
            current_value: 30.0,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::StepPercentage(delta) => {
                self.percentage = clamp_percentage(self.percentage + delta);
                true
            }
            Msg::SetPercentage(value) => {
                self.percentage = clamp_percentage(value);
                true
            }
            Msg::SetCurrentValue(value) => {
                self.current_value = value;
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let range_percentage = PercentageSource::Range {
            current: self.current_value,
            min: RANGE_MIN,
            max: RANGE_MAX,
        }
        .resolve_or_zero();

        html! {
            <div class="app-container">
                <header>
                    <h1>{ "Semi-circle progress" }</h1>
                </header>

                <main>
                    <div class="panel">
                        <h2>{ "Percentage" }</h2>
                        <SemiCircleProgress percentage={self.percentage}>
                            <PercentageLabel value={self.percentage} />
                        </SemiCircleProgress>

                        <div class="button-container">
                            <button onclick={ctx.link().callback(|_| Msg::StepPercentage(-STEP))}>
                                { "-10" }
                            </button>
                            <button onclick={ctx.link().callback(|_| Msg::StepPercentage(STEP))}>
                                { "+10" }
                            </button>
                        </div>

                        <input
                            type="range"
                            min="0"
                            max="100"
                            value={self.percentage.to_string()}
                            oninput={ctx.link().callback(|e: InputEvent| {
                                let target: web_sys::HtmlInputElement = e.target_unchecked_into();
                                Msg::SetPercentage(target.value_as_number())
                            })}
                        />
                    </div>

                    <div class="panel">
                        <h2>{ "Value in range" }</h2>
                        <SemiCircleProgress
                            current_value={self.current_value}
                            min_value={RANGE_MIN}
                            max_value={RANGE_MAX}
                            circle_radius={80.0}
                            progress_width={16.0}
                            progress_color="darkorange"
                            interior_circle_color="whitesmoke"
                            animation_speed={6.0}
                            exterior_circle_style="margin: 0 auto;"
                        >
                            <PercentageLabel
                                value={range_percentage}
                                caption={format!("{} / {}", self.current_value, RANGE_MAX)}
                            />
                        </SemiCircleProgress>

                        <input
                            type="range"
                            min={RANGE_MIN.to_string()}
                            max={RANGE_MAX.to_string()}
                            value={self.current_value.to_string()}
                            oninput={ctx.link().callback(|e: InputEvent| {
                                let target: web_sys::HtmlInputElement = e.target_unchecked_into();
                                Msg::SetCurrentValue(target.value_as_number())
                            })}
                        />
                    </div>
                </main>
            </div>
        }
    }
}
