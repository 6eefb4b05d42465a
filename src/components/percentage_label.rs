use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct PercentageLabelProps {
    pub value: f64,
    #[prop_or_default]
    pub caption: Option<AttrValue>,
}

/// Readout shown inside the interior circle of the demo gauges.
#[function_component(PercentageLabel)]
pub fn percentage_label(props: &PercentageLabelProps) -> Html {
    html! {
        <div class="percentage-label">
            <div class="percentage-label__value">{ format!("{:.0}%", props.value) }</div>
            {
                if let Some(caption) = &props.caption {
                    html! { <div class="percentage-label__caption">{ caption.to_string() }</div> }
                } else {
                    html! {}
                }
            }
        </div>
    }
}
