pub mod animation;
pub mod components;
pub mod error;
pub mod percentage;
pub mod styles;

#[cfg(feature = "demo")]
mod app;

pub use components::semi_circle_progress::{SemiCircleProgress, SemiCircleProgressProps};
pub use error::PropError;
pub use percentage::PercentageSource;

#[cfg(feature = "demo")]
use wasm_bindgen::prelude::*;

#[cfg(feature = "demo")]
#[wasm_bindgen(start)]
pub fn run_app() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    yew::Renderer::<app::App>::new().render();
}
