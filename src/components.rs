#[cfg(feature = "demo")]
pub mod percentage_label;
pub mod semi_circle_progress;
