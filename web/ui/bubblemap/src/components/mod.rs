pub mod advisory;
pub mod bubble;
pub mod buttons;
pub mod legend;
pub mod loading;
pub mod stats;
pub mod tooltip;
