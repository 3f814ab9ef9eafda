// Adapters layer: concrete console sinks and chart displays.

pub mod console;
pub mod display;
