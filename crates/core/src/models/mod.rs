pub mod bar_chart;
pub mod chart;
pub mod interval;
pub mod line_chart;
pub mod settings;
pub mod tooltip;
