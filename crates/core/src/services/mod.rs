pub mod bar_group_service;
pub mod chart_service;
pub mod currency_service;
pub mod stack_service;
pub mod tooltip_service;
pub mod validation_service;
