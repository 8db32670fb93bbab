pub mod settings_context;
pub mod traits;
