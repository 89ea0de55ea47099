// Adapters layer: conversions from domain records to the plugin-facing shapes.

pub mod instance_settings;
pub mod user;
