pub mod registry;
pub mod weather;

pub use registry::available_tools;
pub use weather::get_current_weather;
