pub mod logging;
pub mod params;
