pub mod get_health;
pub mod get_home;

pub use get_health::*;
pub use get_home::*;
