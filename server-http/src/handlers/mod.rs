pub mod health;
pub mod userdata;

pub use health::health_check;
pub use userdata::{get_userdata, not_found};
