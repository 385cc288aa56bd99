pub mod check;
pub mod health;
pub mod upload;

pub use check::{check_name, check_name_with_type};
pub use health::health_check;
pub use upload::upload_domain_list;
