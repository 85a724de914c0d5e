mod r#impl;
mod structs;

pub use r#impl::{get_config, init_config, override_api_base_url};
pub use structs::*;
