pub mod user;

pub use user::user_config;
