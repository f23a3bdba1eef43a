pub mod common;
pub mod crud;
pub mod pagination;
pub mod user;

pub use common::*;
pub use crud::{CrudExt, FindById};
pub use pagination::*;
pub use user::*;
