pub mod credentials;
pub mod id;
pub mod pagination;

pub use credentials::*;
pub use id::generate_id;
pub use pagination::{DEFAULT_PER_PAGE, PageIter, PageLink, PageWindow, Pager};
