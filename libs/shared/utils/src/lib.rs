pub mod html;
pub mod page;
pub mod test_utils;

pub use page::{ids, Page};
