//! Domain types transferred to and from the registry.

mod bucket;
mod fields;
mod sort;

pub use bucket::Bucket;
pub use fields::Fields;
pub use sort::{SortOrder, SortParameter};
