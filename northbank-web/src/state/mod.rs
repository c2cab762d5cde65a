pub mod paged;

pub use paged::{Paged, PagedItem, PagedMsg, RequestSeq};
