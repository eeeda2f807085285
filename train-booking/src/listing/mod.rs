//! Train listings: filtering and stable ordering for presentation.

mod catalogue;
mod merge_sort;
mod rank;

pub use catalogue::{CatalogueError, parse_listing, sample_catalogue};
pub use merge_sort::{stable_sort_by, stable_sort_by_key};
pub use rank::{sort_by_departure, trains_between};
