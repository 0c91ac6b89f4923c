//! The product listing pipeline: filter, sort, paginate, and the query-string
//! codec that makes every listing view deep-linkable. Everything in here is a
//! pure transformation over an in-memory product snapshot; the only side
//! effect (URL synchronization) sits behind the `QuerySync` trait in
//! `controller`.

pub mod controller;
pub mod filter;
pub mod page;
pub mod query;
pub mod sort;

pub use controller::{ListingController, ListingView, QuerySync};
pub use filter::{FilterState, FilterUpdate};
pub use page::PaginationState;
pub use query::ListingQuery;
pub use sort::{SortDirection, SortField, SortState};
