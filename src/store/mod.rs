//! Session-scoped state containers. Nothing in here outlives the process:
//! carts, wishlists, users, and orders are per-user in-memory state owned by
//! this service, mutated only through the named operations on each store.

pub mod cart;
pub mod orders;
pub mod users;
pub mod wishlist;

pub use cart::{Cart, CartEntry, CartStore, CartTotals};
pub use orders::OrderStore;
pub use users::UserStore;
pub use wishlist::{WishlistEntry, WishlistStore};
