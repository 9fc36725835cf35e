//! Pure data structures: the cart, the session and order entities, and the price catalog.

pub mod cart;
pub mod catalog;
pub mod order;
pub mod session;

pub use cart::*;
pub use catalog::*;
pub use order::*;
pub use session::*;
