//! Resource domains.

pub mod comments;
pub mod products;
pub mod reviews;
pub mod users;
