//! Authentication

mod errors;
mod password;
mod token;

pub use errors::*;
pub use password::*;
pub use token::*;
