mod codes;
mod error;
mod generator;
mod identifier;
mod key;
mod memory;
mod store;
mod year;

pub use crate::codes::*;
pub use crate::error::*;
pub use crate::generator::*;
pub use crate::identifier::*;
pub use crate::key::*;
pub use crate::memory::*;
pub use crate::store::*;
pub use crate::year::*;
