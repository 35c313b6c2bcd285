//! An [`Optional`] is a container of an optional value, meaning the value
//! may exist or be omitted.
//!
//! It's designed for optional fields in structs where the absence of a value
//! has to be explicit rather than encoded as a magic value.
pub use crate::error::{Error, Result};
pub use crate::interop::{from, from_func, from_map, Lookup};
pub use crate::optional::{none, some, Optional};

pub mod debug;
mod error;
mod interop;
mod optional;
#[cfg(feature = "serde")]
mod serialize;
