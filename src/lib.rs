pub use optional_core as core;
pub use optional_core::{
    debug, from, from_func, from_map, none, some, Error, Lookup, Optional, Result,
};

pub mod prelude {
    pub use crate::{from, from_func, from_map, none, some, Optional};
}
