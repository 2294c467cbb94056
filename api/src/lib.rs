pub mod bindings;
pub mod catalog;
pub mod consts;
pub mod error;
pub mod state;

pub mod prelude {
    pub use crate::catalog::*;
    pub use crate::consts::*;
    pub use crate::error::*;
    pub use crate::state::*;
}
