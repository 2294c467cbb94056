pub mod combinatorics;
pub mod double_color;
pub mod enumerate;
pub mod i18n;
pub mod market;
pub mod order;
pub mod picker;
pub mod sampler;
pub mod ticket_id;

pub mod prelude {
    pub use crate::combinatorics::*;
    pub use crate::double_color::*;
    pub use crate::enumerate::*;
    pub use crate::i18n::*;
    pub use crate::market::*;
    pub use crate::order::*;
    pub use crate::picker::*;
    pub use crate::sampler::*;
    pub use crate::ticket_id::*;
}
