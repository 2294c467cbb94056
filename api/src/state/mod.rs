mod batch;
mod game;
mod mode;
mod pool;
mod selection;

pub use batch::*;
pub use game::*;
pub use mode::*;
pub use pool::*;
pub use selection::*;
