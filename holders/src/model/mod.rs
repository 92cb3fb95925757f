pub mod holder;
pub mod layout;

pub use holder::*;
pub use layout::*;
