pub mod features;
pub mod signals;
pub mod verdict;

pub use features::*;
pub use signals::*;
pub use verdict::*;
