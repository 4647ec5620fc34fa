mod detail;
mod summary;

pub use detail::*;
pub use summary::*;
