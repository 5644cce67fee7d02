pub mod config;
mod format;
mod source;
mod words;

pub use format::*;
pub use source::*;
pub use words::*;
