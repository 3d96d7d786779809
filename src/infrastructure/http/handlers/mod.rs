//! HTTP Handlers

mod arithmetic;
mod fallback;
mod ping;

pub use arithmetic::*;
pub use fallback::*;
pub use ping::*;
