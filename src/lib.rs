//! Sliding, tumbling and hopping windows over slices and pull-based sources.

pub mod buffer;
pub mod cursor;
pub mod eager;
pub mod engine;
pub mod error;
pub mod lazy;
pub mod pull;
pub mod source;
pub mod window_spec;

#[cfg(test)]
mod testing;


pub use eager::EagerWindows;
pub use engine::{WindowEngine, Windowed, WindowedIter};
pub use error::WindowError;
pub use lazy::{LazyWindows, WindowState};
pub use pull::Pull;
pub use source::{FallibleSource, IterSource, Source};
pub use window_spec::{ConfigError, WindowKind, WindowSpec};
