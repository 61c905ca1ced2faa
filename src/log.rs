//! Conditional logging macros.
//!
//! With the `tracing` feature these are the `tracing` macros; without it
//! they expand to nothing, so call sites never need their own `cfg`.

#[cfg(feature = "tracing")]
pub use tracing::{debug, info, trace};

#[cfg(not(feature = "tracing"))]
#[macro_export]
macro_rules! debug {
    ($($arg:tt)*) => {};
}

#[cfg(not(feature = "tracing"))]
#[macro_export]
macro_rules! info {
    ($($arg:tt)*) => {};
}

#[cfg(not(feature = "tracing"))]
#[macro_export]
macro_rules! trace {
    ($($arg:tt)*) => {};
}

#[cfg(not(feature = "tracing"))]
pub use crate::{debug, info, trace};
