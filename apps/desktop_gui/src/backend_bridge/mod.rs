//! Async side of the desktop GUI: the runtime rating submissions run on.

pub mod runtime;
