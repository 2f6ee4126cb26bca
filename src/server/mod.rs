//! TCP listener and accept loop

pub mod listener;

pub use listener::{Listener, run};
