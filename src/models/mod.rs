//! Data models for the flag service.

mod flag;

pub use flag::Flag;
