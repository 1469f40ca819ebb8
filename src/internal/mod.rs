// Internal shared pieces: the unified error type.

pub mod error;
