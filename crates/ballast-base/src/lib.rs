//! Fundamental value types used by all ballast code: the [`Maybe`] optional
//! algebra and the [`Outcome`] success/failure algebra. Everything in this
//! crate is pure data plus adapters over std futures; it must stay free of
//! runtime dependencies so it can be used anywhere, including from wasm.

pub mod maybe;
pub mod outcome;

pub use maybe::Maybe;
pub use outcome::Outcome;
