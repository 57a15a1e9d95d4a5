//! Deck and session logic. Keep this crate free of IO and platform concerns.

pub mod policy;
pub mod prompts;
pub mod rng;
pub mod session;

pub use policy::*;
pub use prompts::*;
pub use rng::*;
pub use session::*;
