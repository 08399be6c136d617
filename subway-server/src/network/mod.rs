//! Station registry and line/section source.
//!
//! The path finder reads the network through the `NetworkSource` trait.
//! `InMemoryNetwork` is the read-only snapshot implementation, loaded from
//! a JSON file at startup or assembled with a builder in tests.

mod error;
mod memory;
mod snapshot;
mod source;

pub use error::NetworkError;
pub use memory::{InMemoryNetwork, InMemoryNetworkBuilder};
pub use snapshot::NetworkSnapshot;
pub use source::NetworkSource;
