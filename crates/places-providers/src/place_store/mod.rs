//! Place Store Provider Implementations
//!
//! | Provider | Type | Description |
//! |----------|------|-------------|
//! | InMemoryPlaceStore | Local | Copy-on-write in-memory storage (non-persistent) |

pub mod in_memory;

pub use in_memory::InMemoryPlaceStore;
