//! # shield-redis
//!
//! Counting store on a Redis server. Every mutation runs as a single Lua
//! script, so Redis executes it atomically and no other client can observe
//! a half-applied batch. Reads that need more than one key go through a
//! `MULTI`/`EXEC` pipeline.

pub mod errors;
pub mod keys;
pub mod pool;
pub mod scripts;
pub mod store;

pub use keys::KeySpace;
pub use pool::RedisPool;
pub use store::RedisStore;
