//! reumacal-storage
//!
//! Persistence of score records. `ScoreStore` is the contract the calling
//! layer saves and lists through; S3 and in-memory implementations.

pub mod client;
pub mod error;
pub mod memory;
pub mod objects;
pub mod s3;
pub mod store;

pub use error::StorageError;
pub use memory::MemoryScoreStore;
pub use s3::S3ScoreStore;
pub use store::ScoreStore;
