pub mod hashing;
pub mod probing;

pub use hashing::{horner_hash, ProbeSequence, HASHED_PREFIX_LEN};
pub use probing::{Entry, ProbingHashTable, TableError, MAX_LOAD_FACTOR};
