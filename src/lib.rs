//! Quadratic-probing string hash table and a line-number concordance built
//! on top of it.
//!
//! [`table::ProbingHashTable`] is an open-addressing map from strings to any
//! value type. It hashes with Horner's rule over the first eight characters,
//! resolves collisions with quadratic probing and rebuilds itself at
//! `2 * capacity + 1` slots whenever an insertion pushes the load factor past
//! 0.5.
//!
//! [`concordance::Concordance`] uses two such tables, a stop-word set and a
//! word → line numbers index, to produce a sorted concordance report.

pub mod concordance;
pub mod table;
pub mod text;
pub mod types;
