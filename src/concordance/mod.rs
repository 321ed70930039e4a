pub mod index;
pub mod output;

pub use index::{Concordance, ConcordanceError};
