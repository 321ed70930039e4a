pub mod prep;
pub mod stop_words;

pub use prep::{is_number, string_prep, words};
pub use stop_words::{StopWords, StopWordsError};
