//! Word and clue dictionary
//!
//! Provides the embedded dictionary compiled into the binary, file loaders, and the
//! read-only index the generator searches.

mod embedded;
mod entry;
mod index;
pub mod loader;

pub use embedded::{EMBEDDED, EMBEDDED_COUNT};
pub use entry::{DictionaryEntry, EntryError, MAX_WORD_LEN, MIN_WORD_LEN, RawEntry, parse_flag};
pub use index::{DictionaryIndex, EntryId};
pub use loader::{
    DictionarySource, LoadReport, embedded_index, load, load_from_file, load_with_report,
};
