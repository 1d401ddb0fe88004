//! Embedded dictionary
//!
//! Word and clue rows compiled into the binary at build time.

use super::entry::RawEntry;

// Include generated rows from build script
include!(concat!(env!("OUT_DIR"), "/dictionary.rs"));
