//! Embedded word list
//!
//! Word list compiled into the binary at build time.

include!(concat!(env!("OUT_DIR"), "/embedded.rs"));
