//! Embedded word-family records
//!
//! Raw records compiled into the binary at build time from `data/`.

// Include generated record lists from build script
include!(concat!(env!("OUT_DIR"), "/level1.rs"));
include!(concat!(env!("OUT_DIR"), "/level2.rs"));
include!(concat!(env!("OUT_DIR"), "/level3.rs"));
