//! Synthetic record generation.

pub mod emitter;
pub mod faker;

pub use emitter::{EMITTER_LOGGER, Emitter, SENTENCE_WORDS, SyntheticRecord, TICK};
pub use faker::{FakeSource, LoremFaker};
