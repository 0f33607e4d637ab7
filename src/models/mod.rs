//! Domain models for Motamot.
//!
//! # Core Concepts
//!
//! - [`VocabularyEntry`]: A French word with its grammatical category, gender
//!   (nouns only) and an optional illustration stored in the image bucket.
//! - [`SessionView`]: Snapshot of one click session as served to a front end.
//!   The state machine itself lives in [`crate::session`].
//! - [`IllustrationJob`]: One image to produce with the offline generator.
//!
//! Only the credential is persisted; everything else is rebuilt per process.

mod illustration;
mod session;
mod settings;
mod word;

pub use illustration::*;
pub use session::*;
pub use settings::*;
pub use word::*;
