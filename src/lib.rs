//! Motamot: French flashcards that turn ten clicked words into a funny
//! sentence, plus the offline jobs that draw the flashcard illustrations.

pub mod api;
pub mod config;
pub mod db;
pub mod generation;
pub mod illustrate;
pub mod images;
pub mod models;
pub mod play;
pub mod retry;
pub mod session;
pub mod settings;
pub mod vocabulary;
