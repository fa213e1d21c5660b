pub mod catalog;
pub mod chat;
pub mod flashcards;
pub mod pomodoro;
pub mod quiz;
pub mod server;
pub mod stats;
