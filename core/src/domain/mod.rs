pub mod chat;
pub mod common;
pub mod grocery;
pub mod nutrition;
pub mod weather;
