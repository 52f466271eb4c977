pub mod analysis;
pub mod chat;
pub mod grocery;
pub mod health;
pub mod server;
