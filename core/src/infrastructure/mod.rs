pub mod llm;
pub mod nutrition;
pub mod weather;
