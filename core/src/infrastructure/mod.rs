pub mod diagnostic;
pub mod llm;
