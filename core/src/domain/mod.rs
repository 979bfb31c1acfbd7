pub mod common;
pub mod consultation;
pub mod diagnostic;
pub mod llm;
pub mod product_scan;
