pub mod classifier;
pub mod engine;
pub mod entities;
pub mod ports;
pub mod questions;
pub mod services;
pub mod value_objects;

pub use classifier::classify;
pub use engine::DiagnosticEngine;
pub use entities::*;
pub use ports::*;
pub use value_objects::*;
