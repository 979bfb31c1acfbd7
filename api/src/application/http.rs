pub mod consultation;
pub mod diagnostic;
pub mod health;
pub mod product_scan;
pub mod server;
