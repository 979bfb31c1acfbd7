pub mod diagnostic_result;
pub mod diagnostic_session;
pub mod errors;
pub mod hair_profile;
pub mod question;

pub use diagnostic_result::*;
pub use diagnostic_session::*;
pub use hair_profile::*;
pub use question::*;
