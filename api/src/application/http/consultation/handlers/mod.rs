pub mod get_welcome;
pub mod send_message;
