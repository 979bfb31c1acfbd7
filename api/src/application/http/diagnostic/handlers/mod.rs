pub mod classify_answers;
pub mod delete_session;
pub mod get_questions;
pub mod get_result;
pub mod get_session;
pub mod go_back;
pub mod reset_session;
pub mod start_session;
pub mod submit_answer;
