pub mod history_record;
pub mod session_history;
