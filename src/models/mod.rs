pub mod category;
pub mod event;
pub mod raw_event;
pub mod run_id;
pub mod travel;
