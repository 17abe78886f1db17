pub mod event_ops;
pub mod user_ops;
