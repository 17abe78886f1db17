pub mod ids;
pub mod user;
pub mod event;

// Re-exports for convenience
pub use ids::Id;
pub use user::User;
pub use event::Event;
