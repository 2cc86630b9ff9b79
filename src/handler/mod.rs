pub mod message;
pub mod scheduled;

pub use message::MessageTimer;
pub use scheduled::ScheduledTask;
