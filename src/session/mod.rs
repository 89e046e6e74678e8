pub mod flow;
pub mod scheduler;
pub mod state;

pub use flow::{submit_chat, submit_mood};
pub use scheduler::ReplyScheduler;
pub use state::{PendingReply, Session};
