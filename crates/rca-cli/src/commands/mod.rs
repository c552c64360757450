pub mod analysis;
pub mod ask;
pub mod chat;
pub mod dashboard;
pub mod dispatch;
pub mod incidents;
pub mod samples;
pub mod shared;
