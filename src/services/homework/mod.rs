pub mod checker;
pub mod errors;
pub mod poller;
pub mod status;
