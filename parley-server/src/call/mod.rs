mod call_manager;
mod call_session;

pub use call_manager::{CallDeparture, CallManager};
pub use call_session::CallSession;
