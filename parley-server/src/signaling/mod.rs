mod event_sink;
mod signaling_service;
mod ws_handler;

pub use event_sink::EventSink;
pub use signaling_service::SignalingService;
pub use ws_handler::ws_handler;
