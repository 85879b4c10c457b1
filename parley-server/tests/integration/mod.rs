pub mod message_tests;

use std::sync::Arc;

use parley_server::Relay;
use tracing::Level;

use crate::utils::MockEventSink;

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(Level::DEBUG)
        .with_test_writer()
        .try_init();
}

pub fn create_test_relay() -> (Arc<Relay>, MockEventSink) {
    let sink = MockEventSink::new_stored_only();
    let relay = Arc::new(Relay::new(Arc::new(sink.clone())));
    (relay, sink)
}
