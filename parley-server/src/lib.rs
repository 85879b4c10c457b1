pub mod app;
pub mod call;
pub mod dispatch;
pub mod error;
pub mod registry;
pub mod room;
pub mod signaling;

pub use app::{AppState, router};
pub use call::{CallDeparture, CallManager, CallSession};
pub use dispatch::Relay;
pub use error::{RelayError, RelayResult};
pub use registry::ConnectionRegistry;
pub use room::{ColorPalette, MAX_ROOMS, PALETTE, Room, RoomDirectory};
pub use signaling::{EventSink, SignalingService, ws_handler};
