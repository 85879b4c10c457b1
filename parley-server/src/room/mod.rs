mod palette;
mod room;
mod room_directory;

pub use palette::{ColorPalette, PALETTE};
pub use room::Room;
pub use room_directory::{MAX_ROOMS, RoomDirectory};
