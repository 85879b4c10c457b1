pub mod mock_sink;

pub use mock_sink::*;
pub use relay_helpers::*;
