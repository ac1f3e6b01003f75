pub mod controller;
pub mod event;
pub mod reducer;
pub mod state;

pub use controller::{ScreenController, DEFAULT_DEBOUNCE};
pub use event::{Effect, Message, RequestTicket, ScreenEvent};
pub use reducer::NewsScreen;
pub use state::ScreenState;
