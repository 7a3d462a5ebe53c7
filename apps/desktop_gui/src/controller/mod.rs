//! Controller layer: UI input events and the reducer that applies them to the session.

pub mod events;
pub mod reducer;
