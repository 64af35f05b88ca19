/// Marker trait for intents: user actions (tab switch, quantity change) and
/// system events (menu fetch finished).
pub trait Intent: Send + 'static {}
