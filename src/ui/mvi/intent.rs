//! Base trait for intents (user/system actions) in MVI architecture.

/// Marker trait for intent objects.
///
/// Intents represent:
/// - Key presses routed to a screen (typing, moving the selection)
/// - System events (catalog loaded, cart snapshot from another screen)
/// - Form and dialog actions (focus changes, alert show/dismiss)
///
/// Intents are processed by reducers to produce new states.
pub trait Intent: Send + 'static {}
