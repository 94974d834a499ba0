pub mod events;
pub mod handler;
pub mod state;

// Re-export the essential types
pub use events::{EventHandled, InteractionEvent, MapInput};
pub use handler::InputHandler;
pub use state::{Effect, InteractionState, InteractionStateMachine};
