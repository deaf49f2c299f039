// Adapters layer: concrete implementations of the domain ports (event
// sources, surfaces, sinks, scheduling).

pub mod events;
pub mod scheduler;
pub mod sink;
pub mod surface;

pub use events::ScriptedEvents;
pub use scheduler::TokioScheduler;
pub use sink::{JsonFileSink, TracingSink};
pub use surface::ConsoleSurface;
