pub mod events;
pub mod router;
pub mod state;

pub use events::{EventResult, PageEvent};
pub use router::PortalRouter;
pub use state::PortalState;
