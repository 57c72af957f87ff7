pub mod error;
pub mod outcome;
pub mod response;

pub use error::PortalError;
pub use outcome::FlowOutcome;
pub use response::ActionResponse;
