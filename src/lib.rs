pub mod error;
pub mod math;
pub mod operations;
pub mod profile;
pub mod tessellation;
pub mod tool;
pub mod workbench;

pub use error::{LathisError, Result};
pub use operations::cut::{Cut, CutOutcome};
pub use profile::Profile;
pub use tool::Tool;
pub use workbench::{StepDirection, Workbench};
