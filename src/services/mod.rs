//! Application service layer.
//!
//! Services orchestrate the filing repository and the intensity engine. They
//! keep the binary free of pipeline logic.

mod workflow;

pub use workflow::{IntensityWorkflow, WorkflowOptions};
