//! Domain models for the diagnosis pipeline.

mod observation;
mod plant;

pub use observation::*;
pub use plant::*;

// The diagnosis shape is owned by the service contract.
pub use edenmind_service::{Diagnosis, PlantInfo};
