// src/drivers/mod.rs
pub mod ads1115;
pub mod convert;
pub mod error;
#[cfg(test)]
pub mod manual;
pub mod simulator;
pub mod source;
// Re-exported so the GUI and session only need `crate::drivers::*`
pub use ads1115::open_hardware;
pub use error::{AcquisitionError, InputError};
pub use simulator::SimulatedAds1115;
pub use source::PressureSource;
