use thiserror::Error;
#[derive(Debug, Error, Clone, PartialEq)]
pub enum AcquisitionError {
    #[error("channel {channel} is out of range (expected 0..{limit})")]
    ChannelOutOfRange { channel: usize, limit: usize },
    #[error("i2c bus error: {0}")]
    Bus(String),
    #[error("conversion on channel {channel} did not complete in time")]
    Timeout { channel: usize },
}
/// The only error a user can trigger from the control panel.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum InputError {
    #[error("Enter valid inputs. Cylinders should be between 1 and 4, and test type should be '1' or '2'.")]
    Invalid,
}
impl InputError {
    pub fn title(&self) -> &'static str {
        match self {
            InputError::Invalid => "Invalid Input",
        }
    }
}
