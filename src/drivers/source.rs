use crate::drivers::AcquisitionError;
use crate::types::Gain;
/// Number of single-ended inputs on the converter.
pub const CHANNEL_COUNT: usize = 4;
/// Trait representing a multi-channel pressure converter that can be sampled on demand.
///
/// Implemented by the simulator and by the ADS1115 driver, so the sampling loop
/// does not care which one is plugged in.
pub trait PressureSource {
    /// One conversion on `channel`, returned as a raw code (0..=32767 on real hardware).
    fn read(&mut self, channel: usize, gain: Gain) -> Result<i32, AcquisitionError>;
    fn name(&self) -> &str;
}
impl<S: PressureSource + ?Sized> PressureSource for Box<S> {
    fn read(&mut self, channel: usize, gain: Gain) -> Result<i32, AcquisitionError> {
        (**self).read(channel, gain)
    }
    fn name(&self) -> &str {
        (**self).name()
    }
}
pub(crate) fn check_channel(channel: usize) -> Result<(), AcquisitionError> {
    if channel >= CHANNEL_COUNT {
        return Err(AcquisitionError::ChannelOutOfRange {
            channel,
            limit: CHANNEL_COUNT,
        });
    }
    Ok(())
}
#[cfg(test)]
mod tests {
    use super::*;
    #[test]
    fn only_the_four_inputs_are_valid() {
        assert!((0..CHANNEL_COUNT).all(|c| check_channel(c).is_ok()));
        assert_eq!(
            check_channel(4),
            Err(AcquisitionError::ChannelOutOfRange { channel: 4, limit: 4 })
        );
    }
}
