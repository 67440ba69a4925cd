use std::collections::VecDeque;
use crate::drivers::source::{check_channel, PressureSource};
use crate::drivers::AcquisitionError;
use crate::types::Gain;
/// In-memory source useful for tests and deterministic playback.
///
/// Codes are handed out in order regardless of channel; an exhausted queue
/// reports a bus error, which is how a disconnected device looks.
pub struct ManualSource {
    queue: VecDeque<Result<i32, AcquisitionError>>,
    reads: Vec<usize>,
}
impl ManualSource {
    pub fn new(codes: impl IntoIterator<Item = i32>) -> Self {
        Self::with_results(codes.into_iter().map(Ok))
    }
    pub fn with_results(results: impl IntoIterator<Item = Result<i32, AcquisitionError>>) -> Self {
        Self {
            queue: results.into_iter().collect(),
            reads: Vec::new(),
        }
    }
    /// Channels requested so far, in call order.
    pub fn reads(&self) -> &[usize] {
        &self.reads
    }
}
impl PressureSource for ManualSource {
    fn read(&mut self, channel: usize, _gain: Gain) -> Result<i32, AcquisitionError> {
        check_channel(channel)?;
        self.reads.push(channel);
        self.queue
            .pop_front()
            .unwrap_or_else(|| Err(AcquisitionError::Bus("manual source exhausted".into())))
    }
    fn name(&self) -> &str {
        "manual"
    }
}
#[cfg(test)]
mod tests {
    use super::*;
    #[test]
    fn manual_source_replays_codes_in_order() {
        let mut source = ManualSource::new([10, 20]);
        assert_eq!(source.read(0, Gain::One), Ok(10));
        assert_eq!(source.read(3, Gain::One), Ok(20));
        assert!(matches!(
            source.read(1, Gain::One),
            Err(AcquisitionError::Bus(_))
        ));
        assert_eq!(source.reads(), &[0, 3, 1]);
    }
    #[test]
    fn rejects_channels_past_the_fourth() {
        let mut source = ManualSource::new([10]);
        assert_eq!(
            source.read(4, Gain::One),
            Err(AcquisitionError::ChannelOutOfRange { channel: 4, limit: 4 })
        );
        assert!(source.reads().is_empty());
    }
}
