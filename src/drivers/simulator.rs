use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use crate::drivers::convert::pressure_to_raw;
use crate::drivers::source::{check_channel, PressureSource, CHANNEL_COUNT};
use crate::drivers::AcquisitionError;
use crate::types::Gain;
pub const MIN_PRESSURE_KPA: f64 = 850.0;
pub const MAX_PRESSURE_KPA: f64 = 1050.0;
/// Random-walk state of a simulated healthy engine.
#[derive(Clone, Debug, PartialEq)]
pub struct SensorState {
    pub base_pressure: f64,
    pub drift: [f64; CHANNEL_COUNT],
    pub last_pressure: [f64; CHANNEL_COUNT],
    /// Half-width of the uniform noise added on every read.
    pub noise_amplitude: f64,
}
impl SensorState {
    /// Fresh state: one shared base pressure in [900, 950], a small drift per cylinder.
    pub fn random(rng: &mut impl Rng) -> Self {
        let base_pressure = rng.gen_range(900.0..=950.0);
        let mut drift = [0.0; CHANNEL_COUNT];
        for d in &mut drift {
            *d = rng.gen_range(-0.1..=0.1);
        }
        Self {
            base_pressure,
            drift,
            last_pressure: [base_pressure; CHANNEL_COUNT],
            noise_amplitude: 1.0,
        }
    }
}
/// Stand-in for an ADS1115 wired to four pressure transducers.
///
/// Each read advances that channel's walk by `drift + noise`, clamps it to
/// [850, 1050] kPa and reports the code the converter would produce.
/// The gain argument is ignored; the simulator always behaves as gain 1.
pub struct SimulatedAds1115<R: Rng = StdRng> {
    state: SensorState,
    rng: R,
}
impl SimulatedAds1115<StdRng> {
    pub fn new() -> Self {
        Self::from_rng(StdRng::from_entropy())
    }
    pub fn seeded(seed: u64) -> Self {
        Self::from_rng(StdRng::seed_from_u64(seed))
    }
}
impl Default for SimulatedAds1115<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}
impl<R: Rng> SimulatedAds1115<R> {
    pub fn from_rng(mut rng: R) -> Self {
        let state = SensorState::random(&mut rng);
        Self { state, rng }
    }
    pub fn from_state(state: SensorState, rng: R) -> Self {
        Self { state, rng }
    }
    pub fn state(&self) -> &SensorState {
        &self.state
    }
    /// Next pressure on `channel`; mutates the walk.
    fn step(&mut self, channel: usize) -> f64 {
        let amplitude = self.state.noise_amplitude;
        let noise = if amplitude > 0.0 {
            self.rng.gen_range(-amplitude..=amplitude)
        } else {
            0.0
        };
        let pressure = (self.state.last_pressure[channel] + self.state.drift[channel] + noise)
            .clamp(MIN_PRESSURE_KPA, MAX_PRESSURE_KPA);
        self.state.last_pressure[channel] = pressure;
        pressure
    }
}
impl<R: Rng> PressureSource for SimulatedAds1115<R> {
    fn read(&mut self, channel: usize, _gain: Gain) -> Result<i32, AcquisitionError> {
        check_channel(channel)?;
        let pressure = self.step(channel);
        Ok(pressure_to_raw(pressure))
    }
    fn name(&self) -> &str {
        "simulated ADS1115"
    }
}
