// src/config.rs
use std::time::Duration;

#[derive(Clone, Copy, Debug)]
pub struct TickConfig {
    pub period: Duration,
}
impl Default for TickConfig {
    fn default() -> Self {
        // Four samples a second, same cadence as the bench rig.
        TickConfig {
            period: Duration::from_millis(250),
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct ChartConfig {
    /// Visual amplification of the per-tick difference bars.
    pub bar_scale: f64,
    pub bar_width: f64,
    pub difference_y_range: (f64, f64),
    /// Widen this if readings fall outside the expected psi band.
    pub history_y_range: (f64, f64),
}
impl Default for ChartConfig {
    fn default() -> Self {
        ChartConfig {
            bar_scale: 20.0,
            bar_width: 0.4,
            difference_y_range: (-10.0, 10.0),
            history_y_range: (0.0, 200.0),
        }
    }
}

#[derive(Clone, Debug)]
pub struct HardwareConfig {
    pub i2c_bus: String,
    /// 7-bit address, ADDR pin tied to ground.
    pub address: u8,
    pub ready_poll_attempts: u32,
}
impl Default for HardwareConfig {
    fn default() -> Self {
        HardwareConfig {
            i2c_bus: "/dev/i2c-1".to_owned(),
            address: 0x48,
            ready_poll_attempts: 20,
        }
    }
}
