use embedded_hal::delay::DelayNs;
use embedded_hal::i2c::I2c;
use crate::config::HardwareConfig;
use crate::drivers::source::{check_channel, PressureSource};
use crate::drivers::AcquisitionError;
use crate::types::Gain;
const REG_CONVERSION: u8 = 0x00;
const REG_CONFIG: u8 = 0x01;
// Config register fields (datasheet table 8).
const OS_SINGLE: u16 = 0x8000;
const MUX_SINGLE_ENDED: u16 = 0b100;
const MODE_SINGLE_SHOT: u16 = 0x0100;
const DR_128SPS: u16 = 0b100 << 5;
const COMP_DISABLE: u16 = 0b11;
/// ADS1115 16-bit converter driven in single-shot mode.
pub struct Ads1115<I2C, D> {
    i2c: I2C,
    delay: D,
    address: u8,
    ready_poll_attempts: u32,
}
impl<I2C: I2c, D: DelayNs> Ads1115<I2C, D> {
    pub fn new(i2c: I2C, delay: D, address: u8) -> Self {
        Self {
            i2c,
            delay,
            address,
            ready_poll_attempts: HardwareConfig::default().ready_poll_attempts,
        }
    }
    pub fn with_poll_attempts(mut self, attempts: u32) -> Self {
        self.ready_poll_attempts = attempts.max(1);
        self
    }
    pub fn release(self) -> (I2C, D) {
        (self.i2c, self.delay)
    }
    /// Config word that starts one conversion of `channel` against ground.
    pub fn config_word(channel: usize, gain: Gain) -> u16 {
        OS_SINGLE
            | ((MUX_SINGLE_ENDED + channel as u16) << 12)
            | (gain.pga_bits() << 9)
            | MODE_SINGLE_SHOT
            | DR_128SPS
            | COMP_DISABLE
    }
    /// Reads the config register once; fails if nothing answers at `address`.
    pub fn probe(&mut self) -> Result<u16, AcquisitionError> {
        self.read_register(REG_CONFIG)
    }
    fn write_register(&mut self, register: u8, value: u16) -> Result<(), AcquisitionError> {
        let [hi, lo] = value.to_be_bytes();
        self.i2c
            .write(self.address, &[register, hi, lo])
            .map_err(|e| AcquisitionError::Bus(format!("{e:?}")))
    }
    fn read_register(&mut self, register: u8) -> Result<u16, AcquisitionError> {
        let mut buf = [0u8; 2];
        self.i2c
            .write_read(self.address, &[register], &mut buf)
            .map_err(|e| AcquisitionError::Bus(format!("{e:?}")))?;
        Ok(u16::from_be_bytes(buf))
    }
}
impl<I2C: I2c, D: DelayNs> PressureSource for Ads1115<I2C, D> {
    fn read(&mut self, channel: usize, gain: Gain) -> Result<i32, AcquisitionError> {
        check_channel(channel)?;
        self.write_register(REG_CONFIG, Self::config_word(channel, gain))?;
        // One conversion takes ~7.8 ms at 128 SPS.
        for _ in 0..self.ready_poll_attempts {
            self.delay.delay_ms(1);
            if self.read_register(REG_CONFIG)? & OS_SINGLE != 0 {
                let code = self.read_register(REG_CONVERSION)? as i16;
                // Inputs below ground read as small negative codes.
                return Ok(i32::from(code.max(0)));
            }
        }
        Err(AcquisitionError::Timeout { channel })
    }
    fn name(&self) -> &str {
        "ADS1115"
    }
}
#[cfg(target_os = "linux")]
pub fn open_hardware(config: &HardwareConfig) -> anyhow::Result<Box<dyn PressureSource>> {
    use anyhow::Context;
    use linux_embedded_hal::{Delay, I2cdev};
    let bus = I2cdev::new(&config.i2c_bus)
        .with_context(|| format!("failed to open I2C bus {}", config.i2c_bus))?;
    let mut adc = Ads1115::new(bus, Delay, config.address)
        .with_poll_attempts(config.ready_poll_attempts);
    adc.probe()
        .with_context(|| format!("no ADS1115 answering at 0x{:02x}", config.address))?;
    log::info!("ADS1115 found on {} at 0x{:02x}", config.i2c_bus, config.address);
    Ok(Box::new(adc))
}
#[cfg(not(target_os = "linux"))]
pub fn open_hardware(config: &HardwareConfig) -> anyhow::Result<Box<dyn PressureSource>> {
    anyhow::bail!(
        "ADS1115 hardware ({} @ 0x{:02x}) is only supported on Linux",
        config.i2c_bus,
        config.address
    )
}
