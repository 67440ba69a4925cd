//! Unit conversions between transducer pressure, ADC voltage, raw codes and psi.
//!
//! The transducer outputs `0.5 V + 3.5 mV per kPa`; the converter maps
//! `0..4.096 V` onto `0..32767`.

/// Transducer sensitivity in volts per kPa.
pub const VOLTS_PER_KPA: f64 = 3.5 / 1000.0;
/// Transducer output at zero pressure.
pub const ZERO_OFFSET_VOLTS: f64 = 0.5;
/// Full-scale input voltage of the converter at gain 1.
pub const REFERENCE_VOLTS: f64 = 4.096;
/// Largest positive code of a 16-bit signed converter.
pub const FULL_SCALE_CODE: f64 = 32767.0;
pub const KPA_PER_PSI: f64 = 6.895;

pub fn pressure_to_volts(kpa: f64) -> f64 {
    kpa * VOLTS_PER_KPA + ZERO_OFFSET_VOLTS
}
/// Truncating conversion, the converter never rounds up.
pub fn volts_to_raw(volts: f64) -> i32 {
    (volts / REFERENCE_VOLTS * FULL_SCALE_CODE).floor() as i32
}
pub fn raw_to_volts(raw: i32) -> f64 {
    raw as f64 * (REFERENCE_VOLTS / FULL_SCALE_CODE)
}
pub fn volts_to_kpa(volts: f64) -> f64 {
    (volts - ZERO_OFFSET_VOLTS) * (1.0 / VOLTS_PER_KPA)
}
pub fn kpa_to_psi(kpa: f64) -> f64 {
    kpa / KPA_PER_PSI
}
/// Full readout path used by the sampling loop.
pub fn raw_to_psi(raw: i32) -> f64 {
    kpa_to_psi(volts_to_kpa(raw_to_volts(raw)))
}
/// Code the converter reports for a given transducer pressure.
pub fn pressure_to_raw(kpa: f64) -> i32 {
    volts_to_raw(pressure_to_volts(kpa))
}
#[cfg(test)]
mod tests {
    use super::*;
    // One code step expressed in kPa.
    fn code_step_kpa() -> f64 {
        REFERENCE_VOLTS / FULL_SCALE_CODE / VOLTS_PER_KPA
    }
    #[test]
    fn raw_code_round_trips_through_psi() {
        for kpa in [850.0, 900.0, 912.345, 1000.0, 1050.0] {
            let raw = pressure_to_raw(kpa);
            let recovered_kpa = raw_to_psi(raw) * KPA_PER_PSI;
            assert!(
                (kpa - recovered_kpa).abs() <= code_step_kpa() + 1e-9,
                "{kpa} -> {raw} -> {recovered_kpa}"
            );
            assert!(recovered_kpa <= kpa + 1e-9);
        }
    }
    #[test]
    fn known_codes() {
        assert_eq!(pressure_to_raw(850.0), 27799);
        assert_eq!(pressure_to_raw(900.0), 29199);
        assert_eq!(pressure_to_raw(1000.0), 31999);
        // Above ~1027 kPa the transducer output passes the 4.096 V reference.
        assert_eq!(pressure_to_raw(1050.0), 33398);
    }
    #[test]
    fn readout_matches_bench_values() {
        assert!((raw_to_psi(29199) - 130.5288).abs() < 1e-3);
        assert!((raw_to_psi(27799) - 123.2770).abs() < 1e-3);
    }
    #[test]
    fn transform_is_monotonic() {
        let mut previous = pressure_to_raw(850.0);
        let mut kpa = 850.0;
        while kpa < 1050.0 {
            kpa += 0.37;
            let raw = pressure_to_raw(kpa);
            assert!(raw >= previous);
            previous = raw;
        }
    }
}
