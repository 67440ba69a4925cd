// src/session.rs
use crate::drivers::convert::raw_to_psi;
use crate::drivers::source::{PressureSource, CHANNEL_COUNT};
use crate::drivers::{AcquisitionError, InputError};
use crate::types::{Gain, TestType};

/// Validated "Start Test" parameters.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StartRequest {
    pub cylinder_count: usize,
    pub test_type: TestType,
}

impl StartRequest {
    /// Both fields must be valid; nothing is started on partial input.
    pub fn parse(cylinders: &str, test_type: &str) -> Result<Self, InputError> {
        let cylinder_count: usize = cylinders.trim().parse().map_err(|_| InputError::Invalid)?;
        if !(1..=CHANNEL_COUNT).contains(&cylinder_count) {
            return Err(InputError::Invalid);
        }
        let test_type = TestType::from_code(test_type).ok_or(InputError::Invalid)?;
        Ok(Self {
            cylinder_count,
            test_type,
        })
    }

    pub fn banner(&self) -> String {
        format!(
            "Running {} test on {} cylinders...",
            self.test_type.name(),
            self.cylinder_count
        )
    }
}

/// What one tick produced, ready for the readout and the charts.
#[derive(Clone, Debug, PartialEq)]
pub struct TickReport {
    /// 0-based index of this tick within the session.
    pub tick: usize,
    pub readings: Vec<f64>, // psi, one per active cylinder
    pub differences: Vec<f64>,
}

/// Mutable state of one run of "Start Test".
#[derive(Clone, Debug)]
pub struct TestSession {
    cylinder_count: usize,
    test_type: TestType,
    previous_readings: Vec<f64>,
    history: Vec<Vec<f64>>, // cylinder -> psi per tick
    ticks: usize,
}

impl TestSession {
    pub fn new(request: StartRequest) -> Self {
        Self {
            cylinder_count: request.cylinder_count,
            test_type: request.test_type,
            previous_readings: vec![0.0; request.cylinder_count],
            history: vec![Vec::new(); request.cylinder_count],
            ticks: 0,
        }
    }

    pub fn cylinder_count(&self) -> usize {
        self.cylinder_count
    }
    pub fn test_type(&self) -> TestType {
        self.test_type
    }
    pub fn previous_readings(&self) -> &[f64] {
        &self.previous_readings
    }
    pub fn ticks(&self) -> usize {
        self.ticks
    }
    /// Readings of `cylinder` so far; `None` for cylinders outside the session.
    pub fn history(&self, cylinder: usize) -> Option<&[f64]> {
        self.history.get(cylinder).map(Vec::as_slice)
    }
    pub fn histories(&self) -> &[Vec<f64>] {
        &self.history
    }

    /// One sampling step.
    ///
    /// All cylinders are read before any state changes, so a failed read leaves
    /// the session exactly as it was.
    pub fn tick(&mut self, source: &mut dyn PressureSource) -> Result<TickReport, AcquisitionError> {
        let readings = (0..self.cylinder_count)
            .map(|cylinder| source.read(cylinder, Gain::One).map(raw_to_psi))
            .collect::<Result<Vec<f64>, _>>()?;
        let differences: Vec<f64> = readings
            .iter()
            .zip(&self.previous_readings)
            .map(|(now, before)| now - before)
            .collect();
        self.previous_readings.clone_from(&readings);
        for (cylinder_history, reading) in self.history.iter_mut().zip(&readings) {
            cylinder_history.push(*reading);
        }
        let report = TickReport {
            tick: self.ticks,
            readings,
            differences,
        };
        self.ticks += 1;
        log::trace!("tick {} readings {:?}", report.tick, report.readings);
        Ok(report)
    }

    /// Text panel contents for a tick.
    pub fn readout(&self, report: &TickReport) -> String {
        let mut text = String::from(self.test_type.readings_header());
        text.push('\n');
        for (i, pressure) in report.readings.iter().enumerate() {
            text.push_str(&format!("Cylinder {}: {:.2} psi\n", i + 1, pressure));
        }
        text
    }
}
