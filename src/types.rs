// src/types.rs

// Which converter feeds the sampling loop
#[derive(PartialEq, Clone, Copy, Debug, Default)]
pub enum ConnectionMode {
    #[default]
    Simulation,
    Hardware,
}

/// Programmable gain of the converter front end. Full-scale range is 4.096 V / gain.
#[derive(PartialEq, Eq, Clone, Copy, Debug, Default)]
pub enum Gain {
    TwoThirds,
    #[default]
    One,
    Two,
    Four,
    Eight,
    Sixteen,
}

impl Gain {
    /// PGA field of the ADS1115 config register (bits 11:9).
    pub fn pga_bits(self) -> u16 {
        match self {
            Gain::TwoThirds => 0b000,
            Gain::One => 0b001,
            Gain::Two => 0b010,
            Gain::Four => 0b011,
            Gain::Eight => 0b100,
            Gain::Sixteen => 0b101,
        }
    }
}

// Labels only, both tests sample the same way
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum TestType {
    Compression,
    Butterfly,
}

impl TestType {
    /// Parses the control-panel code: "1" compression, "2" butterfly.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_lowercase().as_str() {
            "1" => Some(TestType::Compression),
            "2" => Some(TestType::Butterfly),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            TestType::Compression => "compression",
            TestType::Butterfly => "butterfly",
        }
    }

    pub fn readings_header(self) -> &'static str {
        match self {
            TestType::Compression => "Compression readings:",
            TestType::Butterfly => "Butterfly airflow readings:",
        }
    }

    pub fn chart_title(self) -> &'static str {
        match self {
            TestType::Compression => "Compression Pressure Test",
            TestType::Butterfly => "Butterfly Pressure Test",
        }
    }
}
