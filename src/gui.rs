// src/gui.rs
use eframe::egui;
use egui::Color32;
use std::time::Instant;
use crate::charts::{self, DifferenceBars};
use crate::config::{ChartConfig, HardwareConfig, TickConfig};
use crate::drivers::{self, PressureSource, SimulatedAds1115};
use crate::scheduler::SampleClock;
use crate::session::{StartRequest, TestSession};
use crate::types::*;

/// Modal shown when "Start Test" is refused.
#[derive(Clone, Debug, PartialEq)]
pub struct ErrorDialog {
    pub title: String,
    pub message: String,
}

pub struct PressureCheckApp {
    // 控制面板输入
    cylinders_input: String,
    test_type_input: String,
    connection_mode: ConnectionMode,

    // Sensor state lives for the whole process; only the session is replaced on restart.
    simulator: SimulatedAds1115,
    hardware: Option<Box<dyn PressureSource>>,
    hardware_config: HardwareConfig,

    session: Option<TestSession>,
    session_mode: ConnectionMode,
    clock: SampleClock,

    // 显示
    bars: DifferenceBars,
    chart_config: ChartConfig,
    output_text: String,
    log_messages: Vec<String>,
    dialog: Option<ErrorDialog>,
}

impl Default for PressureCheckApp {
    fn default() -> Self {
        Self::with_simulator(SimulatedAds1115::new())
    }
}

impl PressureCheckApp {
    pub fn with_simulator(simulator: SimulatedAds1115) -> Self {
        Self {
            cylinders_input: String::new(),
            test_type_input: String::new(),
            connection_mode: ConnectionMode::Simulation,
            simulator,
            hardware: None,
            hardware_config: HardwareConfig::default(),
            session: None,
            session_mode: ConnectionMode::Simulation,
            clock: SampleClock::new(TickConfig::default().period),
            bars: DifferenceBars::default(),
            chart_config: ChartConfig::default(),
            output_text: String::new(),
            log_messages: vec!["Pressure Check ready.".to_owned()],
            dialog: None,
        }
    }

    fn log(&mut self, msg: &str) {
        self.log_messages.push(format!("> {}", msg));
        if self.log_messages.len() > 8 {
            self.log_messages.remove(0);
        }
    }

    fn show_error(&mut self, title: &str, message: String) {
        self.dialog = Some(ErrorDialog {
            title: title.to_owned(),
            message,
        });
    }

    /// "Start Test": validate, make sure the source is there, then (re)start the loop.
    pub fn start_test(&mut self, now: Instant) {
        let request = match StartRequest::parse(&self.cylinders_input, &self.test_type_input) {
            Ok(request) => request,
            Err(err) => {
                log::debug!(
                    "rejected start input {:?} / {:?}",
                    self.cylinders_input,
                    self.test_type_input
                );
                self.show_error(err.title(), err.to_string());
                return;
            }
        };
        if self.connection_mode == ConnectionMode::Hardware && self.hardware.is_none() {
            match drivers::open_hardware(&self.hardware_config) {
                Ok(source) => {
                    self.log(&format!("{} connected", source.name()));
                    self.hardware = Some(source);
                }
                Err(err) => {
                    log::warn!("hardware unavailable: {err:#}");
                    self.show_error("Hardware Error", format!("{err:#}"));
                    return;
                }
            }
        }
        log::info!(
            "starting {} test on {} cylinders ({:?})",
            request.test_type.name(),
            request.cylinder_count,
            self.connection_mode
        );
        self.output_text = format!("{}\n", request.banner());
        self.bars = DifferenceBars::new(request.cylinder_count);
        self.session = Some(TestSession::new(request));
        self.session_mode = self.connection_mode;
        self.clock.start(now);
        self.log(&request.banner());
    }

    /// Runs the sampling step if the clock says one is due.
    pub fn run_due_tick(&mut self, now: Instant) {
        if !self.clock.is_due(now) {
            return;
        }
        let Some(session) = self.session.as_mut() else {
            return;
        };
        let source: &mut dyn PressureSource = match self.session_mode {
            ConnectionMode::Simulation => &mut self.simulator,
            ConnectionMode::Hardware => match self.hardware.as_deref_mut() {
                Some(source) => source,
                None => return,
            },
        };
        match session.tick(source) {
            Ok(report) => {
                self.bars.update(&report.differences, self.chart_config.bar_scale);
                self.output_text = session.readout(&report);
            }
            Err(err) => {
                log::warn!("tick {} skipped: {err}", session.ticks());
                self.log(&format!("Read failed: {err}"));
            }
        }
        self.clock.reschedule(Instant::now().max(now));
    }

    pub fn session(&self) -> Option<&TestSession> {
        self.session.as_ref()
    }

    pub fn output_text(&self) -> &str {
        &self.output_text
    }

    pub fn dialog(&self) -> Option<&ErrorDialog> {
        self.dialog.as_ref()
    }

    fn draw_controls(&mut self, ui: &mut egui::Ui) {
        ui.add_space(10.0);
        ui.heading("Pressure Check");
        ui.separator();

        ui.horizontal(|ui| {
            ui.selectable_value(&mut self.connection_mode, ConnectionMode::Simulation, "SIM");
            ui.selectable_value(&mut self.connection_mode, ConnectionMode::Hardware, "REAL");
        });

        ui.add_space(10.0);
        ui.label("Number of cylinders (1-4):");
        ui.text_edit_singleline(&mut self.cylinders_input);
        ui.add_space(10.0);
        ui.label("Test type (1:compression/2:butterfly):");
        ui.text_edit_singleline(&mut self.test_type_input);

        ui.add_space(20.0);
        if ui.button("Start Test").clicked() {
            self.start_test(Instant::now());
        }
        ui.add_space(10.0);

        egui::ScrollArea::vertical()
            .id_source("readout")
            .max_height(180.0)
            .show(ui, |ui| {
                ui.add(
                    egui::TextEdit::multiline(&mut self.output_text.as_str())
                        .desired_rows(10)
                        .desired_width(f32::INFINITY)
                        .font(egui::TextStyle::Monospace),
                );
            });

        ui.add_space(10.0);
        ui.separator();
        egui::ScrollArea::vertical()
            .id_source("event_log")
            .max_height(100.0)
            .show(ui, |ui| {
                for m in &self.log_messages {
                    ui.monospace(m);
                }
            });
    }

    fn draw_dialog(&mut self, ctx: &egui::Context) {
        let Some(dialog) = &self.dialog else {
            return;
        };
        let mut dismissed = false;
        egui::Window::new(dialog.title.as_str())
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.label(egui::RichText::new(&dialog.message).color(Color32::LIGHT_RED));
                ui.add_space(8.0);
                if ui.button("OK").clicked() {
                    dismissed = true;
                }
            });
        if dismissed {
            self.dialog = None;
        }
    }
}

impl eframe::App for PressureCheckApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // 1. 采样 (one tick at most per frame)
        self.run_due_tick(Instant::now());

        // 2. UI 绘制
        egui::SidePanel::left("controls").min_width(320.0).show(ctx, |ui| {
            ui.add_enabled_ui(self.dialog.is_none(), |ui| self.draw_controls(ui));
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            let title = self
                .session
                .as_ref()
                .map(|s| s.test_type().chart_title())
                .unwrap_or("Pressure Test");
            charts::draw_difference_chart(ui, &self.bars, title, &self.chart_config);
            ui.separator();
            let histories = self.session.as_ref().map(TestSession::histories).unwrap_or(&[]);
            charts::draw_history_chart(ui, histories, &self.chart_config);
        });

        self.draw_dialog(ctx);

        // 3. 唤醒下一次采样
        if let Some(wait) = self.clock.time_until_next(Instant::now()) {
            ctx.request_repaint_after(wait);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::drivers::simulator::MIN_PRESSURE_KPA;
    use crate::drivers::InputError;
    use std::time::Duration;

    fn app(cylinders: &str, test_type: &str) -> PressureCheckApp {
        let mut app = PressureCheckApp::with_simulator(SimulatedAds1115::seeded(5));
        app.cylinders_input = cylinders.to_owned();
        app.test_type_input = test_type.to_owned();
        app
    }

    #[test]
    fn invalid_input_opens_dialog_and_starts_nothing() {
        for (cylinders, test_type) in [("5", "1"), ("0", "1"), ("2", "3"), ("two", "1")] {
            let mut app = app(cylinders, test_type);
            app.start_test(Instant::now());
            assert!(app.session().is_none());
            assert!(!app.clock.is_running());
            let dialog = app.dialog().unwrap();
            assert_eq!(dialog.title, "Invalid Input");
            assert_eq!(dialog.message, InputError::Invalid.to_string());
        }
    }

    #[test]
    fn invalid_restart_keeps_the_running_session() {
        let mut app = app("2", "1");
        let t0 = Instant::now();
        app.start_test(t0);
        app.run_due_tick(t0);
        app.cylinders_input = "9".to_owned();
        app.start_test(t0 + Duration::from_millis(5));
        let session = app.session().unwrap();
        assert_eq!(session.cylinder_count(), 2);
        assert_eq!(session.ticks(), 1);
        assert!(app.dialog().is_some());
    }

    #[test]
    fn start_shows_banner_then_first_tick_replaces_it() {
        let mut app = app("3", "2");
        let t0 = Instant::now();
        app.start_test(t0);
        assert_eq!(app.output_text(), "Running butterfly test on 3 cylinders...\n");
        app.run_due_tick(t0);
        let text = app.output_text();
        assert!(text.starts_with("Butterfly airflow readings:\n"));
        assert!(text.contains("Cylinder 3: "));
        assert!(!text.contains("Cylinder 4: "));
        assert_eq!(app.bars.heights().len(), 3);
    }

    #[test]
    fn ticks_do_not_overlap_the_period() {
        let mut app = app("1", "1");
        let t0 = Instant::now();
        app.start_test(t0);
        app.run_due_tick(t0);
        app.run_due_tick(t0 + Duration::from_millis(10));
        assert_eq!(app.session().unwrap().ticks(), 1);
        app.run_due_tick(Instant::now() + Duration::from_millis(300));
        assert_eq!(app.session().unwrap().ticks(), 2);
    }

    #[test]
    fn restart_resets_session_but_not_sensor() {
        let mut app = app("4", "1");
        let t0 = Instant::now();
        app.start_test(t0);
        app.run_due_tick(t0);
        let walked = app.simulator.state().last_pressure;
        assert!(walked.iter().all(|p| *p >= MIN_PRESSURE_KPA));

        app.cylinders_input = "2".to_owned();
        app.start_test(Instant::now());
        let session = app.session().unwrap();
        assert_eq!(session.ticks(), 0);
        assert_eq!(session.previous_readings(), &[0.0, 0.0]);
        assert_eq!(app.simulator.state().last_pressure, walked);
        assert_eq!(app.bars.heights(), &[0.0, 0.0]);
    }

    #[test]
    fn bar_heights_follow_scaled_differences() {
        let mut app = app("2", "1");
        let t0 = Instant::now();
        app.start_test(t0);
        app.run_due_tick(t0);
        let first = app.session().unwrap().previous_readings().to_vec();
        assert_eq!(app.bars.heights(), &[first[0] * 20.0, first[1] * 20.0]);
    }
}
