// src/charts.rs
use eframe::egui;
use egui::Color32;
use egui_plot::{Bar, BarChart, Corner, Legend, Line, Plot, PlotBounds, PlotPoints};
use crate::config::ChartConfig;

const BAR_COLOR: Color32 = Color32::from_rgb(0x5b, 0x8f, 0xff);
const LINE_COLORS: [Color32; 4] = [
    Color32::from_rgb(0x5b, 0x8f, 0xff),
    Color32::from_rgb(0xff, 0x8c, 0x42),
    Color32::from_rgb(0x54, 0xc7, 0x6b),
    Color32::from_rgb(0xd1, 0x5b, 0xff),
];

/// Bar set of the difference chart. Built once per session; ticks only move the heights.
#[derive(Clone, Debug, Default)]
pub struct DifferenceBars {
    heights: Vec<f64>,
}

impl DifferenceBars {
    pub fn new(cylinder_count: usize) -> Self {
        Self {
            heights: vec![0.0; cylinder_count],
        }
    }

    pub fn heights(&self) -> &[f64] {
        &self.heights
    }

    pub fn update(&mut self, differences: &[f64], scale: f64) {
        for (height, diff) in self.heights.iter_mut().zip(differences) {
            *height = diff * scale;
        }
    }

    /// Bars sit at x = 1..=n, one per cylinder.
    fn bars(&self, width: f64) -> Vec<Bar> {
        self.heights
            .iter()
            .enumerate()
            .map(|(i, h)| {
                Bar::new((i + 1) as f64, *h)
                    .width(width)
                    .name(format!("Cylinder {}", i + 1))
            })
            .collect()
    }
}

/// `[tick, psi]` pairs for one cylinder.
pub fn history_points(history: &[f64]) -> Vec<[f64; 2]> {
    history
        .iter()
        .enumerate()
        .map(|(tick, psi)| [tick as f64, *psi])
        .collect()
}

pub fn draw_difference_chart(
    ui: &mut egui::Ui,
    bars: &DifferenceBars,
    title: &str,
    config: &ChartConfig,
) {
    ui.label(egui::RichText::new(title).strong());
    let (y_min, y_max) = config.difference_y_range;
    let n = bars.heights().len().max(1) as f64;
    Plot::new("difference_chart")
        .height(260.0)
        .allow_drag(false)
        .allow_zoom(false)
        .allow_scroll(false)
        .allow_boxed_zoom(false)
        .x_axis_label("Cylinder")
        .y_axis_label("Pressure Difference (psi)")
        .show(ui, |plot_ui| {
            plot_ui.set_plot_bounds(PlotBounds::from_min_max([0.5, y_min], [n + 0.5, y_max]));
            plot_ui.bar_chart(BarChart::new(bars.bars(config.bar_width)).color(BAR_COLOR));
        });
}

pub fn draw_history_chart(ui: &mut egui::Ui, histories: &[Vec<f64>], config: &ChartConfig) {
    ui.label(egui::RichText::new("Cylinder Pressure Over Time").strong());
    let (y_min, y_max) = config.history_y_range;
    let ticks = histories.iter().map(Vec::len).max().unwrap_or(0);
    let x_max = (ticks.saturating_sub(1) as f64).max(1.0);
    Plot::new("history_chart")
        .height(260.0)
        .allow_drag(false)
        .allow_zoom(false)
        .allow_scroll(false)
        .allow_boxed_zoom(false)
        .x_axis_label("Time (s)")
        .y_axis_label("Pressure (psi)")
        .legend(Legend::default().position(Corner::RightTop))
        .show(ui, |plot_ui| {
            plot_ui.set_plot_bounds(PlotBounds::from_min_max([0.0, y_min], [x_max, y_max]));
            for (i, history) in histories.iter().enumerate() {
                let color = LINE_COLORS[i % LINE_COLORS.len()];
                plot_ui.line(
                    Line::new(PlotPoints::new(history_points(history)))
                        .name(format!("Cyl {}", i + 1))
                        .color(color),
                );
            }
        });
}
