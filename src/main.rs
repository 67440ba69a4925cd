// src/main.rs
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]
mod charts;
mod config;
mod drivers;
mod gui;
mod scheduler;
mod session;
mod types;
use eframe::egui;
// 入口函数
fn main() -> eframe::Result<()> {
    env_logger::init();
    log::info!("Pressure Check starting");
    let viewport = egui::ViewportBuilder::default()
        .with_inner_size([1100.0, 720.0])
        .with_min_inner_size([900.0, 600.0])
        .with_title("Pressure Check");
    let options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };
    eframe::run_native(
        "Pressure Check",
        options,
        Box::new(|_cc| Box::new(gui::PressureCheckApp::default())),
    )
}
