// src/main.rs

#![cfg_attr(all(not(debug_assertions), target_os = "windows"), windows_subsystem = "windows")]

use bevy::{
    log::LogPlugin,
    prelude::*,
    window::WindowPlugin,
    winit::{UpdateMode, WinitSettings},
};
use std::time::Duration;

use bevy_egui::EguiPlugin;
use bevy_tokio_tasks::TokioTasksPlugin;
use clap::Parser;

mod analysis;
mod cli;
mod documents;
mod matrix;
mod settings;
mod ui;

use analysis::AnalysisPlugin;
use documents::DocumentsPlugin;
use matrix::MatrixPlugin;
use ui::ComparisonUiPlugin;

fn main() {
    let args = cli::Cli::parse();
    if let Some(command) = args.command {
        match command {
            cli::Commands::Export {
                matrix,
                documents,
                out,
            } => match cli::export::run_export(&matrix, &documents, &out) {
                Ok(0) => println!("Nothing to export: no documents in the matrix."),
                Ok(rows) => println!("Exported {} row(s) to {}", rows, out.display()),
                Err(e) => {
                    eprintln!("Export failed: {}", e);
                    std::process::exit(1);
                }
            },
        }
        return;
    }

    App::new()
        .insert_resource(WinitSettings {
            focused_mode: UpdateMode::Continuous,
            unfocused_mode: UpdateMode::reactive_low_power(Duration::from_secs_f32(1.0 / 5.0)),
        })
        .insert_resource(settings::AppSettings::load_or_default())
        .add_plugins(
            DefaultPlugins
                .set(WindowPlugin {
                    primary_window: Some(Window {
                        title: "InsightGrid".into(),
                        ..default()
                    }),
                    ..default()
                })
                .set(LogPlugin {
                    level: bevy::log::Level::INFO,
                    filter: "wgpu=error,naga=warn,bevy_tokio_tasks=warn".to_string(),
                    ..default()
                }),
        )
        .add_plugins(EguiPlugin {
            enable_multipass_for_primary_context: true,
        })
        .add_plugins(TokioTasksPlugin::default())
        .add_plugins(bevy_framepace::FramepacePlugin)
        .add_plugins(MatrixPlugin)
        .add_plugins(DocumentsPlugin)
        .add_plugins(AnalysisPlugin)
        .add_plugins(ComparisonUiPlugin)
        .run();
}
