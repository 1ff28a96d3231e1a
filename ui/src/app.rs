use egui::RichText;

use crate::{state::State, utils::colors::COLOR_HEADING, widgets};

pub const HEADING: &str = "Admin Dashboard Table";

pub struct BookDashApp {
    state: State,
}

impl BookDashApp {
    /// Called once before the first frame.
    pub fn new(state: State) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &State {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut State {
        &mut self.state
    }
}

impl eframe::App for BookDashApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.heading(RichText::new(HEADING).size(32.0).color(COLOR_HEADING));
            });
            ui.add_space(12.0);

            widgets::books_panel(&mut self.state, ui);
        });
    }
}
