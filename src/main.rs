use checkers_engine::{Cell, Coordinate, Game, MatchInterface};
use eframe::{egui, epaint::Vec2};
use gui::{background_color, piece_glyph};

mod gui;

struct App {
    game: Game,
    cell_size: f32,
}

fn main() -> anyhow::Result<()> {
    env_logger::init(); // Log to stderr (if you run with `RUST_LOG=debug`).
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([532.0, 392.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Checkers",
        options,
        Box::new(|_cc| {
            Box::new(App {
                cell_size: 45.0,
                game: Game::default(),
            })
        }),
    )
    .map_err(|err| anyhow::anyhow!("{err}"))
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.horizontal(|ui| {
                let clicked = self.grid(ui);
                self.control_panel(ui);
                if let Some(coordinate) = clicked {
                    // The whole input adapter: the engine sorts out
                    // whether this selects, moves, or does nothing.
                    self.game.input(coordinate);
                }
            });
        });
    }
}

impl App {
    fn control_panel(&mut self, ui: &mut egui::Ui) {
        ui.vertical(|ui| {
            ui.heading("Checkers");
            ui.label(self.game.status().to_string());
            if self.game.game_ended() && ui.button("Restart?").clicked() {
                self.game = Game::default();
            }
        });
    }

    fn grid(&mut self, ui: &mut egui::Ui) -> Option<Coordinate> {
        let highlighted = self.game.highlighted();
        let selected_cell = self.game.selection();
        let mut clicked = None;
        egui::Grid::new("main_grid")
            .min_col_width(self.cell_size)
            .max_col_width(self.cell_size)
            .min_row_height(self.cell_size)
            .show(ui, |ui| {
                for j in 0..8i8 {
                    for i in 0..8i8 {
                        let coordinate = Coordinate::new(i, j);
                        let btn = match self.game.cell(coordinate) {
                            Some(Cell::Figure(figure)) => {
                                egui::Button::new(piece_glyph(&figure, self.cell_size))
                            }
                            _ => egui::Button::new(""),
                        };
                        let btn = ui.add(
                            btn.frame(false)
                                .min_size(Vec2::new(self.cell_size, self.cell_size))
                                .fill(background_color(
                                    coordinate,
                                    selected_cell == Some(coordinate),
                                    highlighted.contains(&coordinate),
                                )),
                        );
                        if btn.clicked() {
                            clicked = Some(coordinate);
                        }
                    }
                    ui.end_row();
                }
            });
        clicked
    }
}
