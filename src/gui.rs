use checkers_engine::utils::is_playable_cell;
use checkers_engine::{Coordinate, Figure, Rank, Side};
use eframe::egui::{Color32, RichText};

pub fn piece_glyph(figure: &Figure, cell_size: f32) -> RichText {
    let glyph = match figure.rank {
        Rank::Man => "⛂",
        Rank::King => "⛃",
    };
    let color = match figure.side {
        Side::Red => Color32::from_rgb(0xd0, 0x30, 0x20),
        Side::Black => Color32::BLACK,
    };
    RichText::new(glyph).size(cell_size * 0.8).color(color)
}

pub fn background_color(coordinate: Coordinate, selected: bool, highlighted: bool) -> Color32 {
    if selected {
        Color32::from_rgb(0xf1, 0x9f, 0x1c)
    } else if highlighted {
        Color32::from_rgb(0xe8, 0xc8, 0x6a)
    } else if is_playable_cell(coordinate) {
        Color32::from_rgb(0x6c, 0x44, 0x17)
    } else {
        Color32::from_rgb(0xb2, 0x90, 0x7b)
    }
}
