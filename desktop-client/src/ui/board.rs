use common::games::snake::{Point, SnakeRenderFrame};
use egui::{Align2, Color32, FontId, Rect};

const BOARD_COLOR: Color32 = Color32::from_rgb(24, 24, 32);
const HEAD_COLOR: Color32 = Color32::from_rgb(120, 220, 120);
const BODY_COLOR: Color32 = Color32::from_rgb(60, 170, 70);
const FOOD_COLOR: Color32 = Color32::from_rgb(220, 60, 60);
const BANNER_BACKGROUND: Color32 = Color32::from_rgba_premultiplied(0, 0, 0, 180);

pub fn cell_rect(origin: egui::Pos2, cell: Point, cell_size: f32) -> Rect {
    Rect::from_min_size(
        egui::pos2(
            origin.x + cell.x as f32 * cell_size,
            origin.y + cell.y as f32 * cell_size,
        ),
        egui::vec2(cell_size, cell_size),
    )
}

pub fn render_board(ui: &mut egui::Ui, frame: &SnakeRenderFrame, cell_size: f32) {
    let board_size = egui::vec2(
        frame.field_size.width as f32 * cell_size,
        frame.field_size.height as f32 * cell_size,
    );
    let (response, painter) = ui.allocate_painter(board_size, egui::Sense::hover());
    let board = response.rect;
    painter.rect_filled(board, 0.0, BOARD_COLOR);

    for (index, cell) in frame.snake.iter().enumerate() {
        let color = if index == 0 { HEAD_COLOR } else { BODY_COLOR };
        painter.rect_filled(cell_rect(board.min, *cell, cell_size).shrink(1.0), 2.0, color);
    }

    if let Some(food) = frame.food {
        let rect = cell_rect(board.min, food, cell_size);
        painter.circle_filled(rect.center(), cell_size * 0.4, FOOD_COLOR);
    }

    if let Some(status) = frame.status_text() {
        let banner = Rect::from_center_size(
            board.center(),
            egui::vec2(board.width(), cell_size * 3.0),
        );
        painter.rect_filled(banner, 0.0, BANNER_BACKGROUND);
        painter.text(
            board.center(),
            Align2::CENTER_CENTER,
            status,
            FontId::proportional(cell_size * 1.5),
            Color32::WHITE,
        );
    }

    ui.add_space(6.0);
    ui.horizontal(|ui| {
        ui.label(egui::RichText::new(format!("Score: {}", frame.score)).size(18.0));
        if frame.game_over {
            ui.label("Press Enter or Space to play again");
        }
    });
}
