mod game_common;
pub mod snake_scene;

use gridsnake::game::Snapshot;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    widgets::Paragraph,
    Frame,
};

/// Smallest terminal the scene lays out in.
const MIN_WIDTH: u16 = 48;
const MIN_HEIGHT: u16 = 16;

/// Main UI drawing function.
pub fn draw_ui(frame: &mut Frame, snap: &Snapshot) {
    let size = frame.size();
    if size.width < MIN_WIDTH || size.height < MIN_HEIGHT {
        draw_too_small(frame, size);
        return;
    }
    snake_scene::render_snake_scene(frame, size, snap);
}

fn draw_too_small(frame: &mut Frame, area: Rect) {
    let text = Paragraph::new(format!(
        "Terminal too small ({}x{}), need {}x{}",
        area.width, area.height, MIN_WIDTH, MIN_HEIGHT
    ))
    .style(Style::default().fg(Color::Yellow))
    .alignment(Alignment::Center);
    frame.render_widget(text, area);
}
