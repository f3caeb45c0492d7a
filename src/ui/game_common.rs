//! Layout and chrome around the play field: border, status bar, HUD frame.

use gridsnake::game::{levels, GameStatus, Hud, Snapshot};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Layout areas returned by `create_game_layout`.
pub struct GameLayout {
    /// Play field - top left, inside outer border
    pub content: Rect,
    /// Status bar area (2 lines) - bottom left, inside outer border
    pub status_bar: Rect,
    /// HUD panel - right side, with its own border
    pub info_panel: Rect,
}

/// Outer border color: green while playing, then the outcome's color.
pub fn status_color(status: GameStatus) -> Color {
    match status {
        GameStatus::Running => Color::LightGreen,
        GameStatus::GameOver => Color::Red,
        GameStatus::LevelCleared => Color::Green,
        GameStatus::AllLevelsCleared => Color::Yellow,
    }
}

/// HUD panel width, wide enough for the longest level name.
fn info_panel_width(hud: Hud) -> u16 {
    const MIN_WIDTH: u16 = 22;
    match hud {
        Hud::Endless { .. } => MIN_WIDTH,
        // Name plus the panel border and a space of padding each side
        Hud::Level { .. } => (levels::longest_name_len() as u16 + 4).max(MIN_WIDTH),
    }
}

/// Lay out the game screen for `snap`.
///
/// ```text
/// ┌─ Snake: Levels ─────────────────┬─ Level 3/8 ─┐
/// │                                 │             │
/// │   [play field]                  │  [hud]      │
/// │                                 │             │
/// │ [status bar - 2 lines]          │             │
/// └─────────────────────────────────┴─────────────┘
/// ```
///
/// The play field asks for one terminal row per two grid rows plus its
/// frame, so tall boards claim the height they need first.
pub fn create_game_layout(frame: &mut Frame, area: Rect, snap: &Snapshot) -> GameLayout {
    frame.render_widget(Clear, area);

    let title = match snap.hud {
        Hud::Endless { .. } => " Snake: Endless ",
        Hud::Level { .. } => " Snake: Levels ",
    };
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(status_color(snap.status)));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let field_height = (snap.height.max(0) as u16).div_ceil(2) + 2;
    let h_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(20),
            Constraint::Length(info_panel_width(snap.hud)),
        ])
        .split(inner);

    let v_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(field_height), Constraint::Length(2)])
        .split(h_chunks[0]);

    GameLayout {
        content: v_chunks[0],
        status_bar: v_chunks[1],
        info_panel: h_chunks[1],
    }
}

/// Status message and key hints for each game status.
fn status_line(status: GameStatus) -> (&'static str, &'static [(&'static str, &'static str)]) {
    match status {
        GameStatus::Running => ("Slither!", &[("[Arrows/WASD]", "Move"), ("[Q]", "Quit")]),
        GameStatus::GameOver => ("Game over", &[("[R]", "Restart"), ("[Q]", "Quit")]),
        GameStatus::LevelCleared => ("Level cleared", &[("[N]", "Next level"), ("[Q]", "Quit")]),
        GameStatus::AllLevelsCleared => {
            ("Campaign complete", &[("[R]", "Play again"), ("[Q]", "Quit")])
        }
    }
}

/// Render the 2-line status bar: status message, then the keys that do
/// something right now.
pub fn render_status_bar(frame: &mut Frame, area: Rect, status: GameStatus) {
    if area.height < 1 {
        return;
    }
    let (text, controls) = status_line(status);

    let message = Paragraph::new(text)
        .style(Style::default().fg(status_color(status)))
        .alignment(Alignment::Center);
    frame.render_widget(message, Rect { height: 1, ..area });

    if area.height < 2 {
        return;
    }
    let mut spans = Vec::new();
    for (i, (key, action)) in controls.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("  "));
        }
        spans.push(Span::styled(*key, Style::default().fg(Color::White)));
        spans.push(Span::styled(
            format!(" {}", action),
            Style::default().fg(Color::DarkGray),
        ));
    }
    frame.render_widget(
        Paragraph::new(Line::from(spans)).alignment(Alignment::Center),
        Rect {
            y: area.y + 1,
            height: 1,
            ..area
        },
    );
}

/// Outcome shown in the end-of-round banner.
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum GameResultType {
    Win,
    Loss,
}

impl GameResultType {
    pub fn color(self) -> Color {
        match self {
            GameResultType::Win => Color::Green,
            GameResultType::Loss => Color::Red,
        }
    }
}

/// Render a compact banner at the bottom of an area.
///
/// Does not clear the rest of the area, so the board stays visible behind
/// it. `hint` is the key prompt on the last line.
pub fn render_game_over_banner(
    frame: &mut Frame,
    area: Rect,
    result_type: GameResultType,
    title: &str,
    message: &str,
    hint: &str,
) {
    let banner_height: u16 = 4;
    if area.height < banner_height {
        return;
    }
    let banner_area = Rect {
        x: area.x,
        y: area.y + area.height - banner_height,
        width: area.width,
        height: banner_height,
    };

    frame.render_widget(Clear, banner_area);

    let title_color = result_type.color();
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(title_color));

    let inner = block.inner(banner_area);
    frame.render_widget(block, banner_area);

    let lines = vec![
        Line::from(vec![
            Span::styled(
                title,
                Style::default()
                    .fg(title_color)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" - "),
            Span::styled(message, Style::default().fg(Color::White)),
        ]),
        Line::from(Span::styled(hint, Style::default().fg(Color::DarkGray))),
    ];

    let text = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(text, inner);
}

/// Render the HUD panel border, titled with the mode's progress.
///
/// Returns the inner Rect for content rendering.
pub fn render_info_panel_frame(frame: &mut Frame, area: Rect, hud: Hud) -> Rect {
    let title = match hud {
        Hud::Endless { .. } => " Endless ".to_string(),
        Hud::Level {
            level, max_level, ..
        } => format!(" Level {}/{} ", level, max_level),
    };
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    inner
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_line_offers_only_live_keys() {
        let (_, running) = status_line(GameStatus::Running);
        assert!(running.iter().all(|(key, _)| *key != "[R]"));

        let (text, over) = status_line(GameStatus::GameOver);
        assert_eq!(text, "Game over");
        assert!(over.iter().any(|(key, _)| *key == "[R]"));

        let (_, cleared) = status_line(GameStatus::LevelCleared);
        assert!(cleared.iter().any(|(key, _)| *key == "[N]"));
    }

    #[test]
    fn test_info_panel_fits_every_level_name() {
        let hud = Hud::Level {
            level: 8,
            max_level: 8,
            name: "Labyrinth",
            food_eaten: 0,
            target: 17,
            cleared: false,
        };
        let width = info_panel_width(hud) as usize;
        assert!(width >= levels::longest_name_len() + 2);
        assert_eq!(info_panel_width(Hud::Endless { length: 3 }), 22);
    }
}
