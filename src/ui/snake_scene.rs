//! Snake game scene.
//!
//! Uses half-block pixel rendering: each grid cell maps to one colored pixel,
//! and pairs of vertical pixels are packed into one terminal row using the
//! `▀` (upper half block) character with fg=top, bg=bottom colors.

use super::game_common::{
    create_game_layout, render_game_over_banner, render_info_panel_frame, render_status_bar,
    GameResultType,
};
use gridsnake::game::{Cell, GameStatus, Hud, Snapshot};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

// ── Border characters ────────────────────────────────────────────────
const BORDER_H: char = '\u{2500}'; // ─
const BORDER_V: char = '\u{2502}'; // │
const BORDER_TL: char = '\u{250C}'; // ┌
const BORDER_TR: char = '\u{2510}'; // ┐
const BORDER_BL: char = '\u{2514}'; // └
const BORDER_BR: char = '\u{2518}'; // ┘
const HALF_TOP: char = '\u{2580}'; // ▀
const FULL_BLOCK: char = '\u{2588}'; // █

// ── Palette ──────────────────────────────────────────────────────────
const HEAD_COLOR: Color = Color::Rgb(100, 255, 100);
const DEAD_HEAD_COLOR: Color = Color::Rgb(255, 70, 70);
const BODY_BRIGHT: (f64, f64, f64) = (50.0, 220.0, 50.0);
const BODY_DIM: (f64, f64, f64) = (20.0, 80.0, 20.0);
const WALL_COLOR: Color = Color::Rgb(110, 110, 130);
const FOOD_COLOR: Color = Color::Rgb(255, 80, 40);
const EMPTY_BG: Color = Color::Rgb(12, 12, 18);
const FRAME_COLOR: Color = Color::Rgb(80, 80, 80);

/// Render the whole game screen for one frame.
pub fn render_snake_scene(frame: &mut Frame, area: Rect, snap: &Snapshot) {
    let layout = create_game_layout(frame, area, snap);

    render_play_field(frame, layout.content, snap);
    render_status_bar(frame, layout.status_bar, snap.status);
    render_info_panel(frame, layout.info_panel, snap);
    render_outcome_banner(frame, layout.content, snap);
}

/// Interpolated color for a body segment, bright near the head.
fn body_color(index: usize, snake_len: usize) -> Color {
    let t = index as f64 / (snake_len - 1).max(1) as f64;
    let r = (BODY_BRIGHT.0 * (1.0 - t) + BODY_DIM.0 * t) as u8;
    let g = (BODY_BRIGHT.1 * (1.0 - t) + BODY_DIM.1 * t) as u8;
    let b = (BODY_BRIGHT.2 * (1.0 - t) + BODY_DIM.2 * t) as u8;
    Color::Rgb(r, g, b)
}

/// Build the pixel grid in game coordinates. `None` is empty floor.
fn build_pixels(snap: &Snapshot) -> Vec<Vec<Option<Color>>> {
    let grid_w = snap.width.max(0) as usize;
    let grid_h = snap.height.max(0) as usize;
    let mut pixels: Vec<Vec<Option<Color>>> = vec![vec![None; grid_w]; grid_h];

    if let Some(grid) = snap.grid {
        for (y, row) in pixels.iter_mut().enumerate() {
            for (x, px) in row.iter_mut().enumerate() {
                if grid.is_wall(Cell::new(x as i16, y as i16)) {
                    *px = Some(WALL_COLOR);
                }
            }
        }
    }

    if let Some(food) = snap.food {
        if food.in_bounds(snap.width, snap.height) {
            let pulse =
                ((snap.tick_count % 20) as f64 / 20.0 * std::f64::consts::PI * 2.0).sin();
            let food_g = (80.0 + pulse * 30.0) as u8;
            let food_b = (40.0 + pulse * 20.0) as u8;
            pixels[food.y as usize][food.x as usize] = Some(Color::Rgb(255, food_g, food_b));
        }
    }

    let dead = snap.status == GameStatus::GameOver;
    let snake_len = snap.body.len();
    // Tail first so the head wins any overlap
    for (i, seg) in snap.body.iter().enumerate().rev() {
        if !seg.in_bounds(snap.width, snap.height) {
            continue;
        }
        pixels[seg.y as usize][seg.x as usize] = Some(match (i, dead) {
            (0, true) => DEAD_HEAD_COLOR,
            (0, false) => HEAD_COLOR,
            _ => body_color(i, snake_len),
        });
    }

    pixels
}

fn frame_span(s: String) -> Span<'static> {
    Span::styled(s, Style::default().fg(FRAME_COLOR))
}

/// Render the play field with a framed border and a progress label on top.
fn render_play_field(frame: &mut Frame, area: Rect, snap: &Snapshot) {
    if area.height < 3 || area.width < 5 {
        return;
    }

    let pixels = build_pixels(snap);
    let grid_w = snap.width.max(0) as usize;
    let grid_h = pixels.len();

    let content_rows = grid_h.div_ceil(2);
    let render_w = ((grid_w + 2) as u16).min(area.width);
    let inner_w = render_w as usize - 2;

    let x_off = area.x + (area.width.saturating_sub(render_w)) / 2;
    let y_off = area.y;

    // Top border with progress label
    {
        let label = match snap.hud {
            Hud::Endless { length } => format!("Len {}", length),
            Hud::Level {
                food_eaten, target, ..
            } => format!("{}/{}", food_eaten, target),
        };
        let pad_before = inner_w.saturating_sub(label.len() + 1);
        let pad_after = inner_w.saturating_sub(pad_before + label.len());

        let spans = vec![
            frame_span(BORDER_TL.to_string()),
            frame_span(std::iter::repeat_n(BORDER_H, pad_before).collect()),
            Span::styled(label, Style::default().fg(Color::White)),
            frame_span(std::iter::repeat_n(BORDER_H, pad_after).collect()),
            frame_span(BORDER_TR.to_string()),
        ];
        frame.render_widget(
            Paragraph::new(Line::from(spans)),
            Rect::new(x_off, y_off, render_w, 1),
        );
    }

    let empty_row: Vec<Option<Color>> = vec![None; grid_w];
    for term_row in 0..content_rows {
        let row_y = y_off + 1 + term_row as u16;
        if row_y >= area.y + area.height {
            break;
        }
        let top_row = pixels.get(term_row * 2).unwrap_or(&empty_row);
        let bot_row = pixels.get(term_row * 2 + 1).unwrap_or(&empty_row);

        let mut spans: Vec<Span> = vec![frame_span(BORDER_V.to_string())];

        // Batch consecutive cells with the same colors into one span
        let mut cur_fg = Color::Reset;
        let mut cur_bg = Color::Reset;
        let mut cur_text = String::new();
        for (&top_c, &bot_c) in top_row.iter().zip(bot_row.iter()).take(inner_w) {
            let fg = top_c.unwrap_or(EMPTY_BG);
            let bg = bot_c.unwrap_or(EMPTY_BG);
            if (fg != cur_fg || bg != cur_bg) && !cur_text.is_empty() {
                spans.push(Span::styled(
                    std::mem::take(&mut cur_text),
                    Style::default().fg(cur_fg).bg(cur_bg),
                ));
            }
            cur_fg = fg;
            cur_bg = bg;
            cur_text.push(HALF_TOP);
        }
        if !cur_text.is_empty() {
            spans.push(Span::styled(
                cur_text,
                Style::default().fg(cur_fg).bg(cur_bg),
            ));
        }
        spans.push(frame_span(BORDER_V.to_string()));

        frame.render_widget(
            Paragraph::new(Line::from(spans)),
            Rect::new(x_off, row_y, render_w, 1),
        );
    }

    let bot_y = y_off + 1 + content_rows as u16;
    if bot_y < area.y + area.height {
        let mut s = String::new();
        s.push(BORDER_BL);
        s.extend(std::iter::repeat_n(BORDER_H, inner_w));
        s.push(BORDER_BR);
        frame.render_widget(
            Paragraph::new(Line::from(frame_span(s))),
            Rect::new(x_off, bot_y, render_w, 1),
        );
    }
}

fn label_line<'a>(label: &'a str, value: String, color: Color) -> Line<'a> {
    Line::from(vec![
        Span::styled(label, Style::default().fg(Color::DarkGray)),
        Span::styled(value, Style::default().fg(color)),
    ])
}

fn legend_line(color: Color, name: &str) -> Line<'_> {
    Line::from(vec![
        Span::styled(format!(" {FULL_BLOCK} "), Style::default().fg(color)),
        Span::styled(name, Style::default().fg(Color::DarkGray)),
    ])
}

fn render_info_panel(frame: &mut Frame, area: Rect, snap: &Snapshot) {
    let inner = render_info_panel_frame(frame, area, snap.hud);

    let mut lines: Vec<Line> = match snap.hud {
        Hud::Endless { length } => vec![
            label_line("Mode: ", "Endless".to_string(), Color::Cyan),
            label_line("Length: ", length.to_string(), Color::White),
        ],
        Hud::Level {
            level,
            max_level,
            name,
            food_eaten,
            target,
            ..
        } => vec![
            label_line("Mode: ", "Levels".to_string(), Color::Cyan),
            Line::from(Span::styled(
                format!("Level {}/{}", level, max_level),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(name, Style::default().fg(Color::Yellow))),
            label_line("Food: ", format!("{}/{}", food_eaten, target), Color::White),
        ],
    };

    lines.extend([
        Line::from(""),
        label_line(
            "Grid: ",
            format!("{}x{}", snap.width, snap.height),
            Color::White,
        ),
        label_line("Speed: ", format!("{}ms", snap.move_interval_ms), Color::White),
        label_line("Moves: ", snap.tick_count.to_string(), Color::White),
        Line::from(""),
        Line::from(Span::styled(
            "Legend:",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        legend_line(HEAD_COLOR, "Head"),
        legend_line(
            Color::Rgb(
                BODY_BRIGHT.0 as u8,
                BODY_BRIGHT.1 as u8,
                BODY_BRIGHT.2 as u8,
            ),
            "Body",
        ),
        legend_line(FOOD_COLOR, "Food"),
    ]);
    if snap.grid.is_some() {
        lines.push(legend_line(WALL_COLOR, "Wall"));
    }

    frame.render_widget(Paragraph::new(lines), inner);
}

/// Banner over the bottom of the play field once the round has ended.
fn render_outcome_banner(frame: &mut Frame, area: Rect, snap: &Snapshot) {
    let (result_type, title, message, hint) = match (snap.status, snap.hud) {
        (GameStatus::Running, _) => return,
        (GameStatus::GameOver, Hud::Endless { length }) => (
            GameResultType::Loss,
            "GAME OVER",
            format!("final length {}", length),
            "[R] Restart",
        ),
        (
            GameStatus::GameOver,
            Hud::Level {
                level,
                food_eaten,
                target,
                ..
            },
        ) => (
            GameResultType::Loss,
            "GAME OVER",
            format!("level {} at {}/{} food", level, food_eaten, target),
            "[R] Retry level",
        ),
        (GameStatus::LevelCleared, Hud::Level { level, name, .. }) => (
            GameResultType::Win,
            "LEVEL CLEARED",
            format!("{} ({}) done", name, level),
            "[N] Next level",
        ),
        (GameStatus::AllLevelsCleared, _) => (
            GameResultType::Win,
            "ALL LEVELS CLEARED",
            "the campaign is yours".to_string(),
            "[R] Play again",
        ),
        (GameStatus::LevelCleared, Hud::Endless { .. }) => return,
    };

    render_game_over_banner(frame, area, result_type, title, &message, hint);
}
