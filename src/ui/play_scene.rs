//! Scene rendering: samples the logical viewport into terminal cells.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::game::Scene;

/// Render the full game view: bordered play area, status bar, and the
/// end-of-run overlay once the scroll has frozen.
pub fn render_scene(frame: &mut Frame, area: Rect, scene: &Scene, best: u32) {
    let block = Block::default()
        .title(" Skyhopper ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    // Play area (top) + status bar (bottom 2 lines)
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(10), Constraint::Length(2)])
        .split(inner);

    render_play_area(frame, chunks[0], scene);
    render_status(frame, chunks[1], scene, best);

    if scene.is_over() {
        render_game_over(frame, area, scene.score().whole(), best);
    }
}

/// Sample each cell's center in world coordinates: bird over pipes over
/// clouds over sky.
fn render_play_area(frame: &mut Frame, area: Rect, scene: &Scene) {
    let width = area.width as usize;
    let height = area.height as usize;

    if width == 0 || height == 0 {
        return;
    }

    let viewport = scene.viewport();
    let x_scale = viewport.width / width as f64;
    let y_scale = viewport.height / height as f64;

    let player_bounds = scene.player().bounds();
    let bird_vy = scene.player().body().velocity.y;
    let bird_glyph = if bird_vy < -60.0 {
        "▲" // Flapping up
    } else if bird_vy > 240.0 {
        "▼" // Falling fast
    } else {
        "►" // Gliding
    };

    let mut lines = Vec::with_capacity(height);
    for row in 0..height {
        let wy = (row as f64 + 0.5) * y_scale;
        let mut spans = Vec::with_capacity(width);

        for col in 0..width {
            let wx = (col as f64 + 0.5) * x_scale;

            if player_bounds.contains(wx, wy) {
                spans.push(Span::styled(
                    bird_glyph,
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                ));
            } else if scene
                .pipes()
                .obstacles()
                .iter()
                .any(|o| o.bounds().contains(wx, wy))
            {
                spans.push(Span::styled("█", Style::default().fg(Color::Green)));
            } else if scene
                .clouds()
                .clouds()
                .iter()
                .any(|c| c.bounds().contains(wx, wy))
            {
                spans.push(Span::styled("░", Style::default().fg(Color::White)));
            } else {
                spans.push(Span::raw(" "));
            }
        }

        lines.push(Line::from(spans));
    }

    frame.render_widget(Paragraph::new(lines), area);
}

/// Two-line status strip: run state on top, key hints underneath.
fn render_status(frame: &mut Frame, area: Rect, scene: &Scene, best: u32) {
    if area.height < 1 {
        return;
    }

    let score = scene.score().whole();
    let (message, color, hints) = if scene.is_over() {
        (
            format!("Run over - Score: {}", score),
            Color::Red,
            "[r] Restart  [q] Quit",
        )
    } else {
        (
            format!("Score: {}  Best: {}", score, best),
            Color::Green,
            "[Space] Flap  [q] Quit",
        )
    };

    let status = Paragraph::new(message)
        .style(Style::default().fg(color))
        .alignment(Alignment::Center);
    frame.render_widget(status, Rect { height: 1, ..area });

    if area.height >= 2 {
        let hint_line = Paragraph::new(hints)
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center);
        frame.render_widget(
            hint_line,
            Rect {
                y: area.y + 1,
                height: 1,
                ..area
            },
        );
    }
}

/// Full-screen end-of-run overlay.
fn render_game_over(frame: &mut Frame, area: Rect, score: u32, best: u32) {
    frame.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Red));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let content_height: u16 = 7;
    let y_offset = inner.y + (inner.height.saturating_sub(content_height)) / 2;

    let lines = vec![
        Line::from(Span::styled(
            "CRASH!",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!("You cleared {} pipes.", score),
            Style::default().fg(Color::White),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!("Best: {}", best),
            Style::default().fg(Color::Cyan),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "[r] Restart  [q] Quit",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let text = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(
        text,
        Rect::new(inner.x, y_offset, inner.width, content_height),
    );
}
