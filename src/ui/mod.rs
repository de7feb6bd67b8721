//! Terminal rendering for the play screen.

pub mod canvas;

use canvas::Canvas;
use flappy::assets::Assets;
use flappy::constants::{LOST_TEXT, PAUSE_TEXT};
use flappy::game::{Overlay, Scene};
use flappy::input::{LOST_HINTS, PLAY_HINTS};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

const PAUSED_HINTS: &[(&str, &str)] = &[("[P]", "Resume"), ("[Q]", "Quit")];

/// Draw one frame: the composited play field, score, overlay banner and
/// status bar.
pub fn draw_game(frame: &mut Frame, scene: &Scene, assets: &Assets, best_score: u32) {
    let area = frame.size();
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Flappy Bird ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(2)])
        .split(inner);

    let field = render_play_field(frame, chunks[0], scene, assets);
    render_score(frame, field, scene);
    match scene.overlay {
        Some(Overlay::Paused) => render_banner(frame, field, PAUSE_TEXT, None),
        Some(Overlay::Lost) => {
            let detail = format!("Score {}  Best {}", scene.score, best_score);
            render_banner(frame, field, LOST_TEXT, Some(detail))
        }
        None => {}
    }
    render_status_bar(frame, chunks[1], scene.overlay);
}

/// Returns the rect actually covered by the picture.
fn render_play_field(frame: &mut Frame, area: Rect, scene: &Scene, assets: &Assets) -> Rect {
    if area.width == 0 || area.height == 0 {
        return area;
    }

    let canvas = Canvas::from_scene(scene, assets);
    let (cols, _) = canvas.fit(area.width, area.height);
    let lines = canvas.to_lines(area.width, area.height);

    let width = (cols as u16).min(area.width);
    let height = (lines.len() as u16).min(area.height);
    let field = Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    );
    frame.render_widget(Paragraph::new(lines), field);
    field
}

fn render_score(frame: &mut Frame, field: Rect, scene: &Scene) {
    if field.height == 0 {
        return;
    }
    let score = Paragraph::new(Span::styled(
        format!("{} ", scene.score_text()),
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    ))
    .alignment(Alignment::Right);
    frame.render_widget(score, Rect { height: 1, ..field });
}

fn render_banner(frame: &mut Frame, field: Rect, title: &str, detail: Option<String>) {
    let mut lines = vec![Line::from(Span::styled(
        title.to_string(),
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    ))];
    if let Some(detail) = detail {
        lines.push(Line::from(Span::styled(
            detail,
            Style::default().fg(Color::White),
        )));
    }

    let text_width = lines.iter().map(|l| l.width()).max().unwrap_or(0) as u16;
    let rect = centered(field, text_width + 4, lines.len() as u16 + 2);
    frame.render_widget(Clear, rect);
    let banner = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Yellow)),
        );
    frame.render_widget(banner, rect);
}

fn render_status_bar(frame: &mut Frame, area: Rect, overlay: Option<Overlay>) {
    if area.height < 1 {
        return;
    }
    let (status, colour, controls) = match overlay {
        None => ("Fly through the gaps", Color::Green, PLAY_HINTS),
        Some(Overlay::Paused) => ("Paused", Color::Yellow, PAUSED_HINTS),
        Some(Overlay::Lost) => ("Game over", Color::Red, LOST_HINTS),
    };

    let status_line = Paragraph::new(status)
        .style(Style::default().fg(colour))
        .alignment(Alignment::Center);
    frame.render_widget(status_line, Rect { height: 1, ..area });

    if area.height >= 2 {
        frame.render_widget(
            Paragraph::new(hint_line(controls)).alignment(Alignment::Center),
            Rect {
                y: area.y + 1,
                height: 1,
                ..area
            },
        );
    }
}

fn hint_line(controls: &[(&'static str, &'static str)]) -> Line<'static> {
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
    Line::from(spans)
}

/// `width` x `height` rect centred in `area`, clamped to fit.
fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use flappy::game::{Session, SessionState};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use ratatui::{backend::TestBackend, Terminal};

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        let buffer = terminal.backend().buffer();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer.get(x, y).symbol());
            }
            text.push('\n');
        }
        text
    }

    fn render(session: &Session<Assets, ChaCha8Rng>) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 40)).unwrap();
        terminal
            .draw(|frame| {
                draw_game(
                    frame,
                    &session.scene(),
                    session.sprites(),
                    session.best_score(),
                )
            })
            .unwrap();
        buffer_text(&terminal)
    }

    #[test]
    fn test_centered_clamps() {
        let area = Rect::new(10, 5, 20, 10);
        assert_eq!(centered(area, 4, 2), Rect::new(18, 9, 4, 2));
        assert_eq!(centered(area, 50, 50), area);
    }

    #[test]
    fn test_playing_frame_shows_score_and_hints() {
        let session = Session::new(Assets::builtin(), ChaCha8Rng::seed_from_u64(3));
        let text = render(&session);
        assert!(text.contains("SCORE: 0"));
        assert!(text.contains("Flap"));
        assert!(!text.contains(PAUSE_TEXT));
    }

    #[test]
    fn test_lost_frame_shows_banner_and_hints() {
        let mut session = Session::new(Assets::builtin(), ChaCha8Rng::seed_from_u64(3));
        session.world_mut().bird.y = 440.0;
        assert_eq!(session.tick(&[]), SessionState::Lost);

        let text = render(&session);
        assert!(text.contains(LOST_TEXT));
        assert!(text.contains("Play again"));
    }
}
