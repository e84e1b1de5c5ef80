use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::game::{Direction as MoveDirection, GameSnapshot, GameStatus, Position};
use crate::score::ScoreSummary;

/// Projects a game snapshot onto the terminal. Pure: reads the snapshot,
/// never feeds anything back into the simulation.
pub struct Renderer;

impl Renderer {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, snapshot: &GameSnapshot<'_>, summary: &ScoreSummary) {
        let chunks = Layout::vertical([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Game area
            Constraint::Length(3), // Footer
        ])
        .split(frame.area());

        let stats = self.render_stats(snapshot, summary);
        frame.render_widget(stats, chunks[0]);

        // Center the game area horizontally
        let game_area = Layout::horizontal([
            Constraint::Percentage(10),
            Constraint::Percentage(80),
            Constraint::Percentage(10),
        ])
        .split(chunks[1])[1];

        match snapshot.status {
            GameStatus::Waiting => {
                frame.render_widget(self.render_waiting(), game_area);
            }
            GameStatus::Started => {
                frame.render_widget(self.render_grid(game_area, snapshot), game_area);
            }
            GameStatus::GameOver => {
                frame.render_widget(self.render_game_over(summary), game_area);
            }
            GameStatus::GameWon => {
                frame.render_widget(self.render_game_won(summary), game_area);
            }
        }

        frame.render_widget(self.render_controls(snapshot.status), chunks[2]);
    }

    fn head_glyph(direction: MoveDirection) -> &'static str {
        match direction {
            MoveDirection::Up => "▲ ",
            MoveDirection::Down => "▼ ",
            MoveDirection::Left => "◀ ",
            MoveDirection::Right => "▶ ",
        }
    }

    fn render_grid(&self, _area: Rect, snapshot: &GameSnapshot<'_>) -> Paragraph<'_> {
        let head = snapshot.snake_body.first().copied();
        let tail = if snapshot.snake_body.len() > 1 {
            snapshot.snake_body.last().copied()
        } else {
            None
        };

        let mut lines = Vec::with_capacity(snapshot.grid.rows);

        for r in 0..snapshot.grid.rows as i32 {
            let mut spans = Vec::with_capacity(snapshot.grid.cols);

            for c in 0..snapshot.grid.cols as i32 {
                let pos = Position::new(r, c);

                let cell = if Some(pos) == head {
                    Span::styled(
                        Self::head_glyph(snapshot.head_direction),
                        Style::default()
                            .fg(Color::Cyan)
                            .add_modifier(Modifier::BOLD),
                    )
                } else if Some(pos) == tail {
                    Span::styled(
                        Self::head_glyph(snapshot.tail_direction),
                        Style::default().fg(Color::Green),
                    )
                } else if snapshot.snake_body.contains(&pos) {
                    Span::styled("■ ", Style::default().fg(Color::Green))
                } else if snapshot.food.contains(&pos) {
                    Span::styled(
                        "● ",
                        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                    )
                } else {
                    Span::styled(". ", Style::default().fg(Color::DarkGray))
                };

                spans.push(cell);
            }

            lines.push(Line::from(spans));
        }

        let title = if snapshot.paused {
            " Snake (Paused) "
        } else {
            " Snake "
        };
        let border_color = if snapshot.paused {
            Color::Yellow
        } else {
            Color::White
        };

        Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Double)
                    .border_style(Style::default().fg(border_color))
                    .title(title),
            )
            .alignment(Alignment::Center)
    }

    fn render_stats(&self, snapshot: &GameSnapshot<'_>, summary: &ScoreSummary) -> Paragraph<'_> {
        let total_secs = summary.elapsed.as_secs();
        let time = format!("{:02}:{:02}", total_secs / 60, total_secs % 60);

        let text = vec![Line::from(vec![
            Span::styled("Score: ", Style::default().fg(Color::Yellow)),
            Span::styled(
                snapshot.score.to_string(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("    "),
            Span::styled("Level: ", Style::default().fg(Color::Yellow)),
            Span::styled(snapshot.level.to_string(), Style::default().fg(Color::White)),
            Span::raw("    "),
            Span::styled("Time: ", Style::default().fg(Color::Yellow)),
            Span::styled(time, Style::default().fg(Color::White)),
            Span::raw("    "),
            Span::styled("Keys: ", Style::default().fg(Color::Yellow)),
            Span::styled(
                summary.total_keystrokes.to_string(),
                Style::default().fg(Color::White),
            ),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }

    fn render_waiting(&self) -> Paragraph<'static> {
        let text = vec![
            Line::from(""),
            Line::from(vec![Span::styled(
                "VIM SNAKE",
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            )]),
            Line::from(""),
            Line::from(vec![
                Span::styled("Steer with ", Style::default().fg(Color::Gray)),
                Span::styled("h j k l", Style::default().fg(Color::Cyan)),
            ]),
            Line::from(""),
            Line::from(vec![
                Span::styled("Press ", Style::default().fg(Color::Gray)),
                Span::styled(
                    "Space",
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(" to start", Style::default().fg(Color::Gray)),
            ]),
        ];

        Paragraph::new(text).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Double),
        )
    }

    fn render_game_over(&self, summary: &ScoreSummary) -> Paragraph<'static> {
        let final_score = summary
            .final_score
            .map(|s| s.to_string())
            .unwrap_or_else(|| "-".to_string());

        let text = vec![
            Line::from(""),
            Line::from(vec![Span::styled(
                "GAME OVER",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            )]),
            Line::from(""),
            Line::from(vec![
                Span::styled("Final Score: ", Style::default().fg(Color::Yellow)),
                Span::styled(
                    final_score,
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(""),
            Line::from(vec![
                Span::styled("Press ", Style::default().fg(Color::Gray)),
                Span::styled(
                    "Space",
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(" to restart or ", Style::default().fg(Color::Gray)),
                Span::styled(
                    "Esc",
                    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                ),
                Span::styled(" to leave", Style::default().fg(Color::Gray)),
            ]),
        ];

        Paragraph::new(text).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Red)),
        )
    }

    fn render_game_won(&self, summary: &ScoreSummary) -> Paragraph<'static> {
        let final_score = summary
            .final_score
            .map(|s| s.to_string())
            .unwrap_or_else(|| "-".to_string());

        let text = vec![
            Line::from(""),
            Line::from(vec![Span::styled(
                "YOU WIN",
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            )]),
            Line::from(""),
            Line::from(vec![
                Span::styled("Final Score: ", Style::default().fg(Color::Yellow)),
                Span::styled(
                    final_score,
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(""),
            Line::from(vec![
                Span::styled("Press ", Style::default().fg(Color::Gray)),
                Span::styled(
                    "Space",
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(" to play again", Style::default().fg(Color::Gray)),
            ]),
        ];

        Paragraph::new(text).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Green)),
        )
    }

    fn render_controls(&self, status: GameStatus) -> Paragraph<'static> {
        let text = if status == GameStatus::Started {
            vec![Line::from(vec![
                Span::styled("hjkl", Style::default().fg(Color::Cyan)),
                Span::raw(" to steer | "),
                Span::styled("P", Style::default().fg(Color::Yellow)),
                Span::raw(" to pause | "),
                Span::styled("Q", Style::default().fg(Color::Red)),
                Span::raw(" to quit"),
            ])]
        } else {
            vec![Line::from(vec![
                Span::styled("Space", Style::default().fg(Color::Green)),
                Span::raw(" to start | "),
                Span::styled("Esc", Style::default().fg(Color::Red)),
                Span::raw(" to leave"),
            ])]
        };

        Paragraph::new(text).alignment(Alignment::Center)
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}
