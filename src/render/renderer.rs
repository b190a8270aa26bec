use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
};

use crate::game::{Cell, GameState, ObstacleSet, Phase, Session};
use crate::metrics::GameMetrics;

/// Terminal columns used to draw one grid cell
pub const CELL_COLUMNS: u16 = 2;

/// What occupies a grid cell, in drawing priority order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellKind {
    Head,
    Body,
    Fruit,
    Wall,
    Empty,
}

impl CellKind {
    pub fn classify(state: &GameState, obstacles: &ObstacleSet, cell: Cell) -> Self {
        if cell == state.snake.head() {
            CellKind::Head
        } else if state.snake.body.contains(&cell) {
            CellKind::Body
        } else if cell == state.fruit.position {
            CellKind::Fruit
        } else if obstacles.occupies(cell) {
            CellKind::Wall
        } else {
            CellKind::Empty
        }
    }

    fn span(self) -> Span<'static> {
        match self {
            CellKind::Head => Span::styled(
                "■ ",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            CellKind::Body => Span::styled("□ ", Style::default().fg(Color::Green)),
            CellKind::Fruit => Span::styled(
                "● ",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ),
            CellKind::Wall => Span::styled("██", Style::default().fg(Color::Gray)),
            CellKind::Empty => Span::styled(". ", Style::default().fg(Color::DarkGray)),
        }
    }
}

pub struct Renderer;

impl Renderer {
    pub fn new() -> Self {
        Self
    }

    pub fn render<R>(&self, frame: &mut Frame, session: &Session<R>, metrics: &GameMetrics) {
        let state = session.state();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(0),    // Game area
                Constraint::Length(3), // Footer
            ])
            .split(frame.area());

        let stats = self.render_stats(state, metrics);
        frame.render_widget(stats, chunks[0]);

        let game_area = chunks[1];
        let grid = self.render_grid(session);
        frame.render_widget(grid, game_area);

        match state.phase {
            Phase::Playing => {}
            Phase::Paused => {
                let popup = centered_rect(24, 3, game_area);
                frame.render_widget(Clear, popup);
                frame.render_widget(self.render_paused(), popup);
            }
            Phase::GameOver => {
                let popup = centered_rect(40, 7, game_area);
                frame.render_widget(Clear, popup);
                frame.render_widget(self.render_game_over(state), popup);
            }
        }

        let controls = self.render_controls();
        frame.render_widget(controls, chunks[2]);
    }

    fn render_grid<R>(&self, session: &Session<R>) -> Paragraph<'static> {
        let grid = session.grid();
        let state = session.state();
        let obstacles = session.obstacles();

        let lines: Vec<Line> = (0..grid.height())
            .map(|y| {
                let spans: Vec<Span> = (0..grid.width())
                    .map(|x| CellKind::classify(state, obstacles, Cell::new(x, y)).span())
                    .collect();
                Line::from(spans)
            })
            .collect();

        Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Double)
                    .border_style(Style::default().fg(Color::White))
                    .title(" Snake "),
            )
            .alignment(Alignment::Center)
    }

    fn render_stats(&self, state: &GameState, metrics: &GameMetrics) -> Paragraph<'static> {
        let label = Style::default().fg(Color::Yellow);
        let value = Style::default().fg(Color::White);
        let current = Line::from(vec![
            Span::styled("Score: ", label),
            Span::styled(state.score.to_string(), value.add_modifier(Modifier::BOLD)),
            Span::raw("    "),
            Span::styled("High Score: ", label),
            Span::styled(state.high_score.to_string(), value),
            Span::raw("    "),
            Span::styled("Level: ", label),
            Span::styled(state.level.to_string(), value),
            Span::raw("    "),
            Span::styled("Time: ", label),
            Span::styled(metrics.format_time(), value),
        ]);
        let totals = Line::from(vec![
            Span::styled("Games: ", label),
            Span::styled(metrics.games_played.to_string(), value),
            Span::raw("    "),
            Span::styled("Fruits: ", label),
            Span::styled(metrics.fruits_eaten.to_string(), value),
            Span::raw("    "),
            Span::styled("Wall Resets: ", label),
            Span::styled(metrics.soft_resets.to_string(), value),
        ]);

        Paragraph::new(vec![current, totals]).alignment(Alignment::Center)
    }

    fn render_paused(&self) -> Paragraph<'static> {
        Paragraph::new(Line::from(Span::styled(
            "Paused",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL))
    }

    fn render_game_over(&self, state: &GameState) -> Paragraph<'static> {
        let text = vec![
            Line::from(vec![Span::styled(
                "GAME OVER",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            )]),
            Line::from(""),
            Line::from(vec![
                Span::styled("Final Score: ", Style::default().fg(Color::Yellow)),
                Span::styled(
                    state.score.to_string(),
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(""),
            Line::from(vec![
                Span::styled("Game Over. Press ", Style::default().fg(Color::Gray)),
                Span::styled(
                    "'R'",
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(" to restart.", Style::default().fg(Color::Gray)),
            ]),
        ];

        Paragraph::new(text).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Red)),
        )
    }

    fn render_controls(&self) -> Paragraph<'static> {
        let text = vec![Line::from(vec![
            Span::styled("↑↓←→", Style::default().fg(Color::Cyan)),
            Span::raw(" or "),
            Span::styled("WASD", Style::default().fg(Color::Cyan)),
            Span::raw(" to move | "),
            Span::styled("Space", Style::default().fg(Color::Yellow)),
            Span::raw(" to pause | "),
            Span::styled("R", Style::default().fg(Color::Green)),
            Span::raw(" to restart | "),
            Span::styled("Q", Style::default().fg(Color::Red)),
            Span::raw(" to quit"),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

/// A `width` x `height` rectangle in the middle of `area`, clipped to it
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
