//! TUI (Terminal User Interface) module for Word Scramble
//!
//! This module provides an interactive terminal interface using Ratatui.
//!
//! # Layout
//! Root word title, input field, used-word list with length badges, score
//! bar and key instructions. Rejections open a modal alert on top.
//!
//! # State Machine
//! - `Typing` → (rejection) → `ShowingAlert` → back to `Typing`

use crate::engine::{Accepted, Alert, GameSnapshot};
use crate::game_state::{GameInterface, UserAction};
use crate::{debug_log, info_log};
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph, Wrap},
};
use std::io;

const MAX_INPUT_LENGTH: usize = 32;
const EVENT_POLL_TIMEOUT_MS: u64 = 100;
const ALERT_WIDTH_PERCENT: u16 = 60;
const ALERT_HEIGHT: u16 = 7;

// Style constants for consistent UI
const HEADER_STYLE: Style = Style::new().fg(Color::Cyan).add_modifier(Modifier::BOLD);
const ERROR_STYLE: Style = Style::new().fg(Color::Red).add_modifier(Modifier::BOLD);
const SUCCESS_STYLE: Style = Style::new().fg(Color::Green).add_modifier(Modifier::BOLD);
const BADGE_STYLE: Style = Style::new().fg(Color::Black).bg(Color::Cyan);
const MESSAGE_STYLE: Style = Style::new().fg(Color::Cyan);

#[derive(Debug)]
enum TuiState {
    Typing,
    ShowingAlert(Alert),
}

/// Context for rendering the UI - groups related parameters to avoid too many function arguments.
struct RenderContext<'a> {
    snapshot: &'a GameSnapshot,
    current_input: &'a str,
    state: &'a TuiState,
    message: &'a str,
}

/// Main TUI interface component.
///
/// Manages terminal rendering, input handling, and game state display.
pub struct TuiInterface {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
    snapshot: GameSnapshot,
    current_input: String,
    state: TuiState,
    message: String,
}

impl TuiInterface {
    pub fn new() -> Result<Self, io::Error> {
        info_log!("TuiInterface::new() - Initializing TUI");
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, cursor::Hide)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;
        info_log!("Terminal setup complete");

        Ok(Self {
            terminal,
            snapshot: GameSnapshot::default(),
            current_input: String::new(),
            state: TuiState::Typing,
            message: String::new(),
        })
    }

    pub fn cleanup(&mut self) -> Result<(), io::Error> {
        disable_raw_mode()?;
        execute!(
            self.terminal.backend_mut(),
            LeaveAlternateScreen,
            cursor::Show
        )?;
        Ok(())
    }

    fn draw(&mut self) -> Result<(), io::Error> {
        let ctx = RenderContext {
            snapshot: &self.snapshot,
            current_input: &self.current_input,
            state: &self.state,
            message: &self.message,
        };

        self.terminal.draw(|f| {
            Self::render_static(f, &ctx);
        })?;
        Ok(())
    }

    /// Log and handle draw errors appropriately
    fn draw_or_log(&mut self) {
        if let Err(e) = self.draw() {
            debug_log!("Draw error: {}", e);
        }
    }

    fn render_static(f: &mut Frame, ctx: &RenderContext) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Root word
                Constraint::Length(3), // Input
                Constraint::Min(5),    // Used words
                Constraint::Length(3), // Score and messages
                Constraint::Length(3), // Instructions
            ])
            .split(f.area());

        Self::render_title(f, chunks[0], &ctx.snapshot.root_word);
        Self::render_input(f, chunks[1], ctx.current_input);
        Self::render_used_words(f, chunks[2], &ctx.snapshot.used_words);
        Self::render_score(f, chunks[3], ctx.snapshot.score, ctx.message);
        Self::render_instructions(f, chunks[4], ctx.state);

        if let TuiState::ShowingAlert(alert) = ctx.state {
            Self::render_alert(f, alert);
        }
    }

    fn render_title(f: &mut Frame, area: Rect, root_word: &str) {
        let title = Paragraph::new(root_word.to_string())
            .style(HEADER_STYLE)
            .block(Block::default().title("Word Scramble").borders(Borders::ALL));
        f.render_widget(title, area);
    }

    fn render_input(f: &mut Frame, area: Rect, current_input: &str) {
        let line = Line::from(vec![
            Span::raw(current_input.to_string()),
            Span::styled("_", Style::default().fg(Color::DarkGray)),
        ]);
        let paragraph = Paragraph::new(line)
            .block(Block::default().title("Enter your word").borders(Borders::ALL));
        f.render_widget(paragraph, area);
    }

    fn render_used_words(f: &mut Frame, area: Rect, used_words: &[String]) {
        let items: Vec<ListItem> = used_words
            .iter()
            .map(|word| {
                ListItem::new(Line::from(vec![
                    Span::styled(format!(" {} ", word.chars().count()), BADGE_STYLE),
                    Span::raw(" "),
                    Span::raw(word.clone()),
                ]))
            })
            .collect();
        let list = List::new(items).block(
            Block::default()
                .title(format!("Words ({})", used_words.len()))
                .borders(Borders::ALL),
        );
        f.render_widget(list, area);
    }

    fn render_score(f: &mut Frame, area: Rect, score: usize, message: &str) {
        let mut spans = vec![Span::styled(format!("Score: {score}"), SUCCESS_STYLE)];
        if !message.is_empty() {
            spans.push(Span::raw("   "));
            spans.push(Span::styled(message.to_string(), MESSAGE_STYLE));
        }
        let paragraph = Paragraph::new(Line::from(spans))
            .block(Block::default().borders(Borders::ALL).title("Status"));
        f.render_widget(paragraph, area);
    }

    fn render_instructions(f: &mut Frame, area: Rect, state: &TuiState) {
        let text = match state {
            TuiState::Typing => "Type a word | ENTER: Submit | CTRL+N: New Game | ESC: Quit",
            TuiState::ShowingAlert(_) => "ENTER / ESC: OK",
        };

        let paragraph = Paragraph::new(text)
            .style(Style::default().fg(Color::Gray))
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(paragraph, area);
    }

    fn render_alert(f: &mut Frame, alert: &Alert) {
        let area = centered_rect(ALERT_WIDTH_PERCENT, ALERT_HEIGHT, f.area());
        let lines = vec![
            Line::from(""),
            Line::from(alert.message.clone()),
            Line::from(""),
            Line::from(Span::styled("[ OK ]", HEADER_STYLE)),
        ];
        let paragraph = Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .title(Span::styled(alert.title.clone(), ERROR_STYLE))
                    .borders(Borders::ALL),
            );
        f.render_widget(Clear, area);
        f.render_widget(paragraph, area);
    }

    fn handle_input(&mut self) -> Result<Option<UserAction>, io::Error> {
        if !event::poll(std::time::Duration::from_millis(EVENT_POLL_TIMEOUT_MS))? {
            return Ok(None);
        }

        match event::read()? {
            // Only process Press events, ignore Release and Repeat to avoid double input
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                debug_log!(
                    "handle_input() - Key event received: code={:?}, modifiers={:?}",
                    key.code,
                    key.modifiers
                );
                match self.state {
                    TuiState::Typing => Ok(self.handle_typing_input(key)),
                    TuiState::ShowingAlert(_) => {
                        self.handle_alert_input(key);
                        Ok(None)
                    }
                }
            }
            event => {
                debug_log!("handle_input() - Ignoring event: {:?}", event);
                Ok(None)
            }
        }
    }

    fn handle_typing_input(&mut self, key: KeyEvent) -> Option<UserAction> {
        let has_ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        let has_alt = key.modifiers.contains(KeyModifiers::ALT);

        match key.code {
            KeyCode::Char('n' | 'N') if has_ctrl => {
                info_log!("handle_typing_input() - CTRL+N pressed, returning NewGame");
                return Some(UserAction::NewGame);
            }
            KeyCode::Char('c') if has_ctrl => return Some(UserAction::Exit),
            KeyCode::Char(c)
                if !has_ctrl
                    && !has_alt
                    && (c.is_alphabetic() || c == ' ')
                    && self.current_input.chars().count() < MAX_INPUT_LENGTH =>
            {
                self.current_input.push(c);
            }
            KeyCode::Backspace => {
                self.current_input.pop();
            }
            KeyCode::Enter => {
                let text = self.current_input.clone();
                info_log!("handle_typing_input() - Submitting '{}'", text);
                return Some(UserAction::Submit(text));
            }
            KeyCode::Esc => {
                info_log!("handle_typing_input() - ESC pressed, returning Exit");
                return Some(UserAction::Exit);
            }
            _ => {
                debug_log!("handle_typing_input() - Ignoring key: {:?}", key.code);
            }
        }
        None
    }

    fn handle_alert_input(&mut self, key: KeyEvent) {
        if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
            self.state = TuiState::Typing;
        }
    }
}

/// Rectangle of `percent_x` width and fixed `height`, centred in `area`.
fn centered_rect(percent_x: u16, height: u16, area: Rect) -> Rect {
    let width = u16::try_from(u32::from(area.width) * u32::from(percent_x.min(100)) / 100)
        .unwrap_or(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

impl GameInterface for TuiInterface {
    fn read_action(&mut self) -> Option<UserAction> {
        loop {
            if self.draw().is_err() {
                info_log!("read_action() - Draw failed, returning Exit");
                return Some(UserAction::Exit);
            }

            match self.handle_input() {
                Ok(Some(action)) => return Some(action),
                Ok(None) => {}
                Err(e) => {
                    info_log!("read_action() - Input error {}, returning Exit", e);
                    return Some(UserAction::Exit);
                }
            }
        }
    }

    fn display_game(&mut self, snapshot: &GameSnapshot) {
        self.snapshot.clone_from(snapshot);
        // The input field is bound to the engine's pending input
        self.current_input.clone_from(&snapshot.pending_input);
        self.draw_or_log();
    }

    fn display_accepted(&mut self, accepted: &Accepted) {
        self.message = format!("+{} for '{}'", accepted.points, accepted.word);
    }

    fn display_rejection(&mut self, alert: &Alert) {
        self.message.clear();
        self.state = TuiState::ShowingAlert(alert.clone());
    }

    fn display_new_game(&mut self, root_word: &str) {
        self.state = TuiState::Typing;
        self.message = format!("New game: build words from '{root_word}'");
        self.draw_or_log();
    }

    fn display_exit_message(&mut self) {
        self.message = "Exiting...".to_string();
        self.draw_or_log();
    }
}

impl Drop for TuiInterface {
    fn drop(&mut self) {
        let _ = self.cleanup();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_rect_small_area_is_clamped() {
        let area = Rect::new(2, 3, 10, 4);
        let rect = centered_rect(60, 7, area);
        assert_eq!(rect.height, 4);
        assert_eq!(rect.width, 6);
        assert_eq!(rect.x, 4);
        assert_eq!(rect.y, 3);
    }

    #[test]
    fn test_centered_rect_on_very_wide_terminal() {
        let area = Rect {
            x: 0,
            y: 0,
            width: 2000,
            height: 30,
        };
        let rect = centered_rect(60, 7, area);
        assert_eq!(rect.width, 1200);
        assert_eq!(rect.x, 400);
        assert!(rect.right() <= area.right());
    }

    #[test]
    fn test_centered_rect_is_inside_area() {
        let area = Rect::new(0, 0, 100, 40);
        let rect = centered_rect(60, 7, area);
        assert_eq!(rect.height, 7);
        assert_eq!(rect.width, 60);
        assert!(rect.x >= area.x && rect.right() <= area.right());
        assert!(rect.y >= area.y && rect.bottom() <= area.bottom());
    }
}
