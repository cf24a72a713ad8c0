//! Main TUI application state and logic

use crate::catalog::Lesson;
use crate::runner::{errors::RunnerError, Runner};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::io;
use std::time::{Duration, Instant};

/// Which pane is currently focused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusedPane {
    Board,
    State,
    Log,
}

impl FocusedPane {
    /// Move focus to the next pane (board -> state -> log)
    pub fn next(self) -> Self {
        match self {
            FocusedPane::Board => FocusedPane::State,
            FocusedPane::State => FocusedPane::Log,
            FocusedPane::Log => FocusedPane::Board,
        }
    }
}

/// The main application state
pub struct App {
    /// The lesson runner driving the step history
    pub runner: Runner,

    /// Catalogue entry being shown, for the pane title
    pub lesson: &'static Lesson,

    /// Currently focused pane
    pub focused_pane: FocusedPane,

    /// Per-pane scroll offsets
    pub board_scroll: usize,
    pub state_scroll: usize,
    pub log_scroll: usize,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,

    /// Whether auto-play mode is active
    pub is_playing: bool,

    /// Last time a step was taken in play mode
    pub last_play_time: Instant,

    /// Last time space was pressed (for debouncing)
    pub last_space_press: Instant,
}

/// Auto-play step interval
const PLAY_INTERVAL: Duration = Duration::from_millis(800);

impl App {
    /// Create a new app over a built runner
    pub fn new(runner: Runner, lesson: &'static Lesson) -> Self {
        App {
            runner,
            lesson,
            focused_pane: FocusedPane::Board,
            board_scroll: 0,
            state_scroll: 0,
            log_scroll: usize::MAX,
            should_quit: false,
            status_message: String::from("Ready!"),
            is_playing: false,
            last_play_time: Instant::now(),
            last_space_press: Instant::now()
                .checked_sub(Duration::from_secs(1))
                .unwrap_or_else(Instant::now),
        }
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            // Handle auto-play mode
            if self.is_playing && self.last_play_time.elapsed() >= PLAY_INTERVAL {
                if self.runner.step_forward().is_ok() {
                    self.status_message = "Playing...".to_string();
                    self.log_scroll = usize::MAX;
                } else {
                    self.is_playing = false;
                    self.status_message = "Playback complete".to_string();
                }
                self.last_play_time = Instant::now();
            }

            // Use poll with timeout to allow auto-play to work
            if event::poll(Duration::from_millis(50))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }
        }

        Ok(())
    }

    /// Render the UI
    fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        // Layout: board on the left, state + narration on the right,
        // status bar at the bottom.
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(size);

        let pane_area = main_chunks[0];
        let status_area = main_chunks[1];

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(pane_area);

        let right_rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
            .split(columns[1]);

        let snapshot = self.runner.current().clone();

        super::panes::render_board_pane(
            frame,
            columns[0],
            &snapshot.scene,
            self.lesson.title,
            self.focused_pane == FocusedPane::Board,
            &mut self.board_scroll,
        );

        super::panes::render_state_pane(
            frame,
            right_rows[0],
            &snapshot.scene,
            snapshot.phase,
            self.focused_pane == FocusedPane::State,
            &mut self.state_scroll,
        );

        super::panes::render_log_pane(
            frame,
            right_rows[1],
            &self.runner,
            self.focused_pane == FocusedPane::Log,
            &mut self.log_scroll,
        );

        super::panes::render_status_bar(
            frame,
            status_area,
            &self.status_message,
            self.runner.position(),
            self.runner.total_steps(),
            self.is_playing,
        );
    }

    /// Handle keyboard events
    fn handle_key_event(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.should_quit = true;
            }
            // Number keys step forward N times directly
            KeyCode::Char(c @ '1'..='9') => {
                self.is_playing = false;
                let n = c.to_digit(10).unwrap_or(1) as usize;
                let mut stepped = 0;
                for _ in 0..n {
                    if self.runner.step_forward().is_ok() {
                        stepped += 1;
                    } else {
                        break;
                    }
                }
                self.status_message = format!("Stepped forward {} step(s)", stepped);
                self.log_scroll = usize::MAX;
            }
            KeyCode::Tab => {
                self.focused_pane = self.focused_pane.next();
            }
            KeyCode::Left => {
                self.is_playing = false;
                self.step_backward();
            }
            KeyCode::Right => {
                self.is_playing = false;
                self.step_forward();
            }
            KeyCode::Up => match self.focused_pane {
                FocusedPane::Board => {
                    self.board_scroll = self.board_scroll.saturating_sub(1);
                }
                FocusedPane::State => {
                    self.state_scroll = self.state_scroll.saturating_sub(1);
                }
                FocusedPane::Log => {
                    self.log_scroll = self.log_scroll.saturating_sub(1);
                }
            },
            KeyCode::Down => match self.focused_pane {
                FocusedPane::Board => {
                    self.board_scroll = self.board_scroll.saturating_add(1);
                }
                FocusedPane::State => {
                    self.state_scroll = self.state_scroll.saturating_add(1);
                }
                FocusedPane::Log => {
                    self.log_scroll = self.log_scroll.saturating_add(1);
                }
            },
            KeyCode::Char(' ') => {
                // Toggle auto-play mode (with 200ms debounce to prevent key repeat spam)
                if self.last_space_press.elapsed() >= Duration::from_millis(200) {
                    self.last_space_press = Instant::now();
                    self.is_playing = !self.is_playing;
                    if self.is_playing {
                        self.last_play_time = Instant::now()
                            .checked_sub(PLAY_INTERVAL)
                            .unwrap_or_else(Instant::now);
                        self.status_message = "Playing...".to_string();
                    } else {
                        self.status_message = "Paused".to_string();
                    }
                }
            }
            KeyCode::Enter => {
                // Jump to the end of the run
                self.is_playing = false;
                match self.runner.run_to_end() {
                    Ok(()) => self.status_message = "Jumped to end".to_string(),
                    Err(e) => self.status_message = format!("Cannot finish run: {}", e),
                }
                self.log_scroll = usize::MAX;
            }
            KeyCode::Backspace => {
                // Jump to the start of the run
                self.is_playing = false;
                self.runner.rewind_to_start();
                self.status_message = "Jumped to start".to_string();
                self.log_scroll = usize::MAX;
            }
            _ => {}
        }
    }

    /// Step forward in the run
    fn step_forward(&mut self) {
        match self.runner.step_forward() {
            Ok(()) => {
                self.status_message = self.runner.current().narration.clone();
                self.log_scroll = usize::MAX;
            }
            Err(RunnerError::EndOfHistory) => {
                self.status_message = "Already at the end".to_string();
            }
            Err(e) => {
                self.status_message = format!("Error: {}", e);
            }
        }
    }

    /// Step backward in the run
    fn step_backward(&mut self) {
        match self.runner.step_backward() {
            Ok(()) => {
                self.status_message = self.runner.current().narration.clone();
                self.log_scroll = usize::MAX;
            }
            Err(RunnerError::StartOfHistory) => {
                self.status_message = "Already at the start".to_string();
            }
            Err(e) => {
                self.status_message = format!("Error: {}", e);
            }
        }
    }
}
