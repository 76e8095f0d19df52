//! Interactive terminal view: a search box over the aggregated mission list.
//!
//! The view owns the terminal for its lifetime. Every keystroke in the search
//! box re-runs the filter against the full aggregated list; no network calls
//! happen here. Cards render for the current matches only, so the screen is
//! empty until the user types.

use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Alignment, Constraint, Layout, Position, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, List, ListState, Paragraph, Wrap};
use ratatui::{Frame, Terminal};

use crate::models::MissionRecord;
use crate::view::{copy_website, FilterView};

/// How long to wait for input before redrawing.
const POLL_INTERVAL: Duration = Duration::from_millis(250);

/// Terminal browser over an aggregated mission list.
pub struct BrowseApp {
    view: FilterView,
    input: String,
    selected: usize,
    description_scroll: u16,
    status: Option<String>,
    should_quit: bool,
}

impl BrowseApp {
    pub fn new(records: Vec<MissionRecord>) -> Self {
        Self {
            view: FilterView::new(records),
            input: String::new(),
            selected: 0,
            description_scroll: 0,
            status: None,
            should_quit: false,
        }
    }

    /// Take over the terminal and run the event loop until the user quits.
    ///
    /// Raw mode and the alternate screen are torn down before the result is
    /// returned, so a failing loop still leaves the terminal usable.
    pub fn run(mut self) -> anyhow::Result<()> {
        enable_raw_mode()?;
        io::stdout().execute(EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(io::stdout());
        let mut terminal = Terminal::new(backend)?;

        let result = self.event_loop(&mut terminal);

        disable_raw_mode()?;
        io::stdout().execute(LeaveAlternateScreen)?;
        result
    }

    fn event_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> anyhow::Result<()> {
        while !self.should_quit {
            terminal.draw(|frame| self.render(frame))?;

            if event::poll(POLL_INTERVAL)? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key(key);
                    }
                }
            }
        }
        Ok(())
    }

    // ============================================================
    // Input
    // ============================================================

    fn handle_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        self.status = None;
        match key.code {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('c') if ctrl => self.should_quit = true,
            KeyCode::Char('y') if ctrl => self.copy_selected(),
            KeyCode::Up => self.select_previous(),
            KeyCode::Down => self.select_next(),
            KeyCode::PageUp => {
                self.description_scroll = self.description_scroll.saturating_sub(4);
            }
            KeyCode::PageDown => {
                self.description_scroll = self.description_scroll.saturating_add(4);
            }
            KeyCode::Backspace => {
                self.input.pop();
                self.search_changed();
            }
            KeyCode::Char(c) if !ctrl => {
                self.input.push(c);
                self.search_changed();
            }
            _ => {}
        }
    }

    /// One keystroke changed the search text: recompute the displayed list
    /// and reset selection and scroll to the top of the new result.
    fn search_changed(&mut self) {
        self.view.on_search_change(&self.input);
        self.selected = 0;
        self.description_scroll = 0;
    }

    fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
        self.description_scroll = 0;
    }

    fn select_next(&mut self) {
        let shown = self.view.displayed().len();
        if shown > 0 && self.selected < shown - 1 {
            self.selected += 1;
            self.description_scroll = 0;
        }
    }

    fn copy_selected(&mut self) {
        let Some(record) = self.view.displayed().get(self.selected) else {
            return;
        };
        match copy_website(&record.website) {
            Ok(()) => self.status = Some(format!("Copied {}", record.website)),
            Err(e) => {
                tracing::warn!("Clipboard write failed: {}", e);
                self.status = Some("Could not copy website".to_string());
            }
        }
    }

    // ============================================================
    // Rendering
    // ============================================================

    fn render(&mut self, frame: &mut Frame) {
        let rows = Layout::vertical([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(frame.area());

        self.render_search(frame, rows[0]);
        self.render_body(frame, rows[1]);
        self.render_status(frame, rows[2]);
    }

    fn render_search(&self, frame: &mut Frame, area: Rect) {
        let search = Paragraph::new(self.input.as_str()).block(Block::bordered().title("Search"));
        frame.render_widget(search, area);
        frame.set_cursor_position(Position::new(
            area.x + 1 + self.input.chars().count() as u16,
            area.y + 1,
        ));
    }

    /// Busy indicator wins over the error notice, which wins over the cards.
    fn render_body(&self, frame: &mut Frame, area: Rect) {
        if self.view.is_searching() {
            let busy = Paragraph::new("Searching…").alignment(Alignment::Center);
            frame.render_widget(busy, area);
            return;
        }

        if let Some(message) = self.view.error_message() {
            let notice = Paragraph::new(message.to_string())
                .style(Style::default().fg(Color::Red))
                .alignment(Alignment::Center);
            frame.render_widget(notice, area);
            return;
        }

        if self.view.displayed().is_empty() {
            let hint = if self.input.is_empty() {
                format!("Type to search {} missions", self.view.total())
            } else {
                "No missions match".to_string()
            };
            let hint = Paragraph::new(hint)
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center);
            frame.render_widget(hint, area);
            return;
        }

        let panes = Layout::horizontal([Constraint::Length(34), Constraint::Min(0)]).split(area);
        self.render_list(frame, panes[0]);
        if let Some(record) = self.view.displayed().get(self.selected) {
            self.render_card(frame, panes[1], record);
        }
    }

    fn render_list(&self, frame: &mut Frame, area: Rect) {
        let items: Vec<Line> = self
            .view
            .displayed()
            .iter()
            .map(|record| Line::raw(record.mission_name.clone()))
            .collect();

        let list = List::new(items)
            .block(Block::bordered().title("Missions"))
            .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
            .highlight_symbol("» ");

        let mut state = ListState::default();
        state.select(Some(self.selected));
        frame.render_stateful_widget(list, area, &mut state);
    }

    /// One mission card: name, copy affordance, rocket, scrollable description.
    fn render_card(&self, frame: &mut Frame, area: Rect, record: &MissionRecord) {
        let block = Block::bordered().title(record.mission_name.clone());
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let rows = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(inner);

        let rocket = record.rocket_name.as_deref().unwrap_or("Unknown rocket");
        let rocket = Paragraph::new(rocket).style(Style::default().fg(Color::DarkGray));
        frame.render_widget(rocket, rows[0]);

        let website = Line::from(vec![
            Span::raw(record.website.clone()),
            Span::styled(
                "  (Ctrl-Y to copy)",
                Style::default().fg(Color::DarkGray),
            ),
        ]);
        frame.render_widget(Paragraph::new(website), rows[1]);

        let description = Paragraph::new(record.description.clone())
            .wrap(Wrap { trim: false })
            .scroll((self.description_scroll, 0));
        frame.render_widget(description, rows[2]);
    }

    fn render_status(&self, frame: &mut Frame, area: Rect) {
        let text = match &self.status {
            Some(status) => status.clone(),
            None if self.input.is_empty() => {
                "↑/↓ select · PgUp/PgDn scroll · Ctrl-Y copy website · Esc quit".to_string()
            }
            None => format!(
                "{} of {} missions shown",
                self.view.displayed().len(),
                self.view.total()
            ),
        };
        let status = Paragraph::new(text).style(Style::default().fg(Color::DarkGray));
        frame.render_widget(status, area);
    }
}
