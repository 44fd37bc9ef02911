use anyhow::{Context, Result};
use chrono::{NaiveDateTime, Utc};
use chrono_tz::Tz;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};
use log::debug;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, List, ListItem, ListState, Paragraph},
    DefaultTerminal, Frame,
};
use std::sync::Arc;
use tokio::runtime::Runtime;

use crate::config::AppConfig;
use crate::models::{AdjustTarget, PrayerType, TimeField};
use crate::prayer_times::{
    AladhanClient, FetchDisposition, FetchReport, Fetcher, LocationSession, TimeOfDay,
};
use crate::tui::events::{Event, EventHandler};
use crate::tui::theme;
use crate::tui::widgets::{adjust, header, location, prayers, statusbar};
use crate::utils::format::{format_clock, parse_clock_input};

const FETCH_FAILED_NOTICE: &str = "Could not fetch prayer times. Please try again.";
const FETCH_FAILED_NOTICE_AR: &str = "حدث خطأ في جلب مواقيت الصلاة. الرجاء المحاولة مرة أخرى.";

#[derive(Debug, Clone, PartialEq)]
pub enum View {
    Board,
    Help,
}

#[derive(Debug, Clone, PartialEq)]
pub enum InputMode {
    Normal,
    EditTime,
    EditClock,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Picker {
    Country,
    City,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ClockMode {
    Live,
    Pinned(NaiveDateTime),
}

pub struct App {
    pub view: View,
    pub should_quit: bool,
    pub input_mode: InputMode,
    pub input_buffer: String,
    pub input_error: Option<String>,
    pub picker: Option<Picker>,
    pub picker_idx: usize,
    pub notice: Option<String>,

    pub session: LocationSession,
    pub focus_idx: usize,
    pub focus_field: TimeField,
    pub bulk_delta: i64,
    pub bulk_target: AdjustTarget,

    pub tz: Tz,
    pub clock: ClockMode,
    pub now: NaiveDateTime,

    fetcher: Fetcher<Event>,
}

impl App {
    pub fn new(config: &AppConfig, tz: Tz, fetcher: Fetcher<Event>) -> Self {
        let session = LocationSession::new(
            crate::models::COUNTRIES,
            &config.location.country,
            &config.location.city,
            config.api.method,
        );

        App {
            view: View::Board,
            should_quit: false,
            input_mode: InputMode::Normal,
            input_buffer: String::new(),
            input_error: None,
            picker: None,
            picker_idx: 0,
            notice: None,
            session,
            focus_idx: 0,
            focus_field: TimeField::Adhan,
            bulk_delta: 0,
            bulk_target: AdjustTarget::default(),
            tz,
            clock: ClockMode::Live,
            now: Utc::now().with_timezone(&tz).naive_local(),
            fetcher,
        }
    }

    fn local_now(&self) -> NaiveDateTime {
        Utc::now().with_timezone(&self.tz).naive_local()
    }

    fn focused_prayer(&self) -> PrayerType {
        PrayerType::ALL[self.focus_idx.min(PrayerType::ALL.len() - 1)]
    }

    /// Fetch for the current location, superseding anything in flight.
    pub fn start_fetch(&mut self) {
        let today = self.local_now().date();
        let ticket = self.session.begin_fetch(today);
        self.fetcher.start(ticket);
    }

    /// The manual refresh; ignored while a fetch is already running.
    pub fn refresh(&mut self) {
        if self.session.is_loading() {
            debug!("Refresh ignored, fetch already in flight");
            return;
        }
        self.start_fetch();
    }

    pub fn shutdown(&mut self) {
        self.fetcher.cancel();
    }

    pub fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key(key) => self.handle_key(key),
            Event::Tick => self.tick(),
            Event::Fetched(report) => self.handle_fetched(report),
        }
    }

    pub fn tick(&mut self) {
        if self.clock == ClockMode::Live {
            self.now = self.local_now();
        }
    }

    fn handle_fetched(&mut self, report: FetchReport) {
        let now = self.local_now();
        match self.session.complete_fetch(report.token, report.outcome, now) {
            FetchDisposition::Applied | FetchDisposition::Superseded => {}
            FetchDisposition::Failed(_) => {
                self.notice = Some(FETCH_FAILED_NOTICE.to_string());
            }
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        // Some terminals also report release and repeat events.
        if key.kind != KeyEventKind::Press {
            return;
        }
        if self.notice.is_some() {
            self.notice = None;
            return;
        }
        match self.input_mode {
            InputMode::EditTime => self.handle_time_input(key),
            InputMode::EditClock => self.handle_clock_input(key),
            InputMode::Normal => match (self.picker, self.view.clone()) {
                (Some(picker), _) => self.handle_picker_key(picker, key),
                (None, View::Help) => self.handle_help_key(key),
                (None, View::Board) => self.handle_board_key(key),
            },
        }
    }

    fn handle_board_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Char('?') => {
                self.view = View::Help;
            }
            KeyCode::Up => {
                self.focus_idx = self.focus_idx.saturating_sub(1);
            }
            KeyCode::Down => {
                if self.focus_idx + 1 < PrayerType::ALL.len() {
                    self.focus_idx += 1;
                }
            }
            KeyCode::Left | KeyCode::Right | KeyCode::Tab => {
                self.focus_field = self.focus_field.toggle();
            }
            KeyCode::Char('e') | KeyCode::Enter => {
                let current = self.session.table().get(self.focused_prayer()).get(self.focus_field);
                self.open_input(
                    InputMode::EditTime,
                    current.map(|t| t.to_string()).unwrap_or_default(),
                );
            }
            KeyCode::Char('c') => self.open_picker(Picker::Country),
            KeyCode::Char('v') => self.open_picker(Picker::City),
            KeyCode::Char('r') => self.refresh(),
            KeyCode::Char('+') | KeyCode::Char('=') => self.bulk_delta += 1,
            KeyCode::Char('-') => self.bulk_delta -= 1,
            KeyCode::Char('>') => self.bulk_delta += 5,
            KeyCode::Char('<') => self.bulk_delta -= 5,
            KeyCode::Char('a') => {
                self.bulk_target = self.bulk_target.next();
            }
            KeyCode::Char('b') => {
                if self.session.apply_bulk_adjustment(self.bulk_delta, self.bulk_target) {
                    self.bulk_delta = 0;
                }
            }
            KeyCode::Char('t') => {
                let prefill = self.now.format("%Y-%m-%d %H:%M:%S").to_string();
                self.open_input(InputMode::EditClock, prefill);
            }
            KeyCode::Char('T') => {
                self.clock = ClockMode::Live;
                self.now = self.local_now();
            }
            _ => {}
        }
    }

    fn handle_help_key(&mut self, key: KeyEvent) {
        if let KeyCode::Esc | KeyCode::Char('?') = key.code {
            self.view = View::Board;
        }
    }

    fn open_input(&mut self, mode: InputMode, prefill: String) {
        self.input_mode = mode;
        self.input_buffer = prefill;
        self.input_error = None;
    }

    fn close_input(&mut self) {
        self.input_mode = InputMode::Normal;
        self.input_buffer.clear();
        self.input_error = None;
    }

    fn open_picker(&mut self, picker: Picker) {
        let current = match picker {
            Picker::Country => {
                let code = self.session.selected_country();
                self.session.countries().iter().position(|c| c.code == code)
            }
            Picker::City => {
                if self.session.cities().is_empty() {
                    return;
                }
                let city = self.session.selected_city();
                self.session.cities().iter().position(|c| *c == city)
            }
        };
        self.picker = Some(picker);
        self.picker_idx = current.unwrap_or(0);
    }

    fn picker_len(&self, picker: Picker) -> usize {
        match picker {
            Picker::Country => self.session.countries().len(),
            Picker::City => self.session.cities().len(),
        }
    }

    fn handle_picker_key(&mut self, picker: Picker, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => {
                self.picker = None;
            }
            KeyCode::Up => {
                self.picker_idx = self.picker_idx.saturating_sub(1);
            }
            KeyCode::Down => {
                if self.picker_idx + 1 < self.picker_len(picker) {
                    self.picker_idx += 1;
                }
            }
            KeyCode::Enter => {
                self.picker = None;
                let changed = match picker {
                    Picker::Country => match self.session.countries().get(self.picker_idx) {
                        Some(country) => self.session.select_country(country.code),
                        None => false,
                    },
                    Picker::City => match self.session.cities().get(self.picker_idx) {
                        Some(city) => self.session.select_city(city),
                        None => false,
                    },
                };
                if changed {
                    self.start_fetch();
                }
            }
            _ => {}
        }
    }

    fn handle_time_input(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.close_input(),
            KeyCode::Enter => match self.input_buffer.parse::<TimeOfDay>() {
                Ok(time) => {
                    let prayer = self.focused_prayer();
                    self.session.edit_time(prayer, self.focus_field, time);
                    self.close_input();
                }
                Err(e) => {
                    self.input_error = Some(e.to_string());
                }
            },
            KeyCode::Backspace => {
                self.input_buffer.pop();
                self.input_error = None;
            }
            KeyCode::Char(c) if (c.is_ascii_digit() || c == ':') && self.input_buffer.len() < 5 => {
                self.input_buffer.push(c);
                self.input_error = None;
            }
            _ => {}
        }
    }

    fn handle_clock_input(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.close_input(),
            KeyCode::Enter => match parse_clock_input(&self.input_buffer) {
                Ok(dt) => {
                    self.clock = ClockMode::Pinned(dt);
                    self.now = dt;
                    self.close_input();
                }
                Err(e) => {
                    self.input_error = Some(e.to_string());
                }
            },
            KeyCode::Backspace => {
                self.input_buffer.pop();
                self.input_error = None;
            }
            KeyCode::Char(c) if c.is_ascii_digit() || matches!(c, '-' | ':' | ' ') => {
                self.input_buffer.push(c);
                self.input_error = None;
            }
            _ => {}
        }
    }

    pub fn draw(&self, frame: &mut Frame) {
        self.draw_board(frame);

        if self.view == View::Help {
            self.draw_help_overlay(frame);
        }
        if let Some(picker) = self.picker {
            self.draw_picker(frame, picker);
        }
        match self.input_mode {
            InputMode::EditTime => {
                let title = format!(
                    " {} {} ",
                    self.focused_prayer().display_name(),
                    self.focus_field.label()
                );
                self.draw_input(frame, &title, "Time (HH:MM): ");
            }
            InputMode::EditClock => {
                self.draw_input(frame, " Set Clock ", "YYYY-MM-DD HH:MM: ");
            }
            InputMode::Normal => {}
        }
        if let Some(notice) = &self.notice {
            self.draw_notice(frame, notice);
        }
    }

    fn draw_board(&self, frame: &mut Frame) {
        let area = frame.area();
        frame.render_widget(Block::default().style(theme::base()), area);

        let outer_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(5), // header
                Constraint::Min(0),    // body
                Constraint::Length(1), // status bar
            ])
            .split(area);

        let pinned = matches!(self.clock, ClockMode::Pinned(_));
        header::render(
            frame,
            outer_chunks[0],
            &format_clock(self.now),
            self.tz.name(),
            pinned,
        );
        statusbar::render(frame, outer_chunks[2]);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
            .split(outer_chunks[1]);

        let left_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(9), Constraint::Min(0)])
            .split(columns[0]);

        prayers::render(
            frame,
            left_chunks[0],
            self.session.table(),
            self.focus_idx,
            self.focus_field,
        );

        let right_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(8), Constraint::Length(8), Constraint::Min(0)])
            .split(columns[1]);

        location::render(frame, right_chunks[0], &self.session);
        adjust::render(frame, right_chunks[1], self.bulk_delta, self.bulk_target);
    }

    fn draw_help_overlay(&self, frame: &mut Frame) {
        let area = frame.area();
        let popup_area = Rect {
            x: area.width / 4,
            y: area.height / 6,
            width: area.width / 2,
            height: (area.height * 2 / 3).min(20),
        };

        frame.render_widget(Clear, popup_area);

        let bindings = [
            ("[↑ ↓]        ", "Choose prayer"),
            ("[← →] / Tab  ", "Switch Adhan / Iqama"),
            ("[e] / Enter  ", "Edit selected time"),
            ("[c] / [v]    ", "Pick country / city"),
            ("[r]          ", "Refresh from the service"),
            ("[- +] [< >]  ", "Bulk delta by 1 / 5 minutes"),
            ("[a] / [b]    ", "Cycle target / apply delta"),
            ("[t] / [T]    ", "Set clock / back to live"),
            ("[?]          ", "Toggle help"),
            ("[Esc]        ", "Quit"),
        ];

        let mut help_text = vec![
            Line::from(Span::styled(
                "  Keybindings",
                theme::gold().add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
        ];
        help_text.extend(bindings.iter().map(|(key, label)| {
            Line::from(vec![
                Span::styled(format!("  {}", key), theme::gold()),
                Span::styled(*label, theme::dim()),
            ])
        }));

        let block = Block::default()
            .title(Span::styled(" Help ", theme::gold()))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(theme::gold())
            .style(theme::surface());

        frame.render_widget(Paragraph::new(help_text).block(block), popup_area);
    }

    fn draw_picker(&self, frame: &mut Frame, picker: Picker) {
        let area = frame.area();
        let popup_area = Rect {
            x: area.width / 4,
            y: area.height / 8,
            width: area.width / 2,
            height: area.height * 3 / 4,
        };

        frame.render_widget(Clear, popup_area);

        let (title, names): (&str, Vec<&str>) = match picker {
            Picker::Country => (
                " Country ",
                self.session.countries().iter().map(|c| c.name).collect(),
            ),
            Picker::City => (" City ", self.session.cities().to_vec()),
        };

        let items: Vec<ListItem> = names
            .iter()
            .enumerate()
            .map(|(i, name)| {
                let line = if i == self.picker_idx {
                    Line::from(vec![
                        Span::styled("  ◉  ", theme::gold()),
                        Span::styled(*name, theme::gold().add_modifier(Modifier::BOLD)),
                    ])
                } else {
                    Line::from(vec![
                        Span::styled("  ○  ", theme::dim()),
                        Span::styled(*name, theme::dim()),
                    ])
                };
                ListItem::new(line)
            })
            .collect();

        let block = Block::default()
            .title(Span::styled(title, theme::gold()))
            .title_bottom(Span::styled(
                " ↑↓ navigate · Enter select · Esc back ",
                theme::dim(),
            ))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(theme::gold())
            .style(theme::surface());

        let mut state = ListState::default();
        state.select(Some(self.picker_idx));
        let list = List::new(items).block(block);
        frame.render_stateful_widget(list, popup_area, &mut state);
    }

    fn draw_input(&self, frame: &mut Frame, title: &str, prompt: &str) {
        let area = frame.area();
        let height = if self.input_error.is_some() { 7 } else { 5 };

        let popup_area = Rect {
            x: area.width / 4,
            y: (area.height / 2).saturating_sub(3),
            width: area.width / 2,
            height,
        };

        frame.render_widget(Clear, popup_area);

        let mut text = vec![
            Line::from(""),
            Line::from(vec![
                Span::styled(format!("  {}", prompt), theme::dim()),
                Span::styled(
                    self.input_buffer.as_str(),
                    theme::gold().add_modifier(Modifier::BOLD),
                ),
                Span::styled("█", theme::amber()), // block cursor
            ]),
            Line::from(""),
            Line::from(Span::styled("  [Enter] save  ·  [Esc] cancel", theme::dim())),
        ];

        if let Some(err) = &self.input_error {
            text.push(Line::from(""));
            text.push(Line::from(Span::styled(format!("  ✗ {}", err), theme::red())));
        }

        let border_style = if self.input_error.is_some() {
            theme::red()
        } else {
            theme::amber()
        };

        let block = Block::default()
            .title(Span::styled(title, theme::gold()))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(border_style)
            .style(theme::surface());

        frame.render_widget(Paragraph::new(text).block(block), popup_area);
    }

    fn draw_notice(&self, frame: &mut Frame, notice: &str) {
        let area = frame.area();
        let popup_area = Rect {
            x: area.width / 6,
            y: (area.height / 2).saturating_sub(4),
            width: area.width * 2 / 3,
            height: 8,
        };

        frame.render_widget(Clear, popup_area);

        let lines = vec![
            Line::from(""),
            Line::from(Span::styled(format!("  ✗ {}", notice), theme::red())),
            Line::from(Span::styled(format!("  {}", FETCH_FAILED_NOTICE_AR), theme::dim())),
            Line::from(""),
            Line::from(Span::styled("  [any key] close", theme::dim())),
        ];

        let block = Block::default()
            .title(Span::styled(" Prayer Times ", theme::gold()))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(theme::red())
            .style(theme::surface());

        frame.render_widget(Paragraph::new(lines).block(block), popup_area);
    }
}

/// Run the TUI event loop.
pub fn run(config: AppConfig, runtime: &Runtime) -> Result<()> {
    let tz = config.display.tz()?;
    let client = AladhanClient::new(&config.api).context("Building HTTP client")?;
    let events = EventHandler::new(config.display.tick_ms);
    let fetcher = Fetcher::new(runtime.handle().clone(), Arc::new(client), events.sender());

    let mut app = App::new(&config, tz, fetcher);
    app.start_fetch();

    let mut terminal = ratatui::init();
    let result = event_loop(&mut terminal, &mut app, &events);

    app.shutdown();
    ratatui::restore();
    result
}

fn event_loop(
    terminal: &mut DefaultTerminal,
    app: &mut App,
    events: &EventHandler,
) -> Result<()> {
    loop {
        terminal.draw(|frame| app.draw(frame))?;

        app.handle_event(events.next()?);
        if app.should_quit {
            return Ok(());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prayer_times::api::{DayTimings, FetchError, TimingsRequest, TimingsSource};
    use async_trait::async_trait;
    use crossterm::event::KeyModifiers;
    use pretty_assertions::assert_eq;
    use std::sync::mpsc::{self, Receiver};
    use std::time::Duration;

    struct FixedSource {
        fail: bool,
    }

    #[async_trait]
    impl TimingsSource for FixedSource {
        async fn timings(&self, request: &TimingsRequest) -> Result<DayTimings, FetchError> {
            if self.fail {
                return Err(FetchError::Api { code: 500 });
            }
            Ok(DayTimings {
                fajr: format!("04:40 ({})", request.city),
                dhuhr: "11:38".to_string(),
                asr: "14:49".to_string(),
                maghrib: "17:15".to_string(),
                isha: "18:32".to_string(),
            })
        }
    }

    fn app(runtime: &Runtime, fail: bool) -> (App, Receiver<Event>) {
        let (tx, rx) = mpsc::channel();
        let fetcher = Fetcher::new(runtime.handle().clone(), Arc::new(FixedSource { fail }), tx);
        let config = AppConfig::default();
        let tz = config.display.tz().unwrap();
        (App::new(&config, tz, fetcher), rx)
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_str(app: &mut App, s: &str) {
        for c in s.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    fn pump(app: &mut App, rx: &Receiver<Event>) {
        let event = rx.recv_timeout(Duration::from_secs(5)).unwrap();
        app.handle_event(event);
    }

    fn fajr(app: &App) -> (String, String) {
        let entry = app.session.table().get(PrayerType::Fajr);
        (
            entry.adhan.map(|t| t.to_string()).unwrap_or_default(),
            entry.iqama.map(|t| t.to_string()).unwrap_or_default(),
        )
    }

    #[test]
    fn bulk_keys_accumulate_and_apply() {
        let runtime = Runtime::new().unwrap();
        let (mut app, _rx) = app(&runtime, false);

        press(&mut app, KeyCode::Char('>'));
        press(&mut app, KeyCode::Char('+'));
        press(&mut app, KeyCode::Char('-'));
        press(&mut app, KeyCode::Char('>'));
        assert_eq!(app.bulk_delta, 10);

        press(&mut app, KeyCode::Char('a'));
        assert_eq!(app.bulk_target, AdjustTarget::Adhan);
        press(&mut app, KeyCode::Char('b'));

        assert_eq!(fajr(&app), ("05:40".to_string(), "05:45".to_string()));
        assert_eq!(app.bulk_delta, 0);
    }

    #[test]
    fn edit_rejects_bad_input_then_saves() {
        let runtime = Runtime::new().unwrap();
        let (mut app, _rx) = app(&runtime, false);

        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Char('e'));
        assert_eq!(app.input_mode, InputMode::EditTime);
        assert_eq!(app.input_buffer, "05:45");

        for _ in 0..5 {
            press(&mut app, KeyCode::Backspace);
        }
        type_str(&mut app, "99:99");
        press(&mut app, KeyCode::Enter);
        assert!(app.input_error.is_some());
        assert_eq!(app.input_mode, InputMode::EditTime);

        for _ in 0..5 {
            press(&mut app, KeyCode::Backspace);
        }
        type_str(&mut app, "06:05");
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.input_mode, InputMode::Normal);
        assert_eq!(fajr(&app), ("05:30".to_string(), "06:05".to_string()));
    }

    #[test]
    fn picking_a_country_fetches_its_first_city() {
        let runtime = Runtime::new().unwrap();
        let (mut app, rx) = app(&runtime, false);

        press(&mut app, KeyCode::Char('c'));
        assert_eq!(app.picker, Some(Picker::Country));
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.session.selected_country(), "SA");
        assert_eq!(app.session.selected_city(), "Mecca");
        assert!(app.session.is_loading());

        pump(&mut app, &rx);
        assert!(!app.session.is_loading());
        assert_eq!(fajr(&app), ("04:40".to_string(), "05:10".to_string()));
        assert!(app.session.last_fetched().is_some());
    }

    #[test]
    fn refresh_is_ignored_while_loading() {
        let runtime = Runtime::new().unwrap();
        let (mut app, rx) = app(&runtime, false);

        press(&mut app, KeyCode::Char('r'));
        press(&mut app, KeyCode::Char('r'));
        pump(&mut app, &rx);
        assert!(rx.recv_timeout(Duration::from_millis(200)).is_err());
    }

    #[test]
    fn failed_fetch_raises_notice_until_a_key() {
        let runtime = Runtime::new().unwrap();
        let (mut app, rx) = app(&runtime, true);
        let before = *app.session.table();

        app.start_fetch();
        pump(&mut app, &rx);
        assert_eq!(app.notice.as_deref(), Some(FETCH_FAILED_NOTICE));
        assert_eq!(*app.session.table(), before);

        press(&mut app, KeyCode::Char('b'));
        assert!(app.notice.is_none());
    }

    #[test]
    fn pinned_clock_survives_ticks() {
        let runtime = Runtime::new().unwrap();
        let (mut app, _rx) = app(&runtime, false);

        press(&mut app, KeyCode::Char('t'));
        app.input_buffer.clear();
        type_str(&mut app, "2026-01-02 03:04");
        press(&mut app, KeyCode::Enter);

        app.tick();
        assert_eq!(format_clock(app.now), "01/02/2026, 03:04:00 AM");

        press(&mut app, KeyCode::Char('T'));
        assert_eq!(app.clock, ClockMode::Live);
    }
}
