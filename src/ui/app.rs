use std::mem;

use anyhow::Result;
use crossterm::event::KeyCode;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap};
use ratatui::Frame;
use rusqlite::Connection;

use crate::models::Mezmur;
use crate::reader::Selection;
use crate::repo::Repository;
use crate::store::{effective_font_size, save_preferences, Preferences};

use super::helpers::{
    copy_to_clipboard, is_chorus_line, lyric_spacing, palette, surface_error, ContentSize, Palette,
};
use super::screens::{CollectionScreen, ReadingScreen};

/// Footer space reserved for status messages and instructions.
const FOOTER_HEIGHT: u16 = 3;
/// Minimum terminal width at which the reading view keeps its sidebar.
const SIDEBAR_BREAKPOINT: u16 = 100;
/// Sidebar column width when shown.
const SIDEBAR_WIDTH: u16 = 34;
/// Marker shown next to favorited hymns.
const FAVORITE_BADGE: &str = "★";

/// High-level navigation states. Keeping this explicit makes it easy to
/// reason about which rendering path runs and what keyboard shortcuts do.
enum Screen {
    Collection,
    Reading(ReadingScreen),
}

/// Which search box an active inline search is feeding.
enum SearchTarget {
    Collection,
    Sidebar,
}

/// State for an active inline search.
struct SearchState {
    target: SearchTarget,
    query: String,
}

/// Fine-grained modes scoped to the current screen.
enum Mode {
    Normal,
    Searching(SearchState),
}

/// Holds the footer message text plus its severity.
struct StatusMessage {
    text: String,
    kind: StatusKind,
}

/// Severity levels shown in the footer.
enum StatusKind {
    Info,
    Error,
}

impl StatusKind {
    fn style(&self) -> Style {
        match self {
            StatusKind::Info => Style::default().fg(ratatui::style::Color::Green),
            StatusKind::Error => Style::default().fg(ratatui::style::Color::Red),
        }
    }
}

/// Central application state shared across the TUI.
pub struct App {
    conn: Connection,
    repo: Repository,
    prefs: Preferences,
    selection: Selection,
    collection: CollectionScreen,
    screen: Screen,
    mode: Mode,
    status: Option<StatusMessage>,
}

impl App {
    pub fn new(conn: Connection, repo: Repository, prefs: Preferences) -> Self {
        let collection = CollectionScreen::new(&repo, &prefs);
        Self {
            conn,
            repo,
            prefs,
            selection: Selection::new(),
            collection,
            screen: Screen::Collection,
            mode: Mode::Normal,
            status: None,
        }
    }

    /// Advance time-based state. Called from the poll loop whether or not an
    /// input event arrived, so the copied indicator reverts on schedule.
    pub fn tick(&mut self) {
        if let Screen::Reading(reading) = &mut self.screen {
            reading.expire_copied();
        }
    }

    pub fn handle_key(&mut self, code: KeyCode) -> Result<bool> {
        let mut exit = false;
        let mut mode = mem::replace(&mut self.mode, Mode::Normal);

        mode = match mode {
            Mode::Normal => self.handle_normal_key(code, &mut exit)?,
            Mode::Searching(state) => self.handle_search(code, state)?,
        };

        self.mode = mode;
        Ok(exit)
    }

    fn handle_normal_key(&mut self, code: KeyCode, exit: &mut bool) -> Result<Mode> {
        match self.screen {
            Screen::Collection => self.handle_collection_key(code, exit),
            Screen::Reading(_) => self.handle_reading_key(code, exit),
        }
    }

    fn handle_collection_key(&mut self, code: KeyCode, exit: &mut bool) -> Result<Mode> {
        match code {
            KeyCode::Char('q') | KeyCode::Esc => {
                *exit = true;
            }
            KeyCode::Up => self.collection.move_selection(-1),
            KeyCode::Down => self.collection.move_selection(1),
            KeyCode::PageUp => self.collection.move_selection(-5),
            KeyCode::PageDown => self.collection.move_selection(5),
            KeyCode::Home => self.collection.select_first(),
            KeyCode::End => self.collection.select_last(),
            KeyCode::Enter => {
                if let Some(id) = self.collection.current_id() {
                    self.clear_status();
                    self.open_mezmur(id);
                } else {
                    self.set_status("No mezmur selected.", StatusKind::Error);
                }
            }
            KeyCode::Char('/') => {
                self.clear_status();
                return Ok(Mode::Searching(SearchState {
                    target: SearchTarget::Collection,
                    query: self.collection.query.clone(),
                }));
            }
            KeyCode::Char('f') | KeyCode::Char('F') => {
                let active = self
                    .collection
                    .toggle_favorites_only(&self.repo, &self.prefs);
                let message = if active {
                    "Showing favorites only."
                } else {
                    "Showing all mezmurs."
                };
                self.set_status(message, StatusKind::Info);
            }
            KeyCode::Char('b') | KeyCode::Char(' ') => {
                if let Some(id) = self.collection.current_id() {
                    self.toggle_favorite(id);
                } else {
                    self.set_status("No mezmur selected.", StatusKind::Error);
                }
            }
            KeyCode::Char('t') | KeyCode::Char('T') => self.toggle_theme(),
            KeyCode::Char('r') | KeyCode::Char('R') => self.open_random(),
            KeyCode::Char('+') => self.adjust_font_size(true),
            KeyCode::Char('-') => self.adjust_font_size(false),
            #[cfg(feature = "export")]
            KeyCode::Char('x') | KeyCode::Char('X') => self.export_favorites(),
            _ => {}
        }
        Ok(Mode::Normal)
    }

    fn handle_reading_key(&mut self, code: KeyCode, exit: &mut bool) -> Result<Mode> {
        match code {
            KeyCode::Char('q') => {
                *exit = true;
            }
            KeyCode::Esc | KeyCode::Backspace | KeyCode::Char('h') => self.close_reading(),
            KeyCode::Left | KeyCode::Char('p') => self.step_previous(),
            KeyCode::Right | KeyCode::Char('n') => self.step_next(),
            KeyCode::Up => {
                if let Screen::Reading(reading) = &mut self.screen {
                    reading.scroll_up(1);
                }
            }
            KeyCode::Down => {
                if let Screen::Reading(reading) = &mut self.screen {
                    reading.scroll_down(1);
                }
            }
            KeyCode::PageUp => {
                if let Screen::Reading(reading) = &mut self.screen {
                    reading.scroll_up(5);
                }
            }
            KeyCode::PageDown => {
                if let Screen::Reading(reading) = &mut self.screen {
                    reading.scroll_down(5);
                }
            }
            KeyCode::Char('/') => {
                self.clear_status();
                let query = match &self.screen {
                    Screen::Reading(reading) => reading.sidebar_query.clone(),
                    Screen::Collection => String::new(),
                };
                return Ok(Mode::Searching(SearchState {
                    target: SearchTarget::Sidebar,
                    query,
                }));
            }
            KeyCode::Char('b') | KeyCode::Char(' ') => {
                if let Some(id) = self.selection.open_id() {
                    self.toggle_favorite(id);
                }
            }
            KeyCode::Char('c') | KeyCode::Char('C') => self.copy_open_mezmur(),
            KeyCode::Char('t') | KeyCode::Char('T') => self.toggle_theme(),
            KeyCode::Char('r') | KeyCode::Char('R') => self.open_random(),
            KeyCode::Char('+') => self.adjust_font_size(true),
            KeyCode::Char('-') => self.adjust_font_size(false),
            _ => {}
        }
        Ok(Mode::Normal)
    }

    fn handle_search(&mut self, code: KeyCode, mut state: SearchState) -> Result<Mode> {
        match state.target {
            SearchTarget::Collection => {
                match code {
                    KeyCode::Esc => {
                        self.collection
                            .set_query(String::new(), &self.repo, &self.prefs);
                        return Ok(Mode::Normal);
                    }
                    KeyCode::Up => {
                        self.collection.move_selection(-1);
                        return Ok(Mode::Searching(state));
                    }
                    KeyCode::Down => {
                        self.collection.move_selection(1);
                        return Ok(Mode::Searching(state));
                    }
                    KeyCode::Home => {
                        self.collection.select_first();
                        return Ok(Mode::Searching(state));
                    }
                    KeyCode::End => {
                        self.collection.select_last();
                        return Ok(Mode::Searching(state));
                    }
                    KeyCode::Enter => {
                        if let Some(id) = self.collection.current_id() {
                            self.open_mezmur(id);
                            return Ok(Mode::Normal);
                        }
                        return Ok(Mode::Searching(state));
                    }
                    KeyCode::Backspace => {
                        state.query.pop();
                    }
                    KeyCode::Char(ch) if !ch.is_control() => {
                        state.query.push(ch);
                    }
                    _ => {}
                }

                self.collection
                    .set_query(state.query.clone(), &self.repo, &self.prefs);
                Ok(Mode::Searching(state))
            }
            SearchTarget::Sidebar => {
                let reading = match &mut self.screen {
                    Screen::Reading(r) => r,
                    Screen::Collection => return Ok(Mode::Normal),
                };

                match code {
                    KeyCode::Esc => {
                        reading.set_sidebar_query(String::new(), &self.repo);
                        return Ok(Mode::Normal);
                    }
                    KeyCode::Up => {
                        reading.move_sidebar_selection(-1);
                        return Ok(Mode::Searching(state));
                    }
                    KeyCode::Down => {
                        reading.move_sidebar_selection(1);
                        return Ok(Mode::Searching(state));
                    }
                    KeyCode::Enter => {
                        if let Some(id) = reading.sidebar_current_id() {
                            self.open_mezmur(id);
                            return Ok(Mode::Normal);
                        }
                        return Ok(Mode::Searching(state));
                    }
                    KeyCode::Backspace => {
                        state.query.pop();
                    }
                    KeyCode::Char(ch) if !ch.is_control() => {
                        state.query.push(ch);
                    }
                    _ => {}
                }

                reading.set_sidebar_query(state.query.clone(), &self.repo);
                Ok(Mode::Searching(state))
            }
        }
    }

    /// Open a hymn. Unvalidated by design: an id the repository does not
    /// know renders as an empty reading pane rather than an error.
    fn open_mezmur(&mut self, id: u32) {
        self.selection.select(id);
        match &mut self.screen {
            Screen::Reading(reading) => {
                reading.reset_scroll();
                reading.sync_sidebar_to(id);
            }
            Screen::Collection => {
                let mut reading = ReadingScreen::new(&self.repo);
                reading.sync_sidebar_to(id);
                self.screen = Screen::Reading(reading);
            }
        }
    }

    /// Back to the collection view. The open id does not survive this, per
    /// the ephemeral-selection contract.
    fn close_reading(&mut self) {
        self.selection.clear();
        self.screen = Screen::Collection;
        self.collection.apply_filter(&self.repo, &self.prefs);
    }

    fn step_next(&mut self) {
        self.selection.next(self.repo.max_id());
        self.after_step();
    }

    fn step_previous(&mut self) {
        self.selection.previous();
        self.after_step();
    }

    fn open_random(&mut self) {
        self.selection
            .random(&mut rand::thread_rng(), self.repo.max_id());
        if let Some(id) = self.selection.open_id() {
            self.clear_status();
            self.open_mezmur(id);
        }
    }

    fn after_step(&mut self) {
        if let Some(id) = self.selection.open_id() {
            if let Screen::Reading(reading) = &mut self.screen {
                reading.reset_scroll();
                reading.sync_sidebar_to(id);
            }
        }
    }

    fn toggle_favorite(&mut self, id: u32) {
        let added = self.prefs.toggle_favorite(id);
        self.persist_prefs();
        if matches!(self.screen, Screen::Collection) {
            self.collection.apply_filter(&self.repo, &self.prefs);
        }
        let message = if added {
            format!("Added mezmur {id} to favorites.")
        } else {
            format!("Removed mezmur {id} from favorites.")
        };
        self.set_status(message, StatusKind::Info);
    }

    fn toggle_theme(&mut self) {
        self.prefs.toggle_theme();
        self.persist_prefs();
    }

    fn adjust_font_size(&mut self, up: bool) {
        if up {
            self.prefs.increase_font_size();
        } else {
            self.prefs.decrease_font_size();
        }
        self.persist_prefs();
        self.set_status(
            format!("Reading size {}.", self.prefs.font_size),
            StatusKind::Info,
        );
    }

    fn copy_open_mezmur(&mut self) {
        let Some(mezmur) = self.selection.open_id().and_then(|id| self.repo.get(id)) else {
            return;
        };
        // Clipboard failures are environment noise, not domain errors.
        let _ = copy_to_clipboard(&mezmur.clipboard_text());
        if let Screen::Reading(reading) = &mut self.screen {
            reading.mark_copied();
        }
    }

    #[cfg(feature = "export")]
    fn export_favorites(&mut self) {
        use crate::export::{write_favorites, EXPORT_FILE_NAME};

        if self.prefs.favorites.is_empty() {
            self.set_status("No favorites to export.", StatusKind::Error);
            return;
        }
        let path = std::path::Path::new(EXPORT_FILE_NAME);
        match write_favorites(path, &self.repo, &self.prefs.favorites) {
            Ok(()) => self.set_status(
                format!("Favorites written to {EXPORT_FILE_NAME}."),
                StatusKind::Info,
            ),
            Err(err) => self.set_status(surface_error(&err), StatusKind::Error),
        }
    }

    /// Write-through after every preference mutation. A failed write keeps
    /// the in-memory value and surfaces in the footer.
    fn persist_prefs(&mut self) {
        if let Err(err) = save_preferences(&self.conn, &self.prefs) {
            self.set_status(surface_error(&err), StatusKind::Error);
        }
    }

    fn set_status(&mut self, text: impl Into<String>, kind: StatusKind) {
        self.status = Some(StatusMessage {
            text: text.into(),
            kind,
        });
    }

    fn clear_status(&mut self) {
        self.status = None;
    }

    pub(crate) fn draw(&self, frame: &mut Frame) {
        let area = frame.area();
        let footer_height = FOOTER_HEIGHT.min(area.height);

        let (content_area, footer_area) = if area.height > footer_height {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Min(0), Constraint::Length(footer_height)])
                .split(area);
            (chunks[0], chunks[1])
        } else {
            (area, area)
        };

        match &self.screen {
            Screen::Collection => self.draw_collection(frame, content_area),
            Screen::Reading(reading) => self.draw_reading(frame, content_area, reading),
        }

        if area.height >= footer_height {
            self.draw_footer(frame, footer_area);
        }

        if let Mode::Searching(state) = &self.mode {
            self.draw_search_bar(frame, area, state);
        }
    }

    fn draw_collection(&self, frame: &mut Frame, area: Rect) {
        let colors = palette(self.prefs.theme);
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(1)])
            .split(area);

        let mut header_spans = vec![Span::styled(
            "የጥምቀት መዝሙሮች",
            Style::default()
                .fg(colors.accent)
                .add_modifier(Modifier::BOLD),
        )];
        header_spans.push(Span::styled(
            format!("  {} mezmurs", self.collection.filtered.len()),
            Style::default().fg(colors.dim),
        ));
        if self.collection.favorites_only {
            header_spans.push(Span::styled(
                format!("  {FAVORITE_BADGE} favorites only"),
                Style::default().fg(colors.accent),
            ));
        }
        if !self.collection.query.trim().is_empty() {
            header_spans.push(Span::styled(
                format!("  search: {}", self.collection.query),
                Style::default().fg(colors.dim),
            ));
        }
        let header = Paragraph::new(Line::from(header_spans))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(header, chunks[0]);

        if self.collection.filtered.is_empty() {
            let message = Paragraph::new("ውጤት አልተገኘም — adjust the search and try again.")
                .alignment(Alignment::Center)
                .style(Style::default().fg(colors.dim))
                .block(Block::default().borders(Borders::ALL));
            frame.render_widget(message, chunks[1]);
            return;
        }

        let items: Vec<ListItem> = self
            .collection
            .filtered
            .iter()
            .filter_map(|&id| self.repo.get(id))
            .map(|mezmur| self.collection_item(mezmur, &colors))
            .collect();

        let list = List::new(items)
            .block(Block::default().borders(Borders::ALL))
            .highlight_style(
                Style::default()
                    .fg(colors.accent)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("▶ ");
        let mut state = ListState::default();
        state.select(Some(self.collection.selected));
        frame.render_stateful_widget(list, chunks[1], &mut state);
    }

    fn collection_item<'a>(&self, mezmur: &'a Mezmur, colors: &Palette) -> ListItem<'a> {
        let badge = if self.prefs.is_favorite(mezmur.id) {
            FAVORITE_BADGE
        } else {
            " "
        };
        let title_line = Line::from(vec![
            Span::styled(
                format!("{:02} ", mezmur.id),
                Style::default().fg(colors.dim),
            ),
            Span::styled(badge.to_string(), Style::default().fg(colors.accent)),
            Span::raw(" "),
            Span::styled(mezmur.title.clone(), Style::default().fg(colors.text)),
        ]);
        let preview_line = Line::from(Span::styled(
            format!("      {}", mezmur.preview_line()),
            Style::default().fg(colors.dim),
        ));
        ListItem::new(vec![title_line, preview_line])
    }

    fn draw_reading(&self, frame: &mut Frame, area: Rect, reading: &ReadingScreen) {
        let colors = palette(self.prefs.theme);

        let (sidebar_area, content_area) = if area.width >= SIDEBAR_BREAKPOINT {
            let chunks = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(1)])
                .split(area);
            (Some(chunks[0]), chunks[1])
        } else {
            (None, area)
        };

        if let Some(sidebar_area) = sidebar_area {
            self.draw_sidebar(frame, sidebar_area, reading, &colors);
        }

        let Some(mezmur) = self.selection.open_id().and_then(|id| self.repo.get(id)) else {
            // Unknown id: the degraded-but-valid empty pane.
            let message = Paragraph::new("ውጤት አልተገኘም")
                .alignment(Alignment::Center)
                .style(Style::default().fg(colors.dim))
                .block(Block::default().borders(Borders::ALL));
            frame.render_widget(message, content_area);
            return;
        };

        let effective = effective_font_size(self.prefs.font_size, frame.area().width);
        let spacing = lyric_spacing(effective);
        let content_size = ContentSize::classify(mezmur.lyrics.len());
        let margin = content_size.horizontal_margin(content_area.width);
        let padded = Rect {
            x: content_area.x + margin,
            y: content_area.y,
            width: content_area.width.saturating_sub(margin * 2),
            height: content_area.height,
        };

        let mut lines: Vec<Line> = Vec::new();
        lines.push(Line::from(Span::styled(
            mezmur.title.clone(),
            Style::default()
                .fg(colors.accent)
                .add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(""));

        for lyric in &mezmur.lyrics {
            let styled = if is_chorus_line(lyric) {
                Span::styled(
                    lyric.clone(),
                    Style::default()
                        .fg(colors.chorus)
                        .add_modifier(Modifier::BOLD),
                )
            } else {
                Span::styled(lyric.clone(), Style::default().fg(colors.text))
            };
            lines.push(Line::from(styled));
            for _ in 0..spacing {
                lines.push(Line::from(""));
            }
        }

        if let Some(meaning) = &mezmur.meaning {
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                "ትርጉም",
                Style::default()
                    .fg(colors.accent)
                    .add_modifier(Modifier::BOLD),
            )));
            lines.push(Line::from(Span::styled(
                format!("\u{201c}{meaning}\u{201d}"),
                Style::default()
                    .fg(colors.dim)
                    .add_modifier(Modifier::ITALIC),
            )));
        }

        let mut title_spans = vec![Span::styled(
            format!(" {:02} / {} ", mezmur.id, self.repo.len()),
            Style::default().fg(colors.dim),
        )];
        if self.prefs.is_favorite(mezmur.id) {
            title_spans.push(Span::styled(
                format!("{FAVORITE_BADGE} "),
                Style::default().fg(colors.accent),
            ));
        }
        if reading.copied_showing() {
            title_spans.push(Span::styled(
                "✓ Copied ",
                Style::default().fg(ratatui::style::Color::Green),
            ));
        }

        let block = Block::default()
            .borders(Borders::ALL)
            .title(Line::from(title_spans));
        let body = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: false })
            .scroll((reading.scroll, 0))
            .block(block);
        frame.render_widget(body, padded);
    }

    fn draw_sidebar(
        &self,
        frame: &mut Frame,
        area: Rect,
        reading: &ReadingScreen,
        colors: &Palette,
    ) {
        let open_id = self.selection.open_id();
        let items: Vec<ListItem> = reading
            .sidebar
            .iter()
            .filter_map(|&id| self.repo.get(id))
            .map(|mezmur| {
                let marker = if open_id == Some(mezmur.id) { "● " } else { "  " };
                let style = if open_id == Some(mezmur.id) {
                    Style::default()
                        .fg(colors.accent)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(colors.text)
                };
                ListItem::new(Line::from(vec![
                    Span::styled(
                        format!("{:02} ", mezmur.id),
                        Style::default().fg(colors.dim),
                    ),
                    Span::styled(format!("{marker}{}", mezmur.title), style),
                ]))
            })
            .collect();

        let title = if reading.sidebar_query.trim().is_empty() {
            "ሁሉም መዝሙራት".to_string()
        } else {
            format!("ሁሉም መዝሙራት — {}", reading.sidebar_query)
        };

        if items.is_empty() {
            let message = Paragraph::new("ውጤት አልተገኘም")
                .alignment(Alignment::Center)
                .style(Style::default().fg(colors.dim))
                .block(Block::default().borders(Borders::ALL).title(title));
            frame.render_widget(message, area);
            return;
        }

        let list = List::new(items)
            .block(Block::default().borders(Borders::ALL).title(title))
            .highlight_style(Style::default().add_modifier(Modifier::REVERSED));
        let mut state = ListState::default();
        state.select(Some(reading.sidebar_selected));
        frame.render_stateful_widget(list, area, &mut state);
    }

    fn draw_footer(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default().borders(Borders::TOP);
        frame.render_widget(block.clone(), area);
        let inner = block.inner(area);

        let status_line = if let Some(status) = &self.status {
            Line::from(vec![Span::styled(status.text.clone(), status.kind.style())])
        } else {
            Line::from("")
        };

        let instructions = self.footer_instructions();

        let paragraph = Paragraph::new(vec![status_line, instructions]).wrap(Wrap { trim: true });
        frame.render_widget(paragraph, inner);
    }

    fn draw_search_bar(&self, frame: &mut Frame, area: Rect, state: &SearchState) {
        let height = 3u16.min(area.height);
        let popup_area = Rect {
            x: area.x,
            y: area.y,
            width: area.width,
            height,
        };
        frame.render_widget(Clear, popup_area);

        let title = match state.target {
            SearchTarget::Collection => "Search",
            SearchTarget::Sidebar => "Search sidebar",
        };
        let block = Block::default().borders(Borders::ALL).title(title);
        let paragraph = Paragraph::new(Span::raw(format!("Search: {}", state.query)))
            .block(block.clone())
            .wrap(Wrap { trim: true });
        frame.render_widget(paragraph, popup_area);

        let inner = block.inner(popup_area);
        let cursor_x = inner.x + "Search: ".len() as u16 + state.query.chars().count() as u16;
        let cursor_y = inner.y;
        frame.set_cursor_position((cursor_x, cursor_y));
    }

    fn footer_instructions(&self) -> Line<'static> {
        let key_style = Style::default()
            .fg(ratatui::style::Color::Cyan)
            .add_modifier(Modifier::BOLD);
        match (&self.screen, &self.mode) {
            (_, Mode::Searching(_)) => Line::from(vec![
                Span::styled("[↑↓]", key_style),
                Span::raw(" Navigate   "),
                Span::styled("[Enter]", key_style),
                Span::raw(" Open   "),
                Span::styled("[Esc]", key_style),
                Span::raw(" Clear search"),
            ]),
            (Screen::Collection, _) => {
                let mut spans = vec![
                    Span::styled("[Enter]", key_style),
                    Span::raw(" Open   "),
                    Span::styled("[/]", key_style),
                    Span::raw(" Search   "),
                    Span::styled("[f]", key_style),
                    Span::raw(" Favorites   "),
                    Span::styled("[b]", key_style),
                    Span::raw(" Mark   "),
                    Span::styled("[r]", key_style),
                    Span::raw(" Random   "),
                    Span::styled("[t]", key_style),
                    Span::raw(" Theme   "),
                ];
                #[cfg(feature = "export")]
                {
                    spans.push(Span::styled("[x]", key_style));
                    spans.push(Span::raw(" Export   "));
                }
                spans.push(Span::styled("[q]", key_style));
                spans.push(Span::raw(" Quit"));
                Line::from(spans)
            }
            (Screen::Reading(_), _) => Line::from(vec![
                Span::styled("[←→]", key_style),
                Span::raw(" Prev/Next   "),
                Span::styled("[↑↓]", key_style),
                Span::raw(" Scroll   "),
                Span::styled("[/]", key_style),
                Span::raw(" Sidebar   "),
                Span::styled("[b]", key_style),
                Span::raw(" Mark   "),
                Span::styled("[c]", key_style),
                Span::raw(" Copy   "),
                Span::styled("[+/-]", key_style),
                Span::raw(" Size   "),
                Span::styled("[Esc]", key_style),
                Span::raw(" Back"),
            ]),
        }
    }
}
