//! Interactive editor for the items of one block.
//!
//! Key handling lives in [`ItemEditor`] and never touches the terminal, so it
//! can be driven directly from tests. [`run`] owns the terminal session.

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};
use std::io::{Stdout, stdout};
use tasklist_engine::{Item, Priority};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    Normal,
    /// Editing the text of the selected item.
    EditingText { buffer: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub struct ItemEditor {
    title: String,
    items: Vec<Item>,
    moved: Vec<Item>,
    list_state: ListState,
    mode: Mode,
    move_key: Option<char>,
}

impl ItemEditor {
    pub fn new(title: &str, items: Vec<Item>, move_key: Option<char>) -> Self {
        let mut list_state = ListState::default();
        if !items.is_empty() {
            list_state.select(Some(0));
        }
        Self {
            title: title.to_string(),
            items,
            moved: Vec::new(),
            list_state,
            mode: Mode::Normal,
            move_key,
        }
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn mode(&self) -> &Mode {
        &self.mode
    }

    pub fn selected(&self) -> Option<usize> {
        self.list_state.selected()
    }

    /// Returns the edited items and the items moved out with the move key.
    pub fn into_items(self) -> (Vec<Item>, Vec<Item>) {
        (self.items, self.moved)
    }

    pub fn handle_key(&mut self, code: KeyCode) -> Flow {
        match &mut self.mode {
            Mode::EditingText { buffer } => {
                match code {
                    KeyCode::Enter | KeyCode::Esc => self.finish_editing(),
                    KeyCode::Backspace => {
                        buffer.pop();
                    }
                    KeyCode::Char(c) => buffer.push(c),
                    _ => {}
                }
                Flow::Continue
            }
            Mode::Normal => self.handle_normal_key(code),
        }
    }

    fn handle_normal_key(&mut self, code: KeyCode) -> Flow {
        match code {
            KeyCode::Char(c) if Some(c) == self.move_key => self.move_selected(),
            KeyCode::Char('q') | KeyCode::Esc => return Flow::Quit,
            KeyCode::Down | KeyCode::Char('j') => self.next_item(),
            KeyCode::Up | KeyCode::Char('k') => self.previous_item(),
            KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Char('x') => self.toggle_checked(),
            KeyCode::Char('a') => self.set_priority(Priority::High),
            KeyCode::Char('b') => self.set_priority(Priority::Medium),
            KeyCode::Char('c') => self.set_priority(Priority::Low),
            KeyCode::Char('d') => self.set_priority(Priority::None),
            KeyCode::Char('e') => self.start_editing(),
            KeyCode::Char('n') => self.new_item(),
            KeyCode::Char('r') => self.remove_selected(),
            _ => {}
        }
        Flow::Continue
    }

    fn selected_item(&mut self) -> Option<&mut Item> {
        let index = self.list_state.selected()?;
        self.items.get_mut(index)
    }

    fn next_item(&mut self) {
        if self.items.is_empty() {
            return;
        }
        let i = match self.list_state.selected() {
            Some(i) => (i + 1) % self.items.len(),
            None => 0,
        };
        self.list_state.select(Some(i));
    }

    fn previous_item(&mut self) {
        if self.items.is_empty() {
            return;
        }
        let i = match self.list_state.selected() {
            Some(0) | None => self.items.len() - 1,
            Some(i) => i - 1,
        };
        self.list_state.select(Some(i));
    }

    fn toggle_checked(&mut self) {
        if let Some(item) = self.selected_item() {
            item.checked = !item.checked;
        }
    }

    /// Sets the priority and moves on to the next item, stopping at the last.
    fn set_priority(&mut self, priority: Priority) {
        let Some(item) = self.selected_item() else {
            return;
        };
        item.priority = priority;
        if let Some(i) = self.list_state.selected()
            && i + 1 < self.items.len()
        {
            self.list_state.select(Some(i + 1));
        }
    }

    fn start_editing(&mut self) {
        if let Some(item) = self.selected_item() {
            let buffer = item.text.clone();
            self.mode = Mode::EditingText { buffer };
        }
    }

    fn finish_editing(&mut self) {
        let Mode::EditingText { buffer } = std::mem::replace(&mut self.mode, Mode::Normal) else {
            return;
        };
        if let Some(item) = self.selected_item() {
            item.text = buffer;
        }
    }

    fn new_item(&mut self) {
        self.items.push(Item::default());
        self.list_state.select(Some(self.items.len() - 1));
        self.mode = Mode::EditingText {
            buffer: String::new(),
        };
    }

    fn take_selected(&mut self) -> Option<Item> {
        let index = self.list_state.selected()?;
        if index >= self.items.len() {
            return None;
        }
        let item = self.items.remove(index);
        let selected = if self.items.is_empty() {
            None
        } else {
            Some(index.min(self.items.len() - 1))
        };
        self.list_state.select(selected);
        Some(item)
    }

    fn remove_selected(&mut self) {
        if let Some(item) = self.take_selected() {
            log::debug!("Removed item '{}'", item.text);
        }
    }

    fn move_selected(&mut self) {
        if let Some(item) = self.take_selected() {
            self.moved.push(item);
        }
    }
}

/// Runs the editor in the alternate screen until the user quits.
pub fn run(editor: &mut ItemEditor) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, editor);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    editor: &mut ItemEditor,
) -> Result<()> {
    loop {
        terminal.draw(|f| ui(f, editor))?;

        if let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
            && editor.handle_key(key.code) == Flow::Quit
        {
            return Ok(());
        }
    }
}

fn item_line(item: &Item, editing: Option<&str>) -> Line<'static> {
    let priority = item.priority.token().unwrap_or(' ');
    let checkbox = if item.checked { "[x]" } else { "[ ]" };
    let text = match editing {
        Some(buffer) => Span::styled(
            format!("{buffer}_"),
            Style::default().add_modifier(Modifier::UNDERLINED),
        ),
        None => Span::raw(item.text.clone()),
    };
    Line::from(vec![Span::raw(format!("{priority} {checkbox} ")), text])
}

fn ui(f: &mut Frame, editor: &mut ItemEditor) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)].as_ref())
        .split(f.area());

    let editing = match &editor.mode {
        Mode::EditingText { buffer } => Some(buffer.as_str()),
        Mode::Normal => None,
    };
    let selected = editor.list_state.selected();
    let list_items: Vec<ListItem> = editor
        .items
        .iter()
        .enumerate()
        .map(|(i, item)| {
            let buffer = editing.filter(|_| Some(i) == selected);
            ListItem::new(item_line(item, buffer))
        })
        .collect();

    let list = List::new(list_items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(editor.title.clone()),
        )
        .highlight_style(Style::default().bg(Color::Yellow).fg(Color::Black));

    f.render_stateful_widget(list, chunks[0], &mut editor.list_state);

    let help = match editor.mode {
        Mode::Normal => {
            "q: Quit | j/k: Move | x: Toggle | a/b/c/d: Priority | e: Edit | n: New | r: Remove"
        }
        Mode::EditingText { .. } => "Enter/Esc: Done editing",
    };
    f.render_widget(Paragraph::new(Line::from(help)), chunks[1]);
}
