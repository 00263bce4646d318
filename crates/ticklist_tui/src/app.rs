//! Terminal application state and key routing.
//!
//! # Responsibility
//! - Track UI-only state (focus mode, selected row, quit flag).
//! - Translate key events into core actions.
//!
//! # Invariants
//! - The selected row always stays inside the list bounds.
//! - All list mutations go through the manager; nothing is mutated here.

use crossterm::event::{KeyCode, KeyEvent};
use ticklist_core::{KeyValueStore, TodoAction, TodoId, TodoManager};

/// Which surface currently receives typed characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// List navigation; keys are commands.
    Browse,
    /// The add input is focused.
    Input,
}

/// Top-level TUI state wrapping the core manager.
pub struct App<S: KeyValueStore> {
    pub manager: TodoManager<S>,
    pub mode: Mode,
    pub selected: usize,
    pub should_quit: bool,
}

impl<S: KeyValueStore> App<S> {
    pub fn new(manager: TodoManager<S>) -> Self {
        Self {
            manager,
            mode: Mode::Browse,
            selected: 0,
            should_quit: false,
        }
    }

    /// Returns whether an item is currently in edit mode.
    pub fn editing(&self) -> bool {
        self.manager.state().edit.is_some()
    }

    fn selected_id(&self) -> Option<TodoId> {
        self.manager
            .state()
            .items
            .get(self.selected)
            .map(|item| item.id)
    }

    /// Routes one key event to the matching action.
    pub fn on_key(&mut self, key: KeyEvent) {
        if self.editing() {
            self.on_edit_key(key);
        } else {
            match self.mode {
                Mode::Input => self.on_input_key(key),
                Mode::Browse => self.on_browse_key(key),
            }
        }
        self.clamp_selection();
    }

    fn on_browse_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('a') => self.mode = Mode::Input,
            KeyCode::Char('e') => {
                if let Some(id) = self.selected_id() {
                    self.manager.dispatch(TodoAction::StartEdit { id });
                }
            }
            KeyCode::Char('d') => {
                if let Some(id) = self.selected_id() {
                    self.manager.dispatch(TodoAction::Remove { id });
                }
            }
            KeyCode::Char(' ') => {
                if let Some(id) = self.selected_id() {
                    self.manager.dispatch(TodoAction::Toggle { id });
                }
            }
            KeyCode::Up => self.selected = self.selected.saturating_sub(1),
            KeyCode::Down => self.selected = self.selected.saturating_add(1),
            _ => {}
        }
    }

    fn on_input_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter => {
                let text = self.manager.state().draft.clone();
                if self.manager.dispatch(TodoAction::Add { text }).list_changed() {
                    // The new item lands at the top of the list.
                    self.selected = 0;
                }
            }
            KeyCode::Esc => self.mode = Mode::Browse,
            KeyCode::Backspace => {
                let mut draft = self.manager.state().draft.clone();
                draft.pop();
                self.manager.dispatch(TodoAction::SetDraft(draft));
            }
            KeyCode::Char(ch) => {
                let mut draft = self.manager.state().draft.clone();
                draft.push(ch);
                self.manager.dispatch(TodoAction::SetDraft(draft));
            }
            _ => {}
        }
    }

    fn on_edit_key(&mut self, key: KeyEvent) {
        let Some(edit) = self.manager.state().edit.clone() else {
            return;
        };
        match key.code {
            // Up/Down move focus off the edit field; leaving the field
            // attempts the save, same as Enter.
            KeyCode::Enter | KeyCode::Up | KeyCode::Down => {
                self.manager.dispatch(TodoAction::SaveEdit { id: edit.id });
            }
            KeyCode::Esc => {
                self.manager.dispatch(TodoAction::CancelEdit);
            }
            KeyCode::Backspace => {
                let mut text = edit.text;
                text.pop();
                self.manager.dispatch(TodoAction::SetEditDraft(text));
            }
            KeyCode::Char(ch) => {
                let mut text = edit.text;
                text.push(ch);
                self.manager.dispatch(TodoAction::SetEditDraft(text));
            }
            _ => {}
        }
    }

    fn clamp_selection(&mut self) {
        let len = self.manager.state().items.len();
        if len == 0 {
            self.selected = 0;
        } else if self.selected >= len {
            self.selected = len - 1;
        }
    }
}
