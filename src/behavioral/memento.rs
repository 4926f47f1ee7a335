//! Memento: snapshot an object's state into an opaque value and restore it
//! later. The history caretaker stacks snapshots without ever looking
//! inside them. Snapshots serialize, so a whole undo history can be
//! exported as JSON.

use serde::{Deserialize, Serialize};

// =============================================================================
// Editor originator
// =============================================================================

#[derive(Default)]
pub struct Editor {
    content: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditorState {
    content: String,
}

impl Editor {
    pub fn set_content(&mut self, content: impl Into<String>) {
        self.content = content.into();
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn create_state(&self) -> EditorState {
        EditorState {
            content: self.content.clone(),
        }
    }

    pub fn restore(&mut self, state: EditorState) {
        self.content = state.content;
    }
}

// =============================================================================
// History caretaker
// =============================================================================

/// LIFO stack of snapshots. Generic so the document below reuses it.
pub struct History<S> {
    states: Vec<S>,
}

impl<S> Default for History<S> {
    fn default() -> Self {
        History { states: Vec::new() }
    }
}

impl<S> History<S> {
    pub fn push(&mut self, state: S) {
        self.states.push(state);
    }

    pub fn pop(&mut self) -> Option<S> {
        self.states.pop()
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }
}

impl<S: Serialize> History<S> {
    /// Exports the stored snapshots, oldest first, as a JSON array.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(&self.states)
    }
}

// =============================================================================
// Document originator with several fields
// =============================================================================

#[derive(Debug, Default, PartialEq, Eq)]
pub struct Document {
    content: String,
    font_name: String,
    font_size: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentState {
    content: String,
    font_name: String,
    font_size: u32,
}

impl Document {
    pub fn set_content(&mut self, content: impl Into<String>) {
        self.content = content.into();
    }

    pub fn set_font_name(&mut self, font_name: impl Into<String>) {
        self.font_name = font_name.into();
    }

    pub fn set_font_size(&mut self, font_size: u32) {
        self.font_size = font_size;
    }

    pub fn create_state(&self) -> DocumentState {
        DocumentState {
            content: self.content.clone(),
            font_name: self.font_name.clone(),
            font_size: self.font_size,
        }
    }

    pub fn restore(&mut self, state: DocumentState) {
        self.content = state.content;
        self.font_name = state.font_name;
        self.font_size = state.font_size;
    }

    pub fn describe(&self) -> String {
        format!(
            "Document {{ content: {:?}, font: {:?} {}pt }}",
            self.content, self.font_name, self.font_size
        )
    }
}

// =============================================================================
// Demo
// =============================================================================

pub fn demo() {
    crate::banner("Memento");

    let mut editor = Editor::default();
    let mut history = History::default();
    editor.set_content("a");
    history.push(editor.create_state());
    editor.set_content("b");
    history.push(editor.create_state());
    editor.set_content("c");
    if let Some(state) = history.pop() {
        editor.restore(state);
    }
    println!("editor after undo: {:?}", editor.content());

    let mut document = Document::default();
    let mut history = History::default();
    document.set_content("Hello");
    history.push(document.create_state());
    document.set_font_name("Font 1");
    history.push(document.create_state());
    document.set_font_size(10);
    println!("{}", document.describe());
    if let Some(state) = history.pop() {
        document.restore(state);
    }
    println!("{}", document.describe());
    if let Some(state) = history.pop() {
        document.restore(state);
    }
    println!("{}", document.describe());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn restore_returns_the_editor_to_a_prior_state() {
        let mut editor = Editor::default();
        let mut history = History::default();
        editor.set_content("a");
        history.push(editor.create_state());
        editor.set_content("b");
        history.push(editor.create_state());
        editor.set_content("c");

        editor.restore(history.pop().unwrap());
        assert_eq!(editor.content(), "b");
        editor.restore(history.pop().unwrap());
        assert_eq!(editor.content(), "a");
    }

    #[test]
    fn history_is_lifo_and_empty_pop_is_none() {
        let mut history = History::default();
        history.push(1);
        history.push(2);
        assert_eq!(history.pop(), Some(2));
        assert_eq!(history.pop(), Some(1));
        assert_eq!(history.pop(), None);
    }

    #[test]
    fn document_restores_every_field() {
        let mut document = Document::default();
        document.set_content("Hello");
        document.set_font_name("Font 1");
        document.set_font_size(12);
        let snapshot = document.create_state();

        document.set_content("changed");
        document.set_font_size(10);
        document.restore(snapshot);

        assert_eq!(document.create_state().content, "Hello");
        assert_eq!(document.create_state().font_size, 12);
    }

    #[test]
    fn history_exports_snapshots_as_json() {
        let mut document = Document::default();
        let mut history = History::default();
        document.set_content("Hello");
        history.push(document.create_state());
        document.set_font_name("Font 1");
        history.push(document.create_state());

        let json = history.to_json().unwrap();
        let parsed: Vec<DocumentState> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed[1].font_name, "Font 1");
    }
}
