//! Stack of game states.
//!
//! The top state receives updates. Drawing starts at the highest state that is
//! not an overlay and walks up, so a pause menu can sit over a frozen level.

use panelkit::Surface;
use thiserror::Error;

/// Misuse of the state stack
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StateError {
    #[error("the state stack is empty")]
    EmptyStack,
}

/// One screen of the game: title, level, pause menu, ...
pub trait GameState {
    /// Called once when the state is pushed
    fn on_enter(&mut self) {}

    /// Called once when the state leaves the stack
    fn on_exit(&mut self) {}

    /// Another state was pushed on top of this one
    fn on_obscured(&mut self) {}

    /// The state above this one was popped
    fn on_revealed(&mut self) {}

    fn update(&mut self, dt: f32);

    fn draw(&self, surface: &mut dyn Surface);

    /// Overlays let the states below them keep drawing
    fn is_overlay(&self) -> bool {
        false
    }

    fn name(&self) -> &str {
        "state"
    }
}

/// Owns the active game states, bottom first
#[derive(Default)]
pub struct StateManager {
    stack: Vec<Box<dyn GameState>>,
}

impl StateManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.stack.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    pub fn top(&self) -> Option<&dyn GameState> {
        self.stack.last().map(|state| state.as_ref())
    }

    pub fn top_mut(&mut self) -> Option<&mut (dyn GameState + 'static)> {
        self.stack.last_mut().map(|state| state.as_mut())
    }

    /// Put `state` on top, obscuring the current top
    pub fn push(&mut self, state: impl GameState + 'static) {
        self.push_boxed(Box::new(state));
    }

    pub fn push_boxed(&mut self, mut state: Box<dyn GameState>) {
        if let Some(top) = self.stack.last_mut() {
            top.on_obscured();
        }
        log::debug!("entering state {}", state.name());
        state.on_enter();
        self.stack.push(state);
    }

    /// Remove the top state and reveal the one below it
    pub fn pop(&mut self) -> Result<Box<dyn GameState>, StateError> {
        let mut state = self.stack.pop().ok_or(StateError::EmptyStack)?;
        log::debug!("leaving state {}", state.name());
        state.on_exit();
        if let Some(top) = self.stack.last_mut() {
            top.on_revealed();
        }
        Ok(state)
    }

    /// Replace the top state without revealing the one below
    ///
    /// Returns the replaced state, if there was one.
    pub fn switch_to(&mut self, state: impl GameState + 'static) -> Option<Box<dyn GameState>> {
        let previous = self.stack.pop().map(|mut previous| {
            log::debug!("leaving state {}", previous.name());
            previous.on_exit();
            previous
        });

        let mut state: Box<dyn GameState> = Box::new(state);
        log::debug!("entering state {}", state.name());
        state.on_enter();
        self.stack.push(state);
        previous
    }

    /// Exit every state, top first
    pub fn clear(&mut self) {
        while let Some(mut state) = self.stack.pop() {
            state.on_exit();
        }
    }

    /// Advance the top state only
    pub fn update(&mut self, dt: f32) {
        if let Some(top) = self.stack.last_mut() {
            top.update(dt);
        }
    }

    /// Draw every visible state, bottom first
    pub fn draw(&self, surface: &mut dyn Surface) {
        for state in &self.stack[self.first_visible()..] {
            state.draw(surface);
        }
    }

    /// Index of the lowest state that still shows through the overlays above it
    fn first_visible(&self) -> usize {
        self.stack
            .iter()
            .rposition(|state| !state.is_overlay())
            .unwrap_or(0)
    }
}

impl std::fmt::Debug for StateManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list()
            .entries(self.stack.iter().map(|state| state.name()))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use glam::IVec2;
    use panelkit::{css, DrawList, FontId, Point, Rect, TextTransform};

    use super::*;

    type Journal = Rc<RefCell<Vec<String>>>;

    struct Recorder {
        name: &'static str,
        overlay: bool,
        journal: Journal,
    }

    impl Recorder {
        fn new(name: &'static str, journal: &Journal) -> Self {
            Self {
                name,
                overlay: false,
                journal: journal.clone(),
            }
        }

        fn overlay(mut self) -> Self {
            self.overlay = true;
            self
        }

        fn log(&self, event: &str) {
            self.journal.borrow_mut().push(format!("{}:{event}", self.name));
        }
    }

    impl GameState for Recorder {
        fn on_enter(&mut self) {
            self.log("enter");
        }

        fn on_exit(&mut self) {
            self.log("exit");
        }

        fn on_obscured(&mut self) {
            self.log("obscured");
        }

        fn on_revealed(&mut self) {
            self.log("revealed");
        }

        fn update(&mut self, _dt: f32) {
            self.log("update");
        }

        fn draw(&self, surface: &mut dyn Surface) {
            surface.draw_text(
                FontId(0),
                self.name,
                Point::ZERO,
                css::WHITE,
                TextTransform::IDENTITY,
            );
        }

        fn is_overlay(&self) -> bool {
            self.overlay
        }

        fn name(&self) -> &str {
            self.name
        }
    }

    fn take(journal: &Journal) -> Vec<String> {
        std::mem::take(&mut *journal.borrow_mut())
    }

    #[test]
    fn test_push_pop_lifecycle() {
        let journal = Journal::default();
        let mut states = StateManager::new();

        states.push(Recorder::new("title", &journal));
        states.push(Recorder::new("level", &journal));
        assert_eq!(take(&journal), ["title:enter", "title:obscured", "level:enter"]);

        let popped = states.pop().unwrap();
        assert_eq!(popped.name(), "level");
        assert_eq!(take(&journal), ["level:exit", "title:revealed"]);
    }

    #[test]
    fn test_pop_empty_is_an_error() {
        let mut states = StateManager::new();
        assert_eq!(states.pop().err(), Some(StateError::EmptyStack));
    }

    #[test]
    fn test_switch_replaces_top_without_revealing() {
        let journal = Journal::default();
        let mut states = StateManager::new();
        states.push(Recorder::new("title", &journal));
        states.push(Recorder::new("loading", &journal));
        take(&journal);

        let previous = states.switch_to(Recorder::new("level", &journal));
        assert_eq!(previous.map(|s| s.name().to_string()).as_deref(), Some("loading"));
        assert_eq!(take(&journal), ["loading:exit", "level:enter"]);
        assert_eq!(states.len(), 2);
    }

    #[test]
    fn test_update_reaches_top_only() {
        let journal = Journal::default();
        let mut states = StateManager::new();
        states.push(Recorder::new("level", &journal));
        states.push(Recorder::new("pause", &journal).overlay());
        take(&journal);

        states.update(0.016);
        assert_eq!(take(&journal), ["pause:update"]);
    }

    #[test]
    fn test_draw_starts_below_overlays() {
        let journal = Journal::default();
        let mut states = StateManager::new();
        states.push(Recorder::new("title", &journal));
        states.push(Recorder::new("level", &journal));
        states.push(Recorder::new("pause", &journal).overlay());
        states.push(Recorder::new("confirm", &journal).overlay());

        let mut list = DrawList::new(IVec2::new(320, 240));
        states.draw(&mut list);
        let drawn: Vec<_> = list.texts().map(|(text, _)| text).collect();
        assert_eq!(drawn, ["level", "pause", "confirm"]);

        list.clear();
        states.push(Recorder::new("options", &journal));
        states.draw(&mut list);
        let drawn: Vec<_> = list.texts().map(|(text, _)| text).collect();
        assert_eq!(drawn, ["options"]);
        assert_eq!(list.commands()[0].clip_rect, Rect::new(0, 0, 320, 240));
    }

    #[test]
    fn test_clear_exits_top_first() {
        let journal = Journal::default();
        let mut states = StateManager::new();
        states.push(Recorder::new("a", &journal));
        states.push(Recorder::new("b", &journal));
        take(&journal);

        states.clear();
        assert!(states.is_empty());
        assert_eq!(take(&journal), ["b:exit", "a:exit"]);
    }
}
