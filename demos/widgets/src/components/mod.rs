//! Text-mode UI components.
//!
//! Each widget holds a store handle, dispatches actions from its handlers,
//! and re-draws only when its own slice changes.

mod counter;
mod todos;

pub use counter::CounterWidget;
pub use todos::TodosWidget;

use crate::app::AppStore;

/// Both widgets mounted on one store
pub struct App {
    /// The counter widget
    pub counter: CounterWidget,
    /// The to-do widget
    pub todos: TodosWidget,
}

impl App {
    /// Mount every widget on `store`
    #[must_use]
    pub fn mount(store: &AppStore) -> Self {
        Self {
            counter: CounterWidget::mount(store),
            todos: TodosWidget::mount(store),
        }
    }

    /// The page, counter first
    #[must_use]
    pub fn render(&self) -> String {
        format!("{}\n\n{}", self.counter.render(), self.todos.render())
    }

    /// Unmount every widget
    pub fn unmount(self) {
        self.counter.unmount();
        self.todos.unmount();
    }
}
