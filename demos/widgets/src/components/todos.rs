//! Todos widget: an input line and the list below it.

use crate::action::AppAction;
use crate::app::{AppState, AppStore};
use statefold_runtime::Subscription;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::sync::Arc;

const PLACEHOLDER: &str = "Add new todo...";

/// Text rendering of the to-do list plus the pending input buffer
///
/// The buffer is local to the widget; only `submit` reaches the store.
pub struct TodosWidget {
    store: AppStore,
    pending: String,
    list_view: Rc<RefCell<String>>,
    renders: Rc<Cell<usize>>,
    subscription: Subscription<AppState>,
}

impl TodosWidget {
    /// Render once and subscribe to the todos slice
    #[must_use]
    pub fn mount(store: &AppStore) -> Self {
        let list_view = Rc::new(RefCell::new(String::new()));
        let renders = Rc::new(Cell::new(0));

        redraw(&list_view, &renders, &store.state(|s| Arc::clone(&s.todos.list)));

        let subscription = {
            let list_view = Rc::clone(&list_view);
            let renders = Rc::clone(&renders);
            store.watch(
                |s| Arc::clone(&s.todos.list),
                move |list| redraw(&list_view, &renders, list),
            )
        };

        tracing::debug!(subscriber = subscription.id(), "Todos widget mounted");

        Self {
            store: store.clone(),
            pending: String::new(),
            list_view,
            renders,
            subscription,
        }
    }

    /// Replace the pending input text
    pub fn input(&mut self, text: impl Into<String>) {
        self.pending = text.into();
    }

    /// Pending input text
    #[must_use]
    pub fn pending(&self) -> &str {
        &self.pending
    }

    /// Submit the form: dispatch the pending text and clear the buffer
    ///
    /// The text is dispatched as typed, including when it is empty.
    pub fn submit(&mut self) {
        let text = std::mem::take(&mut self.pending);
        tracing::debug!(len = text.len(), "Submitting todo");
        self.store.dispatch(AppAction::AddTodo { payload: text });
    }

    /// Current rendering
    #[must_use]
    pub fn render(&self) -> String {
        let input = if self.pending.is_empty() {
            PLACEHOLDER
        } else {
            self.pending.as_str()
        };

        format!("[{input}]\n{}", self.list_view.borrow())
    }

    /// How many times the list has drawn itself, including the first draw
    #[must_use]
    pub fn render_count(&self) -> usize {
        self.renders.get()
    }

    /// Stop following the store
    ///
    /// Dropping the widget does the same.
    pub fn unmount(self) {
        drop(self);
    }
}

impl Drop for TodosWidget {
    fn drop(&mut self) {
        if self.subscription.unsubscribe() {
            tracing::debug!("Todos widget unmounted");
        }
    }
}

fn redraw(view: &RefCell<String>, renders: &Cell<usize>, list: &[String]) {
    let mut text = String::from("My Todos");
    for item in list {
        text.push_str("\n- ");
        text.push_str(item);
    }

    *view.borrow_mut() = text;
    renders.set(renders.get() + 1);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::create_store;

    #[test]
    fn test_initial_render_shows_placeholder() {
        let store = create_store();
        let widget = TodosWidget::mount(&store);

        assert_eq!(widget.render(), "[Add new todo...]\nMy Todos");
    }

    #[test]
    fn test_input_shows_pending_text_without_dispatch() {
        let store = create_store();
        let mut widget = TodosWidget::mount(&store);

        widget.input("buy mi");

        assert_eq!(widget.pending(), "buy mi");
        assert!(widget.render().starts_with("[buy mi]"));
        assert!(store.state(|s| s.todos.is_empty()));
    }

    #[test]
    fn test_submit_dispatches_and_clears() {
        let store = create_store();
        let mut widget = TodosWidget::mount(&store);

        widget.input("buy milk");
        widget.submit();

        assert_eq!(widget.pending(), "");
        assert_eq!(widget.render(), "[Add new todo...]\nMy Todos\n- buy milk");
        assert_eq!(widget.render_count(), 2);
    }

    #[test]
    fn test_submit_empty_buffer_still_adds() {
        let store = create_store();
        let mut widget = TodosWidget::mount(&store);

        widget.submit();

        assert_eq!(store.state(|s| s.todos.len()), 1);
        assert_eq!(store.state(|s| s.todos.list[0].clone()), "");
    }

    #[test]
    fn test_ignores_counter_changes() {
        let store = create_store();
        let widget = TodosWidget::mount(&store);

        store.dispatch(AppAction::Increment);

        assert_eq!(widget.render_count(), 1);
    }

    #[test]
    fn test_drop_releases_subscription() {
        let store = create_store();
        {
            let mut widget = TodosWidget::mount(&store);
            widget.input("left behind");
            widget.submit();
            assert_eq!(store.subscriber_count(), 1);
        }

        store.dispatch(AppAction::add_todo("after"));

        assert_eq!(store.subscriber_count(), 0);
        assert_eq!(store.state(|s| s.todos.len()), 2);
    }
}
