//! Counter widget: two buttons around the current value.

use crate::action::AppAction;
use crate::app::{AppState, AppStore};
use statefold_runtime::Subscription;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// Text rendering of the counter, re-drawn when `counter.value` changes
pub struct CounterWidget {
    store: AppStore,
    view: Rc<RefCell<String>>,
    renders: Rc<Cell<usize>>,
    subscription: Subscription<AppState>,
}

impl CounterWidget {
    /// Render once and subscribe to the counter slice
    #[must_use]
    pub fn mount(store: &AppStore) -> Self {
        let view = Rc::new(RefCell::new(String::new()));
        let renders = Rc::new(Cell::new(0));

        redraw(&view, &renders, store.state(|s| s.counter.value));

        let subscription = {
            let view = Rc::clone(&view);
            let renders = Rc::clone(&renders);
            store.watch(|s| s.counter.value, move |value| redraw(&view, &renders, *value))
        };

        tracing::debug!(subscriber = subscription.id(), "Counter widget mounted");

        Self {
            store: store.clone(),
            view,
            renders,
            subscription,
        }
    }

    /// The `+` button
    pub fn click_increment(&self) {
        self.store.dispatch(AppAction::Increment);
    }

    /// The `-` button
    pub fn click_decrement(&self) {
        self.store.dispatch(AppAction::Decrement);
    }

    /// Current rendering
    #[must_use]
    pub fn render(&self) -> String {
        self.view.borrow().clone()
    }

    /// How many times the widget has drawn itself, including the first draw
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

impl Drop for CounterWidget {
    fn drop(&mut self) {
        if self.subscription.unsubscribe() {
            tracing::debug!("Counter widget unmounted");
        }
    }
}

fn redraw(view: &RefCell<String>, renders: &Cell<usize>, value: i64) {
    *view.borrow_mut() = format!("Counter\n[-] {value} [+]");
    renders.set(renders.get() + 1);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::create_store;

    #[test]
    fn test_initial_render() {
        let store = create_store();
        let widget = CounterWidget::mount(&store);

        assert_eq!(widget.render(), "Counter\n[-] 0 [+]");
        assert_eq!(widget.render_count(), 1);
    }

    #[test]
    fn test_buttons_dispatch_and_redraw() {
        let store = create_store();
        let widget = CounterWidget::mount(&store);

        widget.click_increment();
        widget.click_increment();
        widget.click_decrement();

        assert_eq!(store.state(|s| s.counter.value), 1);
        assert_eq!(widget.render(), "Counter\n[-] 1 [+]");
        assert_eq!(widget.render_count(), 4);
    }

    #[test]
    fn test_ignores_todo_changes() {
        let store = create_store();
        let widget = CounterWidget::mount(&store);

        store.dispatch(AppAction::add_todo("unrelated"));

        assert_eq!(widget.render_count(), 1);
    }

    #[test]
    fn test_unmount_releases_subscription() {
        let store = create_store();
        let widget = CounterWidget::mount(&store);
        assert_eq!(store.subscriber_count(), 1);

        widget.unmount();

        assert_eq!(store.subscriber_count(), 0);
    }

    #[test]
    fn test_drop_releases_subscription() {
        let store = create_store();
        let widget = CounterWidget::mount(&store);
        let stale = CounterWidget::mount(&store);
        assert_eq!(store.subscriber_count(), 2);

        drop(stale);
        widget.click_increment();

        assert_eq!(store.subscriber_count(), 1);
        assert_eq!(widget.render_count(), 2);
    }
}
