//! Widgets example binary
//!
//! Mounts the counter and todos widgets on one store and plays a short
//! scripted session, printing the page after each interaction.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use widgets::{App, AppAction, create_store};

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "widgets=debug,statefold_runtime=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    println!("=== Widgets: one store, two slices ===\n");

    let store = create_store();
    let mut app = App::mount(&store);
    println!("{}\n", app.render());

    for _ in 0..3 {
        println!(">>> Click: +");
        app.counter.click_increment();
    }
    println!(">>> Click: -");
    app.counter.click_decrement();
    println!("\n{}\n", app.render());

    for text in ["buy milk", "walk the dog"] {
        println!(">>> Type: {text:?}");
        app.todos.input(text);
        println!("{}\n", app.render());
        println!(">>> Submit");
        app.todos.submit();
    }
    println!("\n{}\n", app.render());

    println!(">>> Dispatch raw: {{\"type\":\"unknown/noop\"}}");
    let before = store.get_state();
    let after = store.dispatch(AppAction::from_json(r#"{"type":"unknown/noop"}"#)?);
    println!("State unchanged: {}", *before == *after);

    println!(
        "\nRe-renders: counter={} todos={}",
        app.counter.render_count(),
        app.todos.render_count()
    );
    println!("\nFinal state:\n{}", serde_json::to_string_pretty(&*store.get_state())?);

    app.unmount();
    println!("\n=== Session complete ===");
    Ok(())
}
