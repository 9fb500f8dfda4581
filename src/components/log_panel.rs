//! Log Panel Component
//!
//! Collapsible footer showing the lines buffered by the rolling logger.

use leptos::prelude::*;
use rolling_logger::RollingLogger;

#[component]
pub fn LogPanel(logger: &'static RollingLogger) -> impl IntoView {
    let (open, set_open) = signal(false);
    let (lines, set_lines) = signal(Vec::<String>::new());

    // Snapshot, not live; the buffer is not reactive
    let refresh = move || set_lines.set(logger.recent());

    view! {
        <footer class="log-panel">
            <button
                type="button"
                class="log-toggle"
                on:click=move |_| {
                    if !open.get_untracked() {
                        refresh();
                    }
                    set_open.update(|o| *o = !*o);
                }
            >
                {move || if open.get() { "Hide activity log" } else { "Show activity log" }}
            </button>
            <Show when=move || open.get()>
                <div class="log-actions">
                    <button type="button" on:click=move |_| refresh()>"Refresh"</button>
                    <button
                        type="button"
                        on:click=move |_| {
                            logger.clear();
                            set_lines.set(Vec::new());
                        }
                    >
                        "Clear"
                    </button>
                </div>
                <pre class="log-lines">{move || lines.get().join("\n")}</pre>
            </Show>
        </footer>
    }
}
