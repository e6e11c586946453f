//! Writes the static host page to stdout.
//!
//! `cargo run --bin render_page > site/index.html`, next to the `pkg/`
//! directory produced by wasm-pack.

fn main() {
    print!("{}", asx_dashboard::dashboard::dashboard_html());
}
