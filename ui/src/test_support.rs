//! Helpers for tests that mount components in a headless `VirtualDom`.

use std::sync::Mutex;
use std::sync::OnceLock;
use std::thread;
use std::time::Duration;

use dioxus::prelude::*;
use dioxus_core::NoOpMutations;

/// Held by tests that point `USER_PREFS_FILE` somewhere, since the
/// environment is shared by every test thread.
pub(crate) static PREFS_ENV: Mutex<()> = Mutex::new(());

/// Starts (once per test binary) a local users API and points
/// `USERS_API_BASE_URL` at it.
///
/// `GET /users` answers 500; every single-user lookup answers 404.
pub(crate) fn failing_users_api() -> &'static str {
    static BASE_URL: OnceLock<String> = OnceLock::new();

    BASE_URL.get_or_init(|| {
        let server = tiny_http::Server::http("127.0.0.1:0").unwrap();
        let port = server.server_addr().to_ip().unwrap().port();

        thread::spawn(move || {
            for request in server.incoming_requests() {
                let status = if request.url() == "/users" { 500 } else { 404 };
                let response = tiny_http::Response::from_string("unavailable").with_status_code(status);
                let _ = request.respond(response);
            }
        });

        let base_url = format!("http://127.0.0.1:{}", port);
        std::env::set_var("USERS_API_BASE_URL", &base_url);
        base_url
    })
}

/// Lets spawned tasks run and re-renders until the SSR output contains
/// `needle`, giving up after about five seconds.
pub(crate) async fn render_until(dom: &mut VirtualDom, needle: &str) -> String {
    for _ in 0..50 {
        let html = dioxus_ssr::render(dom);
        if html.contains(needle) {
            return html;
        }
        let _ = tokio::time::timeout(Duration::from_millis(100), dom.wait_for_work()).await;
        dom.render_immediate(&mut NoOpMutations);
    }
    dioxus_ssr::render(dom)
}
