use api::config::ApiConfig;
use dioxus_logger::tracing;
use ui::compat::PrefsFile;

fn main() {
    dioxus_logger::init(tracing::Level::INFO).expect("failed to init logger");
    tracing::info!("users API: {}", ApiConfig::from_env().base_url());
    match PrefsFile::from_env() {
        Some(file) => tracing::info!("theme preference file: {}", file.path().display()),
        None => tracing::warn!("no config directory; theme preference will not persist"),
    }

    dioxus::launch(ui::App);
}
