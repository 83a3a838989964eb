use api::config::ApiConfig;
use dioxus_logger::tracing;

fn main() {
    #[cfg(target_arch = "wasm32")]
    console_error_panic_hook::set_once();

    dioxus_logger::init(tracing::Level::INFO).expect("failed to init logger");
    tracing::info!("users API: {}", ApiConfig::from_env().base_url());

    dioxus::launch(ui::App);
}
