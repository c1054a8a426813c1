use showcase::config::AppConfig;
use showcase::logging;
use showcase::ui::app::App;

fn main() {
    let (config, config_error) = match AppConfig::from_env() {
        Ok(config) => (config, None),
        Err(err) => (AppConfig::default(), Some(err)),
    };

    if let Err(err) = logging::init_tracing(&config.log_filter) {
        eprintln!("failed to initialize logging: {err}");
    }
    if let Some(err) = config_error {
        tracing::error!(%err, "invalid configuration, falling back to defaults");
    }

    dioxus::LaunchBuilder::desktop()
        .with_cfg(
            dioxus::desktop::Config::new().with_window(
                dioxus::desktop::WindowBuilder::new()
                    .with_title("Component Showcase")
                    .with_inner_size(dioxus::desktop::LogicalSize::new(1200.0, 800.0)),
            ),
        )
        .with_context(config)
        .launch(App);
}
