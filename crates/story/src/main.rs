use std::path::Path;

use gpui::*;
use gpui_component::Root;
use gpui_reorder_list::ReorderConfig;
use tracing_subscriber::EnvFilter;

use gpui_reorder_list_story::config::{CONFIG_FILE, load_config};
use gpui_reorder_list_story::reorder_list::ReorderListExample;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = load_config(Path::new(CONFIG_FILE)).unwrap_or_else(|err| {
        tracing::warn!(error = ?err, "using default reorder settings");
        ReorderConfig::default()
    });

    let app = Application::new();

    app.run(move |cx| {
        gpui_component::init(cx);
        cx.activate(true);

        cx.spawn(async move |cx| {
            cx.open_window(
                WindowOptions {
                    titlebar: Some(TitlebarOptions {
                        title: Some("Reorder List".into()),
                        appears_transparent: false,
                        traffic_light_position: None,
                    }),
                    ..Default::default()
                },
                move |window, cx| {
                    let view = ReorderListExample::view(config, window, cx);
                    cx.new(|cx| Root::new(view, window, cx))
                },
            )?;

            Ok::<_, anyhow::Error>(())
        })
        .detach();
    });
}
