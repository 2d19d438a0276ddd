use std::sync::Arc;

use anyhow::Result;
use tauri::webview::PageLoadEvent;
use tauri::{Manager, RunEvent, WindowEvent, Wry};
use tracing_subscriber::EnvFilter;

use crate::app::{App, AppContext};
use crate::commands;
use crate::config::Config;
use crate::dialog::NativeDirectoryDialog;
use crate::docker::EngineConnector;

/// Label of the window declared in `tauri.conf.json`.
pub const MAIN_WINDOW: &str = "main";

pub type DesktopApp = App<EngineConnector, NativeDirectoryDialog<Wry>>;

/// Start the desktop application and block until it exits.
pub fn run() -> Result<()> {
    let config = Config::from_env();
    init_tracing(&config);

    let app = tauri::Builder::default()
        .plugin(tauri_plugin_dialog::init())
        .setup(move |app| {
            startup(app, config);
            Ok(())
        })
        .on_page_load(|webview, payload| {
            if matches!(payload.event(), PageLoadEvent::Finished)
                && let Some(app) = webview.try_state::<Arc<DesktopApp>>()
            {
                app.dom_ready();
            }
        })
        .on_window_event(|window, event| {
            if let WindowEvent::CloseRequested { api, .. } = event
                && let Some(app) = window.try_state::<Arc<DesktopApp>>()
                && app.before_close()
            {
                api.prevent_close();
            }
        })
        .invoke_handler(tauri::generate_handler![
            commands::list_containers,
            commands::select_directory,
        ])
        .build(tauri::generate_context!())?;

    app.run(|handle, event| {
        if let RunEvent::Exit = event
            && let Some(app) = handle.try_state::<Arc<DesktopApp>>()
        {
            app.shutdown();
        }
    });

    Ok(())
}

fn startup(app: &mut tauri::App<Wry>, config: Config) {
    let connector = EngineConnector::new(config.docker_host.clone());
    let context = AppContext {
        config,
        window_label: MAIN_WINDOW.to_string(),
    };
    let handle = app.handle().clone();
    let backend = App::startup(context, connector, |ctx| {
        NativeDirectoryDialog::new(handle, ctx.window_label.clone())
    });
    app.manage(Arc::new(backend));
}

/// `RUST_LOG` wins over the configured filter.
fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_filter));
    // A subscriber may already be installed when embedded.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}
