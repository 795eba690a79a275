mod advisory;
mod app_callbacks;
mod app_context;
mod config;
mod config_persistence;
mod package_form;
mod package_store;
mod travel_package;
mod ui;

use std::{cell::RefCell, rc::Rc};

use advisory::DialogAdvisory;
use app_callbacks::package_editing::{register_package_editing_callbacks, reload_packages};
use app_context::{AppSharedState, UiHandles};
use config::Config;
use log::info;
use package_form::PackageForm;
use package_store::PackageStore;
use slint::{ComponentHandle, ModelRc, VecModel};

slint::include_modules!();

fn apply_config_to_ui(ui: &AppWindow, config: &Config) {
    ui.window().set_size(slint::LogicalSize::new(
        config.ui.window_width as f32,
        config.ui.window_height as f32,
    ));
}

fn open_package_store(config: &Config) -> Result<PackageStore, Box<dyn std::error::Error>> {
    let db_path = config
        .storage
        .database_file
        .clone()
        .or_else(config_persistence::default_database_file)
        .ok_or("Could not find data directory")?;
    if let Some(parent) = db_path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    info!("Opening package database. path={}", db_path.display());
    Ok(PackageStore::open(&db_path)?)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut clog = colog::default_builder();
    clog.filter(None, log::LevelFilter::Trace);
    clog.init();

    std::panic::set_hook(Box::new(|panic_info| {
        let current_thread = std::thread::current();
        let thread_name = current_thread.name().unwrap_or("unnamed");
        log::error!("panic in thread '{}': {}", thread_name, panic_info);
    }));

    let config_file =
        config_persistence::default_config_file().ok_or("Could not find config directory")?;
    let config = config_persistence::load_or_create_config(&config_file);
    log::set_max_level(config.logging.level_filter());

    if std::env::var_os("SLINT_BACKEND").is_none() {
        std::env::set_var("SLINT_BACKEND", "winit-software");
        info!("SLINT_BACKEND not set. Defaulting to winit-software");
    }

    let store = Rc::new(open_package_store(&config)?);

    let ui = AppWindow::new()?;
    apply_config_to_ui(&ui, &config);

    let package_list_model = Rc::new(VecModel::from(vec![]));
    ui.set_package_list_model(ModelRc::from(package_list_model.clone()));

    let advisory = Rc::new(DialogAdvisory::new(config.ui.advisory_title.clone()));
    let form = Rc::new(PackageForm::new(advisory));
    ui::form_binding::bind_form_to_view(&form, &ui);

    let shared_state = AppSharedState {
        ui_handles: UiHandles {
            ui_handle: ui.as_weak(),
            package_list_model,
        },
        form,
        store,
        packages: Rc::new(RefCell::new(Vec::new())),
    };
    register_package_editing_callbacks(&ui, &shared_state);
    reload_packages(&shared_state, None);

    ui.run()?;

    info!("Application exiting");
    Ok(())
}
