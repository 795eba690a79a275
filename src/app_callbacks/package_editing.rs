//! Callback registration for package list selection and form actions.

use std::rc::Rc;

use log::{debug, error, info};
use slint::StandardListViewItem;

use crate::{
    app_context::AppSharedState,
    package_form::{validation::ValidationIssue, PackageForm, PackageFormError},
    package_store::PackageStore,
    travel_package::TravelPackage,
    ui::form_binding::sync_date_views,
    AppWindow,
};

#[derive(Debug)]
pub(crate) enum SaveError {
    Form(PackageFormError),
    Store(rusqlite::Error),
}

impl std::fmt::Display for SaveError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Form(err) => write!(f, "{}", err),
            Self::Store(err) => write!(f, "database error: {}", err),
        }
    }
}

impl std::error::Error for SaveError {}

impl From<PackageFormError> for SaveError {
    fn from(err: PackageFormError) -> Self {
        Self::Form(err)
    }
}

impl From<rusqlite::Error> for SaveError {
    fn from(err: rusqlite::Error) -> Self {
        Self::Store(err)
    }
}

#[derive(Debug, PartialEq)]
pub(crate) enum SaveOutcome {
    Saved(TravelPackage),
    Rejected(ValidationIssue),
}

/// Extracts the form's package and stores it when it passes validation.
/// A stored package is loaded back so the form shows its assigned id.
pub(crate) fn save_form_package(
    form: &PackageForm,
    store: &PackageStore,
) -> Result<SaveOutcome, SaveError> {
    // Checked separately so a rejected package is never stored; extraction
    // runs the same rules again to show the advisory.
    let issue = form.validation_issue();
    let package = form.get_travel_package()?;
    if let Some(issue) = issue {
        return Ok(SaveOutcome::Rejected(issue));
    }
    let saved = store.save_package(&package)?;
    form.set_travel_package(&saved);
    Ok(SaveOutcome::Saved(saved))
}

/// Reloads the package list from the store and returns the row of `selected_id`.
pub(crate) fn reload_packages(shared_state: &AppSharedState, selected_id: Option<i32>) -> i32 {
    let packages = match shared_state.store.list_packages() {
        Ok(packages) => packages,
        Err(err) => {
            error!("Failed to load packages: {}", err);
            return -1;
        }
    };
    let items: Vec<StandardListViewItem> = packages
        .iter()
        .map(|package| StandardListViewItem::from(package.list_label().as_str()))
        .collect();
    let selected_row = selected_id
        .and_then(|id| {
            packages
                .iter()
                .position(|package| package.package_id == Some(id))
        })
        .map(|row| row as i32)
        .unwrap_or(-1);
    debug!("Loaded {} packages", packages.len());

    shared_state.ui_handles.package_list_model.set_vec(items);
    *shared_state.packages.borrow_mut() = packages;
    selected_row
}

fn set_status(ui: &AppWindow, message: &str) {
    ui.set_form_dirty(false);
    ui.set_status_message(message.into());
}

pub(crate) fn register_package_editing_callbacks(ui: &AppWindow, shared_state: &AppSharedState) {
    let ui_handle_clone = shared_state.ui_handles.ui_handle.clone();
    shared_state
        .form
        .set_action_listener(Some(Rc::new(move || {
            if let Some(ui) = ui_handle_clone.upgrade() {
                ui.set_form_dirty(true);
            }
        })));

    let shared_state_clone = shared_state.clone();
    ui.on_package_selected(move |index| {
        let package = usize::try_from(index)
            .ok()
            .and_then(|row| shared_state_clone.packages.borrow().get(row).cloned());
        let Some(package) = package else {
            return;
        };
        debug!("Package selected: row={} id={:?}", index, package.package_id);
        shared_state_clone.form.set_travel_package(&package);
        if let Some(ui) = shared_state_clone.ui_handles.ui_handle.upgrade() {
            sync_date_views(&shared_state_clone.form, &ui);
            set_status(&ui, &format!("Editing {}", package.pkg_name));
        }
    });

    let shared_state_clone = shared_state.clone();
    ui.on_new_package(move || {
        debug!(
            "New package requested, leaving package {:?}",
            shared_state_clone
                .form
                .travel_package()
                .and_then(|package| package.package_id)
        );
        shared_state_clone.form.clear();
        if let Some(ui) = shared_state_clone.ui_handles.ui_handle.upgrade() {
            sync_date_views(&shared_state_clone.form, &ui);
            ui.set_selected_package_index(-1);
            set_status(&ui, "New package");
        }
    });

    let shared_state_clone = shared_state.clone();
    ui.on_clear_form(move || {
        debug!("Clear form requested");
        shared_state_clone.form.clear();
        if let Some(ui) = shared_state_clone.ui_handles.ui_handle.upgrade() {
            sync_date_views(&shared_state_clone.form, &ui);
        }
    });

    let shared_state_clone = shared_state.clone();
    ui.on_save_package(move || {
        let outcome = save_form_package(&shared_state_clone.form, &shared_state_clone.store);
        let Some(ui) = shared_state_clone.ui_handles.ui_handle.upgrade() else {
            return;
        };
        match outcome {
            Ok(SaveOutcome::Saved(saved)) => {
                info!("Saved package {:?}", saved.package_id);
                sync_date_views(&shared_state_clone.form, &ui);
                let row = reload_packages(&shared_state_clone, saved.package_id);
                ui.set_selected_package_index(row);
                set_status(&ui, &format!("Saved {}", saved.pkg_name));
            }
            Ok(SaveOutcome::Rejected(issue)) => {
                ui.set_status_message(issue.message().into());
            }
            Err(err) => {
                error!("Failed to save package: {}", err);
                ui.set_status_message(format!("Could not save package: {}", err).into());
            }
        }
    });
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use chrono::NaiveDate;

    use super::{save_form_package, SaveError, SaveOutcome};
    use crate::{
        advisory::testing::RecordingAdvisory,
        package_form::{validation::ValidationIssue, PackageForm},
        package_store::PackageStore,
        travel_package::TravelPackage,
    };

    fn fixture() -> (PackageForm, Rc<RecordingAdvisory>, PackageStore) {
        let advisory = Rc::new(RecordingAdvisory::default());
        let form = PackageForm::new(advisory.clone());
        let store = PackageStore::open_in_memory().expect("in-memory store");
        (form, advisory, store)
    }

    fn unsaved_package() -> TravelPackage {
        TravelPackage {
            package_id: None,
            pkg_name: "European Vacation".to_string(),
            pkg_desc: "Euro Tour with Rail Pass".to_string(),
            pkg_start_date: NaiveDate::from_ymd_opt(2024, 11, 1),
            pkg_end_date: NaiveDate::from_ymd_opt(2024, 11, 14),
            pkg_base_price: 3000.0,
            pkg_agency_commission: Some(280.0),
        }
    }

    #[test]
    fn test_save_new_package_loads_assigned_id_into_form() {
        let (form, advisory, store) = fixture();
        form.set_travel_package(&unsaved_package());

        let outcome = save_form_package(&form, &store).expect("save succeeds");

        let SaveOutcome::Saved(saved) = outcome else {
            panic!("expected package to be saved");
        };
        assert_eq!(saved.package_id, Some(1));
        assert_eq!(form.controls().package_id.get(), "1");
        assert!(advisory.messages.borrow().is_empty());
    }

    #[test]
    fn test_invalid_package_is_not_stored() {
        let (form, advisory, store) = fixture();
        form.set_travel_package(&TravelPackage {
            pkg_name: String::new(),
            ..unsaved_package()
        });

        let outcome = save_form_package(&form, &store).expect("numeric fields parse");

        assert_eq!(outcome, SaveOutcome::Rejected(ValidationIssue::EmptyName));
        assert_eq!(advisory.messages.borrow().len(), 1);
        assert!(store.list_packages().expect("list").is_empty());
    }

    #[test]
    fn test_unparseable_price_is_reported_as_form_error() {
        let (form, _, store) = fixture();
        form.set_travel_package(&unsaved_package());
        form.controls().pkg_base_price.set("12,50".to_string());

        let result = save_form_package(&form, &store);

        assert!(matches!(result, Err(SaveError::Form(_))));
        assert!(store.list_packages().expect("list").is_empty());
    }

    #[test]
    fn test_non_finite_price_is_reported_as_form_error() {
        for text in ["NaN", "inf"] {
            let (form, advisory, store) = fixture();
            form.set_travel_package(&unsaved_package());
            form.controls().pkg_base_price.set(text.to_string());

            let result = save_form_package(&form, &store);

            assert!(
                matches!(result, Err(SaveError::Form(_))),
                "price '{}' should fail before reaching the store",
                text
            );
            assert_eq!(advisory.messages.borrow().len(), 1);
            assert!(store.list_packages().expect("list").is_empty());
        }
    }
}
