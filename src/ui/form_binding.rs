//! Two-way binding between the package form controls and the Slint window.

use std::rc::Rc;

use chrono::NaiveDate;
use log::debug;
use slint::{ComponentHandle, SharedString};

use crate::{
    package_form::{
        controls::{DateControl, TextControl},
        PackageForm,
    },
    AppWindow, FormField,
};

pub(crate) const DATE_FORMAT: &str = "%Y-%m-%d";

type TextSetter = fn(&AppWindow, SharedString);
type TextGetter = fn(&AppWindow) -> SharedString;

pub(crate) fn format_date(date: Option<NaiveDate>) -> String {
    date.map(|date| date.format(DATE_FORMAT).to_string())
        .unwrap_or_default()
}

/// Date for fully typed `YYYY-MM-DD` text; partial or unpadded text is no date.
pub(crate) fn parse_date_text(text: &str) -> Option<NaiveDate> {
    let trimmed = text.trim();
    NaiveDate::parse_from_str(trimmed, DATE_FORMAT)
        .ok()
        .filter(|date| date.format(DATE_FORMAT).to_string() == trimmed)
}

/// Text the view must show for `value`, or `None` when the text it already
/// shows stands for that value.
pub(crate) fn date_view_update(view_text: &str, value: Option<NaiveDate>) -> Option<String> {
    if parse_date_text(view_text) == value {
        None
    } else {
        Some(format_date(value))
    }
}

fn bind_text_control(control: &TextControl, ui: &AppWindow, setter: TextSetter) {
    setter(ui, control.get().as_str().into());
    let ui_handle = ui.as_weak();
    control.add_observer(move |value: &String| {
        if let Some(ui) = ui_handle.upgrade() {
            setter(&ui, value.as_str().into());
        }
    });
}

// The view keeps what the user is typing; only a differing value rewrites it.
fn bind_date_control(
    control: &DateControl,
    ui: &AppWindow,
    getter: TextGetter,
    setter: TextSetter,
) {
    setter(ui, format_date(control.get()).into());
    let ui_handle = ui.as_weak();
    control.add_observer(move |value: &Option<NaiveDate>| {
        if let Some(ui) = ui_handle.upgrade() {
            if let Some(text) = date_view_update(getter(&ui).as_str(), *value) {
                setter(&ui, text.into());
            }
        }
    });
}

/// Rewrites both date inputs from their controls, dropping any partial text.
pub(crate) fn sync_date_views(form: &PackageForm, ui: &AppWindow) {
    let controls = form.controls();
    ui.set_pkg_start_date_text(format_date(controls.pkg_start_date.get()).into());
    ui.set_pkg_end_date_text(format_date(controls.pkg_end_date.get()).into());
}

/// Text that is not a complete date clears the value, so a stale date is
/// never kept behind what the user sees.
fn apply_date_edit(control: &DateControl, text: &str) {
    let date = parse_date_text(text);
    if date.is_none() && !text.trim().is_empty() {
        debug!("Date text '{}' is not a complete date", text);
    }
    control.set(date);
}

/// Routes a user edit from the window into the matching control.
pub(crate) fn apply_field_edit(form: &PackageForm, field: FormField, text: &str) {
    let controls = form.controls();
    match field {
        FormField::PackageId => {
            controls.package_id.set(text.to_string());
        }
        FormField::PkgName => {
            controls.pkg_name.set(text.to_string());
        }
        FormField::PkgDesc => {
            controls.pkg_desc.set(text.to_string());
        }
        FormField::PkgStartDate => apply_date_edit(&controls.pkg_start_date, text),
        FormField::PkgEndDate => apply_date_edit(&controls.pkg_end_date, text),
        FormField::PkgBasePrice => {
            controls.pkg_base_price.set(text.to_string());
        }
        FormField::PkgAgencyCommission => {
            controls.pkg_agency_commission.set(text.to_string());
        }
    }
}

/// Mirrors every control into the window and routes window edits back.
pub(crate) fn bind_form_to_view(form: &Rc<PackageForm>, ui: &AppWindow) {
    let controls = form.controls();
    bind_text_control(&controls.package_id, ui, AppWindow::set_package_id_text);
    bind_text_control(&controls.pkg_name, ui, AppWindow::set_pkg_name_text);
    bind_text_control(&controls.pkg_desc, ui, AppWindow::set_pkg_desc_text);
    bind_date_control(
        &controls.pkg_start_date,
        ui,
        AppWindow::get_pkg_start_date_text,
        AppWindow::set_pkg_start_date_text,
    );
    bind_date_control(
        &controls.pkg_end_date,
        ui,
        AppWindow::get_pkg_end_date_text,
        AppWindow::set_pkg_end_date_text,
    );
    bind_text_control(
        &controls.pkg_base_price,
        ui,
        AppWindow::set_pkg_base_price_text,
    );
    bind_text_control(
        &controls.pkg_agency_commission,
        ui,
        AppWindow::set_pkg_agency_commission_text,
    );

    let form_clone = form.clone();
    ui.on_field_edited(move |field, text| {
        apply_field_edit(&form_clone, field, text.as_str());
    });

    let form_clone = form.clone();
    let ui_handle = ui.as_weak();
    ui.on_clear_date(move |field| {
        match field {
            FormField::PkgStartDate => form_clone.clear_start_date(),
            FormField::PkgEndDate => form_clone.clear_end_date(),
            other => debug!("Ignoring clear request for non-date field {:?}", other),
        }
        if let Some(ui) = ui_handle.upgrade() {
            sync_date_views(&form_clone, &ui);
        }
    });
}
