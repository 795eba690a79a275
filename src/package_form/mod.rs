//! Package edit form: binds a travel package to observable controls, validates
//! user input, and notifies a single action listener on every field change.

pub mod controls;
pub mod validation;

use std::{cell::RefCell, rc::Rc, str::FromStr};

use log::debug;

use crate::{advisory::AdvisoryPresenter, travel_package::TravelPackage};
use controls::FormControls;
use validation::{check_fields, ValidationIssue};

/// Receives a payload-free notification whenever a form field changes.
pub trait ActionListener {
    fn on_action(&self);
}

impl<F: Fn()> ActionListener for F {
    fn on_action(&self) {
        self()
    }
}

type SharedListener = Rc<RefCell<Option<Rc<dyn ActionListener>>>>;

/// Failure to convert control text into a package field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PackageFormError {
    InvalidNumber { field: &'static str, text: String },
}

impl std::fmt::Display for PackageFormError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidNumber { field, text } => {
                write!(f, "invalid number for {}: '{}'", field, text)
            }
        }
    }
}

impl std::error::Error for PackageFormError {}

fn parse_number<T: FromStr>(field: &'static str, text: &str) -> Result<T, PackageFormError> {
    text.parse::<T>()
        .map_err(|_| PackageFormError::InvalidNumber {
            field,
            text: text.to_string(),
        })
}

/// Amounts allow surrounding whitespace and must be finite.
fn parse_amount(field: &'static str, text: &str) -> Result<f64, PackageFormError> {
    parse_number::<f64>(field, text.trim())
        .ok()
        .filter(|amount| amount.is_finite())
        .ok_or_else(|| PackageFormError::InvalidNumber {
            field,
            text: text.to_string(),
        })
}

fn format_amount(amount: f64) -> String {
    format!("{:.2}", amount)
}

fn notify_listener(listener: &SharedListener) {
    // Cloned out so the listener may replace itself.
    let current = listener.borrow().clone();
    if let Some(current) = current {
        current.on_action();
    }
}

pub struct PackageForm {
    controls: Rc<FormControls>,
    travel_package: RefCell<Option<Rc<TravelPackage>>>,
    action_listener: SharedListener,
    advisory: Rc<dyn AdvisoryPresenter>,
}

impl PackageForm {
    pub fn new(advisory: Rc<dyn AdvisoryPresenter>) -> Self {
        let controls = Rc::new(FormControls::default());
        let action_listener: SharedListener = Rc::new(RefCell::new(None));

        for control in controls.text_controls() {
            let listener = action_listener.clone();
            control.add_observer(move |_| notify_listener(&listener));
        }
        for control in controls.date_controls() {
            let listener = action_listener.clone();
            control.add_observer(move |_| notify_listener(&listener));
        }

        Self {
            controls,
            travel_package: RefCell::new(None),
            action_listener,
            advisory,
        }
    }

    pub fn controls(&self) -> &Rc<FormControls> {
        &self.controls
    }

    /// Last package loaded with [`PackageForm::set_travel_package`].
    pub fn travel_package(&self) -> Option<Rc<TravelPackage>> {
        self.travel_package.borrow().clone()
    }

    /// Replaces the stored package and shows its fields.
    pub fn set_travel_package(&self, package: &TravelPackage) {
        debug!("Loading package into form: id={:?}", package.package_id);
        *self.travel_package.borrow_mut() = Some(Rc::new(package.clone()));

        let controls = &self.controls;
        controls.package_id.set(
            package
                .package_id
                .map(|id| id.to_string())
                .unwrap_or_default(),
        );
        controls.pkg_name.set(package.pkg_name.clone());
        controls.pkg_desc.set(package.pkg_desc.clone());
        controls.pkg_start_date.set(package.pkg_start_date);
        controls.pkg_end_date.set(package.pkg_end_date);
        controls
            .pkg_base_price
            .set(format_amount(package.pkg_base_price));
        controls.pkg_agency_commission.set(
            package
                .pkg_agency_commission
                .map(format_amount)
                .unwrap_or_default(),
        );
    }

    /// Validation result for the current field values, without an advisory.
    pub fn validation_issue(&self) -> Option<ValidationIssue> {
        check_fields(&self.controls.snapshot())
    }

    /// Builds a new package from the current field values.
    ///
    /// A failed rule is shown as an advisory but does not stop extraction.
    /// Text that cannot be converted to a number is returned as an error.
    pub fn get_travel_package(&self) -> Result<TravelPackage, PackageFormError> {
        let values = self.controls.snapshot();
        if let Some(issue) = check_fields(&values) {
            debug!("Package form validation failed: {:?}", issue);
            self.advisory.show_warning(issue.message());
        }

        let package_id = if values.package_id.is_empty() {
            None
        } else {
            Some(parse_number::<i32>("package id", &values.package_id)?)
        };
        let pkg_base_price = parse_amount("base price", &values.pkg_base_price)?;
        let pkg_agency_commission = if values.pkg_agency_commission.is_empty() {
            None
        } else {
            Some(parse_amount(
                "agency commission",
                &values.pkg_agency_commission,
            )?)
        };

        Ok(TravelPackage {
            package_id,
            pkg_name: values.pkg_name,
            pkg_desc: values.pkg_desc,
            pkg_start_date: values.pkg_start_date,
            pkg_end_date: values.pkg_end_date,
            pkg_base_price,
            pkg_agency_commission,
        })
    }

    /// Blanks every field. The stored package is kept.
    pub fn clear(&self) {
        for control in self.controls.text_controls() {
            control.set(String::new());
        }
        for control in self.controls.date_controls() {
            control.set(None);
        }
    }

    pub fn clear_start_date(&self) {
        self.controls.pkg_start_date.set(None);
    }

    pub fn clear_end_date(&self) {
        self.controls.pkg_end_date.set(None);
    }

    /// Replaces the registered listener; `None` unregisters it.
    pub fn set_action_listener(&self, listener: Option<Rc<dyn ActionListener>>) {
        *self.action_listener.borrow_mut() = listener;
    }
}
