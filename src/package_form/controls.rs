//! Observable control values backing the package edit form.

use std::{cell::RefCell, rc::Rc};

use chrono::NaiveDate;

type Observer<T> = Rc<dyn Fn(&T)>;

/// A single control value with change observers.
///
/// Observers run after the new value is committed and only when the value
/// actually changed.
pub struct ObservableValue<T> {
    value: RefCell<T>,
    observers: RefCell<Vec<Observer<T>>>,
}

impl<T: Clone + PartialEq + Default> Default for ObservableValue<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: Clone + PartialEq> ObservableValue<T> {
    pub fn new(value: T) -> Self {
        Self {
            value: RefCell::new(value),
            observers: RefCell::new(Vec::new()),
        }
    }

    pub fn get(&self) -> T {
        self.value.borrow().clone()
    }

    /// Commits `next` and notifies observers. Returns whether the value changed.
    pub fn set(&self, next: T) -> bool {
        {
            let mut current = self.value.borrow_mut();
            if *current == next {
                return false;
            }
            *current = next.clone();
        }
        // Snapshot so observers may register further observers.
        let observers: Vec<Observer<T>> = self.observers.borrow().clone();
        for observer in observers {
            observer(&next);
        }
        true
    }

    pub fn add_observer(&self, observer: impl Fn(&T) + 'static) {
        self.observers.borrow_mut().push(Rc::new(observer));
    }
}

pub type TextControl = ObservableValue<String>;
pub type DateControl = ObservableValue<Option<NaiveDate>>;

/// Raw control values read in one pass, before any conversion.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldValues {
    pub package_id: String,
    pub pkg_name: String,
    pub pkg_desc: String,
    pub pkg_start_date: Option<NaiveDate>,
    pub pkg_end_date: Option<NaiveDate>,
    pub pkg_base_price: String,
    pub pkg_agency_commission: String,
}

/// Every control bound by the package edit form.
#[derive(Default)]
pub struct FormControls {
    pub package_id: TextControl,
    pub pkg_name: TextControl,
    pub pkg_desc: TextControl,
    pub pkg_start_date: DateControl,
    pub pkg_end_date: DateControl,
    pub pkg_base_price: TextControl,
    pub pkg_agency_commission: TextControl,
}

impl FormControls {
    pub fn text_controls(&self) -> [&TextControl; 5] {
        [
            &self.package_id,
            &self.pkg_name,
            &self.pkg_desc,
            &self.pkg_base_price,
            &self.pkg_agency_commission,
        ]
    }

    pub fn date_controls(&self) -> [&DateControl; 2] {
        [&self.pkg_start_date, &self.pkg_end_date]
    }

    pub fn snapshot(&self) -> FieldValues {
        FieldValues {
            package_id: self.package_id.get(),
            pkg_name: self.pkg_name.get(),
            pkg_desc: self.pkg_desc.get(),
            pkg_start_date: self.pkg_start_date.get(),
            pkg_end_date: self.pkg_end_date.get(),
            pkg_base_price: self.pkg_base_price.get(),
            pkg_agency_commission: self.pkg_agency_commission.get(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, rc::Rc};

    use super::{FormControls, ObservableValue};

    #[test]
    fn test_set_notifies_only_on_change() {
        let control = ObservableValue::new(String::new());
        let seen = Rc::new(RefCell::new(Vec::new()));
        let seen_clone = seen.clone();
        control.add_observer(move |value: &String| seen_clone.borrow_mut().push(value.clone()));

        assert!(control.set("Bali".to_string()));
        assert!(!control.set("Bali".to_string()));
        assert!(control.set(String::new()));

        assert_eq!(*seen.borrow(), vec!["Bali".to_string(), String::new()]);
    }

    #[test]
    fn test_observer_reads_committed_value() {
        let control = Rc::new(ObservableValue::new(0_i32));
        let observed = Rc::new(RefCell::new(None));
        let control_clone = control.clone();
        let observed_clone = observed.clone();
        control.add_observer(move |_| {
            *observed_clone.borrow_mut() = Some(control_clone.get());
        });

        control.set(42);

        assert_eq!(*observed.borrow(), Some(42));
    }

    #[test]
    fn test_snapshot_reads_every_control() {
        let controls = FormControls::default();
        controls.pkg_name.set("Asian Expedition".to_string());
        controls.pkg_base_price.set("2800.00".to_string());

        let values = controls.snapshot();

        assert_eq!(values.pkg_name, "Asian Expedition");
        assert_eq!(values.pkg_base_price, "2800.00");
        assert!(values.package_id.is_empty());
        assert_eq!(values.pkg_start_date, None);
    }
}
