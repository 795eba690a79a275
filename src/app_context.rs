use std::{cell::RefCell, rc::Rc};

use slint::{StandardListViewItem, VecModel};

use crate::{
    package_form::PackageForm, package_store::PackageStore, travel_package::TravelPackage,
    AppWindow,
};

#[derive(Clone)]
pub(crate) struct UiHandles {
    pub(crate) ui_handle: slint::Weak<AppWindow>,
    pub(crate) package_list_model: Rc<VecModel<StandardListViewItem>>,
}

#[derive(Clone)]
pub(crate) struct AppSharedState {
    pub(crate) ui_handles: UiHandles,
    pub(crate) form: Rc<PackageForm>,
    pub(crate) store: Rc<PackageStore>,
    /// Packages in list order, as last read from the store.
    pub(crate) packages: Rc<RefCell<Vec<TravelPackage>>>,
}
