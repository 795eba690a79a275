//! Travel package record shared by the edit form and the package store.

use chrono::NaiveDate;

/// A bookable travel offering.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TravelPackage {
    /// Absent until the package has been stored.
    pub package_id: Option<i32>,
    pub pkg_name: String,
    pub pkg_desc: String,
    pub pkg_start_date: Option<NaiveDate>,
    pub pkg_end_date: Option<NaiveDate>,
    pub pkg_base_price: f64,
    pub pkg_agency_commission: Option<f64>,
}

impl TravelPackage {
    /// Label used for the package list in the host window.
    pub fn list_label(&self) -> String {
        match self.package_id {
            Some(id) => format!("{} - {}", id, self.pkg_name),
            None => self.pkg_name.clone(),
        }
    }
}
