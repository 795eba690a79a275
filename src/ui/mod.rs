//! UI-focused helper modules shared by callback wiring.

pub(crate) mod form_binding;
#[cfg(test)]
mod slint_contract_tests;
