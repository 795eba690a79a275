//! Ordered field checks run before a package is extracted from the form.

use super::controls::FieldValues;

/// Descriptions must stay strictly below this many characters.
pub const MAX_DESCRIPTION_CHARS: usize = 50;

/// First rule a set of field values violates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationIssue {
    EmptyName,
    EmptyBasePrice,
    DescriptionTooLong,
    EndBeforeStart,
    NonNumericAmount,
}

impl ValidationIssue {
    pub fn message(self) -> &'static str {
        match self {
            Self::EmptyName => "Package name cannot be empty",
            Self::EmptyBasePrice => "Base price field cannot be empty",
            Self::DescriptionTooLong => "Package description cannot be more than 50 characters",
            Self::EndBeforeStart => "Package end date must be after start date",
            Self::NonNumericAmount => "Base and Commission must be numbers",
        }
    }
}

impl std::fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}

fn is_number(text: &str) -> bool {
    text.trim()
        .parse::<f64>()
        .is_ok_and(|amount| amount.is_finite())
}

/// Runs every rule in order and returns the first violation.
///
/// The commission is only checked when it has text; an empty commission means
/// "no commission".
pub fn check_fields(values: &FieldValues) -> Option<ValidationIssue> {
    if values.pkg_name.is_empty() {
        return Some(ValidationIssue::EmptyName);
    }
    if values.pkg_base_price.is_empty() {
        return Some(ValidationIssue::EmptyBasePrice);
    }
    if values.pkg_desc.chars().count() >= MAX_DESCRIPTION_CHARS {
        return Some(ValidationIssue::DescriptionTooLong);
    }
    if let (Some(start), Some(end)) = (values.pkg_start_date, values.pkg_end_date) {
        if start > end {
            return Some(ValidationIssue::EndBeforeStart);
        }
    }
    let commission = values.pkg_agency_commission.as_str();
    if !is_number(&values.pkg_base_price) || (!commission.is_empty() && !is_number(commission)) {
        return Some(ValidationIssue::NonNumericAmount);
    }
    None
}
