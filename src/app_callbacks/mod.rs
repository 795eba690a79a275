//! UI callback registration modules grouped by feature area.

pub mod package_editing;
