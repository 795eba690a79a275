//! Slint-contract regression tests for callback/property wiring.

#[cfg(test)]
mod tests {
    #[test]
    fn test_form_fields_are_exposed_as_window_properties() {
        let slint_ui = include_str!("../travelex.slint");
        for property in [
            "package_id_text",
            "pkg_name_text",
            "pkg_desc_text",
            "pkg_start_date_text",
            "pkg_end_date_text",
            "pkg_base_price_text",
            "pkg_agency_commission_text",
        ] {
            assert!(
                slint_ui.contains(&format!("in-out property <string> {}: \"\";", property)),
                "App window should expose {} for form binding",
                property
            );
            assert!(
                slint_ui.contains(&format!("{} <=> root.{};", property, property)),
                "Package form should bind {} to the window property",
                property
            );
        }
    }

    #[test]
    fn test_every_editable_field_raises_field_edited() {
        let slint_ui = include_str!("../travelex.slint");
        assert!(
            slint_ui.contains("export enum FormField {"),
            "Form field identifiers should be exported for the Rust side"
        );
        for field in [
            "pkg-name",
            "pkg-desc",
            "pkg-start-date",
            "pkg-end-date",
            "pkg-base-price",
            "pkg-agency-commission",
        ] {
            assert!(
                slint_ui.contains(&format!("root.field_edited(FormField.{}, text);", field)),
                "Editing {} should raise field_edited",
                field
            );
        }
        assert!(
            slint_ui.contains("callback field_edited(FormField, string);"),
            "App window should expose the field_edited callback"
        );
    }

    #[test]
    fn test_package_id_is_read_only() {
        let slint_ui = include_str!("../travelex.slint");
        let id_row = slint_ui
            .split("label: \"Package Id\";")
            .nth(1)
            .expect("package id row present");
        let id_edit = id_row.split("FieldRow {").next().unwrap_or_default();
        assert!(
            id_edit.contains("read-only: true;"),
            "Package id should not be user editable"
        );
    }

    #[test]
    fn test_date_rows_expose_clear_buttons() {
        let slint_ui = include_str!("../travelex.slint");
        assert!(
            slint_ui.contains("root.clear_date(FormField.pkg-start-date);")
                && slint_ui.contains("root.clear_date(FormField.pkg-end-date);"),
            "Both date rows should offer a clear action"
        );
        assert!(
            slint_ui.contains("placeholder-text: \"YYYY-MM-DD\";"),
            "Date inputs should hint the accepted format"
        );
    }

    #[test]
    fn test_host_actions_and_status_line() {
        let slint_ui = include_str!("../travelex.slint");
        assert!(
            slint_ui.contains("callback package_selected(int);")
                && slint_ui.contains("root.package_selected(index);"),
            "Package list selection should be forwarded"
        );
        assert!(
            slint_ui.contains("root.new_package();")
                && slint_ui.contains("root.clear_form();")
                && slint_ui.contains("root.save_package();"),
            "New, Clear, and Save buttons should be wired"
        );
        assert!(
            slint_ui.contains("text: root.form_dirty ? \"Unsaved changes\" : root.status_message;"),
            "Status line should reflect the dirty flag"
        );
    }
}
