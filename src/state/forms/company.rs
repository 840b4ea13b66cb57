//! The company-details intake form: schema definition and submit gating

use super::field::{Field, FieldValue};
use super::schema::{FormNavigation, FormSchema, SchemaBuilder};
use crate::handlers::SubmissionHandler;
use chrono::Local;
use thiserror::Error;

pub const COUNTRIES: &[&str] = &["USA", "Canada", "Mexico"];
pub const STATES: &[&str] = &["California", "New York", "Texas", "Florida"];
pub const SERVICES: &[&str] = &["Service 1", "Service 2", "Service 3"];
pub const AUDIENCES: &[&str] = &["Audience 1", "Audience 2", "Audience 3"];
pub const YEAR_TYPES: &[&str] = &["Calendar Year", "Fiscal Year", "Academic Year"];
pub const RELATIONSHIPS: &[&str] = &["Relationship 1", "Relationship 2", "Relationship 3"];
pub const LEVERAGING_GROUPS: &[&str] = &["Group 1", "Group 2", "Group 3"];

/// Path of the field mirrored by the partnership toggle
const PARTNERING_PATH: &str = "partnerships.partneringWithAnotherAgency";

/// Non-fatal submit-time failure, surfaced to the user as a notice
#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("form is invalid; missing: {}", missing.join(", "))]
    Invalid { missing: Vec<String> },
}

/// Company-details form: the nested field schema plus the partnership
/// toggle that mirrors into `partnerships.partneringWithAnotherAgency`.
///
/// The toggle and the mirrored field change together through
/// [`set_partnering`](Self::set_partnering); nothing else writes that field.
#[derive(Debug, Clone)]
pub struct CompanyDetailsForm {
    schema: FormSchema,
    partnering_with_agency: bool,
    active_field_index: usize,
}

impl CompanyDetailsForm {
    pub fn new() -> Self {
        let schema = SchemaBuilder::new()
            .group(
                "generalInfo",
                "General Info",
                vec![
                    Field::text_with_value("companyType", "Company Type", "Pharmaceutical")
                        .required(),
                    Field::text_with_value(
                        "companyName",
                        "Company Name",
                        "Actelion Pharmaceuticals US, Inc.",
                    )
                    .required(),
                    Field::text("streetAddress1", "Street Address 1").required(),
                    Field::text("streetAddress2", "Street Address 2"),
                    Field::choice_with_value("country", "Country", COUNTRIES, "USA").required(),
                    Field::choice("state", "State", STATES).required(),
                    Field::text("city", "City").required(),
                    Field::text("zip", "Zip").required(),
                    Field::text("requestedBy", "Requested By").required(),
                    Field::date_with_value(
                        "requestDate",
                        "Request Date",
                        Local::now().date_naive(),
                    )
                    .required(),
                    Field::text("geographicLocation", "Geographic Location").required(),
                ],
            )
            .group(
                "purchasingContact",
                "Purchasing Contact",
                vec![
                    Field::text_with_value("firstName", "First Name", "Robert"),
                    Field::text_with_value("lastName", "Last Name", "Fox"),
                    Field::text_with_value("phone", "Phone", "(684) 555-0102"),
                    Field::text_with_value("email", "Email", "robertfox@gmail.com"),
                ],
            )
            .group(
                "termAndHistory",
                "Term and History",
                vec![
                    Field::date("startDate", "Start Date").required(),
                    Field::date("endDate", "End Date").required(),
                    Field::text_with_value("agreementTerm", "Agreement Term", "Agreement Term"),
                    Field::text_with_value(
                        "contractHistory",
                        "Contract History",
                        "Contract History",
                    ),
                    Field::text_with_value(
                        "contractHistoryComments",
                        "Contract History Comments",
                        "Contract History Comments",
                    ),
                ],
            )
            .group(
                "partnerships",
                "Partnerships",
                vec![Field::boolean(
                    "partneringWithAnotherAgency",
                    "Partnering with another agency",
                    false,
                )],
            )
            .group(
                "servicesAndExclusions",
                "Services and Exclusions",
                vec![
                    Field::choice("services", "Services", SERVICES),
                    Field::choice("audience", "Audience", AUDIENCES),
                    Field::choice("yearType", "Year Type", YEAR_TYPES),
                    Field::boolean("exclusions", "Exclusions", false),
                ],
            )
            .group(
                "policies",
                "Policies",
                vec![Field::boolean(
                    "conflictPolicyInMSA",
                    "Conflict policy in MSA",
                    false,
                )],
            )
            .group(
                "other",
                "Other",
                vec![
                    Field::choice("relationships", "Relationships", RELATIONSHIPS),
                    Field::text_with_value("salesTaxId", "Sales Tax ID", "Sales Tax ID"),
                    Field::choice("leveragingGroup", "Leveraging Group", LEVERAGING_GROUPS),
                    Field::boolean("otaClient", "OTA Client", false),
                ],
            )
            .build();

        Self {
            schema,
            partnering_with_agency: false,
            active_field_index: 0,
        }
    }

    pub fn schema(&self) -> &FormSchema {
        &self.schema
    }

    /// Direct schema access for the render/input boundary.
    ///
    /// The partnership field must still only change through
    /// [`set_partnering`](Self::set_partnering).
    pub fn schema_mut(&mut self) -> &mut FormSchema {
        &mut self.schema
    }

    /// Current state of the partnership toggle
    pub fn partnering_with_agency(&self) -> bool {
        self.partnering_with_agency
    }

    /// Flip the partnership toggle and mirror it into the nested field.
    ///
    /// Both values are updated before this returns; a reader never sees one
    /// without the other.
    pub fn set_partnering(&mut self, value: bool) {
        self.partnering_with_agency = value;
        self.schema.set_bool(PARTNERING_PATH, value);
    }

    pub fn is_valid(&self) -> bool {
        self.schema.is_valid()
    }

    /// Validate and hand the materialized value tree to the collaborator.
    ///
    /// On failure nothing is submitted and no local state changes.
    pub fn submit(&self, handler: &mut dyn SubmissionHandler) -> Result<(), SubmitError> {
        if !self.schema.is_valid() {
            return Err(SubmitError::Invalid {
                missing: self.schema.missing_fields(),
            });
        }
        handler.submit_company_details(self.schema.values());
        Ok(())
    }

    /// The leaf field the cursor is on
    pub fn active_leaf(&self) -> Option<&Field> {
        self.schema.leaf(self.active_field_index)
    }

    /// Name of the group that owns the active leaf (for the section header)
    pub fn active_group_label(&self) -> Option<&str> {
        self.schema
            .group_of_leaf(self.active_field_index)
            .map(|g| g.label.as_str())
    }

    fn active_leaf_path(&self) -> Option<String> {
        let group = self.schema.group_of_leaf(self.active_field_index)?;
        let leaf = self.schema.leaf(self.active_field_index)?;
        Some(format!("{}.{}", group.name, leaf.name))
    }

    /// Type a character into the active field
    pub fn push_char(&mut self, c: char) {
        if let Some(field) = self.schema.leaf_mut(self.active_field_index) {
            field.push_char(c);
        }
    }

    /// Backspace in the active field
    pub fn pop_char(&mut self) {
        if let Some(field) = self.schema.leaf_mut(self.active_field_index) {
            field.pop_char();
        }
    }

    /// Flip the active field if it is a boolean.
    ///
    /// The partnership toggle is routed through [`set_partnering`] so the
    /// mirror invariant holds no matter where the flip comes from.
    pub fn toggle_active(&mut self) {
        let Some(path) = self.active_leaf_path() else {
            return;
        };
        if path == PARTNERING_PATH {
            self.set_partnering(!self.partnering_with_agency);
            return;
        }
        if let Some(field) = self.schema.leaf_mut(self.active_field_index) {
            if let FieldValue::Bool(_) = field.value {
                let flipped = !field.as_bool();
                field.set_bool(flipped);
            }
        }
    }

    /// Cycle the active field forward if it is a choice
    pub fn next_option(&mut self) {
        if let Some(field) = self.schema.leaf_mut(self.active_field_index) {
            field.next_option();
        }
    }

    /// Cycle the active field backward if it is a choice
    pub fn prev_option(&mut self) {
        if let Some(field) = self.schema.leaf_mut(self.active_field_index) {
            field.prev_option();
        }
    }
}

impl Default for CompanyDetailsForm {
    fn default() -> Self {
        Self::new()
    }
}

impl FormNavigation for CompanyDetailsForm {
    fn field_count(&self) -> usize {
        self.schema.leaf_count()
    }

    fn active_field(&self) -> usize {
        self.active_field_index
    }

    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(self.schema.leaf_count().saturating_sub(1));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::MockSubmissionHandler;
    use pretty_assertions::assert_eq;

    /// Fill every required field that starts empty
    fn fill_required(form: &mut CompanyDetailsForm) {
        let schema = &mut form.schema;
        schema.set_text("generalInfo.streetAddress1", "400 Main St");
        schema
            .field_mut("generalInfo.state")
            .unwrap()
            .next_option();
        schema.set_text("generalInfo.city", "San Francisco");
        schema.set_text("generalInfo.zip", "94107");
        schema.set_text("generalInfo.requestedBy", "Jane Cooper");
        schema.set_text("generalInfo.geographicLocation", "West Coast");
        schema.set_text("termAndHistory.startDate", "2025-01-01");
        schema.set_text("termAndHistory.endDate", "2025-12-31");
    }

    mod schema_content {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_new_form_is_invalid() {
            // streetAddress1, state, city, zip, requestedBy,
            // geographicLocation, startDate and endDate all start empty
            let form = CompanyDetailsForm::new();
            assert!(!form.is_valid());
        }

        #[test]
        fn test_defaults_from_original_record() {
            let form = CompanyDetailsForm::new();
            let schema = form.schema();
            assert_eq!(
                schema.field("generalInfo.companyName").unwrap().as_text(),
                "Actelion Pharmaceuticals US, Inc."
            );
            assert_eq!(
                schema.field("generalInfo.country").unwrap().display_value(),
                "USA"
            );
            assert_eq!(
                schema.field("purchasingContact.firstName").unwrap().as_text(),
                "Robert"
            );
            assert!(!schema.field("other.otaClient").unwrap().as_bool());
        }

        #[test]
        fn test_request_date_prefilled_with_today() {
            let form = CompanyDetailsForm::new();
            assert_eq!(
                form.schema().field("generalInfo.requestDate").unwrap().as_date(),
                Some(Local::now().date_naive())
            );
        }

        #[test]
        fn test_filling_required_fields_makes_form_valid() {
            let mut form = CompanyDetailsForm::new();
            fill_required(&mut form);
            assert!(form.is_valid());
        }
    }

    mod partnership_toggle {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_set_partnering_mirrors_into_nested_field() {
            let mut form = CompanyDetailsForm::new();

            form.set_partnering(true);
            assert!(form.partnering_with_agency());
            assert!(form.schema().field(PARTNERING_PATH).unwrap().as_bool());

            form.set_partnering(false);
            assert!(!form.partnering_with_agency());
            assert!(!form.schema().field(PARTNERING_PATH).unwrap().as_bool());
        }

        #[test]
        fn test_toggle_active_on_partnership_field_keeps_mirror() {
            let mut form = CompanyDetailsForm::new();
            // Move the cursor onto the partnership toggle
            let index = (0..form.field_count())
                .find(|i| {
                    form.schema().leaf(*i).map(|f| f.name.as_str())
                        == Some("partneringWithAnotherAgency")
                })
                .unwrap();
            form.set_active_field(index);

            form.toggle_active();
            assert!(form.partnering_with_agency());
            assert!(form.schema().field(PARTNERING_PATH).unwrap().as_bool());
        }
    }

    mod submit {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_submit_invalid_form_reports_missing_fields() {
            let form = CompanyDetailsForm::new();
            let mut handler = MockSubmissionHandler::new();
            handler.expect_submit_company_details().times(0);

            let err = form.submit(&mut handler).unwrap_err();
            let SubmitError::Invalid { missing } = err;
            assert!(missing.contains(&"generalInfo.streetAddress1".to_string()));
            assert!(missing.contains(&"termAndHistory.endDate".to_string()));
        }

        #[test]
        fn test_submit_valid_form_hands_off_value_tree() {
            let mut form = CompanyDetailsForm::new();
            fill_required(&mut form);

            let mut handler = MockSubmissionHandler::new();
            handler
                .expect_submit_company_details()
                .withf(|values| {
                    values["generalInfo"]["city"] == "San Francisco"
                        && values["partnerships"]["partneringWithAnotherAgency"] == false
                })
                .times(1)
                .return_const(());

            form.submit(&mut handler).unwrap();
        }

        #[test]
        fn test_submitted_tree_includes_toggled_partnership() {
            let mut form = CompanyDetailsForm::new();
            fill_required(&mut form);
            form.set_partnering(true);

            let mut handler = MockSubmissionHandler::new();
            handler
                .expect_submit_company_details()
                .withf(|values| values["partnerships"]["partneringWithAnotherAgency"] == true)
                .times(1)
                .return_const(());

            form.submit(&mut handler).unwrap();
        }
    }

    mod editing {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_push_char_edits_active_field() {
            let mut form = CompanyDetailsForm::new();
            // Field 0 is companyType ("Pharmaceutical")
            form.push_char('s');
            assert_eq!(
                form.schema().field("generalInfo.companyType").unwrap().as_text(),
                "Pharmaceuticals"
            );
            form.pop_char();
            assert_eq!(
                form.schema().field("generalInfo.companyType").unwrap().as_text(),
                "Pharmaceutical"
            );
        }

        #[test]
        fn test_navigation_wraps_over_all_leaves() {
            let mut form = CompanyDetailsForm::new();
            let count = form.field_count();
            assert_eq!(count, 30);

            form.prev_field();
            assert_eq!(form.active_field(), count - 1);
            form.next_field();
            assert_eq!(form.active_field(), 0);
        }

        #[test]
        fn test_active_group_label_tracks_cursor() {
            let mut form = CompanyDetailsForm::new();
            assert_eq!(form.active_group_label(), Some("General Info"));
            // generalInfo has 11 leaves; leaf 11 is the first purchasing field
            form.set_active_field(11);
            assert_eq!(form.active_group_label(), Some("Purchasing Contact"));
        }
    }
}
