//! Form field value objects

use chrono::NaiveDate;

/// Date entry format used by all date fields
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Type-safe field values
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    /// Raw date text as typed; parsed on demand with [`DATE_FORMAT`]
    Date(String),
    Bool(bool),
    Choice {
        options: Vec<String>,
        selected: Option<usize>,
    },
}

impl Default for FieldValue {
    fn default() -> Self {
        FieldValue::Text(String::new())
    }
}

/// Represents a single form field with its configuration and value
#[derive(Debug, Clone)]
pub struct Field {
    pub name: String,
    pub label: String,
    pub value: FieldValue,
    pub required: bool,
}

impl Field {
    /// Create a new empty text field
    pub fn text(name: &str, label: &str) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            value: FieldValue::Text(String::new()),
            required: false,
        }
    }

    /// Create a new text field with initial value
    pub fn text_with_value(name: &str, label: &str, value: &str) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            value: FieldValue::Text(value.to_string()),
            required: false,
        }
    }

    /// Create a new empty date field
    pub fn date(name: &str, label: &str) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            value: FieldValue::Date(String::new()),
            required: false,
        }
    }

    /// Create a new date field pre-filled from a concrete date
    pub fn date_with_value(name: &str, label: &str, value: NaiveDate) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            value: FieldValue::Date(value.format(DATE_FORMAT).to_string()),
            required: false,
        }
    }

    /// Create a new boolean field
    pub fn boolean(name: &str, label: &str, value: bool) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            value: FieldValue::Bool(value),
            required: false,
        }
    }

    /// Create a new choice field with no selection
    pub fn choice(name: &str, label: &str, options: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            value: FieldValue::Choice {
                options: options.iter().map(|o| o.to_string()).collect(),
                selected: None,
            },
            required: false,
        }
    }

    /// Create a new choice field with a pre-selected option.
    ///
    /// The initial value must be one of the options; anything else is a
    /// configuration mistake and panics at build time.
    pub fn choice_with_value(name: &str, label: &str, options: &[&str], value: &str) -> Self {
        let selected = options
            .iter()
            .position(|o| *o == value)
            .unwrap_or_else(|| panic!("field {name}: initial value {value:?} not in options"));
        Self {
            name: name.to_string(),
            label: label.to_string(),
            value: FieldValue::Choice {
                options: options.iter().map(|o| o.to_string()).collect(),
                selected: Some(selected),
            },
            required: false,
        }
    }

    /// Mark the field as required (builder style)
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Whether the field currently holds a value.
    ///
    /// Empty text and "no selection" both count as absent; a boolean is
    /// always present.
    pub fn is_present(&self) -> bool {
        match &self.value {
            FieldValue::Text(s) | FieldValue::Date(s) => !s.is_empty(),
            FieldValue::Bool(_) => true,
            FieldValue::Choice { selected, .. } => selected.is_some(),
        }
    }

    /// A field with no requirement is always valid, including when empty
    pub fn is_valid(&self) -> bool {
        !self.required || self.is_present()
    }

    /// Get the text value (empty for non-text kinds)
    pub fn as_text(&self) -> &str {
        match &self.value {
            FieldValue::Text(s) | FieldValue::Date(s) => s,
            _ => "",
        }
    }

    /// Get the boolean value (false for non-boolean kinds)
    pub fn as_bool(&self) -> bool {
        matches!(self.value, FieldValue::Bool(true))
    }

    /// Parse the date text, if this is a date field holding a valid date
    pub fn as_date(&self) -> Option<NaiveDate> {
        match &self.value {
            FieldValue::Date(s) => NaiveDate::parse_from_str(s, DATE_FORMAT).ok(),
            _ => None,
        }
    }

    /// Set the text value (text and date fields only)
    pub fn set_text(&mut self, value: &str) {
        match &mut self.value {
            FieldValue::Text(s) | FieldValue::Date(s) => {
                s.clear();
                s.push_str(value);
            }
            _ => {}
        }
    }

    /// Set the boolean value (boolean fields only)
    pub fn set_bool(&mut self, value: bool) {
        if let FieldValue::Bool(b) = &mut self.value {
            *b = value;
        }
    }

    /// Push a character to the field value
    pub fn push_char(&mut self, c: char) {
        match &mut self.value {
            FieldValue::Text(s) => s.push(c),
            FieldValue::Date(s) => {
                // Date entry is digits and separators only
                if c.is_ascii_digit() || c == '-' {
                    s.push(c);
                }
            }
            FieldValue::Bool(_) | FieldValue::Choice { .. } => {}
        }
    }

    /// Remove the last character from the field value
    pub fn pop_char(&mut self) {
        if let FieldValue::Text(s) | FieldValue::Date(s) = &mut self.value {
            s.pop();
        }
    }

    /// Clear the field back to absent/default
    pub fn clear(&mut self) {
        match &mut self.value {
            FieldValue::Text(s) | FieldValue::Date(s) => s.clear(),
            FieldValue::Bool(b) => *b = false,
            FieldValue::Choice { selected, .. } => *selected = None,
        }
    }

    /// Advance a choice field to the next option (wraps around)
    pub fn next_option(&mut self) {
        if let FieldValue::Choice { options, selected } = &mut self.value {
            if options.is_empty() {
                return;
            }
            *selected = Some(match selected {
                Some(i) => (*i + 1) % options.len(),
                None => 0,
            });
        }
    }

    /// Move a choice field to the previous option (wraps around)
    pub fn prev_option(&mut self) {
        if let FieldValue::Choice { options, selected } = &mut self.value {
            if options.is_empty() {
                return;
            }
            *selected = Some(match selected {
                Some(0) | None => options.len() - 1,
                Some(i) => *i - 1,
            });
        }
    }

    /// Get the display value for rendering
    pub fn display_value(&self) -> String {
        match &self.value {
            FieldValue::Text(s) | FieldValue::Date(s) => s.clone(),
            FieldValue::Bool(b) => if *b { "On" } else { "Off" }.to_string(),
            FieldValue::Choice { options, selected } => selected
                .and_then(|i| options.get(i).cloned())
                .unwrap_or_default(),
        }
    }

    /// Materialize the field as a JSON value for the submission tree
    pub fn json_value(&self) -> serde_json::Value {
        match &self.value {
            FieldValue::Text(s) | FieldValue::Date(s) => serde_json::Value::String(s.clone()),
            FieldValue::Bool(b) => serde_json::Value::Bool(*b),
            FieldValue::Choice { options, selected } => serde_json::Value::String(
                selected
                    .and_then(|i| options.get(i).cloned())
                    .unwrap_or_default(),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod presence {
        use super::*;

        #[test]
        fn test_empty_text_is_absent() {
            let field = Field::text("city", "City");
            assert!(!field.is_present());
        }

        #[test]
        fn test_non_empty_text_is_present() {
            let field = Field::text_with_value("city", "City", "Austin");
            assert!(field.is_present());
        }

        #[test]
        fn test_bool_is_always_present() {
            assert!(Field::boolean("flag", "Flag", false).is_present());
            assert!(Field::boolean("flag", "Flag", true).is_present());
        }

        #[test]
        fn test_choice_without_selection_is_absent() {
            let field = Field::choice("state", "State", &["California", "Texas"]);
            assert!(!field.is_present());
        }

        #[test]
        fn test_choice_with_selection_is_present() {
            let field =
                Field::choice_with_value("state", "State", &["California", "Texas"], "Texas");
            assert!(field.is_present());
        }
    }

    mod validity {
        use super::*;

        #[test]
        fn test_optional_empty_field_is_valid() {
            let field = Field::text("streetAddress2", "Street Address 2");
            assert!(field.is_valid());
        }

        #[test]
        fn test_required_empty_field_is_invalid() {
            let field = Field::text("companyName", "Company Name").required();
            assert!(!field.is_valid());
        }

        #[test]
        fn test_required_filled_field_is_valid() {
            let mut field = Field::text("companyName", "Company Name").required();
            field.set_text("Acme");
            assert!(field.is_valid());
        }

        #[test]
        fn test_clearing_required_field_invalidates_it() {
            let mut field = Field::text_with_value("zip", "Zip", "94107").required();
            assert!(field.is_valid());
            field.clear();
            assert!(!field.is_valid());
        }
    }

    mod editing {
        use super::*;

        #[test]
        fn test_push_and_pop_char_on_text() {
            let mut field = Field::text("city", "City");
            field.push_char('L');
            field.push_char('A');
            assert_eq!(field.as_text(), "LA");
            field.pop_char();
            assert_eq!(field.as_text(), "L");
        }

        #[test]
        fn test_date_field_rejects_letters() {
            let mut field = Field::date("startDate", "Start Date");
            for c in "2025-01-15".chars() {
                field.push_char(c);
            }
            field.push_char('x');
            assert_eq!(field.as_text(), "2025-01-15");
        }

        #[test]
        fn test_date_parses_when_complete() {
            let mut field = Field::date("startDate", "Start Date");
            field.set_text("2025-01-15");
            assert_eq!(field.as_date(), NaiveDate::from_ymd_opt(2025, 1, 15));
        }

        #[test]
        fn test_partial_date_does_not_parse() {
            let mut field = Field::date("startDate", "Start Date");
            field.set_text("2025-01");
            assert!(field.as_date().is_none());
        }

        #[test]
        fn test_push_char_is_noop_on_bool() {
            let mut field = Field::boolean("flag", "Flag", false);
            field.push_char('y');
            assert!(!field.as_bool());
        }
    }

    mod choice {
        use super::*;

        #[test]
        fn test_next_option_from_empty_picks_first() {
            let mut field = Field::choice("country", "Country", &["USA", "Canada", "Mexico"]);
            field.next_option();
            assert_eq!(field.display_value(), "USA");
        }

        #[test]
        fn test_next_option_wraps() {
            let mut field =
                Field::choice_with_value("country", "Country", &["USA", "Canada"], "Canada");
            field.next_option();
            assert_eq!(field.display_value(), "USA");
        }

        #[test]
        fn test_prev_option_from_empty_picks_last() {
            let mut field = Field::choice("country", "Country", &["USA", "Canada", "Mexico"]);
            field.prev_option();
            assert_eq!(field.display_value(), "Mexico");
        }

        #[test]
        #[should_panic]
        fn test_choice_with_unknown_value_panics() {
            Field::choice_with_value("country", "Country", &["USA"], "Atlantis");
        }
    }

    mod display_and_json {
        use super::*;

        #[test]
        fn test_bool_display() {
            assert_eq!(Field::boolean("f", "F", true).display_value(), "On");
            assert_eq!(Field::boolean("f", "F", false).display_value(), "Off");
        }

        #[test]
        fn test_json_value_text() {
            let field = Field::text_with_value("city", "City", "Austin");
            assert_eq!(field.json_value(), serde_json::json!("Austin"));
        }

        #[test]
        fn test_json_value_bool() {
            let field = Field::boolean("otaClient", "OTA Client", true);
            assert_eq!(field.json_value(), serde_json::json!(true));
        }

        #[test]
        fn test_json_value_unselected_choice_is_empty_string() {
            let field = Field::choice("state", "State", &["California"]);
            assert_eq!(field.json_value(), serde_json::json!(""));
        }
    }
}
