//! Schema tree: named field groups, path addressing, whole-form validity

use super::field::Field;
use serde_json::{Map, Value};

/// A named group of leaf fields within a schema
#[derive(Debug, Clone)]
pub struct FieldGroup {
    pub name: String,
    pub label: String,
    pub fields: Vec<Field>,
}

/// Declarative form definition: an ordered tree of field groups.
///
/// The schema's validity is the AND of every leaf's validity. Fields are
/// addressed by `"group.field"` paths.
#[derive(Debug, Clone, Default)]
pub struct FormSchema {
    groups: Vec<FieldGroup>,
}

/// Builds a [`FormSchema`] from literal configuration.
///
/// Malformed configuration (duplicate names, bad paths) is a programming
/// error and panics while the schema is being defined, never afterwards.
#[derive(Debug, Default)]
pub struct SchemaBuilder {
    groups: Vec<FieldGroup>,
}

impl SchemaBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a named group with its leaf fields
    pub fn group(mut self, name: &str, label: &str, fields: Vec<Field>) -> Self {
        assert!(
            !self.groups.iter().any(|g| g.name == name),
            "duplicate group {name:?}"
        );
        for field in &fields {
            assert!(
                fields.iter().filter(|f| f.name == field.name).count() == 1,
                "duplicate field {:?} in group {name:?}",
                field.name
            );
        }
        self.groups.push(FieldGroup {
            name: name.to_string(),
            label: label.to_string(),
            fields,
        });
        self
    }

    pub fn build(self) -> FormSchema {
        FormSchema {
            groups: self.groups,
        }
    }
}

impl FormSchema {
    pub fn groups(&self) -> &[FieldGroup] {
        &self.groups
    }

    /// Look up a leaf by `"group.field"` path
    pub fn field(&self, path: &str) -> Option<&Field> {
        let (group, name) = path.split_once('.')?;
        self.groups
            .iter()
            .find(|g| g.name == group)?
            .fields
            .iter()
            .find(|f| f.name == name)
    }

    /// Mutable leaf lookup by `"group.field"` path
    pub fn field_mut(&mut self, path: &str) -> Option<&mut Field> {
        let (group, name) = path.split_once('.')?;
        self.groups
            .iter_mut()
            .find(|g| g.name == group)?
            .fields
            .iter_mut()
            .find(|f| f.name == name)
    }

    /// Set a text/date leaf's value. Unknown paths are ignored.
    pub fn set_text(&mut self, path: &str, value: &str) {
        if let Some(field) = self.field_mut(path) {
            field.set_text(value);
        }
    }

    /// Set a boolean leaf's value. Unknown paths are ignored.
    pub fn set_bool(&mut self, path: &str, value: bool) {
        if let Some(field) = self.field_mut(path) {
            field.set_bool(value);
        }
    }

    /// Whole-schema validity: every leaf must be individually valid
    pub fn is_valid(&self) -> bool {
        self.groups
            .iter()
            .all(|g| g.fields.iter().all(|f| f.is_valid()))
    }

    /// Paths of every currently invalid leaf, in display order
    pub fn missing_fields(&self) -> Vec<String> {
        self.groups
            .iter()
            .flat_map(|g| {
                g.fields
                    .iter()
                    .filter(|f| !f.is_valid())
                    .map(move |f| format!("{}.{}", g.name, f.name))
            })
            .collect()
    }

    /// Number of leaf fields across all groups
    pub fn leaf_count(&self) -> usize {
        self.groups.iter().map(|g| g.fields.len()).sum()
    }

    /// Leaf at a flat index (groups in order, fields in order)
    pub fn leaf(&self, index: usize) -> Option<&Field> {
        self.groups.iter().flat_map(|g| g.fields.iter()).nth(index)
    }

    /// Mutable leaf at a flat index
    pub fn leaf_mut(&mut self, index: usize) -> Option<&mut Field> {
        self.groups
            .iter_mut()
            .flat_map(|g| g.fields.iter_mut())
            .nth(index)
    }

    /// Group that owns the leaf at a flat index
    pub fn group_of_leaf(&self, index: usize) -> Option<&FieldGroup> {
        let mut remaining = index;
        for group in &self.groups {
            if remaining < group.fields.len() {
                return Some(group);
            }
            remaining -= group.fields.len();
        }
        None
    }

    /// Materialize the full value tree, keyed by group name then field name
    pub fn values(&self) -> Value {
        let mut tree = Map::new();
        for group in &self.groups {
            let mut fields = Map::new();
            for field in &group.fields {
                fields.insert(field.name.clone(), field.json_value());
            }
            tree.insert(group.name.clone(), Value::Object(fields));
        }
        Value::Object(tree)
    }
}

/// Trait for keyboard traversal over a form's leaf fields
pub trait FormNavigation {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);

    fn next_field(&mut self) {
        let count = self.field_count();
        if count == 0 {
            return;
        }
        self.set_active_field((self.active_field() + 1) % count);
    }

    fn prev_field(&mut self) {
        let count = self.field_count();
        if count == 0 {
            return;
        }
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
}
