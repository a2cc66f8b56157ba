use super::{FilterError, FilterField};

/// The full set of filter values for a section.
///
/// Values are stored positionally against the section's field list, so every
/// field always has a value; there is no way to build a partial state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterState {
    fields: &'static [FilterField],
    values: Vec<String>,
}

impl FilterState {
    /// Default snapshot: every field present, every value empty
    pub fn empty(fields: &'static [FilterField]) -> Self {
        Self {
            fields,
            values: vec![String::new(); fields.len()],
        }
    }

    pub fn fields(&self) -> &'static [FilterField] {
        self.fields
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.position(name).map(|i| self.values[i].as_str())
    }

    pub fn set(&mut self, name: &str, value: impl Into<String>) -> Result<(), FilterError> {
        let index = self
            .position(name)
            .ok_or_else(|| FilterError::UnknownField(name.to_string()))?;
        self.values[index] = value.into();
        Ok(())
    }

    /// Builder form of [`FilterState::set`]
    pub fn with(mut self, name: &str, value: impl Into<String>) -> Result<Self, FilterError> {
        self.set(name, value)?;
        Ok(self)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static FilterField, &str)> + '_ {
        self.fields
            .iter()
            .zip(self.values.iter().map(String::as_str))
    }

    /// Fields that carry a value, in schema order
    pub fn non_empty(&self) -> impl Iterator<Item = (&'static str, &str)> + '_ {
        self.iter()
            .filter(|(_, value)| !value.is_empty())
            .map(|(field, value)| (field.name, value))
    }

    pub fn is_default(&self) -> bool {
        self.values.iter().all(String::is_empty)
    }

    /// First required field left blank, if any
    pub fn missing_required(&self) -> Option<&'static FilterField> {
        self.iter()
            .find(|(field, value)| field.required && value.trim().is_empty())
            .map(|(field, _)| field)
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.fields.iter().position(|f| f.name == name)
    }
}
