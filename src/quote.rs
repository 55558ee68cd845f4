use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum QuoteField {
    Company,
    Phone,
    Details,
}

impl QuoteField {
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Company => "Company / Name",
            Self::Phone => "Phone",
            Self::Details => "Project details & quantity",
        }
    }
}

/// Current values of the quote request form, keyed by field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuoteRequest {
    values: BTreeMap<QuoteField, String>,
}

impl QuoteRequest {

    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, field: QuoteField, value: &str) {
        let value = value.trim();
        if value.is_empty() {
            self.values.remove(&field);
        } else {
            self.values.insert(field, value.to_string());
        }
    }

    #[must_use]
    pub fn with(mut self, field: QuoteField, value: &str) -> Self {
        self.set(field, value);
        self
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Filled fields in form order, one `label: value` line each.
    pub fn lines(&self) -> impl Iterator<Item = String> + '_ {
        self.values
            .iter()
            .map(|(field, value)| format!("{label}: {value}", label = field.label()))
    }

}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_values_are_not_captured() {
        let request = QuoteRequest::new()
            .with(QuoteField::Company, "   ")
            .with(QuoteField::Phone, "");

        assert!(request.is_empty());
        assert_eq!(request.lines().count(), 0);
    }

    #[test]
    fn clearing_a_field_removes_it() {
        let mut request = QuoteRequest::new().with(QuoteField::Phone, "98450 12345");
        request.set(QuoteField::Phone, "");
        assert!(request.is_empty());
    }

    #[test]
    fn lines_follow_form_order() {
        let request = QuoteRequest::new()
            .with(QuoteField::Details, "12 roof turbines")
            .with(QuoteField::Company, " Acme Mills ");

        let lines: Vec<String> = request.lines().collect();
        assert_eq!(lines, vec![
            "Company / Name: Acme Mills".to_string(),
            "Project details & quantity: 12 roof turbines".to_string(),
        ]);
    }
}
