use super::prelude::*;
use super::constants;

use std::env::VarError;

pub const CONTACT_NUMBER_VARIABLE: &str = "STOREFRONT_CONTACT_NUMBER";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Configuration {
    pub contact_number: String,
}

impl Configuration {

    /// Reads the destination number from the environment, falling back to
    /// the number compiled in from `Cargo.toml`.
    pub fn load() -> Result<Self> {
        Self::from_variable(std::env::var(CONTACT_NUMBER_VARIABLE))
            .with_context(|| format!("Invalid {CONTACT_NUMBER_VARIABLE}"))
    }

    fn from_variable(variable: Result<String, VarError>) -> Result<Self> {
        match variable {
            Ok(contact_number) => Self::resolve(Some(&contact_number)),
            Err(VarError::NotPresent) => Self::resolve(None),
            Err(VarError::NotUnicode(raw)) => bail!("Contact number {raw:?} is not valid UTF-8"),
        }
    }

    fn resolve(contact_number: Option<&str>) -> Result<Self> {
        let raw = contact_number.unwrap_or(constants::DEFAULT_CONTACT_NUMBER);
        let contact_number = Self::normalize_contact_number(raw)?;
        Ok(Self { contact_number })
    }

    fn normalize_contact_number(raw: &str) -> Result<String> {
        let number: String = raw
            .trim()
            .trim_start_matches('+')
            .chars()
            .filter(|character| !character.is_whitespace())
            .collect();

        if number.is_empty() {
            bail!("Contact number must not be empty");
        }

        if let Some(invalid) = number.chars().find(|character| !character.is_ascii_digit()) {
            bail!("Contact number '{raw}' contains '{invalid}', only digits are allowed");
        }

        Ok(number)
    }

}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn falls_back_to_compiled_default() {
        let configuration = Configuration::resolve(None).unwrap();
        assert_eq!(configuration.contact_number, constants::DEFAULT_CONTACT_NUMBER);
    }

    #[test]
    fn strips_plus_and_spaces() {
        let configuration = Configuration::resolve(Some(" +91 98450 12345 ")).unwrap();
        assert_eq!(configuration.contact_number, "919845012345");
    }

    #[test]
    fn rejects_empty_and_non_digit_numbers() {
        assert!(Configuration::resolve(Some("")).is_err());
        assert!(Configuration::resolve(Some("+")).is_err());
        assert!(Configuration::resolve(Some("91-98450")).is_err());
    }

    #[test]
    fn unset_variable_uses_default_and_set_variable_wins() {
        let unset = Configuration::from_variable(Err(VarError::NotPresent)).unwrap();
        assert_eq!(unset.contact_number, constants::DEFAULT_CONTACT_NUMBER);

        let set = Configuration::from_variable(Ok("+91 90196 73295".to_string())).unwrap();
        assert_eq!(set.contact_number, "919019673295");
    }

    #[test]
    fn non_unicode_variable_is_an_error() {
        let raw = std::ffi::OsString::from("9190196\u{fffd}");
        assert!(Configuration::from_variable(Err(VarError::NotUnicode(raw))).is_err());
    }
}
