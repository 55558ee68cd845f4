use super::models::Product;
use super::quote::QuoteRequest;

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use std::fmt;

pub const MESSAGING_HOST: &str = "wa.me";

// Everything but `A-Z a-z 0-9 - _ . ! ~ * ' ( )`, as `encodeURIComponent` does.
const MESSAGE_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

const BULK_QUOTE_PROMPT: &str = "Hello, I want a quote for bulk industrial turbines.";
const SUPPORT_PROMPT: &str = "Hello — I need product & installation support.";
const TAILORED_QUOTE_PROMPT: &str = "Hi, I need a tailored quote. Here are my details: ";
const EMAIL_QUOTE_PROMPT: &str = "Hi, I would like a quote by email. Here are my details: ";

/// The prefilled text of an outbound message, one variant per call site.
#[derive(Debug, Clone, Copy)]
pub enum ContactMessage<'a> {
    BulkQuote,
    Support,
    ProductQuote(&'a Product),
    TailoredQuote(&'a QuoteRequest),
    EmailQuote(&'a QuoteRequest),
}

impl ContactMessage<'_> {
    fn write_with_details(formatter: &mut fmt::Formatter<'_>, prompt: &str, request: &QuoteRequest) -> fmt::Result {
        if request.is_empty() {
            return formatter.write_str(prompt);
        }

        formatter.write_str(prompt.trim_end())?;
        for line in request.lines() {
            write!(formatter, "\n{line}")?;
        }
        Ok(())
    }
}

impl fmt::Display for ContactMessage<'_> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BulkQuote => formatter.write_str(BULK_QUOTE_PROMPT),
            Self::Support => formatter.write_str(SUPPORT_PROMPT),
            Self::ProductQuote(product) => write!(
                formatter,
                "Hi, I want a quote for {name} ({id}). Quantity:",
                name = product.name,
                id = product.id
            ),
            Self::TailoredQuote(request) => Self::write_with_details(formatter, TAILORED_QUOTE_PROMPT, request),
            Self::EmailQuote(request) => Self::write_with_details(formatter, EMAIL_QUOTE_PROMPT, request),
        }
    }
}

/// Builds `https://wa.me/<destination>?text=<message>` links.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactLinkBuilder {
    destination: String,
}

impl ContactLinkBuilder {

    pub fn new(destination: impl Into<String>) -> Self {
        Self { destination: destination.into() }
    }

    pub fn destination(&self) -> &str {
        &self.destination
    }

    #[must_use]
    pub fn build(&self, message: &str) -> String {
        let encoded = utf8_percent_encode(message, MESSAGE_ENCODE_SET);
        format!(
            "https://{MESSAGING_HOST}/{destination}?text={encoded}",
            destination = self.destination
        )
    }

    #[must_use]
    pub fn build_for(&self, message: ContactMessage<'_>) -> String {
        self.build(&message.to_string())
    }

}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quote::QuoteField;
    use percent_encoding::percent_decode_str;
    use proptest::prelude::*;

    const DESTINATION: &str = "919999999999";

    fn decode_message(url: &str) -> Option<String> {
        let (_, query) = url.split_once("?text=")?;
        percent_decode_str(query).decode_utf8().ok().map(String::from)
    }

    fn sample_product() -> Product {
        Product {
            id: "eco-breeze",
            name: "EcoBreeze In-Wall",
            description: "Energy-saving ventilation module with smart controls.",
            price: 17999,
            image: "eco-breeze.png",
            tags: &["Home", "Smart"],
        }
    }

    #[test]
    fn support_link_targets_destination_with_encoded_prompt() {
        let builder = ContactLinkBuilder::new(DESTINATION);
        let url = builder.build_for(ContactMessage::Support);

        assert_eq!(
            url,
            "https://wa.me/919999999999?text=Hello%20%E2%80%94%20I%20need%20product%20%26%20installation%20support."
        );
        assert_eq!(decode_message(&url).as_deref(), Some("Hello — I need product & installation support."));
    }

    #[test]
    fn product_quote_mentions_name_and_id() {
        let product = sample_product();
        let url = ContactLinkBuilder::new(DESTINATION).build_for(ContactMessage::ProductQuote(&product));
        let message = decode_message(&url).unwrap();

        assert_eq!(message, "Hi, I want a quote for EcoBreeze In-Wall (eco-breeze). Quantity:");
    }

    #[test]
    fn keeps_the_characters_encode_uri_component_keeps() {
        let url = ContactLinkBuilder::new(DESTINATION).build("it's (really) *fine*! a-b_c.d~e");
        assert!(url.ends_with("?text=it's%20(really)%20*fine*!%20a-b_c.d~e"));
    }

    #[test]
    fn query_delimiters_are_escaped() {
        let url = ContactLinkBuilder::new(DESTINATION).build("a=1&b=2?#/+");
        assert!(url.ends_with("?text=a%3D1%26b%3D2%3F%23%2F%2B"));
    }

    #[test]
    fn empty_form_keeps_the_plain_prompt() {
        let request = QuoteRequest::new();
        assert_eq!(
            ContactMessage::TailoredQuote(&request).to_string(),
            "Hi, I need a tailored quote. Here are my details: "
        );
    }

    #[test]
    fn filled_form_appends_one_line_per_field() {
        let request = QuoteRequest::new()
            .with(QuoteField::Company, "Acme Mills")
            .with(QuoteField::Phone, "+91 98450 12345");

        assert_eq!(
            ContactMessage::EmailQuote(&request).to_string(),
            "Hi, I would like a quote by email. Here are my details:\nCompany / Name: Acme Mills\nPhone: +91 98450 12345"
        );
    }

    #[test]
    fn control_characters_survive_the_round_trip() {
        let message = "line one\nline\ttwo\0after nul";
        let url = ContactLinkBuilder::new(DESTINATION).build(message);

        assert!(url.ends_with("?text=line%20one%0Aline%09two%00after%20nul"));
        assert_eq!(decode_message(&url).as_deref(), Some(message));
    }

    proptest! {
        #[test]
        fn decoded_query_equals_message(message in any::<String>()) {
            let url = ContactLinkBuilder::new(DESTINATION).build(&message);
            let query = url.split_once("?text=").unwrap().1;

            prop_assert!(!query.contains(['&', '#', ' ', '?']));
            prop_assert_eq!(decode_message(&url), Some(message));
        }

        #[test]
        fn destination_is_the_path_segment(destination in "[0-9]{1,15}", message in any::<String>()) {
            let url = ContactLinkBuilder::new(destination.clone()).build(&message);
            let expected_prefix = format!("https://wa.me/{destination}?text=");
            prop_assert!(url.starts_with(&expected_prefix));
        }
    }
}
