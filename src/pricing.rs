pub const CURRENCY_SYMBOL: &str = "₹";

/// Formats whole-rupee amounts the way `en-IN` does: the last three digits
/// form one group and every group before them has two digits, with no
/// fractional part.
pub struct PriceFormatter;

impl PriceFormatter {

    #[must_use]
    pub fn format(amount: u64) -> String {
        format!("{CURRENCY_SYMBOL}{grouped}", grouped = Self::group_digits(&amount.to_string()))
    }

    fn group_digits(digits: &str) -> String {
        if digits.len() <= 3 {
            return digits.to_string();
        }

        let (head, tail) = digits.split_at(digits.len() - 3);
        let mut groups = Vec::new();
        let mut end = head.len();

        while end > 0 {
            let start = end.saturating_sub(2);
            groups.push(&head[start..end]);
            end = start;
        }

        groups.reverse();
        format!("{head},{tail}", head = groups.join(","))
    }

}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::APP_CATALOG;
    use proptest::prelude::*;

    #[test]
    fn formats_catalog_prices_with_indian_grouping() {
        assert_eq!(PriceFormatter::format(34999), "₹34,999");
        assert_eq!(PriceFormatter::format(129_999), "₹1,29,999");
        assert_eq!(PriceFormatter::format(17999), "₹17,999");
    }

    #[test]
    fn small_amounts_have_no_separator() {
        assert_eq!(PriceFormatter::format(0), "₹0");
        assert_eq!(PriceFormatter::format(7), "₹7");
        assert_eq!(PriceFormatter::format(999), "₹999");
        assert_eq!(PriceFormatter::format(1000), "₹1,000");
    }

    #[test]
    fn large_amounts_group_in_pairs() {
        assert_eq!(PriceFormatter::format(10_000_000), "₹1,00,00,000");
        assert_eq!(PriceFormatter::format(u64::MAX), "₹1,84,46,74,40,73,70,95,51,615");
    }

    #[test]
    fn catalog_prices_have_no_sign_or_decimals() {
        for product in APP_CATALOG.products {
            let formatted = PriceFormatter::format(product.price);
            assert!(!formatted.contains(['-', '.']), "{formatted}");
        }
    }

    proptest! {
        #[test]
        fn output_has_only_symbol_digits_and_separators(amount in any::<u64>()) {
            let formatted = PriceFormatter::format(amount);
            let body = formatted.strip_prefix(CURRENCY_SYMBOL).unwrap();

            prop_assert!(!body.is_empty());
            prop_assert!(body.chars().all(|c| c.is_ascii_digit() || c == ','));
            prop_assert!(!body.starts_with(','));
            prop_assert!(!body.ends_with(','));
            prop_assert_eq!(body.replace(',', ""), amount.to_string());
        }
    }
}
