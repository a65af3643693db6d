//! Pure validators for contact fields.
//!
//! Phone rules are UK specific: only mobile numbers (07..., +44 7...)
//! are accepted. None of these functions allocate state or fail; they
//! answer a yes/no question about the input or reformat it best-effort.

use once_cell::sync::Lazy;
use regex::Regex;

static UK_PHONE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\+44\s?7\d{3}|\(?07\d{3}\)?)\s?\d{3}\s?\d{3}$")
        .expect("UK phone pattern is valid")
});

// Anchored at the start only. Requires two dot segments after the '@',
// so "a@b.com" is rejected while "a@b.co.uk" is accepted.
static EMAIL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^@]+@[^@]+\.[^@]+\.").expect("email pattern is valid")
});

static NON_DIGIT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\D").expect("non-digit pattern is valid"));

/// Returns true if `number` looks like a UK mobile number.
///
/// Accepted shapes include `07123 456 789`, `07123456789`,
/// `(07123) 456 789` and `+44 7123 456 789`.
pub fn is_valid_uk_phone(number: &str) -> bool {
    UK_PHONE.is_match(number)
}

/// Formats a UK mobile number into its canonical spacing.
///
/// - 11 digits starting `07` become `XXXXX XXX XXX`
/// - 12 digits starting `447` become `+44 XXX XXX XXX...`
///
/// Anything else is returned unchanged. This does not validate.
pub fn format_uk_phone(number: &str) -> String {
    let digits: Vec<char> = NON_DIGIT.replace_all(number, "").chars().collect();
    let slice = |from: usize, to: usize| digits[from..to].iter().collect::<String>();

    if digits.len() == 11 && digits.starts_with(&['0', '7']) {
        format!("{} {} {}", slice(0, 5), slice(5, 8), slice(8, 11))
    } else if digits.len() == 12 && digits.starts_with(&['4', '4', '7']) {
        format!("+44 {} {} {}", slice(2, 5), slice(5, 8), slice(8, 12))
    } else {
        number.to_string()
    }
}

/// Returns true if `email` passes the intake form's email shape check.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL.is_match(email)
}

/// Returns true for "Saturday" and "Sunday".
pub fn is_weekend(day_name: &str) -> bool {
    matches!(day_name, "Saturday" | "Sunday")
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    // Phone validation

    #[test]
    fn accepts_common_uk_mobile_shapes() {
        for number in [
            "07123456789",
            "07123 456 789",
            "07123 456789",
            "(07123) 456 789",
            "(07123)456789",
            "+447123456789",
            "+44 7123 456 789",
            "+44 7123456789",
        ] {
            assert!(is_valid_uk_phone(number), "expected {number} to be valid");
        }
    }

    #[test]
    fn rejects_non_mobile_and_malformed_numbers() {
        for number in [
            "",
            "0712345678",
            "071234567890",
            "02012345678",
            "+44 20 1234 5678",
            "+447123 456 78",
            "07123-456-789",
            "07123 456 789 ",
            "phone: 07123456789",
            "0712345678a",
        ] {
            assert!(!is_valid_uk_phone(number), "expected {number} to be invalid");
        }
    }

    // Phone formatting

    #[test]
    fn formats_national_mobile() {
        assert_eq!(format_uk_phone("07123456789"), "07123 456 789");
        assert_eq!(format_uk_phone("(07123) 456-789"), "07123 456 789");
    }

    #[test]
    fn formats_international_mobile() {
        assert_eq!(format_uk_phone("+447123456789"), "+44 712 345 6789");
        assert_eq!(format_uk_phone("44 7123 456 789"), "+44 712 345 6789");
    }

    #[test]
    fn returns_unrecognised_input_unchanged() {
        assert_eq!(format_uk_phone("020 1234 5678"), "020 1234 5678");
        assert_eq!(format_uk_phone("12345"), "12345");
        assert_eq!(format_uk_phone(""), "");
        assert_eq!(format_uk_phone("not a number"), "not a number");
    }

    // Email

    #[test]
    fn email_requires_two_dot_segments_after_at() {
        assert!(is_valid_email("a@b.co.uk."));
        assert!(is_valid_email("jane.doe@example.co.uk"));
        assert!(!is_valid_email("a@b.com"));
        assert!(!is_valid_email("jane@example"));
    }

    #[test]
    fn email_is_anchored_at_start() {
        assert!(!is_valid_email("@a@b.co.uk"));
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("no-at-sign.co.uk"));
    }

    // Weekend

    #[test]
    fn weekend_days_are_detected() {
        assert!(is_weekend("Saturday"));
        assert!(is_weekend("Sunday"));
        for day in ["Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "saturday", ""] {
            assert!(!is_weekend(day), "{day} is not a weekend day");
        }
    }

    proptest! {
        #[test]
        fn generated_national_mobiles_are_valid(
            area in "[0-9]{3}",
            mid in "[0-9]{3}",
            tail in "[0-9]{3}",
            sep in prop::sample::select(vec!["", " "]),
        ) {
            let number = format!("07{area}{sep}{mid}{sep}{tail}");
            prop_assert!(is_valid_uk_phone(&number));
        }

        #[test]
        fn generated_international_mobiles_are_valid(
            area in "[0-9]{3}",
            mid in "[0-9]{3}",
            tail in "[0-9]{3}",
        ) {
            let number = format!("+44 7{area} {mid} {tail}");
            prop_assert!(is_valid_uk_phone(&number));
        }

        #[test]
        fn one_digit_short_or_long_is_invalid(
            digits in "[0-9]{9}",
            drop_one in any::<bool>(),
        ) {
            let body = if drop_one { digits[..8].to_string() } else { format!("{digits}0") };
            let number = format!("07{body}");
            prop_assert!(!is_valid_uk_phone(&number));
        }

        #[test]
        fn formatting_is_idempotent_for_national_numbers(digits in "[0-9]{9}") {
            let once = format_uk_phone(&format!("07{digits}"));
            prop_assert_eq!(format_uk_phone(&once), once);
        }

        #[test]
        fn formatting_is_idempotent_for_international_numbers(digits in "[0-9]{9}") {
            let once = format_uk_phone(&format!("+447{digits}"));
            prop_assert_eq!(format_uk_phone(&once), once);
        }
    }
}
