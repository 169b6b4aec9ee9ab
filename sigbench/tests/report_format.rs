//! Property tests for CSV row formatting.

#![allow(clippy::unwrap_used, clippy::indexing_slicing)]

use proptest::prelude::*;
use sigbench::ResultRow;

proptest! {
    #[test]
    fn row_has_five_fields_with_four_decimals(
        label in "[A-Za-z0-9_]{1,24}",
        scheme in "[A-Z0-9-]{1,18}",
        keygen in 0.0f64..1.0e6,
        sign in 0.0f64..1.0e6,
        verify in 0.0f64..1.0e6,
    ) {
        let row = ResultRow {
            label: label.clone(),
            scheme: scheme.clone(),
            keygen_ms: keygen,
            sign_ms: sign,
            verify_ms: verify,
        };
        let line = row.to_string();
        let fields: Vec<&str> = line.split(',').collect();

        prop_assert_eq!(fields.len(), 5);
        prop_assert_eq!(fields[0], label.as_str());
        prop_assert_eq!(fields[1], scheme.as_str());
        for (field, value) in fields[2..].iter().zip([keygen, sign, verify]) {
            let (_, decimals) = field.split_once('.').unwrap();
            prop_assert_eq!(decimals.len(), 4);
            let parsed: f64 = field.parse().unwrap();
            prop_assert!((parsed - value).abs() <= 5.0e-5 + value * f64::EPSILON * 4.0);
        }
    }
}
