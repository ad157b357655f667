//! Rows every payment form shares

use crate::core::account::PaymentMethod;
use crate::core::field::FieldId;
use crate::core::locale::Localizer;
use crate::forms::grid::GridCursor;
use chrono::Duration;

/// Human-readable trade period, e.g. "1 day" or "4 days"
pub fn format_trade_period(period: Duration, localizer: &dyn Localizer) -> String {
    let days = period.num_days().max(1);
    if days == 1 {
        format!("1 {}", localizer.get("time.day"))
    } else {
        format!("{} {}", days, localizer.get("time.days"))
    }
}

/// Append the max. allowed trade period row of a payment method
pub fn add_allowed_period(
    cursor: &mut GridCursor,
    localizer: &dyn Localizer,
    method: PaymentMethod,
) -> usize {
    cursor.add_text_row(
        localizer.get_with_colon("payment.maxPeriod"),
        format_trade_period(method.max_trade_period(), localizer),
    )
}

/// Append the account name input and its "use custom name" toggle
///
/// The name is only editable while the custom name is in use; otherwise it
/// is filled in automatically.
pub fn add_account_name_with_auto_fill(
    cursor: &mut GridCursor,
    localizer: &dyn Localizer,
    account_name: &str,
    use_custom_name: bool,
) -> usize {
    cursor.add_input_row(
        FieldId::AccountName,
        FieldId::AccountName.label(localizer),
        account_name,
        use_custom_name,
    );
    cursor.add_toggle_row(localizer.get("payment.useCustomAccountName"), use_custom_name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::locale::ResourceBundle;
    use crate::forms::grid::RowContent;

    #[test]
    fn test_format_trade_period() {
        let bundle = ResourceBundle::english();
        assert_eq!(format_trade_period(Duration::days(1), &bundle), "1 day");
        assert_eq!(format_trade_period(Duration::days(8), &bundle), "8 days");
        assert_eq!(format_trade_period(Duration::hours(3), &bundle), "1 day");
    }

    #[test]
    fn test_allowed_period_row() {
        let bundle = ResourceBundle::english();
        let mut cursor = GridCursor::new();
        add_allowed_period(&mut cursor, &bundle, PaymentMethod::FasterPayments);

        let row = &cursor.rows()[0];
        assert_eq!(row.label, "Max. allowed trade period:");
        assert_eq!(row.value(), Some("1 day"));
    }

    #[test]
    fn test_account_name_rows() {
        let bundle = ResourceBundle::english();
        let mut cursor = GridCursor::new();
        let last = add_account_name_with_auto_fill(&mut cursor, &bundle, "Main", false);

        assert_eq!(last, 1);
        assert_eq!(
            cursor.rows()[0].content,
            RowContent::Input {
                field: FieldId::AccountName,
                value: "Main".to_string(),
                editable: false,
            }
        );
        assert_eq!(cursor.rows()[1].content, RowContent::Toggle { checked: false });
    }
}
