//! Example session with a UK Faster Payments form
//!
//! Run with `RUST_LOG=debug` to see the form's tracing output.

use payform::prelude::*;
use tracing_subscriber::EnvFilter;

fn print_rows(title: &str, cursor: &GridCursor, span: RowSpan) {
    println!("\n📋 {}", title);
    for row in cursor.rows_in(span) {
        let value = match &row.content {
            RowContent::Text { value, .. } => value.clone(),
            RowContent::Input { value, editable, .. } => {
                format!("[{}]{}", value, if *editable { "" } else { " (locked)" })
            }
            RowContent::Toggle { checked } => (if *checked { "[x]" } else { "[ ]" }).to_string(),
        };
        println!("  {:>2}  {:<28} {}", row.index, row.label, value);
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("🚀 payform Faster Payments Example");

    let ctx = FormContext::new(FormConfig::default());
    let mut events = ctx.events.subscribe();

    let mut account = PaymentAccount::new(PaymentMethod::FasterPayments);
    let mut cursor = GridCursor::new();
    {
        let mut form = PaymentMethodForm::for_account(&mut account, ctx.clone());
        let mut validity = form.validity_signal().subscribe();

        let span = form.render_editable_form(&mut cursor)?;
        print_rows("New account", &cursor, span);

        for (field, value) in [
            (FieldId::SortCode, "12-34"),
            (FieldId::SortCode, "12-34-56"),
            (FieldId::AccountNr, "1234"),
            (FieldId::AccountNr, "12345678"),
        ] {
            let valid = form.on_change(field, value);
            println!("✏️  {:<12} = {:<10} valid: {}", field.as_str(), value, valid);
        }

        form.sync_rows(&mut cursor);
        print_rows("After typing", &cursor, span);

        if validity.has_changed()? {
            println!("🔔 Confirm button enabled: {}", *validity.borrow_and_update());
        }

        form.confirm()?;
        println!("✅ Confirmed as \"{}\"", form.account().account_name);
    }

    while let Ok(envelope) = events.try_recv() {
        println!("📨 {} at {}", envelope.event.action(), envelope.timestamp);
    }

    let mut view = GridCursor::starting_at(cursor.next_row());
    let span = PaymentMethodForm::for_account(&mut account, ctx.clone())
        .render_own_account_view(&mut view)?;
    print_rows("Saved account", &view, span);

    let contract = account.contract_data();
    let mut trade = GridCursor::new();
    let span = render_counterparty_view(&contract, &mut trade, ctx.localizer.as_ref());
    print_rows("Counterparty details", &trade, span);

    println!("\n{}", contract.payment_details());
    println!("{}", serde_json::to_string_pretty(&contract)?);

    Ok(())
}
