//! Fixed-width ticket rendering.
//!
//! Renders a [`Receipt`] as a 35-column thermal-printer style text block.
//! This consumes only the receipt structure - no cart access, no extra
//! computation - so any other exporter (PDF, HTML) can reuse the same
//! input.

use rust_decimal::Decimal;

use shopmaster_core::Receipt;

/// Ticket line width in characters.
pub const TICKET_WIDTH: usize = 35;

const QTY_COLUMN: usize = 5;
const PRICE_COLUMN: usize = 6;

/// Render a receipt as a fixed-width text ticket.
///
/// Layout: centered store header, sale data (date, time, customer), a
/// quantity/description/price column block, subtotal and tax lines, the
/// final total, and a thank-you footer.
#[must_use]
pub fn render_ticket(receipt: &Receipt, store_name: &str) -> String {
    let mut out = String::new();
    let separator = "-".repeat(TICKET_WIDTH);

    // Header
    push_line(&mut out, &center(store_name));
    out.push('\n');

    // Sale data
    push_line(
        &mut out,
        &two_column(
            &format!("Date: {}", receipt.issued_at.format("%Y-%m-%d")),
            &format!("Time: {}", receipt.issued_at.format("%H:%M:%S")),
        ),
    );
    push_line(&mut out, &format!("Customer: {}", receipt.customer_name));
    out.push('\n');

    // Item block
    push_line(&mut out, &separator);
    push_line(
        &mut out,
        &format!("{:>QTY_COLUMN$} {:<23}{:>PRICE_COLUMN$}", "Qty", "Description", "Price"),
    );
    push_line(&mut out, &separator);
    for line in &receipt.lines {
        push_line(
            &mut out,
            &format!(
                "{:>QTY_COLUMN$} {:<23}{:>PRICE_COLUMN$}",
                line.quantity,
                line.description,
                format!("{:.2}", line.unit_price)
            ),
        );
    }

    // Totals
    out.push('\n');
    push_line(&mut out, &separator);
    push_line(&mut out, &two_column("SUBTOTAL", &money(receipt.subtotal)));
    push_line(
        &mut out,
        &two_column(
            &format!("TAX ({}%)", percent(receipt.tax_rate)),
            &money(receipt.tax_amount),
        ),
    );
    push_line(&mut out, &separator);
    push_line(&mut out, &two_column("TOTAL", &money(receipt.total)));
    out.push('\n');

    // Footer
    push_line(&mut out, &center("THANK YOU FOR YOUR PURCHASE!"));
    push_line(&mut out, &center("Come back soon."));

    out
}

fn push_line(out: &mut String, line: &str) {
    out.push_str(line.trim_end());
    out.push('\n');
}

fn money(amount: Decimal) -> String {
    format!("${amount:.2}")
}

fn percent(rate: Decimal) -> Decimal {
    (rate * Decimal::ONE_HUNDRED).normalize()
}

fn center(text: &str) -> String {
    let width = text.chars().count();
    if width >= TICKET_WIDTH {
        return text.to_string();
    }
    let pad = (TICKET_WIDTH - width) / 2;
    format!("{}{text}", " ".repeat(pad))
}

fn two_column(left: &str, right: &str) -> String {
    let used = left.chars().count() + right.chars().count();
    let pad = TICKET_WIDTH.saturating_sub(used).max(1);
    format!("{left}{}{right}", " ".repeat(pad))
}
