//! Compact population formatting
//!
//! Renders counts as `"<n> M"` above one million and `"<n> K"` otherwise:
//!
//! | input        | output     |
//! |--------------|------------|
//! | 2_000_000    | `2 M`      |
//! | 2_500_000    | `2.5 M`    |
//! | 1_000_000    | `1000 K`   |
//! | 999_999      | `999 K`    |
//! | -2_500_000   | `-2.5 M`   |
//! | -1_500       | `-1 K`     |
//!
//! Exactly one million stays on the thousands branch; the millions branch
//! requires a magnitude strictly greater than one million.

const MILLION: u64 = 1_000_000;
const THOUSAND: i64 = 1_000;

/// Format a signed count in compact form.
///
/// Thousands are truncated toward zero (`-1_500` → `"-1 K"`, `-999` → `"0 K"`).
/// Non-exact millions are rounded to one decimal, ties to even on the binary
/// quotient (`1_250_000` → `"1.2 M"`, `1_350_000` → `"1.4 M"`).
pub fn format_compact(n: i64) -> String {
    let magnitude = n.unsigned_abs();

    if magnitude > MILLION {
        let sign = if n < 0 { "-" } else { "" };

        if magnitude % MILLION == 0 {
            return format!("{}{} M", sign, magnitude / MILLION);
        }

        return format!("{}{:.1} M", sign, magnitude as f64 / MILLION as f64);
    }

    format!("{} K", n / THOUSAND)
}

/// Format an unsigned population count in compact form
pub fn format_population(population: u64) -> String {
    format_compact(i64::try_from(population).unwrap_or(i64::MAX))
}
