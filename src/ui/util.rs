use chrono::NaiveDate;
use rust_decimal::Decimal;

pub(crate) const DATE_FORMAT: &str = "%Y-%m-%d";

/// Format a decimal amount with thousand separators and 2 decimal places.
/// e.g. `1234567.891` → `"1,234,567.89"`
pub(crate) fn format_amount(val: Decimal) -> String {
    let abs = val.abs().round_dp(2);
    let formatted = format!("{abs:.2}");
    let mut parts = formatted.split('.');
    let int_part = parts.next().unwrap_or("0");
    let dec_part = parts.next().unwrap_or("00");

    let with_commas: String = int_part
        .as_bytes()
        .rchunks(3)
        .rev()
        .map(|chunk| std::str::from_utf8(chunk).unwrap_or(""))
        .collect::<Vec<_>>()
        .join(",");

    if val < Decimal::ZERO {
        format!("-{with_commas}.{dec_part}")
    } else {
        format!("{with_commas}.{dec_part}")
    }
}

/// Parse a `YYYY-MM-DD` calendar day.
pub(crate) fn parse_day(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), DATE_FORMAT).ok()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum PageIndicator {
    Page(usize),
    Current(usize),
    Ellipsis,
}

/// Page buttons for the pagination footer: the first and last page, the
/// current page with one neighbour on each side, and ellipses over gaps.
pub(crate) fn page_indicators(current: usize, total: usize) -> Vec<PageIndicator> {
    if total == 0 {
        return Vec::new();
    }
    let map_page = |page| {
        if page == current {
            PageIndicator::Current(page)
        } else {
            PageIndicator::Page(page)
        }
    };

    let mut indicators = vec![map_page(1)];
    if total == 1 {
        return indicators;
    }

    let range_start = current.saturating_sub(1).max(2);
    let range_end = (current + 1).min(total - 1);

    if range_start > 2 {
        indicators.push(PageIndicator::Ellipsis);
    }
    indicators.extend((range_start..=range_end).map(map_page));
    if range_end < total - 1 {
        indicators.push(PageIndicator::Ellipsis);
    }
    indicators.push(map_page(total));
    indicators
}
