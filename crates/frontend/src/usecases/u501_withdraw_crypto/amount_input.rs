//! Number mask for the amount field: digits and one decimal separator,
//! fraction capped at the asset accuracy.

use leptos::prelude::*;

pub const DEFAULT_DECIMAL_LIMIT: u32 = 8;
pub const DEFAULT_MAX_LENGTH: usize = 10;

/// Filters raw keyboard input into a plain decimal number string.
///
/// `,` is accepted as the separator and normalized to `.`. A leading
/// separator gets a `0` in front. Extra separators and fractional digits
/// beyond `decimal_limit` are dropped, and the result is capped at
/// `max_length`.
pub fn mask_amount(raw: &str, decimal_limit: u32, max_length: usize) -> String {
    let mut masked = String::with_capacity(raw.len());
    let mut seen_separator = false;
    let mut fraction_digits = 0u32;

    for c in raw.chars() {
        if masked.len() >= max_length {
            break;
        }
        match c {
            '0'..='9' if seen_separator => {
                if fraction_digits < decimal_limit {
                    masked.push(c);
                    fraction_digits += 1;
                }
            }
            '0'..='9' => masked.push(c),
            '.' | ',' if !seen_separator => {
                seen_separator = true;
                if decimal_limit > 0 {
                    if masked.is_empty() {
                        masked.push('0');
                    }
                    masked.push('.');
                }
            }
            _ => {}
        }
    }

    masked.truncate(max_length);
    masked
}

/// Masked text to a number; empty or incomplete input reads as 0
pub fn parse_amount(masked: &str) -> f64 {
    masked.trim_end_matches('.').parse().unwrap_or(0.0)
}

/// Text input applying [`mask_amount`] on every keystroke
#[component]
pub fn AmountInput(
    #[prop(into)] name: String,
    #[prop(into)] value: Signal<String>,
    on_change: Callback<String>,
    #[prop(optional, into)] decimal_limit: MaybeProp<u32>,
    #[prop(optional)] max_length: Option<usize>,
    #[prop(optional, into)] disabled: MaybeProp<bool>,
) -> impl IntoView {
    let max_length = max_length.unwrap_or(DEFAULT_MAX_LENGTH);

    view! {
        <input
            type="text"
            inputmode="decimal"
            class="form-control"
            id=name.clone()
            name=name
            autocomplete="off"
            maxlength=max_length.to_string()
            prop:value=move || value.get()
            disabled=move || disabled.get().unwrap_or(false)
            on:input=move |ev| {
                let limit = decimal_limit.get_untracked().unwrap_or(DEFAULT_DECIMAL_LIMIT);
                on_change.run(mask_amount(&event_target_value(&ev), limit, max_length));
            }
        />
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_keeps_plain_numbers() {
        assert_eq!(mask_amount("100", 8, 10), "100");
        assert_eq!(mask_amount("299.9999", 8, 10), "299.9999");
    }

    #[test]
    fn test_mask_strips_noise_and_extra_separators() {
        assert_eq!(mask_amount("1 000abc", 8, 10), "1000");
        assert_eq!(mask_amount("1.2.3", 8, 10), "1.23");
        assert_eq!(mask_amount("1,5", 8, 10), "1.5");
        assert_eq!(mask_amount(".5", 8, 10), "0.5");
    }

    #[test]
    fn test_mask_limits_fraction_and_length() {
        assert_eq!(mask_amount("0.123456789", 4, 10), "0.1234");
        assert_eq!(mask_amount("12345678901234", 8, 10), "1234567890");
        assert_eq!(mask_amount("10.5", 0, 10), "10");
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("100.0001"), 100.0001);
        assert_eq!(parse_amount("12."), 12.0);
        assert_eq!(parse_amount(""), 0.0);
    }
}
