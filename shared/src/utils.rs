// Formatting helpers shared across the engine and any front end.

pub mod currency {
    use serde::{Deserialize, Serialize};

    /// How the integer digits of an amount are grouped.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
    #[serde(rename_all = "lowercase")]
    pub enum DigitGrouping {
        /// 12,34,56,789 (lakh/crore style).
        #[default]
        Indian,
        /// 123,456,789
        Western,
    }

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    #[serde(default)]
    pub struct CurrencyStyle {
        pub symbol: String,
        pub grouping: DigitGrouping,
    }

    impl Default for CurrencyStyle {
        fn default() -> Self {
            CurrencyStyle {
                symbol: "₹".to_string(),
                grouping: DigitGrouping::Indian,
            }
        }
    }

    impl CurrencyStyle {
        /// What a non-numeric amount renders as.
        pub fn zero(&self) -> String {
            format!("{}0", self.symbol)
        }
    }

    /// Formats with the default rupee style, e.g. `150000.0` -> `"₹1,50,000"`.
    pub fn format_currency(value: f64) -> String {
        format_currency_with(value, &CurrencyStyle::default())
    }

    /// Renders `value` with zero fractional digits, rounding half away from zero.
    /// NaN and infinities render as the zero sentinel.
    pub fn format_currency_with(value: f64, style: &CurrencyStyle) -> String {
        if !value.is_finite() {
            return style.zero();
        }
        let rounded = value.round();
        if rounded == 0.0 {
            return style.zero();
        }

        let digits = format!("{:.0}", rounded.abs());
        let sign = if rounded < 0.0 { "-" } else { "" };
        format!("{}{}{}", sign, style.symbol, group_digits(&digits, style.grouping))
    }

    fn group_digits(digits: &str, grouping: DigitGrouping) -> String {
        if digits.len() <= 3 {
            return digits.to_string();
        }
        let (head, tail) = digits.split_at(digits.len() - 3);
        let width = match grouping {
            DigitGrouping::Indian => 2,
            DigitGrouping::Western => 3,
        };

        let mut groups = Vec::new();
        let mut end = head.len();
        while end > width {
            groups.push(&head[end - width..end]);
            end -= width;
        }
        groups.push(&head[..end]);
        groups.reverse();

        format!("{},{}", groups.join(","), tail)
    }

}
