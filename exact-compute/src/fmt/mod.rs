//! Decimal rendering for display text and LaTeX.

pub mod float;

use crate::consts::DISPLAY_ZERO;
use crate::latex::non_finite_to_latex;
use float::{
    latex_scientific,
    should_use_scientific,
    to_exponential,
    to_fixed,
    to_precision,
    trim_trailing_zeros,
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Formatting options for decimal values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FormatSettings {
    /// Whether to round to a number of decimal places or of significant figures.
    pub number_format: NumberFormat,

    /// The number of digits after the decimal point, used with [`NumberFormat::DecimalPlaces`].
    pub decimal_places: usize,

    /// The number of significant figures, used with [`NumberFormat::SignificantFigures`].
    pub significant_figures: usize,
}

impl Default for FormatSettings {
    fn default() -> Self {
        Self {
            number_format: NumberFormat::SignificantFigures,
            decimal_places: 2,
            significant_figures: 6,
        }
    }
}

impl FormatSettings {
    /// Wraps the given [`FormatSettings`] into a builder for further customization.
    pub fn into_builder(self) -> FormatSettingsBuilder {
        FormatSettingsBuilder(self)
    }
}

/// The different ways to round a decimal.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(rename_all = "snake_case"))]
pub enum NumberFormat {
    /// Fixed-point notation with a set number of decimal places. Trailing zeros are kept.
    DecimalPlaces,

    /// A set number of significant figures, with trailing zeros removed.
    ///
    /// This is the default option.
    #[default]
    SignificantFigures,
}

/// A builder for [`FormatSettings`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FormatSettingsBuilder(FormatSettings);

impl FormatSettingsBuilder {
    /// Creates a new builder with the default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the rounding mode. See [`NumberFormat`] for more information.
    pub fn number_format(mut self, number_format: NumberFormat) -> Self {
        self.0.number_format = number_format;
        self
    }

    /// Sets the number of decimal places.
    pub fn decimal_places(mut self, decimal_places: usize) -> Self {
        self.0.decimal_places = decimal_places;
        self
    }

    /// Sets the number of significant figures. Values below `1` are treated as `1`.
    pub fn significant_figures(mut self, significant_figures: usize) -> Self {
        self.0.significant_figures = significant_figures.max(1);
        self
    }

    /// Builds the settings.
    pub fn build(self) -> FormatSettings {
        self.0
    }
}

/// Formats a decimal as display text, e.g. `3.14159`, `1.23457e+6` or `2.50`.
pub fn format_for_display(value: f64, settings: &FormatSettings) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    } else if value.is_infinite() {
        return if value < 0.0 { "-Infinity" } else { "Infinity" }.to_string();
    } else if value.abs() < DISPLAY_ZERO {
        return "0".to_string();
    }

    match settings.number_format {
        NumberFormat::SignificantFigures => {
            let sf = settings.significant_figures.max(1);
            if should_use_scientific(value) {
                to_exponential(value, sf - 1)
            } else {
                trim_trailing_zeros(&to_precision(value, sf))
            }
        },
        NumberFormat::DecimalPlaces => to_fixed(value, settings.decimal_places),
    }
}

/// Formats a decimal as LaTeX. Scientific notation renders as `{mantissa} \times 10^{exp}`.
pub fn format_for_latex(value: f64, settings: &FormatSettings) -> String {
    if !value.is_finite() {
        return non_finite_to_latex(value);
    } else if value.abs() < DISPLAY_ZERO {
        return "0".to_string();
    }

    match settings.number_format {
        NumberFormat::SignificantFigures => {
            let sf = settings.significant_figures.max(1);
            if should_use_scientific(value) {
                latex_scientific(value, sf - 1, true)
            } else {
                let s = to_precision(value, sf);

                // toPrecision can still fall back to exponential for large exponents
                match s.split_once('e') {
                    Some(_) => latex_scientific(value, sf - 1, true),
                    None => trim_trailing_zeros(&s),
                }
            }
        },
        NumberFormat::DecimalPlaces => {
            if should_use_scientific(value) {
                latex_scientific(value, settings.decimal_places, false)
            } else {
                to_fixed(value, settings.decimal_places)
            }
        },
    }
}

/// The LaTeX used for a decimal fallback when no [`FormatSettings`] are given: a mantissa with
/// four decimal digits in scientific range, six significant figures otherwise.
pub fn default_decimal_latex(value: f64) -> String {
    if !value.is_finite() {
        return non_finite_to_latex(value);
    }

    if should_use_scientific(value) {
        latex_scientific(value, 4, false)
    } else {
        trim_trailing_zeros(&to_precision(value, 6))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    fn dp(places: usize) -> FormatSettings {
        FormatSettingsBuilder::new()
            .number_format(NumberFormat::DecimalPlaces)
            .decimal_places(places)
            .build()
    }

    fn sf(figures: usize) -> FormatSettings {
        FormatSettingsBuilder::new()
            .significant_figures(figures)
            .build()
    }

    #[test]
    fn default_settings() {
        let settings = FormatSettings::default();
        assert_eq!(settings.number_format, NumberFormat::SignificantFigures);
        assert_eq!(settings.decimal_places, 2);
        assert_eq!(settings.significant_figures, 6);
    }

    #[test]
    fn display_special_values() {
        let settings = FormatSettings::default();
        assert_eq!(format_for_display(f64::NAN, &settings), "NaN");
        assert_eq!(format_for_display(f64::INFINITY, &settings), "Infinity");
        assert_eq!(format_for_display(f64::NEG_INFINITY, &settings), "-Infinity");
        assert_eq!(format_for_display(1e-16, &settings), "0");
    }

    #[test]
    fn display_significant_figures() {
        assert_eq!(format_for_display(3.14159265, &sf(6)), "3.14159");
        assert_eq!(format_for_display(2.5, &sf(6)), "2.5");
        assert_eq!(format_for_display(1234567.0, &sf(3)), "1.23e+6");
        assert_eq!(format_for_display(0.00001234, &sf(2)), "1.2e-5");
    }

    #[test]
    fn display_decimal_places() {
        assert_eq!(format_for_display(2.5, &dp(2)), "2.50");
        assert_eq!(format_for_display(1234567.891, &dp(1)), "1234567.9");
        assert_eq!(format_for_display(0.00001, &dp(3)), "0.000");
    }

    #[test]
    fn latex_significant_figures() {
        assert_eq!(format_for_latex(3.14159265, &sf(4)), "3.142");
        assert_eq!(format_for_latex(1234567.0, &sf(3)), "1.23 \\times 10^{6}");
        assert_eq!(format_for_latex(2e-7, &sf(3)), "2 \\times 10^{-7}");
    }

    #[test]
    fn latex_decimal_places() {
        assert_eq!(format_for_latex(2.5, &dp(3)), "2.500");
        assert_eq!(format_for_latex(2e6, &dp(2)), "2.00 \\times 10^{6}");
        assert_eq!(format_for_latex(f64::NEG_INFINITY, &dp(2)), "-\\infty");
    }

    #[test]
    fn default_fallback() {
        assert_eq!(default_decimal_latex(std::f64::consts::E), "2.71828");
        assert_eq!(default_decimal_latex(123456789.0), "1.2346 \\times 10^{8}");
        assert_eq!(default_decimal_latex(0.00001), "1.0000 \\times 10^{-5}");
        assert_eq!(default_decimal_latex(f64::NAN), "\\text{NaN}");
    }
}
