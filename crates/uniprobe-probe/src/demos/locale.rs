//! Locale example: display names and currency formatting.

use icu::decimal::input::Decimal;
use icu::locale::Locale;
use icu_experimental::dimension::currency::CurrencyCode;
use icu_experimental::dimension::currency::formatter::CurrencyFormatter;
use icu_experimental::displaynames::{DisplayNamesOptions, LocaleDisplayNamesFormatter};
use tinystr::TinyAsciiStr;
use tracing::debug;
use uniprobe_format::console_println;
use writeable::Writeable;

use crate::config::Section;
use crate::driver::Driver;
use crate::error::ProbeError;

/// A locale probed by the example, with the currency its region uses.
#[derive(Debug, Clone, Copy)]
pub struct LocaleSample {
    pub tag: &'static str,
    /// Line template: locale tag, then display name.
    pub template: &'static str,
    pub region: &'static str,
    pub currency: &'static str,
    /// Fraction digits the currency is shown with (ISO 4217 minor unit).
    pub digits: i16,
}

pub const SAMPLES: [LocaleSample; 3] = [
    LocaleSample {
        tag: "en-US",
        template: "US Locale:       {} ({})",
        region: "US",
        currency: "USD",
        digits: 2,
    },
    LocaleSample {
        tag: "fr-FR",
        template: "French Locale:   {} ({})",
        region: "France",
        currency: "EUR",
        digits: 2,
    },
    LocaleSample {
        tag: "ja-JP",
        template: "Japanese Locale: {} ({})",
        region: "Japan",
        currency: "JPY",
        digits: 0,
    },
];

/// Locale in which display names are rendered.
pub const DISPLAY_LOCALE: &str = "en-US";

/// 1234567.89 as minor units plus scale.
pub const AMOUNT_MINOR_UNITS: i64 = 123_456_789;
pub const AMOUNT_SCALE: i16 = 2;

/// Parse a BCP-47 tag.
pub fn parse_locale(tag: &str) -> Result<Locale, ProbeError> {
    tag.parse::<Locale>()
        .map_err(|err| ProbeError::locale(tag, err))
}

/// Name of `target`, rendered in `display` (e.g. "French (France)").
pub fn display_name(display: &Locale, target: &Locale) -> Result<String, ProbeError> {
    let formatter =
        LocaleDisplayNamesFormatter::try_new(display.clone().into(), DisplayNamesOptions::default())
            .map_err(|err| ProbeError::library("locale display names", err))?;
    Ok(formatter.of(target).to_string())
}

/// Format `minor_units * 10^-scale` of `currency` with `locale` conventions,
/// rounded to `digits` fraction digits.
pub fn format_currency(
    locale: &Locale,
    currency: &str,
    minor_units: i64,
    scale: i16,
    digits: i16,
) -> Result<String, ProbeError> {
    let code = currency
        .parse::<TinyAsciiStr<3>>()
        .map_err(|err| ProbeError::library("currency code", err))?;
    let formatter = CurrencyFormatter::try_new(locale.clone().into(), Default::default())
        .map_err(|err| ProbeError::library("currency formatter", err))?;

    let mut amount = Decimal::from(minor_units);
    amount.multiply_pow10(-scale);
    amount.round(-digits);

    let formatted = formatter.format_fixed_decimal(&amount, CurrencyCode(code));
    Ok(formatted.write_to_string().into_owned())
}

pub fn run(driver: &mut Driver) -> Result<(), ProbeError> {
    driver.header(Section::Locale)?;

    let display = parse_locale(DISPLAY_LOCALE)?;
    let mut locales = Vec::with_capacity(SAMPLES.len());
    for sample in &SAMPLES {
        let locale = parse_locale(sample.tag)?;
        let name = display_name(&display, &locale)?;
        console_println!(driver.console(), sample.template, locale, name)?;
        locales.push((sample, locale));
    }

    console_println!(driver.console(), "Currency formatting:")?;
    for (sample, locale) in &locales {
        let formatted = format_currency(
            locale,
            sample.currency,
            AMOUNT_MINOR_UNITS,
            AMOUNT_SCALE,
            sample.digits,
        )?;
        debug!(locale = sample.tag, currency = sample.currency, %formatted, "formatted amount");
        console_println!(driver.console(), "  {}: {}", sample.region, formatted)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_tags_parse() {
        for sample in &SAMPLES {
            let locale = parse_locale(sample.tag).unwrap();
            assert_eq!(locale.to_string(), sample.tag);
        }
    }

    #[test]
    fn malformed_tag_is_reported() {
        let err = parse_locale("not a locale!").unwrap_err();
        assert_eq!(err.kind(), "invalid_locale");
        assert!(err.to_string().contains("not a locale!"));
    }

    #[test]
    fn display_names_are_rendered_in_english() {
        let display = parse_locale(DISPLAY_LOCALE).unwrap();
        let french = parse_locale("fr-FR").unwrap();
        let name = display_name(&display, &french).unwrap();
        assert!(name.contains("French"), "got {name}");
    }

    #[test]
    fn us_dollars_use_grouping_and_symbol() {
        let us = parse_locale("en-US").unwrap();
        let formatted =
            format_currency(&us, "USD", AMOUNT_MINOR_UNITS, AMOUNT_SCALE, 2).unwrap();
        assert!(formatted.contains('$'), "got {formatted}");
        assert!(formatted.contains("1,234,567.89"), "got {formatted}");
    }

    #[test]
    fn yen_rounds_to_whole_units() {
        let japan = parse_locale("ja-JP").unwrap();
        let formatted =
            format_currency(&japan, "JPY", AMOUNT_MINOR_UNITS, AMOUNT_SCALE, 0).unwrap();
        assert!(formatted.contains("1,234,568"), "got {formatted}");
        assert!(!formatted.contains('.'), "got {formatted}");
    }

    #[test]
    fn invalid_currency_code_is_reported() {
        let us = parse_locale("en-US").unwrap();
        let err = format_currency(&us, "DOLLARS", 100, 2, 2).unwrap_err();
        assert_eq!(err.kind(), "library");
    }
}
