//! Data bundle verification.
//!
//! Five independent checks against the compiled data: character
//! properties, collation, calendar, locale resources, and converters. Each
//! check prints a `✅`/`❌` line and records one [`CheckOutcome`]; a failing
//! check never stops the ones after it.

use std::cmp::Ordering;

use chrono::{Datelike, Local};
use encoding_rs::Encoding;
use icu::calendar::cal::Japanese;
use icu::calendar::types::YearInfo;
use icu::calendar::Date;
use icu::collator::Collator;
use icu::collator::options::CollatorOptions;
use icu::properties::CodePointMapData;
use icu::properties::props::GeneralCategory;
use tracing::debug;
use uniprobe_format::console_println;

use crate::config::Section;
use crate::demos::locale::{display_name, parse_locale};
use crate::driver::Driver;
use crate::error::ProbeError;
use crate::report::CheckOutcome;

/// Locale whose collation and display-name data are probed.
pub const PROBE_LOCALE: &str = "en-US";

/// Pair that sorts differently under collation than by code point.
pub const COLLATION_PAIR: (&str, &str) = ("apple", "Banana");

/// A date in the Japanese calendar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JapaneseDate {
    /// Era code, e.g. `reiwa`.
    pub era: String,
    /// Year within the era.
    pub year: i32,
    /// 1-based month.
    pub month: u8,
    pub day: u8,
}

/// Look up the general category of `ch` and require it to be `expected`.
pub fn character_properties(
    ch: char,
    expected: GeneralCategory,
) -> Result<GeneralCategory, ProbeError> {
    let category = CodePointMapData::<GeneralCategory>::new().get(ch);
    if category == expected {
        Ok(category)
    } else {
        Err(ProbeError::Mismatch {
            facility: "character properties",
            expected: format!("{expected:?}"),
            actual: format!("{category:?}"),
        })
    }
}

/// Load a collator for `tag` and compare `left` with `right`.
pub fn collate(tag: &str, left: &str, right: &str) -> Result<Ordering, ProbeError> {
    let locale = parse_locale(tag)?;
    let collator = Collator::try_new(locale.into(), CollatorOptions::default())
        .map_err(|err| ProbeError::library("collator", err))?;
    Ok(collator.compare(left, right))
}

/// Convert an ISO date to the Japanese calendar.
pub fn japanese_date(year: i32, month: u32, day: u32) -> Result<JapaneseDate, ProbeError> {
    let month = u8::try_from(month).map_err(|err| ProbeError::library("calendar", err))?;
    let day = u8::try_from(day).map_err(|err| ProbeError::library("calendar", err))?;
    let iso = Date::try_new_iso(year, month, day)
        .map_err(|err| ProbeError::library("calendar", err))?;
    let date = iso.to_calendar(Japanese::new());

    let YearInfo::Era(era_year) = date.year() else {
        return Err(ProbeError::Mismatch {
            facility: "calendar",
            expected: "an era-based year".to_string(),
            actual: "a cyclic year".to_string(),
        });
    };
    Ok(JapaneseDate {
        era: era_year.era.to_string(),
        year: era_year.year,
        month: date.month().ordinal,
        day: date.day_of_month().0,
    })
}

/// Today's date in the Japanese calendar.
pub fn japanese_today() -> Result<JapaneseDate, ProbeError> {
    let today = Local::now().date_naive();
    japanese_date(today.year(), today.month(), today.day())
}

/// Display name of [`PROBE_LOCALE`] in itself; must be non-empty.
pub fn resource_data() -> Result<String, ProbeError> {
    let locale = parse_locale(PROBE_LOCALE)?;
    let name = display_name(&locale, &locale)?;
    if name.is_empty() {
        return Err(ProbeError::Mismatch {
            facility: "locale display names",
            expected: "a non-empty name".to_string(),
            actual: "an empty string".to_string(),
        });
    }
    Ok(name)
}

/// Resolve an encoding label to a converter.
pub fn converter(label: &str) -> Result<&'static Encoding, ProbeError> {
    Encoding::for_label(label.trim().as_bytes())
        .ok_or_else(|| ProbeError::UnknownEncoding(label.to_string()))
}

pub fn run(driver: &mut Driver) -> Result<(), ProbeError> {
    console_println!(driver.console())?;
    console_println!(driver.console(), "=== ICU Data Bundle Verification ===")?;

    let mut all_passed = true;

    console_println!(driver.console(), "1. Testing character properties data...")?;
    all_passed &= match character_properties('A', GeneralCategory::UppercaseLetter) {
        Ok(category) => {
            console_println!(driver.console(), "   ✅ Character properties data accessible")?;
            pass(driver, "properties", format!("U+0041 is {category:?}"))?
        }
        Err(err) => {
            console_println!(
                driver.console(),
                "   ❌ Character properties data not working correctly: {}",
                err
            )?;
            fail(driver, "properties", &err)?
        }
    };

    console_println!(driver.console(), "2. Testing collation data...")?;
    let (left, right) = COLLATION_PAIR;
    all_passed &= match collate(PROBE_LOCALE, left, right) {
        Ok(Ordering::Less) => {
            console_println!(driver.console(), "   ✅ Collation data accessible")?;
            console_println!(driver.console(), "   ✅ Collation comparison works correctly")?;
            pass(driver, "collation", format!("{left} < {right}"))?
        }
        Ok(order) => {
            console_println!(driver.console(), "   ✅ Collation data accessible")?;
            console_println!(driver.console(), "   ❌ Collation comparison failed")?;
            let err = ProbeError::Mismatch {
                facility: "collator",
                expected: format!("{left} < {right}"),
                actual: format!("{order:?}"),
            };
            fail(driver, "collation", &err)?
        }
        Err(err) => {
            console_println!(driver.console(), "   ❌ Failed to access collation data: {}", err)?;
            fail(driver, "collation", &err)?
        }
    };

    console_println!(driver.console(), "3. Testing calendar data...")?;
    all_passed &= match japanese_today() {
        Ok(date) => {
            console_println!(driver.console(), "   ✅ Calendar data accessible")?;
            console_println!(
                driver.console(),
                "   ✅ Japanese calendar date: Era {}, Year {}, Month {}, Day {}",
                date.era,
                date.year,
                date.month,
                date.day
            )?;
            let detail = format!("{} {}-{}-{}", date.era, date.year, date.month, date.day);
            pass(driver, "calendar", detail)?
        }
        Err(err) => {
            console_println!(
                driver.console(),
                "   ❌ Failed to create Japanese calendar: {}",
                err
            )?;
            fail(driver, "calendar", &err)?
        }
    };

    console_println!(driver.console(), "4. Testing resource bundle data...")?;
    all_passed &= match resource_data() {
        Ok(name) => {
            console_println!(
                driver.console(),
                "   ✅ Resource data accessible (via locale display names)"
            )?;
            pass(driver, "resources", name)?
        }
        Err(err) => {
            console_println!(driver.console(), "   ❌ Failed to access resource data: {}", err)?;
            fail(driver, "resources", &err)?
        }
    };

    console_println!(driver.console(), "5. Testing converter data...")?;
    let label = driver.config().encoding.clone();
    all_passed &= match converter(&label) {
        Ok(encoding) => {
            debug!(label = %label, encoding = encoding.name(), "converter resolved");
            console_println!(driver.console(), "   ✅ Converter data accessible")?;
            pass(driver, "converter", encoding.name())?
        }
        Err(err) => {
            console_println!(driver.console(), "   ❌ Failed to open converter: {}", err)?;
            fail(driver, "converter", &err)?
        }
    };

    console_println!(driver.console(), "\nICU Data Bundle Verification Summary:")?;
    if all_passed {
        console_println!(
            driver.console(),
            "✅ All data checks passed! The data bundle is properly included and accessible."
        )?;
    } else {
        console_println!(
            driver.console(),
            "❌ Some data checks failed. The data bundle may not be properly included or accessible."
        )?;
    }
    Ok(())
}

fn pass(driver: &mut Driver, name: &str, detail: impl Into<String>) -> Result<bool, ProbeError> {
    driver.record(CheckOutcome::pass(Section::Bundle, name, detail))?;
    Ok(true)
}

fn fail(driver: &mut Driver, name: &str, err: &ProbeError) -> Result<bool, ProbeError> {
    driver.record(CheckOutcome::fail(Section::Bundle, name, err.to_string()))?;
    Ok(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn latin_capital_a_is_uppercase_letter() {
        assert_eq!(
            character_properties('A', GeneralCategory::UppercaseLetter).unwrap(),
            GeneralCategory::UppercaseLetter
        );
        assert_eq!(
            character_properties('7', GeneralCategory::DecimalNumber).unwrap(),
            GeneralCategory::DecimalNumber
        );
        let err = character_properties('a', GeneralCategory::UppercaseLetter).unwrap_err();
        assert!(err.to_string().contains("LowercaseLetter"), "{err}");
        assert_eq!(err.kind(), "mismatch");
    }

    #[test]
    fn collation_ignores_case_at_primary_strength() {
        let (left, right) = COLLATION_PAIR;
        assert_eq!(collate(PROBE_LOCALE, left, right).unwrap(), Ordering::Less);
        // Code point order puts every capital first.
        assert_eq!(left.cmp(right), Ordering::Greater);
    }

    #[test]
    fn reiwa_begins_may_2019() {
        let date = japanese_date(2019, 5, 1).unwrap();
        assert_eq!(date.era, "reiwa");
        assert_eq!(date.year, 1);
        assert_eq!((date.month, date.day), (5, 1));

        let date = japanese_date(2019, 4, 30).unwrap();
        assert_eq!(date.era, "heisei");
        assert_eq!(date.year, 31);
    }

    #[test]
    fn invalid_iso_date_is_a_library_error() {
        let err = japanese_date(2019, 2, 30).unwrap_err();
        assert_eq!(err.kind(), "library");
    }

    #[test]
    fn today_converts() {
        let date = japanese_today().unwrap();
        assert!((1..=12).contains(&date.month));
        assert!((1..=31).contains(&date.day));
    }

    #[test]
    fn resource_data_yields_a_name() {
        assert!(!resource_data().unwrap().is_empty());
    }

    #[test]
    fn converter_labels_resolve() {
        assert_eq!(converter("Shift-JIS").unwrap(), encoding_rs::SHIFT_JIS);
        assert_eq!(converter("sjis").unwrap(), encoding_rs::SHIFT_JIS);
        assert_eq!(converter("utf-8").unwrap(), encoding_rs::UTF_8);
    }

    #[test]
    fn unknown_converter_label_fails() {
        let err = converter("x-no-such-encoding").unwrap_err();
        assert_eq!(err.kind(), "unknown_encoding");
        assert!(err.to_string().contains("x-no-such-encoding"));
    }
}
