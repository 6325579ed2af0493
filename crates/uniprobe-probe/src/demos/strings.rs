//! Unicode string example: length and root-locale case mapping.

use icu::casemap::CaseMapper;
use icu::locale::langid;
use uniprobe_format::console_println;

use crate::config::Section;
use crate::driver::Driver;
use crate::error::ProbeError;

/// Mixed-script sample (Latin, Japanese, Chinese, Arabic).
pub const SAMPLE: &str = "Hello, World! こんにちは 你好 مرحبا";

/// Length in UTF-16 code units.
#[must_use]
pub fn utf16_len(text: &str) -> usize {
    text.encode_utf16().count()
}

/// Full uppercase mapping with root-locale rules.
#[must_use]
pub fn to_upper(text: &str) -> String {
    CaseMapper::new()
        .uppercase_to_string(text, &langid!("und"))
        .to_string()
}

/// Full lowercase mapping with root-locale rules.
#[must_use]
pub fn to_lower(text: &str) -> String {
    CaseMapper::new()
        .lowercase_to_string(text, &langid!("und"))
        .to_string()
}

pub fn run(driver: &mut Driver) -> Result<(), ProbeError> {
    driver.header(Section::Strings)?;

    let console = driver.console();
    console_println!(console, "Original string: {}", SAMPLE)?;
    console_println!(console, "Length: {} Unicode units", utf16_len(SAMPLE))?;
    console_println!(console, "Uppercase: {}", to_upper(SAMPLE))?;
    console_println!(console, "Lowercase: {}", to_lower(SAMPLE))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn length_counts_utf16_units() {
        assert_eq!(utf16_len(""), 0);
        assert_eq!(utf16_len("abc"), 3);
        assert_eq!(utf16_len("こんにちは"), 5);
        // Outside the BMP: one scalar, two code units.
        assert_eq!(utf16_len("𝄞"), 2);
        assert_eq!(utf16_len(SAMPLE), 28);
    }

    #[test]
    fn case_mapping_touches_only_cased_scripts() {
        assert_eq!(to_upper(SAMPLE), "HELLO, WORLD! こんにちは 你好 مرحبا");
        assert_eq!(to_lower(SAMPLE), "hello, world! こんにちは 你好 مرحبا");
    }

    #[test]
    fn full_case_mapping_expands() {
        assert_eq!(to_upper("straße"), "STRASSE");
    }
}
