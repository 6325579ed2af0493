//! Transliteration example: Latin to Cyrillic and back.

use icu::locale::Locale;
use icu_experimental::transliterate::Transliterator;
use uniprobe_format::console_println;

use crate::config::Section;
use crate::driver::Driver;
use crate::error::ProbeError;

pub const SAMPLE: &str = "Privet, mir! Kak dela?";

/// BCP-47 transform id: Cyrillic target, Latin source.
pub const LATIN_TO_CYRILLIC: &str = "und-Cyrl-t-und-latn";
/// BCP-47 transform id: Latin target, Cyrillic source.
pub const CYRILLIC_TO_LATIN: &str = "und-Latn-t-und-cyrl";

/// Load the transform named by `transform_id`.
pub fn transliterator(transform_id: &str) -> Result<Transliterator, ProbeError> {
    let locale = transform_id
        .parse::<Locale>()
        .map_err(|err| ProbeError::locale(transform_id, err))?;
    Transliterator::try_new(&locale)
        .map_err(|err| ProbeError::library("transliterator", format!("{transform_id}: {err}")))
}

/// Apply the transform named by `transform_id` to `text`.
pub fn transliterate(transform_id: &str, text: &str) -> Result<String, ProbeError> {
    Ok(transliterator(transform_id)?.transliterate(text.to_string()))
}

pub fn run(driver: &mut Driver) -> Result<(), ProbeError> {
    driver.header(Section::Translit)?;

    let forward = transliterator(LATIN_TO_CYRILLIC)?;
    console_println!(driver.console(), "Original text: {}", SAMPLE)?;

    let cyrillic = forward.transliterate(SAMPLE.to_string());
    console_println!(driver.console(), "Transliterated to Cyrillic: {}", cyrillic)?;

    let backward = transliterator(CYRILLIC_TO_LATIN)?;
    let latin = backward.transliterate(cyrillic);
    console_println!(driver.console(), "Transliterated back to Latin: {}", latin)?;
    Ok(())
}
