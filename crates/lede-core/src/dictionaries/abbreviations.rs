//! Abbreviations that end in a period without ending a sentence.
//!
//! Common English words that double as abbreviations ("in", "no", "sat",
//! "app") are left out: a period after them ends a sentence far more often
//! than not, and losing a boundary merges two sentences into one.

use std::collections::HashSet;
use std::sync::LazyLock;

/// Lower-case abbreviations, without their trailing period.
pub static ABBREVIATIONS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    let mut set = HashSet::new();

    // Titles and honorifics
    set.extend([
        "mr", "mrs", "ms", "dr", "prof", "rev", "fr", "sr", "jr", "messrs", "msgr", "hon", "esq",
        "capt", "col", "gen", "lt", "maj", "sgt", "cpl", "pvt", "adm", "cmdr", "sen", "rep", "gov",
        "pres",
    ]);

    // Degrees
    set.extend([
        "b.a", "b.s", "m.a", "m.s", "m.b.a", "ph.d", "m.d", "j.d", "ll.b", "ll.m", "d.d.s",
    ]);

    // Latin and reference shorthand
    set.extend([
        "etc", "vs", "e.g", "i.e", "al", "cf", "viz", "ibid", "n.b", "p.s", "approx", "esp",
    ]);

    // Dates and times
    set.extend([
        "a.m", "p.m", "b.c", "a.d", "jan", "feb", "apr", "jun", "jul", "aug", "sep", "sept",
        "oct", "nov", "dec", "tues", "thurs",
    ]);

    // Places and organizations
    set.extend([
        "ave", "blvd", "apt", "bldg", "dept", "u.s", "u.k", "u.s.a", "e.u", "calif", "inc",
        "corp", "ltd", "llc", "bros", "assn", "intl",
    ]);

    // Citations and units that rarely end prose
    set.extend(["vol", "nos", "pp", "fig", "eq", "ch", "lbs", "oz", "ft", "mph"]);

    set
});

/// Check whether `word` is a known abbreviation.
///
/// Case-insensitive; surrounding periods are ignored.
pub fn is_abbreviation(word: &str) -> bool {
    let lower = word.to_lowercase();
    ABBREVIATIONS.contains(lower.trim_matches('.'))
}
