use chrono::{Datelike, Utc};

/// Years the OCR step is known to misread into the near future. The year
/// correction fallback rewrites the first of these found in a candidate.
const MISREAD_YEARS: [i32; 4] = [2026, 2027, 2028, 2029];

re!(re_date_candidate, r"(\d{1,4})([-/. ])(\d{1,2})([-/. ])(\d{2,4})");
re!(re_year_run, r"\d{4}");

/// Date-shaped substrings in order of appearance, scanned over the raw,
/// unsplit text — dates often sit inline within a longer line. Both
/// separators must agree; the regex crate has no backreferences, so the
/// comparison happens here.
pub fn date_candidates(text: &str) -> Vec<&str> {
    re_date_candidate()
        .captures_iter(text)
        .filter(|c| c.get(2).map(|m| m.as_str()) == c.get(4).map(|m| m.as_str()))
        .filter_map(|c| c.get(0).map(|m| m.as_str()))
        .collect()
}

/// A candidate is plausible when its first four-digit run parses as a year
/// between 2000 and next year. The one-year slack tolerates OCR and
/// timezone skew around new year.
pub fn validate(candidate: &str) -> bool {
    let Some(run) = re_year_run().find(candidate) else {
        return false;
    };
    match run.as_str().parse::<i32>() {
        Ok(year) => (2000..=current_year() + 1).contains(&year),
        Err(_) => false,
    }
}

/// Best-effort OCR year correction: rewrite the first known-misread year to
/// the current year. Returns the candidate unchanged when none is present.
pub fn correct_year(candidate: &str) -> String {
    let current = current_year().to_string();
    for year in MISREAD_YEARS {
        let needle = year.to_string();
        if candidate.contains(&needle) {
            return candidate.replacen(&needle, &current, 1);
        }
    }
    candidate.to_string()
}

/// The extracted date: the first candidate that validates, else the first
/// candidate with the year correction applied, else nothing.
pub fn extract_date(text: &str) -> Option<String> {
    let candidates = date_candidates(text);
    if let Some(valid) = candidates.iter().find(|c| validate(c)) {
        return Some((*valid).to_string());
    }
    candidates.first().map(|c| correct_year(c))
}

fn current_year() -> i32 {
    Utc::now().year()
}
