use once_cell::sync::Lazy;
use regex::Regex;

// ASCII digits only; minutes take one or two so that "5:7" still yields "05:7".
static TIME_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([0-9]{1,2}):([0-9]{1,2})").unwrap());

/// Extract the first `H:MM`-like substring from an upstream timing string such as
/// `"05:12 (EET)"`. The hour is zero-padded, the minute digits pass through as-is.
/// Returns an empty string when nothing time-like is present.
pub fn normalize(raw: &str) -> String {
    let Some(caps) = TIME_PATTERN.captures(raw) else {
        return String::new();
    };
    let hour: u32 = match caps[1].parse() {
        Ok(h) => h,
        Err(_) => return String::new(),
    };
    format!("{:02}:{}", hour, &caps[2])
}
