use regex::Regex;
use std::sync::LazyLock;

static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^8-800-[0-9]{3}-[0-9]{2}-[0-9]{2}$").expect("valid regex"));

/// Checks that the whole string has the form `8-800-xxx-xx-xx`.
pub fn is_phone_number(phone_number: &str) -> bool {
    PHONE_RE.is_match(phone_number)
}
