use crate::error::CalcError;

/// Parse a raw score as typed into a numeric field.
///
/// Integer-prefix semantics: leading whitespace and an optional sign are
/// accepted, then as many digits as follow (`"85abc"` -> 85, `"12.7"` -> 12).
/// Values beyond `i64` saturate. Input with no leading digit is
/// `CalcError::InvalidInput`.
pub fn parse_score(raw: &str) -> Result<i64, CalcError> {
    let s = raw.trim_start();
    let (negative, rest) = if let Some(rest) = s.strip_prefix('-') {
        (true, rest)
    } else if let Some(rest) = s.strip_prefix('+') {
        (false, rest)
    } else {
        (false, s)
    };

    let digits: &str = {
        let end = rest
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(rest.len());
        &rest[..end]
    };

    if digits.is_empty() {
        return Err(CalcError::InvalidInput(raw.to_string()));
    }

    let magnitude = digits.parse::<i64>().unwrap_or(i64::MAX);
    Ok(if negative { -magnitude } else { magnitude })
}

/// Clamp a parsed value into `[0, max_marks]`.
pub fn clamp_score(value: i64, max_marks: u32) -> u32 {
    value.clamp(0, i64::from(max_marks)) as u32
}
