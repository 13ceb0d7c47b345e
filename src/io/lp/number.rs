//! # Number scanning
//!
//! Numbers in LP files are not separated from what follows: in `2x` the constant `2` is directly
//! followed by a variable name. This module finds the longest prefix of a line that reads as a
//! decimal floating point number.
use crate::io::error::{Parse as ParseError, ParseResult};

/// Read the longest decimal number at the start of `text`.
///
/// Accepted is an optional sign, digits with at most one decimal point (at least one digit in
/// total) and an optional exponent. An exponent marker that is not followed by digits is not part
/// of the number.
///
/// # Arguments
///
/// * `text`: Rest of the line, starting at the first character of the potential number.
///
/// # Return value
///
/// `None` if no number starts here, otherwise the value and the number of bytes it spans.
///
/// # Errors
///
/// If the matched span can't be converted to a value. That should not happen for spans matched
/// here.
pub(super) fn scan(text: &str) -> ParseResult<Option<(f64, usize)>> {
    let length = match span(text.as_bytes()) {
        None => return Ok(None),
        Some(length) => length,
    };

    let number_text = &text[..length];
    let value = number_text.parse::<f64>()
        .map_err(|error| ParseError::new(format!(
            "Failed to parse value text \"{}\" into f64: {}", number_text, error,
        )))?;

    Ok(Some((value, length)))
}

fn span(bytes: &[u8]) -> Option<usize> {
    let digits_from = |start: usize| {
        bytes[start..].iter().take_while(|byte| byte.is_ascii_digit()).count()
    };

    let mut position = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        position += 1;
    }

    let integer_digits = digits_from(position);
    position += integer_digits;

    let mut fraction_digits = 0;
    if bytes.get(position) == Some(&b'.') {
        fraction_digits = digits_from(position + 1);
        if integer_digits + fraction_digits > 0 {
            position += 1 + fraction_digits;
        }
    }

    if integer_digits + fraction_digits == 0 {
        return None;
    }

    if matches!(bytes.get(position), Some(b'e' | b'E')) {
        let mut exponent_start = position + 1;
        if matches!(bytes.get(exponent_start), Some(b'+' | b'-')) {
            exponent_start += 1;
        }
        let exponent_digits = digits_from(exponent_start.min(bytes.len()));
        if exponent_digits > 0 {
            position = exponent_start + exponent_digits;
        }
    }

    Some(position)
}

#[cfg(test)]
mod test {
    use crate::io::lp::number::scan;

    #[test]
    fn whole() {
        assert_eq!(scan("1").unwrap(), Some((1_f64, 1)));
        assert_eq!(scan("16456").unwrap(), Some((16456_f64, 5)));
        assert_eq!(scan("2.").unwrap(), Some((2_f64, 2)));
        assert_eq!(scan(".3").unwrap(), Some((0.3, 2)));
        assert_eq!(scan("1234.56789").unwrap(), Some((1234.56789, 10)));
        assert_eq!(scan("0").unwrap(), Some((0_f64, 1)));
    }

    #[test]
    fn sign() {
        assert_eq!(scan("-1").unwrap(), Some((-1_f64, 2)));
        assert_eq!(scan("+.5").unwrap(), Some((0.5, 3)));
        assert_eq!(scan("-").unwrap(), None);
    }

    #[test]
    fn exponent() {
        assert_eq!(scan("1e5").unwrap(), Some((1e5, 3)));
        assert_eq!(scan("2.5E-3").unwrap(), Some((2.5e-3, 6)));
        assert_eq!(scan("3e+2 x").unwrap(), Some((3e2, 4)));
        // Marker without digits belongs to what follows
        assert_eq!(scan("1e").unwrap(), Some((1_f64, 1)));
        assert_eq!(scan("2ex").unwrap(), Some((2_f64, 1)));
        assert_eq!(scan("4e-").unwrap(), Some((4_f64, 1)));
    }

    #[test]
    fn prefix() {
        assert_eq!(scan("2x").unwrap(), Some((2_f64, 1)));
        assert_eq!(scan("10;").unwrap(), Some((10_f64, 2)));
        assert_eq!(scan("3.5.2").unwrap(), Some((3.5, 3)));
    }

    #[test]
    fn no_number() {
        assert_eq!(scan("x1").unwrap(), None);
        assert_eq!(scan(".").unwrap(), None);
        assert_eq!(scan(".x").unwrap(), None);
        assert_eq!(scan("s.t.").unwrap(), None);
        assert_eq!(scan("").unwrap(), None);
        assert_eq!(scan("inf").unwrap(), None);
    }
}
