// ============================================================================
// Numeric Literals
// Lexing of decimal strings with optional sign, fraction and exponent
// ============================================================================

/// Largest number of integer digits the decimal type can hold.
const MAX_INTEGER_DIGITS: i64 = 29;

/// Values whose first significant digit lies further right than this round to zero.
const MIN_SIGNIFICANT_POSITION: i64 = -40;

/// Exponent magnitudes are clamped here; anything beyond is either far out
/// of range or far below the smallest representable fraction.
const EXPONENT_CLAMP: i64 = 100_000;

/// A lexed numeric literal: `0.digits × 10^point` with the leading and
/// trailing zeros of `digits` stripped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Literal {
    negative: bool,
    digits: String,
    point: i64,
}

impl Literal {
    /// Lex `input` as `[+-]? (digits [. digits?]? | . digits) ([eE] [+-]? digits)?`,
    /// ignoring surrounding whitespace.
    ///
    /// Returns `None` for anything else, including the empty string, words
    /// such as `Infinity` or `NaN`, and trailing junk.
    pub(crate) fn parse(input: &str) -> Option<Self> {
        let s = input.trim();

        let (negative, s) = if let Some(rest) = s.strip_prefix('-') {
            (true, rest)
        } else if let Some(rest) = s.strip_prefix('+') {
            (false, rest)
        } else {
            (false, s)
        };

        let (mantissa, exponent) = match s.find(['e', 'E']) {
            Some(pos) => (&s[..pos], Some(&s[pos + 1..])),
            None => (s, None),
        };

        let (int_str, frac_str) = match mantissa.find('.') {
            Some(pos) => (&mantissa[..pos], &mantissa[pos + 1..]),
            None => (mantissa, ""),
        };

        if int_str.is_empty() && frac_str.is_empty() {
            return None;
        }
        if !all_digits(int_str) || !all_digits(frac_str) {
            return None;
        }

        let exponent = match exponent {
            Some(e) => parse_exponent(e)?,
            None => 0,
        };

        let mut digits = String::with_capacity(int_str.len() + frac_str.len());
        digits.push_str(int_str);
        digits.push_str(frac_str);

        let leading = digits.len() - digits.trim_start_matches('0').len();
        let point = int_str.len() as i64 - leading as i64 + exponent;
        let digits = digits.trim_matches('0').to_string();

        Some(Self {
            negative,
            digits,
            point,
        })
    }

    pub(crate) fn is_negative(&self) -> bool {
        self.negative
    }

    pub(crate) fn is_zero(&self) -> bool {
        self.digits.is_empty()
    }

    /// Expand into a plain decimal string without exponent.
    ///
    /// Returns `None` when the integer part has more digits than the
    /// decimal type can ever hold.
    pub(crate) fn to_plain(&self) -> Option<String> {
        if self.is_zero() || self.point < MIN_SIGNIFICANT_POSITION {
            return Some(if self.negative { "-0" } else { "0" }.to_string());
        }
        if self.point > MAX_INTEGER_DIGITS {
            return None;
        }

        let len = self.digits.len() as i64;
        let capacity = self.digits.len() + self.point.unsigned_abs() as usize + 3;
        let mut out = String::with_capacity(capacity);
        if self.negative {
            out.push('-');
        }

        if self.point <= 0 {
            out.push_str("0.");
            out.extend(std::iter::repeat_n('0', (-self.point) as usize));
            out.push_str(&self.digits);
        } else if self.point >= len {
            out.push_str(&self.digits);
            out.extend(std::iter::repeat_n('0', (self.point - len) as usize));
        } else {
            let (int_part, frac_part) = self.digits.split_at(self.point as usize);
            out.push_str(int_part);
            out.push('.');
            out.push_str(frac_part);
        }

        Some(out)
    }
}

fn all_digits(s: &str) -> bool {
    s.bytes().all(|b| b.is_ascii_digit())
}

fn parse_exponent(s: &str) -> Option<i64> {
    let (negative, digits) = if let Some(rest) = s.strip_prefix('-') {
        (true, rest)
    } else if let Some(rest) = s.strip_prefix('+') {
        (false, rest)
    } else {
        (false, s)
    };

    if digits.is_empty() || !all_digits(digits) {
        return None;
    }

    let significant = digits.trim_start_matches('0');
    let magnitude = if significant.len() > 6 {
        EXPONENT_CLAMP
    } else {
        significant.parse::<i64>().unwrap_or(0).min(EXPONENT_CLAMP)
    };

    Some(if negative { -magnitude } else { magnitude })
}
