/// Inserts `,` between every group of three digits: `1234567` -> `1,234,567`.
pub fn thousands(num: u64) -> String {
    group_digits(&num.to_string())
}

/// Thousands-separated with an explicit sign: `+2,000`, `-500`, `+0`.
pub fn signed_thousands(num: i128) -> String {
    let sign = if num < 0 { '-' } else { '+' };
    format!("{sign}{}", group_digits(&num.unsigned_abs().to_string()))
}

/// Rounds to a whole number, then groups digits: `1250.4` -> `1,250`.
pub fn thousands_f64(value: f64) -> String {
    let rounded = format!("{value:.0}");
    match rounded.strip_prefix('-') {
        Some(digits) => format!("-{}", group_digits(digits)),
        None => group_digits(&rounded),
    }
}

fn group_digits(digits: &str) -> String {
    let len = digits.len();
    let mut result = String::with_capacity(len + len / 3);
    for (i, c) in digits.chars().enumerate() {
        result.push(c);
        if (len - i - 1) % 3 == 0 && i < len - 1 {
            result.push(',');
        }
    }
    result
}

/// Turns a measurement key into a table label: `MULTI_HOP_SWAP` -> `Multi Hop Swap`.
///
/// A letter is upper-cased when it follows a non-letter and lower-cased
/// otherwise, so digits start a new word boundary (`DEPOSIT_1ST` -> `Deposit 1St`).
pub fn title_case(name: &str) -> String {
    let mut result = String::with_capacity(name.len());
    let mut prev_is_letter = false;
    for c in name.chars() {
        let c = if c == '_' { ' ' } else { c };
        if c.is_alphabetic() {
            if prev_is_letter {
                result.extend(c.to_lowercase());
            } else {
                result.extend(c.to_uppercase());
            }
            prev_is_letter = true;
        } else {
            result.push(c);
            prev_is_letter = false;
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thousands() {
        assert_eq!(thousands(0), "0");
        assert_eq!(thousands(999), "999");
        assert_eq!(thousands(1000), "1,000");
        assert_eq!(thousands(100000), "100,000");
        assert_eq!(thousands(1234567), "1,234,567");
    }

    #[test]
    fn test_signed_thousands() {
        assert_eq!(signed_thousands(0), "+0");
        assert_eq!(signed_thousands(2000), "+2,000");
        assert_eq!(signed_thousands(-500), "-500");
        assert_eq!(signed_thousands(-1234567), "-1,234,567");
        assert_eq!(signed_thousands(i64::MIN as i128), "-9,223,372,036,854,775,808");
        assert_eq!(signed_thousands(1 << 63), "+9,223,372,036,854,775,808");
        assert_eq!(
            signed_thousands(-(u64::MAX as i128)),
            "-18,446,744,073,709,551,615"
        );
    }

    #[test]
    fn test_thousands_f64() {
        assert_eq!(thousands_f64(0.0), "0");
        assert_eq!(thousands_f64(1250.0), "1,250");
        assert_eq!(thousands_f64(1250.4), "1,250");
        assert_eq!(thousands_f64(999999.7), "1,000,000");
        assert_eq!(thousands_f64(-4321.0), "-4,321");
    }

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("DEPOSIT"), "Deposit");
        assert_eq!(title_case("MULTI_HOP_SWAP"), "Multi Hop Swap");
        assert_eq!(title_case("fill_order"), "Fill Order");
        assert_eq!(title_case("DEPOSIT_1ST"), "Deposit 1St");
        assert_eq!(title_case("V2_SWAP"), "V2 Swap");
    }
}
