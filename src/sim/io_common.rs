use crate::sim::*;

/// A share with one decimal and a percent sign: `31.2%`.
pub fn format_percent(share: f64) -> String {
    format!("{:.1}%", share)
}

/// A vote count rounded to an integer, with the digits grouped by thousands.
pub fn group_thousands(value: f64) -> String {
    let digits = format!("{:.0}", value);
    let (sign, digits) = match digits.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", digits.as_str()),
    };
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!("{}{}", sign, grouped)
}

/// Reads a `NAME=VALUE` score override. The name is everything before the
/// last `=`.
pub fn parse_score_override(text: &str) -> SimResult<(String, i64)> {
    let (name, value) = text
        .rsplit_once('=')
        .context(ParsingScoreSnafu { text })?;
    let name = name.trim();
    let score = value
        .trim()
        .parse::<i64>()
        .ok()
        .context(ParsingScoreSnafu { text })?;
    ensure!(!name.is_empty(), ParsingScoreSnafu { text });
    Ok((name.to_string(), score))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percent() {
        assert_eq!(format_percent(31.26), "31.3%");
        assert_eq!(format_percent(20.0 / 96.0 * 100.0), "20.8%");
        assert_eq!(format_percent(100.0), "100.0%");
        assert_eq!(format_percent(0.0), "0.0%");
    }

    #[test]
    fn thousands() {
        assert_eq!(group_thousands(0.0), "0");
        assert_eq!(group_thousands(999.4), "999");
        assert_eq!(group_thousands(1_000.0), "1,000");
        assert_eq!(group_thousands(3_500_000.0), "3,500,000");
        assert_eq!(group_thousands(2_333_333.333), "2,333,333");
        assert_eq!(group_thousands(11_200_000.0), "11,200,000");
        assert_eq!(group_thousands(-12_345.0), "-12,345");
    }

    #[test]
    fn score_overrides() {
        assert_eq!(
            parse_score_override("José Antonio Kast=25").unwrap(),
            ("José Antonio Kast".to_string(), 25)
        );
        assert_eq!(
            parse_score_override(" Franco Parisi = -3 ").unwrap(),
            ("Franco Parisi".to_string(), -3)
        );
        assert!(matches!(
            parse_score_override("Franco Parisi"),
            Err(SimError::ParsingScore { .. })
        ));
        assert!(parse_score_override("Franco Parisi=ten").is_err());
        assert!(parse_score_override("=10").is_err());
    }
}
