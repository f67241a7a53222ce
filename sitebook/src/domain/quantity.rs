use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};

/// A numeric record field as it is stored on disk.
///
/// Files written by the web version of the tracker store form input verbatim, so a
/// budget may arrive as `10`, `"10"`, `""` or `null`. The raw shape is kept so a
/// loaded document serializes back unchanged; [`Quantity::value`] applies the
/// "parse or default to zero" rule when the number is needed. Values of any other
/// JSON type land in `Other` and count as zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Quantity {
    Number(Number),
    Text(String),
    Unset,
    Other(Value),
}

impl Default for Quantity {
    fn default() -> Self {
        Quantity::Number(Number::from(0))
    }
}

impl Quantity {
    /// Numeric value, coercing blanks, garbage and non-finite values to zero.
    pub fn value(&self) -> f64 {
        let value = match self {
            Quantity::Number(n) => n.as_f64().unwrap_or(0.0),
            Quantity::Text(s) => s.trim().parse::<f64>().unwrap_or(0.0),
            Quantity::Unset | Quantity::Other(_) => 0.0,
        };
        if value.is_finite() {
            value
        } else {
            0.0
        }
    }

    /// Parse user input. Blank input becomes zero; anything that is not a finite
    /// number is rejected.
    pub fn parse_input(input: &str) -> Option<Self> {
        let input = input.trim();
        if input.is_empty() {
            return Some(Quantity::default());
        }
        if let Ok(whole) = input.parse::<i64>() {
            return Some(Quantity::Number(Number::from(whole)));
        }
        let value = input.parse::<f64>().ok().filter(|v| v.is_finite())?;
        Number::from_f64(value).map(Quantity::Number)
    }

    /// Text shown in form inputs.
    pub fn to_input(&self) -> String {
        match self {
            Quantity::Number(n) => n.to_string(),
            Quantity::Text(s) => s.clone(),
            Quantity::Unset | Quantity::Other(_) => String::new(),
        }
    }
}

impl From<i64> for Quantity {
    fn from(value: i64) -> Self {
        Quantity::Number(Number::from(value))
    }
}

impl From<f64> for Quantity {
    fn from(value: f64) -> Self {
        Number::from_f64(value)
            .map(Quantity::Number)
            .unwrap_or_default()
    }
}

impl std::fmt::Display for Quantity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", format_amount(self.value()))
    }
}

/// Format an amount without a trailing `.0` for whole numbers.
pub fn format_amount(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        let s = format!("{:.2}", value);
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_and_numeric_strings_coerce() {
        assert_eq!(Quantity::from(10).value(), 10.0);
        assert_eq!(Quantity::Text(" 2.5 ".to_string()).value(), 2.5);
    }

    #[test]
    fn garbage_and_blanks_coerce_to_zero() {
        assert_eq!(Quantity::Text("abc".to_string()).value(), 0.0);
        assert_eq!(Quantity::Text(String::new()).value(), 0.0);
        assert_eq!(Quantity::Unset.value(), 0.0);
        assert_eq!(Quantity::Text("NaN".to_string()).value(), 0.0);
    }

    #[test]
    fn raw_shape_survives_serde() {
        let raw = r#"[3,"4","",null,1.5]"#;
        let parsed: Vec<Quantity> = serde_json::from_str(raw).unwrap();
        assert_eq!(parsed[1], Quantity::Text("4".to_string()));
        assert_eq!(parsed[3], Quantity::Unset);
        assert_eq!(serde_json::to_string(&parsed).unwrap(), raw);
    }

    #[test]
    fn other_json_types_count_as_zero_and_round_trip() {
        let raw = r#"[true,{"n":1},[2]]"#;
        let parsed: Vec<Quantity> = serde_json::from_str(raw).unwrap();
        assert_eq!(parsed[0], Quantity::Other(Value::Bool(true)));
        assert!(parsed.iter().all(|q| q.value() == 0.0));
        assert_eq!(parsed[1].to_input(), "");
        assert_eq!(serde_json::to_string(&parsed).unwrap(), raw);
    }

    #[test]
    fn input_parsing_rejects_non_numbers() {
        assert_eq!(Quantity::parse_input(""), Some(Quantity::from(0)));
        assert_eq!(Quantity::parse_input("7"), Some(Quantity::from(7)));
        assert_eq!(Quantity::parse_input("0.5").map(|q| q.value()), Some(0.5));
        assert_eq!(Quantity::parse_input("seven"), None);
        assert_eq!(Quantity::parse_input("inf"), None);
    }

    #[test]
    fn amounts_format_compactly() {
        assert_eq!(format_amount(3.0), "3");
        assert_eq!(format_amount(-1.5), "-1.5");
        assert_eq!(format_amount(0.1 + 0.2), "0.3");
    }
}
