use serde::{Deserialize, Serialize};
use strum::{EnumString, IntoStaticStr};

/// Currency of an amount. Codes the formatter has no convention for parse
/// into `Other` and render without a symbol.
#[derive(
    Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, EnumString, IntoStaticStr,
)]
#[strum(ascii_case_insensitive)]
pub enum Currency {
    #[default]
    NotSpecified,
    #[serde(rename = "USD")]
    #[strum(serialize = "USD")]
    Usd,
    #[serde(rename = "EUR")]
    #[strum(serialize = "EUR")]
    Eur,
    #[serde(rename = "AED")]
    #[strum(serialize = "AED")]
    Aed,
    #[serde(rename = "SAR")]
    #[strum(serialize = "SAR")]
    Sar,
    #[serde(untagged)]
    #[strum(default)]
    Other(String),
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_parse_iso_codes() {
        assert_eq!(Currency::from_str("USD").unwrap(), Currency::Usd);
        assert_eq!(Currency::from_str("eur").unwrap(), Currency::Eur);
        assert_eq!(Currency::from_str("NotSpecified").unwrap(), Currency::NotSpecified);
    }

    #[test]
    fn test_unknown_code_parses_as_other() {
        assert_eq!(
            Currency::from_str("GBP").unwrap(),
            Currency::Other("GBP".to_string())
        );
    }

    #[test]
    fn test_serde_codes() {
        assert_eq!(serde_json::to_value(Currency::Usd).unwrap(), serde_json::json!("USD"));

        let known: Currency = serde_json::from_value(serde_json::json!("AED")).unwrap();
        assert_eq!(known, Currency::Aed);

        let unknown: Currency = serde_json::from_value(serde_json::json!("GBP")).unwrap();
        assert_eq!(unknown, Currency::Other("GBP".to_string()));
    }

    #[test]
    fn test_code() {
        let code: &'static str = Currency::Sar.into();
        assert_eq!(code, "SAR");
    }
}
