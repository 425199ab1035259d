use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AmountError {
    #[error("Amount parse error: no decimal point in {0:?}")]
    MissingDecimalPoint(String),

    #[error("Amount parse error: too many decimal points in {0:?}")]
    TooManyDecimalPoints(String),

    #[error("Amount parse error: {0:?} is not a number")]
    NotANumber(String),
}

/// Display parts of an amount string, split on its decimal point without any reformatting
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitAmount<'a> {
    pub dollars: &'a str,
    pub cents: &'a str,
}

impl<'a> SplitAmount<'a> {
    pub fn parse(amount: &'a str) -> Result<Self, AmountError> {
        let mut parts = amount.split('.');

        if parts.clone().count() > 2 {
            return Err(AmountError::TooManyDecimalPoints(amount.to_string()));
        }

        let dollars = parts.next().unwrap_or_default();

        let cents = parts
            .next()
            .ok_or_else(|| AmountError::MissingDecimalPoint(amount.to_string()))?;

        return Ok(Self { dollars, cents });
    }
}

/// Parses an amount string as a float for balance arithmetic
pub fn parse_amount(amount: &str) -> Result<f64, AmountError> {
    return amount
        .trim()
        .parse::<f64>()
        .map_err(|_| AmountError::NotANumber(amount.to_string()));
}
