use reagentry::engine::pool::ReagentPool;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ParseError {
    #[error("Invalid pool entry '{0}'. Expected 'NAME=QUANTITY' (e.g., 'Water=1.0').")]
    MissingSeparator(String),

    #[error("Substance name cannot be empty in pool entry '{0}'.")]
    EmptyName(String),

    #[error("Invalid quantity '{value}' in pool entry '{entry}'. Expected a non-negative number.")]
    InvalidQuantity { entry: String, value: String },
}

pub fn parse_pool_entry(entry: &str) -> Result<(String, f64), ParseError> {
    let (name, value) = entry
        .split_once('=')
        .ok_or_else(|| ParseError::MissingSeparator(entry.to_string()))?;
    let name = name.trim();
    if name.is_empty() {
        return Err(ParseError::EmptyName(entry.to_string()));
    }
    let quantity: f64 = value
        .trim()
        .parse()
        .ok()
        .filter(|q: &f64| q.is_finite() && *q >= 0.0)
        .ok_or_else(|| ParseError::InvalidQuantity {
            entry: entry.to_string(),
            value: value.trim().to_string(),
        })?;
    Ok((name.to_string(), quantity))
}

/// Builds a pool from `NAME=QUANTITY` entries; repeated names accumulate.
pub fn parse_pool(entries: &[String]) -> Result<ReagentPool, ParseError> {
    let mut pool = ReagentPool::new();
    for entry in entries {
        let (name, quantity) = parse_pool_entry(entry)?;
        pool.add(&name, quantity);
    }
    Ok(pool)
}
