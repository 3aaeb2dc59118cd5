use std::str::FromStr;

use crate::{
    filters::sharpen::validate_amount,
    foundation::error::{FilterError, FilterResult},
};

/// Amount used when `sharpen` is named without one.
pub const DEFAULT_SHARPEN_AMOUNT: f64 = 1.0;

/// Filter selected by the caller.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FilterKind {
    /// Identity.
    None,
    Grayscale,
    Sepia,
    /// 3x3 sharpen; `amount` is finite and `>= 0`.
    Sharpen { amount: f64 },
}

impl FilterKind {
    /// Canonical lowercase name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Grayscale => "grayscale",
            Self::Sepia => "sepia",
            Self::Sharpen { .. } => "sharpen",
        }
    }
}

/// JSON-facing filter entry: a kind name plus free-form parameters.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct FilterInstance {
    pub kind: String,
    #[serde(default)]
    pub params: serde_json::Value,
}

/// Resolve a [`FilterInstance`]. Only `sharpen` takes params; other kinds accept `null` or `{}`.
pub fn parse_filter(inst: &FilterInstance) -> FilterResult<FilterKind> {
    let kind = normalize_name(&inst.kind)?;
    match kind.as_str() {
        "none" | "identity" => no_params(&kind, &inst.params).map(|()| FilterKind::None),
        "grayscale" | "greyscale" | "gray" | "grey" => {
            no_params(&kind, &inst.params).map(|()| FilterKind::Grayscale)
        }
        "sepia" => no_params(&kind, &inst.params).map(|()| FilterKind::Sepia),
        "sharpen" => {
            let amount = get_f64(&inst.params, "amount")?;
            validate_amount(amount)?;
            Ok(FilterKind::Sharpen { amount })
        }
        _ => Err(FilterError::unsupported_kind(kind)),
    }
}

impl FromStr for FilterKind {
    type Err = FilterError;

    /// Accepts the names [`parse_filter`] does; `sharpen:<amount>` sets the amount.
    fn from_str(s: &str) -> FilterResult<Self> {
        let (name, amount) = match s.split_once(':') {
            Some((name, amount)) => (name, Some(amount.trim())),
            None => (s, None),
        };
        let name = normalize_name(name)?;

        if name == "sharpen" {
            let amount = match amount {
                Some(a) => a.parse::<f64>().map_err(|e| {
                    FilterError::invalid_parameter(format!("sharpen amount '{a}': {e}"))
                })?,
                None => DEFAULT_SHARPEN_AMOUNT,
            };
            validate_amount(amount)?;
            return Ok(Self::Sharpen { amount });
        }
        if amount.is_some() {
            return Err(FilterError::invalid_parameter(format!(
                "filter '{name}' takes no amount"
            )));
        }
        parse_filter(&FilterInstance {
            kind: name,
            params: serde_json::Value::Null,
        })
    }
}

fn normalize_name(kind: &str) -> FilterResult<String> {
    let kind = kind.trim().to_ascii_lowercase();
    if kind.is_empty() {
        return Err(FilterError::unsupported_kind("<empty>"));
    }
    Ok(kind)
}

fn no_params(kind: &str, params: &serde_json::Value) -> FilterResult<()> {
    let empty = match params {
        serde_json::Value::Null => true,
        serde_json::Value::Object(m) => m.is_empty(),
        _ => false,
    };
    if !empty {
        return Err(FilterError::invalid_parameter(format!(
            "filter '{kind}' takes no params"
        )));
    }
    Ok(())
}

fn get_f64(params: &serde_json::Value, key: &str) -> FilterResult<f64> {
    let Some(v) = params.get(key) else {
        return Err(FilterError::invalid_parameter(format!(
            "missing filter param '{key}'"
        )));
    };
    v.as_f64().ok_or_else(|| {
        FilterError::invalid_parameter(format!("filter param '{key}' must be a number"))
    })
}

#[cfg(test)]
#[path = "../../tests/unit/pipeline/kind.rs"]
mod tests;
