use std::{fs::File, io::BufReader, path::Path};

use crate::{
    filters::sharpen::BorderPolicy,
    foundation::{
        buffer::PixelBuffer,
        error::{FilterError, FilterResult},
    },
    pipeline::{
        apply::apply_filter_with,
        kind::{FilterInstance, FilterKind, parse_filter},
    },
};

/// Ordered filters sharing one border policy.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FilterChain {
    pub filters: Vec<FilterKind>,
    pub border: BorderPolicy,
}

impl FilterChain {
    pub fn new(border: BorderPolicy) -> Self {
        Self {
            filters: Vec::new(),
            border,
        }
    }

    /// Append a filter; builder style.
    pub fn push(mut self, kind: FilterKind) -> Self {
        self.filters.push(kind);
        self
    }

    pub fn len(&self) -> usize {
        self.filters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    #[tracing::instrument(skip(self, buffer), fields(steps = self.filters.len()))]
    /// Run every filter in order. An empty chain returns `buffer` as is.
    pub fn apply(&self, buffer: PixelBuffer) -> FilterResult<PixelBuffer> {
        let mut buffer = buffer;
        for (i, kind) in self.filters.iter().enumerate() {
            tracing::debug!(step = i, filter = kind.name(), "apply");
            buffer = apply_filter_with(buffer, kind, self.border)?;
        }
        Ok(buffer)
    }
}

/// JSON-facing description of a [`FilterChain`].
///
/// ```json
/// { "border": "copy_source", "filters": [ { "kind": "sharpen", "params": { "amount": 1.5 } } ] }
/// ```
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FilterRecipe {
    #[serde(default)]
    pub border: BorderPolicy,
    #[serde(default)]
    pub filters: Vec<FilterInstance>,
}

impl FilterRecipe {
    /// Parse a recipe from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> FilterResult<Self> {
        serde_json::from_reader(r)
            .map_err(|e| FilterError::config(format!("parse recipe JSON: {e}")))
    }

    pub fn from_json_str(s: &str) -> FilterResult<Self> {
        serde_json::from_str(s).map_err(|e| FilterError::config(format!("parse recipe JSON: {e}")))
    }

    /// Parse a recipe from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> FilterResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            FilterError::config(format!("open recipe JSON '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Resolve every entry into a [`FilterKind`]. Errors are prefixed with the entry index.
    pub fn to_chain(&self) -> FilterResult<FilterChain> {
        let mut chain = FilterChain::new(self.border);
        for (i, inst) in self.filters.iter().enumerate() {
            let kind = parse_filter(inst).map_err(|e| at_index(i, e))?;
            chain.filters.push(kind);
        }
        Ok(chain)
    }
}

fn at_index(i: usize, err: FilterError) -> FilterError {
    match err {
        FilterError::UnsupportedFilterKind(k) => {
            FilterError::UnsupportedFilterKind(format!("filters[{i}]: {k}"))
        }
        FilterError::InvalidParameter(m) => {
            FilterError::InvalidParameter(format!("filters[{i}]: {m}"))
        }
        other => other,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/pipeline/recipe.rs"]
mod tests;
