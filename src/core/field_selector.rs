use smallvec::SmallVec;

use crate::core::primitives::format_compact;
use crate::core::{DataRecord, FieldValue};
use crate::error::{ChartError, ChartResult};

/// Ordered list of field names tried against each record.
///
/// The first candidate that is present with a non-null value wins. Mock
/// datasets mix shapes (`projects` on monthly rows, `total` on weekly rows), so
/// a single selector can cover all of them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSelector {
    candidates: SmallVec<[String; 4]>,
}

impl FieldSelector {
    pub fn new<I, S>(candidates: I) -> ChartResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let candidates: SmallVec<[String; 4]> = candidates.into_iter().map(Into::into).collect();
        if candidates.is_empty() {
            return Err(ChartError::InvalidInput(
                "field selector requires at least one candidate".to_owned(),
            ));
        }
        if let Some(position) = candidates.iter().position(|name| name.trim().is_empty()) {
            return Err(ChartError::InvalidInput(format!(
                "field candidate {position} must not be blank"
            )));
        }
        Ok(Self { candidates })
    }

    /// Selector with a single field name.
    pub fn single(name: impl Into<String>) -> ChartResult<Self> {
        Self::new([name.into()])
    }

    #[must_use]
    pub fn candidates(&self) -> &[String] {
        &self.candidates
    }

    fn first_present<'a>(&self, record: &'a DataRecord) -> Option<(&str, &'a FieldValue)> {
        self.candidates.iter().find_map(|name| {
            record
                .get(name)
                .filter(|value| !value.is_null())
                .map(|value| (name.as_str(), value))
        })
    }

    /// Resolves the numeric value of `record`, or `0.0` when no candidate is present.
    ///
    /// A present candidate holding text or a non-finite number is an error.
    pub fn resolve_value(&self, record: &DataRecord) -> ChartResult<f64> {
        match self.first_present(record) {
            None => Ok(0.0),
            Some((_, FieldValue::Number(value))) if value.is_finite() => Ok(*value),
            Some((name, FieldValue::Number(_))) => Err(ChartError::InvalidInput(format!(
                "field `{name}` must be finite"
            ))),
            Some((name, _)) => Err(ChartError::InvalidInput(format!(
                "field `{name}` must be numeric"
            ))),
        }
    }

    /// Resolves a display label, or an empty string when no candidate is present.
    #[must_use]
    pub fn resolve_label(&self, record: &DataRecord) -> String {
        match self.first_present(record) {
            Some((_, FieldValue::Text(text))) => text.clone(),
            Some((_, FieldValue::Number(value))) => format_compact(*value, 6),
            Some((_, FieldValue::Null)) | None => String::new(),
        }
    }
}
