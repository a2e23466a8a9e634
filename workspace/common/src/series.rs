use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Category labels paired with numeric values, the input of the dashboard chart.
///
/// Both sides are optional so that malformed payloads (a `null` or missing
/// field) survive deserialization and can be rejected by the renderer
/// instead of failing the whole page.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct Series {
    #[serde(default)]
    pub labels: Option<Vec<String>>,
    #[serde(default)]
    pub values: Option<Vec<f64>>,
}

impl Series {
    pub fn new<L, S>(labels: L, values: Vec<f64>) -> Self
    where
        L: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            labels: Some(labels.into_iter().map(Into::into).collect()),
            values: Some(values),
        }
    }

    /// Borrow both sides when both are present. Empty or unequal lengths
    /// are still returned.
    pub fn parts(&self) -> Option<(&[String], &[f64])> {
        match (&self.labels, &self.values) {
            (Some(labels), Some(values)) => Some((labels, values)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_deserialize_as_none() {
        let series: Series = serde_json::from_str(r#"{"labels": ["a"]}"#).unwrap();
        assert_eq!(series.labels, Some(vec!["a".to_string()]));
        assert_eq!(series.values, None);
        assert!(series.parts().is_none());

        let series: Series = serde_json::from_str(r#"{"labels": null, "values": [1.0]}"#).unwrap();
        assert!(series.parts().is_none());
    }

    #[test]
    fn test_empty_and_unequal_lengths_are_well_formed() {
        let empty = Series::new(Vec::<String>::new(), vec![]);
        assert_eq!(empty.parts(), Some((&[][..], &[][..])));

        let unequal = Series::new(["Jan", "Feb"], vec![1.0]);
        let (labels, values) = unequal.parts().unwrap();
        assert_eq!(labels.len(), 2);
        assert_eq!(values.len(), 1);
    }
}
