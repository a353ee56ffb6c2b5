//! Validation findings and their flattening into a single ordered list.

/// A single non-fatal finding attached to a schema element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Warning {
    /// A `praezisierung` value could not be interpreted.
    InvalidInputConstraints { identifier: String, value: String },
    /// An expected child element is absent or blank.
    MissingAttribute {
        identifier: String,
        attribute: String,
    },
}

impl Warning {
    pub fn invalid_input_constraints(
        identifier: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Warning::InvalidInputConstraints {
            identifier: identifier.into(),
            value: value.into(),
        }
    }

    pub fn missing_attribute(identifier: impl Into<String>, attribute: impl Into<String>) -> Self {
        Warning::MissingAttribute {
            identifier: identifier.into(),
            attribute: attribute.into(),
        }
    }

    /// Name of the element or rule the warning belongs to.
    pub fn identifier(&self) -> &str {
        match self {
            Warning::InvalidInputConstraints { identifier, .. }
            | Warning::MissingAttribute { identifier, .. } => identifier,
        }
    }
}

/// Warnings grouped by element identifier.
///
/// Kept as a sequence of pairs so iteration order is always the order in
/// which identifiers were first recorded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WarningBuckets {
    entries: Vec<(String, Vec<Warning>)>,
}

impl WarningBuckets {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a warning to the bucket for `identifier`, creating the bucket
    /// at the end if it does not exist yet.
    pub fn push(&mut self, identifier: &str, warning: Warning) {
        match self.entries.iter_mut().find(|(id, _)| id == identifier) {
            Some((_, warnings)) => warnings.push(warning),
            None => self.entries.push((identifier.to_string(), vec![warning])),
        }
    }

    pub fn get(&self, identifier: &str) -> Option<&[Warning]> {
        self.entries
            .iter()
            .find(|(id, _)| id == identifier)
            .map(|(_, warnings)| warnings.as_slice())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Warning])> {
        self.entries
            .iter()
            .map(|(id, warnings)| (id.as_str(), warnings.as_slice()))
    }

    /// Total number of warnings across all buckets.
    pub fn len(&self) -> usize {
        self.entries.iter().map(|(_, warnings)| warnings.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl FromIterator<(String, Vec<Warning>)> for WarningBuckets {
    fn from_iter<I: IntoIterator<Item = (String, Vec<Warning>)>>(iter: I) -> Self {
        let mut buckets = WarningBuckets::new();
        for (identifier, warnings) in iter {
            for warning in warnings {
                buckets.push(&identifier, warning);
            }
        }
        buckets
    }
}

/// All warnings produced for one document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WarningCollection {
    pub schema_warnings: Vec<Warning>,
    pub data_field_warnings: WarningBuckets,
    pub data_group_warnings: WarningBuckets,
    pub rule_warnings: WarningBuckets,
}

impl WarningCollection {
    pub fn len(&self) -> usize {
        self.schema_warnings.len()
            + self.data_field_warnings.len()
            + self.data_group_warnings.len()
            + self.rule_warnings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Every warning in output order: schema warnings, then data fields, then
    /// data groups, then rules. Within a category buckets keep their recorded
    /// order.
    pub fn flatten(&self) -> Vec<&Warning> {
        let mut list = Vec::with_capacity(self.len());
        list.extend(self.schema_warnings.iter());
        for buckets in [
            &self.data_field_warnings,
            &self.data_group_warnings,
            &self.rule_warnings,
        ] {
            for (_, warnings) in buckets.iter() {
                list.extend(warnings.iter());
            }
        }
        list
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_collection() -> WarningCollection {
        let mut collection = WarningCollection {
            schema_warnings: vec![Warning::missing_attribute("S1", "name")],
            ..Default::default()
        };
        collection
            .data_field_warnings
            .push("F2", Warning::missing_attribute("F2", "name"));
        collection
            .data_field_warnings
            .push("F1", Warning::invalid_input_constraints("F1", "{"));
        collection
            .data_field_warnings
            .push("F2", Warning::missing_attribute("F2", "bezeichnungEingabe"));
        collection
            .data_group_warnings
            .push("G1", Warning::missing_attribute("G1", "name"));
        collection
            .rule_warnings
            .push("R1", Warning::missing_attribute("R1", "script"));
        collection
    }

    #[test]
    fn test_flatten_visits_categories_in_order() {
        let collection = sample_collection();
        let identifiers: Vec<_> = collection
            .flatten()
            .into_iter()
            .map(Warning::identifier)
            .collect();

        assert_eq!(identifiers, vec!["S1", "F2", "F2", "F1", "G1", "R1"]);
    }

    #[test]
    fn test_flatten_length_matches_bucket_sum() {
        let collection = sample_collection();
        assert_eq!(collection.flatten().len(), 6);
        assert_eq!(collection.len(), 6);
    }

    #[test]
    fn test_buckets_keep_first_insertion_order() {
        let buckets: WarningBuckets = vec![
            ("Z".to_string(), vec![Warning::missing_attribute("Z", "name")]),
            ("A".to_string(), vec![Warning::missing_attribute("A", "name")]),
        ]
        .into_iter()
        .collect();

        let keys: Vec<_> = buckets.iter().map(|(id, _)| id).collect();
        assert_eq!(keys, vec!["Z", "A"]);
        assert_eq!(buckets.get("A").map(<[Warning]>::len), Some(1));
        assert!(buckets.get("B").is_none());
    }

    #[test]
    fn test_empty_collection() {
        let collection = WarningCollection::default();
        assert!(collection.is_empty());
        assert!(collection.flatten().is_empty());
    }

    #[test]
    fn test_identifier_of_each_kind() {
        assert_eq!(
            Warning::invalid_input_constraints("F1", "bad").identifier(),
            "F1"
        );
        assert_eq!(Warning::missing_attribute("R7", "script").identifier(), "R7");
    }
}
