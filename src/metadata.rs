//! Metadata panel content

use crate::dataset::SampleMetadata;
use strum::IntoEnumIterator;

/// Panel fields, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display, strum::EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum MetadataField {
    Id,
    Ethnicity,
    Gender,
    Age,
    Location,
    Bbtype,
    Wfreq,
}

impl SampleMetadata {
    /// Field value as shown in the panel. Missing values print as `null`.
    pub fn display_value(&self, field: MetadataField) -> String {
        fn text(value: &Option<String>) -> String {
            value.clone().unwrap_or_else(|| "null".to_string())
        }
        fn number(value: Option<f64>) -> String {
            value.map_or_else(|| "null".to_string(), |v| v.to_string())
        }

        match field {
            MetadataField::Id => self.id.to_string(),
            MetadataField::Ethnicity => text(&self.ethnicity),
            MetadataField::Gender => text(&self.gender),
            MetadataField::Age => number(self.age),
            MetadataField::Location => text(&self.location),
            MetadataField::Bbtype => text(&self.bbtype),
            MetadataField::Wfreq => number(self.wfreq),
        }
    }
}

/// One `field: value` line per field.
pub fn metadata_lines(metadata: &SampleMetadata) -> Vec<String> {
    MetadataField::iter()
        .map(|field| format!("{}: {}", field, metadata.display_value(field)))
        .collect()
}
