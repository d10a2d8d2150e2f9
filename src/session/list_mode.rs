//! Sample listing for scripts and quick inspection

use super::SessionData;

/// One line per selector option: position, sample id and taxa count.
pub fn sample_lines(session: &SessionData) -> Vec<String> {
    session
        .dataset
        .entries()
        .iter()
        .enumerate()
        .map(|(index, entry)| {
            format!(
                "{}\t{}\t{} taxa",
                index,
                entry.sample.id,
                entry.sample.len()
            )
        })
        .collect()
}

/// Print the samples of the loaded dataset to stdout.
pub fn run_list_mode(session: SessionData) {
    for line in sample_lines(&session) {
        println!("{}", line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::fixtures::{dataset, sample_with_taxa};
    use crate::provider::DataSource;

    #[test]
    fn test_sample_lines_follow_dataset_order() {
        let session = SessionData {
            dataset: dataset(vec![sample_with_taxa("941", 3), sample_with_taxa("940", 12)]),
            source: DataSource::parse("samples.json"),
            loaded_at: String::new(),
        };
        assert_eq!(
            sample_lines(&session),
            vec!["0\t941\t3 taxa", "1\t940\t12 taxa"]
        );
    }
}
