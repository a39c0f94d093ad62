use std::collections::{BTreeSet, HashMap};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::Context;
use serde::Deserialize;

use crate::models::{parse_list_field, CategoryField, MovieRecord};

/// One entry of the title mapping artifact; extra fields are ignored
#[derive(Debug, Deserialize)]
struct TitleEntry {
    title: String,
}

/// Raw metadata row as stored in the delimited artifact
///
/// List-valued columns are still bracket-and-quote encoded strings at this
/// stage; missing cells deserialize to `None` and parse to empty sets.
#[derive(Debug, Deserialize)]
struct RawMetadataRow {
    title: String,
    #[serde(default)]
    cast: Option<String>,
    #[serde(default)]
    crew: Option<String>,
    #[serde(default)]
    genres: Option<String>,
    #[serde(default)]
    keywords: Option<String>,
}

/// In-memory metadata store, loaded once at startup and read-only afterwards
#[derive(Debug)]
pub struct MovieCatalog {
    records: Vec<MovieRecord>,
    /// Title -> lowest id carrying it; duplicates resolve to first occurrence
    title_index: HashMap<String, usize>,
}

impl MovieCatalog {
    /// Builds a catalog from already-parsed records
    ///
    /// Ids are restamped to match catalog position so the positional
    /// invariant holds regardless of what the caller filled in.
    pub fn from_records(mut records: Vec<MovieRecord>) -> Self {
        for (id, record) in records.iter_mut().enumerate() {
            record.id = id;
        }

        let mut title_index = HashMap::new();
        for record in &records {
            title_index.entry(record.title.clone()).or_insert(record.id);
        }

        Self {
            records,
            title_index,
        }
    }

    /// Loads the catalog from the title mapping and metadata artifacts
    ///
    /// The title artifact's array order defines record ids. The metadata
    /// rows must line up with it title-by-title; any drift between the two
    /// artifacts aborts startup rather than serving misaligned results.
    pub fn load<P: AsRef<Path>>(titles_path: P, metadata_path: P) -> anyhow::Result<Self> {
        let titles_file = File::open(titles_path.as_ref()).with_context(|| {
            format!("failed to open title artifact {:?}", titles_path.as_ref())
        })?;
        let titles: Vec<TitleEntry> = serde_json::from_reader(BufReader::new(titles_file))
            .context("failed to parse title artifact")?;

        let mut reader = csv::Reader::from_path(metadata_path.as_ref()).with_context(|| {
            format!("failed to open metadata artifact {:?}", metadata_path.as_ref())
        })?;

        let mut records = Vec::with_capacity(titles.len());
        for (row, result) in reader.deserialize().enumerate() {
            let raw: RawMetadataRow =
                result.with_context(|| format!("failed to parse metadata row {}", row))?;

            let expected = titles.get(row).ok_or_else(|| {
                anyhow::anyhow!(
                    "metadata artifact has more rows than the title artifact ({} titles)",
                    titles.len()
                )
            })?;
            anyhow::ensure!(
                raw.title == expected.title,
                "artifact mismatch at row {}: metadata title {:?} != mapped title {:?}",
                row,
                raw.title,
                expected.title
            );

            records.push(MovieRecord {
                id: row,
                title: raw.title,
                cast: parse_list_field(raw.cast.as_deref()),
                crew: parse_list_field(raw.crew.as_deref()),
                genres: parse_list_field(raw.genres.as_deref()),
                keywords: parse_list_field(raw.keywords.as_deref()),
            });
        }

        anyhow::ensure!(
            records.len() == titles.len(),
            "metadata artifact has {} rows but the title artifact maps {} titles",
            records.len(),
            titles.len()
        );

        tracing::info!(movie_count = records.len(), "loaded movie catalog");
        Ok(Self::from_records(records))
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, id: usize) -> Option<&MovieRecord> {
        self.records.get(id)
    }

    /// All titles in store order
    pub fn titles(&self) -> Vec<String> {
        self.records.iter().map(|r| r.title.clone()).collect()
    }

    /// Exact title lookup; duplicate titles resolve to the lowest id
    pub fn find_title(&self, title: &str) -> Option<usize> {
        self.title_index.get(title).copied()
    }

    /// Records whose `field` set contains `value`, in store order
    pub fn matching_records(&self, field: CategoryField, value: &str) -> Vec<&MovieRecord> {
        self.records
            .iter()
            .filter(|record| record.contains(field, value))
            .collect()
    }

    /// Sorted set of distinct values across all records for one field
    pub fn distinct_values(&self, field: CategoryField) -> Vec<String> {
        let values: BTreeSet<&String> = self
            .records
            .iter()
            .flat_map(|record| record.field_values(field).iter())
            .collect();

        values.into_iter().cloned().collect()
    }
}
