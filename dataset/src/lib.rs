use std::{fs::File, io::BufReader, path::Path};

use ahash::{HashMap, HashMapExt};
use mb_error::Error;
use serde_json::{Map, Value};

pub use record::Record;

mod record;

/// Immutable name to marks mapping, built once at startup.
pub struct Dataset {
    entries: HashMap<String, Value>,
}

impl Dataset {
    pub fn empty() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Later records win over earlier ones with the same name.
    pub fn from_records<I: IntoIterator<Item = Record>>(records: I) -> Self {
        let records = records.into_iter();
        let mut entries = HashMap::with_capacity(records.size_hint().0);
        let mut overridden = 0usize;

        for record in records {
            let (name, marks) = record.into_parts();
            if entries.insert(name, marks).is_some() {
                overridden += 1;
            }
        }

        if overridden > 0 {
            mb_log::warn(
                None,
                format!("[Dataset] {overridden} duplicate record(s) overridden by later entries"),
            );
        }

        Self { entries }
    }

    pub fn load(path: &Path) -> Result<Self, Error> {
        mb_log::info(
            Some("📂"),
            format!("[Dataset] Loading records from {}", path.display()),
        );

        let file = File::open(path).map_err(|source| Error::SourceMissing {
            path: path.to_owned(),
            source,
        })?;

        let rows: Vec<Map<String, Value>> = serde_json::from_reader(BufReader::new(file))
            .map_err(|err| Self::parse_error(path, err))?;

        let records = rows
            .into_iter()
            .enumerate()
            .map(|(index, row)| {
                serde_json::from_value::<Record>(Value::Object(row)).map_err(|err| {
                    Error::SourceMalformed {
                        path: path.to_owned(),
                        reason: format!("record {index}: {err}"),
                    }
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        mb_log::trace(None, format!("[Dataset] Parsed {} record(s)", records.len()));

        let dataset = Self::from_records(records);

        mb_log::info(
            Some("✅"),
            format!("[Dataset] Loaded {} entries", dataset.len()),
        );

        Ok(dataset)
    }

    /// Read failures after a successful open (e.g. the path is a directory)
    /// still mean the source cannot be read.
    fn parse_error(path: &Path, err: serde_json::Error) -> Error {
        match err.is_io() {
            true => Error::SourceMissing {
                path: path.to_owned(),
                source: err.into(),
            },
            false => Error::SourceMalformed {
                path: path.to_owned(),
                reason: err.to_string(),
            },
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.entries.get(name)
    }

    /// Returns the marks of every requested name found in the dataset, in
    /// request order. Unknown names are skipped and repeated names are looked
    /// up once per occurrence.
    pub fn lookup<I, S>(&self, names: I) -> Vec<&Value>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        names
            .into_iter()
            .filter_map(|name| self.entries.get(name.as_ref()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use std::{env::temp_dir, fs, path::PathBuf};

    use serde_json::json;

    use super::*;

    fn alice_and_bob() -> Dataset {
        Dataset::from_records([
            Record::new("Alice", json!(10)),
            Record::new("Bob", json!(20)),
        ])
    }

    fn fixture(name: &str, content: &str) -> PathBuf {
        let path = temp_dir().join(format!("mb_dataset_{name}.json"));
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn lookup_preserves_request_order() {
        let dataset = alice_and_bob();

        assert_eq!(dataset.lookup(["Alice", "Bob"]), [&json!(10), &json!(20)]);
        assert_eq!(dataset.lookup(["Bob", "Alice"]), [&json!(20), &json!(10)]);
    }

    #[test]
    fn lookup_skips_unknown_names() {
        let dataset = alice_and_bob();

        assert_eq!(
            dataset.lookup(["Carol", "Bob", "Dave"]),
            [&json!(20)]
        );
        assert!(dataset.lookup(["Carol"]).is_empty());
    }

    #[test]
    fn lookup_of_nothing_is_empty() {
        assert!(alice_and_bob().lookup(Vec::<String>::new()).is_empty());
        assert!(Dataset::empty().lookup(["Alice"]).is_empty());
    }

    #[test]
    fn lookup_repeats_duplicated_names() {
        let dataset = alice_and_bob();
        let requested = vec![
            "Alice".to_owned(),
            "Carol".to_owned(),
            "Alice".to_owned(),
            "Bob".to_owned(),
        ];

        let marks = dataset.lookup(&requested);

        assert_eq!(marks.len(), 3);
        assert_eq!(marks, [&json!(10), &json!(10), &json!(20)]);
    }

    #[test]
    fn duplicate_records_keep_the_last() {
        let dataset = Dataset::from_records([
            Record::new("Alice", json!(10)),
            Record::new("Alice", json!(99)),
        ]);

        assert_eq!(dataset.len(), 1);
        assert_eq!(dataset.get("Alice"), Some(&json!(99)));
    }

    #[test]
    fn load_well_formed_file() {
        let path = fixture(
            "load_well_formed_file",
            r#"[
                {"name": "Alice", "marks": 10},
                {"name": "Bob", "marks": {"math": 80, "art": [1, 2]}},
                {"name": "Carol", "marks": null, "class": "7B"}
            ]"#,
        );

        let dataset = Dataset::load(&path).unwrap();

        assert_eq!(dataset.len(), 3);
        assert_eq!(dataset.get("Alice"), Some(&json!(10)));
        assert_eq!(
            dataset.get("Bob"),
            Some(&json!({"math": 80, "art": [1, 2]}))
        );
        assert_eq!(dataset.get("Carol"), Some(&Value::Null));

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn load_empty_array() {
        let path = fixture("load_empty_array", "[]");

        let dataset = Dataset::load(&path).unwrap();
        assert!(dataset.is_empty());

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn load_missing_file() {
        let path = temp_dir().join("mb_dataset_load_missing_file.json");
        let _ = fs::remove_file(&path);

        let err = Dataset::load(&path).err().unwrap();
        assert!(err.is_source_missing());
    }

    #[test]
    fn load_directory_is_missing_source() {
        let path = temp_dir().join("mb_dataset_load_directory_is_missing_source");
        fs::create_dir_all(&path).unwrap();

        let err = Dataset::load(&path).err().unwrap();
        assert!(err.is_source_missing(), "{err}");

        let _ = fs::remove_dir(&path);
    }

    #[test]
    fn load_malformed_files() {
        let cases = [
            ("not_json", "this is not json"),
            ("truncated", r#"[{"name": "Alice", "marks": 10}"#),
            ("object_root", r#"{"Alice": 10}"#),
            ("missing_marks", r#"[{"name": "Alice"}]"#),
            ("missing_name", r#"[{"marks": 10}]"#),
            ("numeric_name", r#"[{"name": 7, "marks": 10}]"#),
            ("array_record", r#"[["Alice", 10]]"#),
            ("array_records", r#"[["Alice", 10], ["Bob", {"x": 1}]]"#),
            ("string_record", r#"["Alice"]"#),
            (
                "one_bad_record",
                r#"[{"name": "Alice", "marks": 10}, {"name": "Bob"}]"#,
            ),
        ];

        for (name, content) in cases {
            let path = fixture(&format!("load_malformed_{name}"), content);

            let err = Dataset::load(&path).err().unwrap();
            assert!(err.is_source_malformed(), "{name}: {err}");

            let _ = fs::remove_file(&path);
        }
    }
}
