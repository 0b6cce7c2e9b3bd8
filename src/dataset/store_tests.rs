#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use crate::dataset::error::DatasetError;
    use crate::dataset::store::DatasetStore;

    const HEADER: &str = "District,Block,Habitation Name,Facility Name,Address,Facility Category,Facility Subcategory,Lattitude,Longitude\n";

    /// Helper to write a `{state}.csv` file into a temp dataset directory.
    fn write_state(dir: &TempDir, state: &str, rows: &[&str]) {
        let mut content = HEADER.to_string();
        for row in rows {
            content.push_str(row);
            content.push('\n');
        }
        fs::write(dir.path().join(format!("{}.csv", state)), content).unwrap();
    }

    fn sample_store(dir: &TempDir) -> DatasetStore {
        write_state(
            dir,
            "Maharashtra",
            &[
                "Pune,Haveli,Wagholi,Primary School,Main Road,Education ,School,18.5804,73.9800",
                "Pune,Haveli,Wagholi,Health Sub Centre,Ward 2,Health,Sub Centre,18.5810,73.9812",
                " pune ,Haveli,Lohegaon,Anganwadi Centre,Gaothan,Education,Anganwadi,18.6050,73.9270",
                "PUNE,Mulshi,Paud,Gram Panchayat Office,Paud Road,Administration,Panchayat,18.5230,73.6160",
                "Nagpur,Hingna,Wanadongri,Water Tank,Tank Road,Water Supply,Tank,bad-value,79.0030",
            ],
        );
        DatasetStore::new(dir.path())
    }

    #[test]
    fn test_list_states_sorted() {
        let dir = TempDir::new().unwrap();
        write_state(&dir, "Odisha", &[]);
        write_state(&dir, "Bihar", &[]);
        fs::write(dir.path().join("notes.txt"), "ignore me").unwrap();

        let store = DatasetStore::new(dir.path());
        assert_eq!(store.list_states().unwrap(), vec!["Bihar", "Odisha"]);
    }

    #[test]
    fn test_list_states_missing_dir_is_io_error() {
        let dir = TempDir::new().unwrap();
        let store = DatasetStore::new(dir.path().join("nope"));
        assert!(matches!(
            store.list_states(),
            Err(DatasetError::Io { .. })
        ));
    }

    #[test]
    fn test_load_state_missing_file() {
        let dir = TempDir::new().unwrap();
        let store = DatasetStore::new(dir.path());
        let err = store.load_state("Bihar").unwrap_err();
        assert!(matches!(err, DatasetError::StateNotFound(ref s) if s == "Bihar"));
    }

    #[test]
    fn test_districts_deduplicate_case_and_whitespace() {
        let dir = TempDir::new().unwrap();
        let store = sample_store(&dir);

        // "Pune", " pune " and "PUNE" rows collapse to one entry.
        let districts = store.districts("Maharashtra").unwrap();
        assert_eq!(districts, vec!["Pune", "Nagpur"]);
    }

    #[test]
    fn test_blocks_filtered_case_insensitively() {
        let dir = TempDir::new().unwrap();
        let store = sample_store(&dir);

        let blocks = store.blocks("Maharashtra", "  PUNE ").unwrap();
        assert_eq!(blocks, vec!["Haveli", "Mulshi"]);
    }

    #[test]
    fn test_villages_pass_coordinates_through_raw() {
        let dir = TempDir::new().unwrap();
        let store = sample_store(&dir);

        let villages = store.villages("Maharashtra", "Nagpur", "Hingna").unwrap();
        assert_eq!(villages.len(), 1);
        assert_eq!(villages[0].name, "Wanadongri");
        assert_eq!(villages[0].latitude, "bad-value");
        assert_eq!(villages[0].longitude, "79.0030");
    }

    #[test]
    fn test_find_village_matches_trimmed_case_insensitive() {
        let dir = TempDir::new().unwrap();
        let store = sample_store(&dir);

        for district in ["Pune", " pune ", "PUNE"] {
            let rows = store
                .find_village("Maharashtra", district, "haveli", " WAGHOLI ")
                .unwrap();
            assert_eq!(rows.len(), 2, "district query {:?}", district);
        }
    }

    #[test]
    fn test_find_village_no_match_is_empty() {
        let dir = TempDir::new().unwrap();
        let store = sample_store(&dir);

        let rows = store
            .find_village("Maharashtra", "Pune", "Haveli", "Nowhere")
            .unwrap();
        assert!(rows.is_empty());
    }

    #[test]
    fn test_to_record_soft_parses_coordinates() {
        let dir = TempDir::new().unwrap();
        let store = sample_store(&dir);

        let rows = store
            .find_village("Maharashtra", "Nagpur", "Hingna", "Wanadongri")
            .unwrap();
        let record = rows[0].to_record();
        assert_eq!(record.facility_name, "Water Tank");
        assert_eq!(record.latitude, None);
        assert_eq!(record.longitude, Some(79.0030));
    }

    #[test]
    fn test_short_rows_deserialize_with_empty_fields() {
        let dir = TempDir::new().unwrap();
        write_state(&dir, "Bihar", &["Patna,Patna Sadar,Sabalpur"]);

        let store = DatasetStore::new(dir.path());
        let rows = store.load_state("Bihar").unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].habitation_name, "Sabalpur");
        assert_eq!(rows[0].facility_name, "");
    }
}
