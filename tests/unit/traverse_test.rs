//! Unit tests for dataset traversal across layouts

use chrono::NaiveDate;
use tempfile::TempDir;
use tueg::{CorpusError, Dataset, Layout, SessionLocator, TraversalMode};

use crate::helpers::*;

fn sessions_of(dataset: &Dataset) -> Vec<SessionLocator> {
    dataset
        .sessions()
        .unwrap()
        .collect::<Result<Vec<_>, _>>()
        .unwrap()
}

#[test]
fn exports_are_classified_and_noise_ignored() {
    let temp = mixed_dataset();
    let dataset = Dataset::new(temp.path());

    let mut layouts: Vec<_> = dataset
        .exports()
        .unwrap()
        .map(|e| {
            let e = e.unwrap();
            (e.path.file_name().unwrap().to_str().unwrap().to_string(), e.layout)
        })
        .collect();
    layouts.sort_by(|a, b| a.0.cmp(&b.0));

    assert_eq!(
        layouts,
        vec![
            ("abnormal".to_string(), Layout::ClassRooted),
            ("v1.1.0".to_string(), Layout::Full),
            ("v2.0.0".to_string(), Layout::SplitByClass),
        ]
    );
}

#[test]
fn full_layout_yields_every_session() {
    let temp = TempDir::new().unwrap();
    full_session(temp.path(), "v1.1.0", "00000001", "s001_2015_09_28");
    full_session(temp.path(), "v1.1.0", "00000001", "s002_2016_01_02");
    full_session(temp.path(), "v1.1.0", "00000258", "s001_2003_07_21");

    let sessions = sessions_of(&Dataset::new(temp.path()));

    assert_eq!(
        session_keys(&sessions),
        vec![
            key("00000001", "s001"),
            key("00000001", "s002"),
            key("00000258", "s001"),
        ]
    );
    let first = sessions
        .iter()
        .find(|s| s.subject_id == "00000258")
        .unwrap();
    assert_eq!(first.date, NaiveDate::from_ymd_opt(2003, 7, 21).unwrap());
}

#[test]
fn split_by_class_layout_descends_every_split_and_class() {
    let temp = TempDir::new().unwrap();
    let root = temp.path();
    split_session(root, "v2.0.0", "eval", "normal", "00000768", "s001_2003_05_09");
    split_session(root, "v2.0.0", "train", "abnormal", "00000016", "s004_2012_02_08");
    split_session(root, "v2.0.0", "eval", "unknown", "00000100", "s001_2010_01_01");
    split_session(root, "v2.0.0", "dev", "normal", "00000200", "s001_2010_01_01");

    let sessions = sessions_of(&Dataset::new(root));

    assert_eq!(
        session_keys(&sessions),
        vec![
            key("00000016", "s004"),
            key("00000100", "s001"),
            key("00000200", "s001"),
            key("00000768", "s001"),
        ]
    );
}

#[test]
fn class_rooted_layout_skips_unknown_splits() {
    let temp = TempDir::new().unwrap();
    let root = temp.path();
    class_rooted_session(root, "normal", "train", "00000003", "s002_2012_12_12");
    class_rooted_session(root, "normal", "dev", "00000004", "s001_2013_01_01");

    let sessions = sessions_of(&Dataset::new(root));

    assert_eq!(session_keys(&sessions), vec![key("00000003", "s002")]);
}

#[test]
fn class_rooted_layout_yields_sessions_from_both_splits() {
    let temp = TempDir::new().unwrap();
    let root = temp.path();
    class_rooted_session(root, "normal", "eval", "00000002", "s001_2011_11_11");
    class_rooted_session(root, "normal", "train", "00000003", "s002_2012_12_12");

    let sessions = sessions_of(&Dataset::new(root));

    assert_eq!(
        session_keys(&sessions),
        vec![key("00000002", "s001"), key("00000003", "s002")]
    );
}

#[test]
fn mixed_root_yields_union_of_exports() {
    let temp = mixed_dataset();

    let sessions = sessions_of(&Dataset::new(temp.path()));

    assert_eq!(
        session_keys(&sessions),
        vec![
            key("00000001", "s001"),
            key("00000002", "s003"),
            key("00000016", "s004"),
            key("00000768", "s001"),
            key("00008184", "s001"),
        ]
    );
}

#[test]
fn sessions_are_only_found_at_full_depth() {
    let temp = TempDir::new().unwrap();
    let root = temp.path();
    full_session(root, "v1.1.0", "00000001", "s001_2015_09_28");
    // Session-shaped names one and two levels too shallow
    mkdir(root.join("v1.1.0/edf/01_tcp_ar/001/s009_2015_09_28"));
    mkdir(root.join("v1.1.0/edf/01_tcp_ar/s009_2015_09_28"));

    let sessions = sessions_of(&Dataset::new(root));

    assert_eq!(session_keys(&sessions), vec![key("00000001", "s001")]);
}

#[test]
fn files_inside_the_tree_are_ignored() {
    let temp = TempDir::new().unwrap();
    let root = temp.path();
    let session = full_session(root, "v1.1.0", "00000001", "s001_2015_09_28");
    touch(&root.join("v1.1.0/edf/01_tcp_ar/001/00000001/notes_a_b_c"));
    touch(&root.join("v1.1.0/edf/index.html"));
    add_record(&session, "t000");

    let sessions = sessions_of(&Dataset::new(root));

    assert_eq!(sessions.len(), 1);
}

#[test]
fn malformed_session_aborts_enumeration() {
    let temp = TempDir::new().unwrap();
    let root = temp.path();
    full_session(root, "v1.1.0", "00000001", "s001_2015_09_28");
    full_session(root, "v1.1.0", "00000001", "s001_extra");

    let mut sessions = Dataset::new(root).sessions().unwrap();
    let err = sessions
        .by_ref()
        .find_map(|s| s.err())
        .expect("malformed session must surface an error");

    assert!(matches!(err, CorpusError::BadSessionId { ref path } if path.ends_with("s001_extra")));
    assert!(sessions.next().is_none());
}

#[test]
fn invalid_session_date_aborts_enumeration() {
    let temp = TempDir::new().unwrap();
    full_session(temp.path(), "v1.1.0", "00000001", "s001_2015_13_40");

    let err = Dataset::new(temp.path())
        .sessions()
        .unwrap()
        .next()
        .unwrap()
        .unwrap_err();

    assert!(matches!(err, CorpusError::InvalidDate { .. }));
}

#[test]
fn export_without_edf_directory_is_an_io_error() {
    let temp = TempDir::new().unwrap();
    mkdir(temp.path().join("v1.1.0"));

    let err = Dataset::new(temp.path())
        .sessions()
        .unwrap()
        .next()
        .unwrap()
        .unwrap_err();

    assert!(matches!(err, CorpusError::Io { ref path, .. } if path.ends_with("edf")));
}

#[test]
fn missing_root_is_an_io_error() {
    let temp = TempDir::new().unwrap();
    let dataset = Dataset::new(temp.path().join("absent"));

    assert!(matches!(dataset.sessions(), Err(CorpusError::Io { .. })));
}

#[test]
fn empty_root_yields_nothing() {
    let temp = TempDir::new().unwrap();
    let dataset = Dataset::new(temp.path());

    assert_eq!(dataset.sessions().unwrap().count(), 0);
    assert_eq!(dataset.records().unwrap().count(), 0);
}

#[test]
fn records_flatten_sessions_and_keep_only_edf_files() {
    let temp = mixed_dataset();
    let root = temp.path();
    let a = root.join("v1.1.0/edf/01_tcp_ar/001/00000001/s001_2015_09_28");
    let b = root.join("abnormal/edf/train/01_tcp_ar/184/00008184/s001_2011_09_21");
    add_record(&a, "t000");
    add_record(&a, "t001");
    add_record(&b, "t000");
    touch(&a.join("00000001_s001.txt"));
    touch(&b.join("00008184_s001_t000.edf.bak"));

    let mut records: Vec<_> = Dataset::new(root)
        .records()
        .unwrap()
        .map(|r| r.unwrap())
        .collect();
    records.sort_by(|x, y| x.path.cmp(&y.path));

    assert_eq!(records.len(), 3);
    let tokens: Vec<_> = records.iter().map(|r| r.token().unwrap()).collect();
    assert_eq!(tokens, vec!["t000", "t000", "t001"]);
    assert_eq!(records[0].subject_id(), Some("00008184"));
    assert_eq!(
        records[0].date,
        Some(NaiveDate::from_ymd_opt(2011, 9, 21).unwrap())
    );
}

#[test]
fn session_reports_list_text_files() {
    let temp = TempDir::new().unwrap();
    let session = full_session(temp.path(), "v1.1.0", "00000001", "s001_2015_09_28");
    touch(&session.join("00000001_s001.txt"));
    add_record(&session, "t000");

    let locator = SessionLocator::new(&session).unwrap();
    let reports: Vec<_> = locator.reports().unwrap().map(|r| r.unwrap()).collect();

    assert_eq!(reports.len(), 1);
    assert!(reports[0].path.ends_with("00000001_s001.txt"));
}

#[test]
fn unimplemented_traversals_are_unsupported() {
    let temp = mixed_dataset();
    let dataset = Dataset::new(temp.path());

    assert!(matches!(dataset.reports(), Err(CorpusError::Unsupported { .. })));
    assert!(matches!(dataset.subjects(), Err(CorpusError::Unsupported { .. })));
    assert!(matches!(
        dataset.sessions_with_mode(TraversalMode::Shuffled),
        Err(CorpusError::Unsupported { .. })
    ));
    assert!(matches!(
        dataset.records_with_mode(TraversalMode::Shuffled),
        Err(CorpusError::Unsupported { .. })
    ));

    let session = sessions_of(&dataset).remove(0);
    assert!(matches!(
        session.records_with_mode(TraversalMode::Shuffled),
        Err(CorpusError::Unsupported { .. })
    ));
}

#[test]
fn unsupported_errors_name_the_operation() {
    let temp = TempDir::new().unwrap();
    let err = Dataset::new(temp.path()).subjects().err().unwrap();

    assert!(err.is_unsupported());
    assert_eq!(err.to_string(), "subject iteration is not supported");
}

#[test]
fn sequential_mode_matches_default_iteration() {
    let temp = mixed_dataset();
    let dataset = Dataset::new(temp.path());

    let default: Vec<_> = sessions_of(&dataset);
    let sequential: Vec<_> = dataset
        .sessions_with_mode(TraversalMode::Sequential)
        .unwrap()
        .map(|s| s.unwrap())
        .collect();

    assert_eq!(session_keys(&default), session_keys(&sequential));
}
