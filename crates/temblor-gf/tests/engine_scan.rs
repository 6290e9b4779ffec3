//! Filesystem-level tests for engine store discovery.

use std::fs;
use std::path::{Path, PathBuf};

use temblor_gf::{EngineError, LocalEngine, STORE_CONFIG_FILENAME};

fn make_store(parent: &Path, dirname: &str, id: &str) -> PathBuf {
    let dir = parent.join(dirname);
    fs::create_dir_all(&dir).unwrap();
    fs::write(
        dir.join(STORE_CONFIG_FILENAME),
        format!("id: {id}\nsample_rate: 2.0\n"),
    )
    .unwrap();
    dir
}

#[test]
fn registers_direct_store_dirs_in_order() {
    let tmp = tempfile::tempdir().unwrap();
    let a = make_store(tmp.path(), "store_a", "alpha");
    let b = make_store(tmp.path(), "store_b", "beta");

    let engine = LocalEngine::new(false, &[], &[a.clone(), b.clone()]).unwrap();
    assert_eq!(engine.store_ids(), vec!["alpha", "beta"]);
    assert_eq!(engine.store_path("alpha").unwrap(), a.as_path());
    assert_eq!(engine.store_config("beta").unwrap().sample_rate, 2.0);
    assert!(engine.have_store("alpha"));
    assert!(!engine.have_store("gamma"));
}

#[test]
fn direct_store_dir_without_config_fails() {
    let tmp = tempfile::tempdir().unwrap();
    let empty = tmp.path().join("not_a_store");
    fs::create_dir_all(&empty).unwrap();

    let err = LocalEngine::new(false, &[], &[empty.clone()]).unwrap_err();
    match err {
        EngineError::NotAStore { path } => assert_eq!(path, empty),
        other => panic!("expected NotAStore, got {other:?}"),
    }
}

#[test]
fn superdir_scan_skips_non_store_entries() {
    let tmp = tempfile::tempdir().unwrap();
    make_store(tmp.path(), "crust", "crust_2hz");
    make_store(tmp.path(), "mantle", "mantle_1hz");
    fs::create_dir_all(tmp.path().join("scratch")).unwrap();
    fs::write(tmp.path().join("README"), "not a store").unwrap();

    let engine = LocalEngine::new(false, &[tmp.path().to_path_buf()], &[]).unwrap();
    assert_eq!(engine.nstores(), 2);
    assert!(engine.have_store("crust_2hz"));
    assert!(engine.have_store("mantle_1hz"));
}

#[test]
fn superdir_entries_are_visited_in_name_order() {
    let tmp = tempfile::tempdir().unwrap();
    make_store(tmp.path(), "zz", "last");
    make_store(tmp.path(), "aa", "first");

    let engine = LocalEngine::new(false, &[tmp.path().to_path_buf()], &[]).unwrap();
    assert_eq!(engine.store_ids(), vec!["first", "last"]);
}

#[test]
fn missing_superdir_fails() {
    let tmp = tempfile::tempdir().unwrap();
    let gone = tmp.path().join("missing");

    let err = LocalEngine::new(false, &[gone.clone()], &[]).unwrap_err();
    match err {
        EngineError::Io { path, .. } => assert_eq!(path, gone),
        other => panic!("expected Io, got {other:?}"),
    }
}

#[test]
fn duplicate_store_id_fails_with_both_locations() {
    let tmp = tempfile::tempdir().unwrap();
    let a = make_store(tmp.path(), "one", "same_id");
    let b = make_store(tmp.path(), "two", "same_id");

    let err = LocalEngine::new(false, &[], &[a.clone(), b.clone()]).unwrap_err();
    match err {
        EngineError::DuplicateStore { id, first, second } => {
            assert_eq!(id, "same_id");
            assert_eq!(first, a);
            assert_eq!(second, b);
        }
        other => panic!("expected DuplicateStore, got {other:?}"),
    }
}

#[test]
fn malformed_store_config_fails() {
    let tmp = tempfile::tempdir().unwrap();
    let dir = tmp.path().join("broken");
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join(STORE_CONFIG_FILENAME), "id: [oops\n").unwrap();

    let err = LocalEngine::new(false, &[], &[dir]).unwrap_err();
    assert!(matches!(err, EngineError::StoreConfig { .. }));
}

#[test]
fn invalid_store_id_fails() {
    let tmp = tempfile::tempdir().unwrap();
    let dir = tmp.path().join("badid");
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join(STORE_CONFIG_FILENAME), "id: 'a b'\n").unwrap();

    let err = LocalEngine::new(false, &[], &[dir]).unwrap_err();
    assert!(matches!(err, EngineError::InvalidStoreConfig { .. }));
}

#[test]
fn stores_iterator_pairs_ids_with_configs() {
    let tmp = tempfile::tempdir().unwrap();
    make_store(tmp.path(), "crust", "crust_2hz");

    let engine = LocalEngine::new(false, &[tmp.path().to_path_buf()], &[]).unwrap();
    let pairs: Vec<_> = engine.stores().collect();
    assert_eq!(pairs.len(), 1);
    assert_eq!(pairs[0].0, "crust_2hz");
    assert_eq!(pairs[0].1.id, "crust_2hz");
}
