//! Loading data directories, build failures and snapshot publication.

use gazetteer_core::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tempfile::TempDir;

fn bundled_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data")
}

fn write_dataset(dir: &Path, provinces: &str, cities: &str, districts: &str) {
    fs::write(dir.join("provinces.data"), provinces).unwrap();
    fs::write(dir.join("cities.data"), cities).unwrap();
    fs::write(dir.join("districts.data"), districts).unwrap();
}

fn small_dataset() -> TempDir {
    let dir = TempDir::new().unwrap();
    write_dataset(
        dir.path(),
        "CN033000000\t浙江省\n",
        "CN033000000\tCN033001000\t杭州市\n",
        "CN033001000\tCN033001012\t西湖区\n",
    );
    dir
}

#[test]
fn loads_a_data_directory() {
    let dir = small_dataset();
    let gz = Gazetteer::load_from_dir(dir.path()).unwrap();
    assert_eq!(gz.resolve_code("", "杭州", "西湖"), Some("CN033001012"));
    assert_eq!(gz.stats().index_keys, 3);
}

#[test]
fn missing_file_fails_before_reading() {
    let dir = small_dataset();
    fs::remove_file(dir.path().join("cities.data")).unwrap();
    match Gazetteer::load_from_dir(dir.path()) {
        Err(GazetteerError::MissingData(path)) => assert!(path.ends_with("cities.data")),
        other => panic!("unexpected result: {other:?}"),
    }
}

#[test]
fn malformed_row_aborts_the_build() {
    let dir = TempDir::new().unwrap();
    write_dataset(
        dir.path(),
        "CN033000000\t浙江省\n",
        "CN033000000\tCN033001000\tHangzhou\n",
        "",
    );
    match Gazetteer::load_from_dir(dir.path()) {
        Err(GazetteerError::DataFormat { level, row }) => {
            assert_eq!(level, Level::City);
            assert!(row.contains("Hangzhou"));
        }
        other => panic!("unexpected result: {other:?}"),
    }
}

#[test]
fn duplicate_city_names_abort_the_build() {
    let dir = TempDir::new().unwrap();
    write_dataset(
        dir.path(),
        "CN033000000\t浙江省\nCN016000000\t江苏省\n",
        "CN033000000\tCN033001000\t杭州市\nCN016000000\tCN016009000\t杭州市\n",
        "",
    );
    assert!(matches!(
        Gazetteer::load_from_dir(dir.path()),
        Err(GazetteerError::DuplicateName { .. })
    ));
}

#[test]
fn sub_name_in_same_scope_aborts_the_build() {
    let dir = TempDir::new().unwrap();
    write_dataset(
        dir.path(),
        "CN022000000\t吉林省\n",
        "CN022000000\tCN022001000\t吉林\nCN022000000\tCN022002000\t吉林市\n",
        "",
    );
    assert!(matches!(
        Gazetteer::load_from_dir(dir.path()),
        Err(GazetteerError::SubNamePrefixConflict { .. })
    ));
}

#[test]
fn district_filed_under_a_province_aborts_the_build() {
    let dir = TempDir::new().unwrap();
    write_dataset(
        dir.path(),
        "CN033000000\t浙江省\n",
        "CN033000000\tCN033001000\t杭州市\n",
        "CN033000000\tCN033001012\t西湖区\n",
    );
    match Gazetteer::load_from_dir(dir.path()) {
        Err(GazetteerError::DataFormat { level, row }) => {
            assert_eq!(level, Level::District);
            assert!(row.contains("CN033001012"));
        }
        other => panic!("unexpected result: {other:?}"),
    }
}

#[cfg(feature = "compact")]
#[test]
fn reads_gzipped_data_files() {
    use flate2::write::GzEncoder;
    use flate2::Compression;
    use std::io::Write;

    let dir = small_dataset();
    let plain = dir.path().join("districts.data");
    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(&fs::read(&plain).unwrap()).unwrap();
    fs::write(dir.path().join("districts.data.gz"), encoder.finish().unwrap()).unwrap();
    fs::remove_file(plain).unwrap();

    let gz = Gazetteer::load_from_dir(dir.path()).unwrap();
    assert_eq!(gz.code_of_district_name("杭州", "西湖"), Some("CN033001012"));
}

#[test]
fn rows_are_read_lazily_and_restartably() {
    let path = bundled_dir().join("provinces.data");
    let first: Vec<Row> = Gazetteer::read_rows(&path, Level::Province)
        .unwrap()
        .take(2)
        .collect::<Result<_>>()
        .unwrap();
    let again: Vec<Row> = Gazetteer::read_rows(&path, Level::Province)
        .unwrap()
        .take(2)
        .collect::<Result<_>>()
        .unwrap();
    assert_eq!(first, again);
    assert_eq!(first[0], Row::province("CN001000000", "安徽省"));
}

#[test]
fn default_load_is_cached_per_process() {
    let a = Gazetteer::load().unwrap();
    let b = Gazetteer::load().unwrap();
    assert!(Arc::ptr_eq(&a, &b));
}

#[test]
fn failed_rebuild_keeps_serving_the_old_snapshot() {
    let shared = SharedGazetteer::new(Gazetteer::load_from_dir(bundled_dir()).unwrap());
    let broken = small_dataset();
    fs::write(broken.path().join("districts.data"), "not\ta\tvalid\trow\n").unwrap();

    assert!(shared.rebuild_from_dir(broken.path()).is_err());
    assert_eq!(shared.current().stats().provinces, 34);

    shared.rebuild_from_dir(small_dataset().path()).unwrap();
    assert_eq!(shared.current().stats().provinces, 1);
}

#[test]
fn readers_keep_their_snapshot_across_publication() {
    let shared = Arc::new(SharedGazetteer::new(
        Gazetteer::load_from_dir(bundled_dir()).unwrap(),
    ));
    let small = small_dataset();

    std::thread::scope(|s| {
        for _ in 0..8 {
            let shared = Arc::clone(&shared);
            s.spawn(move || {
                for _ in 0..200 {
                    let gz = shared.current();
                    // whichever snapshot we got, it is internally consistent
                    let code = gz.resolve_code("", "杭州", "西湖").unwrap();
                    assert_eq!(code, "CN033001012");
                    let provinces = gz.province_codes(false).len();
                    assert!(provinces == 34 || provinces == 1);
                    assert_eq!(gz.stats().provinces, provinces);
                }
            });
        }
        s.spawn(|| {
            for _ in 0..20 {
                shared.rebuild_from_dir(small.path()).unwrap();
                shared.rebuild_from_dir(bundled_dir()).unwrap();
            }
        });
    });
}
