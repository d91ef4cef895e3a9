mod common;

use common::{at, create_test_vouch};

use vb_db::FileStore;

use googletest::prelude::*;
use tempfile::TempDir;

fn store_with_contents(temp: &TempDir, contents: &str) -> FileStore {
    let path = temp.path().join("vouches.txt");
    std::fs::write(&path, contents).unwrap();
    FileStore::new(path)
}

#[test]
fn given_missing_file_when_read_all_then_empty_dataset() {
    let temp = TempDir::new().unwrap();
    let store = FileStore::new(temp.path().join("missing.txt"));

    let vouches = store.read_all().unwrap();

    assert_that!(vouches, is_empty());
}

#[test]
fn given_valid_lines_when_read_all_then_parsed_in_file_order() {
    let temp = TempDir::new().unwrap();
    let store = store_with_contents(
        &temp,
        "UserID:42 | 2024-01-01 10:00:00 | Stars:5 | Message:\"great\"\n\
         UserID:99 | 2024-01-02 11:30:00 | Stars:3 | Message:\"fine\"\n",
    );

    let vouches = store.read_all().unwrap();

    assert_that!(vouches.len(), eq(2));
    assert_that!(vouches[0].user_id, eq("42"));
    assert_that!(vouches[0].stars, eq(5));
    assert_that!(vouches[0].message, eq("great"));
    assert_that!(vouches[0].created_at.timestamp(), eq(1_704_103_200));
    assert_that!(vouches[1].user_id, eq("99"));
}

#[test]
fn given_three_segment_line_when_read_all_then_skipped_and_rest_parsed() {
    let temp = TempDir::new().unwrap();
    let store = store_with_contents(
        &temp,
        "UserID:1 | 2024-01-01 10:00:00 | Stars:5 | Message:\"ok\"\n\
         UserID:2 | 2024-01-01 11:00:00 | Stars:4\n\
         UserID:3 | 2024-01-01 12:00:00 | Stars:3 | Message:\"also ok\"\n",
    );

    let vouches = store.read_all().unwrap();

    assert_that!(vouches.len(), eq(2));
    assert_that!(vouches[0].user_id, eq("1"));
    assert_that!(vouches[1].user_id, eq("3"));
}

#[test]
fn given_unparseable_timestamp_or_stars_when_read_all_then_line_skipped() {
    let temp = TempDir::new().unwrap();
    let store = store_with_contents(
        &temp,
        "UserID:1 | not-a-date | Stars:5 | Message:\"x\"\n\
         UserID:2 | 2024-01-01 10:00:00 | Stars:five | Message:\"y\"\n\
         UserID:3 | 2024-01-01 10:00:00 | Stars:2 | Message:\"z\"\n",
    );

    let vouches = store.read_all().unwrap();

    assert_that!(vouches.len(), eq(1));
    assert_that!(vouches[0].user_id, eq("3"));
}

#[test]
fn given_blank_lines_when_read_all_then_ignored() {
    let temp = TempDir::new().unwrap();
    let store = store_with_contents(
        &temp,
        "\n\nUserID:1 | 2024-01-01 10:00:00 | Stars:5 | Message:\"x\"\n\n",
    );

    let vouches = store.read_all().unwrap();

    assert_that!(vouches.len(), eq(1));
}

#[test]
fn given_appended_vouch_when_read_all_then_round_trips() {
    let temp = TempDir::new().unwrap();
    let store = FileStore::new(temp.path().join("vouches.txt"));

    let vouch = create_test_vouch("42", 5, at(1_704_103_200));
    store.append(&vouch).unwrap();

    let vouches = store.read_all().unwrap();

    assert_that!(vouches.len(), eq(1));
    assert_that!(vouches[0].user_id, eq("42"));
    assert_that!(vouches[0].stars, eq(5));
    assert_that!(vouches[0].message, eq(&vouch.message));
    assert_that!(vouches[0].created_at, eq(vouch.created_at));
}
