// ABOUTME: File-backed storage integration tests over a temporary directory
// ABOUTME: Covers round-trip, key layout on disk, and session persistence
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 WellnessGenie

//! File storage integration tests

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use wellness_genie::constants::storage_keys;
use wellness_genie::session::SessionStore;
use wellness_genie::storage::{FileStorage, StorageBackend};

mod common;

#[test]
fn round_trips_values_through_the_filesystem() {
    let dir = tempfile::tempdir().unwrap();
    let mut storage = FileStorage::open(dir.path()).unwrap();

    assert!(storage.get(storage_keys::WELLNESS_STATE).unwrap().is_none());

    storage
        .set(storage_keys::WELLNESS_STATE, "{\"profile\":null}")
        .unwrap();
    assert_eq!(
        storage.get(storage_keys::WELLNESS_STATE).unwrap().as_deref(),
        Some("{\"profile\":null}")
    );

    storage.remove(storage_keys::WELLNESS_STATE).unwrap();
    assert!(storage.get(storage_keys::WELLNESS_STATE).unwrap().is_none());
    // Removing a missing key is a no-op
    storage.remove(storage_keys::WELLNESS_STATE).unwrap();
}

#[test]
fn each_key_becomes_its_own_json_file() {
    let dir = tempfile::tempdir().unwrap();
    let mut storage = FileStorage::open(dir.path()).unwrap();

    storage.set(storage_keys::WELLNESS_STATE, "{}").unwrap();
    storage.set(storage_keys::WELLNESS_USER, "{}").unwrap();

    assert!(dir.path().join("wellnessState.json").is_file());
    assert!(dir.path().join("wellnessUser.json").is_file());
}

#[test]
fn open_creates_nested_directories() {
    let dir = tempfile::tempdir().unwrap();
    let nested = dir.path().join("data").join("wellness-genie");
    let storage = FileStorage::open(&nested).unwrap();
    assert_eq!(storage.dir(), nested.as_path());
    assert!(nested.is_dir());
}

#[test]
fn committed_session_survives_a_real_restart_on_disk() {
    let dir = tempfile::tempdir().unwrap();

    let committed = {
        let mut store =
            SessionStore::new(Box::new(FileStorage::open(dir.path()).unwrap()));
        store.commit_profile(common::vegan_athlete()).unwrap();
        store.snapshot().clone()
    };

    let mut restarted =
        SessionStore::new(Box::new(FileStorage::open(dir.path()).unwrap()));
    let session = restarted.load();
    assert_eq!(session, &committed);
    assert!(session.plan.is_some());
}
