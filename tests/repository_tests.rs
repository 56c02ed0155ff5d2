//! Behaviour of the note repository across both encodings

#![allow(deprecated)]

use chrono::Duration;
use notekeeper::domain::FixedClock;
use notekeeper::infrastructure::NoteRepository;
use notekeeper::NoteError;
use std::fs;
use std::path::{Path, PathBuf};
use std::rc::Rc;
use tempfile::TempDir;

mod common;
use common::at;

const STORES: [&str; 2] = ["notes.json", "notes.csv"];

fn open(path: &Path, clock: &Rc<FixedClock>) -> NoteRepository {
    NoteRepository::open_with_clock(path, Box::new(clock.clone())).unwrap()
}

fn stores(temp: &TempDir) -> Vec<PathBuf> {
    STORES.iter().map(|name| temp.path().join(name)).collect()
}

#[test]
fn test_ids_are_sequential() {
    let temp = TempDir::new().unwrap();

    for path in stores(&temp) {
        let clock = Rc::new(FixedClock::new(at(17, 9, 0, 0)));
        let mut repo = open(&path, &clock);
        for n in 0..12 {
            repo.add(&format!("note {}", n), "").unwrap();
        }

        let ids: Vec<u64> = repo.list().iter().map(|n| n.id).collect();
        assert_eq!(ids, (1..=12).collect::<Vec<u64>>(), "{}", path.display());
    }
}

#[test]
fn test_round_trip_preserves_collection() {
    let temp = TempDir::new().unwrap();

    for path in stores(&temp) {
        let clock = Rc::new(FixedClock::new(at(17, 9, 0, 0)));
        let mut repo = open(&path, &clock);
        repo.add("Groceries", "Milk,eggs").unwrap();
        clock.advance(Duration::seconds(61));
        repo.add("Quotes \"and\"; semicolons", "multi\nline body").unwrap();
        repo.add("Пустая", "").unwrap();
        clock.advance(Duration::hours(2));
        repo.edit(1, "Groceries", "Milk, eggs, bread").unwrap();

        let reloaded = open(&path, &clock);
        assert_eq!(reloaded.list(), repo.list(), "{}", path.display());
        assert_eq!(reloaded.list()[0].updated_at, at(17, 11, 1, 1));
    }
}

#[test]
fn test_edit_changes_only_content_and_update_time() {
    let temp = TempDir::new().unwrap();

    for path in stores(&temp) {
        let clock = Rc::new(FixedClock::new(at(17, 9, 0, 0)));
        let mut repo = open(&path, &clock);
        let original = repo.add("Title", "Body").unwrap();
        repo.add("Other", "Untouched").unwrap();

        clock.advance(Duration::seconds(1));
        assert!(repo.edit(1, "New title", "New body").unwrap());

        let edited = repo.find_by_id(1).unwrap();
        assert_eq!(edited.id, original.id);
        assert_eq!(edited.created_at, original.created_at);
        assert_eq!(edited.title, "New title");
        assert_eq!(edited.body, "New body");
        assert!(edited.updated_at >= original.updated_at);
        assert_eq!(repo.find_by_id(2).unwrap().body, "Untouched");
    }
}

#[test]
fn test_missing_id_leaves_file_unchanged() {
    let temp = TempDir::new().unwrap();

    for path in stores(&temp) {
        let clock = Rc::new(FixedClock::new(at(17, 9, 0, 0)));
        let mut repo = open(&path, &clock);
        repo.add("a", "b").unwrap();
        let before = fs::read(&path).unwrap();

        clock.advance(Duration::minutes(1));
        assert!(!repo.edit(99, "x", "y").unwrap());
        assert!(!repo.delete(99).unwrap());
        assert!(repo.find_by_id(99).is_none());

        assert_eq!(fs::read(&path).unwrap(), before);
        assert_eq!(repo.len(), 1);
    }
}

#[test]
fn test_delete_removes_exactly_one() {
    let temp = TempDir::new().unwrap();

    for path in stores(&temp) {
        let clock = Rc::new(FixedClock::new(at(17, 9, 0, 0)));
        let mut repo = open(&path, &clock);
        for title in ["a", "b", "c"] {
            repo.add(title, "").unwrap();
        }

        assert!(repo.delete(2).unwrap());
        assert_eq!(repo.len(), 2);
        assert!(!repo.delete(2).unwrap());
        assert_eq!(repo.len(), 2);

        let reloaded = open(&path, &clock);
        let ids: Vec<u64> = reloaded.list().iter().map(|n| n.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }
}

#[test]
fn test_find_by_date_covers_whole_day() {
    let temp = TempDir::new().unwrap();

    for path in stores(&temp) {
        let clock = Rc::new(FixedClock::new(at(16, 23, 59, 59)));
        let mut repo = open(&path, &clock);
        repo.add("before", "").unwrap();
        clock.set(at(17, 0, 0, 0));
        repo.add("start", "").unwrap();
        clock.set(at(17, 23, 59, 59));
        repo.add("end", "").unwrap();
        clock.set(at(18, 0, 0, 0));
        repo.add("after", "").unwrap();

        // Query the reloaded store to cover the decoded timestamps too
        let reloaded = open(&path, &clock);
        let titles: Vec<&str> = reloaded
            .find_by_date(at(17, 0, 0, 0).date())
            .into_iter()
            .map(|n| n.title.as_str())
            .collect();
        assert_eq!(titles, vec!["start", "end"], "{}", path.display());
        assert!(reloaded.find_by_date(at(20, 0, 0, 0).date()).is_empty());
    }
}

#[test]
fn test_groceries_and_meeting_scenario() {
    let temp = TempDir::new().unwrap();

    for path in stores(&temp) {
        let clock = Rc::new(FixedClock::new(at(17, 9, 0, 0)));
        let mut repo = open(&path, &clock);

        let groceries = repo.add("Groceries", "Milk,eggs").unwrap();
        assert_eq!(groceries.id, 1);
        assert_eq!(repo.list().len(), 1);
        assert_eq!(repo.list()[0].title, "Groceries");

        let meeting = repo.add("Meeting", "Standup at 10").unwrap();
        assert_eq!(meeting.id, 2);

        assert!(repo.delete(1).unwrap());
        let ids: Vec<u64> = repo.list().iter().map(|n| n.id).collect();
        assert_eq!(ids, vec![2]);

        clock.advance(Duration::seconds(5));
        assert!(repo.edit(2, "Meeting", "Standup at 11").unwrap());
        let note = repo.find_by_id(2).unwrap();
        assert_eq!(note.body, "Standup at 11");
        assert!(note.updated_at > note.created_at);
    }
}

#[test]
fn test_corrupted_files_surface_parse_errors() {
    let temp = TempDir::new().unwrap();
    let cases = [
        ("bad.json", "[{\"note_id\": 1}]"),
        ("bad.csv", "header\n1;a;b;c\n"),
        (
            "dupes.csv",
            "header\n1;a;b;17-01-2025 09:00:00;17-01-2025 09:00:00\n1;c;d;17-01-2025 09:00:00;17-01-2025 09:00:00\n",
        ),
    ];

    for (name, content) in cases {
        let path = temp.path().join(name);
        fs::write(&path, content).unwrap();

        match NoteRepository::open(&path) {
            Err(NoteError::Parse { path: reported, .. }) => assert_eq!(reported, path),
            other => panic!("Expected Parse error for {}, got {:?}", name, other),
        }
    }
}

#[test]
fn test_unsupported_extension_is_format_error() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("notes.xml");
    fs::write(&path, "<notes/>").unwrap();

    assert!(matches!(
        NoteRepository::open(&path),
        Err(NoteError::Format(_))
    ));
}
