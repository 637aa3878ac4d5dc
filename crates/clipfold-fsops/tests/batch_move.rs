//! Batch mover behaviour against real scratch trees.

use std::fs;
use std::sync::Arc;

use anyhow::Result;
use clipfold_events::Session;
use clipfold_fsops::{BatchMover, FsOpsError};
use clipfold_test_support::fixtures::{ScratchTree, file_names};
use clipfold_test_support::sink::RecordingSink;

fn recording_session() -> (Session, Arc<RecordingSink>) {
    let sink = Arc::new(RecordingSink::new());
    (Session::new(sink.clone()), sink)
}

const FIVE: [&str; 5] = [
    "show/clip01.m4v",
    "show/clip02.m4v",
    "show/clip03.m4v",
    "show/clip04.m4v",
    "show/clip05.m4v",
];

#[test]
fn five_files_land_in_a_fresh_destination() -> Result<()> {
    let tree = ScratchTree::new()?;
    let files = tree.touch_all(FIVE)?;
    let (session, sink) = recording_session();

    let outcome = BatchMover::default().move_batch(&session, &files)?;

    assert_eq!(outcome.moved, 5);
    assert_eq!(outcome.destination, tree.join("show/clip01"));
    assert_eq!(
        file_names(&outcome.destination)?,
        vec![
            "clip01.m4v",
            "clip02.m4v",
            "clip03.m4v",
            "clip04.m4v",
            "clip05.m4v"
        ]
    );
    assert!(files.iter().all(|path| !path.exists()));
    assert_eq!(sink.completions().len(), 1);
    assert!(sink.errors().is_empty());
    Ok(())
}

#[test]
fn zero_file_request_creates_nothing() -> Result<()> {
    let tree = ScratchTree::new()?;
    let (session, sink) = recording_session();

    let err = BatchMover::default().move_batch(&session, &[]).err();

    assert!(matches!(err, Some(FsOpsError::InvalidInput { .. })));
    assert!(file_names(tree.path())?.is_empty());
    assert_eq!(sink.errors().len(), 1);
    Ok(())
}

#[test]
fn destination_occupied_by_a_file_moves_nothing() -> Result<()> {
    let tree = ScratchTree::new()?;
    let files = tree.touch_all(["show/clip01.m4v", "show/clip02.m4v"])?;
    fs::write(tree.join("show/clip01"), b"not a directory")?;
    let (session, sink) = recording_session();

    let err = BatchMover::default().move_batch(&session, &files).err();

    assert!(matches!(err, Some(FsOpsError::CreateDestination { .. })));
    assert!(files.iter().all(|path| path.is_file()));
    let errors = sink.errors();
    assert_eq!(errors.len(), 1);
    assert!(errors[0].starts_with("failed to create output directory"));
    assert!(!sink.statuses().iter().any(|line| line.starts_with("Moving")));
    Ok(())
}

#[test]
fn missing_third_file_stops_the_batch_after_two_moves() -> Result<()> {
    let tree = ScratchTree::new()?;
    let files = tree.touch_all(FIVE)?;
    fs::remove_file(&files[2])?;
    let (session, sink) = recording_session();

    let err = BatchMover::default().move_batch(&session, &files).err();

    match err {
        Some(FsOpsError::SourceMissing { path }) => assert_eq!(path, files[2]),
        other => panic!("expected missing source, got {other:?}"),
    }
    let destination = tree.join("show/clip01");
    assert_eq!(file_names(&destination)?, vec!["clip01.m4v", "clip02.m4v"]);
    assert!(files[3].is_file());
    assert!(files[4].is_file());
    assert_eq!(
        sink.errors(),
        vec!["Failed to move file 'clip03.m4v': Source file not found.".to_string()]
    );
    assert!(sink.completions().is_empty());
    Ok(())
}

#[test]
fn files_from_different_folders_share_the_first_files_destination() -> Result<()> {
    let tree = ScratchTree::new()?;
    let files = tree.touch_all(["one/alpha.m4v", "two/beta.m4v"])?;
    let (session, _sink) = recording_session();

    let outcome = BatchMover::default().move_batch(&session, &files)?;

    assert_eq!(outcome.destination, tree.join("one/alpha"));
    assert_eq!(file_names(&outcome.destination)?, vec!["alpha.m4v", "beta.m4v"]);
    Ok(())
}

#[test]
fn rename_onto_a_non_empty_directory_reports_a_move_error() -> Result<()> {
    let tree = ScratchTree::new()?;
    let files = tree.touch_all(["show/clip01.m4v", "show/clip02.m4v", "show/clip03.m4v"])?;
    tree.touch("show/clip01/clip02.m4v/keep")?;
    let (session, sink) = recording_session();

    let err = BatchMover::default().move_batch(&session, &files).err();

    match err {
        Some(FsOpsError::Move {
            source_path,
            target,
            ..
        }) => {
            assert_eq!(source_path, files[1]);
            assert_eq!(target, tree.join("show/clip01/clip02.m4v"));
        }
        other => panic!("expected move failure, got {other:?}"),
    }
    assert!(tree.join("show/clip01/clip01.m4v").is_file());
    assert!(files[1].is_file());
    assert!(files[2].is_file());
    let errors = sink.errors();
    assert_eq!(errors.len(), 1);
    assert!(errors[0].ends_with("Might be cross-drive issue or permissions."));
    assert!(sink.completions().is_empty());
    Ok(())
}

#[test]
fn shared_basenames_overwrite_and_both_count_as_moved() -> Result<()> {
    let tree = ScratchTree::new()?;
    let first = tree.join("one/a.m4v");
    let second = tree.join("two/a.m4v");
    tree.mkdir("one")?;
    tree.mkdir("two")?;
    fs::write(&first, b"first")?;
    fs::write(&second, b"second")?;
    let (session, _sink) = recording_session();

    let outcome = BatchMover::default().move_batch(&session, &[first, second])?;

    assert_eq!(outcome.moved, 2);
    assert_eq!(file_names(&outcome.destination)?, vec!["a.m4v"]);
    assert_eq!(fs::read(outcome.destination.join("a.m4v"))?, b"second");
    Ok(())
}
