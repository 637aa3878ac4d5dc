//! Directory scanner behaviour against real scratch trees.

use std::fs;
use std::path::PathBuf;

use anyhow::Result;
use clipfold_config::LibraryPolicy;
use clipfold_fsops::{FsOpsError, scan_videos};
use clipfold_test_support::fixtures::ScratchTree;

#[test]
fn mixed_extensions_return_only_matching_absolute_paths_in_order() -> Result<()> {
    let tree = ScratchTree::new()?;
    tree.touch_all([
        "b/clip02.m4v",
        "a/clip01.M4V",
        "a/notes.txt",
        "a/nested/clip03.m4v",
        "movie.mp4",
        "top.m4v",
    ])?;

    let found = scan_videos(tree.path(), &LibraryPolicy::default())?;
    let expected: Vec<PathBuf> = [
        "a/clip01.M4V",
        "a/nested/clip03.m4v",
        "b/clip02.m4v",
        "top.m4v",
    ]
    .iter()
    .map(|rel| tree.join(rel))
    .collect();
    assert_eq!(found, expected);
    assert!(found.iter().all(|path| path.is_absolute()));
    Ok(())
}

#[test]
fn configured_extensions_widen_the_match() -> Result<()> {
    let tree = ScratchTree::new()?;
    tree.touch_all(["one.m4v", "two.MP4", "three.mkv"])?;
    let policy = LibraryPolicy {
        extensions: vec!["m4v".into(), "mp4".into()],
        ..LibraryPolicy::default()
    };
    let found = scan_videos(tree.path(), &policy)?;
    assert_eq!(found, vec![tree.join("one.m4v"), tree.join("two.MP4")]);
    Ok(())
}

#[test]
fn policy_entries_built_in_code_are_normalised() -> Result<()> {
    let tree = ScratchTree::new()?;
    tree.touch_all(["one.m4v", "two.mp4", "three.mkv"])?;
    let policy = LibraryPolicy {
        extensions: vec!["MP4".into(), ".M4V".into()],
        ..LibraryPolicy::default()
    };
    let found = scan_videos(tree.path(), &policy)?;
    assert_eq!(found, vec![tree.join("one.m4v"), tree.join("two.mp4")]);
    Ok(())
}

#[test]
fn empty_directory_yields_empty_result() -> Result<()> {
    let tree = ScratchTree::new()?;
    tree.mkdir("empty/deeper")?;
    assert!(scan_videos(tree.path(), &LibraryPolicy::default())?.is_empty());
    Ok(())
}

#[test]
fn missing_root_is_a_traversal_error() -> Result<()> {
    let tree = ScratchTree::new()?;
    let err = scan_videos(&tree.join("nope"), &LibraryPolicy::default()).err();
    assert!(matches!(err, Some(FsOpsError::Walkdir { .. })));
    Ok(())
}

#[cfg(unix)]
#[test]
fn broken_link_aborts_scan_when_following_links() -> Result<()> {
    let tree = ScratchTree::new()?;
    tree.touch_all(["a.m4v", "z.m4v"])?;
    std::os::unix::fs::symlink(tree.join("gone"), tree.join("m-dangling"))?;

    let following = LibraryPolicy {
        follow_symlinks: true,
        ..LibraryPolicy::default()
    };
    let err = scan_videos(tree.path(), &following).err();
    assert!(matches!(err, Some(FsOpsError::Walkdir { .. })));

    let found = scan_videos(tree.path(), &LibraryPolicy::default())?;
    assert_eq!(found.len(), 2);
    Ok(())
}

#[cfg(unix)]
#[test]
fn symlink_cycle_aborts_scan_only_when_following_links() -> Result<()> {
    let tree = ScratchTree::new()?;
    tree.touch("a/clip.m4v")?;
    std::os::unix::fs::symlink(tree.join("a"), tree.join("a/loop"))?;

    let following = LibraryPolicy {
        follow_symlinks: true,
        ..LibraryPolicy::default()
    };
    let err = scan_videos(tree.path(), &following).err();
    assert!(matches!(err, Some(FsOpsError::Walkdir { .. })));

    let found = scan_videos(tree.path(), &LibraryPolicy::default())?;
    assert_eq!(found, vec![tree.join("a/clip.m4v")]);
    Ok(())
}

#[cfg(unix)]
#[test]
fn unreadable_subdirectory_fails_without_partial_results() -> Result<()> {
    use std::os::unix::fs::PermissionsExt;

    let tree = ScratchTree::new()?;
    tree.touch_all(["a.m4v", "locked/b.m4v"])?;
    let locked = tree.join("locked");
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o000))?;

    // Privileged users bypass the mode bits and still see both files.
    let readable = fs::read_dir(&locked).is_ok();
    let result = scan_videos(tree.path(), &LibraryPolicy::default());
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o755))?;

    if readable {
        assert_eq!(
            result?,
            vec![tree.join("a.m4v"), tree.join("locked/b.m4v")]
        );
    } else {
        assert!(matches!(result, Err(FsOpsError::Walkdir { .. })));
    }
    Ok(())
}
