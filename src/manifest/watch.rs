// SPDX-License-Identifier: MPL-2.0
//! Watch mode: keep manifests in sync with the photo folders.
//!
//! File events from the photos root are debounced, then every folder whose
//! image listing changed gets its manifest regenerated. A periodic sweep
//! runs the same check, so missed events (or platforms without a native
//! watcher) only delay an update. Changes to non-image files never trigger
//! a rewrite.

use super::{generate_index_for_directory, index_path, is_manifest_image, list_images};
use crate::config::defaults::WATCH_DEBOUNCE_MS;
use crate::domain::gallery::FolderSpec;
use crate::error::Result;
use notify::{Event, RecommendedWatcher, RecursiveMode, Watcher};
use std::future::Future;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::{Instant, MissedTickBehavior};

/// A native watcher and the channel its callback signals on.
type EventStream = (RecommendedWatcher, mpsc::UnboundedReceiver<()>);

/// A folder whose manifest was regenerated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FolderChange {
    pub folder: String,
    pub count: usize,
}

/// Last seen image listing of each watched folder.
#[derive(Debug, Clone)]
pub struct WatchState {
    photos_root: PathBuf,
    folders: Vec<FolderSpec>,
    listings: Vec<Vec<String>>,
}

impl WatchState {
    /// Records the current listings as the baseline.
    ///
    /// # Errors
    ///
    /// Returns an error if an existing folder cannot be read.
    pub fn new(photos_root: &Path, folders: &[FolderSpec]) -> Result<Self> {
        let listings = folders
            .iter()
            .map(|folder| list_images(&photos_root.join(&folder.internal_name)))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self {
            photos_root: photos_root.to_path_buf(),
            folders: folders.to_vec(),
            listings,
        })
    }

    /// Re-lists every folder and regenerates the manifests that changed.
    ///
    /// # Errors
    ///
    /// Returns an error if a folder cannot be read or a manifest cannot be
    /// written. Folders before the failing one keep their new baseline.
    pub fn poll(&mut self) -> Result<Vec<FolderChange>> {
        let mut changes = Vec::new();
        for (folder, previous) in self.folders.iter().zip(self.listings.iter_mut()) {
            let dir = self.photos_root.join(&folder.internal_name);
            // Avoid spamming warnings for folders that are still missing.
            if !dir.exists() && previous.is_empty() {
                continue;
            }
            let current = list_images(&dir)?;
            if current == *previous {
                continue;
            }

            tracing::info!(folder = %folder.internal_name, "change detected");
            let count = generate_index_for_directory(&dir, &index_path(&self.photos_root, folder))?;
            *previous = current;
            changes.push(FolderChange {
                folder: folder.internal_name.clone(),
                count,
            });
        }
        Ok(changes)
    }
}

/// Watches until `shutdown` resolves, calling `on_change` for each rewrite.
///
/// `sweep_interval` paces the fallback sweep. Read errors during a refresh
/// are logged and retried on the next event or sweep.
///
/// # Errors
///
/// Returns an error if the initial listing fails.
pub async fn watch_until(
    photos_root: &Path,
    folders: &[FolderSpec],
    sweep_interval: Duration,
    shutdown: impl Future<Output = ()>,
    mut on_change: impl FnMut(&FolderChange),
) -> Result<()> {
    let mut state = {
        let (root, folders) = (photos_root.to_path_buf(), folders.to_vec());
        tokio::task::spawn_blocking(move || WatchState::new(&root, &folders)).await??
    };

    let mut events = match start_watcher(photos_root) {
        Ok(stream) => {
            tracing::info!(root = %photos_root.display(), "watching file events");
            Some(stream)
        }
        Err(err) => {
            tracing::warn!(error = %err, "file events unavailable, sweeping only");
            None
        }
    };
    let mut sweep = tokio::time::interval(sweep_interval);
    sweep.set_missed_tick_behavior(MissedTickBehavior::Delay);
    tokio::pin!(shutdown);

    loop {
        tokio::select! {
            () = &mut shutdown => break,
            _ = sweep.tick() => {}
            event = next_event(&mut events) => {
                if event.is_none() {
                    tracing::warn!("file event channel closed, sweeping only");
                    events = None;
                    continue;
                }
                if let Some((_, rx)) = events.as_mut() {
                    debounce(rx).await;
                }
            }
        }
        state = refresh(state, &mut on_change).await?;
    }

    tracing::info!("manifest watch stopped");
    Ok(())
}

/// Watches until Ctrl+C.
///
/// # Errors
///
/// Returns an error if the initial listing fails.
pub async fn watch(
    photos_root: &Path,
    folders: &[FolderSpec],
    sweep_interval: Duration,
    on_change: impl FnMut(&FolderChange),
) -> Result<()> {
    let shutdown = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %err, "cannot listen for Ctrl+C");
        }
    };
    watch_until(photos_root, folders, sweep_interval, shutdown, on_change).await
}

/// Polls `state` off the runtime and reports what changed.
async fn refresh(
    mut state: WatchState,
    on_change: &mut impl FnMut(&FolderChange),
) -> Result<WatchState> {
    let (state, result) = tokio::task::spawn_blocking(move || {
        let result = state.poll();
        (state, result)
    })
    .await?;

    match result {
        Ok(changes) => {
            for change in &changes {
                on_change(change);
            }
        }
        Err(err) => tracing::warn!(error = %err, "manifest refresh failed"),
    }
    Ok(state)
}

fn start_watcher(root: &Path) -> notify::Result<EventStream> {
    let (tx, rx) = mpsc::unbounded_channel();
    let mut watcher = notify::recommended_watcher(move |res: notify::Result<Event>| {
        let relevant = match res {
            Ok(event) => touches_images(&event),
            // Let the next refresh find out what happened.
            Err(_) => true,
        };
        if relevant {
            let _ = tx.send(());
        }
    })?;
    watcher.watch(root, RecursiveMode::Recursive)?;
    Ok((watcher, rx))
}

/// Only image files and folders (paths without an extension) can change a
/// listing. Manifest writes are ignored.
fn touches_images(event: &Event) -> bool {
    event.paths.iter().any(|path| {
        path.extension().is_none()
            || path
                .file_name()
                .and_then(|name| name.to_str())
                .is_some_and(is_manifest_image)
    })
}

async fn next_event(events: &mut Option<EventStream>) -> Option<()> {
    match events {
        Some((_, rx)) => rx.recv().await,
        None => std::future::pending().await,
    }
}

/// Waits until no event arrived for the debounce window.
async fn debounce(rx: &mut mpsc::UnboundedReceiver<()>) {
    let window = Duration::from_millis(WATCH_DEBOUNCE_MS);
    let quiet = tokio::time::sleep(window);
    tokio::pin!(quiet);

    loop {
        tokio::select! {
            () = &mut quiet => break,
            event = rx.recv() => {
                if event.is_none() {
                    break;
                }
                quiet.as_mut().reset(Instant::now() + window);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use notify::EventKind;
    use std::fs;
    use tempfile::tempdir;

    fn folders() -> Vec<FolderSpec> {
        vec![
            FolderSpec::new("colonies", "Colonie", "Colonie", "colonies"),
            FolderSpec::new("theatre", "Théâtre", "Théâtre", "theatre"),
        ]
    }

    #[test]
    fn poll_without_changes_writes_nothing() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::create_dir(temp_dir.path().join("colonies")).unwrap();
        let mut state = WatchState::new(temp_dir.path(), &folders()).unwrap();

        assert!(state.poll().unwrap().is_empty());
        assert!(!temp_dir.path().join("colonies/index.json").exists());
    }

    #[test]
    fn new_image_regenerates_only_its_folder() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let root = temp_dir.path();
        fs::create_dir(root.join("colonies")).unwrap();
        fs::create_dir(root.join("theatre")).unwrap();
        let mut state = WatchState::new(root, &folders()).unwrap();

        fs::write(root.join("theatre/Théâtre 1.jpg"), b"").unwrap();
        let changes = state.poll().unwrap();

        assert_eq!(
            changes,
            [FolderChange {
                folder: "theatre".to_string(),
                count: 1
            }]
        );
        assert!(root.join("theatre/index.json").is_file());
        assert!(!root.join("colonies/index.json").exists());

        // Same listing on the next poll: no rewrite.
        assert!(state.poll().unwrap().is_empty());
    }

    #[test]
    fn non_image_files_are_ignored() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let root = temp_dir.path();
        fs::create_dir(root.join("colonies")).unwrap();
        let mut state = WatchState::new(root, &folders()).unwrap();

        fs::write(root.join("colonies/notes.txt"), b"").unwrap();

        assert!(state.poll().unwrap().is_empty());
    }

    #[test]
    fn removed_image_is_detected() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let root = temp_dir.path();
        fs::create_dir(root.join("colonies")).unwrap();
        fs::write(root.join("colonies/Colonie 1.jpg"), b"").unwrap();
        let mut state = WatchState::new(root, &folders()).unwrap();

        fs::remove_file(root.join("colonies/Colonie 1.jpg")).unwrap();
        let changes = state.poll().unwrap();

        assert_eq!(changes.len(), 1);
        assert_eq!(changes[0].count, 0);
    }

    #[test]
    fn only_image_and_folder_events_are_relevant() {
        let event = |path: &str| Event::new(EventKind::Any).add_path(PathBuf::from(path));

        assert!(touches_images(&event("/photos/colonies/Colonie 3.JPG")));
        assert!(touches_images(&event("/photos/colonies")));
        assert!(!touches_images(&event("/photos/colonies/index.json")));
        assert!(!touches_images(&event("/photos/colonies/notes.txt")));
    }

    #[tokio::test]
    async fn file_event_refreshes_before_the_next_sweep() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let root = temp_dir.path().to_path_buf();
        fs::create_dir(root.join("colonies")).unwrap();
        fs::create_dir(root.join("theatre")).unwrap();

        let image = root.join("theatre/Théâtre 1.jpg");
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(300)).await;
            fs::write(image, b"").unwrap();
        });

        let mut seen = Vec::new();
        watch_until(
            &root,
            &folders(),
            // Only the immediate first sweep runs during the test.
            Duration::from_secs(60),
            tokio::time::sleep(Duration::from_millis(1_500)),
            |change| seen.push(change.clone()),
        )
        .await
        .unwrap();

        assert_eq!(
            seen,
            [FolderChange {
                folder: "theatre".to_string(),
                count: 1
            }]
        );
        assert!(root.join("theatre/index.json").is_file());
    }

    #[tokio::test]
    async fn watch_until_stops_on_shutdown() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let root = temp_dir.path().to_path_buf();
        fs::create_dir(root.join("colonies")).unwrap();
        fs::write(root.join("colonies/Colonie 1.jpg"), b"").unwrap();

        let mut seen = Vec::new();
        watch_until(
            &root,
            &folders(),
            Duration::from_millis(10),
            tokio::time::sleep(Duration::from_millis(50)),
            |change| seen.push(change.clone()),
        )
        .await
        .unwrap();

        // Baseline already matched the folder contents.
        assert!(seen.is_empty());
    }
}
