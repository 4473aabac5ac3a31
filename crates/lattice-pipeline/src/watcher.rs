//! Style-source watching for the watch tasks.

use std::path::{Path, PathBuf};
use std::sync::mpsc;
use std::time::{Duration, Instant};

use notify::{RecommendedWatcher, RecursiveMode, Watcher};
use tokio::sync::mpsc as async_mpsc;

use crate::styles::OUTPUT_SUFFIX;

const DEBOUNCE: Duration = Duration::from_millis(100);

/// Events emitted by the style watcher.
#[derive(Debug, Clone)]
pub enum StyleEvent {
    /// A style source was created or modified
    StylesChanged(PathBuf),

    /// A style source was deleted
    Removed(PathBuf),
}

/// Watcher over the style sources directory.
pub struct StyleWatcher {
    _watcher: RecommendedWatcher,
}

impl StyleWatcher {
    /// Watch `dir` recursively.
    ///
    /// Returns the watcher and a channel of debounced events. Drop the
    /// watcher to stop.
    pub fn new(dir: &Path) -> Result<(Self, async_mpsc::Receiver<StyleEvent>), std::io::Error> {
        let (sync_tx, sync_rx) = mpsc::channel();
        let (async_tx, async_rx) = async_mpsc::channel(100);

        let mut watcher = notify::recommended_watcher(move |res: Result<notify::Event, _>| {
            if let Ok(event) = res {
                let _ = sync_tx.send(event);
            }
        })
        .map_err(std::io::Error::other)?;

        watcher
            .watch(dir, RecursiveMode::Recursive)
            .map_err(std::io::Error::other)?;

        // Forwarder thread: debounce bursts, classify, bridge into tokio.
        std::thread::spawn(move || {
            let mut last_forward: Option<Instant> = None;

            while let Ok(event) = sync_rx.recv() {
                let now = Instant::now();
                if last_forward.is_some_and(|at| now.duration_since(at) < DEBOUNCE) {
                    continue;
                }

                let mut forwarded = false;
                for path in event.paths {
                    if let Some(style_event) = classify(&path, &event.kind) {
                        forwarded = true;
                        if async_tx.blocking_send(style_event).is_err() {
                            return;
                        }
                    }
                }
                if forwarded {
                    last_forward = Some(now);
                }
            }
        });

        Ok((Self { _watcher: watcher }, async_rx))
    }
}

/// Classify a notify event into a style event.
///
/// Compiled output is ignored so a rebuild's own write never triggers the
/// next rebuild.
fn classify(path: &Path, kind: &notify::EventKind) -> Option<StyleEvent> {
    use notify::EventKind;

    let name = path.file_name().and_then(|n| n.to_str()).unwrap_or("");
    if name.ends_with(OUTPUT_SUFFIX) {
        return None;
    }

    match kind {
        EventKind::Create(_) | EventKind::Modify(_) => {
            Some(StyleEvent::StylesChanged(path.to_path_buf()))
        }
        EventKind::Remove(_) => Some(StyleEvent::Removed(path.to_path_buf())),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use notify::event::{CreateKind, ModifyKind, RemoveKind};
    use notify::EventKind;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn classifies_source_changes() {
        let created = classify(
            Path::new("docs/styles/style.css"),
            &EventKind::Create(CreateKind::File),
        );
        assert!(matches!(created, Some(StyleEvent::StylesChanged(_))));

        let modified = classify(
            Path::new("docs/styles/style.css"),
            &EventKind::Modify(ModifyKind::Any),
        );
        assert!(matches!(modified, Some(StyleEvent::StylesChanged(_))));

        let removed = classify(
            Path::new("docs/styles/style.css"),
            &EventKind::Remove(RemoveKind::File),
        );
        assert!(matches!(removed, Some(StyleEvent::Removed(_))));
    }

    #[test]
    fn ignores_compiled_output() {
        let event = classify(
            Path::new("docs/styles/style.min.css"),
            &EventKind::Modify(ModifyKind::Any),
        );
        assert!(event.is_none());
    }

    #[tokio::test]
    async fn watches_style_changes() {
        let temp = tempdir().unwrap();
        let (_watcher, mut rx) = StyleWatcher::new(temp.path()).unwrap();

        // Give the backend a moment to register the watch.
        tokio::time::sleep(Duration::from_millis(200)).await;
        fs::write(temp.path().join("style.css"), ".a { color: red; }").unwrap();

        let event = tokio::time::timeout(Duration::from_secs(5), rx.recv())
            .await
            .expect("timed out waiting for watch event");
        assert!(event.is_some());
    }
}
