use iced::futures::{SinkExt, Stream};
use iced::stream;
use tokio::time;

use super::differ::{ScanError, SnapshotDiffer};
use super::{downloads_dir, Event, POLL_INTERVAL};

/// Poll the Downloads folder for new PNG files
///
/// Runs as an iced subscription stream: the differ executes here, off the
/// UI loop, and detected files are handed over through the channel. The
/// loop runs until the watched folder vanishes or the app shuts down.
pub fn poll_downloads() -> impl Stream<Item = Event> {
    stream::channel(16, |mut output| async move {
        let dir = downloads_dir();
        println!("👀 Watching {} for new PNG downloads", dir.display());

        let mut differ = SnapshotDiffer::new(&dir);

        loop {
            match differ.poll() {
                Ok(Some(path)) => {
                    println!("📥 Detected new PNG: {}", path.display());
                    if output.send(Event::Detected(path)).await.is_err() {
                        return;
                    }
                }
                Ok(None) => {}
                Err(err @ ScanError::Vanished(_)) => {
                    eprintln!("❌ {}", err);
                    let _ = output.send(Event::Stopped(err.to_string())).await;
                    return;
                }
                Err(err) => {
                    eprintln!("⚠️  {}", err);
                    let _ = output.send(Event::ScanFailed(err.to_string())).await;
                }
            }

            time::sleep(POLL_INTERVAL).await;
        }
    })
}
