//! Line-delimited stream source.
//!
//! Reads JSON lines from any async reader (stdin by default) and delivers each
//! record as an [`FeedEvent::Inserted`] as soon as it arrives. A malformed
//! line is logged and skipped; it never ends the stream.

use crate::decode::decode_line;
use crate::{AlertFeed, FeedError};
use sentinel_core::FeedEvent;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader, Stdin};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

pub struct LineFeed<R> {
    reader: R,
}

impl<R> LineFeed<R>
where
    R: AsyncBufRead + Unpin + Send + 'static,
{
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl LineFeed<BufReader<Stdin>> {
    pub fn stdin() -> Self {
        Self::new(BufReader::new(tokio::io::stdin()))
    }
}

impl<R> AlertFeed for LineFeed<R>
where
    R: AsyncBufRead + Unpin + Send + 'static,
{
    fn spawn(self, tx: mpsc::Sender<FeedEvent>) -> JoinHandle<Result<(), FeedError>> {
        tokio::spawn(async move {
            let mut lines = self.reader.lines();
            let mut number = 0usize;
            let (mut sent, mut skipped) = (0usize, 0usize);

            while let Some(line) = lines.next_line().await? {
                number += 1;
                if line.trim().is_empty() {
                    continue;
                }
                match decode_line(&line, number) {
                    Ok(record) => {
                        tx.send(FeedEvent::Inserted(record))
                            .await
                            .map_err(|_| FeedError::ChannelClosed)?;
                        sent += 1;
                    }
                    Err(err) => {
                        tracing::warn!(error = %err, "line feed: skipping malformed record");
                        skipped += 1;
                    }
                }
            }

            tracing::debug!(sent, skipped, "line feed: end of stream");
            Ok(())
        })
    }
}
