use crate::connection::ConnectionError;
use tokio::io::{self, AsyncBufRead, AsyncBufReadExt, BufReader};
use tokio::sync::mpsc::Sender;

/// Forward newline-delimited records from stdin until EOF.
pub async fn read_stdin(tx: Sender<String>) -> Result<(), ConnectionError> {
    read_lines(BufReader::new(io::stdin()), tx).await
}

/// Forward each non-blank line of `reader`. Stops early once the consumer is
/// gone.
pub async fn read_lines<R>(reader: R, tx: Sender<String>) -> Result<(), ConnectionError>
where
    R: AsyncBufRead + Unpin,
{
    let mut lines = reader.lines();

    while let Some(line) = lines.next_line().await.map_err(ConnectionError::Read)? {
        if line.trim().is_empty() {
            continue;
        }
        if tx.send(line).await.is_err() {
            break;
        }
    }

    Ok(())
}
