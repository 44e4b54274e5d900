//! TCP relay: newline-delimited JSON, one task per connection.

use std::sync::Arc;

use anyhow::Context;
use chess_session::{ClientMessage, ConnectionId, ServerMessage, Session};
use minimax_engine::DifficultyTable;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncReadExt, AsyncWriteExt, BufReader};
use tokio::net::tcp::{OwnedReadHalf, OwnedWriteHalf};
use tokio::net::{TcpListener, TcpStream};
use tokio::sync::{mpsc, Mutex};
use tracing::{debug, info, warn};

use crate::hub::{Hub, OUTBOX_CAPACITY};
use crate::requests;

/// Longest client line accepted, in bytes, newline excluded. A longer line
/// is skipped and answered with an error.
pub const MAX_LINE_LENGTH: usize = 64 * 1024;

pub struct Server {
    hub: Arc<Mutex<Hub>>,
    table: Arc<DifficultyTable>,
}

impl Server {
    pub fn new(table: DifficultyTable) -> Self {
        Self::with_session(Session::new(), table)
    }

    pub fn with_session(session: Session, table: DifficultyTable) -> Self {
        Self {
            hub: Arc::new(Mutex::new(Hub::new(session))),
            table: Arc::new(table),
        }
    }

    /// Accept connections until the listener fails.
    pub async fn run(self, listener: TcpListener) -> anyhow::Result<()> {
        info!(addr = %listener.local_addr()?, "relay listening");
        loop {
            let (socket, peer) = listener.accept().await?;
            let hub = Arc::clone(&self.hub);
            let table = Arc::clone(&self.table);

            tokio::spawn(async move {
                if let Err(e) = handle_connection(socket, hub, table).await {
                    warn!(%peer, error = %e, "connection closed with an error");
                }
            });
        }
    }
}

async fn handle_connection(
    socket: TcpStream,
    hub: Arc<Mutex<Hub>>,
    table: Arc<DifficultyTable>,
) -> anyhow::Result<()> {
    let (reader, writer) = socket.into_split();
    let (tx, rx) = mpsc::channel::<ServerMessage>(OUTBOX_CAPACITY);
    let (id, _) = hub.lock().await.join(tx);

    // The hub owns the only sender: the writer ends when the connection
    // leaves or is evicted for not keeping up.
    let mut writer_task = tokio::spawn(write_messages(writer, rx));

    let finished = tokio::select! {
        read = read_messages(id, reader, &hub, &table) => Ok(read),
        written = &mut writer_task => Err(written),
    };
    hub.lock().await.leave(id);

    match finished {
        Ok(read) => {
            // Flushes whatever was queued before leaving.
            writer_task.await.context("writer task panicked")??;
            read
        }
        Err(written) => written.context("writer task panicked")?,
    }
}

async fn write_messages(
    mut writer: OwnedWriteHalf,
    mut rx: mpsc::Receiver<ServerMessage>,
) -> anyhow::Result<()> {
    while let Some(msg) = rx.recv().await {
        let json = serde_json::to_string(&msg)? + "\n";
        writer.write_all(json.as_bytes()).await?;
    }
    Ok(())
}

enum Line {
    Text(String),
    TooLong,
    Eof,
}

/// Next newline-terminated line, never buffering more than
/// `MAX_LINE_LENGTH + 1` bytes of it.
async fn next_line<R>(reader: &mut R, buf: &mut Vec<u8>) -> std::io::Result<Line>
where
    R: AsyncBufRead + Unpin,
{
    let limit = MAX_LINE_LENGTH as u64 + 1;
    buf.clear();
    if (&mut *reader).take(limit).read_until(b'\n', buf).await? == 0 {
        return Ok(Line::Eof);
    }
    if buf.last() == Some(&b'\n') || buf.len() <= MAX_LINE_LENGTH {
        return Ok(Line::Text(String::from_utf8_lossy(buf).into_owned()));
    }
    // Discard the rest of the oversized line.
    loop {
        buf.clear();
        let n = (&mut *reader).take(limit).read_until(b'\n', buf).await?;
        if n == 0 || buf.last() == Some(&b'\n') {
            return Ok(Line::TooLong);
        }
    }
}

async fn read_messages(
    id: ConnectionId,
    reader: OwnedReadHalf,
    hub: &Mutex<Hub>,
    table: &Arc<DifficultyTable>,
) -> anyhow::Result<()> {
    let mut reader = BufReader::new(reader);
    let mut buf = Vec::new();
    loop {
        let line = match next_line(&mut reader, &mut buf).await? {
            Line::Text(line) => line,
            Line::TooLong => {
                warn!(%id, max = MAX_LINE_LENGTH, "oversized message skipped");
                let reply = ServerMessage::error(format!(
                    "message longer than {MAX_LINE_LENGTH} bytes"
                ));
                hub.lock().await.send_to(id, reply);
                continue;
            }
            Line::Eof => return Ok(()),
        };
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let msg: ClientMessage = match serde_json::from_str(line) {
            Ok(msg) => msg,
            Err(err) => {
                warn!(%id, %err, "unreadable message");
                let reply = ServerMessage::error(format!("unreadable message: {err}"));
                hub.lock().await.send_to(id, reply);
                continue;
            }
        };
        debug!(%id, ?msg, "message received");

        match msg {
            ClientMessage::Move(request) => {
                hub.lock().await.submit_move(id, &request);
            }
            ClientMessage::AiMove(request) => {
                let table = Arc::clone(table);
                let reply = tokio::task::spawn_blocking(move || requests::ai_move(&table, &request))
                    .await
                    .unwrap_or_else(|e| ServerMessage::error(format!("ai search failed: {e}")));
                hub.lock().await.send_to(id, reply);
            }
            ClientMessage::VoiceCommand { command, fen } => {
                let reply = requests::voice_command(&command, &fen);
                hub.lock().await.send_to(id, reply);
            }
        }
    }
}
