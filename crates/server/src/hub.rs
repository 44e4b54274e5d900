//! The shared session plus one outbound queue per connection.
//!
//! Every method is synchronous: the caller holds the lock for the whole
//! call and nothing inside awaits. Queues are bounded; a client that lets
//! its queue fill up is evicted rather than buffered without limit.

use std::collections::HashMap;

use chess_session::{ConnectionId, MoveRequest, Outbound, Role, ServerMessage, Session, Target};
use tokio::sync::mpsc::{self, error::TrySendError};
use tracing::{info, warn};

/// Messages a connection may have waiting before it is dropped.
pub const OUTBOX_CAPACITY: usize = 256;

pub type Outlet = mpsc::Sender<ServerMessage>;

#[derive(Debug, Default)]
pub struct Hub {
    session: Session,
    outlets: HashMap<ConnectionId, Outlet>,
    next_id: u64,
}

impl Hub {
    pub fn new(session: Session) -> Self {
        Self {
            session,
            ..Self::default()
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Register a connection and tell it its role.
    pub fn join(&mut self, outlet: Outlet) -> (ConnectionId, Role) {
        self.next_id += 1;
        let id = ConnectionId(self.next_id);
        let role = self.session.connect(id);
        let greeting = match role {
            Role::Player(seat) => ServerMessage::PlayerRole { seat },
            Role::Spectator => ServerMessage::SpectatorRole,
        };
        self.outlets.insert(id, outlet);
        info!(%id, ?role, "client joined");
        self.deliver(vec![Outbound::only(id, greeting)]);
        (id, role)
    }

    pub fn leave(&mut self, id: ConnectionId) {
        self.outlets.remove(&id);
        match self.session.disconnect(id) {
            Some(seat) => info!(%id, %seat, "player left"),
            None => info!(%id, "client left"),
        }
    }

    pub fn is_connected(&self, id: ConnectionId) -> bool {
        self.outlets.contains_key(&id)
    }

    pub fn submit_move(&mut self, id: ConnectionId, request: &MoveRequest) {
        let out = self.session.submit_move(id, request);
        self.deliver(out);
    }

    /// Queue a private reply.
    pub fn send_to(&mut self, id: ConnectionId, message: ServerMessage) {
        self.deliver(vec![Outbound::only(id, message)]);
    }

    /// Queue messages. A closed queue means its connection is shutting
    /// down and `leave` will follow, so the message is dropped. A full
    /// queue gets its connection evicted.
    fn deliver(&mut self, out: Vec<Outbound>) {
        let mut stalled = Vec::new();
        for Outbound { target, message } in out {
            match target {
                Target::All => {
                    for (&id, outlet) in &self.outlets {
                        if !push(outlet, message.clone()) {
                            stalled.push(id);
                        }
                    }
                }
                Target::Only(id) => {
                    if let Some(outlet) = self.outlets.get(&id) {
                        if !push(outlet, message) {
                            stalled.push(id);
                        }
                    }
                }
            }
        }
        for id in stalled {
            self.evict(id);
        }
    }

    /// Drop a connection's queue and seat. Its writer ends once the queue
    /// drains, which closes the socket.
    fn evict(&mut self, id: ConnectionId) {
        if self.outlets.remove(&id).is_none() {
            return;
        }
        let seat = self.session.disconnect(id);
        warn!(%id, ?seat, "outbound queue full, client evicted");
    }
}

/// False only when the queue is full.
fn push(outlet: &Outlet, message: ServerMessage) -> bool {
    !matches!(outlet.try_send(message), Err(TrySendError::Full(_)))
}

#[cfg(test)]
#[path = "hub_tests.rs"]
mod hub_tests;
