//! Turn/Session Arbitrator
//!
//! Binds connections to the White and Black seats, lets only the seat to
//! move submit moves, and turns each decision into messages for clients.
//! Transport is somebody else's job.

pub mod protocol;
pub mod seat;
pub mod session;

pub use protocol::{ClientMessage, MoveRequest, ServerMessage};
pub use seat::{ConnectionId, Role, Seat, SeatState};
pub use session::{Outbound, Session, Target};
