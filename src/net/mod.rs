//! Network layer: request builders for the auth service and the transport
//! that carries them.

pub mod api;
pub mod transport;
