//! Control-system access for accelerator fields.
//!
//! Three layers:
//! - [`Channel`]: the raw transport (batched get/put with a timeout). Any
//!   call may fail per endpoint.
//! - [`ControlSystem`]: the contract devices consume. Single-endpoint
//!   failures are recovered here (`None` on read, logged no-op on write);
//!   a failed batch write is one aggregate [`CsError::BatchWrite`].
//! - [`Device`]: one field's readback/setpoint endpoint pair plus an
//!   enabled flag.
//!
//! The asymmetry between single writes (silently recovered) and batch writes
//! (aggregate error) matches the established channel-access behaviour and is
//! kept deliberately; it may be an accident of history rather than a design
//! decision, so callers should not rely on single writes reporting failure.

pub mod channel;
pub mod config;
pub mod control_system;
pub mod device;
pub mod error;

pub use channel::{Channel, ChannelError, InMemoryChannel};
pub use config::CsConfig;
pub use control_system::{ChannelControlSystem, ControlSystem};
pub use device::Device;
pub use error::{CsError, CsResult};
