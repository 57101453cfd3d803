//! Hosted Kernel Backend
//!
//! Runs the syscall path against a kernel living in another host process.
//! The "trap" becomes one packet exchange on a byte stream: the request
//! registers go out, the reply registers come back, in the layout described
//! in [`wire`].
//!
//! # Design
//! - One connection per client process, opened on first use
//! - The connection lock spans a full request/reply exchange
//! - A broken connection is dropped; the next call reconnects
//! - No retries and no timeouts: a blocked syscall blocks the caller

use std::io::{ErrorKind, Read, Write};
use std::net::TcpStream;
use std::sync::{Mutex, PoisonError};

use snafu::ResultExt;

use crate::syscall::{invoke, ArgVector, ResultVector, Trap, TrapFrame};

mod config;
mod error;
pub mod wire;

pub use config::{HostedConfig, DEFAULT_KERNEL_ADDRESS, KERNEL_ADDRESS_VAR};
pub use error::TransportError;

use error::{ConnectSnafu, DisconnectedSnafu, ReceiveSnafu, SendSnafu};

/// A link to a hosted kernel.
#[derive(Debug)]
pub struct HostedKernel<S = TcpStream> {
    stream: S,
}

impl HostedKernel<TcpStream> {
    /// Connect to the kernel described by `config`.
    pub fn connect(config: &HostedConfig) -> Result<Self, TransportError> {
        let stream = TcpStream::connect(config.address.as_str()).context(ConnectSnafu {
            address: config.address.clone(),
        })?;
        stream.set_nodelay(config.nodelay).context(ConnectSnafu {
            address: config.address.clone(),
        })?;
        log::debug!("connected to hosted kernel at {}", config.address);
        Ok(Self { stream })
    }
}

impl<S: Read + Write> HostedKernel<S> {
    /// Use an already-open stream.
    pub fn with_stream(stream: S) -> Self {
        Self { stream }
    }

    /// Give back the underlying stream.
    pub fn into_inner(self) -> S {
        self.stream
    }
}

impl<S: Read + Write> Trap for HostedKernel<S> {
    type Error = TransportError;

    fn trap(&mut self, frame: &mut TrapFrame) -> Result<(), TransportError> {
        log::trace!("hosted trap tag={:#x}", frame.tag());
        wire::write_packet(&mut self.stream, frame.regs()).context(SendSnafu)?;

        let reply = match wire::read_packet(&mut self.stream) {
            Ok(reply) => reply,
            Err(e) if e.kind() == ErrorKind::UnexpectedEof => return DisconnectedSnafu.fail(),
            Err(e) => return Err(e).context(ReceiveSnafu),
        };
        *frame.regs_mut() = reply;
        Ok(())
    }
}

static CONFIG: spin::Once<HostedConfig> = spin::Once::new();

static KERNEL: Mutex<Option<HostedKernel>> = Mutex::new(None);

/// Set the process-wide configuration.
///
/// Only the first configuration sticks, whether it came from here or from
/// [`HostedConfig::from_env`] on the first [`syscall`]. Returns the one in
/// effect.
pub fn configure(config: HostedConfig) -> &'static HostedConfig {
    CONFIG.call_once(|| config)
}

fn config() -> &'static HostedConfig {
    CONFIG.call_once(HostedConfig::from_env)
}

/// Trap into the hosted kernel over the process-wide connection.
pub fn syscall(args: &ArgVector) -> Result<ResultVector, TransportError> {
    let mut slot = KERNEL.lock().unwrap_or_else(PoisonError::into_inner);

    let mut kernel = match slot.take() {
        Some(kernel) => kernel,
        None => HostedKernel::connect(config())?,
    };

    match invoke(&mut kernel, args) {
        Ok(reply) => {
            *slot = Some(kernel);
            Ok(reply)
        }
        Err(e) => {
            log::warn!("dropping hosted kernel connection: {}", e);
            Err(e)
        }
    }
}
