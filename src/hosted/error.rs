//! Hosted Transport Errors
//!
//! These describe a broken link to the hosted kernel. A syscall the kernel
//! rejects is still a successful transfer and comes back as reply words.

use snafu::Snafu;

/// Failure to move a packet to or from the hosted kernel.
#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum TransportError {
    #[snafu(display("unable to connect to kernel at {}: {}", address, source))]
    Connect {
        address: String,
        source: std::io::Error,
    },

    #[snafu(display("unable to send syscall to kernel: {}", source))]
    Send { source: std::io::Error },

    #[snafu(display("unable to receive reply from kernel: {}", source))]
    Receive { source: std::io::Error },

    #[snafu(display("kernel closed the connection"))]
    Disconnected,
}
