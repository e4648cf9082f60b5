//! This module defines the generic traits that may
//! need to imported to use radio implementations.
//!
//! Since rustc only compiles objects that are used,
//! it is convenient to import these traits with the `*` syntax.
//!
//! ```
//! use nrf24::radio::prelude::*;
//! ```

use crate::types::{FifoState, Mode, Outcome, StatusFlags};
use crate::Packet;

use super::RadioConfig;

/// A trait to represent the one-time setup of a transceiver.
pub trait EsbInit {
    type ConfigErrorType;

    /// Write every configuration register from the given `config`.
    ///
    /// The radio is left inactive (CE pin LOW) in TX mode with all pipes closed
    /// and both FIFOs flushed. Open pipes with [`EsbPipe::set_rx_pipe()`] and
    /// pick a role with [`EsbMode::switch_mode()`] afterwards.
    ///
    /// Returns [`Outcome::Done`] if the CONFIG register reads back as written,
    /// otherwise [`Outcome::Failed`] (usually a wiring problem).
    /// Calling this again with the same `config` repeats exactly the same writes.
    fn init(&mut self, config: &RadioConfig) -> Result<Outcome, Self::ConfigErrorType>;
}

/// A trait to represent switching between the TX and RX roles.
pub trait EsbMode {
    type ModeErrorType;

    /// Switch the radio to the given `mode`, talking to the node `peer`
    /// (a node id on the configured network).
    ///
    /// - In TX mode, `peer` is the destination of [`EsbRadio::send()`].
    ///   The radio stays inactive until a payload is sent.
    /// - In RX mode, the radio starts listening immediately.
    ///
    /// If the radio already is in the requested `mode`, only the TX address is
    /// refreshed (TX) or nothing more happens (RX); the FIFOs are left alone.
    ///
    /// When auto-ack is configured, pipe 0 is always opened on the `peer`
    /// address so that ACK packets can be received while transmitting.
    fn switch_mode(&mut self, mode: Mode, peer: u16) -> Result<(), Self::ModeErrorType>;

    /// Read the current mode from the radio's CONFIG register.
    fn mode(&mut self) -> Result<Mode, Self::ModeErrorType>;
}

/// A trait to represent manipulation of data pipes
/// for an ESB capable transceiver.
pub trait EsbPipe {
    type PipeErrorType;

    /// Set the destination address used in TX mode to the node `node`
    /// on the configured network.
    fn set_tx_address(&mut self, node: u16) -> Result<(), Self::PipeErrorType>;

    /// Set the address that `pipe` listens on in RX mode.
    ///
    /// If the specified `pipe` is not in range [0, 5], then this function does nothing.
    ///
    /// ### About pipe addresses
    /// Pipes 0 and 1 will store a full 5-byte address. Pipes 2-5 will only store
    /// the least significant byte of `node`, borrowing the other 4 bytes from pipe 1.
    fn set_rx_address(&mut self, pipe: u8, node: u16) -> Result<(), Self::PipeErrorType>;

    /// Open (`enable = true`) or close a `pipe` for receiving.
    ///
    /// With auto-ack configured, the pipe's auto-ack feature follows `enable`.
    /// If the specified `pipe` is not in range [0, 5], then this function does nothing.
    fn set_rx_pipe(&mut self, pipe: u8, enable: bool) -> Result<(), Self::PipeErrorType>;
}

/// A trait to represent manipulation of [`StatusFlags`]
/// for an ESB capable transceiver.
pub trait EsbStatus {
    type StatusErrorType;

    /// Take a fresh snapshot of the STATUS register.
    fn status(&mut self) -> Result<StatusFlags, Self::StatusErrorType>;

    /// Clear the radio's IRQ status flags
    ///
    /// Set any member of [`StatusFlags`] to `true` to clear the corresponding
    /// interrupt event. Setting any member of [`StatusFlags`] to `false` will leave
    /// the corresponding status flag untouched.
    fn clear_status_flags(&mut self, flags: StatusFlags) -> Result<(), Self::StatusErrorType>;
}

/// A trait to represent manipulation of RX and TX FIFOs
/// for an ESB capable transceiver.
pub trait EsbFifo {
    type FifoErrorType;

    /// Flush the radio's RX FIFO.
    fn flush_rx(&mut self) -> Result<(), Self::FifoErrorType>;

    /// Flush the radio's TX FIFO.
    ///
    /// This function is automatically called by [`EsbRadio::send()`]
    /// after every attempt.
    fn flush_tx(&mut self) -> Result<(), Self::FifoErrorType>;

    /// Get the state of the specified FIFO.
    ///
    /// - Pass `true` to `about_tx` parameter to get the state of the TX FIFO.
    /// - Pass `false` to `about_tx` parameter to get the state of the RX FIFO.
    fn get_fifo_state(&mut self, about_tx: bool) -> Result<FifoState, Self::FifoErrorType>;
}

/// A trait to represent packet traffic of an ESB capable transceiver.
pub trait EsbRadio {
    type RadioErrorType;

    /// Transmit one payload and wait (a bounded number of polls) for the result.
    ///
    /// The radio must be in TX mode (see [`EsbMode::switch_mode()`]).
    ///
    /// - [`Outcome::Done`]: the payload was sent (and acknowledged if auto-ack is on).
    /// - [`Outcome::Failed`]: all auto-retries were used without an ACK.
    /// - [`Outcome::Timeout`]: neither event was observed in time.
    ///
    /// In every case the radio is left inactive, its TX flags are cleared
    /// and the TX FIFO is flushed. Failed payloads are not resent.
    fn send(&mut self, buf: &Packet) -> Result<Outcome, Self::RadioErrorType>;

    /// Fetch a received payload, if any.
    ///
    /// Returns the number of the pipe that received the payload copied into
    /// `buf`, or [`None`] if no payload was ready. The pending IRQ flags are
    /// cleared either way and the RX FIFO is flushed after each payload.
    fn receive(&mut self, buf: &mut Packet) -> Result<Option<u8>, Self::RadioErrorType>;
}

/// A trait to represent debug output of an ESB capable transceiver.
pub trait EsbDetails {
    type DetailsErrorType;

    /// Print details about the radio's current configuration.
    ///
    /// This function only prints output when the `std` or `defmt` feature is enabled.
    fn print_details(&mut self) -> Result<(), Self::DetailsErrorType>;
}
