//! This module defines types used by various traits.
//! These types are meant to be agnostic of the trait implementation.

use core::{
    fmt::{Display, Formatter, Result},
    write,
};

use bitfield_struct::bitfield;

/// Power Amplifier level. The units dBm (decibel-milliwatts or dB<sub>mW</sub>)
/// represents a logarithmic signal loss.
///
/// The labels match the output power of a Si24R1. On a genuine nRF24L01+
/// the two PA bits are `[2:1]` and bit 0 only toggles the LNA, so
/// [`PaLevel::Dbm7`] is the strongest setting on both chips.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PaLevel {
    /// 0 dBm
    Dbm0,
    /// 1 dBm
    Dbm1,
    /// 3 dBm
    Dbm3,
    /// 4 dBm
    Dbm4,
    /// 7 dBm
    Dbm7,
}

#[cfg(feature = "defmt")]
#[cfg(target_os = "none")]
impl defmt::Format for PaLevel {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            PaLevel::Dbm0 => defmt::write!(fmt, "0 dBm"),
            PaLevel::Dbm1 => defmt::write!(fmt, "1 dBm"),
            PaLevel::Dbm3 => defmt::write!(fmt, "3 dBm"),
            PaLevel::Dbm4 => defmt::write!(fmt, "4 dBm"),
            PaLevel::Dbm7 => defmt::write!(fmt, "7 dBm"),
        }
    }
}

impl PaLevel {
    pub(crate) const MASK: u8 = 7;

    pub(crate) const fn into_bits(self) -> u8 {
        match self {
            PaLevel::Dbm0 => 3,
            PaLevel::Dbm1 => 4,
            PaLevel::Dbm3 => 5,
            PaLevel::Dbm4 => 6,
            PaLevel::Dbm7 => 7,
        }
    }

    pub(crate) const fn from_bits(value: u8) -> Self {
        match value & Self::MASK {
            4 => PaLevel::Dbm1,
            5 => PaLevel::Dbm3,
            6 => PaLevel::Dbm4,
            7 => PaLevel::Dbm7,
            _ => PaLevel::Dbm0,
        }
    }
}

impl Display for PaLevel {
    fn fmt(&self, f: &mut Formatter) -> Result {
        match self {
            PaLevel::Dbm0 => write!(f, "0 dBm"),
            PaLevel::Dbm1 => write!(f, "1 dBm"),
            PaLevel::Dbm3 => write!(f, "3 dBm"),
            PaLevel::Dbm4 => write!(f, "4 dBm"),
            PaLevel::Dbm7 => write!(f, "7 dBm"),
        }
    }
}

/// How fast data moves through the air. Units are in bits per second (bps).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DataRate {
    /// represents 1 Mbps
    Mbps1,
    /// represents 2 Mbps
    Mbps2,
    /// represents 250 Kbps
    Kbps250,
}

impl DataRate {
    pub(crate) const MASK: u8 = 0x28;

    pub(crate) const fn into_bits(self) -> u8 {
        match self {
            DataRate::Mbps1 => 0,
            DataRate::Mbps2 => 0x8,
            DataRate::Kbps250 => 0x20,
        }
    }

    pub(crate) const fn from_bits(value: u8) -> Self {
        match value & Self::MASK {
            0x8 => DataRate::Mbps2,
            0x20 => DataRate::Kbps250,
            _ => DataRate::Mbps1,
        }
    }
}

#[cfg(feature = "defmt")]
#[cfg(target_os = "none")]
impl defmt::Format for DataRate {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            DataRate::Mbps1 => defmt::write!(fmt, "1 Mbps"),
            DataRate::Mbps2 => defmt::write!(fmt, "2 Mbps"),
            DataRate::Kbps250 => defmt::write!(fmt, "250 Kbps"),
        }
    }
}

impl Display for DataRate {
    fn fmt(&self, f: &mut Formatter) -> Result {
        match self {
            DataRate::Mbps1 => write!(f, "1 Mbps"),
            DataRate::Mbps2 => write!(f, "2 Mbps"),
            DataRate::Kbps250 => write!(f, "250 Kbps"),
        }
    }
}

/// The possible states of a FIFO.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FifoState {
    /// Represent the state of a FIFO when it is full.
    Full,
    /// Represent the state of a FIFO when it is empty.
    Empty,
    /// Represent the state of a FIFO when it is not full but not empty either.
    Occupied,
}

#[cfg(feature = "defmt")]
#[cfg(target_os = "none")]
impl defmt::Format for FifoState {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            FifoState::Empty => defmt::write!(fmt, "Empty"),
            FifoState::Full => defmt::write!(fmt, "Full"),
            FifoState::Occupied => defmt::write!(fmt, "Occupied"),
        }
    }
}

impl Display for FifoState {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            FifoState::Empty => write!(f, "Empty"),
            FifoState::Full => write!(f, "Full"),
            FifoState::Occupied => write!(f, "Occupied"),
        }
    }
}

/// The radio's primary operating mode, stored in bit 0 of the CONFIG register.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    /// Primary transmitter. Each packet is radiated by pulsing the CE pin.
    Tx,
    /// Primary receiver. The radio listens continuously while CE is high.
    Rx,
}

impl Mode {
    pub(crate) const MASK: u8 = 1;

    pub(crate) const fn into_bits(self) -> u8 {
        match self {
            Mode::Tx => 0,
            Mode::Rx => 1,
        }
    }

    pub(crate) const fn from_bits(value: u8) -> Self {
        if value & Self::MASK == 0 {
            Mode::Tx
        } else {
            Mode::Rx
        }
    }
}

#[cfg(feature = "defmt")]
#[cfg(target_os = "none")]
impl defmt::Format for Mode {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Mode::Tx => defmt::write!(fmt, "TX"),
            Mode::Rx => defmt::write!(fmt, "RX"),
        }
    }
}

impl Display for Mode {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Mode::Tx => write!(f, "TX"),
            Mode::Rx => write!(f, "RX"),
        }
    }
}

/// The result of an operation that the radio hardware can complete or refuse.
///
/// These are not errors of the SPI bus or the CE pin; those are reported
/// through [`Nrf24Error`](crate::radio::Nrf24Error).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// The operation succeeded.
    Done,
    /// The radio reported failure: the CONFIG register did not read back as
    /// written, or a transmission exhausted its auto-retries.
    Failed,
    /// No definitive signal arrived within the configured number of polls.
    Timeout,
}

impl Outcome {
    /// Is this [`Outcome::Done`]?
    pub const fn is_done(&self) -> bool {
        matches!(self, Outcome::Done)
    }
}

#[cfg(feature = "defmt")]
#[cfg(target_os = "none")]
impl defmt::Format for Outcome {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Outcome::Done => defmt::write!(fmt, "Done"),
            Outcome::Failed => defmt::write!(fmt, "Failed"),
            Outcome::Timeout => defmt::write!(fmt, "Timeout"),
        }
    }
}

impl Display for Outcome {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Outcome::Done => write!(f, "Done"),
            Outcome::Failed => write!(f, "Failed"),
            Outcome::Timeout => write!(f, "Timeout"),
        }
    }
}

/// A 5 byte pipe address composed of a network id and a node id.
///
/// On the air (and over SPI) the address is sent least significant byte first:
///
/// | byte | value |
/// |:----:|-------|
/// | 0 | node id (LSB) |
/// | 1 | node id (MSB) |
/// | 2 | network id (LSB) |
/// | 3 | network id (MSB) |
/// | 4 | [`Address::BROADCAST_BYTE`] |
///
/// Pipes 2 - 5 only store byte 0; the rest is shared with pipe 1.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Address {
    pub network_id: u16,
    pub node_id: u16,
}

impl Address {
    /// The fixed most significant byte of every address.
    pub const BROADCAST_BYTE: u8 = 0xE7;

    pub const fn new(network_id: u16, node_id: u16) -> Self {
        Self {
            network_id,
            node_id,
        }
    }

    /// The network id placed above the 16 bit node id.
    pub const fn prefix(&self) -> u32 {
        (self.network_id as u32) << 16
    }

    pub const fn into_bytes(self) -> [u8; 5] {
        let lsb = (self.prefix() | self.node_id as u32).to_le_bytes();
        [lsb[0], lsb[1], lsb[2], lsb[3], Self::BROADCAST_BYTE]
    }

    /// Rebuild an address from its wire form.
    ///
    /// Returns [`None`] if the last byte is not [`Address::BROADCAST_BYTE`].
    pub const fn from_bytes(bytes: &[u8; 5]) -> Option<Self> {
        if bytes[4] != Self::BROADCAST_BYTE {
            return None;
        }
        Some(Self {
            node_id: u16::from_le_bytes([bytes[0], bytes[1]]),
            network_id: u16::from_le_bytes([bytes[2], bytes[3]]),
        })
    }
}

#[cfg(feature = "defmt")]
#[cfg(target_os = "none")]
impl defmt::Format for Address {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(
            fmt,
            "Address network: {=u16:#X}, node: {=u16:#X}",
            self.network_id,
            self.node_id
        )
    }
}

impl Display for Address {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(
            f,
            "{:#04X}{:04X}{:04X}",
            Self::BROADCAST_BYTE,
            self.network_id,
            self.node_id
        )
    }
}

/// A snapshot of the STATUS register.
///
/// Every SPI transaction returns this byte first. The driver never caches it;
/// use [`EsbStatus::status()`](fn@crate::radio::prelude::EsbStatus::status)
/// to take a fresh snapshot.
///
/// To instantiate an object with flags that have different values:
/// ```
/// use nrf24::StatusFlags;
/// let flags = StatusFlags::default() // all flags are false
///     .with_rx_dr(true); // assert only `rx_dr` flags
/// ```
/// Use [`StatusFlags::default`] to instantiate all flags set to false.
/// Use [`StatusFlags::new`] to instantiate all flags set to true.
#[bitfield(u8, new = false, order = Msb)]
pub struct StatusFlags {
    #[bits(1)]
    _padding: u8,

    /// A flag to describe if RX Data Ready to read.
    #[bits(1, access = RO)]
    pub rx_dr: bool,

    /// A flag to describe if TX Data Sent.
    #[bits(1, access = RO)]
    pub tx_ds: bool,

    /// A flag to describe if TX Data Failed (auto-retries exhausted).
    #[bits(1, access = RO)]
    pub tx_df: bool,

    /// The pipe that received the payload at the top of the RX FIFO.
    ///
    /// Values 6 and 7 mean the RX FIFO holds no valid payload.
    #[bits(3, access = RO)]
    pub rx_pipe: u8,

    /// A flag to describe if the TX FIFO is full.
    #[bits(1, access = RO)]
    pub tx_full: bool,
}

#[cfg(feature = "defmt")]
#[cfg(target_os = "none")]
impl defmt::Format for StatusFlags {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(
            fmt,
            "StatusFlags rx_dr: {}, tx_ds: {}, tx_df: {}, rx_pipe: {}",
            self.rx_dr(),
            self.tx_ds(),
            self.tx_df(),
            self.rx_pipe()
        )
    }
}

impl StatusFlags {
    /// A mask to isolate only the IRQ flags. Useful for STATUS and CONFIG registers.
    pub(crate) const IRQ_MASK: u8 = 0x70;

    /// A mask to isolate the flags that end a transmission.
    pub(crate) const TX_EVENT_MASK: u8 = 0x30;

    /// A convenience constructor similar to [`StatusFlags::default`] except
    /// all fields are set to `true`.
    pub fn new() -> Self {
        Self::from_bits(Self::IRQ_MASK)
    }

    /// A flag to describe if RX Data Ready to read.
    pub fn with_rx_dr(self, flag: bool) -> Self {
        let new_val = self.into_bits() & !(1 << Self::RX_DR_OFFSET);
        Self::from_bits(new_val | ((flag as u8) << Self::RX_DR_OFFSET))
    }

    /// A flag to describe if TX Data Sent.
    pub fn with_tx_ds(self, flag: bool) -> Self {
        let new_val = self.into_bits() & !(1 << Self::TX_DS_OFFSET);
        Self::from_bits(new_val | ((flag as u8) << Self::TX_DS_OFFSET))
    }

    /// A flag to describe if TX Data Failed.
    pub fn with_tx_df(self, flag: bool) -> Self {
        let new_val = self.into_bits() & !(1 << Self::TX_DF_OFFSET);
        Self::from_bits(new_val | ((flag as u8) << Self::TX_DF_OFFSET))
    }

    /// Has the current transmission ended (either sent or failed)?
    pub const fn tx_finished(&self) -> bool {
        self.into_bits() & Self::TX_EVENT_MASK != 0
    }

    /// The pipe holding a received payload, if the number is a valid pipe.
    pub const fn valid_rx_pipe(&self) -> Option<u8> {
        let pipe = self.rx_pipe();
        if pipe < 6 {
            Some(pipe)
        } else {
            None
        }
    }
}

impl Display for StatusFlags {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(
            f,
            "StatusFlags rx_dr: {}, tx_ds: {}, tx_df: {}",
            self.rx_dr(),
            self.tx_ds(),
            self.tx_df()
        )
    }
}
