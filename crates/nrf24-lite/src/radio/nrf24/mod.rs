use core::convert::Infallible;
use embedded_hal::{digital::OutputPin, spi::SpiDevice};
pub(crate) mod bit_fields;
mod constants;
mod details;
mod fifo;
mod init;
mod mode;
mod pipe;
mod radio;
mod status;
pub use constants::{commands, mnemonics, registers};

use super::{CompletionFlag, NoIrq, RadioConfig};
use crate::{Address, DataRate, PaLevel, StatusFlags, PAYLOAD_LENGTH};

/// An collection of error types to describe hardware malfunctions.
///
/// These only describe failures of the SPI bus, the CE pin or the completion
/// flag. Outcomes reported by the radio itself are described by
/// [`Outcome`](crate::Outcome).
///
/// The `IRQ` error is [`Infallible`] for radios that poll the STATUS register.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Nrf24Error<SPI, DO, IRQ = Infallible> {
    /// Represents a SPI transaction error.
    Spi(SPI),
    /// Represents a DigitalOutput error.
    Gpo(DO),
    /// Represents a DigitalInput error (reading the completion flag).
    Gpi(IRQ),
}

/// This struct implements the [`Esb*` traits](mod@crate::radio::prelude)
/// for the nRF24L01 transceiver.
///
/// Each instance owns one radio: its SPI device, its CE pin, the optional
/// completion flag and the configured network id. There is no global state,
/// so several radios can be driven side by side.
///
/// The driver is not re-entrant. If the RX path runs from an interrupt
/// handler while the main loop transmits, both must go through the same lock.
pub struct Nrf24<SPI, DO, IRQ = NoIrq> {
    /// The CE pin for the radio.
    ///
    /// This really only exposed for advanced manipulation of active TX mode.
    /// It is strongly recommended to change roles using
    /// [`EsbMode::switch_mode()`](fn@crate::radio::prelude::EsbMode::switch_mode)
    /// because it guarantees proper radio usage.
    pub ce_pin: DO,
    _spi: SPI,
    _irq: Option<IRQ>,
    _buf: [u8; PAYLOAD_LENGTH + 1],
    _config: RadioConfig,
}

impl<SPI, DO> Nrf24<SPI, DO, NoIrq>
where
    SPI: SpiDevice,
    DO: OutputPin,
{
    /// Instantiate a [`Nrf24`] object for use on the specified
    /// `spi` bus with the given `ce_pin`.
    ///
    /// The radio's CSN pin (aka Chip Select pin) shall be defined
    /// when instantiating the [`SpiDevice`](trait@embedded_hal::spi::SpiDevice)
    /// object (passed to the `spi` parameter).
    ///
    /// This radio masks all IRQ events and learns about finished
    /// transmissions by polling the STATUS register.
    pub fn new(ce_pin: DO, spi: SPI) -> Nrf24<SPI, DO, NoIrq> {
        Nrf24 {
            ce_pin,
            _spi: spi,
            _irq: None,
            _buf: [0u8; PAYLOAD_LENGTH + 1],
            _config: RadioConfig::default(),
        }
    }
}

impl<SPI, DO, IRQ> Nrf24<SPI, DO, IRQ>
where
    SPI: SpiDevice,
    DO: OutputPin,
    IRQ: CompletionFlag,
{
    /// Like [`Nrf24::new()`], but this radio routes all IRQ events to its IRQ
    /// pin and waits on `irq` to learn about finished transmissions.
    ///
    /// See [`CompletionFlag`] for the available flags.
    pub fn with_irq(ce_pin: DO, spi: SPI, irq: IRQ) -> Nrf24<SPI, DO, IRQ> {
        Nrf24 {
            ce_pin,
            _spi: spi,
            _irq: Some(irq),
            _buf: [0u8; PAYLOAD_LENGTH + 1],
            _config: RadioConfig::default(),
        }
    }

    /// Does this radio wait on an IRQ (instead of polling the STATUS register)?
    pub fn uses_irq(&self) -> bool {
        self._irq.is_some()
    }

    /// Exchange the first `len` bytes of the internal buffer in one
    /// chip-select framed transaction.
    ///
    /// The first byte clocked out of the radio is always the STATUS register.
    fn spi_transfer(
        &mut self,
        len: usize,
    ) -> Result<StatusFlags, Nrf24Error<SPI::Error, DO::Error, IRQ::Error>> {
        self._spi
            .transfer_in_place(&mut self._buf[..len])
            .map_err(Nrf24Error::Spi)?;
        Ok(StatusFlags::from_bits(self._buf[0]))
    }

    /// Send `command` followed by `len` dummy bytes.
    ///
    /// The `len` bytes returned are left in `self._buf[1..=len]`.
    /// This is also used to write SPI commands that consist of 1 byte:
    /// ```ignore
    /// let status = self.spi_read(0, commands::NOP)?;
    /// ```
    fn spi_read(
        &mut self,
        len: usize,
        command: u8,
    ) -> Result<StatusFlags, Nrf24Error<SPI::Error, DO::Error, IRQ::Error>> {
        self._buf[0] = command;
        self._buf[1..=len].fill(0);
        self.spi_transfer(len + 1)
    }

    fn read_register(
        &mut self,
        register: u8,
    ) -> Result<u8, Nrf24Error<SPI::Error, DO::Error, IRQ::Error>> {
        self.spi_read(1, register)?;
        Ok(self._buf[1])
    }

    /// Write a single byte command. The radio's reply is its STATUS register.
    fn write_command(
        &mut self,
        command: u8,
    ) -> Result<StatusFlags, Nrf24Error<SPI::Error, DO::Error, IRQ::Error>> {
        self.spi_read(0, command)
    }

    fn spi_write_byte(
        &mut self,
        register: u8,
        byte: u8,
    ) -> Result<(), Nrf24Error<SPI::Error, DO::Error, IRQ::Error>> {
        self._buf[0] = register | commands::W_REGISTER;
        self._buf[1] = byte;
        self.spi_transfer(2)?;
        Ok(())
    }

    /// Write `buf` to consecutive bytes of a multi-byte `register`, in order.
    fn spi_write_buf(
        &mut self,
        register: u8,
        buf: &[u8],
    ) -> Result<(), Nrf24Error<SPI::Error, DO::Error, IRQ::Error>> {
        self._buf[0] = register | commands::W_REGISTER;
        let buf_len = buf.len();
        self._buf[1..(buf_len + 1)].copy_from_slice(buf);
        self.spi_transfer(buf_len + 1)?;
        Ok(())
    }

    /// The upper bytes shared by every address on the configured network.
    pub fn address_prefix(&self) -> u32 {
        self.address(0).prefix()
    }

    /// The full address of `node` on the configured network.
    pub fn address(&self, node: u16) -> Address {
        Address::new(self._config.network_id(), node)
    }

    /// The configuration given to the last call of
    /// [`init()`](fn@crate::radio::prelude::EsbInit::init).
    pub fn config(&self) -> &RadioConfig {
        &self._config
    }

    /// Is the received signal stronger than -64 dBm?
    pub fn rpd(&mut self) -> Result<bool, Nrf24Error<SPI::Error, DO::Error, IRQ::Error>> {
        Ok(self.read_register(registers::RPD)? & 1 == 1)
    }

    /// Get the radio's currently selected channel.
    pub fn channel(&mut self) -> Result<u8, Nrf24Error<SPI::Error, DO::Error, IRQ::Error>> {
        self.read_register(registers::RF_CH)
    }

    /// Get the radio's currently configured data rate.
    pub fn data_rate(
        &mut self,
    ) -> Result<DataRate, Nrf24Error<SPI::Error, DO::Error, IRQ::Error>> {
        Ok(DataRate::from_bits(self.read_register(registers::RF_SETUP)?))
    }

    /// Get the radio's currently configured PA level.
    pub fn pa_level(
        &mut self,
    ) -> Result<PaLevel, Nrf24Error<SPI::Error, DO::Error, IRQ::Error>> {
        Ok(PaLevel::from_bits(self.read_register(registers::RF_SETUP)?))
    }
}
