#![doc = include_str!("../README.md")]
//!
//! ## Basic API
//!
//! - [`Nrf24::new()`](fn@crate::radio::Nrf24::new)
//! - [`Nrf24::with_irq()`](fn@crate::radio::Nrf24::with_irq)
//! - [`Nrf24::init()`](radio/struct.Nrf24.html#method.init)
//! - [`Nrf24::switch_mode()`](radio/struct.Nrf24.html#method.switch_mode)
//! - [`Nrf24::mode()`](radio/struct.Nrf24.html#method.mode)
//! - [`Nrf24::send()`](radio/struct.Nrf24.html#method.send)
//! - [`Nrf24::receive()`](radio/struct.Nrf24.html#method.receive)
//!
//! ## Addressing API
//!
//! - [`Nrf24::set_tx_address()`](radio/struct.Nrf24.html#method.set_tx_address)
//! - [`Nrf24::set_rx_address()`](radio/struct.Nrf24.html#method.set_rx_address)
//! - [`Nrf24::set_rx_pipe()`](radio/struct.Nrf24.html#method.set_rx_pipe)
//! - [`Nrf24::address()`](fn@crate::radio::Nrf24::address)
//! - [`Nrf24::address_prefix()`](fn@crate::radio::Nrf24::address_prefix)
//!
//! ## Advanced API
//!
//! - [`Nrf24::status()`](radio/struct.Nrf24.html#method.status)
//! - [`Nrf24::clear_status_flags()`](radio/struct.Nrf24.html#method.clear_status_flags)
//! - [`Nrf24::flush_rx()`](radio/struct.Nrf24.html#method.flush_rx)
//! - [`Nrf24::flush_tx()`](radio/struct.Nrf24.html#method.flush_tx)
//! - [`Nrf24::get_fifo_state()`](radio/struct.Nrf24.html#method.get_fifo_state)
//! - [`Nrf24::rpd()`](fn@crate::radio::Nrf24::rpd)
//! - [`Nrf24::channel()`](fn@crate::radio::Nrf24::channel)
//! - [`Nrf24::print_details()`](radio/struct.Nrf24.html#method.print_details)
//!
#![no_std]

mod log;
mod types;
pub use types::{Address, DataRate, FifoState, Mode, Outcome, PaLevel, StatusFlags};
pub mod radio;

/// The fixed length (in bytes) of every payload sent or received.
pub const PAYLOAD_LENGTH: usize = 32;

/// A buffer holding exactly one payload.
pub type Packet = [u8; PAYLOAD_LENGTH];

#[cfg(test)]
mod test {
    use crate::radio::{IrqPin, NoIrq, Nrf24};
    use embedded_hal_mock::eh1::{
        digital::{Mock as PinMock, Transaction as PinTransaction},
        spi::{Mock as SpiMock, Transaction as SpiTransaction},
    };

    /// Takes an indefinite repetition of a tuple of 2 vectors: `(expected_data, response_data)`
    /// and generates an array of `SpiTransaction`s.
    ///
    /// NOTE: This macro is only used to generate code in unit tests (for this crate only).
    #[macro_export]
    macro_rules! spi_test_expects {
        ($( ($expected:expr , $response:expr $(,)? ) , ) + ) => {
            [
                $(
                    SpiTransaction::transaction_start(),
                    SpiTransaction::transfer_in_place($expected, $response),
                    SpiTransaction::transaction_end(),
                )*
            ]
        }
    }

    /// A tuple struct to encapsulate objects used to mock a polling [`Nrf24`].
    pub struct MockRadio(
        pub Nrf24<SpiMock<u8>, PinMock, NoIrq>,
        pub SpiMock<u8>,
        pub PinMock,
    );

    /// Create a polling radio from the given CE pin and SPI expectations.
    pub fn mk_radio(
        ce_expectations: &[PinTransaction],
        spi_expectations: &[SpiTransaction<u8>],
    ) -> MockRadio {
        let spi = SpiMock::new(spi_expectations);
        let ce_pin = PinMock::new(ce_expectations);
        let radio = Nrf24::new(ce_pin.clone(), spi.clone());
        MockRadio(radio, spi, ce_pin)
    }

    /// A tuple struct to encapsulate objects used to mock an IRQ driven [`Nrf24`].
    pub struct MockIrqRadio(
        pub Nrf24<SpiMock<u8>, PinMock, IrqPin<PinMock>>,
        pub SpiMock<u8>,
        pub PinMock,
        pub PinMock,
    );

    /// Like [`mk_radio()`], but the radio waits on a mocked IRQ pin.
    pub fn mk_irq_radio(
        ce_expectations: &[PinTransaction],
        irq_expectations: &[PinTransaction],
        spi_expectations: &[SpiTransaction<u8>],
    ) -> MockIrqRadio {
        let spi = SpiMock::new(spi_expectations);
        let ce_pin = PinMock::new(ce_expectations);
        let irq_pin = PinMock::new(irq_expectations);
        let radio = Nrf24::with_irq(ce_pin.clone(), spi.clone(), IrqPin(irq_pin.clone()));
        MockIrqRadio(radio, spi, ce_pin, irq_pin)
    }
}
