use embedded_hal::{digital::OutputPin, spi::SpiDevice};

use crate::{
    log::trace,
    radio::{
        prelude::{EsbFifo, EsbMode, EsbPipe},
        CompletionFlag, Nrf24, Nrf24Error,
    },
    Mode,
};

use super::{bit_fields::Config, registers};

impl<SPI, DO, IRQ> EsbMode for Nrf24<SPI, DO, IRQ>
where
    SPI: SpiDevice,
    DO: OutputPin,
    IRQ: CompletionFlag,
{
    type ModeErrorType = Nrf24Error<SPI::Error, DO::Error, IRQ::Error>;

    fn switch_mode(&mut self, mode: Mode, peer: u16) -> Result<(), Self::ModeErrorType> {
        self.ce_pin.set_low().map_err(Nrf24Error::Gpo)?;
        let config = Config::from_bits(self.read_register(registers::CONFIG)?);
        let ack = self._config.auto_ack();

        // ACK packets from the peer arrive on pipe 0, in either role
        if ack {
            self.set_rx_address(0, peer)?;
            self.set_rx_pipe(0, true)?;
        }

        if config.mode() == mode {
            trace!("mode unchanged (RX: {=bool})", mode == Mode::Rx);
            if mode == Mode::Tx {
                self.set_tx_address(peer)?;
            }
            return Ok(());
        }

        match mode {
            Mode::Tx => {
                if !ack {
                    self.set_rx_pipe(0, false)?;
                }
                self.set_tx_address(peer)?;
                self.spi_write_byte(registers::CONFIG, config.with_mode(mode).into_bits())?;
            }
            Mode::Rx => {
                if !ack {
                    self.set_rx_pipe(0, true)?;
                }
                self.spi_write_byte(registers::CONFIG, config.with_mode(mode).into_bits())?;
                self.flush_rx()?;
                self.ce_pin.set_high().map_err(Nrf24Error::Gpo)?;
            }
        }
        Ok(())
    }

    fn mode(&mut self) -> Result<Mode, Self::ModeErrorType> {
        Ok(Mode::from_bits(self.read_register(registers::CONFIG)?))
    }
}

/////////////////////////////////////////////////////////////////////////////////
/// unit tests
#[cfg(test)]
mod test {
    extern crate std;
    use super::{registers, EsbMode};
    use crate::{
        radio::{commands, RadioConfig},
        spi_test_expects,
        test::mk_radio,
        Mode,
    };
    use embedded_hal_mock::eh1::{
        digital::{State as PinState, Transaction as PinTransaction},
        spi::Transaction as SpiTransaction,
    };
    use std::vec;

    const TX_ADDR_WRITE: u8 = registers::TX_ADDR | commands::W_REGISTER;
    const P0_ADDR_WRITE: u8 = registers::RX_ADDR_P0 | commands::W_REGISTER;

    #[test]
    pub fn get_mode() {
        let spi_expectations = spi_test_expects![
            (vec![registers::CONFIG, 0u8], vec![0xEu8, 0x7Fu8]),
            (vec![registers::CONFIG, 0u8], vec![0xEu8, 0x7Eu8]),
        ];
        let mocks = mk_radio(&[], &spi_expectations);
        let (mut radio, mut spi, mut ce_pin) = (mocks.0, mocks.1, mocks.2);
        assert_eq!(radio.mode().unwrap(), Mode::Rx);
        assert_eq!(radio.mode().unwrap(), Mode::Tx);
        spi.done();
        ce_pin.done();
    }

    #[test]
    pub fn tx_to_rx() {
        let spi_expectations = spi_test_expects![
            (vec![registers::CONFIG, 0u8], vec![0xEu8, 0x7Eu8]),
            // open pipe 0
            (vec![registers::EN_RXADDR, 0u8], vec![0xEu8, 0u8]),
            (
                vec![registers::EN_RXADDR | commands::W_REGISTER, 1u8],
                vec![0xEu8, 0u8],
            ),
            (
                vec![registers::CONFIG | commands::W_REGISTER, 0x7Fu8],
                vec![0xEu8, 0u8],
            ),
            (vec![commands::FLUSH_RX], vec![0xEu8]),
        ];
        let ce_expectations = [
            PinTransaction::set(PinState::Low),
            PinTransaction::set(PinState::High),
        ];
        let mocks = mk_radio(&ce_expectations, &spi_expectations);
        let (mut radio, mut spi, mut ce_pin) = (mocks.0, mocks.1, mocks.2);
        radio.switch_mode(Mode::Rx, 2).unwrap();
        spi.done();
        ce_pin.done();
    }

    #[test]
    pub fn rx_to_tx() {
        let spi_expectations = spi_test_expects![
            (vec![registers::CONFIG, 0u8], vec![0xEu8, 0x7Fu8]),
            // close pipe 0
            (vec![registers::EN_RXADDR, 0u8], vec![0xEu8, 3u8]),
            (
                vec![registers::EN_RXADDR | commands::W_REGISTER, 2u8],
                vec![0xEu8, 0u8],
            ),
            (
                vec![TX_ADDR_WRITE, 2u8, 0u8, 0u8, 0u8, 0xE7],
                vec![0xEu8, 0u8, 0u8, 0u8, 0u8, 0u8],
            ),
            (
                vec![registers::CONFIG | commands::W_REGISTER, 0x7Eu8],
                vec![0xEu8, 0u8],
            ),
        ];
        let mocks = mk_radio(&[PinTransaction::set(PinState::Low)], &spi_expectations);
        let (mut radio, mut spi, mut ce_pin) = (mocks.0, mocks.1, mocks.2);
        radio.switch_mode(Mode::Tx, 2).unwrap();
        spi.done();
        ce_pin.done();
    }

    #[test]
    pub fn repeated_switch() {
        let spi_expectations = spi_test_expects![
            // already in TX mode: only the TX address is refreshed
            (vec![registers::CONFIG, 0u8], vec![0xEu8, 0x7Eu8]),
            (
                vec![TX_ADDR_WRITE, 3u8, 0u8, 0u8, 0u8, 0xE7],
                vec![0xEu8, 0u8, 0u8, 0u8, 0u8, 0u8],
            ),
            (vec![registers::CONFIG, 0u8], vec![0xEu8, 0x7Eu8]),
            (
                vec![TX_ADDR_WRITE, 3u8, 0u8, 0u8, 0u8, 0xE7],
                vec![0xEu8, 0u8, 0u8, 0u8, 0u8, 0u8],
            ),
            // already in RX mode: nothing more is written
            (vec![registers::CONFIG, 0u8], vec![0xEu8, 0x7Fu8]),
            (vec![registers::CONFIG, 0u8], vec![0xEu8, 0x7Fu8]),
        ];
        let ce_expectations = [
            PinTransaction::set(PinState::Low),
            PinTransaction::set(PinState::Low),
            PinTransaction::set(PinState::Low),
            PinTransaction::set(PinState::Low),
        ];
        let mocks = mk_radio(&ce_expectations, &spi_expectations);
        let (mut radio, mut spi, mut ce_pin) = (mocks.0, mocks.1, mocks.2);
        radio.switch_mode(Mode::Tx, 3).unwrap();
        radio.switch_mode(Mode::Tx, 3).unwrap();
        radio.switch_mode(Mode::Rx, 3).unwrap();
        radio.switch_mode(Mode::Rx, 3).unwrap();
        spi.done();
        ce_pin.done();
    }

    #[test]
    pub fn repeated_switch_with_ack() {
        let mut spi_expectations = vec![];
        for config in [0x7Eu8, 0x7Fu8] {
            spi_expectations.extend(spi_test_expects![
                (vec![registers::CONFIG, 0u8], vec![0xEu8, config]),
                // pipe 0 is rebound to the peer every time
                (
                    vec![P0_ADDR_WRITE, 3u8, 0u8, 0u8, 0u8, 0xE7],
                    vec![0xEu8, 0u8, 0u8, 0u8, 0u8, 0u8],
                ),
                (vec![registers::EN_AA, 0u8], vec![0xEu8, 1u8]),
                (
                    vec![registers::EN_AA | commands::W_REGISTER, 1u8],
                    vec![0xEu8, 0u8],
                ),
                (vec![registers::EN_RXADDR, 0u8], vec![0xEu8, 1u8]),
                (
                    vec![registers::EN_RXADDR | commands::W_REGISTER, 1u8],
                    vec![0xEu8, 0u8],
                ),
            ]);
            if config == 0x7E {
                spi_expectations.extend(spi_test_expects![(
                    vec![TX_ADDR_WRITE, 3u8, 0u8, 0u8, 0u8, 0xE7],
                    vec![0xEu8, 0u8, 0u8, 0u8, 0u8, 0u8],
                ),]);
            }
        }
        // CONFIG is never written and CE stays low
        let ce_expectations = [
            PinTransaction::set(PinState::Low),
            PinTransaction::set(PinState::Low),
        ];
        let mocks = mk_radio(&ce_expectations, &spi_expectations);
        let (mut radio, mut spi, mut ce_pin) = (mocks.0, mocks.1, mocks.2);
        radio._config = RadioConfig::default().with_auto_ack(true);
        radio.switch_mode(Mode::Tx, 3).unwrap();
        radio.switch_mode(Mode::Rx, 3).unwrap();
        spi.done();
        ce_pin.done();
    }

    #[test]
    pub fn ack_forces_pipe0_to_tx() {
        let spi_expectations = spi_test_expects![
            (vec![registers::CONFIG, 0u8], vec![0xEu8, 0x7Fu8]),
            // pipe 0 listens on the peer's address
            (
                vec![P0_ADDR_WRITE, 0x22u8, 0x11u8, 0xCDu8, 0xABu8, 0xE7],
                vec![0xEu8, 0u8, 0u8, 0u8, 0u8, 0u8],
            ),
            (vec![registers::EN_AA, 0u8], vec![0xEu8, 0u8]),
            (
                vec![registers::EN_AA | commands::W_REGISTER, 1u8],
                vec![0xEu8, 0u8],
            ),
            (vec![registers::EN_RXADDR, 0u8], vec![0xEu8, 0u8]),
            (
                vec![registers::EN_RXADDR | commands::W_REGISTER, 1u8],
                vec![0xEu8, 0u8],
            ),
            // pipe 0 is not closed
            (
                vec![TX_ADDR_WRITE, 0x22u8, 0x11u8, 0xCDu8, 0xABu8, 0xE7],
                vec![0xEu8, 0u8, 0u8, 0u8, 0u8, 0u8],
            ),
            (
                vec![registers::CONFIG | commands::W_REGISTER, 0x7Eu8],
                vec![0xEu8, 0u8],
            ),
        ];
        let mocks = mk_radio(&[PinTransaction::set(PinState::Low)], &spi_expectations);
        let (mut radio, mut spi, mut ce_pin) = (mocks.0, mocks.1, mocks.2);
        radio._config = RadioConfig::default()
            .with_network_id(0xABCD)
            .with_auto_ack(true);
        radio.switch_mode(Mode::Tx, 0x1122).unwrap();
        spi.done();
        ce_pin.done();
    }

    #[test]
    pub fn ack_forces_pipe0_to_rx() {
        let spi_expectations = spi_test_expects![
            (vec![registers::CONFIG, 0u8], vec![0xEu8, 0x7Eu8]),
            (
                vec![P0_ADDR_WRITE, 0x05u8, 0u8, 0u8, 0u8, 0xE7],
                vec![0xEu8, 0u8, 0u8, 0u8, 0u8, 0u8],
            ),
            (vec![registers::EN_AA, 0u8], vec![0xEu8, 2u8]),
            (
                vec![registers::EN_AA | commands::W_REGISTER, 3u8],
                vec![0xEu8, 0u8],
            ),
            (vec![registers::EN_RXADDR, 0u8], vec![0xEu8, 2u8]),
            (
                vec![registers::EN_RXADDR | commands::W_REGISTER, 3u8],
                vec![0xEu8, 0u8],
            ),
            (
                vec![registers::CONFIG | commands::W_REGISTER, 0x7Fu8],
                vec![0xEu8, 0u8],
            ),
            (vec![commands::FLUSH_RX], vec![0xEu8]),
        ];
        let ce_expectations = [
            PinTransaction::set(PinState::Low),
            PinTransaction::set(PinState::High),
        ];
        let mocks = mk_radio(&ce_expectations, &spi_expectations);
        let (mut radio, mut spi, mut ce_pin) = (mocks.0, mocks.1, mocks.2);
        radio._config = RadioConfig::default().with_auto_ack(true);
        radio.switch_mode(Mode::Rx, 5).unwrap();
        spi.done();
        ce_pin.done();
    }
}
