use embedded_hal::{digital::OutputPin, spi::SpiDevice};

use crate::radio::{prelude::EsbPipe, CompletionFlag, Nrf24, Nrf24Error};

use super::registers;

impl<SPI, DO, IRQ> EsbPipe for Nrf24<SPI, DO, IRQ>
where
    SPI: SpiDevice,
    DO: OutputPin,
    IRQ: CompletionFlag,
{
    type PipeErrorType = Nrf24Error<SPI::Error, DO::Error, IRQ::Error>;

    fn set_tx_address(&mut self, node: u16) -> Result<(), Self::PipeErrorType> {
        let address = self.address(node).into_bytes();
        self.spi_write_buf(registers::TX_ADDR, &address)
    }

    fn set_rx_address(&mut self, pipe: u8, node: u16) -> Result<(), Self::PipeErrorType> {
        if pipe > 5 {
            return Ok(());
        }
        if pipe < 2 {
            let address = self.address(node).into_bytes();
            self.spi_write_buf(registers::RX_ADDR_P0 + pipe, &address)
        }
        // For pipes 2-5, only write the LSB
        else {
            self.spi_write_byte(registers::RX_ADDR_P0 + pipe, node as u8)
        }
    }

    fn set_rx_pipe(&mut self, pipe: u8, enable: bool) -> Result<(), Self::PipeErrorType> {
        if pipe > 5 {
            return Ok(());
        }
        let mask = 1u8 << pipe;
        if self._config.auto_ack() {
            let en_aa = self.read_register(registers::EN_AA)?;
            let out = if enable { en_aa | mask } else { en_aa & !mask };
            self.spi_write_byte(registers::EN_AA, out)?;
        }
        let en_rxaddr = self.read_register(registers::EN_RXADDR)?;
        let out = if enable {
            en_rxaddr | mask
        } else {
            en_rxaddr & !mask
        };
        self.spi_write_byte(registers::EN_RXADDR, out)
    }
}
