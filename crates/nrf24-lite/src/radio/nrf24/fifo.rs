use embedded_hal::{digital::OutputPin, spi::SpiDevice};

use crate::radio::{prelude::EsbFifo, CompletionFlag, Nrf24, Nrf24Error};
use crate::FifoState;

use super::{commands, registers};

impl<SPI, DO, IRQ> EsbFifo for Nrf24<SPI, DO, IRQ>
where
    SPI: SpiDevice,
    DO: OutputPin,
    IRQ: CompletionFlag,
{
    type FifoErrorType = Nrf24Error<SPI::Error, DO::Error, IRQ::Error>;

    /// Use this to discard all 3 layers in the radio's RX FIFO.
    fn flush_rx(&mut self) -> Result<(), Self::FifoErrorType> {
        self.write_command(commands::FLUSH_RX)?;
        Ok(())
    }

    /// Use this to discard all 3 layers in the radio's TX FIFO.
    fn flush_tx(&mut self) -> Result<(), Self::FifoErrorType> {
        self.write_command(commands::FLUSH_TX)?;
        Ok(())
    }

    fn get_fifo_state(&mut self, about_tx: bool) -> Result<FifoState, Self::FifoErrorType> {
        let fifo_status = self.read_register(registers::FIFO_STATUS)?;
        let offset = about_tx as u8 * 4;
        let status = (fifo_status & (3 << offset)) >> offset;
        match status {
            1 => Ok(FifoState::Empty),
            2 => Ok(FifoState::Full),
            _ => Ok(FifoState::Occupied),
        }
    }
}
