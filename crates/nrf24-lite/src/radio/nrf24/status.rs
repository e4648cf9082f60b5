use embedded_hal::{digital::OutputPin, spi::SpiDevice};

use crate::{
    radio::{prelude::EsbStatus, CompletionFlag, Nrf24, Nrf24Error},
    types::StatusFlags,
};

use super::{commands, registers};

impl<SPI, DO, IRQ> EsbStatus for Nrf24<SPI, DO, IRQ>
where
    SPI: SpiDevice,
    DO: OutputPin,
    IRQ: CompletionFlag,
{
    type StatusErrorType = Nrf24Error<SPI::Error, DO::Error, IRQ::Error>;

    fn status(&mut self) -> Result<StatusFlags, Self::StatusErrorType> {
        self.write_command(commands::NOP)
    }

    fn clear_status_flags(&mut self, flags: StatusFlags) -> Result<(), Self::StatusErrorType> {
        self.spi_write_byte(registers::STATUS, flags.into_bits() & StatusFlags::IRQ_MASK)
    }
}
