use embedded_hal::{digital::OutputPin, spi::SpiDevice};

use super::{commands, registers, Nrf24, Nrf24Error};
use crate::{
    log::{trace, warn},
    radio::{
        prelude::{EsbFifo, EsbRadio},
        CompletionFlag,
    },
    Outcome, Packet, StatusFlags, PAYLOAD_LENGTH,
};

impl<SPI, DO, IRQ> Nrf24<SPI, DO, IRQ>
where
    SPI: SpiDevice,
    DO: OutputPin,
    IRQ: CompletionFlag,
{
    /// Has the radio finished the current transmission?
    ///
    /// Asks the completion flag if there is one, otherwise polls the STATUS register.
    fn tx_event(&mut self) -> Result<bool, Nrf24Error<SPI::Error, DO::Error, IRQ::Error>> {
        if let Some(irq) = self._irq.as_mut() {
            return irq.is_set().map_err(Nrf24Error::Gpi);
        }
        Ok(self.write_command(commands::NOP)?.tx_finished())
    }

    /// Put the radio back to standby, clear the pending flags and discard
    /// whatever is left in the TX FIFO.
    ///
    /// Returns the status observed before the flags were cleared.
    fn end_transmission(
        &mut self,
    ) -> Result<StatusFlags, Nrf24Error<SPI::Error, DO::Error, IRQ::Error>> {
        self.ce_pin.set_low().map_err(Nrf24Error::Gpo)?;
        let status = self.write_command(commands::NOP)?;
        self.spi_write_byte(registers::STATUS, status.into_bits())?;
        self.flush_tx()?;
        Ok(status)
    }
}

impl<SPI, DO, IRQ> EsbRadio for Nrf24<SPI, DO, IRQ>
where
    SPI: SpiDevice,
    DO: OutputPin,
    IRQ: CompletionFlag,
{
    type RadioErrorType = Nrf24Error<SPI::Error, DO::Error, IRQ::Error>;

    fn send(&mut self, buf: &Packet) -> Result<Outcome, Self::RadioErrorType> {
        self.ce_pin.set_low().map_err(Nrf24Error::Gpo)?;
        self._buf[0] = commands::W_TX_PAYLOAD;
        self._buf[1..].copy_from_slice(buf);
        self.spi_transfer(PAYLOAD_LENGTH + 1)?;
        self.ce_pin.set_high().map_err(Nrf24Error::Gpo)?;

        let max_wait = self._config.max_wait();
        let mut polls = 0u16;
        while !self.tx_event()? {
            polls += 1;
            if polls >= max_wait {
                warn!("no TX event after {=u16} polls", polls);
                self.end_transmission()?;
                return Ok(Outcome::Timeout);
            }
        }

        let status = self.end_transmission()?;
        if status.tx_ds() {
            Ok(Outcome::Done)
        } else {
            trace!("auto-retries exhausted");
            Ok(Outcome::Failed)
        }
    }

    fn receive(&mut self, buf: &mut Packet) -> Result<Option<u8>, Self::RadioErrorType> {
        let status = self.write_command(commands::NOP)?;
        self.spi_write_byte(registers::STATUS, status.into_bits())?;
        if !status.rx_dr() {
            return Ok(None);
        }

        let pipe = status.valid_rx_pipe();
        if pipe.is_some() {
            self.spi_read(PAYLOAD_LENGTH, commands::R_RX_PAYLOAD)?;
            buf.copy_from_slice(&self._buf[1..=PAYLOAD_LENGTH]);
        } else {
            trace!("RX_DR set without a valid pipe");
        }
        self.flush_rx()?;
        Ok(pipe)
    }
}
