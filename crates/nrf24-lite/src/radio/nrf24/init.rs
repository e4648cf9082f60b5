use super::{
    bit_fields::{Config, SetupRetry},
    mnemonics, registers, Nrf24, Nrf24Error,
};
use crate::{
    log::{debug, warn},
    radio::{
        prelude::{EsbFifo, EsbInit},
        CompletionFlag, RadioConfig,
    },
    Outcome, PAYLOAD_LENGTH,
};
use embedded_hal::{digital::OutputPin, spi::SpiDevice};

impl<SPI, DO, IRQ> EsbInit for Nrf24<SPI, DO, IRQ>
where
    SPI: SpiDevice,
    DO: OutputPin,
    IRQ: CompletionFlag,
{
    type ConfigErrorType = Nrf24Error<SPI::Error, DO::Error, IRQ::Error>;

    /// Registers can only be written while the radio is inactive, so the CE pin
    /// is driven LOW first and left LOW.
    fn init(&mut self, config: &RadioConfig) -> Result<Outcome, Self::ConfigErrorType> {
        // the network id (address prefix) is kept for all later addressing
        self._config = *config;
        let retries = SetupRetry::masked(config.auto_retry_delay(), config.auto_retry_count());

        self.ce_pin.set_low().map_err(Nrf24Error::Gpo)?;

        // Set CONFIG register:
        //      IRQ events all on (waiting on an IRQ) or all masked (polling)
        //      16 bit CRC
        //      Power up
        //      Enable PTX
        let config_reg = Config::default().with_irq_events(self.uses_irq());
        self.spi_write_byte(registers::CONFIG, config_reg.into_bits())?;

        self.spi_write_byte(registers::SETUP_AW, mnemonics::ADDRESS_WIDTH_5)?;

        // pipes are opened (and their auto-ack enabled) individually later
        self.spi_write_byte(registers::EN_AA, 0)?;
        self.spi_write_byte(registers::EN_RXADDR, 0)?;

        self.spi_write_byte(registers::SETUP_RETR, retries.into_bits())?;
        self.spi_write_byte(registers::RF_CH, config.channel())?;
        self.spi_write_byte(registers::RF_SETUP, config.rf_setup())?;

        for pipe in 0..6 {
            self.spi_write_byte(registers::RX_PW_P0 + pipe, PAYLOAD_LENGTH as u8)?;
        }

        self.flush_rx()?;
        self.flush_tx()?;

        // the only register verified; it proves the SPI lines work
        if self.read_register(registers::CONFIG)? == config_reg.into_bits() {
            debug!("radio configured on channel {=u8}", config.channel());
            Ok(Outcome::Done)
        } else {
            warn!("CONFIG register did not read back as written");
            Ok(Outcome::Failed)
        }
    }
}
