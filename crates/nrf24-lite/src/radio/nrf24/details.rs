use super::{Nrf24, Nrf24Error};
use crate::radio::{prelude::EsbDetails, CompletionFlag};
use embedded_hal::{digital::OutputPin, spi::SpiDevice};

#[cfg(any(all(feature = "defmt", target_os = "none"), feature = "std"))]
use super::{bit_fields::Config, registers};
#[cfg(any(all(feature = "defmt", target_os = "none"), feature = "std"))]
use crate::radio::prelude::EsbFifo;

#[cfg(feature = "std")]
extern crate std;

impl<SPI, DO, IRQ> EsbDetails for Nrf24<SPI, DO, IRQ>
where
    SPI: SpiDevice,
    DO: OutputPin,
    IRQ: CompletionFlag,
{
    type DetailsErrorType = Nrf24Error<SPI::Error, DO::Error, IRQ::Error>;

    #[cfg(feature = "defmt")]
    #[cfg(target_os = "none")]
    fn print_details(&mut self) -> Result<(), Self::DetailsErrorType> {
        defmt::println!(
            "Network ID________________{=u16:#06X}",
            self._config.network_id()
        );
        let channel = self.channel()?;
        defmt::println!(
            "Channel___________________{=u8} ~ {=u16} MHz",
            channel,
            channel as u16 + 2400u16
        );

        defmt::println!("RF Data Rate______________{}", self.data_rate()?);
        defmt::println!("RF Power Amplifier________{}", self.pa_level()?);

        let retry_setup = self.read_register(registers::SETUP_RETR)?;
        defmt::println!(
            "Auto retry delay__________{=u16} microseconds",
            (retry_setup >> 4) as u16 * 250 + 250
        );
        defmt::println!(
            "Auto retry attempts_______{=u8} maximum",
            retry_setup & 0x0F
        );
        defmt::println!(
            "Max TX wait_______________{=u16} polls",
            self._config.max_wait()
        );

        let config = Config::from_bits(self.read_register(registers::CONFIG)?);
        defmt::println!("CRC enabled_______________{=bool}", config.crc_enabled());
        defmt::println!("CRC 2 bytes_______________{=bool}", config.crc_2bytes());
        defmt::println!("IRQ events enabled________{=bool}", config.irq_events());
        defmt::println!("Waits on IRQ______________{=bool}", self.uses_irq());
        defmt::println!("Primary Mode______________{}", config.mode());
        defmt::println!("Powered Up________________{=bool}", config.power());

        let fifo = self.get_fifo_state(true)?;
        defmt::println!("TX FIFO___________________{}", fifo);
        let fifo = self.get_fifo_state(false)?;
        defmt::println!("RX FIFO___________________{}", fifo);

        let en_aa = self.read_register(registers::EN_AA)?;
        defmt::println!("Auto Acknowledgment_______0b{=0..8}", en_aa);

        // print pipe addresses
        self.spi_read(5, registers::TX_ADDR)?;
        let mut address = [0u8; 4];
        address.copy_from_slice(&self._buf[2..6]);
        defmt::println!(
            "TX address_______________{=u32:#010X}{=u8:02X}",
            u32::from_le_bytes(address),
            self._buf[1]
        );
        let open_pipes = self.read_register(registers::EN_RXADDR)?;
        let opened = defmt::intern!(" open ");
        let closed = defmt::intern!("closed");
        for pipe in 0..=5 {
            self.spi_read(if pipe < 2 { 5 } else { 1 }, registers::RX_ADDR_P0 + pipe)?;
            if pipe < 2 {
                address.copy_from_slice(&self._buf[2..6]);
            }
            defmt::println!(
                "Pipe {=u8} ({=istr}) bound to {=u32:#010X}{=u8:02X}",
                pipe,
                if (open_pipes & (1u8 << pipe)) > 0 {
                    opened
                } else {
                    closed
                },
                u32::from_le_bytes(address),
                self._buf[1],
            );
        }
        Ok(())
    }

    #[cfg(not(any(all(feature = "defmt", target_os = "none"), feature = "std")))]
    fn print_details(&mut self) -> Result<(), Self::DetailsErrorType> {
        Ok(())
    }

    #[cfg(not(all(feature = "defmt", target_os = "none")))]
    #[cfg(feature = "std")]
    fn print_details(&mut self) -> Result<(), Self::DetailsErrorType> {
        std::println!(
            "Network ID________________{:#06X}",
            self._config.network_id()
        );
        let channel = self.channel()?;
        std::println!(
            "Channel___________________{channel} ~ {} MHz",
            channel as u16 + 2400u16
        );

        std::println!("RF Data Rate______________{}", self.data_rate()?);
        std::println!("RF Power Amplifier________{}", self.pa_level()?);

        let retry_setup = self.read_register(registers::SETUP_RETR)?;
        std::println!(
            "Auto retry delay__________{} microseconds",
            (retry_setup >> 4) as u16 * 250 + 250
        );
        std::println!("Auto retry attempts_______{} maximum", retry_setup & 0x0F);
        std::println!(
            "Max TX wait_______________{} polls",
            self._config.max_wait()
        );

        let config = Config::from_bits(self.read_register(registers::CONFIG)?);
        std::println!("CRC enabled_______________{}", config.crc_enabled());
        std::println!("CRC 2 bytes_______________{}", config.crc_2bytes());
        std::println!("IRQ events enabled________{}", config.irq_events());
        std::println!("Waits on IRQ______________{}", self.uses_irq());
        std::println!("Primary Mode______________{}", config.mode());
        std::println!("Powered Up________________{}", config.power());

        let fifo = self.get_fifo_state(true)?;
        std::println!("TX FIFO___________________{}", fifo);
        let fifo = self.get_fifo_state(false)?;
        std::println!("RX FIFO___________________{}", fifo);

        let en_aa = self.read_register(registers::EN_AA)?;
        std::println!("Auto Acknowledgment_______{:#010b}", en_aa);

        // print pipe addresses
        self.spi_read(5, registers::TX_ADDR)?;
        let mut address = [0u8; 4];
        address.copy_from_slice(&self._buf[2..6]);
        std::println!(
            "TX address_______________{:#010X}{:02X}",
            u32::from_le_bytes(address),
            self._buf[1]
        );
        let open_pipes = self.read_register(registers::EN_RXADDR)?;
        for pipe in 0..=5 {
            self.spi_read(if pipe < 2 { 5 } else { 1 }, registers::RX_ADDR_P0 + pipe)?;
            if pipe < 2 {
                address.copy_from_slice(&self._buf[2..6]);
            }
            std::println!(
                "Pipe {pipe} ({}) bound to {:#010X}{:02X}",
                if (open_pipes & (1u8 << pipe)) > 0 {
                    " open "
                } else {
                    "closed"
                },
                // pipes 2-5 share the upper bytes of pipe 1
                u32::from_le_bytes(address),
                self._buf[1],
            );
        }
        Ok(())
    }
}
