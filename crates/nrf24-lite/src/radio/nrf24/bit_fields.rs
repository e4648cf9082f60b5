use bitfield_struct::bitfield;

use crate::Mode;

use super::mnemonics;

/// The CONFIG register.
///
/// The IRQ bits are *mask* bits: a set bit keeps the event off the IRQ pin.
#[bitfield(u8, order = Msb)]
#[derive(PartialEq, Eq)]
pub(crate) struct Config {
    #[bits(1)]
    _padding: u8,

    #[bits(1, access = None)]
    pub rx_dr: bool,

    #[bits(1, access = None)]
    pub tx_ds: bool,

    #[bits(1, access = None)]
    pub tx_df: bool,

    #[bits(1, default = true)]
    pub crc_enabled: bool,

    /// 2 byte CRC when set, 1 byte otherwise.
    #[bits(1, default = true)]
    pub crc_2bytes: bool,

    #[bits(1, default = true)]
    pub power: bool,

    pub is_rx: bool,
}

impl Config {
    pub(crate) const IRQ_MASK: u8 =
        mnemonics::MASK_RX_DR | mnemonics::MASK_TX_DS | mnemonics::MASK_MAX_RT;

    /// Are all IRQ events routed to the IRQ pin?
    #[cfg(any(test, feature = "std", all(feature = "defmt", target_os = "none")))]
    pub const fn irq_events(&self) -> bool {
        (self.into_bits() & Self::IRQ_MASK) == 0
    }

    /// Route all IRQ events to the IRQ pin (`true`) or mask them all (`false`).
    ///
    /// The events are never mixed; a driver either waits on the IRQ
    /// or polls the STATUS register.
    pub fn with_irq_events(self, enable: bool) -> Self {
        Self::from_bits(self.into_bits() & !Self::IRQ_MASK | ((!enable as u8) * Self::IRQ_MASK))
    }

    pub const fn mode(&self) -> Mode {
        Mode::from_bits(self.into_bits())
    }

    pub fn with_mode(self, mode: Mode) -> Self {
        Self::from_bits(self.into_bits() & !Mode::MASK | mode.into_bits())
    }
}

/// The SETUP_RETR register.
#[bitfield(u8, order = Msb)]
#[derive(PartialEq, Eq)]
pub(crate) struct SetupRetry {
    /// The auto-retry feature's `delay`.
    #[bits(4, default = 5)]
    pub ard: u8,

    /// The auto-retry feature's `count`.
    #[bits(4, default = 15)]
    pub arc: u8,
}

impl SetupRetry {
    pub(crate) const FIELD_MASK: u8 = 0x0F;

    /// Build the register value from unchecked user input.
    pub fn masked(delay: u8, count: u8) -> Self {
        Self::new()
            .with_ard(delay & Self::FIELD_MASK)
            .with_arc(count & Self::FIELD_MASK)
    }
}

#[cfg(test)]
mod test {
    use super::{Config, SetupRetry};
    use crate::Mode;

    #[test]
    fn config_register_values() {
        let config = Config::default();
        assert_eq!(config.into_bits(), 0x0E);
        assert!(config.irq_events());
        let polling = config.with_irq_events(false);
        assert_eq!(polling.into_bits(), 0x7E);
        assert!(!polling.irq_events());
        assert_eq!(polling.with_irq_events(true).into_bits(), 0x0E);
        assert_eq!(polling.mode(), Mode::Tx);
        assert_eq!(polling.with_mode(Mode::Rx).into_bits(), 0x7F);
        assert_eq!(polling.with_mode(Mode::Rx).with_mode(Mode::Tx), polling);
    }

    #[test]
    fn setup_retry_masking() {
        assert_eq!(SetupRetry::masked(0x1F, 0x20).into_bits(), 0xF0);
        assert_eq!(SetupRetry::masked(2, 3).into_bits(), 0x23);
        assert_eq!(SetupRetry::default().into_bits(), 0x5F);
    }
}
