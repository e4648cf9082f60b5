use crate::radio::nrf24::bit_fields::SetupRetry;
use crate::{DataRate, PaLevel};

/// The number of polls [`EsbRadio::send()`](fn@crate::radio::prelude::EsbRadio::send)
/// makes by default before giving up on a transmission.
pub const DEFAULT_MAX_WAIT: u16 = 4000;

/// An object to configure the radio.
///
/// This struct follows a builder pattern. Since all fields are private, users should
/// start with the [`RadioConfig::default`] constructor, then mutate the object accordingly.
/// ```
/// use nrf24::radio::RadioConfig;
/// let config = RadioConfig::default().with_network_id(0x1234).with_channel(42);
/// assert_eq!(config.channel(), 42);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RadioConfig {
    pub(crate) auto_retries: SetupRetry,
    network_id: u16,
    channel: u8,
    data_rate: DataRate,
    pa_level: PaLevel,
    auto_ack: bool,
    max_wait: u16,
}

impl Default for RadioConfig {
    /// Instantiate a [`RadioConfig`] object with library defaults.
    ///
    /// | feature | default value |
    /// |--------:|:--------------|
    /// | [`RadioConfig::network_id()`] | `0` |
    /// | [`RadioConfig::channel()`] | `76` |
    /// | [`RadioConfig::data_rate()`] | [`DataRate::Mbps1`] |
    /// | [`RadioConfig::pa_level()`] | [`PaLevel::Dbm7`] |
    /// | [`RadioConfig::auto_retry_delay()`] | `5` |
    /// | [`RadioConfig::auto_retry_count()`] | `15` |
    /// | [`RadioConfig::auto_ack()`] | `false` |
    /// | [`RadioConfig::max_wait()`] | [`DEFAULT_MAX_WAIT`] |
    fn default() -> Self {
        Self {
            /*
               - 5 * 250 + 250 = 1500 us delay between attempts
               - 15 max attempts
            */
            auto_retries: SetupRetry::default(),
            network_id: 0,
            channel: 76,
            data_rate: DataRate::Mbps1,
            pa_level: PaLevel::Dbm7,
            auto_ack: false,
            max_wait: DEFAULT_MAX_WAIT,
        }
    }
}

impl RadioConfig {
    /// Returns the value set by [`RadioConfig::with_network_id()`].
    pub const fn network_id(&self) -> u16 {
        self.network_id
    }

    /// The network id shared by every address the radio uses.
    ///
    /// See [`Address`](struct@crate::Address) for how it is placed on the air.
    pub fn with_network_id(self, network_id: u16) -> Self {
        Self { network_id, ..self }
    }

    /// Returns the value set by [`RadioConfig::with_channel()`].
    pub const fn channel(&self) -> u8 {
        self.channel
    }

    /// Set the channel (over the air frequency).
    ///
    /// This value is clamped to range [0, 125].
    /// The radio's frequency can be determined by the following equation:
    /// ```text
    /// frequency (in MHz) = channel + 2400
    /// ```
    pub fn with_channel(self, value: u8) -> Self {
        Self {
            channel: value.min(125),
            ..self
        }
    }

    /// Returns the value set by [`RadioConfig::with_data_rate()`].
    pub const fn data_rate(&self) -> DataRate {
        self.data_rate
    }

    /// The Data Rate (over the air).
    pub fn with_data_rate(self, data_rate: DataRate) -> Self {
        Self { data_rate, ..self }
    }

    /// Returns the value set by [`RadioConfig::with_pa_level()`].
    pub const fn pa_level(&self) -> PaLevel {
        self.pa_level
    }

    /// The Power Amplitude (PA) level.
    pub fn with_pa_level(self, pa_level: PaLevel) -> Self {
        Self { pa_level, ..self }
    }

    /// The value written to the RF_SETUP register.
    pub(crate) const fn rf_setup(&self) -> u8 {
        self.data_rate.into_bits() | self.pa_level.into_bits()
    }

    /// The auto-retry feature's `delay` (set via [`RadioConfig::with_auto_retries()`])
    pub const fn auto_retry_delay(&self) -> u8 {
        self.auto_retries.ard()
    }

    /// The auto-retry feature's `count` (set via [`RadioConfig::with_auto_retries()`])
    pub const fn auto_retry_count(&self) -> u8 {
        self.auto_retries.arc()
    }

    /// Set the auto-retry feature's `delay` and `count` parameters.
    ///
    /// Both values only keep their lower 4 bits.
    /// The `delay` is in units of 250 microseconds: `(delay + 1) * 250` us
    /// between attempts. The `count` is the maximum number of attempts.
    pub fn with_auto_retries(self, delay: u8, count: u8) -> Self {
        Self {
            auto_retries: SetupRetry::masked(delay, count),
            ..self
        }
    }

    /// Returns the value set by [`RadioConfig::with_auto_ack()`].
    pub const fn auto_ack(&self) -> bool {
        self.auto_ack
    }

    /// Use the acknowledge variant of the driver.
    ///
    /// When enabled, pipe 0 always listens on the peer's address (to catch
    /// the automatic ACK packets) and every pipe enabled with
    /// [`EsbPipe::set_rx_pipe()`](fn@crate::radio::prelude::EsbPipe::set_rx_pipe)
    /// also gets its auto-ack feature enabled.
    pub fn with_auto_ack(self, enable: bool) -> Self {
        Self {
            auto_ack: enable,
            ..self
        }
    }

    /// Returns the value set by [`RadioConfig::with_max_wait()`].
    pub const fn max_wait(&self) -> u16 {
        self.max_wait
    }

    /// The number of completion polls a transmission may take before it is
    /// reported as [`Outcome::Timeout`](crate::Outcome::Timeout).
    ///
    /// This value is clamped to a minimum of 1.
    pub fn with_max_wait(self, polls: u16) -> Self {
        Self {
            max_wait: polls.max(1),
            ..self
        }
    }
}

/////////////////////////////////////////////////////////////////////////////////
/// unit tests
#[cfg(test)]
mod test {
    use super::{RadioConfig, DEFAULT_MAX_WAIT};
    use crate::{DataRate, PaLevel};

    #[test]
    fn defaults() {
        let config = RadioConfig::default();
        assert_eq!(config.network_id(), 0);
        assert_eq!(config.channel(), 76);
        assert_eq!(config.data_rate(), DataRate::Mbps1);
        assert_eq!(config.pa_level(), PaLevel::Dbm7);
        assert_eq!(config.auto_retry_delay(), 5);
        assert_eq!(config.auto_retry_count(), 15);
        assert_eq!(config.auto_retries.into_bits(), 0x5F);
        assert!(!config.auto_ack());
        assert_eq!(config.max_wait(), DEFAULT_MAX_WAIT);
        assert_eq!(config.rf_setup(), 0x07);
    }

    #[test]
    fn retries_are_masked() {
        let config = RadioConfig::default().with_auto_retries(0x13, 0xFA);
        assert_eq!(config.auto_retry_delay(), 3);
        assert_eq!(config.auto_retry_count(), 0xA);
        assert_eq!(config.auto_retries.into_bits(), 0x3A);
    }

    #[test]
    fn channel_is_clamped() {
        assert_eq!(RadioConfig::default().with_channel(200).channel(), 125);
        assert_eq!(RadioConfig::default().with_channel(0).channel(), 0);
    }

    #[test]
    fn rf_setup() {
        let config = RadioConfig::default()
            .with_data_rate(DataRate::Kbps250)
            .with_pa_level(PaLevel::Dbm0);
        assert_eq!(config.rf_setup(), 0x23);
        let config = config.with_data_rate(DataRate::Mbps2);
        assert_eq!(config.rf_setup(), 0x0B);
    }

    #[test]
    fn max_wait_is_at_least_one() {
        assert_eq!(RadioConfig::default().with_max_wait(0).max_wait(), 1);
        assert_eq!(RadioConfig::default().with_max_wait(12).max_wait(), 12);
    }
}
