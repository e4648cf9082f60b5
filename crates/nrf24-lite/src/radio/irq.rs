//! Signals that end the wait of [`EsbRadio::send()`](fn@crate::radio::prelude::EsbRadio::send).

use core::{
    convert::Infallible,
    sync::atomic::{AtomicBool, Ordering},
};

use embedded_hal::digital::InputPin;

/// A latched "transmission complete" signal written by another execution
/// context (usually the interrupt handler of the radio's IRQ line).
///
/// The driver only reads the flag. Clearing it (before the next
/// transmission) is the responsibility of whoever sets it.
pub trait CompletionFlag {
    /// The error returned when the flag cannot be read.
    ///
    /// Surfaces as [`Nrf24Error::Gpi`](crate::radio::Nrf24Error::Gpi).
    type Error;

    /// Has the radio signaled the end of a transmission?
    fn is_set(&mut self) -> Result<bool, Self::Error>;
}

/// The flag of a driver that polls the STATUS register instead of waiting on an IRQ.
///
/// [`Nrf24::new()`](fn@crate::radio::Nrf24::new) uses this type. It is never set.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct NoIrq;

impl CompletionFlag for NoIrq {
    type Error = Infallible;

    fn is_set(&mut self) -> Result<bool, Self::Error> {
        Ok(false)
    }
}

/// A flag latched by an interrupt handler.
///
/// The handler should `store(true, Ordering::Release)`; the driver loads it
/// with `Ordering::Acquire`.
/// ```
/// use core::sync::atomic::{AtomicBool, Ordering};
/// use nrf24::radio::CompletionFlag;
///
/// static TX_DONE: AtomicBool = AtomicBool::new(false);
/// let mut flag = &TX_DONE;
/// assert_eq!(flag.is_set(), Ok(false));
/// TX_DONE.store(true, Ordering::Release);
/// assert_eq!(flag.is_set(), Ok(true));
/// ```
impl CompletionFlag for &AtomicBool {
    type Error = Infallible;

    fn is_set(&mut self) -> Result<bool, Self::Error> {
        Ok(self.load(Ordering::Acquire))
    }
}

/// The radio's IRQ pin used directly as a completion flag.
///
/// The nRF24L01 drives its IRQ pin LOW while any unmasked event is pending.
/// A read error ends [`EsbRadio::send()`](fn@crate::radio::prelude::EsbRadio::send)
/// with that error.
#[derive(Debug)]
pub struct IrqPin<P>(pub P);

impl<P: InputPin> CompletionFlag for IrqPin<P> {
    type Error = P::Error;

    fn is_set(&mut self) -> Result<bool, Self::Error> {
        self.0.is_low()
    }
}
