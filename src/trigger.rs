use embedded_hal_async::delay::DelayNs;

use crate::pins::{GpioPin, Level};

/// How long the pin is held low before the rising edge, in milliseconds.
pub const SETTLE_MS: u32 = 3;

/// Fire a single trigger pulse: low for [`SETTLE_MS`], high for `pulse_ms`, then low.
///
/// `pulse_ms` goes straight to a millisecond delay. Sensors specified in
/// microseconds (HC-SR04 wants 10 us) still get a pulse in milliseconds here.
/// The pin must already be configured as an output.
pub async fn send_trigger<P, D>(pin: &mut P, delay: &mut D, pulse_ms: u32)
where
    P: GpioPin + ?Sized,
    D: DelayNs + ?Sized,
{
    #[cfg(feature = "defmt")]
    defmt::trace!("Trigger pulse of {=u32} ms", pulse_ms);

    // Start from low so the sensor sees a clean rising edge
    pin.write(Level::Low);
    delay.delay_ms(SETTLE_MS).await;
    pin.write(Level::High);
    delay.delay_ms(pulse_ms).await;
    pin.write(Level::Low);
}

/// Owns a trigger line and the delay used to time it.
pub struct Trigger<P, D>
where
    P: GpioPin,
    D: DelayNs,
{
    pin: P,
    delay: D,
}

impl<P: GpioPin, D: DelayNs> Trigger<P, D> {
    pub fn new(pin: P, delay: D) -> Self {
        Self { pin, delay }
    }

    pub async fn fire(&mut self, pulse_ms: u32) {
        send_trigger(&mut self.pin, &mut self.delay, pulse_ms).await;
    }
}
