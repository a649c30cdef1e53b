/// Logic level driven onto a digital output.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Level {
    Low,
    High,
}

/// A digital output line that has already been configured as an output.
///
/// Implemented per chip (see `rp`) and by fakes in tests.
pub trait GpioPin {
    fn set_high(&mut self);
    fn set_low(&mut self);

    fn write(&mut self, level: Level) {
        match level {
            Level::Low => self.set_low(),
            Level::High => self.set_high(),
        }
    }
}

impl<T: GpioPin + ?Sized> GpioPin for &mut T {
    fn set_high(&mut self) {
        (**self).set_high();
    }

    fn set_low(&mut self) {
        (**self).set_low();
    }

    fn write(&mut self, level: Level) {
        (**self).write(level);
    }
}
