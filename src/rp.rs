// RP chip implementations
use crate::pins::GpioPin;
use embassy_rp::gpio::Output;

impl GpioPin for Output<'_> {
    fn set_high(&mut self) {
        Output::set_high(self);
    }

    fn set_low(&mut self) {
        Output::set_low(self);
    }
}
