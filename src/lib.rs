//! Pin and sensor-reading helpers for the robot controller firmware.
//!
//! Hardware is reached through [`pins::GpioPin`] and
//! [`embedded_hal_async::delay::DelayNs`], so everything here also runs on the
//! host against fakes. Chip glue lives behind the `rp2040` feature.

#![cfg_attr(not(test), no_std)]

pub mod pins;
pub mod readings;
pub mod trigger;

#[cfg(feature = "rp2040")]
pub mod rp;

pub use pins::{GpioPin, Level};
pub use readings::{index_of_max, mean};
pub use trigger::{send_trigger, Trigger, SETTLE_MS};
