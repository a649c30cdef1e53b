#![no_std]
#![no_main]

const TRIGGER_PULSE_MS: u32 = 10;
const TRIGGER_INTERVAL: Duration = Duration::from_millis(500);

use {
    defmt::info,
    defmt_rtt as _,
    embassy_executor::Spawner,
    embassy_rp::gpio::{AnyPin, Level, Output},
    embassy_time::{Delay, Duration, Timer},
    panic_probe as _,
    robot_control::Trigger,
};

#[embassy_executor::main]
async fn main(spawner: Spawner) -> ! {
    let p = embassy_rp::init(Default::default());
    let led = Output::new(AnyPin::from(p.PIN_25), Level::Low);
    // Drive the trigger low right away so the sensor doesn't see a stray edge
    let trig = Output::new(AnyPin::from(p.PIN_9), Level::Low);

    Timer::after_millis(100).await;

    spawner.must_spawn(trigger_task(Trigger::new(trig, Delay), led));
    info!(
        "Trigger task started, {=u32} ms pulse every {=u64} ms",
        TRIGGER_PULSE_MS,
        TRIGGER_INTERVAL.as_millis()
    );

    loop {
        Timer::after(Duration::from_secs(3)).await;
    }
}

/// Fires the sensor trigger on a fixed cadence, toggling the on-board LED
/// once per pulse as a heartbeat.
#[embassy_executor::task]
async fn trigger_task(mut trigger: Trigger<Output<'static>, Delay>, mut led: Output<'static>) -> ! {
    loop {
        trigger.fire(TRIGGER_PULSE_MS).await;
        led.toggle();
        Timer::after(TRIGGER_INTERVAL).await;
    }
}
