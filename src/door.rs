use std::thread::sleep;
use std::time::Duration;

use log::debug;
use rppal::gpio::Level;

use crate::config::DoorConfig;
use crate::gpio::{ButtonLine, Gpio, SensorLine};
use crate::Result;

/// How long the relay line is held high for one momentary press.
const PRESS_HOLD: Duration = Duration::from_millis(500);

pub struct DoorActuator<S, B> {
    sensor: S,
    button: B,
}

impl<S: SensorLine, B: ButtonLine> DoorActuator<S, B> {
    pub fn connect<G>(gpio: &G, config: &DoorConfig) -> Result<Self>
    where
        G: Gpio<Sensor = S, Button = B>,
    {
        let sensor = gpio.claim_sensor(config.sensor_pin)?;
        let button = gpio.claim_button(config.button_pin)?;
        Ok(DoorActuator { sensor, button })
    }

    /// The reed switch sits behind the pull-up, so an open door reads high.
    pub fn is_open(&self) -> bool {
        self.sensor.read() == Level::High
    }

    /// One momentary press of the opener button. Blocks for the hold time.
    /// Whether the door actually moved is not observable at this layer.
    pub fn press_button(&mut self) {
        debug!("pressing opener button for {}ms", PRESS_HOLD.as_millis());
        self.button.write(Level::High);
        sleep(PRESS_HOLD);
        self.button.write(Level::Low);
    }
}
