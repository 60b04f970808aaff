use log::debug;
use rppal::gpio::{InputPin, Level, OutputPin};

use crate::Result;

/// A claimed input line wired to the door's reed switch.
pub trait SensorLine {
    fn read(&self) -> Level;
}

/// A claimed output line wired to the opener relay trigger.
pub trait ButtonLine {
    fn write(&mut self, level: Level);
}

/// Pin claiming for one board. Claiming fixes the line's configuration:
/// sensors are inputs with the internal pull-up enabled, buttons are
/// outputs driven low. There is no way to reconfigure a line afterwards.
pub trait Gpio {
    type Sensor: SensorLine;
    type Button: ButtonLine;

    fn claim_sensor(&self, pin: u8) -> Result<Self::Sensor>;
    fn claim_button(&self, pin: u8) -> Result<Self::Button>;
}

/// The real chip. `rppal` detects the Pi model itself, so probing fails on
/// unsupported boards or without access to the gpio device.
pub struct Hardware {
    chip: rppal::gpio::Gpio,
}

impl Hardware {
    pub fn probe() -> Result<Self> {
        Ok(Hardware {
            chip: rppal::gpio::Gpio::new()?,
        })
    }
}

impl Gpio for Hardware {
    type Sensor = InputPin;
    type Button = OutputPin;

    fn claim_sensor(&self, pin: u8) -> Result<InputPin> {
        debug!("claiming sensor pin {} as input, pull-up", pin);
        Ok(self.chip.get(pin)?.into_input_pullup())
    }

    fn claim_button(&self, pin: u8) -> Result<OutputPin> {
        debug!("claiming button pin {} as output, low", pin);
        Ok(self.chip.get(pin)?.into_output_low())
    }
}

impl SensorLine for InputPin {
    fn read(&self) -> Level {
        InputPin::read(self)
    }
}

impl ButtonLine for OutputPin {
    fn write(&mut self, level: Level) {
        OutputPin::write(self, level)
    }
}
