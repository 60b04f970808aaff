/// BCM pin wired to the door's reed switch.
pub const SENSOR_PIN: u8 = 18;

/// BCM pin wired to the opener relay trigger.
pub const BUTTON_PIN: u8 = 17;

/// Pin assignment for one door. The binary always runs with
/// [`DoorConfig::default`]; the assignment is part of the wiring, not the
/// command line.
#[derive(Copy, Clone, Debug)]
pub struct DoorConfig {
    pub sensor_pin: u8,
    pub button_pin: u8,
}

impl Default for DoorConfig {
    fn default() -> Self {
        DoorConfig {
            sensor_pin: SENSOR_PIN,
            button_pin: BUTTON_PIN,
        }
    }
}
