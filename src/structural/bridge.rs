//! Bridge: keep the remote-control hierarchy and the device hierarchy
//! separate, connected only through the device trait, so both can grow
//! independently.

// =============================================================================
// Devices (implementation side)
// =============================================================================

pub trait Device {
    fn brand(&self) -> &str;

    fn turn_on(&self) -> String {
        format!("{}: on", self.brand())
    }

    fn turn_off(&self) -> String {
        format!("{}: off", self.brand())
    }

    fn set_channel(&self, number: u32) -> String {
        format!("{}: channel {number}", self.brand())
    }
}

pub struct SonyTv;

impl Device for SonyTv {
    fn brand(&self) -> &str {
        "sony"
    }
}

pub struct LgTv;

impl Device for LgTv {
    fn brand(&self) -> &str {
        "lg"
    }
}

// =============================================================================
// Remote controls (abstraction side)
// =============================================================================

pub struct RemoteControl {
    device: Box<dyn Device>,
}

impl RemoteControl {
    pub fn new(device: Box<dyn Device>) -> Self {
        RemoteControl { device }
    }

    pub fn turn_on(&self) -> String {
        self.device.turn_on()
    }

    pub fn turn_off(&self) -> String {
        self.device.turn_off()
    }
}

/// Extends the abstraction by wrapping the basic remote, not the devices.
pub struct AdvancedRemoteControl {
    remote: RemoteControl,
}

impl AdvancedRemoteControl {
    pub fn new(device: Box<dyn Device>) -> Self {
        AdvancedRemoteControl {
            remote: RemoteControl::new(device),
        }
    }

    pub fn turn_on(&self) -> String {
        self.remote.turn_on()
    }

    pub fn turn_off(&self) -> String {
        self.remote.turn_off()
    }

    pub fn set_channel(&self, number: u32) -> String {
        self.remote.device.set_channel(number)
    }
}

// =============================================================================
// Demo
// =============================================================================

pub fn demo() {
    crate::banner("Bridge");

    let remote = RemoteControl::new(Box::new(SonyTv));
    println!("{}", remote.turn_on());
    println!("{}", remote.turn_off());

    let advanced = AdvancedRemoteControl::new(Box::new(LgTv));
    println!("{}", advanced.set_channel(5));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn any_remote_drives_any_device() {
        assert_eq!(RemoteControl::new(Box::new(SonyTv)).turn_on(), "sony: on");
        assert_eq!(RemoteControl::new(Box::new(LgTv)).turn_on(), "lg: on");
    }

    #[test]
    fn advanced_remote_adds_channels_without_new_devices() {
        let advanced = AdvancedRemoteControl::new(Box::new(SonyTv));
        assert_eq!(advanced.set_channel(5), "sony: channel 5");
        assert_eq!(advanced.turn_off(), "sony: off");
    }
}
