// crates/lcec-configgen/src/cia402.rs

//! Synthesizes `<modParam>`s for the `basic_cia402` driver.
//!
//! The driver only creates pins for optional CiA 402 features it is told
//! about. For each detected channel this module reads the channel's
//! "supported drive modes" bitmask from the device and checks which optional
//! objects exist in the object dictionary, then emits one `enable...` switch
//! per supported mode or object.

use crate::error::ConfigGenError;
use crate::introspect::BusIntrospector;
use crate::od::{self, CIA402_SUPPORTED_MODES_OFFSET, ObjectKey};
use crate::scan::parse_prefixed_u32;
use crate::types::{ModParam, Slave};
use log::debug;

/// Bits of "supported drive modes" and the switch each one turns on.
/// Bit 4 is reserved by CiA 402 and has no switch.
static MODE_FLAGS: [(u32, &str); 9] = [
    (0, "enablePP"),
    (1, "enableVL"),
    (2, "enablePV"),
    (3, "enableTQ"),
    (5, "enableHM"),
    (6, "enableIP"),
    (7, "enableCSP"),
    (8, "enableCSV"),
    (9, "enableCST"),
];

/// An optional CiA 402 object whose presence enables a driver feature.
struct OptionalFeature {
    name: &'static str,
    /// Offset from the channel's base index (`0x6000` for channel 0).
    offset: u16,
    sub_index: u8,
    /// Extra parameter emitted alongside the switch.
    companion: Option<(&'static str, &'static str)>,
}

const fn feature(name: &'static str, offset: u16, sub_index: u8) -> OptionalFeature {
    OptionalFeature {
        name,
        offset,
        sub_index,
        companion: None,
    }
}

// Objects that are mandatory for a supported mode (e.g. actual position) are
// created by the driver from the mode switches and are not listed here.
static OPTIONAL_FEATURES: [OptionalFeature; 47] = [
    feature("enableActualCurrent", 0x78, 0),
    feature("enableActualFollowingError", 0xf4, 0),
    feature("enableActualTorque", 0x77, 0),
    feature("enableActualVelocitySensor", 0x69, 0),
    feature("enableActualVoltage", 0x79, 0),
    feature("enableControlEffort", 0xfa, 0),
    feature("enableDemandVL", 0x43, 0),
    OptionalFeature {
        name: "enableDigitalInput",
        offset: 0xfd,
        sub_index: 0,
        companion: Some(("digitalInChannels", "16")),
    },
    OptionalFeature {
        name: "enableDigitalOutput",
        offset: 0xfe,
        sub_index: 1,
        companion: Some(("digitalOutChannels", "16")),
    },
    feature("enableErrorCode", 0x3f, 0),
    feature("enableFollowingErrorTimeout", 0x66, 0),
    feature("enableFollowingErrorWindow", 0x65, 0),
    feature("enableHomeAccel", 0x9a, 0),
    feature("enableInterpolationTimePeriod", 0xc2, 1),
    feature("enableMaximumAcceleration", 0xc5, 0),
    feature("enableMaximumCurrent", 0x73, 0),
    feature("enableMaximumDeceleration", 0xc6, 0),
    feature("enableMaximumMotorRPM", 0x80, 0),
    feature("enableMaximumSlippage", 0xf8, 0),
    feature("enableMaximumTorque", 0x72, 0),
    feature("enableMotorRatedCurrent", 0x75, 0),
    feature("enableMotorRatedTorque", 0x76, 0),
    feature("enablePolarity", 0x7e, 0),
    feature("enablePositionDemand", 0x62, 0),
    feature("enablePositioningTime", 0x68, 0),
    feature("enablePositioningWindow", 0x67, 0),
    feature("enableProbeStatus", 0xb9, 0),
    feature("enableProfileAccel", 0x83, 0),
    feature("enableProfileDecel", 0x84, 0),
    feature("enableProfileEndVelocity", 0x82, 0),
    feature("enableProfileMaxVelocity", 0x7f, 0),
    feature("enableProfileVelocity", 0x81, 0),
    feature("enableTargetTorque", 0x71, 0),
    feature("enableTargetVL", 0x42, 0),
    feature("enableTorqueDemand", 0x74, 0),
    feature("enableTorqueProfileType", 0x88, 0),
    feature("enableTorqueSlope", 0x87, 0),
    feature("enableVLAccel", 0x48, 0),
    feature("enableVLDecel", 0x49, 0),
    feature("enableVLMaximum", 0x46, 2),
    feature("enableVLMinimum", 0x46, 1),
    feature("enableVelocityDemand", 0x6b, 0),
    feature("enableVelocityErrorTime", 0x6e, 0),
    feature("enableVelocityErrorWindow", 0x6d, 0),
    feature("enableVelocitySensorSelector", 0x6a, 0),
    feature("enableVelocityThresholdTime", 0x70, 0),
    feature("enableVelocityThresholdWindow", 0x6f, 0),
];

/// Parses the output of a register upload: the first whitespace-separated
/// token is the value (`0x000003ed 1005`).
pub fn parse_upload_value(text: &str, key: ObjectKey) -> Result<u32, ConfigGenError> {
    let token = text
        .split_whitespace()
        .next()
        .ok_or(ConfigGenError::EmptyUpload {
            index: key.index,
            sub_index: key.sub_index,
        })?;
    parse_prefixed_u32(token)
}

/// Returns the mode switches set in a "supported drive modes" bitmask, in table order.
pub fn supported_mode_switches(modes: u32) -> impl Iterator<Item = &'static str> {
    MODE_FLAGS
        .iter()
        .filter(move |(bit, _)| modes & (1u32 << *bit) != 0)
        .map(|(_, name)| *name)
}

/// Builds the `<modParam>` list enabling every CiA 402 feature the slave supports.
///
/// With more than one channel, a leading `ciaChannels` parameter carries the
/// channel count and every switch is prefixed with its channel tag (`ch1`,
/// `ch2`, ...). A single channel gets unprefixed switches.
pub fn synthesize_mod_params<B: BusIntrospector + ?Sized>(
    bus: &B,
    slave: &Slave,
) -> Result<Vec<ModParam>, ConfigGenError> {
    let channels = od::cia402_channel_count(slave);
    debug!(
        "[CiA402] Slave {}:{} has {} CiA 402 channel(s)",
        slave.master, slave.position, channels
    );

    let mut params = Vec::new();
    if channels > 1 {
        params.push(ModParam::new("ciaChannels", channels.to_string()));
    }

    for channel in 0..channels {
        let prefix = if channels > 1 {
            format!("ch{}", channel + 1)
        } else {
            String::new()
        };
        let base = od::cia402_channel_base(channel);

        let modes_key = ObjectKey::new(base + CIA402_SUPPORTED_MODES_OFFSET, 0);
        let text = bus.upload(slave.master, slave.position, modes_key.index, modes_key.sub_index)?;
        let modes = parse_upload_value(&text, modes_key)?;
        debug!(
            "[CiA402] Slave {}:{} channel {} supported drive modes 0x{:08x}",
            slave.master, slave.position, channel, modes
        );

        for switch in supported_mode_switches(modes) {
            params.push(ModParam::new(format!("{}{}", prefix, switch), "true"));
        }

        for feature in &OPTIONAL_FEATURES {
            let key = ObjectKey::new(base + feature.offset, feature.sub_index);
            if !slave.dictionary.contains(key) {
                continue;
            }
            params.push(ModParam::new(format!("{}{}", prefix, feature.name), "true"));
            if let Some((name, value)) = feature.companion {
                params.push(ModParam::new(format!("{}{}", prefix, name), value));
            }
        }
    }

    Ok(params)
}
