use crate::encoder::assembler::CapacityTarget;
use crate::models::{EcLevel, Version};
use std::sync::OnceLock;

fn parse_env_u8(name: &str, default: u8) -> u8 {
    std::env::var(name)
        .ok()
        .and_then(|v| v.trim().parse::<u8>().ok())
        .unwrap_or(default)
}

fn parse_env_string(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|v| v.trim().to_owned())
        .filter(|v| !v.is_empty())
}

static DEFAULT_VERSION: OnceLock<Version> = OnceLock::new();

pub(crate) fn default_version() -> Version {
    *DEFAULT_VERSION.get_or_init(|| {
        Version::new(parse_env_u8("QR_DEFAULT_VERSION", 1)).unwrap_or(Version::MIN)
    })
}

static DEFAULT_EC_LEVEL: OnceLock<EcLevel> = OnceLock::new();

pub(crate) fn default_ec_level() -> EcLevel {
    *DEFAULT_EC_LEVEL.get_or_init(|| {
        parse_env_string("QR_DEFAULT_EC_LEVEL")
            .map(|code| EcLevel::from_code(&code))
            .unwrap_or(EcLevel::L)
    })
}

static CAPACITY_TARGET: OnceLock<CapacityTarget> = OnceLock::new();

pub(crate) fn capacity_target() -> CapacityTarget {
    *CAPACITY_TARGET.get_or_init(|| {
        parse_env_string("QR_CAPACITY_TARGET")
            .and_then(|v| CapacityTarget::from_name(&v))
            .unwrap_or_default()
    })
}
