//! Link-layer sizing configuration.
//!
//! [`ControllerConfig`] is a flat record of the sizing parameters the bootstrap
//! hands to the link-layer library. Every field defaults to zero or disabled; a
//! build sets what it needs through `const` builder methods so the whole config
//! can live in a `const` item.
//!
//! # Example
//!
//! ```
//! use btctrl_init::ControllerConfig;
//!
//! const CONFIG: ControllerConfig = ControllerConfig::new()
//!     .buffer_memory(8 * 1024)
//!     .max_connections(4)
//!     .user_advertisers(2)
//!     .accept_list_size(8);
//! ```

use crate::error::Status;

/// Which optional PHYs the controller keeps enabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Deserialize), serde(default, deny_unknown_fields))]
pub struct PhySupport {
    pub two_m: bool,
    pub coded: bool,
}

impl PhySupport {
    pub const ALL: Self = Self {
        two_m: true,
        coded: true,
    };
}

impl Default for PhySupport {
    fn default() -> Self {
        Self::ALL
    }
}

/// TX power range in 0.1 dBm units.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Deserialize), serde(default, deny_unknown_fields))]
pub struct TxPowerRange {
    pub min: i16,
    pub max: i16,
}

impl TxPowerRange {
    /// Defer to the lowest and highest levels the radio supports.
    pub const RADIO_LIMITS: Self = Self {
        min: i16::MIN,
        max: i16::MAX,
    };
}

impl Default for TxPowerRange {
    fn default() -> Self {
        Self::RADIO_LIMITS
    }
}

/// Golden RSSI window for one PHY, in dBm.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Deserialize), serde(default, deny_unknown_fields))]
pub struct GoldenRange {
    pub min: i8,
    pub max: i8,
}

impl GoldenRange {
    pub const DEFAULT: Self = Self { min: -75, max: -45 };
}

impl Default for GoldenRange {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// LE power control parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Deserialize), serde(default, deny_unknown_fields))]
pub struct PowerControlConfig {
    /// Actively request power changes from peers, not only respond to them.
    pub activate: bool,
    pub golden_1m: GoldenRange,
    pub golden_2m: GoldenRange,
    pub golden_coded_s8: GoldenRange,
    pub golden_coded_s2: GoldenRange,
    /// Range the power control loop may move the local TX power in.
    pub power_level: TxPowerRange,
}

impl PowerControlConfig {
    /// Size of the serialized block.
    pub const ENCODED_LEN: usize = 9;

    pub const fn new() -> Self {
        Self {
            activate: false,
            golden_1m: GoldenRange::DEFAULT,
            golden_2m: GoldenRange::DEFAULT,
            golden_coded_s8: GoldenRange::DEFAULT,
            golden_coded_s2: GoldenRange::DEFAULT,
            power_level: TxPowerRange::RADIO_LIMITS,
        }
    }

    /// Serialize to the packed layout the library reads: the activate flag followed
    /// by min/max pairs for 1M, 2M, coded S8 and coded S2.
    pub const fn to_bytes(&self) -> [u8; Self::ENCODED_LEN] {
        [
            self.activate as u8,
            self.golden_1m.min as u8,
            self.golden_1m.max as u8,
            self.golden_2m.min as u8,
            self.golden_2m.max as u8,
            self.golden_coded_s8.min as u8,
            self.golden_coded_s8.max as u8,
            self.golden_coded_s2.min as u8,
            self.golden_coded_s2.max as u8,
        ]
    }
}

impl Default for PowerControlConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Completed-packets event throttling for connections.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Deserialize), serde(default, deny_unknown_fields))]
pub struct CompletedPacketsReporting {
    /// Packets to accumulate before an event is raised.
    pub threshold: u8,
    /// Connection events to wait before reporting a partial count.
    pub events_timeout: u8,
}

/// PAwR advertiser sizing. Passed to the library by pointer.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Deserialize), serde(default, deny_unknown_fields))]
pub struct PawrAdvertiserConfig {
    pub max_pawr_sets: u8,
    pub max_advertised_data_length_hint: u8,
    pub subevent_data_request_count: u8,
    pub subevent_data_request_advance: u8,
}

impl PawrAdvertiserConfig {
    /// Releases every PAwR advertiser allocation.
    pub const DISABLED: Self = Self {
        max_pawr_sets: 0,
        max_advertised_data_length_hint: 0,
        subevent_data_request_count: 0,
        subevent_data_request_advance: 0,
    };
}

/// PAwR synchronizer sizing. Passed to the library by pointer.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Deserialize), serde(default, deny_unknown_fields))]
pub struct PawrSyncConfig {
    pub max_pawr_sets: u8,
}

impl PawrSyncConfig {
    pub const DISABLED: Self = Self { max_pawr_sets: 0 };
}

/// Channel sounding sizing. Passed to the library by pointer.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Deserialize), serde(default, deny_unknown_fields))]
pub struct ChannelSoundingConfig {
    pub configs_per_connection: u8,
    pub procedures: u8,
}

/// Complete link-layer sizing configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Deserialize), serde(default, deny_unknown_fields))]
pub struct ControllerConfig {
    pub(crate) buffer_memory: u32,
    pub(crate) le_buffer_size_max: u16,
    pub(crate) max_connections: u8,
    pub(crate) component_connections: u8,
    pub(crate) user_advertisers: u8,
    pub(crate) component_advertisers: u8,
    pub(crate) accept_list_size: u8,
    pub(crate) resolving_list_size: u8,
    pub(crate) max_periodic_advertisers: u8,
    pub(crate) max_periodic_sync: u8,
    pub(crate) max_connection_analyzers: u8,
    pub(crate) max_queued_adv_reports: u8,
    #[cfg_attr(feature = "serde", serde(rename = "phy_support"))]
    pub(crate) phy: PhySupport,
    pub(crate) tx_power: TxPowerRange,
    pub(crate) power_control: PowerControlConfig,
    pub(crate) completed_packets: CompletedPacketsReporting,
    pub(crate) pawr_advertiser: PawrAdvertiserConfig,
    pub(crate) pawr_sync: PawrSyncConfig,
    pub(crate) channel_sounding: ChannelSoundingConfig,
}

impl ControllerConfig {
    /// Everything zero or disabled, all PHYs supported.
    pub const fn new() -> Self {
        Self {
            buffer_memory: 0,
            le_buffer_size_max: 0,
            max_connections: 0,
            component_connections: 0,
            user_advertisers: 0,
            component_advertisers: 0,
            accept_list_size: 0,
            resolving_list_size: 0,
            max_periodic_advertisers: 0,
            max_periodic_sync: 0,
            max_connection_analyzers: 0,
            max_queued_adv_reports: 0,
            phy: PhySupport::ALL,
            tx_power: TxPowerRange::RADIO_LIMITS,
            power_control: PowerControlConfig::new(),
            completed_packets: CompletedPacketsReporting {
                threshold: 0,
                events_timeout: 0,
            },
            pawr_advertiser: PawrAdvertiserConfig::DISABLED,
            pawr_sync: PawrSyncConfig::DISABLED,
            channel_sounding: ChannelSoundingConfig {
                configs_per_connection: 0,
                procedures: 0,
            },
        }
    }

    /// Bytes reserved for the link-layer memory pool.
    pub const fn buffer_memory(mut self, bytes: u32) -> Self {
        self.buffer_memory = bytes;
        self
    }

    /// Largest LE ACL buffer a controller-only build advertises to its host.
    pub const fn le_buffer_size_max(mut self, bytes: u16) -> Self {
        self.le_buffer_size_max = bytes;
        self
    }

    /// Connections available to the application.
    pub const fn max_connections(mut self, count: u8) -> Self {
        self.max_connections = count;
        self
    }

    /// Connections reserved by internal components, on top of the application's.
    pub const fn component_connections(mut self, count: u8) -> Self {
        self.component_connections = count;
        self
    }

    /// Advertising sets available to the application.
    pub const fn user_advertisers(mut self, count: u8) -> Self {
        self.user_advertisers = count;
        self
    }

    /// Advertising sets reserved by internal components.
    pub const fn component_advertisers(mut self, count: u8) -> Self {
        self.component_advertisers = count;
        self
    }

    pub const fn accept_list_size(mut self, entries: u8) -> Self {
        self.accept_list_size = entries;
        self
    }

    pub const fn resolving_list_size(mut self, entries: u8) -> Self {
        self.resolving_list_size = entries;
        self
    }

    pub const fn max_periodic_advertisers(mut self, count: u8) -> Self {
        self.max_periodic_advertisers = count;
        self
    }

    pub const fn max_periodic_sync(mut self, count: u8) -> Self {
        self.max_periodic_sync = count;
        self
    }

    pub const fn max_connection_analyzers(mut self, count: u8) -> Self {
        self.max_connection_analyzers = count;
        self
    }

    /// Advertising reports the scanner may queue before dropping.
    pub const fn max_queued_adv_reports(mut self, count: u8) -> Self {
        self.max_queued_adv_reports = count;
        self
    }

    pub const fn phy_support(mut self, phy: PhySupport) -> Self {
        self.phy = phy;
        self
    }

    pub const fn tx_power(mut self, range: TxPowerRange) -> Self {
        self.tx_power = range;
        self
    }

    pub const fn power_control(mut self, config: PowerControlConfig) -> Self {
        self.power_control = config;
        self
    }

    pub const fn completed_packets(mut self, reporting: CompletedPacketsReporting) -> Self {
        self.completed_packets = reporting;
        self
    }

    pub const fn pawr_advertiser(mut self, config: PawrAdvertiserConfig) -> Self {
        self.pawr_advertiser = config;
        self
    }

    pub const fn pawr_sync(mut self, config: PawrSyncConfig) -> Self {
        self.pawr_sync = config;
        self
    }

    pub const fn channel_sounding(mut self, config: ChannelSoundingConfig) -> Self {
        self.channel_sounding = config;
        self
    }

    /// Application connections plus component connections.
    pub const fn total_connections(&self) -> Option<u8> {
        self.max_connections.checked_add(self.component_connections)
    }

    /// Application advertising sets plus component advertising sets.
    pub const fn total_advertisers(&self) -> Option<u8> {
        self.user_advertisers.checked_add(self.component_advertisers)
    }

    /// Reject values the library cannot represent.
    pub fn validate(&self) -> Result<(), Status> {
        if self.total_connections().is_none() {
            error!(
                "connection count {} + {} overflows",
                self.max_connections, self.component_connections
            );
            return Err(Status::InvalidParameter);
        }
        if self.total_advertisers().is_none() {
            error!(
                "advertiser count {} + {} overflows",
                self.user_advertisers, self.component_advertisers
            );
            return Err(Status::InvalidParameter);
        }
        if self.tx_power.min > self.tx_power.max
            || self.power_control.power_level.min > self.power_control.power_level.max
        {
            error!("tx power range is inverted");
            return Err(Status::InvalidParameter);
        }
        Ok(())
    }
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self::new()
    }
}
