//! Optional link-layer subsystems and the gates built from them.
//!
//! A build selects its subsystems through cargo features; [`Capabilities::from_features`]
//! folds those into a flag set at compile time. Tests and host tooling construct the set
//! directly instead.

use bitflags::bitflags;

bitflags! {
    /// Set of optional subsystems included in a build.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Capabilities: u64 {
        /// Controller-only (RCP) build: the host stack runs elsewhere.
        const RCP = 1 << 0;
        /// An RTOS kernel owns the event loop.
        const KERNEL = 1 << 1;
        /// PHY support is configured explicitly (2M / coded may be disabled).
        const PHY_SUPPORT_CONFIG = 1 << 2;
        /// Radio coexistence HAL.
        const COEX = 1 << 3;
        /// Multiprotocol radio scheduling.
        const MULTIPROTOCOL = 1 << 4;
        const RADIO_WATCHDOG = 1 << 5;
        const ADVERTISER = 1 << 6;
        const EXTENDED_ADVERTISER = 1 << 7;
        const SCANNER = 1 << 8;
        const EXTENDED_SCANNER = 1 << 9;
        const EVEN_SCHEDULING = 1 << 10;
        const CONNECTION_PAWR_SCHEDULING = 1 << 11;
        const CONNECTION = 1 << 12;
        /// Connections must not negotiate PHY updates.
        const PHY_UPDATE_INCOMPATIBLE = 1 << 13;
        const CONNECTION_STATISTICS = 1 << 14;
        const CONNECTION_SUBRATING = 1 << 15;
        /// LE power control with golden RSSI ranges.
        const POWER_CONTROL = 1 << 16;
        /// Application-controlled TX power.
        const USER_POWER_CONTROL = 1 << 17;
        const PERIODIC_ADVERTISER = 1 << 18;
        const PAWR_ADVERTISER = 1 << 19;
        /// Periodic advertising synchronization.
        const SYNC = 1 << 20;
        const PAWR_SYNC = 1 << 21;
        /// Adaptive frequency hopping.
        const AFH = 1 << 22;
        const HIGH_POWER = 1 << 23;
        const AOA_RECEIVER = 1 << 24;
        const AOD_RECEIVER = 1 << 25;
        const AOA_TRANSMITTER = 1 << 26;
        const AOD_TRANSMITTER = 1 << 27;
        /// Periodic advertising sync transfer of a local advertising set.
        const ADVERTISER_PAST = 1 << 28;
        /// Periodic advertising sync transfer of a remote sync.
        const SYNC_PAST = 1 << 29;
        const PAST_RECEIVER = 1 << 30;
        /// Passive connection analyzer (sniffer).
        const CONNECTION_ANALYZER = 1 << 31;
        /// Channel sounding.
        const CS = 1 << 32;
        const CS_TEST = 1 << 33;
        const RESOLVING_LIST = 1 << 34;
        /// Connected isochronous streams.
        const CIS = 1 << 35;
        const HCI_DEBUG = 1 << 36;
        const HCI_TEST_COMMANDS = 1 << 37;
    }
}

/// Cargo feature that selects a capability, and whether it is enabled in this build.
#[derive(Debug, Clone, Copy)]
pub struct FeatureSwitch {
    pub feature: &'static str,
    pub capability: Capabilities,
    pub enabled: bool,
}

macro_rules! switches {
    ($($feature:tt => $flag:ident),* $(,)?) => {
        &[$(
            FeatureSwitch {
                feature: $feature,
                capability: Capabilities::$flag,
                enabled: cfg!(feature = $feature),
            }
        ),*]
    };
}

impl Capabilities {
    /// Every capability paired with the cargo feature that turns it on.
    pub const FEATURES: &'static [FeatureSwitch] = switches![
        "rcp" => RCP,
        "kernel" => KERNEL,
        "phy-support-config" => PHY_SUPPORT_CONFIG,
        "coex" => COEX,
        "multiprotocol" => MULTIPROTOCOL,
        "radio-watchdog" => RADIO_WATCHDOG,
        "advertiser" => ADVERTISER,
        "extended-advertiser" => EXTENDED_ADVERTISER,
        "scanner" => SCANNER,
        "extended-scanner" => EXTENDED_SCANNER,
        "even-scheduling" => EVEN_SCHEDULING,
        "connection-pawr-scheduling" => CONNECTION_PAWR_SCHEDULING,
        "connection" => CONNECTION,
        "phy-update-incompatible" => PHY_UPDATE_INCOMPATIBLE,
        "connection-statistics" => CONNECTION_STATISTICS,
        "connection-subrating" => CONNECTION_SUBRATING,
        "power-control" => POWER_CONTROL,
        "user-power-control" => USER_POWER_CONTROL,
        "periodic-advertiser" => PERIODIC_ADVERTISER,
        "pawr-advertiser" => PAWR_ADVERTISER,
        "sync" => SYNC,
        "pawr-sync" => PAWR_SYNC,
        "afh" => AFH,
        "high-power" => HIGH_POWER,
        "aoa-receiver" => AOA_RECEIVER,
        "aod-receiver" => AOD_RECEIVER,
        "aoa-transmitter" => AOA_TRANSMITTER,
        "aod-transmitter" => AOD_TRANSMITTER,
        "advertiser-past" => ADVERTISER_PAST,
        "sync-past" => SYNC_PAST,
        "past-receiver" => PAST_RECEIVER,
        "connection-analyzer" => CONNECTION_ANALYZER,
        "cs" => CS,
        "cs-test" => CS_TEST,
        "resolving-list" => RESOLVING_LIST,
        "cis" => CIS,
        "hci-debug" => HCI_DEBUG,
        "hci-test-commands" => HCI_TEST_COMMANDS,
    ];

    /// Capabilities selected by the cargo features of this build.
    pub const fn from_features() -> Self {
        let mut caps = Self::empty();
        let mut i = 0;
        while i < Self::FEATURES.len() {
            let switch = &Self::FEATURES[i];
            if switch.enabled {
                caps = caps.union(switch.capability);
            }
            i += 1;
        }
        caps
    }

    /// Cargo feature name of a single capability flag.
    pub fn feature_name(self) -> Option<&'static str> {
        Self::FEATURES
            .iter()
            .find(|switch| switch.capability == self)
            .map(|switch| switch.feature)
    }

    /// Look up a capability by its cargo feature name (`"extended-advertiser"`).
    pub fn from_feature_name(feature: &str) -> Option<Self> {
        Self::FEATURES
            .iter()
            .find(|switch| switch.feature == feature)
            .map(|switch| switch.capability)
    }

    /// Cargo feature names of every flag in the set, in declaration order.
    pub fn feature_names(self) -> impl Iterator<Item = &'static str> {
        self.iter().filter_map(Self::feature_name)
    }
}

/// Predicate over [`Capabilities`] that decides whether a step runs.
///
/// A gate is open when the set contains every `all` flag, at least one `any` flag
/// (if `any` is non-empty) and none of the `none` flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Gate {
    all: Capabilities,
    any: Capabilities,
    none: Capabilities,
}

impl Gate {
    /// Open for every capability set.
    pub const ALWAYS: Gate = Gate {
        all: Capabilities::empty(),
        any: Capabilities::empty(),
        none: Capabilities::empty(),
    };

    /// Open when all of `caps` are present.
    pub const fn when(caps: Capabilities) -> Self {
        Gate {
            all: caps,
            ..Self::ALWAYS
        }
    }

    /// Open when at least one of `caps` is present.
    pub const fn any_of(caps: Capabilities) -> Self {
        Gate {
            any: caps,
            ..Self::ALWAYS
        }
    }

    /// Additionally require all of `caps`.
    pub const fn and(mut self, caps: Capabilities) -> Self {
        self.all = self.all.union(caps);
        self
    }

    /// Close the gate when any of `caps` is present.
    pub const fn unless(mut self, caps: Capabilities) -> Self {
        self.none = self.none.union(caps);
        self
    }

    pub const fn is_open(&self, caps: Capabilities) -> bool {
        caps.contains(self.all)
            && (self.any.is_empty() || caps.intersects(self.any))
            && !caps.intersects(self.none)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn feature_table_covers_every_flag_once() {
        let mut seen = Capabilities::empty();
        for switch in Capabilities::FEATURES.iter() {
            assert!(!seen.intersects(switch.capability), "{}", switch.feature);
            seen |= switch.capability;
        }
        assert_eq!(seen, Capabilities::all());
    }

    #[test]
    fn feature_names_round_trip() {
        for (name, flag) in Capabilities::all().iter_names() {
            let feature = flag.feature_name().unwrap();
            assert_eq!(Capabilities::from_feature_name(feature), Some(flag), "{name}");
        }
        assert_eq!(Capabilities::from_feature_name("bogus"), None);
    }

    #[test]
    fn from_features_follows_the_enabled_features() {
        let caps = Capabilities::from_features();
        assert_eq!(caps.contains(Capabilities::RCP), cfg!(feature = "rcp"));
        assert_eq!(caps.contains(Capabilities::ADVERTISER), cfg!(feature = "advertiser"));
        assert_eq!(caps.contains(Capabilities::CONNECTION), cfg!(feature = "connection"));
        assert_eq!(caps.contains(Capabilities::AFH), cfg!(feature = "afh"));
        assert_eq!(caps.contains(Capabilities::HCI_DEBUG), cfg!(feature = "hci-debug"));

        for switch in Capabilities::FEATURES {
            assert_eq!(caps.contains(switch.capability), switch.enabled, "{}", switch.feature);
        }
    }

    #[test]
    fn feature_names_follow_declaration_order() {
        let caps = Capabilities::SCANNER | Capabilities::ADVERTISER | Capabilities::CIS;
        let names: Vec<_> = caps.feature_names().collect();
        assert_eq!(names, ["advertiser", "scanner", "cis"]);
    }

    #[test]
    fn always_gate_is_open_for_empty_set() {
        assert!(Gate::ALWAYS.is_open(Capabilities::empty()));
        assert!(Gate::ALWAYS.is_open(Capabilities::all()));
    }

    #[test]
    fn any_of_gate_needs_one_member() {
        let gate = Gate::any_of(Capabilities::AOA_RECEIVER | Capabilities::AOD_RECEIVER);
        assert!(!gate.is_open(Capabilities::CONNECTION));
        assert!(gate.is_open(Capabilities::AOD_RECEIVER));
        assert!(gate.is_open(Capabilities::AOA_RECEIVER | Capabilities::AOD_RECEIVER));
    }

    #[test]
    fn unless_closes_the_gate() {
        let gate = Gate::when(Capabilities::CONNECTION).unless(Capabilities::PHY_UPDATE_INCOMPATIBLE);
        assert!(gate.is_open(Capabilities::CONNECTION));
        assert!(!gate.is_open(Capabilities::CONNECTION | Capabilities::PHY_UPDATE_INCOMPATIBLE));
        assert!(!gate.is_open(Capabilities::PHY_UPDATE_INCOMPATIBLE));
    }

    #[test]
    fn and_requires_both() {
        let gate = Gate::when(Capabilities::HCI_TEST_COMMANDS).and(Capabilities::MULTIPROTOCOL);
        assert!(!gate.is_open(Capabilities::HCI_TEST_COMMANDS));
        assert!(gate.is_open(Capabilities::HCI_TEST_COMMANDS | Capabilities::MULTIPROTOCOL));
    }
}
