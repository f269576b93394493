//! Bootstrap and teardown step tables.
//!
//! A [`Plan`] is an ordered bootstrap table plus its teardown table. Each row pairs
//! a [`Gate`] with the link-layer call it makes, so the order and gating of the whole
//! sequence can be inspected without running it.
//!
//! Two plans exist:
//! - [`CONTROLLER`]: controller bring-up driven by the controller itself (RCP and
//!   controller-only applications).
//! - [`STACK`]: controller bring-up driven by a host stack on the same chip.
//!
//! Teardown is not the mirror of bootstrap. It only resets the subsystems that own
//! allocations, then takes down the core and its memory pool.

use crate::capability::{Capabilities as C, Gate};
use crate::config::{ControllerConfig, PawrAdvertiserConfig, PawrSyncConfig};
use crate::error::Status;
use crate::link_layer::LinkLayer;

/// Argument passed to [`LinkLayer::init_afh`].
const AFH_MODE: u32 = 1;

/// What a bootstrap step does and how its outcome is treated.
#[derive(Clone, Copy)]
pub enum Action {
    /// The call cannot fail.
    Infallible(fn(&mut dyn LinkLayer, &ControllerConfig)),
    /// A failure aborts the bootstrap.
    Checked(fn(&mut dyn LinkLayer, &ControllerConfig) -> Result<(), Status>),
    /// The call reports a status the sequence does not act on.
    Unchecked(fn(&mut dyn LinkLayer, &ControllerConfig) -> Result<(), Status>),
}

#[derive(Clone, Copy)]
pub struct Step {
    pub name: &'static str,
    pub gate: Gate,
    pub action: Action,
}

impl Step {
    /// Run the step. Only a failing [`Action::Checked`] step yields an error;
    /// an unchecked failure is logged and swallowed.
    pub fn run(&self, ll: &mut dyn LinkLayer, config: &ControllerConfig) -> Result<(), Status> {
        match self.action {
            Action::Infallible(f) => {
                f(ll, config);
                Ok(())
            }
            Action::Checked(f) => f(ll, config),
            Action::Unchecked(f) => {
                if let Err(status) = f(ll, config) {
                    warn!("{}: ignoring {}", self.name, status);
                }
                Ok(())
            }
        }
    }

    pub const fn is_fallible(&self) -> bool {
        matches!(self.action, Action::Checked(_))
    }
}

#[derive(Clone, Copy)]
pub struct TeardownStep {
    pub name: &'static str,
    pub gate: Gate,
    pub action: fn(&mut dyn LinkLayer) -> Result<(), Status>,
}

pub struct Plan {
    pub name: &'static str,
    pub bootstrap: &'static [Step],
    pub teardown: &'static [TeardownStep],
}

impl Plan {
    /// Bootstrap steps enabled for `caps`, in execution order.
    pub fn bootstrap_steps(&self, caps: C) -> impl Iterator<Item = &'static Step> {
        self.bootstrap.iter().filter(move |s| s.gate.is_open(caps))
    }

    /// Teardown steps enabled for `caps`, in execution order.
    pub fn teardown_steps(&self, caps: C) -> impl Iterator<Item = &'static TeardownStep> {
        self.teardown.iter().filter(move |s| s.gate.is_open(caps))
    }
}

//=============================================================================
// Bootstrap calls
//=============================================================================

fn memory_pool(ll: &mut dyn LinkLayer, cfg: &ControllerConfig) {
    ll.init_mem(cfg.buffer_memory);
}

fn core(ll: &mut dyn LinkLayer, cfg: &ControllerConfig) {
    ll.init_ll(cfg);
}

fn debug_hooks(ll: &mut dyn LinkLayer, _: &ControllerConfig) {
    ll.debug_init();
}

fn le_buffer_size(ll: &mut dyn LinkLayer, cfg: &ControllerConfig) {
    ll.configure_le_buffer_size(cfg.le_buffer_size_max);
}

fn event_queue(ll: &mut dyn LinkLayer, _: &ControllerConfig) {
    ll.events_init();
}

fn phy_support(ll: &mut dyn LinkLayer, cfg: &ControllerConfig) {
    if !cfg.phy.two_m {
        ll.disable_2m_phy();
    }
    if !cfg.phy.coded {
        ll.disable_coded_phy();
    }
}

fn coex(ll: &mut dyn LinkLayer, _: &ControllerConfig) {
    ll.init_coex_hal();
}

fn multiprotocol(ll: &mut dyn LinkLayer, _: &ControllerConfig) {
    ll.init_multiprotocol();
}

fn radio_watchdog(ll: &mut dyn LinkLayer, _: &ControllerConfig) {
    ll.enable_radio_watchdog();
}

fn advertiser(ll: &mut dyn LinkLayer, _: &ControllerConfig) {
    ll.init_adv();
}

fn extended_advertiser(ll: &mut dyn LinkLayer, _: &ControllerConfig) {
    ll.init_adv_ext();
}

fn scanner(ll: &mut dyn LinkLayer, _: &ControllerConfig) {
    ll.init_scan();
}

fn extended_scanner(ll: &mut dyn LinkLayer, _: &ControllerConfig) {
    ll.init_scan_ext();
}

fn even_scheduling(ll: &mut dyn LinkLayer, _: &ControllerConfig) {
    ll.enable_even_connsch();
}

fn pawr_scheduling(ll: &mut dyn LinkLayer, _: &ControllerConfig) {
    ll.enable_pawr_connsch();
}

fn connection(ll: &mut dyn LinkLayer, _: &ControllerConfig) {
    ll.init_conn();
}

fn phy_update(ll: &mut dyn LinkLayer, _: &ControllerConfig) {
    ll.init_phy();
}

fn connection_statistics(ll: &mut dyn LinkLayer, _: &ControllerConfig) {
    ll.init_conn_statistics();
}

fn subrating(ll: &mut dyn LinkLayer, _: &ControllerConfig) {
    ll.init_subrate();
}

fn subrate_memory(ll: &mut dyn LinkLayer, cfg: &ControllerConfig) -> Result<(), Status> {
    // validate() guarantees the sum fits.
    let connections = cfg.total_connections().unwrap_or(u8::MAX);
    ll.allocate_conn_subrate_memory(connections)
}

fn tx_power_range(ll: &mut dyn LinkLayer, cfg: &ControllerConfig) {
    ll.set_min_max_tx_power(cfg.tx_power);
}

fn power_control(ll: &mut dyn LinkLayer, cfg: &ControllerConfig) -> Result<(), Status> {
    ll.init_power_control(&cfg.power_control, cfg.power_control.power_level)
}

fn app_tx_power(ll: &mut dyn LinkLayer, _: &ControllerConfig) {
    ll.init_app_controlled_tx_power();
}

fn periodic_advertiser(ll: &mut dyn LinkLayer, _: &ControllerConfig) {
    ll.init_periodic_adv();
}

fn periodic_advertiser_sets(ll: &mut dyn LinkLayer, cfg: &ControllerConfig) -> Result<(), Status> {
    ll.alloc_periodic_adv(cfg.max_periodic_advertisers)
}

fn pawr_advertiser(ll: &mut dyn LinkLayer, cfg: &ControllerConfig) -> Result<(), Status> {
    ll.pawr_advertiser_configure(&cfg.pawr_advertiser)
}

fn periodic_sync(ll: &mut dyn LinkLayer, _: &ControllerConfig) {
    ll.init_periodic_scan();
}

fn periodic_sync_sets(ll: &mut dyn LinkLayer, cfg: &ControllerConfig) -> Result<(), Status> {
    ll.alloc_periodic_scan(cfg.max_periodic_sync)
}

fn pawr_sync(ll: &mut dyn LinkLayer, cfg: &ControllerConfig) -> Result<(), Status> {
    ll.pawr_synchronizer_configure(&cfg.pawr_sync)
}

fn afh(ll: &mut dyn LinkLayer, _: &ControllerConfig) -> Result<(), Status> {
    ll.init_afh(AFH_MODE)
}

fn high_power(ll: &mut dyn LinkLayer, _: &ControllerConfig) {
    ll.init_highpower();
}

fn cte_receiver(ll: &mut dyn LinkLayer, _: &ControllerConfig) -> Result<(), Status> {
    ll.init_cte_receiver()
}

fn cte_transmitter(ll: &mut dyn LinkLayer, _: &ControllerConfig) -> Result<(), Status> {
    ll.init_cte_transmitter()
}

fn past_local(ll: &mut dyn LinkLayer, _: &ControllerConfig) {
    ll.init_past_local_sync_transfer();
}

fn past_remote(ll: &mut dyn LinkLayer, _: &ControllerConfig) {
    ll.init_past_remote_sync_transfer();
}

fn past_receiver(ll: &mut dyn LinkLayer, _: &ControllerConfig) {
    ll.init_past_receiver();
}

fn connection_analyzer(ll: &mut dyn LinkLayer, cfg: &ControllerConfig) -> Result<(), Status> {
    ll.init_sniff(cfg.max_connection_analyzers)
}

fn channel_sounding(ll: &mut dyn LinkLayer, cfg: &ControllerConfig) {
    ll.init_cs(&cfg.channel_sounding);
}

fn basic_sizing(ll: &mut dyn LinkLayer, cfg: &ControllerConfig) {
    ll.init_basic(
        cfg.total_connections().unwrap_or(u8::MAX),
        cfg.total_advertisers().unwrap_or(u8::MAX),
        cfg.accept_list_size,
    );
}

fn privacy(ll: &mut dyn LinkLayer, _: &ControllerConfig) {
    ll.init_privacy();
}

fn resolving_list(ll: &mut dyn LinkLayer, cfg: &ControllerConfig) -> Result<(), Status> {
    ll.allocate_resolving_list_memory(cfg.resolving_list_size)
}

fn completed_packets(ll: &mut dyn LinkLayer, cfg: &ControllerConfig) {
    ll.configure_completed_packets_reporting(
        cfg.completed_packets.threshold,
        cfg.completed_packets.events_timeout,
    );
}

fn queued_adv_reports(ll: &mut dyn LinkLayer, cfg: &ControllerConfig) {
    ll.configure_max_queued_adv_reports(cfg.max_queued_adv_reports);
}

fn hci_debug(ll: &mut dyn LinkLayer, _: &ControllerConfig) {
    ll.hci_debug_enable();
}

fn hci_vendor_debugging(ll: &mut dyn LinkLayer, _: &ControllerConfig) {
    ll.hci_enable_vendor_specific_debugging();
}

fn test_protocol(ll: &mut dyn LinkLayer, _: &ControllerConfig) {
    ll.test_protocol_init();
}

fn cis(ll: &mut dyn LinkLayer, _: &ControllerConfig) {
    ll.init_cis();
}

const fn step(name: &'static str, gate: Gate, action: Action) -> Step {
    Step { name, gate, action }
}

use Action::{Checked, Infallible, Unchecked};

mod steps {
    use super::*;

    pub const MEMORY_POOL: Step = step("memory pool", Gate::ALWAYS, Infallible(memory_pool));
    pub const CORE: Step = step("link-layer core", Gate::ALWAYS, Infallible(core));
    pub const DEBUG_HOOKS: Step = step("debug hooks", Gate::ALWAYS, Infallible(debug_hooks));
    pub const LE_BUFFER_SIZE: Step =
        step("le buffer size", Gate::when(C::RCP), Infallible(le_buffer_size));
    pub const EVENT_QUEUE: Step = step(
        "event queue",
        Gate::when(C::RCP).unless(C::KERNEL),
        Infallible(event_queue),
    );
    pub const PHY_SUPPORT: Step = step(
        "phy support",
        Gate::when(C::PHY_SUPPORT_CONFIG),
        Infallible(phy_support),
    );
    pub const COEX: Step = step("coexistence", Gate::when(C::COEX), Infallible(coex));
    pub const MULTIPROTOCOL: Step = step(
        "multiprotocol",
        Gate::when(C::MULTIPROTOCOL),
        Infallible(multiprotocol),
    );
    pub const RADIO_WATCHDOG: Step = step(
        "radio watchdog",
        Gate::when(C::RADIO_WATCHDOG),
        Infallible(radio_watchdog),
    );
    pub const ADVERTISER: Step =
        step("advertiser", Gate::when(C::ADVERTISER), Infallible(advertiser));
    pub const EXTENDED_ADVERTISER: Step = step(
        "extended advertiser",
        Gate::when(C::EXTENDED_ADVERTISER),
        Infallible(extended_advertiser),
    );
    pub const SCANNER: Step = step("scanner", Gate::when(C::SCANNER), Infallible(scanner));
    pub const EXTENDED_SCANNER: Step = step(
        "extended scanner",
        Gate::when(C::EXTENDED_SCANNER),
        Infallible(extended_scanner),
    );
    /// The stack plan brings up extended scanning with the plain scanner capability.
    pub const EXTENDED_SCANNER_WITH_SCANNER: Step = step(
        "extended scanner",
        Gate::when(C::SCANNER),
        Infallible(extended_scanner),
    );
    pub const EVEN_SCHEDULING: Step = step(
        "even connection scheduling",
        Gate::when(C::EVEN_SCHEDULING),
        Infallible(even_scheduling),
    );
    pub const PAWR_SCHEDULING: Step = step(
        "pawr connection scheduling",
        Gate::when(C::CONNECTION_PAWR_SCHEDULING),
        Infallible(pawr_scheduling),
    );
    pub const CONNECTION: Step =
        step("connection", Gate::when(C::CONNECTION), Infallible(connection));
    pub const PHY_UPDATE: Step = step(
        "phy update",
        Gate::when(C::CONNECTION).unless(C::PHY_UPDATE_INCOMPATIBLE),
        Infallible(phy_update),
    );
    pub const CONNECTION_STATISTICS: Step = step(
        "connection statistics",
        Gate::when(C::CONNECTION_STATISTICS),
        Infallible(connection_statistics),
    );
    pub const SUBRATING: Step = step(
        "connection subrating",
        Gate::when(C::CONNECTION_SUBRATING),
        Infallible(subrating),
    );
    pub const SUBRATE_MEMORY: Step = step(
        "subrate memory",
        Gate::when(C::CONNECTION_SUBRATING),
        Checked(subrate_memory),
    );
    pub const TX_POWER_RANGE: Step = step(
        "tx power range",
        Gate::when(C::CONNECTION),
        Infallible(tx_power_range),
    );
    pub const POWER_CONTROL: Step = step(
        "power control",
        Gate::when(C::POWER_CONTROL),
        Checked(power_control),
    );
    pub const APP_TX_POWER: Step = step(
        "app-controlled tx power",
        Gate::when(C::USER_POWER_CONTROL),
        Infallible(app_tx_power),
    );
    pub const PERIODIC_ADVERTISER: Step = step(
        "periodic advertiser",
        Gate::when(C::PERIODIC_ADVERTISER),
        Infallible(periodic_advertiser),
    );
    pub const PERIODIC_ADVERTISER_SETS: Step = step(
        "periodic advertiser sets",
        Gate::when(C::PERIODIC_ADVERTISER),
        Unchecked(periodic_advertiser_sets),
    );
    pub const PAWR_ADVERTISER: Step = step(
        "pawr advertiser",
        Gate::when(C::PAWR_ADVERTISER),
        Checked(pawr_advertiser),
    );
    pub const PERIODIC_SYNC: Step =
        step("periodic sync", Gate::when(C::SYNC), Infallible(periodic_sync));
    pub const PERIODIC_SYNC_SETS: Step =
        step("periodic sync sets", Gate::when(C::SYNC), Checked(periodic_sync_sets));
    pub const PAWR_SYNC: Step = step("pawr sync", Gate::when(C::PAWR_SYNC), Checked(pawr_sync));
    pub const AFH: Step = step("afh", Gate::when(C::AFH), Checked(afh));
    pub const HIGH_POWER: Step =
        step("high power", Gate::when(C::HIGH_POWER), Infallible(high_power));
    pub const CTE_RECEIVER: Step = step(
        "cte receiver",
        Gate::any_of(C::AOA_RECEIVER.union(C::AOD_RECEIVER)),
        Checked(cte_receiver),
    );
    pub const CTE_TRANSMITTER: Step = step(
        "cte transmitter",
        Gate::any_of(C::AOA_TRANSMITTER.union(C::AOD_TRANSMITTER)),
        Checked(cte_transmitter),
    );
    pub const PAST_LOCAL: Step = step(
        "past local sync transfer",
        Gate::when(C::ADVERTISER_PAST),
        Infallible(past_local),
    );
    pub const PAST_REMOTE: Step = step(
        "past remote sync transfer",
        Gate::when(C::SYNC_PAST),
        Infallible(past_remote),
    );
    pub const PAST_RECEIVER: Step = step(
        "past receiver",
        Gate::when(C::PAST_RECEIVER),
        Infallible(past_receiver),
    );
    pub const CONNECTION_ANALYZER: Step = step(
        "connection analyzer",
        Gate::when(C::CONNECTION_ANALYZER),
        Checked(connection_analyzer),
    );
    pub const CHANNEL_SOUNDING: Step = step(
        "channel sounding",
        Gate::any_of(C::CS.union(C::CS_TEST)),
        Infallible(channel_sounding),
    );
    pub const BASIC_SIZING: Step = step("basic sizing", Gate::ALWAYS, Infallible(basic_sizing));
    pub const PRIVACY: Step =
        step("privacy", Gate::when(C::RESOLVING_LIST), Infallible(privacy));
    pub const RESOLVING_LIST: Step = step(
        "resolving list",
        Gate::when(C::RESOLVING_LIST),
        Checked(resolving_list),
    );
    /// Second AFH call after sizing; its status is not checked.
    pub const AFH_REFRESH: Step = step("afh refresh", Gate::when(C::AFH), Unchecked(afh));
    pub const HIGH_POWER_REFRESH: Step = step(
        "high power refresh",
        Gate::when(C::HIGH_POWER),
        Infallible(high_power),
    );
    pub const COMPLETED_PACKETS: Step = step(
        "completed packets reporting",
        Gate::when(C::CONNECTION),
        Infallible(completed_packets),
    );
    pub const QUEUED_ADV_REPORTS: Step = step(
        "queued advertising reports",
        Gate::when(C::SCANNER),
        Infallible(queued_adv_reports),
    );
    pub const HCI_DEBUG: Step = step("hci debug", Gate::when(C::HCI_DEBUG), Infallible(hci_debug));
    pub const HCI_VENDOR_DEBUGGING: Step = step(
        "hci vendor debugging",
        Gate::when(C::HCI_TEST_COMMANDS),
        Infallible(hci_vendor_debugging),
    );
    pub const TEST_PROTOCOL: Step = step(
        "test protocol",
        Gate::when(C::HCI_TEST_COMMANDS).and(C::MULTIPROTOCOL),
        Infallible(test_protocol),
    );
    pub const CIS: Step = step("cis", Gate::when(C::CIS), Infallible(cis));
}

//=============================================================================
// Teardown calls
//=============================================================================

fn release_analyzer(ll: &mut dyn LinkLayer) -> Result<(), Status> {
    ll.deinit_sniff();
    Ok(())
}

fn release_resolving_list(ll: &mut dyn LinkLayer) -> Result<(), Status> {
    ll.allocate_resolving_list_memory(0)
}

fn release_periodic_sync(ll: &mut dyn LinkLayer) -> Result<(), Status> {
    ll.alloc_periodic_scan(0)
}

fn release_pawr_advertiser(ll: &mut dyn LinkLayer) -> Result<(), Status> {
    ll.pawr_advertiser_configure(&PawrAdvertiserConfig::DISABLED)
}

fn release_pawr_sync(ll: &mut dyn LinkLayer) -> Result<(), Status> {
    ll.pawr_synchronizer_configure(&PawrSyncConfig::DISABLED)
}

fn release_periodic_advertiser(ll: &mut dyn LinkLayer) -> Result<(), Status> {
    ll.alloc_periodic_adv(0)
}

fn release_subrate_memory(ll: &mut dyn LinkLayer) -> Result<(), Status> {
    ll.allocate_conn_subrate_memory(0)
}

fn core_down(ll: &mut dyn LinkLayer) -> Result<(), Status> {
    ll.deinit_ll()
}

fn stack_core_down(ll: &mut dyn LinkLayer) -> Result<(), Status> {
    ll.deinit_stack_ll()
}

fn release_memory_pool(ll: &mut dyn LinkLayer) -> Result<(), Status> {
    ll.deinit_mem();
    Ok(())
}

const fn teardown(
    name: &'static str,
    gate: Gate,
    action: fn(&mut dyn LinkLayer) -> Result<(), Status>,
) -> TeardownStep {
    TeardownStep { name, gate, action }
}

mod teardown_steps {
    use super::*;

    pub const CONNECTION_ANALYZER: TeardownStep = teardown(
        "connection analyzer",
        Gate::when(C::CONNECTION_ANALYZER),
        release_analyzer,
    );
    pub const RESOLVING_LIST: TeardownStep = teardown(
        "resolving list",
        Gate::when(C::RESOLVING_LIST),
        release_resolving_list,
    );
    pub const PERIODIC_SYNC: TeardownStep =
        teardown("periodic sync sets", Gate::when(C::SYNC), release_periodic_sync);
    pub const PAWR_ADVERTISER: TeardownStep = teardown(
        "pawr advertiser",
        Gate::when(C::PAWR_ADVERTISER),
        release_pawr_advertiser,
    );
    pub const PAWR_SYNC: TeardownStep =
        teardown("pawr sync", Gate::when(C::PAWR_SYNC), release_pawr_sync);
    pub const PERIODIC_ADVERTISER: TeardownStep = teardown(
        "periodic advertiser sets",
        Gate::when(C::PERIODIC_ADVERTISER),
        release_periodic_advertiser,
    );
    pub const SUBRATE_MEMORY: TeardownStep = teardown(
        "subrate memory",
        Gate::when(C::CONNECTION_SUBRATING),
        release_subrate_memory,
    );
    pub const CORE: TeardownStep = teardown("link-layer core", Gate::ALWAYS, core_down);
    pub const STACK_CORE: TeardownStep =
        teardown("link-layer core", Gate::ALWAYS, stack_core_down);
    pub const MEMORY_POOL: TeardownStep =
        teardown("memory pool", Gate::ALWAYS, release_memory_pool);
}

//=============================================================================
// Plans
//=============================================================================

/// Controller bring-up driven by the controller (RCP / controller-only builds).
pub static CONTROLLER: Plan = Plan {
    name: "controller",
    bootstrap: &[
        steps::MEMORY_POOL,
        steps::CORE,
        steps::DEBUG_HOOKS,
        steps::LE_BUFFER_SIZE,
        steps::EVENT_QUEUE,
        steps::PHY_SUPPORT,
        steps::COEX,
        steps::MULTIPROTOCOL,
        steps::RADIO_WATCHDOG,
        steps::ADVERTISER,
        steps::EXTENDED_ADVERTISER,
        steps::SCANNER,
        steps::EXTENDED_SCANNER,
        steps::EVEN_SCHEDULING,
        steps::PAWR_SCHEDULING,
        steps::CONNECTION,
        steps::PHY_UPDATE,
        steps::CONNECTION_STATISTICS,
        steps::SUBRATING,
        steps::SUBRATE_MEMORY,
        steps::TX_POWER_RANGE,
        steps::POWER_CONTROL,
        steps::APP_TX_POWER,
        steps::PERIODIC_ADVERTISER,
        steps::PERIODIC_ADVERTISER_SETS,
        steps::PAWR_ADVERTISER,
        steps::PERIODIC_SYNC,
        steps::PERIODIC_SYNC_SETS,
        steps::PAWR_SYNC,
        steps::AFH,
        steps::HIGH_POWER,
        steps::PHY_SUPPORT,
        steps::CTE_RECEIVER,
        steps::CTE_TRANSMITTER,
        steps::PAST_LOCAL,
        steps::PAST_REMOTE,
        steps::PAST_RECEIVER,
        steps::CONNECTION_ANALYZER,
        steps::CHANNEL_SOUNDING,
        steps::BASIC_SIZING,
        steps::PRIVACY,
        steps::RESOLVING_LIST,
        steps::AFH_REFRESH,
        steps::HIGH_POWER_REFRESH,
        steps::COMPLETED_PACKETS,
        steps::QUEUED_ADV_REPORTS,
        steps::CIS,
    ],
    teardown: &[
        teardown_steps::CONNECTION_ANALYZER,
        teardown_steps::RESOLVING_LIST,
        teardown_steps::PERIODIC_SYNC,
        teardown_steps::PAWR_ADVERTISER,
        teardown_steps::PAWR_SYNC,
        teardown_steps::PERIODIC_ADVERTISER,
        teardown_steps::SUBRATE_MEMORY,
        teardown_steps::CORE,
        teardown_steps::MEMORY_POOL,
    ],
};

/// Controller bring-up driven by a host stack running on the same chip.
pub static STACK: Plan = Plan {
    name: "stack",
    bootstrap: &[
        steps::MEMORY_POOL,
        steps::CORE,
        steps::DEBUG_HOOKS,
        steps::LE_BUFFER_SIZE,
        steps::EVENT_QUEUE,
        steps::PHY_SUPPORT,
        steps::COEX,
        steps::MULTIPROTOCOL,
        steps::RADIO_WATCHDOG,
        steps::ADVERTISER,
        steps::EXTENDED_ADVERTISER,
        steps::SCANNER,
        steps::EVEN_SCHEDULING,
        steps::PAWR_SCHEDULING,
        steps::CONNECTION,
        steps::PHY_UPDATE,
        steps::CONNECTION_STATISTICS,
        steps::SUBRATING,
        steps::SUBRATE_MEMORY,
        steps::POWER_CONTROL,
        steps::APP_TX_POWER,
        steps::EXTENDED_SCANNER_WITH_SCANNER,
        steps::PERIODIC_ADVERTISER,
        steps::PERIODIC_ADVERTISER_SETS,
        steps::PAWR_ADVERTISER,
        steps::PERIODIC_SYNC,
        steps::PERIODIC_SYNC_SETS,
        steps::PAWR_SYNC,
        steps::AFH,
        steps::HIGH_POWER,
        steps::PHY_SUPPORT,
        steps::CTE_RECEIVER,
        steps::CTE_TRANSMITTER,
        steps::PAST_LOCAL,
        steps::PAST_REMOTE,
        steps::PAST_RECEIVER,
        steps::CONNECTION_ANALYZER,
        steps::CHANNEL_SOUNDING,
        steps::BASIC_SIZING,
        steps::PRIVACY,
        steps::RESOLVING_LIST,
        steps::AFH_REFRESH,
        steps::HIGH_POWER_REFRESH,
        steps::COMPLETED_PACKETS,
        steps::QUEUED_ADV_REPORTS,
        steps::HCI_DEBUG,
        steps::HCI_VENDOR_DEBUGGING,
        steps::TEST_PROTOCOL,
        steps::CIS,
    ],
    teardown: &[
        teardown_steps::CONNECTION_ANALYZER,
        teardown_steps::RESOLVING_LIST,
        teardown_steps::PERIODIC_SYNC,
        teardown_steps::PAWR_ADVERTISER,
        teardown_steps::PAWR_SYNC,
        teardown_steps::PERIODIC_ADVERTISER,
        teardown_steps::SUBRATE_MEMORY,
        teardown_steps::STACK_CORE,
        teardown_steps::MEMORY_POOL,
    ],
};
