//! Recording link layer for host tests.

use crate::config::{
    ChannelSoundingConfig, ControllerConfig, PawrAdvertiserConfig, PawrSyncConfig,
    PowerControlConfig, TxPowerRange,
};
use crate::error::Status;
use crate::link_layer::LinkLayer;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Call {
    pub name: &'static str,
    pub args: Vec<i64>,
}

/// Records every call in order and fails the calls it was told to fail.
#[derive(Debug, Default)]
pub struct RecordingLinkLayer {
    pub calls: Vec<Call>,
    failures: Vec<(&'static str, Status)>,
    core_up: bool,
}

impl RecordingLinkLayer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every later call of `name` report `status`. Infallible calls ignore this.
    pub fn fail(mut self, name: &'static str, status: Status) -> Self {
        self.failures.push((name, status));
        self
    }

    pub fn set_failure(&mut self, name: &'static str, status: Status) {
        self.failures.push((name, status));
    }

    pub fn succeed(&mut self, name: &'static str) {
        self.failures.retain(|(n, _)| *n != name);
    }

    /// Pretend someone else already brought the core up.
    pub fn with_core_up(mut self) -> Self {
        self.core_up = true;
        self
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.calls.iter().map(|c| c.name).collect()
    }

    pub fn args(&self, name: &str) -> Option<&[i64]> {
        self.calls
            .iter()
            .find(|c| c.name == name)
            .map(|c| c.args.as_slice())
    }

    pub fn count(&self, name: &str) -> usize {
        self.calls.iter().filter(|c| c.name == name).count()
    }

    pub fn clear(&mut self) {
        self.calls.clear();
    }

    fn record(&mut self, name: &'static str, args: &[i64]) {
        self.calls.push(Call {
            name,
            args: args.to_vec(),
        });
    }

    fn outcome(&mut self, name: &'static str, args: &[i64]) -> Result<(), Status> {
        self.record(name, args);
        match self.failures.iter().find(|(n, _)| *n == name) {
            Some((_, status)) => Err(*status),
            None => Ok(()),
        }
    }
}

impl LinkLayer for RecordingLinkLayer {
    fn is_initialized(&self) -> bool {
        self.core_up
    }

    fn init_mem(&mut self, buffer_memory: u32) {
        self.record("init_mem", &[buffer_memory.into()]);
    }

    fn init_ll(&mut self, _config: &ControllerConfig) {
        self.record("init_ll", &[]);
        self.core_up = true;
    }

    fn debug_init(&mut self) {
        self.record("debug_init", &[]);
    }

    fn deinit_ll(&mut self) -> Result<(), Status> {
        self.core_up = false;
        self.outcome("deinit_ll", &[])
    }

    fn deinit_stack_ll(&mut self) -> Result<(), Status> {
        self.core_up = false;
        self.outcome("deinit_stack_ll", &[])
    }

    fn deinit_mem(&mut self) {
        self.record("deinit_mem", &[]);
    }

    fn configure_le_buffer_size(&mut self, max_size: u16) {
        self.record("configure_le_buffer_size", &[max_size.into()]);
    }

    fn events_init(&mut self) {
        self.record("events_init", &[]);
    }

    fn disable_2m_phy(&mut self) {
        self.record("disable_2m_phy", &[]);
    }

    fn disable_coded_phy(&mut self) {
        self.record("disable_coded_phy", &[]);
    }

    fn init_coex_hal(&mut self) {
        self.record("init_coex_hal", &[]);
    }

    fn init_multiprotocol(&mut self) {
        self.record("init_multiprotocol", &[]);
    }

    fn enable_radio_watchdog(&mut self) {
        self.record("enable_radio_watchdog", &[]);
    }

    fn init_highpower(&mut self) {
        self.record("init_highpower", &[]);
    }

    fn init_afh(&mut self, mode: u32) -> Result<(), Status> {
        self.outcome("init_afh", &[mode.into()])
    }

    fn init_adv(&mut self) {
        self.record("init_adv", &[]);
    }

    fn init_adv_ext(&mut self) {
        self.record("init_adv_ext", &[]);
    }

    fn init_scan(&mut self) {
        self.record("init_scan", &[]);
    }

    fn init_scan_ext(&mut self) {
        self.record("init_scan_ext", &[]);
    }

    fn configure_max_queued_adv_reports(&mut self, count: u8) {
        self.record("configure_max_queued_adv_reports", &[count.into()]);
    }

    fn enable_even_connsch(&mut self) {
        self.record("enable_even_connsch", &[]);
    }

    fn enable_pawr_connsch(&mut self) {
        self.record("enable_pawr_connsch", &[]);
    }

    fn init_conn(&mut self) {
        self.record("init_conn", &[]);
    }

    fn init_phy(&mut self) {
        self.record("init_phy", &[]);
    }

    fn init_conn_statistics(&mut self) {
        self.record("init_conn_statistics", &[]);
    }

    fn init_subrate(&mut self) {
        self.record("init_subrate", &[]);
    }

    fn allocate_conn_subrate_memory(&mut self, connections: u8) -> Result<(), Status> {
        self.outcome("allocate_conn_subrate_memory", &[connections.into()])
    }

    fn configure_completed_packets_reporting(&mut self, threshold: u8, events_timeout: u8) {
        self.record(
            "configure_completed_packets_reporting",
            &[threshold.into(), events_timeout.into()],
        );
    }

    fn set_min_max_tx_power(&mut self, range: TxPowerRange) {
        self.record("set_min_max_tx_power", &[range.min.into(), range.max.into()]);
    }

    fn init_power_control(
        &mut self,
        config: &PowerControlConfig,
        power_level: TxPowerRange,
    ) -> Result<(), Status> {
        self.outcome(
            "init_power_control",
            &[
                config.activate.into(),
                power_level.min.into(),
                power_level.max.into(),
            ],
        )
    }

    fn init_app_controlled_tx_power(&mut self) {
        self.record("init_app_controlled_tx_power", &[]);
    }

    fn init_periodic_adv(&mut self) {
        self.record("init_periodic_adv", &[]);
    }

    fn alloc_periodic_adv(&mut self, sets: u8) -> Result<(), Status> {
        self.outcome("alloc_periodic_adv", &[sets.into()])
    }

    fn pawr_advertiser_configure(&mut self, config: &PawrAdvertiserConfig) -> Result<(), Status> {
        self.outcome("pawr_advertiser_configure", &[config.max_pawr_sets.into()])
    }

    fn init_periodic_scan(&mut self) {
        self.record("init_periodic_scan", &[]);
    }

    fn alloc_periodic_scan(&mut self, syncs: u8) -> Result<(), Status> {
        self.outcome("alloc_periodic_scan", &[syncs.into()])
    }

    fn pawr_synchronizer_configure(&mut self, config: &PawrSyncConfig) -> Result<(), Status> {
        self.outcome("pawr_synchronizer_configure", &[config.max_pawr_sets.into()])
    }

    fn init_past_local_sync_transfer(&mut self) {
        self.record("init_past_local_sync_transfer", &[]);
    }

    fn init_past_remote_sync_transfer(&mut self) {
        self.record("init_past_remote_sync_transfer", &[]);
    }

    fn init_past_receiver(&mut self) {
        self.record("init_past_receiver", &[]);
    }

    fn init_cte_receiver(&mut self) -> Result<(), Status> {
        self.outcome("init_cte_receiver", &[])
    }

    fn init_cte_transmitter(&mut self) -> Result<(), Status> {
        self.outcome("init_cte_transmitter", &[])
    }

    fn init_cs(&mut self, config: &ChannelSoundingConfig) {
        self.record(
            "init_cs",
            &[config.configs_per_connection.into(), config.procedures.into()],
        );
    }

    fn init_sniff(&mut self, analyzers: u8) -> Result<(), Status> {
        self.outcome("init_sniff", &[analyzers.into()])
    }

    fn deinit_sniff(&mut self) {
        self.record("deinit_sniff", &[]);
    }

    fn init_basic(&mut self, connections: u8, advertisers: u8, accept_list: u8) {
        self.record(
            "init_basic",
            &[connections.into(), advertisers.into(), accept_list.into()],
        );
    }

    fn init_privacy(&mut self) {
        self.record("init_privacy", &[]);
    }

    fn allocate_resolving_list_memory(&mut self, entries: u8) -> Result<(), Status> {
        self.outcome("allocate_resolving_list_memory", &[entries.into()])
    }

    fn init_cis(&mut self) {
        self.record("init_cis", &[]);
    }

    fn hci_debug_enable(&mut self) {
        self.record("hci_debug_enable", &[]);
    }

    fn hci_enable_vendor_specific_debugging(&mut self) {
        self.record("hci_enable_vendor_specific_debugging", &[]);
    }

    fn test_protocol_init(&mut self) {
        self.record("test_protocol_init", &[]);
    }
}
