//! Link layer that writes down what it is asked to do.

use btctrl_init::{
    ChannelSoundingConfig, ControllerConfig, LinkLayer, PawrAdvertiserConfig, PawrSyncConfig,
    PowerControlConfig, Status, TxPowerRange,
};

/// Calls that report a status. Only these can be made to fail.
pub const FALLIBLE: &[&str] = &[
    "deinit_ll",
    "deinit_stack_ll",
    "init_afh",
    "allocate_conn_subrate_memory",
    "init_power_control",
    "alloc_periodic_adv",
    "pawr_advertiser_configure",
    "alloc_periodic_scan",
    "pawr_synchronizer_configure",
    "init_cte_receiver",
    "init_cte_transmitter",
    "init_sniff",
    "allocate_resolving_list_memory",
];

/// Status a failing call reports: allocations run out of memory, the rest just fail.
fn failure_of(name: &str) -> Status {
    if name.starts_with("alloc") {
        Status::AllocationFailed
    } else {
        Status::Fail
    }
}

#[derive(Debug, Default)]
pub struct PrintingLinkLayer {
    lines: Vec<String>,
    fail_at: Option<String>,
    core_up: bool,
}

impl PrintingLinkLayer {
    pub fn new(fail_at: Option<String>) -> Self {
        Self {
            fail_at,
            ..Self::default()
        }
    }

    /// Drain the calls recorded since the last take.
    pub fn take(&mut self) -> Vec<String> {
        std::mem::take(&mut self.lines)
    }

    fn call(&mut self, name: &str, args: String) {
        self.lines.push(format!("{name}({args})"));
    }

    fn status(&mut self, name: &str, args: String) -> Result<(), Status> {
        if self.fail_at.as_deref() == Some(name) {
            let status = failure_of(name);
            self.lines.push(format!("{name}({args}) -> {status}"));
            return Err(status);
        }
        self.call(name, args);
        Ok(())
    }
}

impl LinkLayer for PrintingLinkLayer {
    fn is_initialized(&self) -> bool {
        self.core_up
    }

    fn init_mem(&mut self, buffer_memory: u32) {
        self.call("init_mem", format!("buffer_memory={buffer_memory}"));
    }

    fn init_ll(&mut self, config: &ControllerConfig) {
        self.call(
            "init_ll",
            format!(
                "connections={}, advertisers={}",
                config.total_connections().unwrap_or(u8::MAX),
                config.total_advertisers().unwrap_or(u8::MAX)
            ),
        );
        self.core_up = true;
    }

    fn debug_init(&mut self) {
        self.call("debug_init", String::new());
    }

    fn deinit_ll(&mut self) -> Result<(), Status> {
        self.core_up = false;
        self.status("deinit_ll", String::new())
    }

    fn deinit_stack_ll(&mut self) -> Result<(), Status> {
        self.core_up = false;
        self.status("deinit_stack_ll", String::new())
    }

    fn deinit_mem(&mut self) {
        self.call("deinit_mem", String::new());
    }

    fn configure_le_buffer_size(&mut self, max_size: u16) {
        self.call("configure_le_buffer_size", format!("max_size={max_size}"));
    }

    fn events_init(&mut self) {
        self.call("events_init", String::new());
    }

    fn disable_2m_phy(&mut self) {
        self.call("disable_2m_phy", String::new());
    }

    fn disable_coded_phy(&mut self) {
        self.call("disable_coded_phy", String::new());
    }

    fn init_coex_hal(&mut self) {
        self.call("init_coex_hal", String::new());
    }

    fn init_multiprotocol(&mut self) {
        self.call("init_multiprotocol", String::new());
    }

    fn enable_radio_watchdog(&mut self) {
        self.call("enable_radio_watchdog", String::new());
    }

    fn init_highpower(&mut self) {
        self.call("init_highpower", String::new());
    }

    fn init_afh(&mut self, mode: u32) -> Result<(), Status> {
        self.status("init_afh", format!("mode={mode}"))
    }

    fn init_adv(&mut self) {
        self.call("init_adv", String::new());
    }

    fn init_adv_ext(&mut self) {
        self.call("init_adv_ext", String::new());
    }

    fn init_scan(&mut self) {
        self.call("init_scan", String::new());
    }

    fn init_scan_ext(&mut self) {
        self.call("init_scan_ext", String::new());
    }

    fn configure_max_queued_adv_reports(&mut self, count: u8) {
        self.call("configure_max_queued_adv_reports", format!("count={count}"));
    }

    fn enable_even_connsch(&mut self) {
        self.call("enable_even_connsch", String::new());
    }

    fn enable_pawr_connsch(&mut self) {
        self.call("enable_pawr_connsch", String::new());
    }

    fn init_conn(&mut self) {
        self.call("init_conn", String::new());
    }

    fn init_phy(&mut self) {
        self.call("init_phy", String::new());
    }

    fn init_conn_statistics(&mut self) {
        self.call("init_conn_statistics", String::new());
    }

    fn init_subrate(&mut self) {
        self.call("init_subrate", String::new());
    }

    fn allocate_conn_subrate_memory(&mut self, connections: u8) -> Result<(), Status> {
        self.status(
            "allocate_conn_subrate_memory",
            format!("connections={connections}"),
        )
    }

    fn configure_completed_packets_reporting(&mut self, threshold: u8, events_timeout: u8) {
        self.call(
            "configure_completed_packets_reporting",
            format!("threshold={threshold}, events_timeout={events_timeout}"),
        );
    }

    fn set_min_max_tx_power(&mut self, range: TxPowerRange) {
        self.call(
            "set_min_max_tx_power",
            format!("min={}, max={}", range.min, range.max),
        );
    }

    fn init_power_control(
        &mut self,
        config: &PowerControlConfig,
        power_level: TxPowerRange,
    ) -> Result<(), Status> {
        self.status(
            "init_power_control",
            format!(
                "config={:02x?}, min={}, max={}",
                config.to_bytes(),
                power_level.min,
                power_level.max
            ),
        )
    }

    fn init_app_controlled_tx_power(&mut self) {
        self.call("init_app_controlled_tx_power", String::new());
    }

    fn init_periodic_adv(&mut self) {
        self.call("init_periodic_adv", String::new());
    }

    fn alloc_periodic_adv(&mut self, sets: u8) -> Result<(), Status> {
        self.status("alloc_periodic_adv", format!("sets={sets}"))
    }

    fn pawr_advertiser_configure(&mut self, config: &PawrAdvertiserConfig) -> Result<(), Status> {
        self.status("pawr_advertiser_configure", format!("{config:?}"))
    }

    fn init_periodic_scan(&mut self) {
        self.call("init_periodic_scan", String::new());
    }

    fn alloc_periodic_scan(&mut self, syncs: u8) -> Result<(), Status> {
        self.status("alloc_periodic_scan", format!("syncs={syncs}"))
    }

    fn pawr_synchronizer_configure(&mut self, config: &PawrSyncConfig) -> Result<(), Status> {
        self.status("pawr_synchronizer_configure", format!("{config:?}"))
    }

    fn init_past_local_sync_transfer(&mut self) {
        self.call("init_past_local_sync_transfer", String::new());
    }

    fn init_past_remote_sync_transfer(&mut self) {
        self.call("init_past_remote_sync_transfer", String::new());
    }

    fn init_past_receiver(&mut self) {
        self.call("init_past_receiver", String::new());
    }

    fn init_cte_receiver(&mut self) -> Result<(), Status> {
        self.status("init_cte_receiver", String::new())
    }

    fn init_cte_transmitter(&mut self) -> Result<(), Status> {
        self.status("init_cte_transmitter", String::new())
    }

    fn init_cs(&mut self, config: &ChannelSoundingConfig) {
        self.call("init_cs", format!("{config:?}"));
    }

    fn init_sniff(&mut self, analyzers: u8) -> Result<(), Status> {
        self.status("init_sniff", format!("analyzers={analyzers}"))
    }

    fn deinit_sniff(&mut self) {
        self.call("deinit_sniff", String::new());
    }

    fn init_basic(&mut self, connections: u8, advertisers: u8, accept_list: u8) {
        self.call(
            "init_basic",
            format!("connections={connections}, advertisers={advertisers}, accept_list={accept_list}"),
        );
    }

    fn init_privacy(&mut self) {
        self.call("init_privacy", String::new());
    }

    fn allocate_resolving_list_memory(&mut self, entries: u8) -> Result<(), Status> {
        self.status("allocate_resolving_list_memory", format!("entries={entries}"))
    }

    fn init_cis(&mut self) {
        self.call("init_cis", String::new());
    }

    fn hci_debug_enable(&mut self) {
        self.call("hci_debug_enable", String::new());
    }

    fn hci_enable_vendor_specific_debugging(&mut self) {
        self.call("hci_enable_vendor_specific_debugging", String::new());
    }

    fn test_protocol_init(&mut self) {
        self.call("test_protocol_init", String::new());
    }
}
