//! Seam between the sequencer and the link-layer library.
//!
//! One method per call the bootstrap or teardown makes. Calls that the library
//! declares infallible return `()`, the rest return the library's status.
//! The trait is object safe; step tables hold `fn(&mut dyn LinkLayer, ..)`.

use crate::config::{
    ChannelSoundingConfig, ControllerConfig, PawrAdvertiserConfig, PawrSyncConfig,
    PowerControlConfig, TxPowerRange,
};
use crate::error::Status;

pub trait LinkLayer {
    /// Whether the link-layer core is currently up.
    fn is_initialized(&self) -> bool;

    // Core lifecycle.
    fn init_mem(&mut self, buffer_memory: u32);
    fn init_ll(&mut self, config: &ControllerConfig);
    /// Board-specific debug hook. Does nothing unless overridden.
    fn debug_init(&mut self) {}
    fn deinit_ll(&mut self) -> Result<(), Status>;
    /// Core teardown used when a host stack sits on top of the controller.
    fn deinit_stack_ll(&mut self) -> Result<(), Status>;
    fn deinit_mem(&mut self);

    // Controller-only plumbing.
    fn configure_le_buffer_size(&mut self, max_size: u16);
    fn events_init(&mut self);

    // Radio.
    fn disable_2m_phy(&mut self);
    fn disable_coded_phy(&mut self);
    fn init_coex_hal(&mut self);
    fn init_multiprotocol(&mut self);
    fn enable_radio_watchdog(&mut self);
    fn init_highpower(&mut self);
    fn init_afh(&mut self, mode: u32) -> Result<(), Status>;

    // Advertising and scanning.
    fn init_adv(&mut self);
    fn init_adv_ext(&mut self);
    fn init_scan(&mut self);
    fn init_scan_ext(&mut self);
    fn configure_max_queued_adv_reports(&mut self, count: u8);

    // Connections.
    fn enable_even_connsch(&mut self);
    fn enable_pawr_connsch(&mut self);
    fn init_conn(&mut self);
    fn init_phy(&mut self);
    fn init_conn_statistics(&mut self);
    fn init_subrate(&mut self);
    fn allocate_conn_subrate_memory(&mut self, connections: u8) -> Result<(), Status>;
    fn configure_completed_packets_reporting(&mut self, threshold: u8, events_timeout: u8);

    // Power.
    fn set_min_max_tx_power(&mut self, range: TxPowerRange);
    fn init_power_control(
        &mut self,
        config: &PowerControlConfig,
        power_level: TxPowerRange,
    ) -> Result<(), Status>;
    fn init_app_controlled_tx_power(&mut self);

    // Periodic advertising and sync.
    fn init_periodic_adv(&mut self);
    fn alloc_periodic_adv(&mut self, sets: u8) -> Result<(), Status>;
    fn pawr_advertiser_configure(&mut self, config: &PawrAdvertiserConfig) -> Result<(), Status>;
    fn init_periodic_scan(&mut self);
    fn alloc_periodic_scan(&mut self, syncs: u8) -> Result<(), Status>;
    fn pawr_synchronizer_configure(&mut self, config: &PawrSyncConfig) -> Result<(), Status>;
    fn init_past_local_sync_transfer(&mut self);
    fn init_past_remote_sync_transfer(&mut self);
    fn init_past_receiver(&mut self);

    // Direction finding, sounding, analysis.
    fn init_cte_receiver(&mut self) -> Result<(), Status>;
    fn init_cte_transmitter(&mut self) -> Result<(), Status>;
    fn init_cs(&mut self, config: &ChannelSoundingConfig);
    fn init_sniff(&mut self, analyzers: u8) -> Result<(), Status>;
    fn deinit_sniff(&mut self);

    // Sizing, privacy, isochronous.
    fn init_basic(&mut self, connections: u8, advertisers: u8, accept_list: u8);
    fn init_privacy(&mut self);
    fn allocate_resolving_list_memory(&mut self, entries: u8) -> Result<(), Status>;
    fn init_cis(&mut self);

    // HCI diagnostics.
    fn hci_debug_enable(&mut self);
    fn hci_enable_vendor_specific_debugging(&mut self);
    fn test_protocol_init(&mut self);
}
