//! Native link-layer bindings and process-wide entry points.
//!
//! [`NativeLinkLayer`] forwards every [`LinkLayer`] call to the vendor link-layer
//! library. The library must be linked into the final image; this crate only
//! declares its symbols.
//!
//! The entry points below own one sequencer per plan, built with the capabilities
//! selected by this build's cargo features. An application uses either the
//! controller pair or the stack pair, never both. A board that needs its own debug
//! setup registers it with [`set_debug_hook`] before bringing the controller up.

use core::cell::RefCell;

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::blocking_mutex::Mutex;

use crate::capability::Capabilities;
use crate::config::{
    ChannelSoundingConfig, ControllerConfig, PawrAdvertiserConfig, PawrSyncConfig,
    PowerControlConfig, TxPowerRange,
};
use crate::error::Status;
use crate::link_layer::LinkLayer;
use crate::sequencer::Sequencer;

mod sys {
    use crate::config::{ChannelSoundingConfig, PawrAdvertiserConfig, PawrSyncConfig};

    extern "C" {
        pub fn sl_btctrl_is_initialized() -> bool;
        pub fn sl_btctrl_init_mem(memsize: u32);
        pub fn sl_btctrl_init_ll_config(memsize: u32);
        pub fn sl_btctrl_init_ll();
        pub fn sl_btctrl_deinit_ll() -> u32;
        pub fn sl_bt_ll_deinit() -> u32;
        pub fn sli_btctrl_deinit_mem();

        pub fn sl_btctrl_configure_le_buffer_size(max_size: u16);
        pub fn sli_btctrl_events_init();

        pub fn sl_btctrl_disable_2m_phy();
        pub fn sl_btctrl_disable_coded_phy();
        pub fn sl_bt_init_coex_hal();
        pub fn sl_btctrl_init_multiprotocol();
        pub fn sl_btctrl_enable_radio_watchdog();
        pub fn sl_btctrl_init_highpower();
        pub fn sl_btctrl_init_afh(flags: u32) -> u32;

        pub fn sl_btctrl_init_adv();
        pub fn sl_btctrl_init_adv_ext();
        pub fn sl_btctrl_init_scan();
        pub fn sl_btctrl_init_scan_ext();
        pub fn sl_btctrl_configure_max_queued_adv_reports(count: u8);

        pub fn sl_btctrl_enable_even_connsch();
        pub fn sl_btctrl_enable_pawr_connsch();
        pub fn sl_btctrl_init_conn();
        pub fn sl_btctrl_init_phy();
        pub fn sl_btctrl_init_conn_statistics();
        pub fn sl_btctrl_init_subrate();
        pub fn sl_btctrl_allocate_conn_subrate_memory(connections: u8) -> u32;
        pub fn sl_btctrl_configure_completed_packets_reporting(threshold: u8, events_timeout: u8);

        pub fn sli_btctrl_set_min_max_tx_power(min: i16, max: i16);
        pub fn sl_btctrl_init_power_control(config: *const u8, min: i16, max: i16) -> u32;
        pub fn sl_bt_init_app_controlled_tx_power();

        pub fn sl_btctrl_init_periodic_adv();
        pub fn sl_btctrl_alloc_periodic_adv(sets: u8) -> u32;
        pub fn sl_btctrl_pawr_advertiser_configure(config: *const PawrAdvertiserConfig) -> u32;
        pub fn sl_btctrl_init_periodic_scan();
        pub fn sl_btctrl_alloc_periodic_scan(syncs: u8) -> u32;
        pub fn sl_btctrl_pawr_synchronizer_configure(config: *const PawrSyncConfig) -> u32;
        pub fn sl_btctrl_init_past_local_sync_transfer();
        pub fn sl_btctrl_init_past_remote_sync_transfer();
        pub fn sl_btctrl_init_past_receiver();

        pub fn sl_btctrl_init_cte_receiver() -> u32;
        pub fn sl_btctrl_init_cte_transmitter() -> u32;
        pub fn sl_btctrl_init_cs(config: *const ChannelSoundingConfig);
        pub fn sl_btctrl_init_sniff(analyzers: u8) -> u32;
        pub fn sl_btctrl_deinit_sniff();

        pub fn sl_btctrl_init_basic(connections: u8, advertisers: u8, accept_list: u8);
        pub fn sl_btctrl_init_privacy();
        pub fn sl_btctrl_allocate_resolving_list_memory(entries: u8) -> u32;
        pub fn sl_btctrl_init_cis();

        #[link_name = "hci_debugEnable"]
        pub fn hci_debug_enable();
        #[link_name = "hci_enableVendorSpecificDebugging"]
        pub fn hci_enable_vendor_specific_debugging();
        pub fn test_protocol_init();
    }
}

/// [`LinkLayer`] backed by the vendor library.
pub struct NativeLinkLayer {
    debug_hook: Option<fn()>,
}

impl NativeLinkLayer {
    pub const fn new() -> Self {
        Self { debug_hook: None }
    }

    /// Run `hook` right after the link-layer core comes up.
    pub const fn with_debug_hook(hook: fn()) -> Self {
        Self {
            debug_hook: Some(hook),
        }
    }

    pub fn set_debug_hook(&mut self, hook: Option<fn()>) {
        self.debug_hook = hook;
    }
}

impl Default for NativeLinkLayer {
    fn default() -> Self {
        Self::new()
    }
}

// SAFETY (all blocks below): the vendor calls take plain integers or pointers to
// `repr(C)` values that outlive the call, and are only reached through the
// sequencer, which never runs two calls at once.
impl LinkLayer for NativeLinkLayer {
    fn is_initialized(&self) -> bool {
        unsafe { sys::sl_btctrl_is_initialized() }
    }

    fn init_mem(&mut self, buffer_memory: u32) {
        unsafe { sys::sl_btctrl_init_mem(buffer_memory) }
    }

    fn init_ll(&mut self, config: &ControllerConfig) {
        unsafe {
            sys::sl_btctrl_init_ll_config(config.buffer_memory);
            sys::sl_btctrl_init_ll();
        }
    }

    fn debug_init(&mut self) {
        if let Some(hook) = self.debug_hook {
            hook();
        }
    }

    fn deinit_ll(&mut self) -> Result<(), Status> {
        Status::from_raw(unsafe { sys::sl_btctrl_deinit_ll() })
    }

    fn deinit_stack_ll(&mut self) -> Result<(), Status> {
        Status::from_raw(unsafe { sys::sl_bt_ll_deinit() })
    }

    fn deinit_mem(&mut self) {
        unsafe { sys::sli_btctrl_deinit_mem() }
    }

    fn configure_le_buffer_size(&mut self, max_size: u16) {
        unsafe { sys::sl_btctrl_configure_le_buffer_size(max_size) }
    }

    fn events_init(&mut self) {
        unsafe { sys::sli_btctrl_events_init() }
    }

    fn disable_2m_phy(&mut self) {
        unsafe { sys::sl_btctrl_disable_2m_phy() }
    }

    fn disable_coded_phy(&mut self) {
        unsafe { sys::sl_btctrl_disable_coded_phy() }
    }

    fn init_coex_hal(&mut self) {
        unsafe { sys::sl_bt_init_coex_hal() }
    }

    fn init_multiprotocol(&mut self) {
        unsafe { sys::sl_btctrl_init_multiprotocol() }
    }

    fn enable_radio_watchdog(&mut self) {
        unsafe { sys::sl_btctrl_enable_radio_watchdog() }
    }

    fn init_highpower(&mut self) {
        unsafe { sys::sl_btctrl_init_highpower() }
    }

    fn init_afh(&mut self, mode: u32) -> Result<(), Status> {
        Status::from_raw(unsafe { sys::sl_btctrl_init_afh(mode) })
    }

    fn init_adv(&mut self) {
        unsafe { sys::sl_btctrl_init_adv() }
    }

    fn init_adv_ext(&mut self) {
        unsafe { sys::sl_btctrl_init_adv_ext() }
    }

    fn init_scan(&mut self) {
        unsafe { sys::sl_btctrl_init_scan() }
    }

    fn init_scan_ext(&mut self) {
        unsafe { sys::sl_btctrl_init_scan_ext() }
    }

    fn configure_max_queued_adv_reports(&mut self, count: u8) {
        unsafe { sys::sl_btctrl_configure_max_queued_adv_reports(count) }
    }

    fn enable_even_connsch(&mut self) {
        unsafe { sys::sl_btctrl_enable_even_connsch() }
    }

    fn enable_pawr_connsch(&mut self) {
        unsafe { sys::sl_btctrl_enable_pawr_connsch() }
    }

    fn init_conn(&mut self) {
        unsafe { sys::sl_btctrl_init_conn() }
    }

    fn init_phy(&mut self) {
        unsafe { sys::sl_btctrl_init_phy() }
    }

    fn init_conn_statistics(&mut self) {
        unsafe { sys::sl_btctrl_init_conn_statistics() }
    }

    fn init_subrate(&mut self) {
        unsafe { sys::sl_btctrl_init_subrate() }
    }

    fn allocate_conn_subrate_memory(&mut self, connections: u8) -> Result<(), Status> {
        Status::from_raw(unsafe { sys::sl_btctrl_allocate_conn_subrate_memory(connections) })
    }

    fn configure_completed_packets_reporting(&mut self, threshold: u8, events_timeout: u8) {
        unsafe { sys::sl_btctrl_configure_completed_packets_reporting(threshold, events_timeout) }
    }

    fn set_min_max_tx_power(&mut self, range: TxPowerRange) {
        unsafe { sys::sli_btctrl_set_min_max_tx_power(range.min, range.max) }
    }

    fn init_power_control(
        &mut self,
        config: &PowerControlConfig,
        power_level: TxPowerRange,
    ) -> Result<(), Status> {
        let packed = config.to_bytes();
        Status::from_raw(unsafe {
            sys::sl_btctrl_init_power_control(packed.as_ptr(), power_level.min, power_level.max)
        })
    }

    fn init_app_controlled_tx_power(&mut self) {
        unsafe { sys::sl_bt_init_app_controlled_tx_power() }
    }

    fn init_periodic_adv(&mut self) {
        unsafe { sys::sl_btctrl_init_periodic_adv() }
    }

    fn alloc_periodic_adv(&mut self, sets: u8) -> Result<(), Status> {
        Status::from_raw(unsafe { sys::sl_btctrl_alloc_periodic_adv(sets) })
    }

    fn pawr_advertiser_configure(&mut self, config: &PawrAdvertiserConfig) -> Result<(), Status> {
        Status::from_raw(unsafe { sys::sl_btctrl_pawr_advertiser_configure(config) })
    }

    fn init_periodic_scan(&mut self) {
        unsafe { sys::sl_btctrl_init_periodic_scan() }
    }

    fn alloc_periodic_scan(&mut self, syncs: u8) -> Result<(), Status> {
        Status::from_raw(unsafe { sys::sl_btctrl_alloc_periodic_scan(syncs) })
    }

    fn pawr_synchronizer_configure(&mut self, config: &PawrSyncConfig) -> Result<(), Status> {
        Status::from_raw(unsafe { sys::sl_btctrl_pawr_synchronizer_configure(config) })
    }

    fn init_past_local_sync_transfer(&mut self) {
        unsafe { sys::sl_btctrl_init_past_local_sync_transfer() }
    }

    fn init_past_remote_sync_transfer(&mut self) {
        unsafe { sys::sl_btctrl_init_past_remote_sync_transfer() }
    }

    fn init_past_receiver(&mut self) {
        unsafe { sys::sl_btctrl_init_past_receiver() }
    }

    fn init_cte_receiver(&mut self) -> Result<(), Status> {
        Status::from_raw(unsafe { sys::sl_btctrl_init_cte_receiver() })
    }

    fn init_cte_transmitter(&mut self) -> Result<(), Status> {
        Status::from_raw(unsafe { sys::sl_btctrl_init_cte_transmitter() })
    }

    fn init_cs(&mut self, config: &ChannelSoundingConfig) {
        unsafe { sys::sl_btctrl_init_cs(config) }
    }

    fn init_sniff(&mut self, analyzers: u8) -> Result<(), Status> {
        Status::from_raw(unsafe { sys::sl_btctrl_init_sniff(analyzers) })
    }

    fn deinit_sniff(&mut self) {
        unsafe { sys::sl_btctrl_deinit_sniff() }
    }

    fn init_basic(&mut self, connections: u8, advertisers: u8, accept_list: u8) {
        unsafe { sys::sl_btctrl_init_basic(connections, advertisers, accept_list) }
    }

    fn init_privacy(&mut self) {
        unsafe { sys::sl_btctrl_init_privacy() }
    }

    fn allocate_resolving_list_memory(&mut self, entries: u8) -> Result<(), Status> {
        Status::from_raw(unsafe { sys::sl_btctrl_allocate_resolving_list_memory(entries) })
    }

    fn init_cis(&mut self) {
        unsafe { sys::sl_btctrl_init_cis() }
    }

    fn hci_debug_enable(&mut self) {
        unsafe { sys::hci_debug_enable() }
    }

    fn hci_enable_vendor_specific_debugging(&mut self) {
        unsafe { sys::hci_enable_vendor_specific_debugging() }
    }

    fn test_protocol_init(&mut self) {
        unsafe { sys::test_protocol_init() }
    }
}

type Shared = Mutex<CriticalSectionRawMutex, RefCell<Sequencer<NativeLinkLayer>>>;

static CONTROLLER: Shared = Mutex::new(RefCell::new(Sequencer::controller(
    NativeLinkLayer::new(),
    Capabilities::from_features(),
)));

static STACK: Shared = Mutex::new(RefCell::new(Sequencer::stack(
    NativeLinkLayer::new(),
    Capabilities::from_features(),
)));

/// Register the board debug hook for both entry point pairs.
///
/// The hook runs on the next bootstrap, right after the link-layer core is up.
pub fn set_debug_hook(hook: fn()) {
    CONTROLLER.lock(|seq| seq.borrow_mut().link_mut().set_debug_hook(Some(hook)));
    STACK.lock(|seq| seq.borrow_mut().link_mut().set_debug_hook(Some(hook)));
}

/// Bring up the controller for a controller-only (RCP) application.
pub fn controller_init(config: &ControllerConfig) -> Result<(), Status> {
    CONTROLLER.lock(|seq| seq.borrow_mut().bootstrap(config))
}

/// Tear down what [`controller_init`] brought up.
pub fn controller_deinit() {
    CONTROLLER.lock(|seq| seq.borrow_mut().shutdown())
}

/// Bring up the controller underneath the host stack.
pub fn stack_init(config: &ControllerConfig) -> Result<(), Status> {
    STACK.lock(|seq| seq.borrow_mut().bootstrap(config))
}

/// Tear down what [`stack_init`] brought up.
pub fn stack_deinit() {
    STACK.lock(|seq| seq.borrow_mut().shutdown())
}
