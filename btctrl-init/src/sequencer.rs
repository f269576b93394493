//! Ordered bring-up and teardown of the link layer.
//!
//! A [`Sequencer`] owns a [`LinkLayer`] and runs one [`Plan`] against it for a fixed
//! capability set. It tracks whether its own bootstrap completed; the link layer's
//! core flag counts as well, so a core that is already up is never brought up twice.

use crate::capability::Capabilities;
use crate::config::ControllerConfig;
use crate::error::Status;
use crate::link_layer::LinkLayer;
use crate::plan::{self, Plan};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum State {
    Uninitialized,
    Initialized,
}

pub struct Sequencer<L> {
    link: L,
    capabilities: Capabilities,
    plan: &'static Plan,
    state: State,
}

impl<L: LinkLayer> Sequencer<L> {
    pub const fn new(link: L, capabilities: Capabilities, plan: &'static Plan) -> Self {
        Self {
            link,
            capabilities,
            plan,
            state: State::Uninitialized,
        }
    }

    /// Sequencer for controller-only (RCP) bring-up.
    pub const fn controller(link: L, capabilities: Capabilities) -> Self {
        Self::new(link, capabilities, &plan::CONTROLLER)
    }

    /// Sequencer for bring-up underneath a host stack.
    pub const fn stack(link: L, capabilities: Capabilities) -> Self {
        Self::new(link, capabilities, &plan::STACK)
    }

    /// Bring the link layer up.
    ///
    /// Runs every enabled bootstrap step of the plan in order. The first checked
    /// step that fails ends the bootstrap with its status; nothing already set up is
    /// rolled back, and the sequencer stays [`State::Uninitialized`]. Call
    /// [`shutdown`](Self::shutdown) before retrying.
    ///
    /// Does nothing and succeeds once the link-layer core is up, whether this
    /// sequencer brought it up or not.
    pub fn bootstrap(&mut self, config: &ControllerConfig) -> Result<(), Status> {
        if self.state == State::Initialized {
            debug!("{} already initialized", self.plan.name);
            return Ok(());
        }
        if self.link.is_initialized() {
            warn!("{}: link-layer core is already up", self.plan.name);
            self.state = State::Initialized;
            return Ok(());
        }

        config.validate()?;

        info!(
            "{} bootstrap, capabilities {:#x}",
            self.plan.name,
            self.capabilities.bits()
        );

        for (i, step) in self.plan.bootstrap_steps(self.capabilities).enumerate() {
            debug!("Step {}: {}", i + 1, step.name);
            if let Err(status) = step.run(&mut self.link, config) {
                error!("{} failed: {}", step.name, status);
                return Err(status);
            }
        }

        self.state = State::Initialized;
        info!("{} initialized", self.plan.name);
        Ok(())
    }

    /// Tear the link layer down. Best effort; failures are logged and skipped.
    ///
    /// Does nothing when neither this sequencer nor the link-layer core is up.
    /// Always leaves the sequencer [`State::Uninitialized`].
    pub fn shutdown(&mut self) {
        if self.state == State::Uninitialized && !self.link.is_initialized() {
            return;
        }

        info!("{} shutdown", self.plan.name);
        for step in self.plan.teardown_steps(self.capabilities) {
            debug!("Teardown: {}", step.name);
            if let Err(status) = (step.action)(&mut self.link) {
                warn!("{} teardown: {}", step.name, status);
            }
        }

        self.state = State::Uninitialized;
    }

    pub fn state(&self) -> State {
        self.state
    }

    pub fn capabilities(&self) -> Capabilities {
        self.capabilities
    }

    pub fn plan(&self) -> &'static Plan {
        self.plan
    }

    pub fn link(&self) -> &L {
        &self.link
    }

    pub fn link_mut(&mut self) -> &mut L {
        &mut self.link
    }

    pub fn into_inner(self) -> L {
        self.link
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{PhySupport, PowerControlConfig, TxPowerRange};
    use crate::testing::RecordingLinkLayer;

    type C = Capabilities;

    /// Calls whose failure ends the bootstrap.
    const CHECKED_CALLS: &[&str] = &[
        "allocate_conn_subrate_memory",
        "init_power_control",
        "pawr_advertiser_configure",
        "alloc_periodic_scan",
        "pawr_synchronizer_configure",
        "init_afh",
        "init_cte_receiver",
        "init_cte_transmitter",
        "init_sniff",
        "allocate_resolving_list_memory",
    ];

    const TEARDOWN_CALLS: &[&str] = &[
        "allocate_resolving_list_memory",
        "alloc_periodic_scan",
        "pawr_advertiser_configure",
        "pawr_synchronizer_configure",
        "alloc_periodic_adv",
        "allocate_conn_subrate_memory",
        "deinit_ll",
        "deinit_stack_ll",
    ];

    fn config() -> ControllerConfig {
        ControllerConfig::new()
            .buffer_memory(4096)
            .max_connections(4)
            .component_connections(1)
            .user_advertisers(2)
            .component_advertisers(1)
            .accept_list_size(8)
            .resolving_list_size(8)
            .max_periodic_advertisers(2)
            .max_periodic_sync(3)
            .max_connection_analyzers(1)
            .max_queued_adv_reports(10)
    }

    /// Empty, full, every single flag and a pseudo-random sample of mixed sets.
    fn capability_sets() -> Vec<Capabilities> {
        let mut sets = vec![C::empty(), C::all()];
        sets.extend(C::all().iter());
        let mut x: u64 = 0x2545_f491_4f6c_dd1d;
        for _ in 0..64 {
            x = x
                .wrapping_mul(6_364_136_223_846_793_005)
                .wrapping_add(1_442_695_040_888_963_407);
            sets.push(C::from_bits_truncate(x >> 7));
        }
        sets
    }

    fn sequencers(
        caps: Capabilities,
        link: impl Fn() -> RecordingLinkLayer,
    ) -> [Sequencer<RecordingLinkLayer>; 2] {
        [
            Sequencer::controller(link(), caps),
            Sequencer::stack(link(), caps),
        ]
    }

    #[test]
    fn second_bootstrap_is_a_no_op() {
        for caps in capability_sets() {
            for mut seq in sequencers(caps, RecordingLinkLayer::new) {
                assert_eq!(seq.bootstrap(&config()), Ok(()));
                let calls = seq.link().calls.len();
                assert_eq!(seq.link().count("init_mem"), 1);

                assert_eq!(seq.bootstrap(&config()), Ok(()));
                assert_eq!(seq.link().calls.len(), calls, "{:?}", caps);
                assert_eq!(seq.state(), State::Initialized);
            }
        }
    }

    #[test]
    fn successful_bootstrap_runs_every_enabled_step() {
        for caps in capability_sets() {
            for mut seq in sequencers(caps, RecordingLinkLayer::new) {
                assert_eq!(seq.bootstrap(&config()), Ok(()));
                assert_eq!(seq.state(), State::Initialized);

                let names = seq.link().names();
                assert_eq!(&names[..3], ["init_mem", "init_ll", "debug_init"]);
                assert_eq!(seq.link().count("init_basic"), 1);
            }
        }
    }

    #[test]
    fn first_checked_failure_stops_the_bootstrap() {
        for caps in capability_sets() {
            for plan in [&plan::CONTROLLER, &plan::STACK] {
                let mut ok = Sequencer::new(RecordingLinkLayer::new(), caps, plan);
                assert_eq!(ok.bootstrap(&config()), Ok(()));
                let full = ok.link().names();

                for &name in CHECKED_CALLS {
                    let Some(at) = full.iter().position(|n| *n == name) else {
                        continue;
                    };
                    let link = RecordingLinkLayer::new().fail(name, Status::NoMoreResource);
                    let mut seq = Sequencer::new(link, caps, plan);

                    assert_eq!(seq.bootstrap(&config()), Err(Status::NoMoreResource));
                    assert_eq!(seq.state(), State::Uninitialized);
                    assert_eq!(seq.link().names(), &full[..=at], "{} {}", plan.name, name);
                }
            }
        }
    }

    #[test]
    fn unchecked_failures_do_not_stop_the_bootstrap() {
        let caps = C::PERIODIC_ADVERTISER | C::AFH | C::CONNECTION;
        let link = RecordingLinkLayer::new().fail("alloc_periodic_adv", Status::AllocationFailed);
        let mut seq = Sequencer::controller(link, caps);
        assert_eq!(seq.bootstrap(&config()), Ok(()));
        assert_eq!(seq.state(), State::Initialized);
        assert_eq!(seq.link().names().last(), Some(&"configure_completed_packets_reporting"));
    }

    #[test]
    fn afh_refresh_failure_is_ignored() {
        let config = config();
        let mut link = RecordingLinkLayer::new();
        for step in plan::CONTROLLER.bootstrap_steps(C::AFH) {
            if step.name == "afh refresh" {
                link.set_failure("init_afh", Status::Fail);
            }
            assert_eq!(step.run(&mut link, &config), Ok(()), "{}", step.name);
        }
        assert_eq!(link.count("init_afh"), 2);
        assert_eq!(link.args("init_afh"), Some(&[1][..]));
    }

    #[test]
    fn shutdown_when_uninitialized_makes_no_calls() {
        for mut seq in sequencers(C::all(), RecordingLinkLayer::new) {
            seq.shutdown();
            assert!(seq.link().calls.is_empty());
            assert_eq!(seq.state(), State::Uninitialized);
        }
    }

    #[test]
    fn shutdown_always_ends_uninitialized() {
        for caps in capability_sets() {
            for mut seq in sequencers(caps, RecordingLinkLayer::new) {
                assert_eq!(seq.bootstrap(&config()), Ok(()));
                for name in TEARDOWN_CALLS {
                    seq.link_mut().set_failure(name, Status::Fail);
                }
                seq.link_mut().clear();

                seq.shutdown();
                assert_eq!(seq.state(), State::Uninitialized);
                assert_eq!(seq.link().names().last(), Some(&"deinit_mem"));
                assert!(!seq.link().is_initialized());
            }
        }
    }

    #[test]
    fn shutdown_tears_down_with_the_plan_core_call() {
        let mut seq = Sequencer::controller(RecordingLinkLayer::new(), C::empty());
        seq.bootstrap(&config()).unwrap();
        seq.link_mut().clear();
        seq.shutdown();
        assert_eq!(seq.link().names(), ["deinit_ll", "deinit_mem"]);

        let mut seq = Sequencer::stack(RecordingLinkLayer::new(), C::empty());
        seq.bootstrap(&config()).unwrap();
        seq.link_mut().clear();
        seq.shutdown();
        assert_eq!(seq.link().names(), ["deinit_stack_ll", "deinit_mem"]);
    }

    #[test]
    fn shutdown_releases_allocations_with_zero_sizes() {
        let caps = C::CONNECTION_ANALYZER
            | C::RESOLVING_LIST
            | C::SYNC
            | C::PAWR_ADVERTISER
            | C::PAWR_SYNC
            | C::PERIODIC_ADVERTISER
            | C::CONNECTION_SUBRATING;
        let mut seq = Sequencer::controller(RecordingLinkLayer::new(), caps);
        seq.bootstrap(&config()).unwrap();
        seq.link_mut().clear();
        seq.shutdown();

        assert_eq!(
            seq.link().names(),
            [
                "deinit_sniff",
                "allocate_resolving_list_memory",
                "alloc_periodic_scan",
                "pawr_advertiser_configure",
                "pawr_synchronizer_configure",
                "alloc_periodic_adv",
                "allocate_conn_subrate_memory",
                "deinit_ll",
                "deinit_mem",
            ]
        );
        for call in &seq.link().calls {
            assert!(call.args.iter().all(|a| *a == 0), "{}", call.name);
        }
    }

    #[test]
    fn advertiser_and_connection_scenario() {
        let caps = C::ADVERTISER | C::CONNECTION;
        let mut seq = Sequencer::controller(RecordingLinkLayer::new(), caps);
        assert_eq!(seq.bootstrap(&config()), Ok(()));
        assert_eq!(seq.state(), State::Initialized);

        let names = seq.link().names();
        assert!(names.contains(&"init_adv"));
        assert!(names.contains(&"init_conn"));
        assert!(!names.contains(&"init_scan"));
        assert!(!names.contains(&"configure_max_queued_adv_reports"));
        assert_eq!(seq.link().args("init_basic"), Some(&[5, 3, 8][..]));
    }

    #[test]
    fn power_control_failure_scenario() {
        let link = RecordingLinkLayer::new().fail("init_power_control", Status::Fail);
        let mut seq = Sequencer::controller(link, C::POWER_CONTROL);
        assert_eq!(seq.bootstrap(&config()), Err(Status::Fail));
        assert_eq!(seq.state(), State::Uninitialized);
        assert_eq!(seq.link().names().last(), Some(&"init_power_control"));
        assert_eq!(seq.link().count("init_basic"), 0);
    }

    #[test]
    fn retry_after_partial_failure_succeeds_without_calls() {
        let link = RecordingLinkLayer::new().fail("init_power_control", Status::Fail);
        let mut seq = Sequencer::controller(link, C::POWER_CONTROL);
        assert_eq!(seq.bootstrap(&config()), Err(Status::Fail));
        assert_eq!(seq.state(), State::Uninitialized);
        assert!(seq.link().is_initialized());

        seq.link_mut().clear();
        assert_eq!(seq.bootstrap(&config()), Ok(()));
        assert!(seq.link().calls.is_empty());
        assert_eq!(seq.state(), State::Initialized);
    }

    #[test]
    fn shutdown_after_partial_failure_allows_a_full_bootstrap() {
        let link = RecordingLinkLayer::new().fail("init_sniff", Status::AllocationFailed);
        let mut seq = Sequencer::controller(link, C::CONNECTION_ANALYZER);
        assert_eq!(seq.bootstrap(&config()), Err(Status::AllocationFailed));

        seq.shutdown();
        assert_eq!(seq.link().names().last(), Some(&"deinit_mem"));
        assert_eq!(seq.state(), State::Uninitialized);

        seq.link_mut().succeed("init_sniff");
        seq.link_mut().clear();
        assert_eq!(seq.bootstrap(&config()), Ok(()));
        assert_eq!(seq.link().count("init_sniff"), 1);
        assert_eq!(seq.state(), State::Initialized);
    }

    #[test]
    fn foreign_core_is_left_alone() {
        let mut seq = Sequencer::stack(RecordingLinkLayer::new().with_core_up(), C::all());
        assert_eq!(seq.bootstrap(&config()), Ok(()));
        assert!(seq.link().calls.is_empty());
        assert_eq!(seq.state(), State::Initialized);
    }

    #[test]
    fn invalid_config_fails_before_any_call() {
        let bad = config().max_connections(255);
        let mut seq = Sequencer::controller(RecordingLinkLayer::new(), C::all());
        assert_eq!(seq.bootstrap(&bad), Err(Status::InvalidParameter));
        assert!(seq.link().calls.is_empty());
        assert_eq!(seq.state(), State::Uninitialized);
    }

    #[test]
    fn phy_support_disables_what_the_config_turns_off() {
        let cfg = config().phy_support(PhySupport {
            two_m: false,
            coded: true,
        });
        let mut seq = Sequencer::controller(RecordingLinkLayer::new(), C::PHY_SUPPORT_CONFIG);
        seq.bootstrap(&cfg).unwrap();
        assert_eq!(seq.link().count("disable_2m_phy"), 2);
        assert_eq!(seq.link().count("disable_coded_phy"), 0);
    }

    #[test]
    fn sizing_reaches_the_link_layer() {
        let cfg = config()
            .le_buffer_size_max(251)
            .tx_power(TxPowerRange { min: -200, max: 100 })
            .power_control(PowerControlConfig {
                activate: true,
                power_level: TxPowerRange { min: -100, max: 80 },
                ..PowerControlConfig::new()
            });
        let caps = C::RCP | C::CONNECTION | C::CONNECTION_SUBRATING | C::POWER_CONTROL | C::SYNC;
        let mut seq = Sequencer::controller(RecordingLinkLayer::new(), caps);
        seq.bootstrap(&cfg).unwrap();

        let link = seq.link();
        assert_eq!(link.args("init_mem"), Some(&[4096][..]));
        assert_eq!(link.args("configure_le_buffer_size"), Some(&[251][..]));
        assert_eq!(link.args("allocate_conn_subrate_memory"), Some(&[5][..]));
        assert_eq!(link.args("set_min_max_tx_power"), Some(&[-200, 100][..]));
        assert_eq!(link.args("init_power_control"), Some(&[1, -100, 80][..]));
        assert_eq!(link.args("alloc_periodic_scan"), Some(&[3][..]));
    }

    #[test]
    fn accessors_expose_the_parts() {
        let seq = Sequencer::stack(RecordingLinkLayer::new(), C::CIS);
        assert_eq!(seq.capabilities(), C::CIS);
        assert_eq!(seq.plan().name, "stack");
        assert_eq!(seq.state(), State::Uninitialized);
        assert!(seq.into_inner().calls.is_empty());
    }
}
