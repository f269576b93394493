#![cfg_attr(not(test), no_std)]
#![doc = "Feature-gated bootstrap sequencer for a Bluetooth link-layer controller."]
#![doc = ""]
#![doc = "Brings the link layer up in a fixed order, enabling only the subsystems selected"]
#![doc = "by cargo features, and tears it down again. Enable `ffi` to drive the vendor library."]

// This mod MUST go first, so that the others see its macros.
pub(crate) mod fmt;

pub mod capability;
pub mod config;
pub mod error;
pub mod link_layer;
pub mod plan;
pub mod sequencer;

#[cfg(feature = "ffi")]
pub mod ffi;

#[cfg(test)]
pub(crate) mod testing;

pub use capability::{Capabilities, Gate};
pub use config::{
    ChannelSoundingConfig, CompletedPacketsReporting, ControllerConfig, GoldenRange,
    PawrAdvertiserConfig, PawrSyncConfig, PhySupport, PowerControlConfig, TxPowerRange,
};
pub use error::Status;
pub use link_layer::LinkLayer;
pub use plan::Plan;
pub use sequencer::{Sequencer, State};
