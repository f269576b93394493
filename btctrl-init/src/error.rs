//! Link-layer status codes.
//!
//! The vendor library reports every outcome in one flat `u32` status space where
//! `0` is success. [`Status`] is the non-success half of that space; a call that
//! can fail returns `Result<(), Status>`.

use core::fmt;

/// Raw status code values used by the link-layer library.
pub mod raw {
    pub const OK: u32 = 0x0000;
    pub const FAIL: u32 = 0x0001;
    pub const INVALID_STATE: u32 = 0x0002;
    pub const NOT_SUPPORTED: u32 = 0x000F;
    pub const ALLOCATION_FAILED: u32 = 0x0019;
    pub const NO_MORE_RESOURCE: u32 = 0x001A;
    pub const INVALID_PARAMETER: u32 = 0x0021;
}

/// Failure reported by a link-layer call or by the sequencer itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Status {
    /// Generic failure.
    Fail,
    /// The call is not valid in the current lifecycle state.
    InvalidState,
    /// The feature is not compiled into the library.
    NotSupported,
    /// A memory allocation inside the library failed.
    AllocationFailed,
    /// A fixed-size resource pool is exhausted.
    NoMoreResource,
    /// A sizing parameter is out of range.
    InvalidParameter,
    /// Any other non-zero code, carried through untouched.
    Other(u32),
}

impl Status {
    /// Interpret a raw status code returned across the FFI boundary.
    pub const fn from_raw(code: u32) -> Result<(), Status> {
        let status = match code {
            raw::OK => return Ok(()),
            raw::FAIL => Status::Fail,
            raw::INVALID_STATE => Status::InvalidState,
            raw::NOT_SUPPORTED => Status::NotSupported,
            raw::ALLOCATION_FAILED => Status::AllocationFailed,
            raw::NO_MORE_RESOURCE => Status::NoMoreResource,
            raw::INVALID_PARAMETER => Status::InvalidParameter,
            other => Status::Other(other),
        };
        Err(status)
    }

    /// The raw code this status stands for.
    pub const fn code(self) -> u32 {
        match self {
            Status::Fail => raw::FAIL,
            Status::InvalidState => raw::INVALID_STATE,
            Status::NotSupported => raw::NOT_SUPPORTED,
            Status::AllocationFailed => raw::ALLOCATION_FAILED,
            Status::NoMoreResource => raw::NO_MORE_RESOURCE,
            Status::InvalidParameter => raw::INVALID_PARAMETER,
            Status::Other(code) => code,
        }
    }

    /// `true` for the allocation and pool-exhaustion kinds.
    pub const fn is_resource_exhaustion(self) -> bool {
        matches!(self, Status::AllocationFailed | Status::NoMoreResource)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::Fail => f.write_str("failure"),
            Status::InvalidState => f.write_str("invalid state"),
            Status::NotSupported => f.write_str("not supported"),
            Status::AllocationFailed => f.write_str("allocation failed"),
            Status::NoMoreResource => f.write_str("no more resources"),
            Status::InvalidParameter => f.write_str("invalid parameter"),
            Status::Other(code) => write!(f, "status {:#06x}", code),
        }
    }
}
