//! Adapter implementations of the SRU ports.

pub mod distro_info;
pub mod launchpad;
pub mod memory;
