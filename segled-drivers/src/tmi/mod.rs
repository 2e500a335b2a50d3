//! Bit-banged transport interfaces
//!
//! Both controllers are driven by toggling GPIO lines with a fixed delay
//! after every transition. The delays are protocol constants from
//! `segled_core::config`, not configuration.

pub mod tm1637;
pub mod tm1638;

pub use tm1637::SimpleTmi1637;
pub use tm1638::SimpleTmi1638;
