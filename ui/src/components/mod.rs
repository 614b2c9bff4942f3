pub mod add_monitor;
pub mod footer;
pub mod modal;
pub mod monitor_card;
pub mod notice;
pub mod simple;
pub mod stats;
pub mod status;
pub mod toast;

pub use add_monitor::*;
pub use footer::*;
pub use modal::*;
pub use monitor_card::*;
pub use notice::*;
pub use simple::*;
pub use stats::*;
pub use status::*;
pub use toast::*;
