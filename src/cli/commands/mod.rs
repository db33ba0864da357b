mod migrate;
mod seed;
mod show;

pub use migrate::cmd_migrate;
pub use seed::cmd_seed;
pub use show::{cmd_show, cmd_show_combined};
