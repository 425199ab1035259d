mod amount;
mod command;
pub mod controller;
pub mod diagnostic;
pub mod fixture;
mod format;
pub mod ids;
pub mod input;
pub mod models;
pub mod provider;
pub mod renderers;
mod result;
pub mod view;

pub use amount::{parse_amount, AmountError, SplitAmount};
pub use command::Command;
pub use controller::{ControllerError, SelectionError, SelectionState, ViewController};
pub use format::{format_balance, info_line, mask_card_number};
pub use result::Result;
