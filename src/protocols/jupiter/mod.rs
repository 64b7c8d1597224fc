pub mod analysis;
pub mod constants;
pub mod error;
pub mod event_parser;
pub mod instruction_parser;
pub(crate) mod ser;
pub mod swap_variant;
pub mod util;
