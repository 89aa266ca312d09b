/// Command entry points: wire configuration, fetch and export together.
pub mod export;

pub use export::run;
