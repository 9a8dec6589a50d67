#![forbid(unsafe_code)]

pub mod bank;
pub mod error;
pub mod generator;
pub mod model;
pub mod time;
pub mod timer;

pub use bank::{BankSampler, CorpusCatalog, CorpusProvider};
pub use error::Error;
pub use generator::ProceduralGenerator;
pub use time::Clock;
pub use timer::{CountdownTimer, TimerTick};
