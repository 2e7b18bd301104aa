pub mod exchange;

pub use exchange::ExchangeDrawGenerator;
