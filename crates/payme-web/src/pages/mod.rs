//! Page Components

mod pay;

pub use pay::PayPage;
