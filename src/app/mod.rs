mod facade;

pub use facade::{App, AppContext};
