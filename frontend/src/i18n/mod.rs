pub mod tr_tr;

pub use tr_tr as current;
