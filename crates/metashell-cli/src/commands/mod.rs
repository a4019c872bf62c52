pub mod check;
pub mod mdb;
pub mod output;
pub mod source;
pub mod trace;
