//! Interactive input

pub mod question;
