#![allow(dead_code)]

pub mod market;
pub mod notifier;
pub mod source;
pub mod table;
