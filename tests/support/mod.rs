#![allow(dead_code)]

pub mod event;
pub mod feed;
