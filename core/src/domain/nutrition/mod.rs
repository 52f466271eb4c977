pub mod accumulator;
pub mod deficiency;
pub mod entities;
pub mod ports;
pub mod recommend;
pub mod report;
pub mod services;
pub mod units;
pub mod value_objects;
