// Domain layer: the records the adapters read and produce, plus the decryption port.

pub mod model;
pub mod ports;
