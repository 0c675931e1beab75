pub mod ports;
pub mod scaffold;
