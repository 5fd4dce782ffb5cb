// Platform module
pub mod banner;

pub mod parameters {
    pub mod app {
        pub const APPLICATION_NAME: &str = "PCB Studio";
        pub const VERSION: &str = env!("CARGO_PKG_VERSION"); // Single source of truth from Cargo.toml
    }
}
