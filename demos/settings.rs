//! # argenv demo
//!
//! Loads a small network-service settings record and prints it.
//!
//! ```sh
//! cargo run --example settings
//! cargo run --example settings -- --port-number=8080
//! PORT_NUMBER=9000 cargo run --example settings -- --port-number=8080
//! cargo run --example settings -- --help
//! RUST_LOG=argenv=debug cargo run --example settings
//! ```

use argenv::{ArgEnv, Fields, LoadError, Record};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Default)]
struct MySettings {
    ethernet_device: String,
    ip_address: String,
    port_number: i64,
    username: String,
    shell: String,
    verbose: bool,
}

impl Record for MySettings {
    fn fields(&mut self) -> Fields<'_> {
        Fields::new()
            .string("EthernetDevice", "eth0", "Specify NIC to configure", &mut self.ethernet_device)
            .string("IpAddress", "127.0.0.1", "IP Address to listen on", &mut self.ip_address)
            .int("PortNumber", "80", "Port to listen on", &mut self.port_number)
            .string("Username", "root", "Default user", &mut self.username)
            .string("Shell", "/bin/bash", "Default Shell", &mut self.shell)
            .bool("Verbose", "false", "Enable verbose output", &mut self.verbose)
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let mut settings = MySettings::default();
    let result = ArgEnv::builder()
        .about("argenv demo: settings from flags, environment, and defaults")
        .load(&mut settings);

    match result {
        Ok(()) => println!("{settings:#?}"),
        Err(LoadError::Arguments(e)) => e.exit(),
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    }
}
