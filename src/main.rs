use std::sync::Arc;

use anyhow::Result;
use connection_registry::{ConnectionRegistry, init_logging};

fn main() -> Result<()> {
    init_logging()?;

    let connection1 = ConnectionRegistry::instance();
    let connection2 = ConnectionRegistry::instance();

    println!(
        "Are both instances the same object? {}",
        Arc::ptr_eq(&connection1, &connection2)
    );

    println!("Connection Information:");
    let mut entries: Vec<_> = connection1.connection_info().into_iter().collect();
    entries.sort();
    for (key, value) in entries {
        println!("  {key}: {value}");
    }

    Ok(())
}
