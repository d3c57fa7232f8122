mod config;
mod rack_table;

use config::CONFIG;
use utilities::{
    logger::{info, init_logger},
    result::Result,
};

fn main() -> Result<()> {
    let _gaurd = init_logger("Resolver", &CONFIG.log_level, &CONFIG.log_base);
    let addresses: Vec<String> = std::env::args().skip(1).collect();
    if addresses.is_empty() {
        eprintln!("usage: resolver <address> [address ...]");
        std::process::exit(2);
    }
    // the caller reads one rack path per address, in argv order
    for address in &addresses {
        let rack_path = rack_table::resolve(address);
        info!(%address,%rack_path,"Resolved node address");
        println!("{}", rack_path);
    }
    Ok(())
}
