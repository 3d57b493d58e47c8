use std::process::exit;

use labkit::{argparse::set_configs, labkit::labkit};

#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

fn main() {
    let config = set_configs();

    if let Err(err) = labkit(config) {
        eprintln!("ERROR: {:#}", err);
        exit(1);
    }
}
