pub mod generate;
pub mod show;

pub use generate::handle_generate_command;
pub use show::handle_show_command;

use crate::inventory::aggregate::HostAggregation;
use crate::output::print_warning;

/// Warns about hosts that were overwritten by a later device of the same name
fn report_collisions(hosts: &HostAggregation) {
    for collision in &hosts.collisions {
        print_warning(&format!(
            "Device {} is also named '{}'; replacing host {}",
            collision.device_id,
            collision.name.as_str(),
            collision.replaced_host
        ));
    }
}
