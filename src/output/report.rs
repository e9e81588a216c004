//! Colored field report for a derived view.

use crate::models::{binary_octets, DerivedView, Ipv6Summary, NetworkView};
use colored::Colorize;

use super::terminal::pad_field;

const LABEL_WIDTH: usize = 11;
const VALUE_WIDTH: usize = 22;

/// Print the field report for a derived view to stdout.
///
/// IPv4 views get the full ipcalc-style listing with binary detail
/// columns on the maskable rows; IPv6 summaries print only the fields
/// defined for that family.
pub fn print_report(view: &DerivedView) {
    log::info!("#Start print_report()");
    match view {
        DerivedView::V4(v) => print_ipv4_report(v),
        DerivedView::V6(v) => print_ipv6_report(v),
    }
}

fn print_ipv4_report(view: &NetworkView) {
    print_row("Address:", &view.address.to_string(), Some(&view.binary));
    print_row(
        "Netmask:",
        &format!("{} = {}", view.subnet_mask, view.prefix),
        Some(&binary_octets(&view.subnet_mask)),
    );
    print_row(
        "Wildcard:",
        &view.wildcard_mask.to_string(),
        Some(&binary_octets(&view.wildcard_mask)),
    );
    print_row(
        "Network:",
        &view.network.to_string(),
        Some(&binary_octets(&view.network)),
    );
    print_row(
        "Broadcast:",
        &view.broadcast.to_string(),
        Some(&binary_octets(&view.broadcast)),
    );
    print_row("HostMin:", &view.first_usable.to_string(), None);
    print_row("HostMax:", &view.last_usable.to_string(), None);
    print_row("Hosts:", &view.available_hosts.to_string(), None);
    print_row("Class:", &view.class.to_string(), None);
    print_row("Private:", &view.private.to_string(), None);
}

fn print_ipv6_report(summary: &Ipv6Summary) {
    let address = summary
        .address
        .as_ref()
        .map(|a| a.to_string())
        .unwrap_or_default();
    print_row("Address:", &format!("{}/{}", address, summary.prefix), None);
    print_row("Hosts:", &summary.available_hosts, None);
    print_row("Private:", &summary.unique_local.to_string(), None);
}

/// One aligned `Label: value [binary]` line.
fn print_row(label: &str, value: &str, binary: Option<&str>) {
    // Pad before coloring so the escape codes do not skew the widths.
    let label = pad_field(label, LABEL_WIDTH);
    match binary {
        Some(bits) => println!("{}{} {}", label, pad_field(value, VALUE_WIDTH).blue(), bits),
        None => println!("{}{}", label, value.blue()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Ipv4Address;

    #[test]
    fn test_print_report_both_families() {
        let v4 = NetworkView::derive(&Ipv4Address::from([192, 168, 1, 1]), 24)
            .expect("Error deriving view");
        print_report(&DerivedView::V4(v4));

        let v6 = Ipv6Summary::derive(None, 64).expect("Error deriving summary");
        print_report(&DerivedView::V6(v6));
    }
}
