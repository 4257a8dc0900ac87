//! The example calls.

use std::collections::LinkedList;
use std::io::Write;

use ipfmt::{print_ip, PrintError};

/// Print every example value to `out`, one line each.
///
/// Stops at the first failure.
pub fn run<W: Write>(mut out: W) -> Result<(), PrintError> {
    print_ip(&-1i8, &mut out)?;
    print_ip(&0i16, &mut out)?;
    print_ip(&2_130_706_433i32, &mut out)?;
    print_ip(&8_875_824_491_850_138_409i64, &mut out)?;
    print_ip(&String::from("Hello, World!"), &mut out)?;
    print_ip(&vec![100, 200, 300, 400], &mut out)?;
    print_ip(&LinkedList::<i16>::from([400, 300, 200, 100]), &mut out)?;
    print_ip(&(123, 456, 789, 0), &mut out)?;
    tracing::debug!("printed all examples");
    Ok(())
}
