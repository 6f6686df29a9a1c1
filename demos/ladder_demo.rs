//! Prints the ladder operators for a small truncation and checks the
//! number operator. Pass the dimension as the first argument (default 4).
//! Set `RUST_LOG=trace` to see the builder's log output.

use fockops::{build_ladder_operators, truncation_defect, validate_ladder_operators};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let n: i64 = match std::env::args().nth(1) {
        Some(arg) => arg.parse()?,
        None => 4,
    };

    println!("--- fockops Example: Ladder Operators (N = {}) ---", n);
    let ops = build_ladder_operators(n)?;
    println!("{}", ops);

    println!("Number operator a†·a:");
    print!("{}", ops.number_operator());

    validate_ladder_operators(&ops, None)?;
    println!("\nTranspose pairing and number operator checks passed.");

    println!("\nTruncation defect [a, a†] - I (non-zero only at the top level):");
    print!("{}", truncation_defect(&ops));
    Ok(())
}
