// ============================================================================
// Basic Usage Example
// ============================================================================

use q31_sqrt::prelude::*;

fn main() {
    #[cfg(feature = "logging")]
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .init();

    println!("=== Q31 Square Root Example ===\n");

    // Scalar routine with status codes
    println!("Scalar roots:");
    for text in ["0.25", "0.5", "0.81", "0.0001"] {
        let input: Q31 = match text.parse() {
            Ok(value) => value,
            Err(err) => {
                println!("  {:>8}: {}", text, err);
                continue;
            },
        };
        let (root, status) = sqrt_q31(input);
        println!("  sqrt({}) = {} [{}] raw={:#010x}", input, root, status, root.raw_value());
    }

    // Non-positive inputs are rejected, output forced to zero
    println!("\nRejected inputs:");
    for input in [Q31::ZERO, Q31::from_raw(-1), Q31::MIN] {
        let (root, status) = input.fixed_sqrt();
        println!("  sqrt({}) = {} [{}]", input, root, status);
    }

    // Result-based form
    println!("\nChecked form:");
    match Q31::MAX.checked_sqrt() {
        Ok(root) => println!("  sqrt(MAX) = {:?}", root),
        Err(err) => println!("  sqrt(MAX) failed: {}", err),
    }
    if let Err(err) = Q31::ZERO.checked_sqrt() {
        println!("  sqrt(0) failed: {}", err);
    }

    // Slice driver
    println!("\n=== Slice Driver ===");
    let src: Vec<Q31> = (-2..8).map(|i| Q31::from_raw(i * 0x0FFF_FFFF)).collect();
    let mut dst = vec![Q31::ZERO; src.len()];

    match sqrt_q31_slice(&src, &mut dst) {
        Ok(report) => {
            println!(
                "Processed {} values, rejected {}",
                report.processed, report.rejected
            );
            for (input, root) in src.iter().zip(&dst) {
                println!("  {:>14} -> {}", input.to_string(), root);
            }
        },
        Err(err) => println!("Slice run failed: {}", err),
    }
}
