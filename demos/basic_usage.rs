// ============================================================================
// Basic Usage Example
// ============================================================================

use serde_json::json;
use vend_number::prelude::*;

fn main() {
    #[cfg(feature = "logging")]
    let _ = vend_number::utils::init_tracing("vend_number=debug");

    println!("=== Vend Number Example ===\n");

    // Decimal-exact arithmetic where binary floats drift
    println!("0.1 + 0.2        = {}", 0.1 + 0.2);
    println!("add(0.1, 0.2)    = {:?}", add([0.1, 0.2]));
    println!("subtract(1,2,3)  = {:?}", subtract([1, 2, 3]));
    println!("divide(3, 2, 1)  = {:?}", divide([3, 2, 1]));
    println!("multiply mixed   = {:?}", multiply(operands!["19.99", 3, vn(0.5)]));

    // Strict validation
    println!("\n=== Invalid Operands and Edge Cases ===");
    for values in [
        operands![1, None::<f64>],
        operands!["10", "ten"],
        operands![5, 0],
        operands![0, 0],
        operands![1e30, 3],
    ] {
        match divide(values) {
            Ok(result) => println!("  ok: {}", result),
            Err(err) => println!("  error: {}", err),
        }
    }

    // Rounding modes
    println!("\n=== Rounding 2.55 and -2.55 to 1 place ===");
    for (name, mode) in ROUNDING_MODES {
        println!(
            "  {:<18} {:>5} {:>5}",
            name,
            round_with_mode(2.55, 1, mode),
            round_with_mode(-2.55, 1, mode)
        );
    }

    // Aggregation over dirty data
    println!("\n=== Aggregation ===");
    let basket = json!([
        { "sku": "A-1", "price": 10 },
        { "sku": "B-2", "price": "2.156" },
        { "sku": "C-3", "price": null },
        { "sku": "D-4", "price": "n/a" },
        null
    ]);
    println!("  total (2dp):     {}", sum_by_value(&basket, "price", None));
    println!("  total (5dp):     {}", sum_by_value(&basket, "price", Some(5)));

    let config = RoundingConfig::bankers().with_decimal_points(1);
    println!(
        "  total (bankers): {}",
        sum_by_with_config(basket.as_array(), "price", &config)
    );

    // Finiteness
    println!("\n=== Finiteness ===");
    println!("  is_finite(\"123.45\")  = {}", is_finite("123.45"));
    println!("  is_finite(Infinity)  = {}", is_finite(f64::INFINITY));
    println!("  is_finite(vn(5))     = {}", is_finite(vn(5)));
}
