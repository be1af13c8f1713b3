//! Stateless numeric operations over rectangle geometry and count/data pairs.
//!
//! Invalid input is signalled by sentinel return values (`0` for the geometry
//! operations, `-1` for `analyze_data`), never by errors or panics.

/// Rectangle area. Returns `0` when either dimension is non-positive.
pub fn area(width: i64, height: i64) -> i64 {
    if width <= 0 || height <= 0 {
        return 0;
    }

    width * height
}

/// Box volume. Returns `0` when any dimension is non-positive.
pub fn volume(width: i64, height: i64, depth: i64) -> i64 {
    if width <= 0 || height <= 0 || depth <= 0 {
        return 0;
    }

    width * height * depth
}

/// Rectangle perimeter from two side lengths. Returns `0` when either length
/// is non-positive.
pub fn perimeter(length_a: i64, length_b: i64) -> i64 {
    if length_a <= 0 || length_b <= 0 {
        return 0;
    }

    2 * (length_a + length_b)
}

/// Product of `count` and `data`, halved (truncating) when it exceeds 100.
/// Returns `-1` when either operand is non-positive.
///
/// Always announces the run on stdout first, even for invalid operands.
pub fn analyze_data(count: i64, data: i64) -> i64 {
    println!("Starting analysis...");

    if count <= 0 || data <= 0 {
        return -1;
    }

    let mut result = count * data;

    if result > 100 {
        result /= 2;
    }

    result
}
