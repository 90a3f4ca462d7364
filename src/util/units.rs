//! Display formatting for house measurements.

#[cfg(test)]
#[path = "units_test.rs"]
mod units_test;

pub fn format_length(metres: f64) -> String {
    format!("{metres:.2} m")
}

pub fn format_area(square_metres: f64) -> String {
    format!("{square_metres:.2} m²")
}

pub fn format_volume(cubic_metres: f64) -> String {
    format!("{cubic_metres:.2} m³")
}

/// `L x W x H` summary used on cards.
pub fn format_dimensions(length: f64, width: f64, height: f64) -> String {
    format!("{length:.1} × {width:.1} × {height:.1} m")
}
