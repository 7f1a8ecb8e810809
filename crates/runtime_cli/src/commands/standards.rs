//! Standards command implementation
//!
//! Lists the recognised calibration standards and their coefficients.

use std::io::Write;

use cvd_core::Standard;

use crate::output::format_general;
use crate::Result;

/// Run the standards command
pub fn run<W: Write>(out: &mut W) -> Result<()> {
    writeln!(
        out,
        "{:<10} {:>12} {:>12} {:>14} {:>10}",
        "Standard", "A", "B", "C (subzero)", "alpha"
    )?;
    for standard in Standard::ALL {
        let coefficients = standard.coefficients(true);
        writeln!(
            out,
            "{:<10} {:>12} {:>12} {:>14} {:>10}",
            standard.name(),
            format_general(coefficients.a),
            format_general(coefficients.b),
            format_general(coefficients.c),
            format_general(standard.alpha())
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lists_every_standard() {
        let mut buffer = Vec::new();
        run(&mut buffer).unwrap();
        let output = String::from_utf8(buffer).unwrap();

        assert_eq!(output.lines().count(), 4);
        assert!(output.contains("DIN43760"));
        assert!(output.contains("American"));
        assert!(output.contains("ITS-90"));
        assert!(output.contains("-4.2735e-12"));
        assert!(output.contains("0.00384998"));
    }
}
