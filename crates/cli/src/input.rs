//! Interactive input collection with a validate-and-retry contract.
//!
//! Every prompt loops until the reader yields a value that passes
//! validation; invalid input is answered with a short message and a
//! re-prompt, never propagated into the core. The functions are generic
//! over the reader and writer so the retry behavior is unit-testable
//! against in-memory buffers.

use nalgebra::Point2;
use pallet_reach_core::{RobotClass, Scenario};
use std::io::{self, BufRead, Write};

fn read_trimmed<R: BufRead>(reader: &mut R) -> io::Result<String> {
    let mut line = String::new();
    if reader.read_line(&mut line)? == 0 {
        return Err(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "input stream closed before a valid value was entered",
        ));
    }
    Ok(line.trim().to_string())
}

/// Prompts until a strictly positive, finite number is entered.
pub fn prompt_positive<R: BufRead, W: Write>(
    reader: &mut R,
    writer: &mut W,
    prompt: &str,
) -> io::Result<f64> {
    loop {
        write!(writer, "{prompt}")?;
        writer.flush()?;
        match read_trimmed(reader)?.parse::<f64>() {
            Ok(value) if value.is_finite() && value > 0.0 => return Ok(value),
            _ => writeln!(writer, "Invalid input. Please enter a positive number.")?,
        }
    }
}

/// Prompts until a strictly positive integer is entered.
pub fn prompt_positive_int<R: BufRead, W: Write>(
    reader: &mut R,
    writer: &mut W,
    prompt: &str,
) -> io::Result<u32> {
    loop {
        write!(writer, "{prompt}")?;
        writer.flush()?;
        match read_trimmed(reader)?.parse::<u32>() {
            Ok(value) if value > 0 => return Ok(value),
            _ => writeln!(writer, "Invalid input. Please enter a positive whole number.")?,
        }
    }
}

/// Prompts until one of the robot class codes 1, 2 or 3 is entered.
pub fn prompt_robot_class<R: BufRead, W: Write>(
    reader: &mut R,
    writer: &mut W,
) -> io::Result<RobotClass> {
    loop {
        write!(writer, "Enter robot type (1 for CS612, 2 for CS620, 3 for CS625): ")?;
        writer.flush()?;
        let entry = read_trimmed(reader)?;
        let class = entry
            .parse::<u8>()
            .ok()
            .and_then(|code| RobotClass::from_code(code).ok());
        match class {
            Some(class) => return Ok(class),
            None => writeln!(writer, "Invalid input. Please enter 1, 2, or 3.")?,
        }
    }
}

/// Prompts until two comma-separated numbers are entered.
pub fn prompt_point<R: BufRead, W: Write>(
    reader: &mut R,
    writer: &mut W,
    prompt: &str,
) -> io::Result<Point2<f64>> {
    loop {
        write!(writer, "{prompt}")?;
        writer.flush()?;
        let entry = read_trimmed(reader)?;
        let parts: Vec<&str> = entry.split(',').map(str::trim).collect();
        if parts.len() == 2 {
            if let (Ok(x), Ok(y)) = (parts[0].parse::<f64>(), parts[1].parse::<f64>()) {
                if x.is_finite() && y.is_finite() {
                    return Ok(Point2::new(x, y));
                }
            }
        }
        writeln!(writer, "Invalid input. Please enter two numbers separated by a comma.")?;
    }
}

/// Runs the full prompt sequence and assembles a validated scenario.
pub fn collect_scenario<R: BufRead, W: Write>(
    reader: &mut R,
    writer: &mut W,
) -> anyhow::Result<Scenario> {
    use pallet_reach_core::{BoxSpec, PalletSpec, RobotProfile};

    writeln!(writer, "Enter dimensions in millimeters:")?;
    let box_height = prompt_positive(reader, writer, "Box height: ")?;
    let box_width = prompt_positive(reader, writer, "Box width: ")?;
    let box_length = prompt_positive(reader, writer, "Box length: ")?;
    let pallet_width = prompt_positive(reader, writer, "Pallet width: ")?;
    let pallet_length = prompt_positive(reader, writer, "Pallet length: ")?;
    let layers = prompt_positive_int(reader, writer, "Number of layers: ")?;
    let robot_class = prompt_robot_class(reader, writer)?;
    let master = prompt_point(reader, writer, "Enter master point of the pallet (x,y): ")?;
    let robot_height = prompt_positive(reader, writer, "Enter robot height: ")?;

    let scenario = Scenario::new(
        BoxSpec::new(box_width, box_length, box_height)?,
        PalletSpec::new(pallet_width, pallet_length, master)?,
        layers,
        RobotProfile::new(robot_class, robot_height)?,
    )?;
    Ok(scenario)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_positive_retries_until_valid() {
        let mut input = Cursor::new("abc\n-5\n0\n400\n");
        let mut output = Vec::new();
        let value = prompt_positive(&mut input, &mut output, "Box width: ").unwrap();
        assert_eq!(value, 400.0);

        let transcript = String::from_utf8(output).unwrap();
        assert_eq!(transcript.matches("Invalid input").count(), 3);
    }

    #[test]
    fn test_positive_int_rejects_fractions() {
        let mut input = Cursor::new("2.5\n3\n");
        let mut output = Vec::new();
        let value = prompt_positive_int(&mut input, &mut output, "Number of layers: ").unwrap();
        assert_eq!(value, 3);
    }

    #[test]
    fn test_robot_class_accepts_only_known_codes() {
        let mut input = Cursor::new("0\n9\nCS612\n2\n");
        let mut output = Vec::new();
        let class = prompt_robot_class(&mut input, &mut output).unwrap();
        assert_eq!(class, RobotClass::Cs620);
    }

    #[test]
    fn test_point_requires_two_numbers() {
        let mut input = Cursor::new("100\n1,2,3\n10, 20\n");
        let mut output = Vec::new();
        let point = prompt_point(&mut input, &mut output, "Master point (x,y): ").unwrap();
        assert_eq!(point, Point2::new(10.0, 20.0));
    }

    #[test]
    fn test_eof_is_an_error_not_a_hang() {
        let mut input = Cursor::new("");
        let mut output = Vec::new();
        let err = prompt_positive(&mut input, &mut output, "Box width: ").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
    }

    #[test]
    fn test_collect_scenario_full_sequence() {
        let mut input = Cursor::new("200\n400\n300\n1200\n1000\n2\n1\n0,0\n500\n");
        let mut output = Vec::new();
        let scenario = collect_scenario(&mut input, &mut output).unwrap();

        assert_eq!(scenario.box_spec.width, 400.0);
        assert_eq!(scenario.box_spec.length, 300.0);
        assert_eq!(scenario.box_spec.height, 200.0);
        assert_eq!(scenario.pallet.width, 1200.0);
        assert_eq!(scenario.layers, 2);
        assert_eq!(scenario.robot.class, RobotClass::Cs612);
        assert_eq!(scenario.robot.base_height, 500.0);
    }
}
