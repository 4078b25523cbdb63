#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use roachgen_core::{make_renderer, TableFormat};

#[derive(Arbitrary, Debug)]
struct Input {
    format: u8,
    header: Vec<String>,
    rows: Vec<Vec<String>>,
}

fuzz_target!(|input: Input| {
    let format = TableFormat::ALL[input.format as usize % TableFormat::ALL.len()];
    let header: Vec<&str> = input.header.iter().map(String::as_str).collect();

    // Ragged rows and arbitrary text should never panic
    let renderer = make_renderer(format);
    let first = renderer.render(&header, &input.rows);
    let second = renderer.render(&header, &input.rows);

    if let (Ok(a), Ok(b)) = (first, second) {
        assert_eq!(a, b);
    }
});
