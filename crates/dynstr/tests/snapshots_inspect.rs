#![expect(missing_docs)]

use core::fmt::Write;

use dynstr::{Bits, DynStr, DynStrError, DynStrOptions, GrowthPolicy};

fn render_appends(parts: &[&str], options: DynStrOptions) -> Result<String, DynStrError> {
    let (first, rest) = parts.split_first().expect("at least one part");
    let mut buf = DynStr::with_options(first, options)?;
    let mut out = String::new();
    writeln!(out, "{}", buf.inspect()?).unwrap();
    for part in rest {
        buf.append(&DynStr::new(part)?)?;
        writeln!(out, "{}", buf.inspect()?).unwrap();
    }
    write!(out, "Reallocations: {}", buf.reallocations()).unwrap();
    Ok(out)
}

fn render_lead_bytes(text: &str) -> String {
    let mut out = String::new();
    for unit in text.chars() {
        let mut encoded = [0; 4];
        let bytes = unit.encode_utf8(&mut encoded).as_bytes();
        writeln!(
            out,
            "{unit} {} -> {:?}",
            Bits(bytes),
            dynstr::lead_byte_len(bytes[0])
        )
        .unwrap();
    }
    out
}

#[test]
fn snapshot_name_and_hobby() {
    let parts = ["Phillip", " Programs"];

    insta::assert_snapshot!(render_appends(&parts, DynStrOptions::default()).unwrap(), @r"
    String: Phillip
    Length: 7
    Capacity: 8
    String: Phillip Programs
    Length: 16
    Capacity: 17
    Reallocations: 1
    ");
}

#[test]
fn snapshot_growth_policies() {
    let parts = ["ab", "c", "d", "e", "fgh"];
    let exact = DynStrOptions {
        growth: GrowthPolicy::Exact,
    };

    insta::assert_snapshot!(render_appends(&parts, DynStrOptions::default()).unwrap(), @r"
    String: ab
    Length: 2
    Capacity: 3
    String: abc
    Length: 3
    Capacity: 6
    String: abcd
    Length: 4
    Capacity: 6
    String: abcde
    Length: 5
    Capacity: 6
    String: abcdefgh
    Length: 8
    Capacity: 12
    Reallocations: 2
    ");
    insta::assert_snapshot!(render_appends(&parts, exact).unwrap(), @r"
    String: ab
    Length: 2
    Capacity: 3
    String: abc
    Length: 3
    Capacity: 4
    String: abcd
    Length: 4
    Capacity: 5
    String: abcde
    Length: 5
    Capacity: 6
    String: abcdefgh
    Length: 8
    Capacity: 9
    Reallocations: 4
    ");
}

#[test]
fn snapshot_lossy_display() {
    let mut buf = DynStr::new("caf").unwrap();
    buf.push_byte(0xC3).unwrap();
    buf.push('!').unwrap();

    insta::assert_snapshot!(buf.inspect().unwrap(), @r"
    String: caf�!
    Length: 5
    Capacity: 8
    ");
    assert_eq!(buf.char_count().unwrap(), 4);
}

#[test]
fn snapshot_lead_byte_patterns() {
    insta::assert_snapshot!(render_lead_bytes("Aé✓🦀"), @r"
    A 01000001 -> Some(1)
    é 11000011 10101001 -> Some(2)
    ✓ 11100010 10011100 10010011 -> Some(3)
    🦀 11110000 10011111 10100110 10000000 -> Some(4)
    ");
}

#[test]
fn character_count_scenarios() {
    for (text, expected) in [("Hello", 5), ("éñøç", 4), ("✓→€中ह", 5), ("", 0)] {
        let buf = DynStr::new(text).unwrap();
        assert_eq!(buf.char_count().unwrap(), expected, "text: {text:?}");
        assert_eq!(buf.char_count_strict().unwrap(), expected, "text: {text:?}");
    }
}
