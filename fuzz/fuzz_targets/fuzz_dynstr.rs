#![no_main]

use arbitrary::Arbitrary;
use dynstr::{DynStr, DynStrError, DynStrOptions, GrowthPolicy, count_chars, count_chars_strict};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
enum Op {
    Append(Vec<u8>),
    Push(char),
    PushByte(u8),
    Release,
}

#[derive(Debug, Arbitrary)]
struct Input {
    exact: bool,
    initial: Vec<u8>,
    ops: Vec<Op>,
}

/// Replays `input` against a `DynStr` and a plain `Vec` model, checking the
/// capacity invariant and both counters after every step.
fn run(input: Input) {
    let growth = if input.exact {
        GrowthPolicy::Exact
    } else {
        GrowthPolicy::Doubling
    };
    let mut buf = DynStr::with_options(&input.initial, DynStrOptions { growth }).unwrap();
    let mut model = Some(input.initial);

    for op in input.ops {
        if let Op::Release = op {
            buf.release();
            model = None;
        } else if let Some(model) = model.as_mut() {
            match op {
                Op::Append(bytes) => {
                    buf.append(&DynStr::new(&bytes).unwrap()).unwrap();
                    model.extend_from_slice(&bytes);
                }
                Op::Push(unit) => {
                    buf.push(unit).unwrap();
                    model.extend_from_slice(unit.encode_utf8(&mut [0; 4]).as_bytes());
                }
                Op::PushByte(byte) => {
                    buf.push_byte(byte).unwrap();
                    model.push(byte);
                }
                Op::Release => unreachable!(),
            }
        } else {
            let result = buf.push_byte(0);
            assert!(matches!(result, Err(DynStrError::Released { .. })));
        }

        match &model {
            Some(model) => {
                let bytes = buf.as_bytes().unwrap();
                assert_eq!(bytes, model.as_slice());
                assert!(buf.capacity() > buf.len());
                if growth == GrowthPolicy::Exact {
                    assert_eq!(buf.capacity(), buf.len() + 1);
                }

                let lenient = count_chars(bytes);
                assert!(lenient <= bytes.len());
                if let Ok(strict) = count_chars_strict(bytes) {
                    assert_eq!(strict, lenient);
                }
            }
            None => {
                assert!(buf.is_released());
                assert_eq!((buf.len(), buf.capacity()), (0, 0));
            }
        }
    }
}

fuzz_target!(|input: Input| run(input));
