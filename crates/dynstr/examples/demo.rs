//! Walks through the life of a [`DynStr`]: build a name, append a hobby,
//! print the result, count characters in a few scripts and show the lead-byte
//! bit patterns that drive the count.
//!
//! Run with
//!
//! ```bash
//! RUST_LOG=trace cargo run -p dynstr --example demo
//! ```

use dynstr::{Bits, DynStr, DynStrError, LeadByte};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), DynStrError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut name = DynStr::new("Phillip")?;
    let hobby = DynStr::new(" Programs")?;
    name.append(&hobby)?;
    println!("{}", name.inspect()?);

    for sample in ["Hello", "éñøç", "✓→€中ह", ""] {
        let buf = DynStr::new(sample)?;
        println!("{sample:?}: {} characters", buf.char_count()?);
    }

    let mut checkmarks = DynStr::new("")?;
    for unit in ['✓', '✔', '☑'] {
        checkmarks.push(unit)?;
    }
    println!("{}", checkmarks.inspect()?);

    for unit in "A✓🦀".chars() {
        let mut encoded = [0; 4];
        let bytes = unit.encode_utf8(&mut encoded).as_bytes();
        println!("{unit}: {} ({:?})", Bits(bytes), LeadByte::classify(bytes[0]));
    }

    name.release();
    name.release();
    println!("after release: {:?}", name.inspect().unwrap_err());
    Ok(())
}
