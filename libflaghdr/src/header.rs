use std::io::{self, Write};
use tracing::{instrument, trace};

/// Number of byte literals written on each line of the array body
pub const LITERALS_PER_LINE: usize = 20;
/// Indentation in front of each line of the array body
pub const INDENT: &str = "    ";

/// Writes `alpha` as a C header named `name` into `w`
///
/// Produces the include guard, the `const uint8_t <NAME>_PIXELS[]` array with one `0xhh,`
/// literal per value (lowercase, [`LITERALS_PER_LINE`] per line), and the closing
/// `#endif <NAME>_H`. An empty `alpha` yields an array with no body lines.
///
/// # Errors
///
/// This function returns any error raised by the underlying writer
#[instrument(skip(w, alpha), fields(len = alpha.len()), level = "debug")]
pub fn write_header(w: &mut impl Write, name: &str, alpha: &[u8]) -> io::Result<()> {
    writeln!(w, "#ifndef {name}_H")?;
    writeln!(w, "#define {name}_H")?;
    writeln!(w)?;
    writeln!(w, "const uint8_t {name}_PIXELS[] = {{")?;

    for (i, line) in alpha.chunks(LITERALS_PER_LINE).enumerate() {
        w.write_all(INDENT.as_bytes())?;
        for value in line {
            write!(w, "0x{value:02x},")?;
        }
        w.write_all(b"\n")?;
        trace!("wrote line {i} ({} literals)", line.len());
    }

    writeln!(w, "}};")?;
    writeln!(w)?;
    // not a valid guard terminator, consumers expect it verbatim
    writeln!(w, "#endif {name}_H")?;
    Ok(())
}

/// Renders the header produced by [`write_header`] into a [`String`]
#[must_use]
pub fn render_header(name: &str, alpha: &[u8]) -> String {
    let mut out = Vec::with_capacity(128 + alpha.len() * 5);
    // writing into a Vec cannot fail
    let _ = write_header(&mut out, name, alpha);
    String::from_utf8_lossy(&out).into_owned()
}
