//! Loading hex program text into instruction memory.
//!
//! Programs arrive as plain text, one instruction per line, written as hex
//! words with or without a `0x` prefix. The loader is forgiving: blank
//! lines and comment lines are skipped, and any line that fails to parse
//! becomes a no-op rather than an error, so a half-edited program still
//! runs. The result is always padded to the minimum program length so the
//! fetch stage has no-ops to stream once the real program is exhausted.

use crate::common::constants::{MIN_PROGRAM_WORDS, NOP_INSTRUCTION};

/// Parses hex program text into instruction memory words.
///
/// Lines are trimmed; empty lines and lines starting with `//` or `#` are
/// skipped. Remaining lines are read as hex (an optional `0x`/`0X` prefix
/// is stripped); unparsable lines load as no-ops. The output is padded
/// with no-ops up to [`MIN_PROGRAM_WORDS`].
///
/// # Examples
///
/// ```
/// use pipevis_core::sim::loader::load_program;
///
/// let imem = load_program("0x00700293\n// comment\nnot-hex\n");
/// assert_eq!(imem[0], 0x0070_0293);
/// assert_eq!(imem[1], 0x0000_0013);
/// assert_eq!(imem.len(), 64);
/// ```
pub fn load_program(text: &str) -> Vec<u32> {
    let mut imem: Vec<u32> = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with("//") && !line.starts_with('#'))
        .map(parse_word)
        .collect();

    if imem.len() < MIN_PROGRAM_WORDS {
        imem.resize(MIN_PROGRAM_WORDS, NOP_INSTRUCTION);
    }
    imem
}

/// Parses one program line as a hex word, defaulting to a no-op.
fn parse_word(line: &str) -> u32 {
    let digits = line
        .strip_prefix("0x")
        .or_else(|| line.strip_prefix("0X"))
        .unwrap_or(line);
    u32::from_str_radix(digits, 16).unwrap_or(NOP_INSTRUCTION)
}
