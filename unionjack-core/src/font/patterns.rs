//! ASCII → segment pattern table.
//!
//! Font from the alpha32 project (msarnoff.org/alpha32). The 32 control
//! characters are not stored.

/// First code point in the table (space).
pub const CHAR_OFFSET: u32 = 32;

/// Number of stored patterns, space through DEL.
pub const CHAR_COUNT: usize = 96;

#[rustfmt::skip]
static PATTERNS: [u16; CHAR_COUNT] = [
    0x0000, /*   */ 0x1822, /* ! */ 0x0880, /* " */ 0x4b3c, /* # */
    0x4bbb, /* $ */ 0xdb99, /* % */ 0x2d79, /* & */ 0x1000, /* ' */
    0x3000, /* ( */ 0x8400, /* ) */ 0xff00, /* * */ 0x4b00, /* + */
    0x8000, /* , */ 0x0300, /* - */ 0x0020, /* . */ 0x9000, /* / */
    0x90ff, /* 0 */ 0x100c, /* 1 */ 0x0377, /* 2 */ 0x123b, /* 3 */
    0x038c, /* 4 */ 0x21b3, /* 5 */ 0x03fb, /* 6 */ 0x000f, /* 7 */
    0x03ff, /* 8 */ 0x03bf, /* 9 */ 0x0021, /* : */ 0x8001, /* ; */
    0x9030, /* < */ 0x0330, /* = */ 0x2430, /* > */ 0x4207, /* ? */
    0x417f, /* @ */ 0x03cf, /* A */ 0x4a3f, /* B */ 0x00f3, /* C */
    0x483f, /* D */ 0x01f3, /* E */ 0x01c3, /* F */ 0x02fb, /* G */
    0x03cc, /* H */ 0x4833, /* I */ 0x4863, /* J */ 0x31c0, /* K */
    0x00f0, /* L */ 0x14cc, /* M */ 0x24cc, /* N */ 0x00ff, /* O */
    0x03c7, /* P */ 0x20ff, /* Q */ 0x23c7, /* R */ 0x03bb, /* S */
    0x4803, /* T */ 0x00fc, /* U */ 0x90c0, /* V */ 0xa0cc, /* W */
    0xb400, /* X */ 0x5400, /* Y */ 0x9033, /* Z */ 0x00e1, /* [ */
    0x2400, /* \ */ 0x001e, /* ] */ 0xa000, /* ^ */ 0x0030, /* _ */
    0x0400, /* ` */ 0x4170, /* a */ 0x41e0, /* b */ 0x0160, /* c */
    0x4960, /* d */ 0x8160, /* e */ 0x4b02, /* f */ 0x2238, /* g */
    0x41c0, /* h */ 0x4000, /* i */ 0x4020, /* j */ 0x6a00, /* k */
    0x4811, /* l */ 0x4348, /* m */ 0x4140, /* n */ 0x4160, /* o */
    0x09c1, /* p */ 0x4991, /* q */ 0x0140, /* r */ 0x4220, /* s */
    0x4b10, /* t */ 0x4060, /* u */ 0x8040, /* v */ 0x4078, /* w */
    0xd800, /* x */ 0x2038, /* y */ 0x8120, /* z */ 0x4912, /* { */
    0x4800, /* | */ 0x4a21, /* } */ 0x0a85, /* ~ */ 0x0000, /* DEL */
];

/// Pattern for an ASCII code point. Anything outside 32..128 is blank.
pub const fn lookup(code: u32) -> u16 {
    if code < CHAR_OFFSET || code >= CHAR_OFFSET + CHAR_COUNT as u32 {
        return 0;
    }
    PATTERNS[(code - CHAR_OFFSET) as usize]
}

/// Pattern for a `char`; non-ASCII characters are blank.
pub const fn lookup_char(c: char) -> u16 {
    lookup(c as u32)
}

/// The raw table, indexed by `code - CHAR_OFFSET`.
pub fn patterns() -> &'static [u16; CHAR_COUNT] {
    &PATTERNS
}
