use std::collections::HashMap;

/// US-QWERTY character to the Thai Kedmanee glyph on the same physical key.
/// Ordered by keyboard row, unshifted plane first.
pub const KEDMANEE_PAIRS: &[(char, char)] = &[
    // Row 0: Number row (13 keys)
    ('`', '_'),
    ('1', 'ๅ'),
    ('2', '/'),
    ('3', '-'),
    ('4', 'ภ'),
    ('5', 'ถ'),
    ('6', 'ุ'),
    ('7', 'ึ'),
    ('8', 'ค'),
    ('9', 'ต'),
    ('0', 'จ'),
    ('-', 'ข'),
    ('=', 'ช'),
    // Row 1: QWERTY row (13 keys)
    ('q', 'ๆ'),
    ('w', 'ไ'),
    ('e', 'ำ'),
    ('r', 'พ'),
    ('t', 'ะ'),
    ('y', 'ั'),
    ('u', 'ี'),
    ('i', 'ร'),
    ('o', 'น'),
    ('p', 'ย'),
    ('[', 'บ'),
    (']', 'ล'),
    ('\\', 'ฃ'),
    // Row 2: ASDF row (11 keys)
    ('a', 'ฟ'),
    ('s', 'ห'),
    ('d', 'ก'),
    ('f', 'ด'),
    ('g', 'เ'),
    ('h', '้'),
    ('j', '่'),
    ('k', 'า'),
    ('l', 'ส'),
    (';', 'ว'),
    ('\'', 'ง'),
    // Row 3: ZXCV row (10 keys)
    ('z', 'ผ'),
    ('x', 'ป'),
    ('c', 'แ'),
    ('v', 'อ'),
    ('b', 'ิ'),
    ('n', 'ื'),
    ('m', 'ท'),
    (',', 'ม'),
    ('.', 'ใ'),
    ('/', 'ฝ'),
    // Shifted Row 0
    ('~', '%'),
    ('!', '+'),
    ('@', '๑'),
    ('#', '๒'),
    ('$', '๓'),
    ('%', '๔'),
    ('^', 'ู'),
    ('&', '฿'),
    ('*', '๕'),
    ('(', '๖'),
    (')', '๗'),
    ('_', '๘'),
    ('+', '๙'),
    // Shifted Row 1
    ('Q', '๐'),
    ('W', '"'),
    ('E', 'ฎ'),
    ('R', 'ฑ'),
    ('T', 'ธ'),
    ('Y', 'ํ'),
    ('U', '๊'),
    ('I', 'ณ'),
    ('O', 'ฯ'),
    ('P', 'ญ'),
    ('{', 'ฐ'),
    ('}', ','),
    ('|', 'ฅ'),
    // Shifted Row 2
    ('A', 'ฤ'),
    ('S', 'ฆ'),
    ('D', 'ฏ'),
    ('F', 'โ'),
    ('G', 'ฌ'),
    ('H', '็'),
    ('J', '๋'),
    ('K', 'ษ'),
    ('L', 'ศ'),
    (':', 'ซ'),
    ('"', '.'),
    // Shifted Row 3
    ('Z', '('),
    ('X', ')'),
    ('C', 'ฉ'),
    ('V', 'ฮ'),
    ('B', 'ฺ'),
    ('N', '์'),
    ('M', '?'),
    ('<', 'ฒ'),
    ('>', 'ฬ'),
    ('?', 'ฦ'),
];

lazy_static::lazy_static! {
    pub(crate) static ref KEDMANEE_MAP: HashMap<char, char> =
        KEDMANEE_PAIRS.iter().copied().collect();
}
