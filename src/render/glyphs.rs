//! Packed glyph tables for the built-in fonts.

/// Line height of [`MAIN`].
pub const MAIN_HEIGHT: u32 = 11;

/// Line height of [`SMALL`].
pub const SMALL_HEIGHT: u32 = 8;

/// Line height of [`DIGITS`].
pub const DIGITS_HEIGHT: u32 = 5;

/// Proportional font used for titles, menu items and the game-over screen.
#[rustfmt::skip]
pub const MAIN: &[(char, u128)] = &[
    (' ', 0x100000000000),
    ('!', 0x7ffcf0),
    ('"', 0x7d0000),
    ('\'', 0x7d0000),
    ('(', 0x17ccccccc700),
    (')', 0x1e3333333e00),
    (',', 0x4000f0),
    ('.', 0x4000f4),
    ('/', 0x8c633198cc6000),
    ('0', 0x5ecf3cf3cf3cde000),
    ('1', 0x16e666666f00),
    ('2', 0x5ecf3cc739ce3f000),
    ('3', 0x5ecf30ce0f3cde000),
    ('4', 0x21871e6c9b366fe18000),
    ('5', 0x7fc30f830f3cde000),
    ('6', 0x5ecf0fb3cf3cde000),
    ('7', 0x7fcc30c638c30c000),
    ('8', 0x5ecf3cdecf3cde000),
    ('9', 0x5ecf3cf37c3cde000),
    (':', 0x43c3c0),
    (';', 0x43c3d0),
    ('?', 0x5ecf30ce30030c000),
    ('A', 0x5ecf3cffcf3cf3000),
    ('B', 0x7ecf3cfecf3cfe000),
    ('C', 0x5ecf0c30c30cde000),
    ('D', 0x7ecf3cf3cf3cfe000),
    ('E', 0xff18f6318c7c00),
    ('F', 0xff18f6318c6000),
    ('G', 0x5ecf0c30df3cde000),
    ('H', 0x73cf3cffcf3cf3000),
    ('I', 0x7ffff0),
    ('J', 0x133333333e00),
    ('K', 0x73cf3cfecf3cf3000),
    ('L', 0x1ccccccccf00),
    ('M', 0x3071f7ffaf1e3c78c000),
    ('N', 0x30f1f3f7ff7e7c784000),
    ('O', 0x5ecf3cf3cf3cde000),
    ('P', 0x7ecf3cfec30c30000),
    ('Q', 0x5ecf3cf3cf3dde0c0),
    ('R', 0x7ecf3cfecf3cf3000),
    ('S', 0x5ecf0c1e0c3cde000),
    ('T', 0x7f30c30c30c30c000),
    ('U', 0x73cf3cf3cf3cde000),
    ('V', 0x73cf3cf3cde78c000),
    ('W', 0x38f1e3d7affbe7cd8000),
    ('X', 0x73cde78c79ecf3000),
    ('Y', 0x73cf3cde30c30c000),
    ('Z', 0xfc633198cc7c00),
    ('[', 0x17ccccccc700),
    ('\\', 0xe318630c618c00),
    (']', 0x1e3333333e00),
    ('a', 0x4001e0dfcf3cdf000),
    ('b', 0x70c3ecf3cf3cfe000),
    ('c', 0x4001ecf0c30cde000),
    ('d', 0x430dfcf3cf3cdf000),
    ('e', 0x4001ecf3ff0cde000),
    ('f', 0x136f66666600),
    ('g', 0x4001ecf3cf3cdf0de),
    ('h', 0x70c3ecf3cf3cf3000),
    ('i', 0x73fff0),
    ('j', 0x2c36db780),
    ('k', 0x70c33dbce3cdb3000),
    ('l', 0x7ffff0),
    ('m', 0x10000fedbdbdbdbdbdb0000),
    ('n', 0x4003ecf3cf3cf3000),
    ('o', 0x4001ecf3cf3cde000),
    ('p', 0x4003ecf3cf3cfec30),
    ('q', 0x4001ecf3cf3cdf0c3),
    ('r', 0x801bfe318c6000),
    ('s', 0x800fc61c31f800),
    ('t', 0x166f66666300),
    ('u', 0x40033cf3cf3cdf000),
    ('v', 0x40033cf3cd278c000),
    ('w', 0x200063c78f5eb7cd8000),
    ('x', 0x40033cf37bfcf3000),
    ('y', 0x40033cf3cf3cdf0de),
    ('z', 0x100f3366cf00),
    ('{', 0x17ccccccc700),
    ('|', 0x7ffff0),
    ('}', 0x1e3333333e00),
];

/// Compact font used for menu headers and the high-score table.
#[rustfmt::skip]
pub const SMALL: &[(char, u128)] = &[
    (' ', 0x1000000),
    ('0', 0x176f7bdedc0),
    ('1', 0x17db6d8),
    ('2', 0x1f0c6ec63e0),
    ('3', 0x1f0c6e18fc0),
    ('4', 0x119d73f8c60),
    ('5', 0x1f43c318fc0),
    ('6', 0x1763dbdedc0),
    ('7', 0x1f198cc6300),
    ('8', 0x176f6ededc0),
    ('9', 0x176f7b70dc0),
    ('!', 0x1ffcc),
    ('"', 0x1b40000),
    ('#', 0x157feaffd40),
    ('$', 0x153f5e7afca),
    ('%', 0x1cb610c21b4c0),
    ('&', 0x173673ddf7740),
    ('\'', 0x1c0),
    ('(', 0x12b6d91),
    (')', 0x189b6d4),
    ('*', 0x1257eefd480),
    ('+', 0x10109f21000),
    (',', 0x1001e),
    ('-', 0x1000f0000),
    ('.', 0x1003c),
    ('/', 0x125ad20),
    (':', 0x10f3c),
    (';', 0x10f1d),
    ('<', 0x1136c6310),
    ('=', 0x1000f0f00),
    ('>', 0x18c636c80),
    ('?', 0x1f0ccc60180),
    ('@', 0x17b3ff7ff0780),
    ('A', 0x176f7bfef60),
    ('B', 0x1f6fdbdefc0),
    ('C', 0x17e318c61e0),
    ('D', 0x1f6f7bdefc0),
    ('E', 0x1fe3d8c63e0),
    ('F', 0x1fe3d8c6300),
    ('G', 0x17631bdede0),
    ('H', 0x1deffbdef60),
    ('I', 0x1fffc),
    ('J', 0x1333333e0),
    ('K', 0x1cf6f38f36cc0),
    ('L', 0x1ccccccf0),
    ('M', 0x1838fbffd78f180),
    ('N', 0x18f3effdf3c40),
    ('O', 0x17b3cf3cf3780),
    ('P', 0x1f6f7bf6300),
    ('Q', 0x17b3cf3cf7783),
    ('R', 0x1f6f7bf6b60),
    ('S', 0x17cc633e0),
    ('T', 0x1fcc30c30c300),
    ('U', 0x1def7bdedc0),
    ('V', 0x1cf3cde78c300),
    ('W', 0x1c78f5ff7cf9b00),
    ('X', 0x1cf378c7b3cc0),
    ('Y', 0x1cf378c30c300),
    ('Z', 0x1f8ceee63e0),
    ('[', 0x1fb6db8),
    ('\\', 0x1932648),
    (']', 0x1edb6f8),
    ('a', 0x1001c37ede0),
    ('b', 0x1c63dbdefc0),
    ('c', 0x1007ccc70),
    ('d', 0x118dfbdede0),
    ('e', 0x1001dbfe1e0),
    ('f', 0x17bedb0),
    ('g', 0x1001fbdbc7e),
    ('h', 0x1c63dbdef60),
    ('i', 0x1cffc),
    ('j', 0x161b6de),
    ('k', 0x1c637ee7b60),
    ('l', 0x1fffc),
    ('m', 0x10000fedbdbdbdb00),
    ('n', 0x1003dbdef60),
    ('o', 0x1001dbdedc0),
    ('p', 0x1003dbdfb18),
    ('q', 0x1001fbdbc63),
    ('r', 0x100dfccc0),
    ('s', 0x1007cf3e0),
    ('t', 0x1dbed98),
    ('u', 0x10037bdede0),
    ('v', 0x10037b73880),
    ('w', 0x100031ebd6f9b00),
    ('x', 0x10037b76f60),
    ('y', 0x10037bdbc6e),
    ('z', 0x1003e6663e0),
    ('|', 0x1fffc),
];

/// Three-column digits drawn above the arena.
#[rustfmt::skip]
pub const DIGITS: &[(char, u128)] = &[
    ('0', 0xfb6f),
    ('1', 0xac92),
    ('2', 0xf3e7),
    ('3', 0xf3cf),
    ('4', 0xdbc9),
    ('5', 0xf9cf),
    ('6', 0xf9ef),
    ('7', 0xf249),
    ('8', 0xfbef),
    ('9', 0xfbcf),
];
