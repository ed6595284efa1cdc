// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Field prefix byte codec.
//!
//! Every field starts with a single descriptor byte:
//!
//! ```text
//! bit 7    fixed-width (1) vs variable-width (0)
//! bits 6-5 variable-width size class: 00 -> 0, 01 -> 1, 10 -> 2, 11 -> 4
//! bit 4    has-ordinal
//! bit 3    has-name
//! bits 2-0 unused, always 0
//! ```
//!
//! Size class `11` means a 4-byte length; there is no 3-byte class.

const FIXED_WIDTH_BIT: u8 = 0x80;
const VARIABLE_WIDTH_MASK: u8 = 0x60;
const VARIABLE_WIDTH_SHIFT: u8 = 5;
const HAS_ORDINAL_BIT: u8 = 0x10;
const HAS_NAME_BIT: u8 = 0x08;

/// Decoded form of the one-byte field descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldPrefix {
    pub fixed_width: bool,
    /// Number of bytes used to encode the payload length: 0 (fixed width),
    /// 1, 2 or 4.
    pub variable_width: u8,
    pub has_ordinal: bool,
    pub has_name: bool,
}

impl FieldPrefix {
    /// Pack the prefix into its wire byte.
    pub fn encode(self) -> u8 {
        let mut byte = 0u8;
        if self.fixed_width {
            byte |= FIXED_WIDTH_BIT;
        }
        if self.has_ordinal {
            byte |= HAS_ORDINAL_BIT;
        }
        if self.has_name {
            byte |= HAS_NAME_BIT;
        }
        if self.variable_width > 0 {
            // 4-byte lengths share the two-bit class with value 3
            let class = if self.variable_width == 4 {
                3
            } else {
                self.variable_width
            };
            byte |= class << VARIABLE_WIDTH_SHIFT;
        }
        byte
    }

    /// Unpack a wire byte into its prefix flags.
    pub fn decode(byte: u8) -> FieldPrefix {
        let mut variable_width = (byte & VARIABLE_WIDTH_MASK) >> VARIABLE_WIDTH_SHIFT;
        if variable_width == 3 {
            variable_width = 4;
        }
        FieldPrefix {
            fixed_width: byte & FIXED_WIDTH_BIT != 0,
            variable_width,
            has_ordinal: byte & HAS_ORDINAL_BIT != 0,
            has_name: byte & HAS_NAME_BIT != 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefix_bijection_full_grid() {
        for fixed_width in [false, true] {
            for variable_width in [0u8, 1, 2, 4] {
                for has_ordinal in [false, true] {
                    for has_name in [false, true] {
                        let prefix = FieldPrefix {
                            fixed_width,
                            variable_width,
                            has_ordinal,
                            has_name,
                        };
                        let decoded = FieldPrefix::decode(prefix.encode());
                        assert_eq!(decoded, prefix);
                    }
                }
            }
        }
    }

    #[test]
    fn test_encode_decode_inverse_over_valid_bytes() {
        // All bytes with bits 2-0 clear round-trip exactly.
        for raw in 0u16..=255 {
            let byte = raw as u8;
            if byte & 0x07 != 0 {
                continue;
            }
            assert_eq!(FieldPrefix::decode(byte).encode(), byte);
        }
    }

    #[test]
    fn test_size_class_three_decodes_to_four() {
        let prefix = FieldPrefix::decode(0x60);
        assert_eq!(prefix.variable_width, 4);
        assert!(!prefix.fixed_width);
    }

    #[test]
    fn test_known_encodings() {
        // Fixed-width field with no name or ordinal (e.g. an indicator).
        let prefix = FieldPrefix {
            fixed_width: true,
            variable_width: 0,
            has_ordinal: false,
            has_name: false,
        };
        assert_eq!(prefix.encode(), 0x80);

        // Fixed-width field with an ordinal.
        let prefix = FieldPrefix {
            fixed_width: true,
            variable_width: 0,
            has_ordinal: true,
            has_name: false,
        };
        assert_eq!(prefix.encode(), 0x90);

        // Variable-width field with 1-byte length and a name.
        let prefix = FieldPrefix {
            fixed_width: false,
            variable_width: 1,
            has_ordinal: false,
            has_name: true,
        };
        assert_eq!(prefix.encode(), 0x28);
    }
}
