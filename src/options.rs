//! Session option values: mode bits, output syntax and skip-data setup.

use std::fmt;
use std::ops::{BitOr, BitOrAssign};
use std::str::FromStr;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Engine mode bits. Flags from different axes (endianness, word width,
/// sub-mode) are OR-combined; the engine alone decides which combinations
/// are valid for an architecture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Mode(u32);

impl Mode {
    pub const LITTLE_ENDIAN: Mode = Mode(0);
    pub const ARM: Mode = Mode(0);
    pub const MODE_16: Mode = Mode(1 << 1);
    pub const MODE_32: Mode = Mode(1 << 2);
    pub const MODE_64: Mode = Mode(1 << 3);
    pub const THUMB: Mode = Mode(1 << 4);
    pub const MCLASS: Mode = Mode(1 << 5);
    pub const V8: Mode = Mode(1 << 6);
    pub const MICRO: Mode = Mode(1 << 4);
    pub const MIPS3: Mode = Mode(1 << 5);
    pub const MIPS32R6: Mode = Mode(1 << 6);
    pub const MIPS2: Mode = Mode(1 << 7);
    pub const V9: Mode = Mode(1 << 4);
    pub const QPX: Mode = Mode(1 << 4);
    pub const BIG_ENDIAN: Mode = Mode(1 << 31);
    pub const MIPS32: Mode = Mode::MODE_32;
    pub const MIPS64: Mode = Mode::MODE_64;

    /// Names accepted by [`Mode::from_str`], with or without a `CS_MODE_` prefix.
    const NAMES: &'static [(&'static str, Mode)] = &[
        ("LITTLE_ENDIAN", Mode::LITTLE_ENDIAN),
        ("ARM", Mode::ARM),
        ("16", Mode::MODE_16),
        ("32", Mode::MODE_32),
        ("64", Mode::MODE_64),
        ("THUMB", Mode::THUMB),
        ("MCLASS", Mode::MCLASS),
        ("V8", Mode::V8),
        ("MICRO", Mode::MICRO),
        ("MIPS3", Mode::MIPS3),
        ("MIPS32R6", Mode::MIPS32R6),
        ("MIPS2", Mode::MIPS2),
        ("V9", Mode::V9),
        ("QPX", Mode::QPX),
        ("BIG_ENDIAN", Mode::BIG_ENDIAN),
        ("MIPS32", Mode::MIPS32),
        ("MIPS64", Mode::MIPS64),
    ];

    pub const fn from_bits(bits: u32) -> Self {
        Mode(bits)
    }

    pub const fn bits(self) -> u32 {
        self.0
    }

    /// True if every bit of `other` is set. The zero mode is contained in all modes.
    pub const fn contains(self, other: Mode) -> bool {
        self.0 & other.0 == other.0
    }
}

impl BitOr for Mode {
    type Output = Mode;

    fn bitor(self, rhs: Mode) -> Mode {
        Mode(self.0 | rhs.0)
    }
}

impl BitOrAssign for Mode {
    fn bitor_assign(&mut self, rhs: Mode) {
        self.0 |= rhs.0;
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:x}", self.0)
    }
}

impl FromStr for Mode {
    type Err = Error;

    /// Parses `"thumb+mclass"`, `"CS_MODE_32 | CS_MODE_BIG_ENDIAN"` or a
    /// plain number (decimal or `0x` hex).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let unsupported = || Error::UnsupportedOption {
            option: "mode",
            value: s.to_string(),
        };

        let mut mode = Mode::default();
        for part in s.split(&['+', '|'][..]) {
            let part = part.trim();
            if part.is_empty() {
                return Err(unsupported());
            }
            if let Some(hex) = part.strip_prefix("0x").or_else(|| part.strip_prefix("0X")) {
                mode |= Mode(u32::from_str_radix(hex, 16).map_err(|_| unsupported())?);
                continue;
            }
            if let Ok(bits) = part.parse::<u32>() {
                mode |= Mode(bits);
                continue;
            }
            let upper = part.to_ascii_uppercase();
            let name = upper.strip_prefix("CS_MODE_").unwrap_or(&upper);
            let name = name.strip_prefix("MODE_").unwrap_or(name);
            let (_, flag) = Mode::NAMES
                .iter()
                .find(|(known, _)| *known == name)
                .ok_or_else(unsupported)?;
            mode |= *flag;
        }
        Ok(mode)
    }
}

/// Output dialect for the mnemonic and operand text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Syntax {
    /// Intel syntax, the x86 default
    Intel,
    /// AT&T syntax
    Att,
    /// Registers printed as bare numbers
    #[value(name = "no-register-names", alias = "noregname")]
    #[serde(rename = "no-register-names", alias = "noregname")]
    NoRegisterNames,
    /// Microsoft MASM syntax
    Masm,
}

impl Syntax {
    /// The engine's option value for this dialect.
    pub fn engine_value(self) -> usize {
        match self {
            Syntax::Intel => 1,
            Syntax::Att => 2,
            Syntax::NoRegisterNames => 3,
            Syntax::Masm => 4,
        }
    }
}

impl fmt::Display for Syntax {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Syntax::Intel => write!(f, "intel"),
            Syntax::Att => write!(f, "att"),
            Syntax::NoRegisterNames => write!(f, "no-register-names"),
            Syntax::Masm => write!(f, "masm"),
        }
    }
}

impl FromStr for Syntax {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().replace('_', "-").as_str() {
            "intel" => Ok(Syntax::Intel),
            "att" | "at&t" => Ok(Syntax::Att),
            "no-register-names" | "noregname" | "no-regname" => Ok(Syntax::NoRegisterNames),
            "masm" => Ok(Syntax::Masm),
            _ => Err(Error::UnsupportedOption {
                option: "syntax",
                value: s.to_string(),
            }),
        }
    }
}

/// User hook deciding how many bytes to skip over undecodable data.
///
/// Receives the whole input buffer and the offset of the undecodable byte.
/// Returning `Ok(0)` stops disassembly; an `Err` (or a panic) is caught at
/// the engine boundary and replaced by the architecture's default skip.
pub type SkipCallback = Box<dyn FnMut(&[u8], usize) -> anyhow::Result<usize> + Send>;

/// Skip-data configuration: treat undecodable bytes as opaque data records.
#[derive(Default)]
pub struct SkipData {
    pub(crate) mnemonic: Option<String>,
    pub(crate) callback: Option<SkipCallback>,
}

impl SkipData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mnemonic given to data records (the engine default is `.byte`).
    pub fn mnemonic(mut self, mnemonic: impl Into<String>) -> Self {
        self.mnemonic = Some(mnemonic.into());
        self
    }

    pub fn callback<F>(mut self, callback: F) -> Self
    where
        F: FnMut(&[u8], usize) -> anyhow::Result<usize> + Send + 'static,
    {
        self.callback = Some(Box::new(callback));
        self
    }

    pub fn has_callback(&self) -> bool {
        self.callback.is_some()
    }
}

impl fmt::Debug for SkipData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SkipData")
            .field("mnemonic", &self.mnemonic)
            .field("callback", &self.callback.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("arm", Mode::ARM)]
    #[case("thumb+mclass", Mode::THUMB | Mode::MCLASS)]
    #[case("CS_MODE_32+CS_MODE_BIG_ENDIAN", Mode::MODE_32 | Mode::BIG_ENDIAN)]
    #[case("CS_MODE_MIPS64 | CS_MODE_LITTLE_ENDIAN", Mode::MIPS64)]
    #[case("mode_64", Mode::MODE_64)]
    #[case("0x10", Mode::THUMB)]
    #[case("8", Mode::MODE_64)]
    fn test_mode_parses(#[case] input: &str, #[case] expected: Mode) {
        assert_eq!(input.parse::<Mode>().unwrap(), expected);
    }

    #[rstest]
    #[case("thumb+")]
    #[case("hexagon")]
    #[case("0xzz")]
    fn test_mode_rejects(#[case] input: &str) {
        let err = input.parse::<Mode>().unwrap_err();
        assert!(matches!(err, Error::UnsupportedOption { option: "mode", .. }));
    }

    #[test]
    fn test_mode_aliases_share_bits() {
        assert_eq!(Mode::THUMB, Mode::MICRO);
        assert_eq!(Mode::MIPS32, Mode::MODE_32);
        assert!((Mode::THUMB | Mode::V8).contains(Mode::THUMB));
        assert!(!Mode::ARM.contains(Mode::THUMB));
        assert_eq!(Mode::BIG_ENDIAN.to_string(), "0x80000000");
    }

    #[rstest]
    #[case("intel", Syntax::Intel)]
    #[case("ATT", Syntax::Att)]
    #[case("no_regname", Syntax::NoRegisterNames)]
    #[case("no-register-names", Syntax::NoRegisterNames)]
    #[case("masm", Syntax::Masm)]
    fn test_syntax_parses(#[case] input: &str, #[case] expected: Syntax) {
        assert_eq!(input.parse::<Syntax>().unwrap(), expected);
    }

    #[test]
    fn test_syntax_rejects_unknown_locally() {
        let err = "motorola".parse::<Syntax>().unwrap_err();
        assert!(matches!(
            err,
            Error::UnsupportedOption { option: "syntax", ref value } if value == "motorola"
        ));
    }

    #[test]
    fn test_skipdata_builder() {
        let skip = SkipData::new().mnemonic("db").callback(|_, _| Ok(2));
        assert_eq!(skip.mnemonic.as_deref(), Some("db"));
        assert!(skip.has_callback());
        assert!(!SkipData::new().has_callback());
    }
}
