//! Register name tables: case-insensitive, alias-aware mapping between
//! register names and the engine's numeric register ids.

use std::collections::HashMap;
use std::fmt;
use std::sync::OnceLock;

use reg_tables::RegEntry;

use crate::Architecture;

/// A numeric register id, scoped to one architecture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct RegId(pub u16);

impl RegId {
    /// The reserved id every architecture uses for "no register".
    pub const INVALID: RegId = RegId(0);

    pub fn is_invalid(self) -> bool {
        self == RegId::INVALID
    }
}

impl From<u16> for RegId {
    fn from(id: u16) -> Self {
        RegId(id)
    }
}

impl fmt::Display for RegId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "reg#{}", self.0)
    }
}

/// A register given either by id or by (case-insensitive) name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegisterRef<'a> {
    Id(u32),
    Name(&'a str),
}

impl From<RegId> for RegisterRef<'_> {
    fn from(id: RegId) -> Self {
        RegisterRef::Id(u32::from(id.0))
    }
}

impl From<u16> for RegisterRef<'_> {
    fn from(id: u16) -> Self {
        RegisterRef::Id(u32::from(id))
    }
}

impl From<u32> for RegisterRef<'_> {
    fn from(id: u32) -> Self {
        RegisterRef::Id(id)
    }
}

impl<'a> From<&'a str> for RegisterRef<'a> {
    fn from(name: &'a str) -> Self {
        RegisterRef::Name(name)
    }
}

impl<'a> From<&'a String> for RegisterRef<'a> {
    fn from(name: &'a String) -> Self {
        RegisterRef::Name(name.as_str())
    }
}

/// The register table of one architecture.
///
/// Tables are immutable; the lookup indexes are built on first use.
pub struct RegisterTable {
    arch: Architecture,
    entries: &'static [RegEntry],
    canonical: usize,
    ending: u16,
    by_name: OnceLock<HashMap<&'static str, u16>>,
    by_id: OnceLock<HashMap<u16, &'static str>>,
}

macro_rules! table {
    ($arch:expr, $regs:ident, $canonical:ident, $ending:ident) => {
        RegisterTable {
            arch: $arch,
            entries: reg_tables::$regs,
            canonical: reg_tables::$canonical,
            ending: reg_tables::$ending,
            by_name: OnceLock::new(),
            by_id: OnceLock::new(),
        }
    };
}

static TABLES: [RegisterTable; 8] = [
    table!(Architecture::Arm, ARM_REGS, ARM_CANONICAL, ARM_REG_ENDING),
    table!(Architecture::Arm64, ARM64_REGS, ARM64_CANONICAL, ARM64_REG_ENDING),
    table!(Architecture::Mips, MIPS_REGS, MIPS_CANONICAL, MIPS_REG_ENDING),
    table!(Architecture::X86, X86_REGS, X86_CANONICAL, X86_REG_ENDING),
    table!(Architecture::Ppc, PPC_REGS, PPC_CANONICAL, PPC_REG_ENDING),
    table!(Architecture::Sparc, SPARC_REGS, SPARC_CANONICAL, SPARC_REG_ENDING),
    table!(Architecture::SysZ, SYSZ_REGS, SYSZ_CANONICAL, SYSZ_REG_ENDING),
    table!(Architecture::XCore, XCORE_REGS, XCORE_CANONICAL, XCORE_REG_ENDING),
];

impl RegisterTable {
    /// The table for `arch`.
    pub fn for_arch(arch: Architecture) -> &'static RegisterTable {
        &TABLES[arch.engine_id() as usize]
    }

    pub fn arch(&self) -> Architecture {
        self.arch
    }

    fn names(&self) -> &HashMap<&'static str, u16> {
        self.by_name
            .get_or_init(|| self.entries.iter().map(|&(name, id)| (name, id)).collect())
    }

    fn ids(&self) -> &HashMap<u16, &'static str> {
        // Canonical names come first, so the first name seen for an id wins.
        self.by_id.get_or_init(|| {
            let mut ids = HashMap::with_capacity(self.canonical);
            for &(name, id) in &self.entries[..self.canonical] {
                ids.entry(id).or_insert(name);
            }
            ids
        })
    }

    /// Id for a register name or alias, ignoring case. Unknown names map to
    /// [`RegId::INVALID`] rather than an error.
    pub fn name_to_id(&self, name: &str) -> RegId {
        let upper = name.trim().to_ascii_uppercase();
        self.names()
            .get(upper.as_str())
            .map_or(RegId::INVALID, |&id| RegId(id))
    }

    /// Canonical name for `id`, or `None` if the architecture has no such register.
    pub fn id_to_name(&self, id: RegId) -> Option<&'static str> {
        self.ids().get(&id.0).copied()
    }

    /// True if `id` names a register of this architecture.
    pub fn is_valid_id(&self, id: u32) -> bool {
        u16::try_from(id).is_ok_and(|id| id < self.ending && self.ids().contains_key(&id))
    }

    /// Resolve an id or a name. Valid ids pass through unchanged; anything
    /// unknown resolves to [`RegId::INVALID`].
    pub fn resolve<'a>(&self, reg: impl Into<RegisterRef<'a>>) -> RegId {
        match reg.into() {
            RegisterRef::Id(id) if self.is_valid_id(id) => RegId(id as u16),
            RegisterRef::Id(_) => RegId::INVALID,
            RegisterRef::Name(name) => self.name_to_id(name),
        }
    }

    /// Every `(name, id)` pair, canonical names first, then aliases.
    pub fn entries(&self) -> &'static [RegEntry] {
        self.entries
    }

    /// One past the highest register id.
    pub fn ending(&self) -> u16 {
        self.ending
    }
}

impl fmt::Debug for RegisterTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegisterTable")
            .field("arch", &self.arch)
            .field("entries", &self.entries.len())
            .field("ending", &self.ending)
            .finish()
    }
}
