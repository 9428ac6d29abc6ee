//! Register name tables for every supported architecture.
//!
//! Generated from the engine's register enumeration (capstone 5.0 ABI).
//! Each table lists canonical names first, in id order, followed by the
//! aliases that share an id with a canonical register. `INVALID` is id 0
//! and the enumeration terminator is not part of the table.

#![no_std]

/// One `(name, id)` pair of a register table.
pub type RegEntry = (&'static str, u16);

/// Register id one past the highest ARM register.
pub const ARM_REG_ENDING: u16 = 111;

/// ARM registers, canonical names first, then aliases.
pub const ARM_REGS: &[RegEntry] = &[
    ("INVALID", 0),
    ("APSR", 1),
    ("APSR_NZCV", 2),
    ("CPSR", 3),
    ("FPEXC", 4),
    ("FPINST", 5),
    ("FPSCR", 6),
    ("FPSCR_NZCV", 7),
    ("FPSID", 8),
    ("ITSTATE", 9),
    ("LR", 10),
    ("PC", 11),
    ("SP", 12),
    ("SPSR", 13),
    ("D0", 14),
    ("D1", 15),
    ("D2", 16),
    ("D3", 17),
    ("D4", 18),
    ("D5", 19),
    ("D6", 20),
    ("D7", 21),
    ("D8", 22),
    ("D9", 23),
    ("D10", 24),
    ("D11", 25),
    ("D12", 26),
    ("D13", 27),
    ("D14", 28),
    ("D15", 29),
    ("D16", 30),
    ("D17", 31),
    ("D18", 32),
    ("D19", 33),
    ("D20", 34),
    ("D21", 35),
    ("D22", 36),
    ("D23", 37),
    ("D24", 38),
    ("D25", 39),
    ("D26", 40),
    ("D27", 41),
    ("D28", 42),
    ("D29", 43),
    ("D30", 44),
    ("D31", 45),
    ("FPINST2", 46),
    ("MVFR0", 47),
    ("MVFR1", 48),
    ("MVFR2", 49),
    ("Q0", 50),
    ("Q1", 51),
    ("Q2", 52),
    ("Q3", 53),
    ("Q4", 54),
    ("Q5", 55),
    ("Q6", 56),
    ("Q7", 57),
    ("Q8", 58),
    ("Q9", 59),
    ("Q10", 60),
    ("Q11", 61),
    ("Q12", 62),
    ("Q13", 63),
    ("Q14", 64),
    ("Q15", 65),
    ("R0", 66),
    ("R1", 67),
    ("R2", 68),
    ("R3", 69),
    ("R4", 70),
    ("R5", 71),
    ("R6", 72),
    ("R7", 73),
    ("R8", 74),
    ("R9", 75),
    ("R10", 76),
    ("R11", 77),
    ("R12", 78),
    ("S0", 79),
    ("S1", 80),
    ("S2", 81),
    ("S3", 82),
    ("S4", 83),
    ("S5", 84),
    ("S6", 85),
    ("S7", 86),
    ("S8", 87),
    ("S9", 88),
    ("S10", 89),
    ("S11", 90),
    ("S12", 91),
    ("S13", 92),
    ("S14", 93),
    ("S15", 94),
    ("S16", 95),
    ("S17", 96),
    ("S18", 97),
    ("S19", 98),
    ("S20", 99),
    ("S21", 100),
    ("S22", 101),
    ("S23", 102),
    ("S24", 103),
    ("S25", 104),
    ("S26", 105),
    ("S27", 106),
    ("S28", 107),
    ("S29", 108),
    ("S30", 109),
    ("S31", 110),
    // aliases
    ("R13", 12),
    ("R14", 10),
    ("R15", 11),
    ("SB", 75),
    ("SL", 76),
    ("FP", 77),
    ("IP", 78),
];

/// Number of canonical (non-alias) entries at the front of [`ARM_REGS`].
pub const ARM_CANONICAL: usize = 111;

/// Register id one past the highest ARM64 register.
pub const ARM64_REG_ENDING: u16 = 309;

/// ARM64 registers, canonical names first, then aliases.
pub const ARM64_REGS: &[RegEntry] = &[
    ("INVALID", 0),
    ("FFR", 1),
    ("FP", 2),
    ("LR", 3),
    ("NZCV", 4),
    ("SP", 5),
    ("WSP", 6),
    ("WZR", 7),
    ("XZR", 8),
    ("B0", 9),
    ("B1", 10),
    ("B2", 11),
    ("B3", 12),
    ("B4", 13),
    ("B5", 14),
    ("B6", 15),
    ("B7", 16),
    ("B8", 17),
    ("B9", 18),
    ("B10", 19),
    ("B11", 20),
    ("B12", 21),
    ("B13", 22),
    ("B14", 23),
    ("B15", 24),
    ("B16", 25),
    ("B17", 26),
    ("B18", 27),
    ("B19", 28),
    ("B20", 29),
    ("B21", 30),
    ("B22", 31),
    ("B23", 32),
    ("B24", 33),
    ("B25", 34),
    ("B26", 35),
    ("B27", 36),
    ("B28", 37),
    ("B29", 38),
    ("B30", 39),
    ("B31", 40),
    ("D0", 41),
    ("D1", 42),
    ("D2", 43),
    ("D3", 44),
    ("D4", 45),
    ("D5", 46),
    ("D6", 47),
    ("D7", 48),
    ("D8", 49),
    ("D9", 50),
    ("D10", 51),
    ("D11", 52),
    ("D12", 53),
    ("D13", 54),
    ("D14", 55),
    ("D15", 56),
    ("D16", 57),
    ("D17", 58),
    ("D18", 59),
    ("D19", 60),
    ("D20", 61),
    ("D21", 62),
    ("D22", 63),
    ("D23", 64),
    ("D24", 65),
    ("D25", 66),
    ("D26", 67),
    ("D27", 68),
    ("D28", 69),
    ("D29", 70),
    ("D30", 71),
    ("D31", 72),
    ("H0", 73),
    ("H1", 74),
    ("H2", 75),
    ("H3", 76),
    ("H4", 77),
    ("H5", 78),
    ("H6", 79),
    ("H7", 80),
    ("H8", 81),
    ("H9", 82),
    ("H10", 83),
    ("H11", 84),
    ("H12", 85),
    ("H13", 86),
    ("H14", 87),
    ("H15", 88),
    ("H16", 89),
    ("H17", 90),
    ("H18", 91),
    ("H19", 92),
    ("H20", 93),
    ("H21", 94),
    ("H22", 95),
    ("H23", 96),
    ("H24", 97),
    ("H25", 98),
    ("H26", 99),
    ("H27", 100),
    ("H28", 101),
    ("H29", 102),
    ("H30", 103),
    ("H31", 104),
    ("P0", 105),
    ("P1", 106),
    ("P2", 107),
    ("P3", 108),
    ("P4", 109),
    ("P5", 110),
    ("P6", 111),
    ("P7", 112),
    ("P8", 113),
    ("P9", 114),
    ("P10", 115),
    ("P11", 116),
    ("P12", 117),
    ("P13", 118),
    ("P14", 119),
    ("P15", 120),
    ("Q0", 121),
    ("Q1", 122),
    ("Q2", 123),
    ("Q3", 124),
    ("Q4", 125),
    ("Q5", 126),
    ("Q6", 127),
    ("Q7", 128),
    ("Q8", 129),
    ("Q9", 130),
    ("Q10", 131),
    ("Q11", 132),
    ("Q12", 133),
    ("Q13", 134),
    ("Q14", 135),
    ("Q15", 136),
    ("Q16", 137),
    ("Q17", 138),
    ("Q18", 139),
    ("Q19", 140),
    ("Q20", 141),
    ("Q21", 142),
    ("Q22", 143),
    ("Q23", 144),
    ("Q24", 145),
    ("Q25", 146),
    ("Q26", 147),
    ("Q27", 148),
    ("Q28", 149),
    ("Q29", 150),
    ("Q30", 151),
    ("Q31", 152),
    ("S0", 153),
    ("S1", 154),
    ("S2", 155),
    ("S3", 156),
    ("S4", 157),
    ("S5", 158),
    ("S6", 159),
    ("S7", 160),
    ("S8", 161),
    ("S9", 162),
    ("S10", 163),
    ("S11", 164),
    ("S12", 165),
    ("S13", 166),
    ("S14", 167),
    ("S15", 168),
    ("S16", 169),
    ("S17", 170),
    ("S18", 171),
    ("S19", 172),
    ("S20", 173),
    ("S21", 174),
    ("S22", 175),
    ("S23", 176),
    ("S24", 177),
    ("S25", 178),
    ("S26", 179),
    ("S27", 180),
    ("S28", 181),
    ("S29", 182),
    ("S30", 183),
    ("S31", 184),
    ("W0", 185),
    ("W1", 186),
    ("W2", 187),
    ("W3", 188),
    ("W4", 189),
    ("W5", 190),
    ("W6", 191),
    ("W7", 192),
    ("W8", 193),
    ("W9", 194),
    ("W10", 195),
    ("W11", 196),
    ("W12", 197),
    ("W13", 198),
    ("W14", 199),
    ("W15", 200),
    ("W16", 201),
    ("W17", 202),
    ("W18", 203),
    ("W19", 204),
    ("W20", 205),
    ("W21", 206),
    ("W22", 207),
    ("W23", 208),
    ("W24", 209),
    ("W25", 210),
    ("W26", 211),
    ("W27", 212),
    ("W28", 213),
    ("W29", 214),
    ("W30", 215),
    ("X0", 216),
    ("X1", 217),
    ("X2", 218),
    ("X3", 219),
    ("X4", 220),
    ("X5", 221),
    ("X6", 222),
    ("X7", 223),
    ("X8", 224),
    ("X9", 225),
    ("X10", 226),
    ("X11", 227),
    ("X12", 228),
    ("X13", 229),
    ("X14", 230),
    ("X15", 231),
    ("X16", 232),
    ("X17", 233),
    ("X18", 234),
    ("X19", 235),
    ("X20", 236),
    ("X21", 237),
    ("X22", 238),
    ("X23", 239),
    ("X24", 240),
    ("X25", 241),
    ("X26", 242),
    ("X27", 243),
    ("X28", 244),
    ("Z0", 245),
    ("Z1", 246),
    ("Z2", 247),
    ("Z3", 248),
    ("Z4", 249),
    ("Z5", 250),
    ("Z6", 251),
    ("Z7", 252),
    ("Z8", 253),
    ("Z9", 254),
    ("Z10", 255),
    ("Z11", 256),
    ("Z12", 257),
    ("Z13", 258),
    ("Z14", 259),
    ("Z15", 260),
    ("Z16", 261),
    ("Z17", 262),
    ("Z18", 263),
    ("Z19", 264),
    ("Z20", 265),
    ("Z21", 266),
    ("Z22", 267),
    ("Z23", 268),
    ("Z24", 269),
    ("Z25", 270),
    ("Z26", 271),
    ("Z27", 272),
    ("Z28", 273),
    ("Z29", 274),
    ("Z30", 275),
    ("Z31", 276),
    ("V0", 277),
    ("V1", 278),
    ("V2", 279),
    ("V3", 280),
    ("V4", 281),
    ("V5", 282),
    ("V6", 283),
    ("V7", 284),
    ("V8", 285),
    ("V9", 286),
    ("V10", 287),
    ("V11", 288),
    ("V12", 289),
    ("V13", 290),
    ("V14", 291),
    ("V15", 292),
    ("V16", 293),
    ("V17", 294),
    ("V18", 295),
    ("V19", 296),
    ("V20", 297),
    ("V21", 298),
    ("V22", 299),
    ("V23", 300),
    ("V24", 301),
    ("V25", 302),
    ("V26", 303),
    ("V27", 304),
    ("V28", 305),
    ("V29", 306),
    ("V30", 307),
    ("V31", 308),
    // aliases
    ("IP0", 232),
    ("IP1", 233),
    ("X29", 2),
    ("X30", 3),
];

/// Number of canonical (non-alias) entries at the front of [`ARM64_REGS`].
pub const ARM64_CANONICAL: usize = 309;

/// Register id one past the highest MIPS register.
pub const MIPS_REG_ENDING: u16 = 137;

/// MIPS registers, canonical names first, then aliases.
pub const MIPS_REGS: &[RegEntry] = &[
    ("INVALID", 0),
    ("PC", 1),
    ("0", 2),
    ("1", 3),
    ("2", 4),
    ("3", 5),
    ("4", 6),
    ("5", 7),
    ("6", 8),
    ("7", 9),
    ("8", 10),
    ("9", 11),
    ("10", 12),
    ("11", 13),
    ("12", 14),
    ("13", 15),
    ("14", 16),
    ("15", 17),
    ("16", 18),
    ("17", 19),
    ("18", 20),
    ("19", 21),
    ("20", 22),
    ("21", 23),
    ("22", 24),
    ("23", 25),
    ("24", 26),
    ("25", 27),
    ("26", 28),
    ("27", 29),
    ("28", 30),
    ("29", 31),
    ("30", 32),
    ("31", 33),
    ("DSPCCOND", 34),
    ("DSPCARRY", 35),
    ("DSPEFI", 36),
    ("DSPOUTFLAG", 37),
    ("DSPOUTFLAG16_19", 38),
    ("DSPOUTFLAG20", 39),
    ("DSPOUTFLAG21", 40),
    ("DSPOUTFLAG22", 41),
    ("DSPOUTFLAG23", 42),
    ("DSPPOS", 43),
    ("DSPSCOUNT", 44),
    ("AC0", 45),
    ("AC1", 46),
    ("AC2", 47),
    ("AC3", 48),
    ("CC0", 49),
    ("CC1", 50),
    ("CC2", 51),
    ("CC3", 52),
    ("CC4", 53),
    ("CC5", 54),
    ("CC6", 55),
    ("CC7", 56),
    ("F0", 57),
    ("F1", 58),
    ("F2", 59),
    ("F3", 60),
    ("F4", 61),
    ("F5", 62),
    ("F6", 63),
    ("F7", 64),
    ("F8", 65),
    ("F9", 66),
    ("F10", 67),
    ("F11", 68),
    ("F12", 69),
    ("F13", 70),
    ("F14", 71),
    ("F15", 72),
    ("F16", 73),
    ("F17", 74),
    ("F18", 75),
    ("F19", 76),
    ("F20", 77),
    ("F21", 78),
    ("F22", 79),
    ("F23", 80),
    ("F24", 81),
    ("F25", 82),
    ("F26", 83),
    ("F27", 84),
    ("F28", 85),
    ("F29", 86),
    ("F30", 87),
    ("F31", 88),
    ("FCC0", 89),
    ("FCC1", 90),
    ("FCC2", 91),
    ("FCC3", 92),
    ("FCC4", 93),
    ("FCC5", 94),
    ("FCC6", 95),
    ("FCC7", 96),
    ("W0", 97),
    ("W1", 98),
    ("W2", 99),
    ("W3", 100),
    ("W4", 101),
    ("W5", 102),
    ("W6", 103),
    ("W7", 104),
    ("W8", 105),
    ("W9", 106),
    ("W10", 107),
    ("W11", 108),
    ("W12", 109),
    ("W13", 110),
    ("W14", 111),
    ("W15", 112),
    ("W16", 113),
    ("W17", 114),
    ("W18", 115),
    ("W19", 116),
    ("W20", 117),
    ("W21", 118),
    ("W22", 119),
    ("W23", 120),
    ("W24", 121),
    ("W25", 122),
    ("W26", 123),
    ("W27", 124),
    ("W28", 125),
    ("W29", 126),
    ("W30", 127),
    ("W31", 128),
    ("HI", 129),
    ("LO", 130),
    ("P0", 131),
    ("P1", 132),
    ("P2", 133),
    ("MPL0", 134),
    ("MPL1", 135),
    ("MPL2", 136),
    // aliases
    ("ZERO", 2),
    ("AT", 3),
    ("V0", 4),
    ("V1", 5),
    ("A0", 6),
    ("A1", 7),
    ("A2", 8),
    ("A3", 9),
    ("T0", 10),
    ("T1", 11),
    ("T2", 12),
    ("T3", 13),
    ("T4", 14),
    ("T5", 15),
    ("T6", 16),
    ("T7", 17),
    ("S0", 18),
    ("S1", 19),
    ("S2", 20),
    ("S3", 21),
    ("S4", 22),
    ("S5", 23),
    ("S6", 24),
    ("S7", 25),
    ("T8", 26),
    ("T9", 27),
    ("K0", 28),
    ("K1", 29),
    ("GP", 30),
    ("SP", 31),
    ("FP", 32),
    ("S8", 32),
    ("RA", 33),
    ("HI0", 45),
    ("HI1", 46),
    ("HI2", 47),
    ("HI3", 48),
    ("LO0", 45),
    ("LO1", 46),
    ("LO2", 47),
    ("LO3", 48),
];

/// Number of canonical (non-alias) entries at the front of [`MIPS_REGS`].
pub const MIPS_CANONICAL: usize = 137;

/// Register id one past the highest PPC register.
pub const PPC_REG_ENDING: u16 = 344;

/// PPC registers, canonical names first, then aliases.
pub const PPC_REGS: &[RegEntry] = &[
    ("INVALID", 0),
    ("CARRY", 2),
    ("CTR", 3),
    ("LR", 5),
    ("RM", 6),
    ("VRSAVE", 8),
    ("XER", 9),
    ("ZERO", 10),
    ("CR0", 12),
    ("CR1", 13),
    ("CR2", 14),
    ("CR3", 15),
    ("CR4", 16),
    ("CR5", 17),
    ("CR6", 18),
    ("CR7", 19),
    ("CTR8", 20),
    ("F0", 21),
    ("F1", 22),
    ("F2", 23),
    ("F3", 24),
    ("F4", 25),
    ("F5", 26),
    ("F6", 27),
    ("F7", 28),
    ("F8", 29),
    ("F9", 30),
    ("F10", 31),
    ("F11", 32),
    ("F12", 33),
    ("F13", 34),
    ("F14", 35),
    ("F15", 36),
    ("F16", 37),
    ("F17", 38),
    ("F18", 39),
    ("F19", 40),
    ("F20", 41),
    ("F21", 42),
    ("F22", 43),
    ("F23", 44),
    ("F24", 45),
    ("F25", 46),
    ("F26", 47),
    ("F27", 48),
    ("F28", 49),
    ("F29", 50),
    ("F30", 51),
    ("F31", 52),
    ("LR8", 54),
    ("Q0", 55),
    ("Q1", 56),
    ("Q2", 57),
    ("Q3", 58),
    ("Q4", 59),
    ("Q5", 60),
    ("Q6", 61),
    ("Q7", 62),
    ("Q8", 63),
    ("Q9", 64),
    ("Q10", 65),
    ("Q11", 66),
    ("Q12", 67),
    ("Q13", 68),
    ("Q14", 69),
    ("Q15", 70),
    ("Q16", 71),
    ("Q17", 72),
    ("Q18", 73),
    ("Q19", 74),
    ("Q20", 75),
    ("Q21", 76),
    ("Q22", 77),
    ("Q23", 78),
    ("Q24", 79),
    ("Q25", 80),
    ("Q26", 81),
    ("Q27", 82),
    ("Q28", 83),
    ("Q29", 84),
    ("Q30", 85),
    ("Q31", 86),
    ("R0", 87),
    ("R1", 88),
    ("R2", 89),
    ("R3", 90),
    ("R4", 91),
    ("R5", 92),
    ("R6", 93),
    ("R7", 94),
    ("R8", 95),
    ("R9", 96),
    ("R10", 97),
    ("R11", 98),
    ("R12", 99),
    ("R13", 100),
    ("R14", 101),
    ("R15", 102),
    ("R16", 103),
    ("R17", 104),
    ("R18", 105),
    ("R19", 106),
    ("R20", 107),
    ("R21", 108),
    ("R22", 109),
    ("R23", 110),
    ("R24", 111),
    ("R25", 112),
    ("R26", 113),
    ("R27", 114),
    ("R28", 115),
    ("R29", 116),
    ("R30", 117),
    ("R31", 118),
    ("V0", 151),
    ("V1", 152),
    ("V2", 153),
    ("V3", 154),
    ("V4", 155),
    ("V5", 156),
    ("V6", 157),
    ("V7", 158),
    ("V8", 159),
    ("V9", 160),
    ("V10", 161),
    ("V11", 162),
    ("V12", 163),
    ("V13", 164),
    ("V14", 165),
    ("V15", 166),
    ("V16", 167),
    ("V17", 168),
    ("V18", 169),
    ("V19", 170),
    ("V20", 171),
    ("V21", 172),
    ("V22", 173),
    ("V23", 174),
    ("V24", 175),
    ("V25", 176),
    ("V26", 177),
    ("V27", 178),
    ("V28", 179),
    ("V29", 180),
    ("V30", 181),
    ("V31", 182),
    ("VS0", 215),
    ("VS1", 216),
    ("VS2", 217),
    ("VS3", 218),
    ("VS4", 219),
    ("VS5", 220),
    ("VS6", 221),
    ("VS7", 222),
    ("VS8", 223),
    ("VS9", 224),
    ("VS10", 225),
    ("VS11", 226),
    ("VS12", 227),
    ("VS13", 228),
    ("VS14", 229),
    ("VS15", 230),
    ("VS16", 231),
    ("VS17", 232),
    ("VS18", 233),
    ("VS19", 234),
    ("VS20", 235),
    ("VS21", 236),
    ("VS22", 237),
    ("VS23", 238),
    ("VS24", 239),
    ("VS25", 240),
    ("VS26", 241),
    ("VS27", 242),
    ("VS28", 243),
    ("VS29", 244),
    ("VS30", 245),
    ("VS31", 246),
    ("VS32", 247),
    ("VS33", 248),
    ("VS34", 249),
    ("VS35", 250),
    ("VS36", 251),
    ("VS37", 252),
    ("VS38", 253),
    ("VS39", 254),
    ("VS40", 255),
    ("VS41", 256),
    ("VS42", 257),
    ("VS43", 258),
    ("VS44", 259),
    ("VS45", 260),
    ("VS46", 261),
    ("VS47", 262),
    ("VS48", 263),
    ("VS49", 264),
    ("VS50", 265),
    ("VS51", 266),
    ("VS52", 267),
    ("VS53", 268),
    ("VS54", 269),
    ("VS55", 270),
    ("VS56", 271),
    ("VS57", 272),
    ("VS58", 273),
    ("VS59", 274),
    ("VS60", 275),
    ("VS61", 276),
    ("VS62", 277),
    ("VS63", 278),
    ("CR0EQ", 312),
    ("CR1EQ", 313),
    ("CR2EQ", 314),
    ("CR3EQ", 315),
    ("CR4EQ", 316),
    ("CR5EQ", 317),
    ("CR6EQ", 318),
    ("CR7EQ", 319),
    ("CR0GT", 320),
    ("CR1GT", 321),
    ("CR2GT", 322),
    ("CR3GT", 323),
    ("CR4GT", 324),
    ("CR5GT", 325),
    ("CR6GT", 326),
    ("CR7GT", 327),
    ("CR0LT", 328),
    ("CR1LT", 329),
    ("CR2LT", 330),
    ("CR3LT", 331),
    ("CR4LT", 332),
    ("CR5LT", 333),
    ("CR6LT", 334),
    ("CR7LT", 335),
    ("CR0UN", 336),
    ("CR1UN", 337),
    ("CR2UN", 338),
    ("CR3UN", 339),
    ("CR4UN", 340),
    ("CR5UN", 341),
    ("CR6UN", 342),
    ("CR7UN", 343),
];

/// Number of canonical (non-alias) entries at the front of [`PPC_REGS`].
pub const PPC_CANONICAL: usize = 242;

/// Register id one past the highest SPARC register.
pub const SPARC_REG_ENDING: u16 = 88;

/// SPARC registers, canonical names first, then aliases.
pub const SPARC_REGS: &[RegEntry] = &[
    ("INVALID", 0),
    ("F0", 1),
    ("F1", 2),
    ("F2", 3),
    ("F3", 4),
    ("F4", 5),
    ("F5", 6),
    ("F6", 7),
    ("F7", 8),
    ("F8", 9),
    ("F9", 10),
    ("F10", 11),
    ("F11", 12),
    ("F12", 13),
    ("F13", 14),
    ("F14", 15),
    ("F15", 16),
    ("F16", 17),
    ("F17", 18),
    ("F18", 19),
    ("F19", 20),
    ("F20", 21),
    ("F21", 22),
    ("F22", 23),
    ("F23", 24),
    ("F24", 25),
    ("F25", 26),
    ("F26", 27),
    ("F27", 28),
    ("F28", 29),
    ("F29", 30),
    ("F30", 31),
    ("F31", 32),
    ("F32", 33),
    ("F34", 34),
    ("F36", 35),
    ("F38", 36),
    ("F40", 37),
    ("F42", 38),
    ("F44", 39),
    ("F46", 40),
    ("F48", 41),
    ("F50", 42),
    ("F52", 43),
    ("F54", 44),
    ("F56", 45),
    ("F58", 46),
    ("F60", 47),
    ("F62", 48),
    ("FCC0", 49),
    ("FCC1", 50),
    ("FCC2", 51),
    ("FCC3", 52),
    ("FP", 53),
    ("G0", 54),
    ("G1", 55),
    ("G2", 56),
    ("G3", 57),
    ("G4", 58),
    ("G5", 59),
    ("G6", 60),
    ("G7", 61),
    ("I0", 62),
    ("I1", 63),
    ("I2", 64),
    ("I3", 65),
    ("I4", 66),
    ("I5", 67),
    ("I7", 68),
    ("ICC", 69),
    ("L0", 70),
    ("L1", 71),
    ("L2", 72),
    ("L3", 73),
    ("L4", 74),
    ("L5", 75),
    ("L6", 76),
    ("L7", 77),
    ("O0", 78),
    ("O1", 79),
    ("O2", 80),
    ("O3", 81),
    ("O4", 82),
    ("O5", 83),
    ("O7", 84),
    ("SP", 85),
    ("Y", 86),
    ("XCC", 87),
    // aliases
    ("O6", 85),
    ("I6", 53),
];

/// Number of canonical (non-alias) entries at the front of [`SPARC_REGS`].
pub const SPARC_CANONICAL: usize = 88;

/// Register id one past the highest SYSZ register.
pub const SYSZ_REG_ENDING: u16 = 117;

/// SYSZ registers, canonical names first, then aliases.
pub const SYSZ_REGS: &[RegEntry] = &[
    ("INVALID", 0),
    ("0", 1),
    ("1", 2),
    ("2", 3),
    ("3", 4),
    ("4", 5),
    ("5", 6),
    ("6", 7),
    ("7", 8),
    ("8", 9),
    ("9", 10),
    ("10", 11),
    ("11", 12),
    ("12", 13),
    ("13", 14),
    ("14", 15),
    ("15", 16),
    ("CC", 17),
    ("F0", 18),
    ("F1", 19),
    ("F2", 20),
    ("F3", 21),
    ("F4", 22),
    ("F5", 23),
    ("F6", 24),
    ("F7", 25),
    ("F8", 26),
    ("F9", 27),
    ("F10", 28),
    ("F11", 29),
    ("F12", 30),
    ("F13", 31),
    ("F14", 32),
    ("F15", 33),
    ("R0L", 34),
    ("A0", 35),
    ("A1", 36),
    ("A2", 37),
    ("A3", 38),
    ("A4", 39),
    ("A5", 40),
    ("A6", 41),
    ("A7", 42),
    ("A8", 43),
    ("A9", 44),
    ("A10", 45),
    ("A11", 46),
    ("A12", 47),
    ("A13", 48),
    ("A14", 49),
    ("A15", 50),
    ("C0", 51),
    ("C1", 52),
    ("C2", 53),
    ("C3", 54),
    ("C4", 55),
    ("C5", 56),
    ("C6", 57),
    ("C7", 58),
    ("C8", 59),
    ("C9", 60),
    ("C10", 61),
    ("C11", 62),
    ("C12", 63),
    ("C13", 64),
    ("C14", 65),
    ("C15", 66),
    ("V0", 67),
    ("V1", 68),
    ("V2", 69),
    ("V3", 70),
    ("V4", 71),
    ("V5", 72),
    ("V6", 73),
    ("V7", 74),
    ("V8", 75),
    ("V9", 76),
    ("V10", 77),
    ("V11", 78),
    ("V12", 79),
    ("V13", 80),
    ("V14", 81),
    ("V15", 82),
    ("V16", 83),
    ("V17", 84),
    ("V18", 85),
    ("V19", 86),
    ("V20", 87),
    ("V21", 88),
    ("V22", 89),
    ("V23", 90),
    ("V24", 91),
    ("V25", 92),
    ("V26", 93),
    ("V27", 94),
    ("V28", 95),
    ("V29", 96),
    ("V30", 97),
    ("V31", 98),
    ("F16", 99),
    ("F17", 100),
    ("F18", 101),
    ("F19", 102),
    ("F20", 103),
    ("F21", 104),
    ("F22", 105),
    ("F23", 106),
    ("F24", 107),
    ("F25", 108),
    ("F26", 109),
    ("F27", 110),
    ("F28", 111),
    ("F29", 112),
    ("F30", 113),
    ("F31", 114),
    ("F0Q", 115),
    ("F4Q", 116),
];

/// Number of canonical (non-alias) entries at the front of [`SYSZ_REGS`].
pub const SYSZ_CANONICAL: usize = 117;

/// Register id one past the highest X86 register.
pub const X86_REG_ENDING: u16 = 246;

/// X86 registers, canonical names first, then aliases.
pub const X86_REGS: &[RegEntry] = &[
    ("INVALID", 0),
    ("AH", 1),
    ("AL", 2),
    ("AX", 3),
    ("BH", 4),
    ("BL", 5),
    ("BP", 6),
    ("BPL", 7),
    ("BX", 8),
    ("CH", 9),
    ("CL", 10),
    ("CS", 11),
    ("CX", 12),
    ("DH", 13),
    ("DI", 14),
    ("DIL", 15),
    ("DL", 16),
    ("DS", 17),
    ("DX", 18),
    ("EAX", 19),
    ("EBP", 20),
    ("EBX", 21),
    ("ECX", 22),
    ("EDI", 23),
    ("EDX", 24),
    ("EFLAGS", 25),
    ("EIP", 26),
    ("EIZ", 27),
    ("ES", 28),
    ("ESI", 29),
    ("ESP", 30),
    ("FPSW", 31),
    ("FS", 32),
    ("GS", 33),
    ("IP", 34),
    ("RAX", 35),
    ("RBP", 36),
    ("RBX", 37),
    ("RCX", 38),
    ("RDI", 39),
    ("RDX", 40),
    ("RIP", 41),
    ("RIZ", 42),
    ("RSI", 43),
    ("RSP", 44),
    ("SI", 45),
    ("SIL", 46),
    ("SP", 47),
    ("SPL", 48),
    ("SS", 49),
    ("CR0", 50),
    ("CR1", 51),
    ("CR2", 52),
    ("CR3", 53),
    ("CR4", 54),
    ("CR5", 55),
    ("CR6", 56),
    ("CR7", 57),
    ("CR8", 58),
    ("CR9", 59),
    ("CR10", 60),
    ("CR11", 61),
    ("CR12", 62),
    ("CR13", 63),
    ("CR14", 64),
    ("CR15", 65),
    ("DR0", 66),
    ("DR1", 67),
    ("DR2", 68),
    ("DR3", 69),
    ("DR4", 70),
    ("DR5", 71),
    ("DR6", 72),
    ("DR7", 73),
    ("DR8", 74),
    ("DR9", 75),
    ("DR10", 76),
    ("DR11", 77),
    ("DR12", 78),
    ("DR13", 79),
    ("DR14", 80),
    ("DR15", 81),
    ("FP0", 82),
    ("FP1", 83),
    ("FP2", 84),
    ("FP3", 85),
    ("FP4", 86),
    ("FP5", 87),
    ("FP6", 88),
    ("FP7", 89),
    ("K0", 90),
    ("K1", 91),
    ("K2", 92),
    ("K3", 93),
    ("K4", 94),
    ("K5", 95),
    ("K6", 96),
    ("K7", 97),
    ("MM0", 98),
    ("MM1", 99),
    ("MM2", 100),
    ("MM3", 101),
    ("MM4", 102),
    ("MM5", 103),
    ("MM6", 104),
    ("MM7", 105),
    ("R8", 106),
    ("R9", 107),
    ("R10", 108),
    ("R11", 109),
    ("R12", 110),
    ("R13", 111),
    ("R14", 112),
    ("R15", 113),
    ("ST0", 114),
    ("ST1", 115),
    ("ST2", 116),
    ("ST3", 117),
    ("ST4", 118),
    ("ST5", 119),
    ("ST6", 120),
    ("ST7", 121),
    ("XMM0", 122),
    ("XMM1", 123),
    ("XMM2", 124),
    ("XMM3", 125),
    ("XMM4", 126),
    ("XMM5", 127),
    ("XMM6", 128),
    ("XMM7", 129),
    ("XMM8", 130),
    ("XMM9", 131),
    ("XMM10", 132),
    ("XMM11", 133),
    ("XMM12", 134),
    ("XMM13", 135),
    ("XMM14", 136),
    ("XMM15", 137),
    ("XMM16", 138),
    ("XMM17", 139),
    ("XMM18", 140),
    ("XMM19", 141),
    ("XMM20", 142),
    ("XMM21", 143),
    ("XMM22", 144),
    ("XMM23", 145),
    ("XMM24", 146),
    ("XMM25", 147),
    ("XMM26", 148),
    ("XMM27", 149),
    ("XMM28", 150),
    ("XMM29", 151),
    ("XMM30", 152),
    ("XMM31", 153),
    ("YMM0", 154),
    ("YMM1", 155),
    ("YMM2", 156),
    ("YMM3", 157),
    ("YMM4", 158),
    ("YMM5", 159),
    ("YMM6", 160),
    ("YMM7", 161),
    ("YMM8", 162),
    ("YMM9", 163),
    ("YMM10", 164),
    ("YMM11", 165),
    ("YMM12", 166),
    ("YMM13", 167),
    ("YMM14", 168),
    ("YMM15", 169),
    ("YMM16", 170),
    ("YMM17", 171),
    ("YMM18", 172),
    ("YMM19", 173),
    ("YMM20", 174),
    ("YMM21", 175),
    ("YMM22", 176),
    ("YMM23", 177),
    ("YMM24", 178),
    ("YMM25", 179),
    ("YMM26", 180),
    ("YMM27", 181),
    ("YMM28", 182),
    ("YMM29", 183),
    ("YMM30", 184),
    ("YMM31", 185),
    ("ZMM0", 186),
    ("ZMM1", 187),
    ("ZMM2", 188),
    ("ZMM3", 189),
    ("ZMM4", 190),
    ("ZMM5", 191),
    ("ZMM6", 192),
    ("ZMM7", 193),
    ("ZMM8", 194),
    ("ZMM9", 195),
    ("ZMM10", 196),
    ("ZMM11", 197),
    ("ZMM12", 198),
    ("ZMM13", 199),
    ("ZMM14", 200),
    ("ZMM15", 201),
    ("ZMM16", 202),
    ("ZMM17", 203),
    ("ZMM18", 204),
    ("ZMM19", 205),
    ("ZMM20", 206),
    ("ZMM21", 207),
    ("ZMM22", 208),
    ("ZMM23", 209),
    ("ZMM24", 210),
    ("ZMM25", 211),
    ("ZMM26", 212),
    ("ZMM27", 213),
    ("ZMM28", 214),
    ("ZMM29", 215),
    ("ZMM30", 216),
    ("ZMM31", 217),
    ("R8B", 218),
    ("R9B", 219),
    ("R10B", 220),
    ("R11B", 221),
    ("R12B", 222),
    ("R13B", 223),
    ("R14B", 224),
    ("R15B", 225),
    ("R8D", 226),
    ("R9D", 227),
    ("R10D", 228),
    ("R11D", 229),
    ("R12D", 230),
    ("R13D", 231),
    ("R14D", 232),
    ("R15D", 233),
    ("R8W", 234),
    ("R9W", 235),
    ("R10W", 236),
    ("R11W", 237),
    ("R12W", 238),
    ("R13W", 239),
    ("R14W", 240),
    ("R15W", 241),
    ("BND0", 242),
    ("BND1", 243),
    ("BND2", 244),
    ("BND3", 245),
    ("FLAGS", 25),
    ("RFLAGS", 25),
    ("ST(0)", 114),
    ("ST(1)", 115),
    ("ST(2)", 116),
    ("ST(3)", 117),
    ("ST(4)", 118),
    ("ST(5)", 119),
    ("ST(6)", 120),
    ("ST(7)", 121),
];

/// Number of canonical (non-alias) entries at the front of [`X86_REGS`].
pub const X86_CANONICAL: usize = 246;

/// Register id one past the highest XCORE register.
pub const XCORE_REG_ENDING: u16 = 26;

/// XCORE registers, canonical names first, then aliases.
pub const XCORE_REGS: &[RegEntry] = &[
    ("INVALID", 0),
    ("CP", 1),
    ("DP", 2),
    ("LR", 3),
    ("SP", 4),
    ("R0", 5),
    ("R1", 6),
    ("R2", 7),
    ("R3", 8),
    ("R4", 9),
    ("R5", 10),
    ("R6", 11),
    ("R7", 12),
    ("R8", 13),
    ("R9", 14),
    ("R10", 15),
    ("R11", 16),
    ("PC", 17),
    ("SCP", 18),
    ("SSR", 19),
    ("ET", 20),
    ("ED", 21),
    ("SED", 22),
    ("KEP", 23),
    ("KSP", 24),
    ("ID", 25),
];

/// Number of canonical (non-alias) entries at the front of [`XCORE_REGS`].
pub const XCORE_CANONICAL: usize = 26;
