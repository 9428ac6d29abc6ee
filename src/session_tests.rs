//! Session scenarios against the scripted engine: release discipline,
//! option gating, skip-data callback containment.

use std::sync::{Arc, Mutex};

use rstest::rstest;

use crate::engine::scripted::{counters, Diet, Scripted, Stale, DATA_MARKER, REJECTED_MODE};
use crate::{
    Architecture, Disassembler, EngineErrorCode, Error, FieldValue, Insn, Mode, RegId,
    SessionConfig, SkipData, Syntax,
};

type Session = Disassembler<Scripted>;

const ARM_CODE: [u8; 8] = [0x00, 12, 10, 1, 0x01, 2, 3, 4];

fn arm() -> Session {
    Session::open(Architecture::Arm, Mode::ARM).unwrap()
}

fn arm_detailed() -> Session {
    let mut cs = arm();
    cs.set_detail(true).unwrap();
    cs
}

#[test]
fn test_empty_input_skips_engine() {
    let cs = arm();
    let before = counters();

    assert!(cs.disasm(&[], 0x1000).unwrap().is_empty());
    assert!(cs.disasm_batch(&[], 0x1000, 0).unwrap().is_empty());
    assert!(cs.disasm_shared(&[], 0x1000, 0).unwrap().is_empty());
    let mut visited = 0;
    cs.disasm_each(&[], 0x1000, |_| {
        visited += 1;
        Ok(())
    })
    .unwrap();

    assert_eq!(visited, 0);
    assert_eq!(counters(), before);
}

#[test]
fn test_eager_copies_then_releases() {
    let cs = arm();
    let before = counters();

    let insns = cs.disasm(&ARM_CODE, 0x1000).unwrap();

    let after = counters();
    assert_eq!(after.disasm_calls, before.disasm_calls + 1);
    assert_eq!(after.releases, before.releases + 1);
    assert_eq!(after.live_buffers, before.live_buffers);

    assert_eq!(insns.len(), 2);
    assert!(insns.iter().all(|insn| insn.is_detached()));
    assert_eq!(insns[0].address(), 0x1000);
    assert_eq!(insns[1].address(), 0x1004);
    assert_eq!(insns[1].size(), 4);
    assert_eq!(insns[1].bytes(), &[0x01, 2, 3, 4]);
    assert_eq!(insns[1].mnemonic().unwrap(), "op01");
    assert_eq!(insns[1].op_str().unwrap(), "#2, #3, #4");
    assert_eq!(insns[1].id(), 2);
}

#[test]
fn test_count_limits_decoding() {
    let cs = arm();
    let insns = cs.disasm_count(&ARM_CODE, 0, 1).unwrap();
    assert_eq!(insns.len(), 1);
    assert_eq!(insns[0].address(), 0);
}

#[test]
fn test_each_releases_after_visitor_error() {
    let cs = arm();
    let before = counters();

    let mut seen = Vec::new();
    let err = cs
        .disasm_each(&ARM_CODE, 0x2000, |insn| {
            seen.push(insn.address());
            Err(Error::MalformedText { field: "stop" })
        })
        .unwrap_err();

    assert!(matches!(err, Error::MalformedText { field: "stop" }));
    assert_eq!(seen, vec![0x2000]);
    let after = counters();
    assert_eq!(after.releases, before.releases + 1);
    assert_eq!(after.live_buffers, before.live_buffers);
}

#[test]
fn test_batch_release_is_consuming() {
    let cs = arm();
    let before = counters();

    let batch = cs.disasm_batch(&ARM_CODE, 0, 0).unwrap();
    assert_eq!(batch.len(), 2);
    assert_eq!(batch.iter().len(), 2);
    assert_eq!(counters().live_buffers, before.live_buffers + 1);

    let first = batch.get(0).unwrap();
    assert!(!first.is_detached());
    assert_eq!(first.mnemonic().unwrap(), "op00");
    assert!(batch.get(2).is_none());

    let copies = batch.to_vec();
    batch.release();

    assert_eq!(counters().live_buffers, before.live_buffers);
    assert_eq!(counters().releases, before.releases + 1);
    assert_eq!(copies[1].address(), 4);
}

fn copied<'s>(cs: &'s Session, code: &[u8]) -> Vec<Insn<'s>> {
    cs.disasm_batch(code, 0x100, 0).unwrap().to_vec()
}

#[test]
fn test_batch_copies_outlive_batch() {
    let cs = arm_detailed();
    let before = counters();

    let insns = copied(&cs, &ARM_CODE);
    assert_eq!(counters().live_buffers, before.live_buffers);
    assert_eq!(insns.len(), 2);
    assert!(insns.iter().all(|insn| insn.is_detached() && insn.detailed()));
    assert_eq!(insns[1].address(), 0x104);
    assert_eq!(insns[1].mnemonic().unwrap(), "op01");
}

#[test]
fn test_shared_batch_outlives_holder() {
    let cs = arm();
    let before = counters();

    let batch = cs.disasm_shared(&ARM_CODE, 0x10, 0).unwrap();
    assert_eq!(batch.holders(), 1);
    let second = batch.get(1).unwrap();
    assert_eq!(batch.holders(), 2);
    assert!(batch.get(5).is_none());

    let all = batch.into_vec();
    assert_eq!(all.len(), 2);
    assert_eq!(counters().live_buffers, before.live_buffers + 1);

    drop(all);
    assert_eq!(second.address(), 0x14);
    assert_eq!(counters().releases, before.releases);

    drop(second);
    assert_eq!(counters().releases, before.releases + 1);
    assert_eq!(counters().live_buffers, before.live_buffers);
}

#[test]
fn test_detail_gating() {
    let mut cs = arm();
    {
        let insns = cs.disasm(&ARM_CODE, 0).unwrap();
        let insn = &insns[0];
        assert!(!insn.detailed());
        assert!(matches!(
            insn.regs_read(),
            Err(Error::DetailUnavailable { field: "regs_read" })
        ));
        assert!(matches!(
            insn.field("writeback"),
            Err(Error::DetailUnavailable { field: "writeback" })
        ));
        assert!(matches!(insn.field("bogus"), Err(Error::UnknownField { .. })));
        assert_eq!(insn.field("detailed").unwrap(), FieldValue::from(false));
    }

    cs.set_detail(true).unwrap();
    assert!(cs.detail());
    let insns = cs.disasm(&ARM_CODE, 0).unwrap();
    assert!(insns[0].detailed());
    assert_eq!(insns[0].regs_read().unwrap(), vec![RegId(12)]);
}

#[test]
fn test_detail_toggle_only_affects_later_calls() {
    let mut cs = arm_detailed();
    let detailed = cs.disasm(&ARM_CODE, 0).unwrap().len();
    cs.set_detail(false).unwrap();
    let insns = cs.disasm(&ARM_CODE, 0).unwrap();
    assert_eq!(insns.len(), detailed);
    assert!(insns.iter().all(|insn| !insn.detailed()));
}

#[test]
fn test_implicit_registers_and_groups() {
    let cs = arm_detailed();
    let insns = cs.disasm(&ARM_CODE, 0).unwrap();
    let insn = &insns[0];

    assert_eq!(insn.regs_write().unwrap(), vec![RegId(10)]);
    assert!(insn.reads_register("sp").unwrap());
    assert!(insn.reads_register(RegId(12)).unwrap());
    assert!(insn.writes_register("LR").unwrap());
    assert!(!insn.writes_register("pc").unwrap());
    assert!(!insn.reads_register("nonsense").unwrap());

    assert_eq!(insn.groups().unwrap(), vec![1]);
    assert!(insn.is_in_group(1).unwrap());
    assert_eq!(insn.group_name(1).unwrap(), "jump");
    assert_eq!(insn.reg_name(RegId(12)).unwrap(), "SP");
    assert_eq!(insn.name().unwrap(), "scripted");
}

#[test]
fn test_session_name_lookups() {
    let cs = arm();
    assert_eq!(cs.reg_name(12).unwrap(), "SP");
    assert_eq!(cs.group_name(2).unwrap(), "call");
    assert_eq!(cs.insn_name(7).unwrap(), "scripted");
    assert!(matches!(
        cs.insn_name(0),
        Err(Error::NameUnavailable { id: 0, .. })
    ));
    assert!(matches!(
        cs.group_name(99),
        Err(Error::NameUnavailable { id: 99, .. })
    ));

    assert_eq!(cs.register("sp"), RegId(12));
    assert_eq!(cs.register(12u32), RegId(12));
    assert_eq!(cs.register(9999u32), RegId::INVALID);
    assert_eq!(cs.register("xmm0"), RegId::INVALID);
}

#[test]
fn test_diet_build_hides_text() {
    let mut cs = Disassembler::<Scripted<Diet>>::open(Architecture::Arm, Mode::ARM).unwrap();
    assert!(cs.is_diet());
    cs.set_detail(true).unwrap();

    assert!(matches!(
        cs.reg_name(12),
        Err(Error::DietModeUnavailable { field: "reg_name" })
    ));
    let insns = cs.disasm(&ARM_CODE, 0).unwrap();
    let insn = &insns[0];
    assert!(matches!(
        insn.mnemonic(),
        Err(Error::DietModeUnavailable { field: "mnemonic" })
    ));
    assert!(matches!(insn.group_name(1), Err(Error::DietModeUnavailable { .. })));
    // Numeric detail still works.
    assert_eq!(insn.regs_read().unwrap(), vec![RegId(12)]);
    assert!(insn.reads_register("sp").unwrap());
}

#[test]
fn test_abi_mismatch_is_fatal() {
    let err = Disassembler::<Scripted<Stale>>::open(Architecture::X86, Mode::MODE_32).unwrap_err();
    assert!(err.is_fatal());
    assert!(matches!(
        err,
        Error::AbiMismatch { expected: (5, 0), found: (4, 0) }
    ));
}

#[test]
fn test_rejected_mode() {
    let err = Session::open(Architecture::Mips, REJECTED_MODE).unwrap_err();
    assert!(!err.is_fatal());
    assert!(matches!(
        err,
        Error::UnsupportedMode { arch: Architecture::Mips, .. }
    ));
}

#[test]
fn test_syntax_options() {
    let mut cs = arm();
    assert!(matches!(
        cs.set_syntax(Syntax::Att),
        Err(Error::UnsupportedOption { option: "syntax", .. })
    ));
    assert_eq!(cs.syntax(), None);
    cs.set_syntax(Syntax::NoRegisterNames).unwrap();
    assert_eq!(cs.syntax(), Some(Syntax::NoRegisterNames));

    let mut x86 = Session::open(Architecture::X86, Mode::MODE_64).unwrap();
    let before = counters();
    let err = x86.set_syntax_str("motorola").unwrap_err();
    assert!(matches!(err, Error::UnsupportedOption { option: "syntax", value } if value == "motorola"));
    assert_eq!(counters(), before);
    x86.set_syntax_str("AT&T").unwrap();
    assert_eq!(x86.syntax(), Some(Syntax::Att));
}

#[test]
fn test_nothing_decoded_is_engine_call_error() {
    let cs = arm();
    let before = counters();
    let err = cs.disasm(&[DATA_MARKER, 0, 0, 0], 0).unwrap_err();
    match err {
        Error::EngineCall { call, code, .. } => {
            assert_eq!(call, "cs_disasm");
            assert_eq!(code, EngineErrorCode::Ok);
        }
        other => panic!("unexpected error: {other}"),
    }
    assert_eq!(cs.errno(), EngineErrorCode::Ok);
    assert_eq!(counters().live_buffers, before.live_buffers);
}

#[test]
fn test_skipdata_default_skip() {
    let mut cs = arm();
    cs.set_skipdata(Some(SkipData::new().mnemonic("db"))).unwrap();

    let code = [0x01, 2, 3, 4, DATA_MARKER, 0, 0, 0, 0x02, 5, 6, 7];
    let insns = cs.disasm(&code, 0x100).unwrap();
    assert_eq!(insns.len(), 3);
    assert_eq!(insns[1].address(), 0x104);
    assert_eq!(insns[1].size(), 4);
    assert_eq!(insns[1].mnemonic().unwrap(), "db");
    assert_eq!(insns[1].id(), 0);
    assert_eq!(insns[2].mnemonic().unwrap(), "op02");
    assert_eq!(cs.skipdata_calls(), 0);
    drop(insns);

    cs.set_skipdata(None).unwrap();
    assert!(matches!(
        cs.disasm(&[DATA_MARKER, 0, 0, 0], 0),
        Err(Error::EngineCall { .. })
    ));
}

#[test]
fn test_skipdata_callback_decides() {
    let mut cs = Session::open(Architecture::X86, Mode::MODE_32).unwrap();
    cs.set_skipdata(Some(SkipData::new().callback(|code: &[u8], offset| {
        assert_eq!(code[offset], DATA_MARKER);
        Ok(3)
    })))
    .unwrap();

    let insns = cs.disasm(&[0x90, DATA_MARKER, 1, 2, 0x90], 0).unwrap();
    assert_eq!(insns.len(), 3);
    assert_eq!(insns[1].size(), 3);
    assert_eq!(insns[1].mnemonic().unwrap(), ".byte");
    assert_eq!(insns[2].address(), 4);
    assert_eq!(cs.skipdata_calls(), 1);
}

#[test]
fn test_skipdata_callback_zero_stops() {
    let mut cs = Session::open(Architecture::X86, Mode::MODE_32).unwrap();
    cs.set_skipdata(Some(SkipData::new().callback(|_: &[u8], _| Ok(0))))
        .unwrap();
    let insns = cs.disasm(&[0x90, 0x90, DATA_MARKER, 0x90], 0).unwrap();
    assert_eq!(insns.len(), 2);
}

#[test]
fn test_skipdata_callback_error_is_contained() {
    let mut cs = arm();
    cs.set_skipdata(Some(
        SkipData::new().callback(|_: &[u8], _| Err(anyhow::anyhow!("bad bytes"))),
    ))
    .unwrap();
    let before = counters();

    let err = cs
        .disasm(&[0x01, 2, 3, 4, DATA_MARKER, 0, 0, 0, DATA_MARKER, 0, 0, 0], 0)
        .unwrap_err();

    match err {
        Error::SkipDataCallback { offset, message } => {
            assert_eq!(offset, 4);
            assert_eq!(message, "bad bytes");
        }
        other => panic!("unexpected error: {other}"),
    }
    assert_eq!(cs.skipdata_calls(), 2);
    let after = counters();
    assert_eq!(after.releases, before.releases + 1);
    assert_eq!(after.live_buffers, before.live_buffers);

    // The failure does not leak into the next call.
    assert_eq!(cs.disasm(&[0x01, 2, 3, 4], 0).unwrap().len(), 1);
}

#[test]
fn test_skipdata_callback_panic_is_contained() {
    let mut cs = Session::open(Architecture::SysZ, Mode::BIG_ENDIAN).unwrap();
    cs.set_skipdata(Some(SkipData::new().callback(|_: &[u8], _| -> anyhow::Result<usize> {
        panic!("boom")
    })))
    .unwrap();
    let before = counters();

    let err = cs.disasm(&[0x01, 2, DATA_MARKER, 0], 0).unwrap_err();
    assert!(matches!(
        &err,
        Error::SkipDataCallback { offset: 2, message } if message == "boom"
    ));
    assert_eq!(counters().live_buffers, before.live_buffers);
}

#[rstest]
#[case(Architecture::Arm, Mode::ARM, vec![0, 4])]
#[case(Architecture::Arm, Mode::THUMB, vec![0, 2, 4, 6])]
#[case(Architecture::Mips, Mode::MIPS32, vec![0, 4])]
#[case(Architecture::SysZ, Mode::BIG_ENDIAN, vec![0, 2, 4, 6])]
#[case(Architecture::X86, Mode::MODE_16, vec![0, 1, 2, 3, 4, 5, 6, 7])]
fn test_failed_callback_falls_back_to_arch_unit(
    #[case] arch: Architecture,
    #[case] mode: Mode,
    #[case] expected: Vec<usize>,
) {
    let offsets = Arc::new(Mutex::new(Vec::new()));
    let seen = Arc::clone(&offsets);
    let mut cs = Session::open(arch, mode).unwrap();
    cs.set_skipdata(Some(SkipData::new().callback(move |_: &[u8], offset| {
        seen.lock().unwrap().push(offset);
        Err(anyhow::anyhow!("no"))
    })))
    .unwrap();

    let err = cs.disasm(&[DATA_MARKER; 8], 0).unwrap_err();
    assert!(matches!(err, Error::SkipDataCallback { offset: 0, .. }));
    assert_eq!(*offsets.lock().unwrap(), expected);
}

#[test]
fn test_skipdata_mnemonic_with_nul_is_rejected() {
    let mut cs = arm();
    let err = cs
        .set_skipdata(Some(SkipData::new().mnemonic("d\0b")))
        .unwrap_err();
    assert!(matches!(
        err,
        Error::UnsupportedOption { option: "skipdata mnemonic", .. }
    ));
}

#[test]
fn test_from_config() {
    let config = SessionConfig::from_json_str(
        r#"{
            "arch": "x86",
            "mode": "CS_MODE_32",
            "syntax": "att",
            "detail": true,
            "skipdata": { "mnemonic": "db" }
        }"#,
    )
    .unwrap();
    let cs = Session::from_config(&config).unwrap();
    assert_eq!(cs.arch(), Architecture::X86);
    assert_eq!(cs.mode(), Mode::MODE_32);
    assert_eq!(cs.syntax(), Some(Syntax::Att));
    assert!(cs.detail());

    let insns = cs.disasm(&[0x90, DATA_MARKER, 0x90], 0).unwrap();
    assert_eq!(insns.len(), 3);
    assert_eq!(insns[1].mnemonic().unwrap(), "db");
    assert!(insns[1].detailed());
    drop(insns);
    cs.close().unwrap();
}

#[test]
fn test_from_config_skipdata_without_mnemonic() {
    let config = SessionConfig::from_json_str(
        r#"{ "arch": "arm", "mode": "CS_MODE_ARM", "skipdata": {} }"#,
    )
    .unwrap();
    let cs = Session::from_config(&config).unwrap();

    let insns = cs.disasm(&[DATA_MARKER, 0, 0, 0, 0x01, 2, 3, 4], 0).unwrap();
    assert_eq!(insns.len(), 2);
    assert_eq!(insns[0].mnemonic().unwrap(), crate::SKIPDATA_MNEMONIC);
    assert_eq!(insns[0].size(), 4);
}

#[test]
fn test_session_reports_version_and_is_send() {
    fn assert_send<T: Send>() {}
    assert_send::<Session>();

    let cs = arm();
    assert_eq!(cs.version(), crate::ENGINE_ABI_VERSION);
    assert!(!cs.is_diet());
    assert_eq!(cs.arch(), Architecture::Arm);
    assert_eq!(cs.mode(), Mode::ARM);
    cs.close().unwrap();
}
